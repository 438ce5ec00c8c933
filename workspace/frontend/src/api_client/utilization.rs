use common::{UtilizationQuery, UtilizationRecord};

/// Fetch utilization observations matching the current filter and sort
/// state. Ordering is entirely server-side; rows are rendered as received.
pub async fn get_utilization(query: &UtilizationQuery) -> Result<Vec<UtilizationRecord>, String> {
    let endpoint = format!("/utilization/filter?{}", query.to_query_string());
    super::get(&endpoint).await
}
