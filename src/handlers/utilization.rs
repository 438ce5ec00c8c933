use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use chrono::{NaiveDate, NaiveTime};
use common::{SortColumn, SortOrder, UtilizationRecord};
use model::entities::{department, system, utilization};
use sea_orm::{
    ColumnTrait, EntityTrait, FromQueryResult, JoinType, Order, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};
use serde::Deserialize;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

use crate::schemas::{AppState, ErrorResponse};

/// Query parameters accepted by the filter endpoint. Sort parameters are
/// taken as raw strings so out-of-whitelist values fall back to the
/// defaults instead of rejecting the request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UtilizationFilterQuery {
    /// Sort column, one of the five record fields (default usage_date)
    pub sort_by: Option<String>,
    /// Sort direction, ASC or DESC (default DESC)
    pub sort_order: Option<String>,
    /// Exact system name to filter on
    pub system: Option<String>,
    /// Exact department name to filter on
    pub department: Option<String>,
}

/// Row shape produced by the fact/dimension join.
#[derive(Debug, FromQueryResult)]
struct UtilizationRow {
    system_name: String,
    department_name: String,
    utilization_pct: f64,
    usage_date: NaiveDate,
    usage_time: NaiveTime,
}

impl From<UtilizationRow> for UtilizationRecord {
    fn from(row: UtilizationRow) -> Self {
        Self {
            system_name: row.system_name,
            department_name: row.department_name,
            utilization_pct: row.utilization_pct,
            usage_date: row.usage_date.format("%Y-%m-%d").to_string(),
            usage_time: row.usage_time.format("%H:%M:%S").to_string(),
        }
    }
}

/// Absent, empty, and the literal string "null" all mean "no filter".
/// The original dashboard sent "null" for a cleared dropdown.
fn filter_value(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != "null")
}

/// Filtered, server-side-sorted utilization observations.
#[utoipa::path(
    get,
    path = "/utilization/filter",
    tag = "utilization",
    responses(
        (status = 200, description = "Matching observations, sorted as requested", body = Vec<UtilizationRecord>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn filter_utilization(
    Query(query): Query<UtilizationFilterQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<UtilizationRecord>>, (StatusCode, Json<ErrorResponse>)> {
    let sort_column = query
        .sort_by
        .as_deref()
        .map(SortColumn::parse_or_default)
        .unwrap_or_default();
    let sort_order = query
        .sort_order
        .as_deref()
        .map(SortOrder::parse_or_default)
        .unwrap_or_default();
    let order = match sort_order {
        SortOrder::Asc => Order::Asc,
        SortOrder::Desc => Order::Desc,
    };

    let mut select = utilization::Entity::find()
        .select_only()
        .column_as(system::Column::SystemName, "system_name")
        .column_as(department::Column::DepartmentName, "department_name")
        .column(utilization::Column::UtilizationPct)
        .column(utilization::Column::UsageDate)
        .column(utilization::Column::UsageTime)
        .join(JoinType::InnerJoin, utilization::Relation::System.def())
        .join(JoinType::InnerJoin, utilization::Relation::Department.def());

    if let Some(system_name) = filter_value(query.system) {
        select = select.filter(system::Column::SystemName.eq(system_name));
    }
    if let Some(department_name) = filter_value(query.department) {
        select = select.filter(department::Column::DepartmentName.eq(department_name));
    }

    select = match sort_column {
        SortColumn::SystemName => select.order_by(system::Column::SystemName, order),
        SortColumn::DepartmentName => select.order_by(department::Column::DepartmentName, order),
        SortColumn::UtilizationPct => select.order_by(utilization::Column::UtilizationPct, order),
        SortColumn::UsageDate => select.order_by(utilization::Column::UsageDate, order),
        SortColumn::UsageTime => select.order_by(utilization::Column::UsageTime, order),
    };
    // Stable tiebreak carried over from the original warehouse query.
    select = select.order_by(utilization::Column::UsageTime, Order::Desc);

    let rows = select
        .into_model::<UtilizationRow>()
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to query utilization facts: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to query utilization facts".to_string(),
                }),
            )
        })?;

    debug!(
        "Returning {} observations sorted by {} {}",
        rows.len(),
        sort_column.as_str(),
        sort_order.as_str()
    );
    Ok(Json(rows.into_iter().map(UtilizationRecord::from).collect()))
}
