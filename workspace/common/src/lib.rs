//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' response payloads so the
//! frontend can deserialize API responses without duplicating shapes, and
//! they carry the dashboard's sort/filter state so the query the frontend
//! builds and the query the backend parses agree on names and defaults.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One observation of a system's usage percentage at a department,
/// date, and time. Rows are read-only: fetched, rendered, discarded on
/// the next fetch.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct UtilizationRecord {
    pub system_name: String,
    pub department_name: String,
    pub utilization_pct: f64,
    /// Calendar date of the observation, `YYYY-MM-DD`.
    pub usage_date: String,
    /// Time of day of the observation, `HH:MM:SS`.
    pub usage_time: String,
}

impl UtilizationRecord {
    /// Chart label for this record: date and time concatenated, matching
    /// the row the label is aligned with.
    pub fn chart_label(&self) -> String {
        format!("{} {}", self.usage_date, self.usage_time)
    }
}

/// Derive the chart's label and value arrays from an ordered record slice.
/// Both arrays are index-aligned with the input, so the chart always shows
/// the same record set, in the same order, as the table built from it.
pub fn chart_series(records: &[UtilizationRecord]) -> (Vec<String>, Vec<f64>) {
    let labels = records.iter().map(|r| r.chart_label()).collect();
    let values = records.iter().map(|r| r.utilization_pct).collect();
    (labels, values)
}

/// Reference entity for the system filter dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SystemDto {
    pub system_name: String,
}

/// Reference entity for the department filter dropdown.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DepartmentDto {
    pub department_name: String,
}

/// The five sortable columns of a utilization record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    SystemName,
    DepartmentName,
    UtilizationPct,
    #[default]
    UsageDate,
    UsageTime,
}

impl SortColumn {
    /// Wire name of the column, as sent in `sort_by`.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortColumn::SystemName => "system_name",
            SortColumn::DepartmentName => "department_name",
            SortColumn::UtilizationPct => "utilization_pct",
            SortColumn::UsageDate => "usage_date",
            SortColumn::UsageTime => "usage_time",
        }
    }

    /// Parse a `sort_by` value, falling back to the default column for
    /// anything outside the whitelist. The server never rejects a bad
    /// sort parameter.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "system_name" => SortColumn::SystemName,
            "department_name" => SortColumn::DepartmentName,
            "utilization_pct" => SortColumn::UtilizationPct,
            "usage_date" => SortColumn::UsageDate,
            "usage_time" => SortColumn::UsageTime,
            _ => SortColumn::default(),
        }
    }
}

/// Server-side sort direction. The wire form is upper-case (`ASC`/`DESC`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, Default)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Parse a `sort_order` value; anything but `ASC`/`DESC` falls back
    /// to descending.
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "ASC" => SortOrder::Asc,
            "DESC" => SortOrder::Desc,
            _ => SortOrder::default(),
        }
    }
}

/// The (column, direction) pair governing server-side ordering.
/// Initial state is `usage_date` descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub column: SortColumn,
    pub order: SortOrder,
}

impl SortState {
    /// Transition for a header click: clicking the current column toggles
    /// the direction, clicking a different column selects it and resets
    /// the direction to descending.
    pub fn click(self, column: SortColumn) -> Self {
        if self.column == column {
            SortState {
                column,
                order: self.order.toggled(),
            }
        } else {
            SortState {
                column,
                order: SortOrder::Desc,
            }
        }
    }
}

/// Everything the dashboard sends to `/utilization/filter`: the sort state
/// plus the optional system/department filters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UtilizationQuery {
    pub sort: SortState,
    pub system: Option<String>,
    pub department: Option<String>,
}

impl UtilizationQuery {
    /// Build the query string. Sort parameters are always present (the view
    /// sends them even at their defaults); filter parameters are omitted
    /// when unset.
    pub fn to_query_string(&self) -> String {
        let mut query = format!(
            "sort_by={}&sort_order={}",
            self.sort.column.as_str(),
            self.sort.order.as_str()
        );
        if let Some(system) = &self.system {
            query.push_str(&format!("&system={}", urlencoding::encode(system)));
        }
        if let Some(department) = &self.department {
            query.push_str(&format!("&department={}", urlencoding::encode(department)));
        }
        query
    }
}
