use axum::{extract::State, http::StatusCode, response::Json};
use common::DepartmentDto;
use model::entities::department;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::{debug, error, instrument};

use crate::schemas::{AppState, ErrorResponse};

/// List all known departments, in warehouse insertion order, for the
/// department filter dropdown.
#[utoipa::path(
    get,
    path = "/departments",
    tag = "reference",
    responses(
        (status = 200, description = "Departments retrieved successfully", body = Vec<DepartmentDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentDto>>, (StatusCode, Json<ErrorResponse>)> {
    let departments = department::Entity::find()
        .order_by_asc(department::Column::DeptId)
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to list departments: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list departments".to_string(),
                }),
            )
        })?;

    debug!("Listed {} departments", departments.len());
    Ok(Json(
        departments
            .into_iter()
            .map(|d| DepartmentDto {
                department_name: d.department_name,
            })
            .collect(),
    ))
}
