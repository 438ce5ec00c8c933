use axum::{extract::State, http::StatusCode, response::Json};
use common::SystemDto;
use model::entities::system;
use sea_orm::{EntityTrait, QueryOrder};
use tracing::{debug, error, instrument};

use crate::schemas::{AppState, ErrorResponse};

/// List all known systems, in warehouse insertion order, for the system
/// filter dropdown.
#[utoipa::path(
    get,
    path = "/systems",
    tag = "reference",
    responses(
        (status = 200, description = "Systems retrieved successfully", body = Vec<SystemDto>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_systems(
    State(state): State<AppState>,
) -> Result<Json<Vec<SystemDto>>, (StatusCode, Json<ErrorResponse>)> {
    let systems = system::Entity::find()
        .order_by_asc(system::Column::SystemId)
        .all(&state.db)
        .await
        .map_err(|e| {
            error!("Failed to list systems: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to list systems".to_string(),
                }),
            )
        })?;

    debug!("Listed {} systems", systems.len());
    Ok(Json(
        systems
            .into_iter()
            .map(|s| SystemDto {
                system_name: s.system_name,
            })
            .collect(),
    ))
}
