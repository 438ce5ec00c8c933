use common::{DepartmentDto, SortColumn, SortOrder, SystemDto, UtilizationRecord};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
}

/// Error response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::systems::list_systems,
        crate::handlers::departments::list_departments,
        crate::handlers::utilization::filter_utilization,
    ),
    components(
        schemas(
            ErrorResponse,
            HealthResponse,
            SystemDto,
            DepartmentDto,
            UtilizationRecord,
            SortColumn,
            SortOrder,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "reference", description = "Filter dropdown reference lists"),
        (name = "utilization", description = "Filtered and sorted utilization observations"),
    ),
    info(
        title = "Watchout API",
        description = "System utilization warehouse API backing the Watchout dashboard",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
