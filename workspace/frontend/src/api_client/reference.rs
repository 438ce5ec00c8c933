use common::{DepartmentDto, SystemDto};

/// Fetch the system names for the system filter dropdown.
pub async fn get_systems() -> Result<Vec<SystemDto>, String> {
    super::get("/systems").await
}

/// Fetch the department names for the department filter dropdown.
pub async fn get_departments() -> Result<Vec<DepartmentDto>, String> {
    super::get("/departments").await
}
