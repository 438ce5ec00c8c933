#[cfg(test)]
mod integration_tests {
    use crate::test_utils::test_utils::{seed_observation, setup_test_app};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use common::{DepartmentDto, SystemDto, UtilizationRecord};
    use sea_orm::DatabaseConnection;

    /// Three observations spanning two systems and two departments, with
    /// distinct dates, times, and utilization values.
    async fn seed_sample_data(db: &DatabaseConnection) {
        seed_observation(db, "HVAC-1", "Facilities", 72.5, "2024-03-02", "08:00:00").await;
        seed_observation(db, "HVAC-1", "Facilities", 40.0, "2024-03-01", "09:30:00").await;
        seed_observation(db, "Compressor-7", "Production", 91.2, "2024-03-03", "07:15:00").await;
    }

    #[tokio::test]
    async fn test_health_check() {
        let (app, _db) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_list_systems_empty() {
        let (app, _db) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/systems").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<SystemDto> = response.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_list_systems_returns_seeded_names() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/systems").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<SystemDto> = response.json();
        let names: Vec<&str> = body.iter().map(|s| s.system_name.as_str()).collect();
        assert_eq!(names, vec!["HVAC-1", "Compressor-7"]);
    }

    #[tokio::test]
    async fn test_list_departments_returns_seeded_names() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/departments").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<DepartmentDto> = response.json();
        let names: Vec<&str> = body.iter().map(|d| d.department_name.as_str()).collect();
        assert_eq!(names, vec!["Facilities", "Production"]);
    }

    #[tokio::test]
    async fn test_filter_default_sort_is_usage_date_desc() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/utilization/filter").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        let dates: Vec<&str> = body.iter().map(|r| r.usage_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-03", "2024-03-02", "2024-03-01"]);
    }

    #[tokio::test]
    async fn test_filter_sort_by_utilization_asc() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/utilization/filter?sort_by=utilization_pct&sort_order=ASC")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        let values: Vec<f64> = body.iter().map(|r| r.utilization_pct).collect();
        assert_eq!(values, vec![40.0, 72.5, 91.2]);
    }

    #[tokio::test]
    async fn test_filter_by_system_with_time_sort() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/utilization/filter?sort_by=usage_time&sort_order=DESC&system=HVAC-1")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        assert_eq!(body.len(), 2);
        assert!(body.iter().all(|r| r.system_name == "HVAC-1"));
        let times: Vec<&str> = body.iter().map(|r| r.usage_time.as_str()).collect();
        assert_eq!(times, vec!["09:30:00", "08:00:00"]);
    }

    #[tokio::test]
    async fn test_filter_by_system_and_department() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/utilization/filter?sort_by=usage_date&sort_order=DESC&system=HVAC-1&department=Production")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        // No HVAC-1 observation belongs to Production.
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_sort_column_falls_back_to_default() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/utilization/filter?sort_by=id;%20DROP%20TABLE&sort_order=sideways")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        let dates: Vec<&str> = body.iter().map(|r| r.usage_date.as_str()).collect();
        assert_eq!(dates, vec!["2024-03-03", "2024-03-02", "2024-03-01"]);
    }

    #[tokio::test]
    async fn test_literal_null_filter_is_ignored() {
        let (app, db) = setup_test_app().await;
        seed_sample_data(&db).await;
        let server = TestServer::new(app).unwrap();

        // Cleared dropdowns in the original UI sent the string "null".
        let response = server
            .get("/utilization/filter?sort_by=usage_date&sort_order=DESC&system=null&department=")
            .await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        assert_eq!(body.len(), 3);
    }

    #[tokio::test]
    async fn test_same_date_orders_by_time_desc() {
        let (app, db) = setup_test_app().await;
        seed_observation(&db, "HVAC-1", "Facilities", 10.0, "2024-03-01", "06:00:00").await;
        seed_observation(&db, "HVAC-1", "Facilities", 20.0, "2024-03-01", "18:00:00").await;
        seed_observation(&db, "HVAC-1", "Facilities", 30.0, "2024-03-01", "12:00:00").await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/utilization/filter").await;

        response.assert_status(StatusCode::OK);
        let body: Vec<UtilizationRecord> = response.json();
        let times: Vec<&str> = body.iter().map(|r| r.usage_time.as_str()).collect();
        assert_eq!(times, vec!["18:00:00", "12:00:00", "06:00:00"]);
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (app, _db) = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api-docs/openapi.json").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert!(body["paths"]["/utilization/filter"].is_object());
        assert!(body["paths"]["/systems"].is_object());
    }
}
