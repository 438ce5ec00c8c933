#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::{NaiveDate, NaiveTime};
    use migration::{Migrator, MigratorTrait};
    use model::entities::{date_dim, department, system, utilization};
    use sea_orm::{
        ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
    };
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Insert a single utilization observation, creating the dimension
    /// rows on first use of each name/date.
    pub async fn seed_observation(
        db: &DatabaseConnection,
        system_name: &str,
        department_name: &str,
        utilization_pct: f64,
        usage_date: &str,
        usage_time: &str,
    ) {
        let date = NaiveDate::parse_from_str(usage_date, "%Y-%m-%d").expect("bad test date");
        let time = NaiveTime::parse_from_str(usage_time, "%H:%M:%S").expect("bad test time");

        let system_id = match system::Entity::find()
            .filter(system::Column::SystemName.eq(system_name))
            .one(db)
            .await
            .expect("system lookup failed")
        {
            Some(row) => row.system_id,
            None => system::ActiveModel {
                system_name: Set(system_name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test system")
            .system_id,
        };

        let dept_id = match department::Entity::find()
            .filter(department::Column::DepartmentName.eq(department_name))
            .one(db)
            .await
            .expect("department lookup failed")
        {
            Some(row) => row.dept_id,
            None => department::ActiveModel {
                department_name: Set(department_name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await
            .expect("Failed to create test department")
            .dept_id,
        };

        let date_key = match date_dim::Entity::find()
            .filter(date_dim::Column::UsageDate.eq(date))
            .one(db)
            .await
            .expect("date lookup failed")
        {
            Some(row) => row.date_key,
            None => {
                use chrono::{Datelike, Timelike};
                date_dim::ActiveModel {
                    usage_date: Set(date),
                    usage_time: Set(time),
                    year: Set(date.year()),
                    month: Set(date.month() as i32),
                    day: Set(date.day() as i32),
                    hour: Set(time.hour() as i32),
                    ..Default::default()
                }
                .insert(db)
                .await
                .expect("Failed to create test date")
                .date_key
            }
        };

        utilization::ActiveModel {
            date_key: Set(date_key),
            dept_id: Set(dept_id),
            system_id: Set(system_id),
            utilization_pct: Set(utilization_pct),
            usage_date: Set(date),
            usage_time: Set(time),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test observation");
    }

    /// Create AppState for testing
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        AppState { db }
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is determined by the RUST_LOG environment variable,
    /// defaulting to WARN if not set.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> (Router, DatabaseConnection) {
        let _ = init_test_tracing();

        let state = setup_test_app_state().await;
        let db = state.db.clone();
        let router = create_router(state);
        (router, db)
    }
}
