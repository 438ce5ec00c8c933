use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDateTime, Timelike};
use csv::StringRecord;
use migration::{Migrator, MigratorTrait};
use model::entities::{date_dim, department, system, utilization};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Database, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Import failures that abort the run. Bad individual rows are skipped
/// with a warning instead.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("no utilization column found (expected a header containing `util`)")]
    MissingUtilizationColumn,
}

/// Header positions of the columns the importer consumes.
#[derive(Debug)]
struct ColumnIndexes {
    timestamp: usize,
    system: usize,
    department: usize,
    utilization: usize,
}

fn locate_columns(headers: &StringRecord) -> Result<ColumnIndexes, ImportError> {
    let find = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(ImportError::MissingColumn(name))
    };
    // The utilization column name varies between exports; match it by
    // substring, as the source files only agree on containing "util".
    let utilization = headers
        .iter()
        .position(|h| h.trim().to_lowercase().contains("util"))
        .ok_or(ImportError::MissingUtilizationColumn)?;

    Ok(ColumnIndexes {
        timestamp: find("timestamp")?,
        system: find("system")?,
        department: find("department")?,
        utilization,
    })
}

fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M"))
        .ok()
}

async fn get_or_create_system(
    db: &DatabaseConnection,
    cache: &mut HashMap<String, i32>,
    name: &str,
) -> Result<i32> {
    if let Some(id) = cache.get(name) {
        return Ok(*id);
    }
    let existing = system::Entity::find()
        .filter(system::Column::SystemName.eq(name))
        .one(db)
        .await?;
    let id = match existing {
        Some(row) => row.system_id,
        None => {
            system::ActiveModel {
                system_name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?
            .system_id
        }
    };
    cache.insert(name.to_string(), id);
    Ok(id)
}

async fn get_or_create_department(
    db: &DatabaseConnection,
    cache: &mut HashMap<String, i32>,
    name: &str,
) -> Result<i32> {
    if let Some(id) = cache.get(name) {
        return Ok(*id);
    }
    let existing = department::Entity::find()
        .filter(department::Column::DepartmentName.eq(name))
        .one(db)
        .await?;
    let id = match existing {
        Some(row) => row.dept_id,
        None => {
            department::ActiveModel {
                department_name: Set(name.to_string()),
                ..Default::default()
            }
            .insert(db)
            .await?
            .dept_id
        }
    };
    cache.insert(name.to_string(), id);
    Ok(id)
}

/// Date rows are keyed by calendar date; the stored time and hour are
/// whatever observation first created the row.
async fn get_or_create_date(
    db: &DatabaseConnection,
    cache: &mut HashMap<chrono::NaiveDate, i32>,
    timestamp: NaiveDateTime,
) -> Result<i32> {
    let usage_date = timestamp.date();
    if let Some(key) = cache.get(&usage_date) {
        return Ok(*key);
    }
    let existing = date_dim::Entity::find()
        .filter(date_dim::Column::UsageDate.eq(usage_date))
        .one(db)
        .await?;
    let key = match existing {
        Some(row) => row.date_key,
        None => {
            date_dim::ActiveModel {
                usage_date: Set(usage_date),
                usage_time: Set(timestamp.time()),
                year: Set(timestamp.year()),
                month: Set(timestamp.month() as i32),
                day: Set(timestamp.day() as i32),
                hour: Set(timestamp.hour() as i32),
                ..Default::default()
            }
            .insert(db)
            .await?
            .date_key
        }
    };
    cache.insert(usage_date, key);
    Ok(key)
}

/// Counts accumulated over one importer run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub inserted: u64,
    pub duplicates: u64,
    pub skipped: u64,
    pub systems: usize,
    pub departments: usize,
    pub dates: usize,
}

pub async fn import_csv(csv_path: &str, database_url: &str) -> Result<()> {
    info!("Importing utilization observations from {}", csv_path);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("failed to connect to {}", database_url))?;
    Migrator::up(&db, None)
        .await
        .context("failed to prepare warehouse schema")?;

    let summary = import_records(&db, csv_path).await?;

    info!(
        "Import complete: {} facts inserted, {} duplicates, {} rows skipped",
        summary.inserted, summary.duplicates, summary.skipped
    );
    info!(
        "Dimensions: {} systems, {} departments, {} dates",
        summary.systems, summary.departments, summary.dates
    );

    Ok(())
}

/// The record loop, separated from connection setup so it can run against
/// any prepared database.
async fn import_records(db: &DatabaseConnection, csv_path: &str) -> Result<ImportSummary> {
    let mut reader = csv::Reader::from_path(csv_path)
        .with_context(|| format!("failed to open {}", csv_path))?;
    let headers = reader.headers()?.clone();
    let columns = locate_columns(&headers)?;

    let mut system_cache: HashMap<String, i32> = HashMap::new();
    let mut department_cache: HashMap<String, i32> = HashMap::new();
    let mut date_cache: HashMap<chrono::NaiveDate, i32> = HashMap::new();

    let mut inserted: u64 = 0;
    let mut duplicates: u64 = 0;
    let mut skipped: u64 = 0;

    for (line, result) in reader.records().enumerate() {
        let record = result?;

        let Some(timestamp) = record.get(columns.timestamp).and_then(parse_timestamp) else {
            warn!("Skipping row {}: unparseable timestamp", line + 1);
            skipped += 1;
            continue;
        };
        let Ok(utilization_pct) = record
            .get(columns.utilization)
            .unwrap_or_default()
            .trim()
            .parse::<f64>()
        else {
            warn!("Skipping row {}: unparseable utilization value", line + 1);
            skipped += 1;
            continue;
        };
        let system_name = record.get(columns.system).unwrap_or_default().trim();
        let department_name = record.get(columns.department).unwrap_or_default().trim();
        if system_name.is_empty() || department_name.is_empty() {
            warn!("Skipping row {}: empty system or department", line + 1);
            skipped += 1;
            continue;
        }

        let system_id = get_or_create_system(db, &mut system_cache, system_name).await?;
        let dept_id = get_or_create_department(db, &mut department_cache, department_name).await?;
        let date_key = get_or_create_date(db, &mut date_cache, timestamp).await?;

        let fact = utilization::ActiveModel {
            date_key: Set(date_key),
            dept_id: Set(dept_id),
            system_id: Set(system_id),
            utilization_pct: Set(utilization_pct),
            usage_date: Set(timestamp.date()),
            usage_time: Set(timestamp.time()),
            ..Default::default()
        };

        let affected = utilization::Entity::insert(fact)
            .on_conflict(
                OnConflict::columns([
                    utilization::Column::DateKey,
                    utilization::Column::DeptId,
                    utilization::Column::SystemId,
                    utilization::Column::UsageTime,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
        if affected == 0 {
            debug!("Row {} is a duplicate observation", line + 1);
            duplicates += 1;
        } else {
            inserted += affected;
        }
    }

    Ok(ImportSummary {
        inserted,
        duplicates,
        skipped,
        systems: system_cache.len(),
        departments: department_cache.len(),
        dates: date_cache.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::EntityTrait;
    use std::io::Write;
    use tempfile::NamedTempFile;

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");
        Migrator::up(&db, None).await.expect("Migrations failed");
        db
    }

    #[tokio::test]
    async fn import_builds_dimensions_and_ignores_duplicates() {
        let db = setup_db().await;

        // Two HVAC-1 observations with one exact repeat, one row with an
        // unusable timestamp, and one observation for a second system.
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "timestamp,system,department,utilization_pct").unwrap();
        writeln!(file, "2024-03-01 08:00:00,HVAC-1,Facilities,72.5").unwrap();
        writeln!(file, "2024-03-01 09:30:00,HVAC-1,Facilities,40.0").unwrap();
        writeln!(file, "2024-03-01 08:00:00,HVAC-1,Facilities,72.5").unwrap();
        writeln!(file, "not-a-timestamp,Press-7,Production,55.0").unwrap();
        writeln!(file, "2024-03-02 07:15:00,Press-7,Production,91.2").unwrap();
        file.flush().unwrap();

        let summary = import_records(&db, file.path().to_str().unwrap())
            .await
            .expect("Import failed");

        assert_eq!(summary.inserted, 3);
        assert_eq!(summary.duplicates, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.systems, 2);
        assert_eq!(summary.departments, 2);
        assert_eq!(summary.dates, 2);

        let facts = utilization::Entity::find().all(&db).await.unwrap();
        assert_eq!(facts.len(), 3);

        // The skipped row never touched the dimensions; Press-7 and
        // Production exist only because of the valid final row.
        let systems = system::Entity::find().all(&db).await.unwrap();
        let names: Vec<&str> = systems.iter().map(|s| s.system_name.as_str()).collect();
        assert_eq!(names, vec!["HVAC-1", "Press-7"]);

        let departments = department::Entity::find().all(&db).await.unwrap();
        assert_eq!(departments.len(), 2);

        let dates = date_dim::Entity::find().all(&db).await.unwrap();
        assert_eq!(dates.len(), 2);
    }

    #[tokio::test]
    async fn rerunning_the_import_inserts_nothing_new() {
        let db = setup_db().await;

        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(file, "timestamp,system,department,utilization_pct").unwrap();
        writeln!(file, "2024-06-10 14:30:00,Press-7,Production,55.0").unwrap();
        file.flush().unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let first = import_records(&db, &path).await.expect("Import failed");
        assert_eq!(first.inserted, 1);
        assert_eq!(first.duplicates, 0);

        let second = import_records(&db, &path).await.expect("Import failed");
        assert_eq!(second.inserted, 0);
        assert_eq!(second.duplicates, 1);

        let facts = utilization::Entity::find().all(&db).await.unwrap();
        assert_eq!(facts.len(), 1);
    }

    #[test]
    fn locates_utilization_column_by_substring() {
        let headers = StringRecord::from(vec!["timestamp", "system", "department", "Utilization_Pct"]);
        let columns = locate_columns(&headers).unwrap();
        assert_eq!(columns.timestamp, 0);
        assert_eq!(columns.utilization, 3);
    }

    #[test]
    fn missing_column_is_an_error() {
        let headers = StringRecord::from(vec!["timestamp", "system", "util"]);
        let err = locate_columns(&headers).unwrap_err();
        assert!(matches!(err, ImportError::MissingColumn("department")));
    }

    #[test]
    fn parses_common_timestamp_shapes() {
        assert!(parse_timestamp("2024-03-01 08:15:00").is_some());
        assert!(parse_timestamp("2024-03-01T08:15:00").is_some());
        assert!(parse_timestamp("2024-03-01 08:15").is_some());
        assert!(parse_timestamp("yesterday").is_none());
    }
}
