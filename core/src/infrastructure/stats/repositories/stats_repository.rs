use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    stats::{
        ports::StatsRepository,
        value_objects::{
            DailyCount, DatabaseSummary, ItemDamageCount, LocationCount, SummaryTotals,
        },
    },
};

#[derive(Debug, Clone)]
pub struct PostgresStatsRepository {
    pub db: DatabaseConnection,
}

impl PostgresStatsRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl StatsRepository for PostgresStatsRepository {
    async fn totals(&self, cutoff_24h: String) -> Result<SummaryTotals, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              COUNT(*) AS total,
              COUNT(*) FILTER (WHERE lower(status) = 'bagus') AS bagus,
              COUNT(*) FILTER (WHERE lower(status) = 'rusak') AS rusak,
              COUNT(*) FILTER (WHERE ts_utc >= $1) AS last24h
            FROM inspeksi
            "#,
            [cutoff_24h.into()],
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get summary totals: {}", e);
            CoreError::InternalServerError
        })?;

        // COUNT never returns NULL, so a missing row only happens on an
        // impossible empty result set; fall back to zeros regardless.
        let totals = row
            .map(|row| {
                Ok::<_, sea_orm::DbErr>(SummaryTotals {
                    total: row.try_get("", "total")?,
                    bagus: row.try_get("", "bagus")?,
                    rusak: row.try_get("", "rusak")?,
                    last24h: row.try_get("", "last24h")?,
                })
            })
            .transpose()
            .map_err(|e| {
                error!("Failed to read summary totals: {}", e);
                CoreError::InternalServerError
            })?
            .unwrap_or_default();

        Ok(totals)
    }

    async fn top_locations(&self, limit: u64) -> Result<Vec<LocationCount>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              L.nama_lokasi AS lokasi,
              COUNT(X.id_inspeksi) AS count
            FROM lokasi L
            INNER JOIN area A ON A.id_lokasi = L.id_lokasi
            INNER JOIN item I ON I.id_area = A.id_area
            INNER JOIN inspeksi X ON X.item_id = I.id_item
            GROUP BY L.id_lokasi, L.nama_lokasi
            ORDER BY count DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get top locations: {}", e);
            CoreError::InternalServerError
        })?;

        let counts = rows
            .into_iter()
            .filter_map(|row| {
                let lokasi: String = row.try_get("", "lokasi").ok()?;
                let count: i64 = row.try_get("", "count").ok()?;
                Some(LocationCount { lokasi, count })
            })
            .collect();

        Ok(counts)
    }

    async fn top_damaged_items(&self, limit: u64) -> Result<Vec<ItemDamageCount>, CoreError> {
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              I.nama_item AS item,
              COUNT(X.id_inspeksi) AS count
            FROM item I
            INNER JOIN inspeksi X ON X.item_id = I.id_item
            WHERE lower(X.status) = 'rusak'
            GROUP BY I.id_item, I.nama_item
            ORDER BY count DESC
            LIMIT $1
            "#,
            [(limit as i64).into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get top damaged items: {}", e);
            CoreError::InternalServerError
        })?;

        let counts = rows
            .into_iter()
            .filter_map(|row| {
                let item: String = row.try_get("", "item").ok()?;
                let count: i64 = row.try_get("", "count").ok()?;
                Some(ItemDamageCount { item, count })
            })
            .collect();

        Ok(counts)
    }

    async fn daily_series(&self, since: String) -> Result<Vec<DailyCount>, CoreError> {
        // ts_utc is fixed-width and zero-padded, so the 10-char prefix is the
        // date and the >= comparison is chronological.
        let stmt = Statement::from_sql_and_values(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              substr(ts_utc, 1, 10) AS day,
              COUNT(*) AS total,
              COUNT(*) FILTER (WHERE lower(status) = 'bagus') AS bagus,
              COUNT(*) FILTER (WHERE lower(status) = 'rusak') AS rusak
            FROM inspeksi
            WHERE ts_utc >= $1
            GROUP BY day
            ORDER BY day ASC
            "#,
            [since.into()],
        );

        let rows = self.db.query_all(stmt).await.map_err(|e| {
            error!("Failed to get daily series: {}", e);
            CoreError::InternalServerError
        })?;

        let series = rows
            .into_iter()
            .filter_map(|row| {
                let day: String = row.try_get("", "day").ok()?;
                let total: i64 = row.try_get("", "total").ok()?;
                let bagus: i64 = row.try_get("", "bagus").ok()?;
                let rusak: i64 = row.try_get("", "rusak").ok()?;
                Some(DailyCount {
                    day,
                    total,
                    bagus,
                    rusak,
                })
            })
            .collect();

        Ok(series)
    }

    async fn database_summary(&self) -> Result<DatabaseSummary, CoreError> {
        let stmt = Statement::from_string(
            sea_orm::DatabaseBackend::Postgres,
            r#"
            SELECT
              (SELECT COUNT(*) FROM lokasi) AS lokasi,
              (SELECT COUNT(*) FROM area) AS area,
              (SELECT COUNT(*) FROM item) AS item,
              (SELECT COUNT(*) FROM master_users) AS master_users,
              (SELECT COUNT(*) FROM terminals) AS terminals,
              (SELECT COUNT(*) FROM legacy_inspections) AS inspections_legacy,
              (SELECT COUNT(*) FROM inspeksi) AS inspeksi
            "#,
        );

        let row = self.db.query_one(stmt).await.map_err(|e| {
            error!("Failed to get database summary: {}", e);
            CoreError::InternalServerError
        })?;

        let summary = row
            .map(|row| {
                Ok::<_, sea_orm::DbErr>(DatabaseSummary {
                    lokasi: row.try_get("", "lokasi")?,
                    area: row.try_get("", "area")?,
                    item: row.try_get("", "item")?,
                    master_users: row.try_get("", "master_users")?,
                    terminals: row.try_get("", "terminals")?,
                    inspections_legacy: row.try_get("", "inspections_legacy")?,
                    inspeksi: row.try_get("", "inspeksi")?,
                })
            })
            .transpose()
            .map_err(|e| {
                error!("Failed to read database summary: {}", e);
                CoreError::InternalServerError
            })?
            .unwrap_or_default();

        Ok(summary)
    }
}
