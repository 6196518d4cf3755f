//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Durable commits: a write is on disk before the store publishes it
        self.connection
            .pragma_update(None, "synchronous", "FULL")
            .db_context("Failed to set synchronous mode")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Upgrades databases created before the alert flag existed.
    fn apply_migrations(&self) -> Result<()> {
        let has_alert_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('favorites') WHERE name = 'isAlert'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect favorites table")?;

        if !has_alert_column {
            self.connection
                .execute(
                    "ALTER TABLE favorites ADD COLUMN isAlert INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add isAlert column to favorites table")?;
        }

        Ok(())
    }
}
