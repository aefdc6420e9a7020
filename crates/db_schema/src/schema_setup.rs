use diesel::{Connection, PgConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use fotogram_utils::error::FotogramResult;
use tracing::info;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!();

/// Runs pending migrations over a blocking connection. Called once at
/// pool build, before any request is served.
pub fn run(db_url: &str) -> FotogramResult<()> {
  let mut conn = PgConnection::establish(db_url)?;
  info!("Running database migrations (this may take a while)...");
  conn
    .run_pending_migrations(MIGRATIONS)
    .map_err(|e| anyhow::anyhow!("Couldn't run DB Migrations: {e}"))?;
  info!("Database migrations complete.");
  Ok(())
}
