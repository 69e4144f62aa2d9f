use anyhow::Context;
use sqlx::{postgres::PgPoolOptions, PgPool};
use tracing::{info, warn};

use crate::config::{MongoConfig, DEFAULT_MONGO_DB};

pub async fn connect_postgres(database_url: &str) -> anyhow::Result<PgPool> {
    let db = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("connect to database")?;
    Ok(db)
}

/// Applies the embedded migrations; a failure is logged and startup continues.
pub async fn run_migrations(db: &PgPool) {
    match sqlx::migrate!("./migrations").run(db).await {
        Ok(()) => info!("migrations applied"),
        Err(e) => warn!(error = %e, "migration failed; continuing"),
    }
}

pub async fn connect_mongo(config: &MongoConfig) -> anyhow::Result<mongodb::Database> {
    let client = mongodb::Client::with_uri_str(&config.uri)
        .await
        .context("connect to mongodb")?;
    let db = match &config.database {
        Some(name) => client.database(name),
        None => client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_MONGO_DB)),
    };
    info!(database = %db.name(), "mongodb ready");
    Ok(db)
}
