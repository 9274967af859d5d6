mod models;

pub use models::*;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::Arc;

pub type DbPool = Arc<PgPool>;

pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;

    Ok(Arc::new(pool))
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

pub async fn insert_batch(
    pool: &PgPool,
    batch_id: &str,
    source_filename: &str,
    record_count: i32,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO batches (batch_id, source_filename, record_count, status)
        VALUES ($1, $2, $3, 'completed')
        "#,
    )
    .bind(batch_id)
    .bind(source_filename)
    .bind(record_count)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn list_batches(pool: &PgPool) -> Result<Vec<Batch>, sqlx::Error> {
    sqlx::query_as::<_, Batch>(
        "SELECT * FROM batches ORDER BY created_at DESC LIMIT 1000",
    )
    .fetch_all(pool)
    .await
}
