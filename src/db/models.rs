use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, FromRow, Serialize, Deserialize)]
pub struct Batch {
    pub id: i32,
    pub batch_id: String,
    pub source_filename: String,
    pub record_count: i32,
    pub created_at: DateTime<Utc>,
    pub status: String,
}
