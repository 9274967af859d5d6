//! Participant row supplier: CSV in, validated records out. Column order and
//! extra columns are irrelevant; a missing column or an empty required field
//! rejects the whole table before any rendering starts.

use serde::Deserialize;

use super::BatchError;

pub const REQUIRED_COLUMNS: [&str; 3] = ["name", "course", "date"];

#[derive(Debug, Clone, Deserialize)]
pub struct ParticipantRecord {
    pub name: String,
    pub course: String,
    pub date: String,
}

pub fn parse_participants(data: &[u8]) -> Result<Vec<ParticipantRecord>, BatchError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(data);

    let headers = reader.headers().map_err(BatchError::Table)?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(BatchError::MissingColumns);
        }
    }

    let mut records = Vec::new();
    for (i, row) in reader.deserialize::<ParticipantRecord>().enumerate() {
        let row = row.map_err(BatchError::Table)?;
        // Data rows start after the header line.
        let line = i + 2;
        if row.name.trim().is_empty() || row.course.trim().is_empty() || row.date.trim().is_empty()
        {
            return Err(BatchError::EmptyField { line });
        }
        records.push(ParticipantRecord {
            name: row.name.trim().to_string(),
            course: row.course.trim().to_string(),
            date: row.date.trim().to_string(),
        });
    }

    if records.is_empty() {
        return Err(BatchError::NoRows);
    }
    Ok(records)
}

/// The sample table handed out by the download endpoint; it round-trips
/// through parse_participants.
pub fn sample_csv() -> Vec<u8> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    let rows = [
        ("Budi Santoso", "Fire Safety Training", "2025-08-05"),
        ("Siti Rahayu", "Food Hygiene & HACCP", "2025-08-05"),
        ("Agus Wijaya", "First Aid Basics", "2025-08-12"),
    ];
    // Writer::into_inner only fails if flushing fails, which cannot happen
    // for an in-memory buffer.
    writer.write_record(REQUIRED_COLUMNS).ok();
    for (name, course, date) in rows {
        writer.write_record([name, course, date]).ok();
    }
    writer.into_inner().unwrap_or_default()
}
