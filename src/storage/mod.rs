use chrono::Utc;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const TEMPLATE_FILENAME: &str = "template.png";

pub fn generate_batch_id() -> String {
    format!(
        "{}_{}",
        Utc::now().format("%Y%m%d"),
        &Uuid::new_v4().to_string()[..8]
    )
}

pub fn template_path(upload_folder: &Path) -> PathBuf {
    upload_folder.join(TEMPLATE_FILENAME)
}

/// Makes a participant name safe as a file stem inside the archive.
pub fn clean_filename(name: &str) -> String {
    name.replace([' ', '/'], "_")
}

pub fn ensure_dirs(upload_folder: &Path) -> std::io::Result<()> {
    std::fs::create_dir_all(upload_folder)
}
