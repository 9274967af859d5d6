//! Certificate fonts: regular, italic and bold weights of one serif family,
//! loaded once at startup. Missing fonts are a startup failure, never a
//! per-record one.

use rusttype::Font;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::layout::FontStyle;

#[derive(Debug, Error)]
pub enum FontError {
    #[error(
        "no serif font family found (looked for DejaVu Serif / Liberation Serif under {0}); \
         set FONTS_DIR or install fonts-dejavu / fonts-liberation"
    )]
    NotFound(String),
    #[error("failed to read font file {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),
    #[error("failed to parse font file {0}")]
    Parse(PathBuf),
}

// Regular / italic / bold file names per known family.
const FAMILIES: [[&str; 3]; 2] = [
    [
        "DejaVuSerif.ttf",
        "DejaVuSerif-Italic.ttf",
        "DejaVuSerif-Bold.ttf",
    ],
    [
        "LiberationSerif-Regular.ttf",
        "LiberationSerif-Italic.ttf",
        "LiberationSerif-Bold.ttf",
    ],
];

const SYSTEM_FONT_DIRS: [&str; 4] = [
    "/usr/share/fonts/truetype/dejavu",
    "/usr/share/fonts/truetype/liberation",
    "/usr/share/fonts/TTF",
    "/System/Library/Fonts/Supplemental",
];

pub struct FontSet {
    regular: Font<'static>,
    italic: Font<'static>,
    bold: Font<'static>,
}

impl FontSet {
    /// Probes `fonts_dir` first, then the standard system font directories,
    /// for a complete regular/italic/bold triple of one family.
    pub fn load(fonts_dir: &Path) -> Result<Self, FontError> {
        let mut dirs: Vec<PathBuf> = vec![fonts_dir.to_path_buf()];
        dirs.extend(SYSTEM_FONT_DIRS.iter().map(PathBuf::from));

        for dir in &dirs {
            for family in FAMILIES {
                let paths: Vec<PathBuf> = family.iter().map(|f| dir.join(f)).collect();
                if paths.iter().all(|p| p.exists()) {
                    return Ok(Self {
                        regular: load_font(&paths[0])?,
                        italic: load_font(&paths[1])?,
                        bold: load_font(&paths[2])?,
                    });
                }
            }
        }

        Err(FontError::NotFound(fonts_dir.display().to_string()))
    }

    pub fn get(&self, style: FontStyle) -> &Font<'static> {
        match style {
            FontStyle::Regular => &self.regular,
            FontStyle::Italic => &self.italic,
            FontStyle::Bold => &self.bold,
        }
    }
}

fn load_font(path: &Path) -> Result<Font<'static>, FontError> {
    let data = std::fs::read(path).map_err(|e| FontError::Read(path.to_path_buf(), e))?;
    Font::try_from_vec(data).ok_or_else(|| FontError::Parse(path.to_path_buf()))
}
