//! End-to-end rendering properties: artifact dimensions, scaling behavior,
//! centering geometry and batch archive layout.
//!
//! Tests that rasterize glyphs need a real serif family on the host; they
//! locate one through the same probe the service uses at startup and skip
//! quietly when none is installed.

use image::{Rgb, RgbImage};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use sertiko::batch;
use sertiko::batch::rows::ParticipantRecord;
use sertiko::render::fonts::FontSet;
use sertiko::render::{render_certificate, text};

fn load_fonts() -> Option<FontSet> {
    FontSet::load(Path::new("fonts")).ok()
}

fn white_template(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, Rgb([255, 255, 255]))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[test]
fn reference_template_renders_native_size_artifacts() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let template = white_template(3000, 2000);
    let rendered =
        render_certificate(&template, &fonts, "Jane Doe", "Fire Safety", "2025-08-05").unwrap();

    assert_eq!(&rendered.png[..8], b"\x89PNG\r\n\x1a\n");
    let raster = image::load_from_memory(&rendered.png).unwrap();
    assert_eq!(raster.width(), 3000);
    assert_eq!(raster.height(), 2000);

    assert_eq!(&rendered.pdf[..4], b"%PDF");
    assert!(contains(&rendered.pdf, b"/MediaBox"));
}

#[test]
fn half_size_template_renders_half_size_raster() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let template = white_template(1500, 1000);
    let rendered =
        render_certificate(&template, &fonts, "Jane Doe", "Fire Safety", "2025-08-05").unwrap();

    let raster = image::load_from_memory(&rendered.png).unwrap();
    assert_eq!((raster.width(), raster.height()), (1500, 1000));
}

#[test]
fn rendering_leaves_the_shared_template_untouched() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let template = white_template(600, 400);
    let before = template.clone();
    render_certificate(&template, &fonts, "Jane Doe", "Fire Safety", "2025-08-05").unwrap();
    assert_eq!(template, before);
}

#[test]
fn centered_text_midpoint_matches_canvas_midpoint() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let mut canvas = white_template(800, 200);
    let font = fonts.get(sertiko::render::layout::FontStyle::Regular);
    let (x, width) = text::draw_centered(&mut canvas, font, 40.0, 50, Rgb([0, 0, 0]), "Jane Doe");

    assert!(x >= 0);
    let midpoint = x as f32 + width as f32 / 2.0;
    assert!(
        (midpoint - 400.0).abs() <= 1.0,
        "text midpoint {} not at canvas midpoint",
        midpoint
    );
}

#[tokio::test]
async fn batch_archives_one_pair_per_record_with_distinct_names() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let record = |name: &str| ParticipantRecord {
        name: name.to_string(),
        course: "Fire Safety".to_string(),
        date: "2025-08-05".to_string(),
    };
    // Duplicate names must still produce distinct archive entries.
    let records = vec![record("Jane Doe"), record("Jane Doe"), record("John Roe")];

    let archive = batch::run(
        Arc::new(white_template(300, 200)),
        Arc::new(fonts),
        records,
    )
    .await
    .unwrap();

    let zip = zip::ZipArchive::new(Cursor::new(archive)).unwrap();
    let mut names: Vec<&str> = zip.file_names().collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec![
            "certificates/001_Jane_Doe.pdf",
            "certificates/001_Jane_Doe.png",
            "certificates/002_Jane_Doe.pdf",
            "certificates/002_Jane_Doe.png",
            "certificates/003_John_Roe.pdf",
            "certificates/003_John_Roe.png",
        ]
    );
}

#[test]
fn zero_dimension_template_is_rejected() {
    let Some(fonts) = load_fonts() else {
        eprintln!("skipping: no serif font family installed");
        return;
    };

    let template = RgbImage::new(0, 10);
    let err = render_certificate(&template, &fonts, "Jane Doe", "Fire Safety", "2025-08-05")
        .unwrap_err();
    assert!(matches!(
        err,
        sertiko::render::RenderError::EmptyTemplate
    ));
}

#[test]
fn template_loading_classifies_input_failures() {
    let dir = tempfile::tempdir().unwrap();

    let missing = dir.path().join("template.png");
    assert!(matches!(
        batch::load_template(&missing),
        Err(batch::BatchError::MissingTemplate)
    ));

    let garbage = dir.path().join("garbage.png");
    std::fs::write(&garbage, b"not an image").unwrap();
    assert!(matches!(
        batch::load_template(&garbage),
        Err(batch::BatchError::TemplateDecode(_))
    ));

    let good = dir.path().join("good.png");
    let mut bytes = Vec::new();
    white_template(12, 8)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(&good, &bytes).unwrap();
    let template = batch::load_template(&good).unwrap();
    assert_eq!(template.dimensions(), (12, 8));
}
