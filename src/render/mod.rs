//! Certificate rendering engine.
//!
//! One call renders one certificate: the template is cloned into a working
//! canvas, every text role is drawn centered at its scaled anchor, the
//! verification code is pasted, and the canvas is serialized as a PNG plus a
//! single-page PDF sized 1pt = 1px. The pipeline is strictly linear; a
//! failure is fatal to the one record only.

pub mod date;
pub mod fonts;
pub mod layout;
pub mod pdf;
pub mod qr;
pub mod text;

use image::{Rgb, RgbImage};
use std::io::Cursor;
use thiserror::Error;

use fonts::FontSet;
use layout::{Role, ScaleFactors};

// Certificate wording. Bilingual lines carry their own role entry in the
// layout table; lines that interpolate participant data are formatted in
// render_certificate.
const TITLE_TEXT: &str = "Training Certificate";
const DESCRIPTION_ID: &str = "Sertifikat ini untuk menerangkan bahwa peserta berikut ini :";
const DESCRIPTION_EN: &str = "This is to certify that the following participant :";
const ATTENDED_ID: &str = "Telah mengikuti";
const ATTENDED_EN: &str = "Has attended";
const ORGANIZER_ID: &str = "Yang diselenggarakan oleh PT Aerofood Indonesia";
const ORGANIZER_EN: &str = "Which was conducted by PT Aerofood Indonesia";
const CITY: &str = "Tangerang";
const SIGNATORY_NAME: &str = "Rakhmat Syarifudin";
const SIGNATORY_TITLE: &str = "VP Human Capital Management";

const TITLE_COLOR: Rgb<u8> = Rgb([45, 75, 30]);
const INK: Rgb<u8> = Rgb([0, 0, 0]);

/// Per-record rendering failure. Should not occur with sound template and
/// font assets; the batch orchestrator decides what it means for the batch.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template has a zero dimension")]
    EmptyTemplate,
    #[error("verification code generation failed: {0}")]
    Qr(String),
    #[error("raster encoding failed: {0}")]
    Encode(#[from] image::ImageError),
    #[error("pdf assembly failed: {0}")]
    Pdf(String),
}

/// Both artifacts for one participant. The PDF page dimensions in points
/// equal the PNG pixel dimensions.
#[derive(Debug)]
pub struct RenderedCertificate {
    pub png: Vec<u8>,
    pub pdf: Vec<u8>,
}

fn draw_role(
    canvas: &mut RgbImage,
    fonts: &FontSet,
    scale: &ScaleFactors,
    role: Role,
    content: &str,
    color: Rgb<u8>,
) -> (i32, u32) {
    text::draw_centered(
        canvas,
        fonts.get(role.spec().style),
        scale.font_size(role) as f32,
        scale.y(role),
        color,
        content,
    )
}

pub fn render_certificate(
    template: &RgbImage,
    fonts: &FontSet,
    name: &str,
    course: &str,
    raw_date: &str,
) -> Result<RenderedCertificate, RenderError> {
    let (width, height) = template.dimensions();
    if width == 0 || height == 0 {
        return Err(RenderError::EmptyTemplate);
    }

    let mut canvas = template.clone();
    let scale = ScaleFactors::for_dimensions(width, height);

    let date_id = date::format_indonesian(raw_date);
    let date_en = date::format_english(raw_date);

    let draw = |canvas: &mut RgbImage, role: Role, content: &str, color: Rgb<u8>| {
        draw_role(canvas, fonts, &scale, role, content, color)
    };

    draw(&mut canvas, Role::Title, TITLE_TEXT, TITLE_COLOR);
    draw(&mut canvas, Role::DescriptionId, DESCRIPTION_ID, INK);
    draw(&mut canvas, Role::DescriptionEn, DESCRIPTION_EN, INK);

    let (name_x, name_width) = draw(&mut canvas, Role::ParticipantName, name, INK);
    text::draw_underline(
        &mut canvas,
        name_x,
        scale.scaled_y(layout::NAME_UNDERLINE_REF_Y),
        name_width,
        scale.scaled_size(layout::NAME_UNDERLINE_REF_THICKNESS),
    );

    draw(&mut canvas, Role::AttendedId, ATTENDED_ID, INK);
    draw(&mut canvas, Role::AttendedEn, ATTENDED_EN, INK);
    draw(&mut canvas, Role::CourseId, course, INK);
    draw(&mut canvas, Role::CourseEn, &format!("Training of {}", course), INK);
    draw(&mut canvas, Role::OrganizerId, ORGANIZER_ID, INK);
    draw(&mut canvas, Role::HeldOnId, &format!("Pada tanggal {}", date_id), INK);
    draw(&mut canvas, Role::OrganizerEn, ORGANIZER_EN, INK);
    draw(&mut canvas, Role::HeldOnEn, &format!("on {}", date_en), INK);
    draw(&mut canvas, Role::Location, &format!("{}, {}", CITY, date_id), INK);

    let (sig_x, sig_width) = draw(&mut canvas, Role::SignatureName, SIGNATORY_NAME, INK);
    text::draw_underline(
        &mut canvas,
        sig_x,
        scale.scaled_y(layout::SIGNATURE_UNDERLINE_REF_Y),
        sig_width,
        scale.scaled_size(layout::SIGNATURE_UNDERLINE_REF_THICKNESS),
    );
    draw(&mut canvas, Role::SignatureTitle, SIGNATORY_TITLE, INK);

    let code_size = scale.scaled_size(layout::CODE_REF_SIZE);
    let payload = qr::verification_payload(name, course, &date_id);
    let code = qr::make_code(&payload, code_size)?;
    let code_x = (width.saturating_sub(code_size) / 2) as i64;
    let code_y = scale.scaled_y(layout::CODE_REF_Y) as i64;
    image::imageops::replace(&mut canvas, &code, code_x, code_y);

    let mut png = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;

    let pdf = pdf::wrap_raster(&canvas)?;

    Ok(RenderedCertificate { png, pdf })
}
