//! Scannable verification patch: the participant's identity, course and
//! formatted date as a plain-text QR symbol. Low error correction keeps the
//! symbol small; there is no quiet zone because the certificate background
//! provides the contrast margin.

use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};
use qrcode::{EcLevel, QrCode};

use super::RenderError;

/// The literal payload embedded in the code.
pub fn verification_payload(name: &str, course: &str, formatted_date: &str) -> String {
    format!("{} | {} | {}", name, course, formatted_date)
}

/// Renders the payload as a square RGB patch of `size` pixels per side.
pub fn make_code(payload: &str, size: u32) -> Result<RgbImage, RenderError> {
    let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::L)
        .map_err(|e| RenderError::Qr(e.to_string()))?;

    let modules = code
        .render::<image::Luma<u8>>()
        .quiet_zone(false)
        .module_dimensions(10, 10)
        .build();

    let size = size.max(1);
    let resized = imageops::resize(&modules, size, size, FilterType::Nearest);
    Ok(DynamicImage::ImageLuma8(resized).to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_the_literal_concatenation() {
        assert_eq!(
            verification_payload("Jane Doe", "Safety 101", "5 Agustus 2025"),
            "Jane Doe | Safety 101 | 5 Agustus 2025"
        );
    }

    #[test]
    fn patch_is_square_at_requested_size() {
        let patch = make_code("Jane Doe | Safety 101 | 5 Agustus 2025", 150).unwrap();
        assert_eq!(patch.dimensions(), (150, 150));
    }

    #[test]
    fn long_payloads_still_encode() {
        let name = "Anastasia Wulandari Kusumaningrum-Oktaviani";
        let course = "Occupational Health and Safety Management Systems Auditor Training";
        let payload = verification_payload(name, course, "17 September 2025");
        let patch = make_code(&payload, 75).unwrap();
        assert_eq!(patch.dimensions(), (75, 75));
    }

    #[test]
    fn minimum_size_is_one_pixel() {
        let patch = make_code("x | y | z", 0).unwrap();
        assert_eq!(patch.dimensions(), (1, 1));
    }
}
