//! Wraps a finished certificate raster in a single-page PDF. The page is
//! sized in points to the raster's pixel dimensions and the image is placed
//! at 72 dpi, so one document point maps to exactly one pixel.

use image::RgbImage;
use printpdf::{
    ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument, Pt, Px,
};

use super::RenderError;

pub fn wrap_raster(canvas: &RgbImage) -> Result<Vec<u8>, RenderError> {
    let (width, height) = canvas.dimensions();

    let (doc, page, layer) = PdfDocument::new(
        "Training Certificate",
        Mm::from(Pt(width as f32)),
        Mm::from(Pt(height as f32)),
        "certificate",
    );
    let layer = doc.get_page(page).get_layer(layer);

    let image = Image::from(ImageXObject {
        width: Px(width as usize),
        height: Px(height as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: canvas.as_raw().clone(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    // 72 dpi: pixel size in points equals pixel count, filling the page 1:1.
    image.add_to_layer(
        layer,
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(0.0)),
            dpi: Some(72.0),
            ..Default::default()
        },
    );

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}
