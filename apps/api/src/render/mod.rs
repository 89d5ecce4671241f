//! Document renderer — replays composed draw operations onto a single A4
//! page with printpdf. Font embedding, page sizing, and byte serialization
//! are entirely the library's responsibility; this module never positions
//! anything itself beyond unit conversion.

use std::io::BufWriter;

use image::ImageFormat;
use printpdf::{
    BuiltinFont, Color, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Line, Mm,
    PdfDocument, PdfLayerReference, Point, Px, Rgb,
};
use thiserror::Error;

use crate::layout::page::{ComposedPage, DrawOp};

/// A4 in millimetres.
const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;

const PT_PER_MM: f32 = 72.0 / 25.4;
const MM_PER_INCH: f32 = 25.4;

const RULE_THICKNESS_PT: f32 = 0.5;
const RULE_GRAY: f32 = 0.5;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Letterhead decode failed: {0}")]
    Letterhead(#[from] image::ImageError),

    #[error("PDF serialization failed: {0}")]
    Pdf(String),
}

/// Renders the composed page over the letterhead JPEG, returning PDF bytes.
pub fn render_pdf(page: &ComposedPage, letterhead_jpg: &[u8]) -> Result<Vec<u8>, RenderError> {
    let (doc, page_index, layer_index) = PdfDocument::new(
        "Expense Letter",
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "Layer 1",
    );
    let layer = doc.get_page(page_index).get_layer(layer_index);

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| RenderError::Pdf(e.to_string()))?;

    for op in &page.ops {
        match op {
            DrawOp::Background => draw_background(&layer, letterhead_jpg)?,
            DrawOp::Rule { x1, x2, y } => draw_rule(&layer, *x1, *x2, *y),
            DrawOp::Text { text, x, y, size } => {
                layer.set_fill_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
                layer.use_text(text, *size, Mm(pt_to_mm(*x)), Mm(pt_to_mm(*y)), &font);
            }
        }
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| RenderError::Pdf(e.to_string()))?;
    Ok(bytes)
}

fn pt_to_mm(pt: f32) -> f32 {
    pt / PT_PER_MM
}

/// Embeds the letterhead full-bleed at (0, 0).
///
/// The dpi is chosen so the image's pixel width maps exactly onto the page
/// width; the vertical scale then stretches it to the page height.
fn draw_background(layer: &PdfLayerReference, jpg: &[u8]) -> Result<(), RenderError> {
    let decoded = image::load_from_memory_with_format(jpg, ImageFormat::Jpeg)?.to_rgb8();
    let (width_px, height_px) = decoded.dimensions();

    let background = Image::from(ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: true,
        image_data: decoded.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    });

    let dpi = width_px as f32 / (PAGE_WIDTH_MM / MM_PER_INCH);
    let natural_height_mm = height_px as f32 / dpi * MM_PER_INCH;

    background.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(0.0)),
            translate_y: Some(Mm(0.0)),
            dpi: Some(dpi),
            scale_y: Some(PAGE_HEIGHT_MM / natural_height_mm),
            ..Default::default()
        },
    );

    Ok(())
}

fn draw_rule(layer: &PdfLayerReference, x1: f32, x2: f32, y: f32) {
    layer.set_outline_color(Color::Rgb(Rgb::new(RULE_GRAY, RULE_GRAY, RULE_GRAY, None)));
    layer.set_outline_thickness(RULE_THICKNESS_PT);

    let line = Line {
        points: vec![
            (Point::new(Mm(pt_to_mm(x1)), Mm(pt_to_mm(y))), false),
            (Point::new(Mm(pt_to_mm(x2)), Mm(pt_to_mm(y))), false),
        ],
        is_closed: false,
    };
    layer.add_line(line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compose, split_zones};

    fn tiny_letterhead() -> Vec<u8> {
        let pixels = image::RgbImage::from_pixel(4, 4, image::Rgb([240, 240, 240]));
        let mut bytes = Vec::new();
        image::codecs::jpeg::JpegEncoder::new(&mut bytes)
            .encode_image(&pixels)
            .expect("in-memory JPEG encode");
        bytes
    }

    fn sample_page() -> ComposedPage {
        compose(&split_zones(
            "L1\nL2\nL3\nL4\nL5\nL6\nL7\nL8\nL9\nSubject: Test\nA short body paragraph.",
        ))
    }

    #[test]
    fn test_render_produces_pdf_bytes() {
        let pdf = render_pdf(&sample_page(), &tiny_letterhead()).expect("render should succeed");
        assert!(pdf.starts_with(b"%PDF"), "output must be a PDF stream");
        assert!(pdf.len() > 1000);
    }

    #[test]
    fn test_render_fails_on_invalid_letterhead() {
        let result = render_pdf(&sample_page(), b"definitely not a jpeg");
        assert!(matches!(result, Err(RenderError::Letterhead(_))));
    }

    #[test]
    fn test_pt_to_mm_roundtrip_page_width() {
        // 595 pt is the A4 width; it must land on 210 mm within a point's
        // worth of tolerance.
        assert!((pt_to_mm(595.0) - 210.0).abs() < 0.2);
    }
}
