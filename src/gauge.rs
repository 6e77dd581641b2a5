use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{ImageFormat, Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use std::io::Cursor;

use crate::error::AppError;

/// Canvas side in pixels; displayed at 130px, so rendered at roughly 2x.
const SIZE: u32 = 264;
const OUTER_RADIUS: f32 = 120.0;
/// Ring thickness as a fraction of the outer radius.
const RING_WIDTH: f32 = 0.35;
const FONT_SCALE: f32 = 36.0;

const CONFIDENCE_COLOR: Rgba<u8> = Rgba([52, 168, 83, 255]); // #34A853
const REMAINDER_COLOR: Rgba<u8> = Rgba([232, 232, 232, 255]); // #E8E8E8
const TEXT_COLOR: Rgba<u8> = Rgba([33, 33, 33, 255]);

/// Renders a confidence percentage as a donut gauge on a transparent
/// background: the confidence arc in green, the remainder in neutral gray,
/// starting at the top and sweeping clockwise, with the percentage printed
/// in the middle.
pub struct GaugeRenderer {
    font: Option<FontVec>,
}

impl GaugeRenderer {
    /// Creates a renderer using a system font for the center text. If no
    /// system font can be found the gauge still renders, without text.
    pub fn new() -> Self {
        let font_paths = [
            "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
            "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
            "/System/Library/Fonts/Arial.ttf",
            "C:\\Windows\\Fonts\\arialbd.ttf",
        ];

        for path in &font_paths {
            if let Ok(font_data) = std::fs::read(path)
                && let Ok(font) = FontVec::try_from_vec(font_data)
            {
                log::debug!("Gauge text font: {}", path);
                return Self { font: Some(font) };
            }
        }

        log::warn!("No system font found, gauge will render without center text");
        Self { font: None }
    }

    /// Draws the gauge for a confidence in [50,100] and returns it as an
    /// encoded PNG ready for inline embedding.
    pub fn render(&self, confidence: f32) -> Result<Vec<u8>, AppError> {
        let mut img = RgbaImage::from_pixel(SIZE, SIZE, Rgba([0, 0, 0, 0]));
        draw_ring(&mut img, confidence);

        if let Some(font) = &self.font {
            let text = format_confidence(confidence);
            draw_centered_text(&mut img, font, &text);
        }

        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, ImageFormat::Png)
            .map_err(AppError::Render)?;
        Ok(buf.into_inner())
    }
}

/// The center label: one decimal place, percent sign.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.1}%", confidence)
}

fn draw_ring(img: &mut RgbaImage, confidence: f32) {
    let center = SIZE as f32 / 2.0;
    let inner_radius = OUTER_RADIUS * (1.0 - RING_WIDTH);

    for y in 0..SIZE {
        for x in 0..SIZE {
            let dx = x as f32 + 0.5 - center;
            let dy = y as f32 + 0.5 - center;
            let r = (dx * dx + dy * dy).sqrt();
            if r < inner_radius || r > OUTER_RADIUS {
                continue;
            }

            // Clockwise angle from the top of the circle, in [0, 1) turns.
            let mut angle = dx.atan2(-dy);
            if angle < 0.0 {
                angle += std::f32::consts::TAU;
            }
            let turns = angle / std::f32::consts::TAU;

            let color = if turns * 100.0 < confidence {
                CONFIDENCE_COLOR
            } else {
                REMAINDER_COLOR
            };
            img.put_pixel(x, y, color);
        }
    }
}

fn draw_centered_text(img: &mut RgbaImage, font: &FontVec, text: &str) {
    let scale = PxScale::from(FONT_SCALE);
    let scaled = font.as_scaled(scale);

    let width: f32 = text
        .chars()
        .map(|c| scaled.h_advance(scaled.scaled_glyph(c).id))
        .sum();
    let height = scaled.ascent() - scaled.descent();

    let x = ((SIZE as f32 - width) / 2.0).round() as i32;
    let y = ((SIZE as f32 - height) / 2.0).round() as i32;
    draw_text_mut(img, TEXT_COLOR, x, y, scale, font, text);
}
