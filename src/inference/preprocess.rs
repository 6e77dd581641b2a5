use image::imageops::FilterType;
use ndarray::Array4;

use crate::error::AppError;
use crate::inference::IMG_SIZE;

/// Decodes an uploaded byte stream into the model's input tensor.
///
/// The source image is forced to RGB (grayscale and RGBA uploads included),
/// resized to exactly 120x120 and scaled into [0,1], with a leading batch
/// dimension of one: the result is always shaped (1, 120, 120, 3).
pub fn load(bytes: &[u8]) -> Result<Array4<f32>, AppError> {
    let decoded = image::load_from_memory(bytes)?;
    let resized = decoded
        .resize_exact(IMG_SIZE, IMG_SIZE, FilterType::Triangle)
        .to_rgb8();

    let side = IMG_SIZE as usize;
    let tensor = Array4::from_shape_fn((1, side, side, 3), |(_, y, x, c)| {
        resized.get_pixel(x as u32, y as u32)[c] as f32 / 255.0
    });
    Ok(tensor)
}
