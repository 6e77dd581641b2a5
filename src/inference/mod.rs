pub mod classifier;
pub mod decision;
pub mod preprocess;

/// Side length the model was trained on.
pub const IMG_SIZE: u32 = 120;
