use ndarray::Array4;
use std::sync::Mutex;
use tch::nn::ModuleT;
use tch::{CModule, Device, Tensor};

use crate::error::{AppError, ModelLoadError};
use crate::inference::IMG_SIZE;

/// A pretrained binary pistachio classifier.
///
/// `predict` runs one forward pass over a (1, 120, 120, 3) tensor and returns
/// the raw probability of the Siirt class, in [0,1]. Implementations are
/// injected into the request handlers as a trait object so the pipeline can be
/// exercised without loading the real model.
pub trait Classifier: Send + Sync {
    fn predict(&self, input: &Array4<f32>) -> Result<f32, AppError>;
}

/// The real classifier: a frozen TorchScript module, loaded once at startup
/// and reused for every request.
pub struct TchClassifier {
    model: Mutex<CModule>,
}

impl TchClassifier {
    pub fn load(path: &str) -> Result<Self, ModelLoadError> {
        let device = Device::cuda_if_available();
        let model = CModule::load_on_device(path, device).map_err(|source| ModelLoadError {
            path: path.to_string(),
            source,
        })?;
        log::info!("Loaded classifier model from {}", path);
        Ok(Self {
            model: Mutex::new(model),
        })
    }
}

impl Classifier for TchClassifier {
    fn predict(&self, input: &Array4<f32>) -> Result<f32, AppError> {
        let flat: Vec<f32> = input.iter().copied().collect();
        let side = IMG_SIZE as i64;
        let tensor = Tensor::f_from_slice(&flat)?.f_reshape([1, side, side, 3])?;
        let output = self.model.lock().unwrap().forward_t(&tensor, false);
        let prob = output.f_view([-1i64])?.f_double_value(&[0])?;
        Ok(prob as f32)
    }
}

/// Stub used by handler and pipeline tests: always answers with the same
/// probability, standing in for the collaborator the contract describes.
#[cfg(test)]
pub struct FixedClassifier(pub f32);

#[cfg(test)]
impl Classifier for FixedClassifier {
    fn predict(&self, _input: &Array4<f32>) -> Result<f32, AppError> {
        Ok(self.0)
    }
}
