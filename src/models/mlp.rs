//! MLP classifier for the flattened-image exercise
//!
//! Three fully-connected layers with ReLU between them; the input image is
//! flattened to a single feature vector before the first layer.

use anyhow::Result;
use candle_core::{Device, Tensor};
use candle_nn::{Linear, Module};

use super::{random_linear, LayerSpec};

/// MLP dimensions
#[derive(Debug, Clone)]
pub struct MlpConfig {
    /// Flattened input width (3 x 32 x 32 for CIFAR images)
    pub input_dim: usize,
    /// First hidden width
    pub hidden_dim1: usize,
    /// Second hidden width
    pub hidden_dim2: usize,
    /// Number of output classes
    pub num_classes: usize,
}

impl Default for MlpConfig {
    fn default() -> Self {
        Self {
            input_dim: 3072,
            hidden_dim1: 512,
            hidden_dim2: 256,
            num_classes: 10,
        }
    }
}

/// Three-layer MLP classifier
pub struct Mlp {
    fc1: Linear,
    fc2: Linear,
    fc3: Linear,
    config: MlpConfig,
}

impl Mlp {
    /// Create with randomly initialized weights
    pub fn new(config: MlpConfig, device: &Device) -> Result<Self> {
        let fc1 = random_linear(config.input_dim, config.hidden_dim1, device)?;
        let fc2 = random_linear(config.hidden_dim1, config.hidden_dim2, device)?;
        let fc3 = random_linear(config.hidden_dim2, config.num_classes, device)?;

        Ok(Self {
            fc1,
            fc2,
            fc3,
            config,
        })
    }

    /// Declared layer sequence, in forward order
    pub fn spec(&self) -> Vec<LayerSpec> {
        vec![
            LayerSpec::Linear {
                in_features: self.config.input_dim,
                out_features: self.config.hidden_dim1,
            },
            LayerSpec::ReLU,
            LayerSpec::Linear {
                in_features: self.config.hidden_dim1,
                out_features: self.config.hidden_dim2,
            },
            LayerSpec::ReLU,
            LayerSpec::Linear {
                in_features: self.config.hidden_dim2,
                out_features: self.config.num_classes,
            },
        ]
    }

    /// Forward pass
    ///
    /// Input: (batch, ...) flattened to (batch, input_dim)
    /// Output: (batch, num_classes) logits
    pub fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let x = x.flatten_from(1)?;
        let x = self.fc1.forward(&x)?.relu()?;
        let x = self.fc2.forward(&x)?.relu()?;
        self.fc3.forward(&x).map_err(Into::into)
    }
}
