//! Sample model architectures for the grading exercises
//!
//! The graders only inspect declared structure, never runtime behavior, so
//! each model exposes its layer sequence as an ordered list of [`LayerSpec`]
//! descriptors alongside a concrete forward pass:
//! - MLP classifier (fully-connected stack for flattened images)
//! - Convolutional feature block (conv / norm / activation / pool)
//! - Transfer-learning classifier (frozen backbone, trainable head)

pub mod conv;
pub mod mlp;
pub mod transfer;

// Re-exports
pub use conv::{ConvBlock, ConvBlockConfig};
pub use mlp::{Mlp, MlpConfig};
pub use transfer::{TransferClassifier, TransferConfig};

use std::fmt;

use anyhow::Result;
use candle_core::{DType, Device, Tensor};
use candle_nn::Linear;

/// Declared structure of a single layer: its kind plus size parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerSpec {
    /// Fully-connected layer
    Linear {
        /// Input width
        in_features: usize,
        /// Output width
        out_features: usize,
    },
    /// 2D convolution with square kernel
    Conv2d {
        /// Input channels
        in_channels: usize,
        /// Output channels
        out_channels: usize,
        /// Kernel size
        kernel_size: usize,
        /// Zero padding on each side
        padding: usize,
    },
    /// Batch normalization over channels
    BatchNorm2d {
        /// Number of channels normalized
        num_features: usize,
    },
    /// ReLU activation
    ReLU,
    /// 2D max pooling with square window
    MaxPool2d {
        /// Window size
        kernel_size: usize,
    },
}

impl fmt::Display for LayerSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayerSpec::Linear {
                in_features,
                out_features,
            } => write!(f, "Linear({} -> {})", in_features, out_features),
            LayerSpec::Conv2d {
                in_channels,
                out_channels,
                kernel_size,
                padding,
            } => write!(
                f,
                "Conv2d({} -> {}, kernel {}, padding {})",
                in_channels, out_channels, kernel_size, padding
            ),
            LayerSpec::BatchNorm2d { num_features } => write!(f, "BatchNorm2d({})", num_features),
            LayerSpec::ReLU => write!(f, "ReLU"),
            LayerSpec::MaxPool2d { kernel_size } => write!(f, "MaxPool2d({})", kernel_size),
        }
    }
}

/// Linear layer with small random weights and zero bias
pub(crate) fn random_linear(
    in_features: usize,
    out_features: usize,
    device: &Device,
) -> Result<Linear> {
    let weight = Tensor::randn(0.0f32, 0.02, (out_features, in_features), device)?;
    let bias = Tensor::zeros((out_features,), DType::F32, device)?;
    Ok(Linear::new(weight, Some(bias)))
}
