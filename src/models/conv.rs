//! Convolutional feature block for the CNN exercise
//!
//! Conv -> batch norm -> ReLU -> max pool, the standard opening block of the
//! tutorial's CIFAR network.

use anyhow::Result;
use candle_core::{DType, Device, Tensor};
use candle_nn::{BatchNorm, Conv2d, Conv2dConfig, Module, ModuleT};

use super::LayerSpec;

/// Conv block dimensions
#[derive(Debug, Clone)]
pub struct ConvBlockConfig {
    /// Input channels
    pub in_channels: usize,
    /// Output channels
    pub out_channels: usize,
    /// Square kernel size
    pub kernel_size: usize,
    /// Zero padding on each side
    pub padding: usize,
    /// Max-pool window size
    pub pool_kernel: usize,
}

impl Default for ConvBlockConfig {
    fn default() -> Self {
        Self {
            in_channels: 3,
            out_channels: 32,
            kernel_size: 3,
            padding: 1,
            pool_kernel: 2,
        }
    }
}

/// Convolution block with normalization, activation and pooling
pub struct ConvBlock {
    conv: Conv2d,
    norm: BatchNorm,
    config: ConvBlockConfig,
}

impl ConvBlock {
    /// Create with randomly initialized weights
    pub fn new(config: ConvBlockConfig, device: &Device) -> Result<Self> {
        let weight = Tensor::randn(
            0.0f32,
            0.02,
            (
                config.out_channels,
                config.in_channels,
                config.kernel_size,
                config.kernel_size,
            ),
            device,
        )?;
        let bias = Tensor::zeros((config.out_channels,), DType::F32, device)?;
        let conv = Conv2d::new(
            weight,
            Some(bias),
            Conv2dConfig {
                padding: config.padding,
                ..Default::default()
            },
        );

        let running_mean = Tensor::zeros((config.out_channels,), DType::F32, device)?;
        let running_var = Tensor::ones((config.out_channels,), DType::F32, device)?;
        let bn_weight = Tensor::ones((config.out_channels,), DType::F32, device)?;
        let bn_bias = Tensor::zeros((config.out_channels,), DType::F32, device)?;
        let norm = BatchNorm::new(
            config.out_channels,
            running_mean,
            running_var,
            bn_weight,
            bn_bias,
            1e-5,
        )?;

        Ok(Self { conv, norm, config })
    }

    /// Declared layer sequence, in forward order
    pub fn spec(&self) -> Vec<LayerSpec> {
        vec![
            LayerSpec::Conv2d {
                in_channels: self.config.in_channels,
                out_channels: self.config.out_channels,
                kernel_size: self.config.kernel_size,
                padding: self.config.padding,
            },
            LayerSpec::BatchNorm2d {
                num_features: self.config.out_channels,
            },
            LayerSpec::ReLU,
            LayerSpec::MaxPool2d {
                kernel_size: self.config.pool_kernel,
            },
        ]
    }

    /// Forward pass
    ///
    /// Input: (batch, in_channels, height, width)
    /// Output: (batch, out_channels, height / pool, width / pool)
    pub fn forward(&self, x: &Tensor) -> Result<Tensor> {
        let x = self.conv.forward(x)?;
        let x = self.norm.forward_t(&x, false)?;
        let x = x.relu()?;
        x.max_pool2d(self.config.pool_kernel).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conv_block_spec() {
        let device = Device::Cpu;
        let block = ConvBlock::new(ConvBlockConfig::default(), &device).unwrap();

        let spec = block.spec();
        assert_eq!(spec.len(), 4);
        assert_eq!(
            spec[0],
            LayerSpec::Conv2d {
                in_channels: 3,
                out_channels: 32,
                kernel_size: 3,
                padding: 1
            }
        );
        assert_eq!(spec[1], LayerSpec::BatchNorm2d { num_features: 32 });
        assert_eq!(spec[2], LayerSpec::ReLU);
        assert_eq!(spec[3], LayerSpec::MaxPool2d { kernel_size: 2 });
    }

    #[test]
    fn test_conv_block_forward_shape() {
        let device = Device::Cpu;
        let block = ConvBlock::new(ConvBlockConfig::default(), &device).unwrap();

        // Padding 1 keeps spatial size, pooling halves it
        let x = Tensor::randn(0.0f32, 1.0, (1, 3, 32, 32), &device).unwrap();
        let out = block.forward(&x).unwrap();
        assert_eq!(out.dims(), &[1, 32, 16, 16]);
    }
}
