//! Conversions between tensors and ndarray containers
//!
//! The NumPy interop exercise moves the same data between two
//! representations: a `candle_core::Tensor` and an `ndarray::ArrayD`.
//! Conversions must preserve shape and element values exactly.

use anyhow::{Context, Result};
use candle_core::{DType, Device, Tensor};
use ndarray::{ArrayD, IxDyn};

/// Convert an f32 tensor into a dynamic-dimensional ndarray
pub fn tensor_to_array_f32(tensor: &Tensor) -> Result<ArrayD<f32>> {
    if tensor.dtype() != DType::F32 {
        anyhow::bail!("Expected f32 tensor, got {:?}", tensor.dtype());
    }

    let shape = tensor.dims().to_vec();
    let data: Vec<f32> = tensor.flatten_all()?.to_vec1()?;

    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .context("Tensor data does not fit its declared shape")
}

/// Convert an i64 tensor into a dynamic-dimensional ndarray
pub fn tensor_to_array_i64(tensor: &Tensor) -> Result<ArrayD<i64>> {
    if tensor.dtype() != DType::I64 {
        anyhow::bail!("Expected i64 tensor, got {:?}", tensor.dtype());
    }

    let shape = tensor.dims().to_vec();
    let data: Vec<i64> = tensor.flatten_all()?.to_vec1()?;

    ArrayD::from_shape_vec(IxDyn(&shape), data)
        .context("Tensor data does not fit its declared shape")
}

/// Convert an f32 ndarray into a tensor on the given device
pub fn array_to_tensor_f32(array: &ArrayD<f32>, device: &Device) -> Result<Tensor> {
    let shape = array.shape().to_vec();
    let data: Vec<f32> = array.iter().copied().collect();

    Tensor::from_vec(data, shape, device).map_err(Into::into)
}

/// Convert an i64 ndarray into a tensor on the given device
///
/// Integer data stays integer across the boundary, matching the source
/// array's element type.
pub fn array_to_tensor_i64(array: &ArrayD<i64>, device: &Device) -> Result<Tensor> {
    let shape = array.shape().to_vec();
    let data: Vec<i64> = array.iter().copied().collect();

    Tensor::from_vec(data, shape, device).map_err(Into::into)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_roundtrip_i64() {
        let device = Device::Cpu;
        let source = array![[10i64, 20, 30], [40, 50, 60]].into_dyn();

        let tensor = array_to_tensor_i64(&source, &device).unwrap();
        assert_eq!(tensor.dims(), &[2, 3]);
        assert_eq!(tensor.dtype(), DType::I64);

        let roundtrip = tensor_to_array_i64(&tensor).unwrap();
        assert_eq!(roundtrip, source);
    }

    #[test]
    fn test_roundtrip_f32() {
        let device = Device::Cpu;
        let source = array![[1.5f32, 2.5], [3.5, 4.5]].into_dyn();

        let tensor = array_to_tensor_f32(&source, &device).unwrap();
        let roundtrip = tensor_to_array_f32(&tensor).unwrap();
        assert_eq!(roundtrip, source);
    }

    #[test]
    fn test_tensor_to_array_preserves_shape() {
        let device = Device::Cpu;
        let tensor = Tensor::zeros((2, 3, 4), DType::F32, &device).unwrap();

        let array = tensor_to_array_f32(&tensor).unwrap();
        assert_eq!(array.shape(), &[2, 3, 4]);
        assert!(array.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_dtype_mismatch_is_an_error() {
        let device = Device::Cpu;
        let tensor = Tensor::zeros((2, 2), DType::F32, &device).unwrap();
        assert!(tensor_to_array_i64(&tensor).is_err());

        let tensor = Tensor::from_vec(vec![1i64, 2, 3, 4], (2, 2), &device).unwrap();
        assert!(tensor_to_array_f32(&tensor).is_err());
    }
}
