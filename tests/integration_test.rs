//! Integration tests for the exercise validation package
//!
//! Exercises the full grading sequence the driver runs, plus the round-trip
//! laws behind the interop checker.

use anyhow::Result;
use approx::assert_abs_diff_eq;
use candle_core::{DType, Device, Tensor};
use ndarray::array;

use exercise_validation::interop::{
    array_to_tensor_f32, array_to_tensor_i64, tensor_to_array_f32, tensor_to_array_i64,
};
use exercise_validation::models::{
    ConvBlock, ConvBlockConfig, Mlp, MlpConfig, TransferClassifier, TransferConfig,
};
use exercise_validation::validators::{
    validate_conv_block, validate_mlp_architecture, validate_numpy_interop,
    validate_tensor_creation, validate_transfer_setup,
};

/// Run the driver's five-call grading sequence and check every outcome
#[test]
fn test_full_grading_sequence() -> Result<()> {
    let device = Device::Cpu;

    // 1. Tensor creation with the expected shapes and values
    let zeros = Tensor::zeros((3, 4), DType::F32, &device)?;
    let ones = Tensor::ones((2, 5), DType::F32, &device)?;
    let random = Tensor::randn(0.0f32, 1.0, (3, 3), &device)?;

    let outcome = validate_tensor_creation(&zeros, &ones, &random)?;
    assert!(outcome.passed, "{}", outcome.message);

    // 2. Array interop derived from the sample data
    let source_array = array![[10i64, 20, 30], [40, 50, 60]].into_dyn();
    let tensor_from_array = array_to_tensor_i64(&source_array, &device)?;
    let source_tensor = Tensor::new(&[[1.5f32, 2.5], [3.5, 4.5]], &device)?;
    let array_from_tensor = tensor_to_array_f32(&source_tensor)?;

    let outcome = validate_numpy_interop(
        &tensor_from_array,
        &array_from_tensor,
        &source_array,
        &source_tensor,
    )?;
    assert!(outcome.passed, "{}", outcome.message);

    // 3. MLP with the expected widths
    let mlp = Mlp::new(MlpConfig::default(), &device)?;
    let outcome = validate_mlp_architecture(&mlp)?;
    assert!(outcome.passed, "{}", outcome.message);

    // 4. CNN block with the expected layer order
    let conv_block = ConvBlock::new(ConvBlockConfig::default(), &device)?;
    let outcome = validate_conv_block(&conv_block)?;
    assert!(outcome.passed, "{}", outcome.message);

    // 5. Failure case: zeros tensor with the wrong shape
    let wrong_zeros = Tensor::zeros((2, 3), DType::F32, &device)?;
    let outcome = validate_tensor_creation(&wrong_zeros, &ones, &random)?;
    assert!(!outcome.passed);
    assert!(!outcome.message.is_empty());
    assert!(outcome.hint.is_some());

    Ok(())
}

/// Integer data must survive array -> tensor -> array unchanged
#[test]
fn test_roundtrip_law_i64() -> Result<()> {
    let device = Device::Cpu;
    let source = array![[10i64, 20, 30], [40, 50, 60]].into_dyn();

    let tensor = array_to_tensor_i64(&source, &device)?;
    let roundtrip = tensor_to_array_i64(&tensor)?;

    assert_eq!(roundtrip, source);
    Ok(())
}

/// Float data must survive tensor -> array -> tensor unchanged
#[test]
fn test_roundtrip_law_f32() -> Result<()> {
    let device = Device::Cpu;
    let source = Tensor::new(&[[1.5f32, 2.5], [3.5, 4.5]], &device)?;

    let array = tensor_to_array_f32(&source)?;
    let tensor = array_to_tensor_f32(&array, &device)?;

    assert_eq!(tensor.dims(), source.dims());
    let original: Vec<f32> = source.flatten_all()?.to_vec1()?;
    let restored: Vec<f32> = tensor.flatten_all()?.to_vec1()?;
    for (o, r) in original.iter().zip(restored.iter()) {
        assert_abs_diff_eq!(*o, *r);
    }
    Ok(())
}

/// Altering any declared MLP width must fail the architecture check
#[test]
fn test_mlp_width_alterations_fail() -> Result<()> {
    let device = Device::Cpu;

    let altered = [
        MlpConfig {
            input_dim: 1024,
            ..Default::default()
        },
        MlpConfig {
            hidden_dim1: 384,
            ..Default::default()
        },
        MlpConfig {
            hidden_dim2: 128,
            ..Default::default()
        },
        MlpConfig {
            num_classes: 100,
            ..Default::default()
        },
    ];

    for config in altered {
        let mlp = Mlp::new(config, &device)?;
        let outcome = validate_mlp_architecture(&mlp)?;
        assert!(!outcome.passed);
        assert!(!outcome.message.is_empty());
    }
    Ok(())
}

/// Changing the conv block's declared parameters must fail the check
#[test]
fn test_conv_block_alterations_fail() -> Result<()> {
    let device = Device::Cpu;

    let altered = [
        ConvBlockConfig {
            kernel_size: 5,
            ..Default::default()
        },
        ConvBlockConfig {
            padding: 0,
            ..Default::default()
        },
        ConvBlockConfig {
            pool_kernel: 3,
            ..Default::default()
        },
    ];

    for config in altered {
        let block = ConvBlock::new(config, &device)?;
        let outcome = validate_conv_block(&block)?;
        assert!(!outcome.passed);
    }
    Ok(())
}

/// Transfer setup passes when frozen with the right head, fails otherwise
#[test]
fn test_transfer_setup() -> Result<()> {
    let device = Device::Cpu;

    let model = TransferClassifier::new(TransferConfig::default(), &device)?;
    let outcome = validate_transfer_setup(&model)?;
    assert!(outcome.passed, "{}", outcome.message);

    let mut unfrozen = TransferClassifier::new(TransferConfig::default(), &device)?;
    unfrozen.unfreeze_backbone();
    let outcome = validate_transfer_setup(&unfrozen)?;
    assert!(!outcome.passed);
    assert!(outcome.hint.is_some());

    let wrong_head = TransferClassifier::new(
        TransferConfig {
            feature_dim: 2048,
            ..Default::default()
        },
        &device,
    )?;
    let outcome = validate_transfer_setup(&wrong_head)?;
    assert!(!outcome.passed);
    Ok(())
}
