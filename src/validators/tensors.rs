//! Graders for the tensor creation and array interop exercises

use anyhow::Result;
use candle_core::{DType, Tensor};
use ndarray::ArrayD;

use super::ValidationOutcome;
use crate::compare::{all_close, all_equal, shapes_match, Tolerance};

const ZEROS_SHAPE: [usize; 2] = [3, 4];
const ONES_SHAPE: [usize; 2] = [2, 5];
const RANDOM_SHAPE: [usize; 2] = [3, 3];

/// Grade the tensor creation exercise
///
/// Expects a 3x4 all-zero f32 tensor, a 2x5 all-one f32 tensor, and a 3x3
/// tensor of any values.
pub fn validate_tensor_creation(
    zeros: &Tensor,
    ones: &Tensor,
    random: &Tensor,
) -> Result<ValidationOutcome> {
    if let Some(outcome) = check_filled_tensor("zeros", zeros, &ZEROS_SHAPE, 0.0)? {
        return Ok(outcome);
    }
    if let Some(outcome) = check_filled_tensor("ones", ones, &ONES_SHAPE, 1.0)? {
        return Ok(outcome);
    }

    if !shapes_match(&RANDOM_SHAPE, random.dims()) {
        return Ok(ValidationOutcome::fail(
            format!(
                "The random tensor has shape {:?}, expected {:?}",
                random.dims(),
                RANDOM_SHAPE
            ),
            "Tensor::randn(0.0f32, 1.0, (3, 3), &device) samples a 3x3 tensor \
             from a standard normal distribution",
        ));
    }

    Ok(ValidationOutcome::pass(
        "All three tensors have the expected shapes and values",
    ))
}

/// Check shape, dtype and fill value of one constant tensor
fn check_filled_tensor(
    name: &str,
    tensor: &Tensor,
    expected_shape: &[usize],
    fill: f32,
) -> Result<Option<ValidationOutcome>> {
    let hint = format!(
        "Tensor::{}({}, DType::F32, &device) creates a {:?} tensor filled with {}",
        name,
        shape_tuple(expected_shape),
        expected_shape,
        fill,
    );

    if !shapes_match(expected_shape, tensor.dims()) {
        return Ok(Some(ValidationOutcome::fail(
            format!(
                "The {} tensor has shape {:?}, expected {:?}",
                name,
                tensor.dims(),
                expected_shape
            ),
            hint,
        )));
    }

    if tensor.dtype() != DType::F32 {
        return Ok(Some(ValidationOutcome::fail(
            format!(
                "The {} tensor has dtype {:?}, expected F32",
                name,
                tensor.dtype()
            ),
            hint,
        )));
    }

    let values: Vec<f32> = tensor.flatten_all()?.to_vec1()?;
    if !all_equal(&values, fill, Tolerance::default()) {
        return Ok(Some(ValidationOutcome::fail(
            format!("The {} tensor contains values other than {}", name, fill),
            hint,
        )));
    }

    Ok(None)
}

fn shape_tuple(shape: &[usize]) -> String {
    let dims: Vec<String> = shape.iter().map(|d| d.to_string()).collect();
    format!("({})", dims.join(", "))
}

/// Grade the array interop exercise
///
/// `tensor_from_array` must carry the integer source array's shape and values
/// across the boundary, and `array_from_tensor` must carry the float source
/// tensor's shape and values back. Conversions must agree in both directions.
pub fn validate_numpy_interop(
    tensor_from_array: &Tensor,
    array_from_tensor: &ArrayD<f32>,
    source_array: &ArrayD<i64>,
    source_tensor: &Tensor,
) -> Result<ValidationOutcome> {
    // Array -> tensor direction
    if !shapes_match(source_array.shape(), tensor_from_array.dims()) {
        return Ok(ValidationOutcome::fail(
            format!(
                "The tensor converted from the array has shape {:?}, expected {:?}",
                tensor_from_array.dims(),
                source_array.shape()
            ),
            "Converting an array to a tensor keeps its shape; see interop::array_to_tensor_i64",
        ));
    }

    if tensor_from_array.dtype() != DType::I64 {
        return Ok(ValidationOutcome::fail(
            format!(
                "The tensor converted from the integer array has dtype {:?}, expected I64",
                tensor_from_array.dtype()
            ),
            "Integer arrays convert to integer tensors; the element type crosses the boundary unchanged",
        ));
    }

    let tensor_values: Vec<i64> = tensor_from_array.flatten_all()?.to_vec1()?;
    let array_values: Vec<i64> = source_array.iter().copied().collect();
    if tensor_values != array_values {
        return Ok(ValidationOutcome::fail(
            "The tensor converted from the array does not match its values",
            "Element values must survive the conversion exactly; integers are not rounded",
        ));
    }

    // Tensor -> array direction
    if !shapes_match(source_tensor.dims(), array_from_tensor.shape()) {
        return Ok(ValidationOutcome::fail(
            format!(
                "The array converted from the tensor has shape {:?}, expected {:?}",
                array_from_tensor.shape(),
                source_tensor.dims()
            ),
            "Converting a tensor to an array keeps its shape; see interop::tensor_to_array_f32",
        ));
    }

    let expected: Vec<f32> = source_tensor.flatten_all()?.to_vec1()?;
    let actual: Vec<f32> = array_from_tensor.iter().copied().collect();
    if !all_close(&expected, &actual, Tolerance::default()) {
        return Ok(ValidationOutcome::fail(
            "The array converted from the tensor does not match its values",
            "Element values must survive the conversion within float precision",
        ));
    }

    Ok(ValidationOutcome::pass(
        "Array and tensor conversions agree in both directions",
    ))
}
