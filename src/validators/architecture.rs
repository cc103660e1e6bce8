//! Graders for the model architecture exercises
//!
//! Architecture checks compare the model's declared layer sequence against
//! an expected specification, in order. Runtime behavior is never inspected.

use anyhow::Result;

use super::ValidationOutcome;
use crate::models::{ConvBlock, LayerSpec, Mlp, TransferClassifier};

fn expected_mlp_layers() -> Vec<LayerSpec> {
    vec![
        LayerSpec::Linear {
            in_features: 3072,
            out_features: 512,
        },
        LayerSpec::ReLU,
        LayerSpec::Linear {
            in_features: 512,
            out_features: 256,
        },
        LayerSpec::ReLU,
        LayerSpec::Linear {
            in_features: 256,
            out_features: 10,
        },
    ]
}

fn expected_conv_layers() -> Vec<LayerSpec> {
    vec![
        LayerSpec::Conv2d {
            in_channels: 3,
            out_channels: 32,
            kernel_size: 3,
            padding: 1,
        },
        LayerSpec::BatchNorm2d { num_features: 32 },
        LayerSpec::ReLU,
        LayerSpec::MaxPool2d { kernel_size: 2 },
    ]
}

fn expected_transfer_head() -> LayerSpec {
    LayerSpec::Linear {
        in_features: 512,
        out_features: 10,
    }
}

/// Compare a declared layer sequence against the expected one, in order
pub fn check_layer_sequence(expected: &[LayerSpec], actual: &[LayerSpec]) -> ValidationOutcome {
    let hint = format!("Declare the layers in order: {}", render_sequence(expected));

    for (position, (want, got)) in expected.iter().zip(actual.iter()).enumerate() {
        if want != got {
            return ValidationOutcome::fail(
                format!("Layer {} is {}, expected {}", position + 1, got, want),
                hint,
            );
        }
    }

    if actual.len() < expected.len() {
        return ValidationOutcome::fail(
            format!(
                "Found {} layers, expected {}; missing {}",
                actual.len(),
                expected.len(),
                expected[actual.len()]
            ),
            hint,
        );
    }
    if actual.len() > expected.len() {
        return ValidationOutcome::fail(
            format!(
                "Found {} layers, expected {}; unexpected {}",
                actual.len(),
                expected.len(),
                actual[expected.len()]
            ),
            hint,
        );
    }

    ValidationOutcome::pass("Declared layers match the expected architecture")
}

fn render_sequence(layers: &[LayerSpec]) -> String {
    let parts: Vec<String> = layers.iter().map(|l| l.to_string()).collect();
    parts.join(", ")
}

/// Grade the MLP architecture exercise
///
/// Expects fully-connected 3072 -> 512 -> 256 -> 10 with ReLU between the
/// layers, declared in forward order.
pub fn validate_mlp_architecture(model: &Mlp) -> Result<ValidationOutcome> {
    Ok(check_layer_sequence(&expected_mlp_layers(), &model.spec()))
}

/// Grade the CNN block exercise
///
/// Expects convolution 3 -> 32 kernel 3 padding 1, batch normalization,
/// ReLU, and max pooling with kernel 2, in that order.
pub fn validate_conv_block(model: &ConvBlock) -> Result<ValidationOutcome> {
    Ok(check_layer_sequence(&expected_conv_layers(), &model.spec()))
}

/// Grade the transfer-learning setup exercise
///
/// The backbone must be frozen and the classification head replaced with a
/// fully-connected 512 -> 10 layer.
pub fn validate_transfer_setup(model: &TransferClassifier) -> Result<ValidationOutcome> {
    if !model.backbone_frozen() {
        return Ok(ValidationOutcome::fail(
            "The backbone is still trainable",
            "Freeze the pretrained backbone so only the new classification head learns",
        ));
    }

    let expected = expected_transfer_head();
    let head = model.head_spec();
    if head != expected {
        return Ok(ValidationOutcome::fail(
            format!("The classification head is {}, expected {}", head, expected),
            "Replace the head with a fully-connected layer mapping the backbone \
             features to the 10 target classes",
        ));
    }

    Ok(ValidationOutcome::pass(
        "Backbone frozen and classification head replaced correctly",
    ))
}
