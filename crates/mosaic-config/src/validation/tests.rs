//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = MosaicConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_gap_too_large() {
    let mut config = MosaicConfig::default();
    config.layout.gap = 25;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gap"));
}

#[test]
fn catches_resize_step_zero() {
    let mut config = MosaicConfig::default();
    config.layout.resize_step = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.resize_step"));
}

#[test]
fn catches_expand_percentage_below_half() {
    let mut config = MosaicConfig::default();
    config.layout.expand_percentage = 30.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.expand_percentage"));
}

#[test]
fn catches_nan_percentage() {
    let mut config = MosaicConfig::default();
    config.layout.max_split_percentage = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.max_split_percentage"));
}

#[test]
fn catches_inverted_split_bounds() {
    let mut config = MosaicConfig::default();
    config.layout.min_split_percentage = 80.0;
    config.layout.max_split_percentage = 20.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("exceeds"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = MosaicConfig::default();
    config.layout.gap = 100;
    config.layout.outer_padding = 100;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("layout.gap"));
    assert!(err.contains("layout.outer_padding"));
    assert!(err.contains("; "));
}
