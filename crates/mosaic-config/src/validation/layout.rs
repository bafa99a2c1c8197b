//! Layout configuration validation (gaps, padding, split bounds).

use crate::schema::MosaicConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate all layout-related constraints.
pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &MosaicConfig) {
    let layout = &config.layout;
    validate_range(errors, "layout.gap", layout.gap, 0, 20);
    validate_range(errors, "layout.outer_padding", layout.outer_padding, 0, 40);
    validate_range(errors, "layout.resize_step", layout.resize_step, 1, 25);
    validate_range_f64(
        errors,
        "layout.expand_percentage",
        layout.expand_percentage,
        50.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "layout.min_split_percentage",
        layout.min_split_percentage,
        0.0,
        100.0,
    );
    validate_range_f64(
        errors,
        "layout.max_split_percentage",
        layout.max_split_percentage,
        0.0,
        100.0,
    );
    if layout.min_split_percentage > layout.max_split_percentage {
        errors.push(format!(
            "layout.min_split_percentage = {} exceeds layout.max_split_percentage = {}",
            layout.min_split_percentage, layout.max_split_percentage
        ));
    }
}
