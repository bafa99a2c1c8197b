//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Mosaic Configuration
# Only override what you want to change -- missing fields use defaults.

[layout]
# gap = 6                      # 0-20
# outer_padding = 0            # 0-40
# default_corner = "top-right" # top-left | top-right | bottom-left | bottom-right
# expand_percentage = 70.0     # 50-100
# resize_step = 5              # 1-25
# min_split_percentage = 10.0  # 0-100
# max_split_percentage = 90.0  # 0-100
"##
}
