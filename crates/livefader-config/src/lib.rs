//! Layout files for LiveFader fader banks.
//!
//! A [`Layout`] describes a bank of faders (range, value, direction, style,
//! notification mode, colors) and whether it starts in multi-edit mode. It
//! is stored as TOML and turned into a [`FaderGroup`](livefader_core::FaderGroup)
//! with [`Layout::build_group`].
//!
//! # Features
//!
//! - **Layout files**: load and save TOML layouts
//! - **Validation**: report every bad range, value, or color at once
//! - **Paths**: platform-specific user layout directory
//! - **Factory layouts**: built-in layouts that need no files
//!
//! # Example
//!
//! ```rust
//! use livefader_config::{FaderConfig, Layout};
//! use livefader_core::Style;
//!
//! let layout = Layout::new("Two faders")
//!     .with_fader(FaderConfig::new("Gain").with_range(-60.0, 12.0).with_value(0.0))
//!     .with_fader(FaderConfig::new("Mix").with_style(Style::FromBottom));
//!
//! let group = layout.build_group().unwrap();
//! assert_eq!(group.len(), 2);
//! ```

mod error;
mod layout;

/// Platform-specific paths for layout files.
pub mod paths;

/// Layout validation.
pub mod validation;

/// Factory layouts bundled with the library.
pub mod factory_layouts;

pub use error::ConfigError;
pub use factory_layouts::{
    FACTORY_LAYOUT_NAMES, factory_layout_names, factory_layouts, get_factory_layout,
    is_factory_layout,
};
pub use layout::{ColorConfig, FaderConfig, Layout};
pub use paths::{
    ensure_user_layouts_dir, find_layout, layout_name_from_path, list_user_layouts,
    user_layouts_dir,
};
pub use validation::{ValidationError, ValidationResult, validate_fader, validate_layout};

/// Resolve a layout by factory name, file path, or user layout name.
///
/// Factory layouts win over files with the same name.
pub fn load_layout(name: &str) -> Result<Layout, ConfigError> {
    if let Some(layout) = get_factory_layout(name) {
        return Ok(layout);
    }
    let path = find_layout(name).ok_or_else(|| ConfigError::LayoutNotFound(name.to_string()))?;
    Layout::load(path)
}
