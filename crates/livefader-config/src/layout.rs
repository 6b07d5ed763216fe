//! Layout file format and conversion into fader models.

use serde::{Deserialize, Serialize};
use std::path::Path;

use livefader_core::{Direction, Fader, FaderColors, FaderGroup, MidpointRule, Rgba, Style};

use crate::error::ConfigError;
use crate::validation::ValidationError;

/// A bank of faders stored as TOML.
///
/// # TOML Format
///
/// ```toml
/// name = "Mixer"
/// description = "Eight channel faders"
/// multi_edit = false
///
/// [[faders]]
/// label = "Kick"
/// value = 0.8
/// direction = "vertical"
/// style = "from_bottom"
/// continuous = true
/// [faders.colors]
/// enabled_background = "#2A2A33"
/// enabled_foreground = "#64B4FF"
/// highlighted_foreground = "#8CD2FF"
///
/// [[faders]]
/// label = "Pan"
/// min_value = -1.0
/// max_value = 1.0
/// style = "from_middle"
/// midpoint = "range_center"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Layout {
    /// Name of the layout.
    pub name: String,

    /// Optional description of the layout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Start in multi-edit mode.
    #[serde(default)]
    pub multi_edit: bool,

    /// Faders in display order.
    #[serde(default)]
    pub faders: Vec<FaderConfig>,
}

impl Layout {
    /// Create a new empty layout.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            multi_edit: false,
            faders: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Start in multi-edit mode.
    pub fn with_multi_edit(mut self, multi_edit: bool) -> Self {
        self.multi_edit = multi_edit;
        self
    }

    /// Add a fader.
    pub fn with_fader(mut self, fader: FaderConfig) -> Self {
        self.faders.push(fader);
        self
    }

    /// Load a layout from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        let layout: Layout = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), faders = layout.faders.len(), "loaded layout");
        Ok(layout)
    }

    /// Load a layout from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the layout to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))?;
        Ok(())
    }

    /// Convert the layout to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Number of faders.
    pub fn len(&self) -> usize {
        self.faders.len()
    }

    /// Whether the layout has no faders.
    pub fn is_empty(&self) -> bool {
        self.faders.is_empty()
    }

    /// Fader labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.faders.iter().map(|f| f.label.clone()).collect()
    }

    /// Build the fader group described by this layout.
    ///
    /// Values outside a fader's range are clamped; use
    /// [`validate_layout`](crate::validate_layout) to reject them instead.
    pub fn build_group(&self) -> Result<FaderGroup, ConfigError> {
        let faders = self
            .faders
            .iter()
            .map(FaderConfig::build)
            .collect::<Result<Vec<_>, _>>()?;
        let mut group = FaderGroup::from_faders(faders);
        if self.multi_edit {
            group.set_multi_edit_enabled(true);
        }
        Ok(group)
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

fn default_max_value() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

/// One fader entry of a [`Layout`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FaderConfig {
    /// Display label.
    #[serde(default)]
    pub label: String,

    /// Initial value.
    #[serde(default)]
    pub value: f64,

    /// Lower bound.
    #[serde(default)]
    pub min_value: f64,

    /// Upper bound.
    #[serde(default = "default_max_value")]
    pub max_value: f64,

    /// Primary axis.
    #[serde(default)]
    pub direction: Direction,

    /// Fill anchor.
    #[serde(default)]
    pub style: Style,

    /// Notify on every gesture event instead of only the last one.
    #[serde(default = "default_true")]
    pub continuous: bool,

    /// Single taps set the value.
    #[serde(default = "default_true")]
    pub tap_enabled: bool,

    /// Midpoint rule for from-middle faders.
    #[serde(default)]
    pub midpoint: MidpointRule,

    /// Color overrides.
    #[serde(default)]
    pub colors: ColorConfig,
}

impl Default for FaderConfig {
    fn default() -> Self {
        Self::new("")
    }
}

impl FaderConfig {
    /// Entry with the model's defaults.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: 0.0,
            min_value: 0.0,
            max_value: default_max_value(),
            direction: Direction::default(),
            style: Style::default(),
            continuous: true,
            tap_enabled: true,
            midpoint: MidpointRule::default(),
            colors: ColorConfig::default(),
        }
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: f64) -> Self {
        self.value = value;
        self
    }

    /// Set the bounds.
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min_value = min;
        self.max_value = max;
        self
    }

    /// Set the primary axis.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Set the fill anchor.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set continuous notification.
    pub fn with_continuous(mut self, continuous: bool) -> Self {
        self.continuous = continuous;
        self
    }

    /// Set the midpoint rule.
    pub fn with_midpoint(mut self, midpoint: MidpointRule) -> Self {
        self.midpoint = midpoint;
        self
    }

    /// Set the color overrides.
    pub fn with_colors(mut self, colors: ColorConfig) -> Self {
        self.colors = colors;
        self
    }

    /// Build the fader model.
    pub fn build(&self) -> Result<Fader, ConfigError> {
        let colors = self.colors.resolve(&self.label)?;
        let mut fader = Fader::new()
            .with_range(self.min_value, self.max_value)
            .map_err(|e| ConfigError::invalid_fader(&self.label, e))?
            .with_direction(self.direction)
            .with_style(self.style)
            .with_continuous(self.continuous)
            .with_colors(colors)
            .with_value(self.value);
        fader.set_tap_enabled(self.tap_enabled);
        fader.set_midpoint_rule(self.midpoint);
        Ok(fader)
    }
}

/// Color overrides as hex strings (`#RRGGBB` or `#RRGGBBAA`).
///
/// Unset entries keep the model defaults: light gray background, blue fill,
/// no highlighted override, light gray / blue when disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColorConfig {
    /// Background while enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_background: Option<String>,
    /// Fill while enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled_foreground: Option<String>,
    /// Background while highlighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_background: Option<String>,
    /// Fill while highlighted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlighted_foreground: Option<String>,
    /// Background while disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_background: Option<String>,
    /// Fill while disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled_foreground: Option<String>,
}

impl ColorConfig {
    /// Hex strings for every color of `colors`.
    pub fn from_colors(colors: &FaderColors) -> Self {
        Self {
            enabled_background: Some(colors.enabled_background.to_hex()),
            enabled_foreground: Some(colors.enabled_foreground.to_hex()),
            highlighted_background: colors.highlighted_background.map(Rgba::to_hex),
            highlighted_foreground: colors.highlighted_foreground.map(Rgba::to_hex),
            disabled_background: colors.disabled_background.map(Rgba::to_hex),
            disabled_foreground: colors.disabled_foreground.map(Rgba::to_hex),
        }
    }

    /// Parse every set entry, layering it over the defaults.
    ///
    /// `label` names the owning fader in error messages.
    pub fn resolve(&self, label: &str) -> Result<FaderColors, ValidationError> {
        let parse = |field: &'static str, value: &Option<String>| -> Result<Option<Rgba>, ValidationError> {
            value
                .as_deref()
                .map(|hex| {
                    Rgba::from_hex(hex).ok_or_else(|| ValidationError::InvalidColor {
                        fader: label.to_string(),
                        field,
                        value: hex.to_string(),
                    })
                })
                .transpose()
        };

        let mut colors = FaderColors::default();
        if let Some(c) = parse("enabled_background", &self.enabled_background)? {
            colors.enabled_background = c;
        }
        if let Some(c) = parse("enabled_foreground", &self.enabled_foreground)? {
            colors.enabled_foreground = c;
        }
        if let Some(c) = parse("highlighted_background", &self.highlighted_background)? {
            colors.highlighted_background = Some(c);
        }
        if let Some(c) = parse("highlighted_foreground", &self.highlighted_foreground)? {
            colors.highlighted_foreground = Some(c);
        }
        if let Some(c) = parse("disabled_background", &self.disabled_background)? {
            colors.disabled_background = Some(c);
        }
        if let Some(c) = parse("disabled_foreground", &self.disabled_foreground)? {
            colors.disabled_foreground = Some(c);
        }
        Ok(colors)
    }
}
