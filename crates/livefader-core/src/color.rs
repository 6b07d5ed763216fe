//! Fader colors and their state-dependent resolution.
//!
//! A fader paints two regions: the background and the fill ("foreground").
//! Each has an enabled color plus optional highlighted and disabled
//! overrides. [`FaderColors::resolve`] picks the pair for the current
//! `(enabled, highlighted)` state.
//!
//! | enabled | highlighted | background / foreground            |
//! |---------|-------------|------------------------------------|
//! | `false` | any         | disabled (fallback: enabled)       |
//! | `true`  | `true`      | highlighted (fallback: enabled)    |
//! | `true`  | `false`     | enabled                            |

use core::fmt;

/// 8-bit sRGB color with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgba {
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
    /// Alpha, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Opaque light gray (two thirds white).
    pub const LIGHT_GRAY: Self = Self::rgb(170, 170, 170);
    /// Opaque pure blue.
    pub const BLUE: Self = Self::rgb(0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Opaque color from components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Color from components including alpha.
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (the `#` is optional, case-insensitive).
    ///
    /// Returns `None` for any other shape.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if !hex.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
        match hex.len() {
            6 => Some(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => None,
        }
    }

    /// Format as `#RRGGBB`, or `#RRGGBBAA` when not fully opaque.
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

/// The two colors a fader paints with in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedColors {
    /// Color of the whole fader area.
    pub background: Rgba,
    /// Color of the fill region.
    pub foreground: Rgba,
}

/// Color configuration for every fader state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FaderColors {
    /// Background while enabled.
    pub enabled_background: Rgba,
    /// Fill while enabled.
    pub enabled_foreground: Rgba,
    /// Background while highlighted. Falls back to `enabled_background`.
    pub highlighted_background: Option<Rgba>,
    /// Fill while highlighted. Falls back to `enabled_foreground`.
    pub highlighted_foreground: Option<Rgba>,
    /// Background while disabled. Falls back to `enabled_background`.
    pub disabled_background: Option<Rgba>,
    /// Fill while disabled. Falls back to `enabled_foreground`.
    pub disabled_foreground: Option<Rgba>,
}

impl Default for FaderColors {
    fn default() -> Self {
        Self {
            enabled_background: Rgba::LIGHT_GRAY,
            enabled_foreground: Rgba::BLUE,
            highlighted_background: None,
            highlighted_foreground: None,
            disabled_background: Some(Rgba::LIGHT_GRAY),
            disabled_foreground: Some(Rgba::BLUE),
        }
    }
}

impl FaderColors {
    /// Enabled colors only; every override unset.
    pub fn new(background: Rgba, foreground: Rgba) -> Self {
        Self {
            enabled_background: background,
            enabled_foreground: foreground,
            highlighted_background: None,
            highlighted_foreground: None,
            disabled_background: None,
            disabled_foreground: None,
        }
    }

    /// Set the highlighted pair.
    pub fn with_highlighted(mut self, background: Rgba, foreground: Rgba) -> Self {
        self.highlighted_background = Some(background);
        self.highlighted_foreground = Some(foreground);
        self
    }

    /// Set the disabled pair.
    pub fn with_disabled(mut self, background: Rgba, foreground: Rgba) -> Self {
        self.disabled_background = Some(background);
        self.disabled_foreground = Some(foreground);
        self
    }

    /// Pick the colors for a control state.
    pub fn resolve(&self, enabled: bool, highlighted: bool) -> AppliedColors {
        let (background, foreground) = if !enabled {
            (self.disabled_background, self.disabled_foreground)
        } else if highlighted {
            (self.highlighted_background, self.highlighted_foreground)
        } else {
            (None, None)
        };
        AppliedColors {
            background: background.unwrap_or(self.enabled_background),
            foreground: foreground.unwrap_or(self.enabled_foreground),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    const DARK: Rgba = Rgba::rgb(20, 20, 20);

    fn full() -> FaderColors {
        FaderColors::new(Rgba::LIGHT_GRAY, Rgba::BLUE)
            .with_highlighted(RED, GREEN)
            .with_disabled(DARK, Rgba::WHITE)
    }

    #[test]
    fn resolve_enabled() {
        let c = full().resolve(true, false);
        assert_eq!(c.background, Rgba::LIGHT_GRAY);
        assert_eq!(c.foreground, Rgba::BLUE);
    }

    #[test]
    fn resolve_highlighted() {
        let c = full().resolve(true, true);
        assert_eq!(c.background, RED);
        assert_eq!(c.foreground, GREEN);
    }

    #[test]
    fn resolve_disabled_ignores_highlight() {
        assert_eq!(full().resolve(false, true), full().resolve(false, false));
        assert_eq!(full().resolve(false, false).background, DARK);
        assert_eq!(full().resolve(false, false).foreground, Rgba::WHITE);
    }

    #[test]
    fn unset_overrides_fall_back_to_enabled() {
        let colors = FaderColors::new(RED, GREEN);
        let enabled = colors.resolve(true, false);
        assert_eq!(colors.resolve(true, true), enabled);
        assert_eq!(colors.resolve(false, false), enabled);
    }

    #[test]
    fn hex_parsing() {
        assert_eq!(Rgba::from_hex("#FF0000"), Some(RED));
        assert_eq!(Rgba::from_hex("00ff00"), Some(GREEN));
        assert_eq!(Rgba::from_hex("#0000FF80"), Some(Rgba::rgba(0, 0, 255, 128)));
        assert_eq!(Rgba::from_hex("#FFF"), None);
        assert_eq!(Rgba::from_hex("#GG0000"), None);
        assert_eq!(Rgba::from_hex("#ÿÿÿ"), None);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(RED.to_hex(), "#FF0000");
        assert_eq!(Rgba::rgba(1, 2, 3, 4).to_hex(), "#01020304");
        assert_eq!(Rgba::from_hex(&Rgba::LIGHT_GRAY.to_hex()), Some(Rgba::LIGHT_GRAY));
    }
}
