//! Factory layouts bundled with the library.
//!
//! Embedded at compile time so the demo always has something to show.

use crate::Layout;

/// Array of factory layout names for external access.
pub static FACTORY_LAYOUT_NAMES: &[&str] = &["showcase", "mixer", "sends"];

/// TOML content for factory layouts.
static FACTORY_LAYOUTS_TOML: &[(&str, &str)] = &[
    ("showcase", SHOWCASE_LAYOUT),
    ("mixer", MIXER_LAYOUT),
    ("sends", SENDS_LAYOUT),
];

/// One fader per direction/style combination.
const SHOWCASE_LAYOUT: &str = r##"
name = "Showcase"
description = "Vertical and horizontal faders, filled from the bottom and from the middle"

[[faders]]
label = "Vertical / bottom"
value = 0.6
direction = "vertical"
style = "from_bottom"

[[faders]]
label = "Vertical / middle"
value = 0.7
direction = "vertical"
style = "from_middle"

[[faders]]
label = "Horizontal / bottom"
value = 0.4
direction = "horizontal"
style = "from_bottom"

[[faders]]
label = "Horizontal / middle"
value = 0.3
direction = "horizontal"
style = "from_middle"
"##;

/// Channel strip bank for the scroll view.
const MIXER_LAYOUT: &str = r##"
name = "Mixer"
description = "Twelve channel faders; switch on multi-edit to draw across them"

[[faders]]
label = "Kick"
value = 0.8
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#64B4FF"
highlighted_foreground = "#8CD2FF"
disabled_background = "#232328"
disabled_foreground = "#3C6488"

[[faders]]
label = "Snare"
value = 0.7
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#64B4FF"
highlighted_foreground = "#8CD2FF"
disabled_background = "#232328"
disabled_foreground = "#3C6488"

[[faders]]
label = "Hat"
value = 0.5
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#64B4FF"
highlighted_foreground = "#8CD2FF"
disabled_background = "#232328"
disabled_foreground = "#3C6488"

[[faders]]
label = "Tom 1"
value = 0.55
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#64B4FF"
highlighted_foreground = "#8CD2FF"
disabled_background = "#232328"
disabled_foreground = "#3C6488"

[[faders]]
label = "Tom 2"
value = 0.55
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#64B4FF"
highlighted_foreground = "#8CD2FF"
disabled_background = "#232328"
disabled_foreground = "#3C6488"

[[faders]]
label = "OH L"
value = 0.45
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#50C850"
highlighted_foreground = "#78E678"
disabled_background = "#232328"
disabled_foreground = "#3C783C"

[[faders]]
label = "OH R"
value = 0.45
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#50C850"
highlighted_foreground = "#78E678"
disabled_background = "#232328"
disabled_foreground = "#3C783C"

[[faders]]
label = "Bass"
value = 0.75
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#DCC83C"
highlighted_foreground = "#F0DC64"
disabled_background = "#232328"
disabled_foreground = "#786E28"

[[faders]]
label = "Keys"
value = 0.6
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#DCC83C"
highlighted_foreground = "#F0DC64"
disabled_background = "#232328"
disabled_foreground = "#786E28"

[[faders]]
label = "Gtr"
value = 0.65
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#DCC83C"
highlighted_foreground = "#F0DC64"
disabled_background = "#232328"
disabled_foreground = "#786E28"

[[faders]]
label = "Vox"
value = 0.85
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#DC3C3C"
highlighted_foreground = "#F06464"
disabled_background = "#232328"
disabled_foreground = "#782828"

[[faders]]
label = "Master"
value = 0.9
style = "from_bottom"
[faders.colors]
enabled_background = "#2D2D37"
enabled_foreground = "#E6E6EB"
highlighted_foreground = "#FFFFFF"
disabled_background = "#232328"
disabled_foreground = "#6E6E78"
"##;

/// Pan-style bipolar faders that notify only on release.
const SENDS_LAYOUT: &str = r##"
name = "Sends"
description = "Bipolar faders that report their value only when the gesture ends"
multi_edit = true

[[faders]]
label = "Pan 1"
min_value = -1.0
max_value = 1.0
style = "from_middle"
midpoint = "range_center"
continuous = false

[[faders]]
label = "Pan 2"
value = 0.5
min_value = -1.0
max_value = 1.0
style = "from_middle"
midpoint = "range_center"
continuous = false

[[faders]]
label = "Pan 3"
value = -0.5
min_value = -1.0
max_value = 1.0
style = "from_middle"
midpoint = "range_center"
continuous = false

[[faders]]
label = "Pan 4"
min_value = -1.0
max_value = 1.0
style = "from_middle"
midpoint = "range_center"
continuous = false
"##;

/// Get all factory layouts.
pub fn factory_layouts() -> Vec<Layout> {
    FACTORY_LAYOUTS_TOML
        .iter()
        .filter_map(|(_, toml)| Layout::from_toml(toml).ok())
        .collect()
}

/// Get a factory layout by name (case-insensitive).
///
/// Matches the internal identifier first, then the layout's `name` field.
///
/// ```rust
/// use livefader_config::get_factory_layout;
///
/// let layout = get_factory_layout("Mixer").unwrap();
/// assert_eq!(layout.name, "Mixer");
/// ```
pub fn get_factory_layout(name: &str) -> Option<Layout> {
    let name_lower = name.to_lowercase();

    for (layout_name, toml) in FACTORY_LAYOUTS_TOML {
        if layout_name.to_lowercase() == name_lower {
            return Layout::from_toml(toml).ok();
        }
    }

    FACTORY_LAYOUTS_TOML
        .iter()
        .filter_map(|(_, toml)| Layout::from_toml(toml).ok())
        .find(|layout| layout.name.to_lowercase() == name_lower)
}

/// Get the names of all factory layouts.
pub fn factory_layout_names() -> Vec<&'static str> {
    FACTORY_LAYOUTS_TOML.iter().map(|(name, _)| *name).collect()
}

/// Check if a layout name is a factory layout (case-insensitive).
pub fn is_factory_layout(name: &str) -> bool {
    get_factory_layout(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_layout;

    #[test]
    fn every_factory_layout_parses_and_validates() {
        assert_eq!(factory_layouts().len(), FACTORY_LAYOUT_NAMES.len());
        for layout in factory_layouts() {
            assert_eq!(validate_layout(&layout), Ok(()), "layout {}", layout.name);
            assert!(!layout.is_empty(), "layout {} has no faders", layout.name);
        }
    }

    #[test]
    fn names_match_table() {
        assert_eq!(factory_layout_names(), FACTORY_LAYOUT_NAMES.to_vec());
    }

    #[test]
    fn showcase_covers_every_combination() {
        use livefader_core::{Direction, Style};
        let layout = get_factory_layout("showcase").unwrap();
        let combos: Vec<_> = layout.faders.iter().map(|f| (f.direction, f.style)).collect();
        assert_eq!(
            combos,
            vec![
                (Direction::Vertical, Style::FromBottom),
                (Direction::Vertical, Style::FromMiddle),
                (Direction::Horizontal, Style::FromBottom),
                (Direction::Horizontal, Style::FromMiddle),
            ]
        );
    }

    #[test]
    fn lookup_is_case_insensitive() {
        assert!(is_factory_layout("SENDS"));
        assert!(is_factory_layout("Showcase"));
        assert!(!is_factory_layout("studio"));
    }

    #[test]
    fn sends_start_in_multi_edit() {
        let group = get_factory_layout("sends").unwrap().build_group().unwrap();
        assert!(group.is_multi_edit_enabled());
        assert!(group.iter().all(|(_, f)| !f.is_continuous()));
    }
}
