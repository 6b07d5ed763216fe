//! Platform-specific paths for layout files.
//!
//! - Linux: `~/.config/livefader/layouts/`
//! - macOS: `~/Library/Application Support/livefader/layouts/`
//! - Windows: `%APPDATA%\livefader\layouts\`

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "livefader";

/// Subdirectory name for layouts.
const LAYOUTS_SUBDIR: &str = "layouts";

/// Returns the user-specific layouts directory.
///
/// Falls back to `./livefader/layouts` if the config directory cannot be
/// determined.
pub fn user_layouts_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(LAYOUTS_SUBDIR)
}

/// Find a layout file by name or path.
///
/// `name` may be a path to an existing file, or a layout name (with or
/// without `.toml`) looked up in [`user_layouts_dir`].
pub fn find_layout(name: &str) -> Option<PathBuf> {
    find_layout_in(name, &user_layouts_dir())
}

fn find_layout_in(name: &str, dir: &Path) -> Option<PathBuf> {
    let path = PathBuf::from(name);
    if path.is_file() {
        return Some(path);
    }

    let filename = if name.ends_with(".toml") {
        name.to_string()
    } else {
        format!("{name}.toml")
    };

    let candidate = dir.join(filename);
    candidate.is_file().then_some(candidate)
}

/// Ensure the user layouts directory exists.
pub fn ensure_user_layouts_dir() -> Result<PathBuf, crate::ConfigError> {
    let dir = user_layouts_dir();

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| crate::ConfigError::create_dir(&dir, e))?;
    }

    Ok(dir)
}

/// List all layout files in the user layouts directory.
///
/// Returns an empty vector if the directory doesn't exist or can't be read.
pub fn list_user_layouts() -> Vec<PathBuf> {
    list_layouts_in_dir(&user_layouts_dir())
}

/// List `.toml` files in `dir`, sorted by path.
pub fn list_layouts_in_dir(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut layouts: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "toml"))
        .collect();
    layouts.sort();
    layouts
}

/// Layout name from a file path (the file stem).
///
/// ```rust
/// use livefader_config::paths::layout_name_from_path;
/// use std::path::Path;
///
/// let name = layout_name_from_path(Path::new("/path/to/mixer.toml"));
/// assert_eq!(name, Some("mixer".to_string()));
/// ```
pub fn layout_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(|s| s.to_string())
}
