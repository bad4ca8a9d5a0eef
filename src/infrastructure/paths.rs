//! Sandbox path utilities.

use std::path::PathBuf;

/// Sandbox view of the user's home directory.
pub const HOST_HOME: &str = "/host";

/// Plugin data directory, `~/.local/share/zellij/pokedexer` on the host.
///
/// ```
/// use pokedexer::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/pokedexer"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from(HOST_HOME).join(".local/share/zellij/pokedexer")
}

/// Rewrites a leading `~` to the sandbox home. Other paths are returned unchanged.
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => HOST_HOME.to_string(),
        Some(rest) if rest.starts_with('/') => format!("{HOST_HOME}{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_maps_to_sandbox_home() {
        assert_eq!(expand_tilde("~"), "/host");
        assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
    }

    #[test]
    fn other_paths_are_untouched() {
        assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
        assert_eq!(expand_tilde("~ash/theme.toml"), "~ash/theme.toml");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
    }
}
