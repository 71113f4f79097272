//! Session configuration.

use stash_grid_core::TileSize;

use crate::types::{DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, DEFAULT_TILE_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Number of independent inventory containers.
    pub grid_count: usize,
    pub tile_size: f32,
    /// Catalog file (`.csv` or `.json`); the built-in table when unset.
    pub catalog_path: Option<String>,
    /// File receiving `tracing` output; logging is off when unset.
    pub log_path: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            grid_count: 1,
            tile_size: DEFAULT_TILE_SIZE,
            catalog_path: None,
            log_path: None,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    ///
    /// - `STASH_GRID_WIDTH`, `STASH_GRID_HEIGHT`: grid size in cells
    /// - `STASH_GRID_COUNT`: number of containers
    /// - `STASH_TILE_SIZE`: screen units per cell
    /// - `STASH_CATALOG`: catalog file path
    /// - `STASH_LOG_PATH`: log file path
    ///
    /// Missing or unparseable values fall back to the defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] with an explicit variable source.
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let positive_i32 = |key: &str, fallback: i32| {
            get(key)
                .and_then(|s| s.trim().parse::<i32>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(fallback)
        };
        let path = |key: &str| {
            get(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let grid_count = get("STASH_GRID_COUNT")
            .and_then(|s| s.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(defaults.grid_count);
        let tile_size = get("STASH_TILE_SIZE")
            .and_then(|s| s.trim().parse::<f32>().ok())
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(defaults.tile_size);

        Self {
            grid_width: positive_i32("STASH_GRID_WIDTH", defaults.grid_width),
            grid_height: positive_i32("STASH_GRID_HEIGHT", defaults.grid_height),
            grid_count,
            tile_size,
            catalog_path: path("STASH_CATALOG"),
            log_path: path("STASH_LOG_PATH"),
        }
    }

    pub fn tile(&self) -> TileSize {
        TileSize::square(self.tile_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        assert_eq!(SessionConfig::from_vars(vars(&[])), SessionConfig::default());
    }

    #[test]
    fn values_are_parsed() {
        let cfg = SessionConfig::from_vars(vars(&[
            ("STASH_GRID_WIDTH", "8"),
            ("STASH_GRID_HEIGHT", " 6 "),
            ("STASH_GRID_COUNT", "2"),
            ("STASH_TILE_SIZE", "48.5"),
            ("STASH_CATALOG", "loot.csv"),
            ("STASH_LOG_PATH", "/tmp/stash.log"),
        ]));
        assert_eq!((cfg.grid_width, cfg.grid_height, cfg.grid_count), (8, 6, 2));
        assert_eq!(cfg.tile(), TileSize::square(48.5));
        assert_eq!(cfg.catalog_path.as_deref(), Some("loot.csv"));
        assert_eq!(cfg.log_path.as_deref(), Some("/tmp/stash.log"));
    }

    #[test]
    fn garbage_falls_back() {
        let cfg = SessionConfig::from_vars(vars(&[
            ("STASH_GRID_WIDTH", "-3"),
            ("STASH_GRID_HEIGHT", "tall"),
            ("STASH_GRID_COUNT", "0"),
            ("STASH_TILE_SIZE", "NaN"),
            ("STASH_LOG_PATH", "   "),
        ]));
        assert_eq!(cfg, SessionConfig::default());
    }
}
