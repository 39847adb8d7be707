//! Runtime configuration read from environment variables.

use std::env;
use std::path::PathBuf;

/// Startup settings for the terminal game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the best score is persisted
    pub best_path: PathBuf,
    /// Fixed RNG seed; `None` draws a fresh one per launch
    pub seed: Option<u32>,
    /// File receiving log output; `None` keeps logging off
    pub log_path: Option<PathBuf>,
    pub bell: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl AppConfig {
    /// Create from `TUI_2048_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (tests pass a map here).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .and_then(|s| if s.is_empty() { None } else { Some(s) })
        };

        let best_path = non_empty("TUI_2048_BEST_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| default_best_path(non_empty("HOME")));

        let seed = non_empty("TUI_2048_SEED").and_then(|s| s.parse().ok());

        let log_path = non_empty("TUI_2048_LOG_PATH").map(PathBuf::from);

        let bell = !non_empty("TUI_2048_NO_BELL")
            .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Self {
            best_path,
            seed,
            log_path,
            bell,
        }
    }

    /// The configured seed, or a random one.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(rand::random)
    }
}

fn default_best_path(home: Option<String>) -> PathBuf {
    match home {
        Some(home) => PathBuf::from(home).join(".tui-2048").join("best.json"),
        None => PathBuf::from("tui-2048-best.json"),
    }
}
