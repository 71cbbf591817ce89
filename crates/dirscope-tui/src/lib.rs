//! Terminal user interface for dirscope.
//!
//! This crate drives an interactive session over a [`Scanner`]: it shows
//! the immediate subdirectories of one directory ranked by recursive
//! size, and rescans as the user moves through the hierarchy.
//!
//! # Usage
//!
//! ```rust,no_run
//! use dirscope_tui::TuiConfig;
//! use std::path::Path;
//!
//! dirscope_tui::run_with_config(Path::new("/var/log"), TuiConfig::default()).unwrap();
//! ```
//!
//! # Keyboard Navigation
//!
//! - `↑`/`k`, `↓`/`j` - Move selection
//! - `Enter` - Drill into the selected directory
//! - `Backspace` - Go to the parent directory
//! - `r` - Rescan the current directory
//! - `q` - Quit

pub mod app;
mod error;
mod event;
mod theme;
mod ui;

use std::path::Path;
use std::process::ExitCode;

use color_eyre::eyre::WrapErr;
use dirscope_core::{ScanConfig, Scanner};
use dirscope_scan::DirScanner;
use ratatui::backend::Backend;
use ratatui::Terminal;

pub use app::{App, AppResult, Navigator, Outcome};
pub use error::{NavigationError, SessionError};
pub use event::{CrosstermKeys, KeyAction, KeySource};
pub use theme::{Theme, ThemeVariant};

/// Configuration for an interactive session.
#[derive(Debug, Clone, Default)]
pub struct TuiConfig {
    /// Color palette.
    pub theme: ThemeVariant,
    /// Scanner configuration.
    pub scan: ScanConfig,
}

impl TuiConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the theme variant.
    pub fn with_theme(mut self, theme: ThemeVariant) -> Self {
        self.theme = theme;
        self
    }

    /// Set the scanner configuration.
    pub fn with_scan_config(mut self, scan: ScanConfig) -> Self {
        self.scan = scan;
        self
    }
}

/// Run an interactive session rooted at `path`.
///
/// The first scan happens before the terminal is taken over, so a
/// directory that cannot be read is reported on a normal screen.
pub fn run_with_config(path: &Path, config: TuiConfig) -> AppResult<()> {
    let scanner = DirScanner::with_config(config.scan);
    let mut app = App::new(scanner, path, Theme::from_variant(config.theme))
        .map_err(SessionError::Startup)?;

    let mut terminal = ratatui::init();
    let result = run_app(&mut app, &mut terminal, &mut CrosstermKeys);
    ratatui::restore();

    result
}

/// Drive `app` on any backend and key source.
pub fn run_app<S: Scanner, B: Backend>(
    app: &mut App<S>,
    terminal: &mut Terminal<B>,
    keys: &mut impl KeySource,
) -> AppResult<()> {
    app.run(terminal, keys).wrap_err("interactive session failed")
}

/// Run a session and map its result to a process exit status.
pub fn start_session(path: &Path, config: TuiConfig) -> ExitCode {
    match run_with_config(path, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builders() {
        let scan = ScanConfig::builder().threads(4usize).build().unwrap();
        let config = TuiConfig::new()
            .with_theme(ThemeVariant::Light)
            .with_scan_config(scan);

        assert_eq!(config.theme, ThemeVariant::Light);
        assert_eq!(config.scan.threads, 4);
    }

    #[test]
    fn test_startup_failure_is_reported() {
        let temp = tempfile::TempDir::new().unwrap();
        let missing = temp.path().join("missing");

        let err = run_with_config(&missing, TuiConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("could not scan directory"));
    }
}
