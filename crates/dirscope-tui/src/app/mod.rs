//! Main application state and logic.

pub(crate) mod constants;
mod navigation;
mod render;

use std::path::Path;

use color_eyre::eyre::eyre;
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use dirscope_core::{ScanError, Scanner};

use crate::error::SessionError;
use crate::event::{KeyAction, KeySource};
use crate::theme::Theme;
use crate::ui::AppLayout;

pub use self::navigation::{Navigator, Outcome};
pub use self::render::{footer_summary, render_app, RenderContext};

/// Application result type.
pub type AppResult<T> = color_eyre::Result<T>;

/// Interactive session: navigation state plus what is drawn around it.
#[derive(Debug)]
pub struct App<S> {
    navigator: Navigator<S>,
    theme: Theme,
    /// Message from the last failed step, cleared by the next success.
    banner: Option<String>,
    /// Entry rows available in the most recent frame.
    visible_rows: usize,
}

impl<S: Scanner> App<S> {
    /// Scan `start_path` and build the session around the result.
    pub fn new(scanner: S, start_path: &Path, theme: Theme) -> Result<Self, ScanError> {
        Ok(Self::from_navigator(Navigator::start(scanner, start_path)?, theme))
    }

    /// Wrap an already started navigator.
    pub fn from_navigator(navigator: Navigator<S>, theme: Theme) -> Self {
        Self {
            navigator,
            theme,
            banner: None,
            visible_rows: 1,
        }
    }

    /// The navigation state.
    pub fn navigator(&self) -> &Navigator<S> {
        &self.navigator
    }

    /// Current status banner, if the last step failed.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Run the draw / read / apply loop until the user quits or the key
    /// source runs dry.
    pub fn run<B: Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
        keys: &mut impl KeySource,
    ) -> AppResult<()> {
        loop {
            terminal
                .draw(|frame| self.draw(frame))
                .map_err(|err| eyre!("failed to draw frame: {err}"))?;

            let Some(action) = keys.next_action().map_err(SessionError::Terminal)? else {
                return Ok(());
            };

            if self.handle_action(action) {
                return Ok(());
            }
        }
    }

    /// Apply one action. Returns `true` when the session should end.
    pub fn handle_action(&mut self, action: KeyAction) -> bool {
        match self.navigator.handle(action, self.visible_rows) {
            Outcome::Exit => return true,
            Outcome::Failed(err) => {
                debug!(error = %err, "showing error banner");
                self.banner = Some(err.to_string());
            }
            Outcome::Moved | Outcome::ViewChanged => self.banner = None,
            Outcome::Ignored => {}
        }
        false
    }

    /// Lay out the frame, bring the selection into view, and draw.
    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        self.visible_rows = AppLayout::new(area).visible_rows();
        self.navigator.ensure_visible(self.visible_rows);
        self.render(frame);
    }

    fn render(&self, frame: &mut Frame) {
        let ctx = RenderContext {
            theme: &self.theme,
            path: self.navigator.current_path(),
            view: self.navigator.view(),
            selected: self.navigator.selected(),
            offset: self.navigator.offset(),
            banner: self.banner.as_deref(),
        };
        let area = frame.area();
        render_app(&ctx, area, frame.buffer_mut());
    }
}
