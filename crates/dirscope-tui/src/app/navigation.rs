//! Navigation state machine.
//!
//! [`Navigator`] owns the current location, the view scanned for it, and
//! the selection and scroll position inside that view. Every key action
//! is applied synchronously: a scan blocks until it completes, and the
//! resulting view replaces the old one only once it is in hand.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use dirscope_core::{DirectoryView, ScanError, Scanner};

use crate::error::NavigationError;
use crate::event::KeyAction;

/// Result of applying one action.
#[derive(Debug)]
pub enum Outcome {
    /// Precondition not met; nothing changed.
    Ignored,
    /// Selection or scroll moved inside the current view.
    Moved,
    /// A freshly scanned view was adopted.
    ViewChanged,
    /// The step failed. The navigator still holds a valid view.
    Failed(NavigationError),
    /// The user asked to quit.
    Exit,
}

/// Current location, its view, and the selection inside it.
#[derive(Debug)]
pub struct Navigator<S> {
    scanner: S,
    current_path: PathBuf,
    view: DirectoryView,
    selected: usize,
    offset: usize,
}

impl<S: Scanner> Navigator<S> {
    /// Resolve `start_path` and perform the initial scan.
    ///
    /// If the path cannot be resolved it is used verbatim. A failing scan
    /// here is fatal for the session and is returned to the caller.
    pub fn start(scanner: S, start_path: &Path) -> Result<Self, ScanError> {
        let current_path = scanner
            .resolve(start_path)
            .unwrap_or_else(|_| start_path.to_path_buf());
        let view = scanner.scan(&current_path)?;

        info!(path = %current_path.display(), "session started");

        Ok(Self {
            scanner,
            current_path,
            view,
            selected: 0,
            offset: 0,
        })
    }

    /// Path of the view currently displayed.
    pub fn current_path(&self) -> &Path {
        &self.current_path
    }

    /// The active view.
    pub fn view(&self) -> &DirectoryView {
        &self.view
    }

    /// Index of the selected entry (0 when the view is empty).
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Index of the first visible entry row.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Apply `action` against a viewport of `visible_rows` entry rows.
    pub fn handle(&mut self, action: KeyAction, visible_rows: usize) -> Outcome {
        let rows = visible_rows.max(1);

        match action {
            KeyAction::Quit => Outcome::Exit,
            KeyAction::MoveUp => self.move_up(),
            KeyAction::MoveDown => self.move_down(rows),
            KeyAction::JumpToTop => self.select(0, rows),
            KeyAction::JumpToBottom => self.select(self.max_index(), rows),
            KeyAction::PageUp => self.select(self.selected.saturating_sub(rows), rows),
            KeyAction::PageDown => self.select(self.selected.saturating_add(rows), rows),
            KeyAction::Enter => self.enter(rows),
            KeyAction::GoToParent => self.go_to_parent(),
            KeyAction::Rescan => self.rescan(),
            KeyAction::None => Outcome::Ignored,
        }
    }

    /// Clamp selection into the view and scroll so it is on screen.
    ///
    /// The viewport height can change between frames, so this runs before
    /// every render with whatever height that render provides.
    pub fn ensure_visible(&mut self, visible_rows: usize) {
        let rows = visible_rows.max(1);

        self.selected = self.selected.min(self.max_index());
        self.offset = self.offset.min(self.max_index());

        if self.selected < self.offset {
            self.offset = self.selected;
        } else if self.selected >= self.offset + rows {
            self.offset = self.selected - rows + 1;
        }
    }

    fn max_index(&self) -> usize {
        self.view.len().saturating_sub(1)
    }

    fn move_up(&mut self) -> Outcome {
        if self.selected == 0 {
            return Outcome::Ignored;
        }
        self.selected -= 1;
        if self.selected < self.offset {
            self.offset = self.selected;
        }
        Outcome::Moved
    }

    fn move_down(&mut self, rows: usize) -> Outcome {
        if self.selected + 1 >= self.view.len() {
            return Outcome::Ignored;
        }
        self.selected += 1;
        if self.selected >= self.offset + rows {
            self.offset = self.selected - rows + 1;
        }
        Outcome::Moved
    }

    fn select(&mut self, index: usize, rows: usize) -> Outcome {
        let index = index.min(self.max_index());
        if index == self.selected {
            return Outcome::Ignored;
        }
        self.selected = index;
        self.ensure_visible(rows);
        Outcome::Moved
    }

    fn enter(&mut self, rows: usize) -> Outcome {
        let Some(entry) = self.view.get(self.selected) else {
            return Outcome::Ignored;
        };
        let entry_path = entry.full_path().to_path_buf();

        let target = match self.scanner.resolve(&entry_path) {
            Ok(path) => path,
            Err(source) => {
                warn!(path = %entry_path.display(), error = %source, "cannot resolve entry");
                return Outcome::Failed(NavigationError::PathResolution {
                    path: entry_path,
                    source,
                });
            }
        };

        let err = match self.scanner.scan(&target) {
            Ok(view) => {
                info!(path = %target.display(), "entered directory");
                self.adopt(target, view);
                return Outcome::ViewChanged;
            }
            Err(err) => err,
        };

        warn!(path = %target.display(), error = %err, "cannot enter directory, reloading current");

        // Stay where we were, with a fresh look at it
        match self.scanner.scan(&self.current_path) {
            Ok(view) => {
                self.view = view;
                self.ensure_visible(rows);
                Outcome::Failed(NavigationError::Scan(err))
            }
            Err(source) => {
                warn!(path = %self.current_path.display(), error = %source, "reload failed, keeping previous view");
                Outcome::Failed(NavigationError::Recovery {
                    path: self.current_path.clone(),
                    source,
                })
            }
        }
    }

    fn go_to_parent(&mut self) -> Outcome {
        let Some(parent) = self.current_path.parent().map(Path::to_path_buf) else {
            return Outcome::Ignored;
        };
        if parent.as_os_str().is_empty() || parent == self.current_path {
            return Outcome::Ignored;
        }

        match self.scanner.scan(&parent) {
            Ok(view) => {
                info!(path = %parent.display(), "moved to parent");
                self.adopt(parent, view);
                Outcome::ViewChanged
            }
            Err(err) => {
                warn!(path = %parent.display(), error = %err, "cannot scan parent");
                Outcome::Failed(err.into())
            }
        }
    }

    fn rescan(&mut self) -> Outcome {
        match self.scanner.scan(&self.current_path) {
            Ok(view) => {
                info!(path = %self.current_path.display(), "rescanned");
                let path = self.current_path.clone();
                self.adopt(path, view);
                Outcome::ViewChanged
            }
            Err(err) => {
                warn!(path = %self.current_path.display(), error = %err, "rescan failed");
                Outcome::Failed(err.into())
            }
        }
    }

    /// Replace the view; the old one is dropped here.
    fn adopt(&mut self, path: PathBuf, view: DirectoryView) {
        self.current_path = path;
        self.view = view;
        self.selected = 0;
        self.offset = 0;
    }
}
