//! Application constants.

/// Widest the name column ever gets, in terminal cells.
pub const NAME_COLUMN_WIDTH: u16 = 40;

/// Width of the right-aligned size column.
pub const SIZE_COLUMN_WIDTH: u16 = 12;

/// Bar width the name column gives way to on narrow terminals.
pub const MIN_BAR_WIDTH: u16 = 10;

/// Title, path, total size, and a separator.
pub const HEADER_HEIGHT: u16 = 4;

/// Separator, summary line, and the status banner.
pub const FOOTER_HEIGHT: u16 = 3;

/// Shown in place of the list when a directory has no subdirectories.
pub const EMPTY_VIEW_MESSAGE: &str = "(No subdirectories or permission denied.)";
