//! Terminal UI helpers for pathdisplay.
//!
//! - [icons]: Nerd Font devicons for file names, with a lookup cache.
//! - [line]: converting a [FormattedPath](crate::core::FormattedPath) into a styled
//!   ratatui [Line](ratatui::text::Line).

pub mod icons;
pub mod line;

pub use icons::{DevIcons, ICON_COLUMN_WIDTH, Icon};
pub use line::to_line;
