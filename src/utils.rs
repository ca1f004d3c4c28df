//! Miscellaneous utility functions for pathdisplay.
//!
//! This module holds the [helpers] and [notify] submodules:
//! - Home directory expansion for configured base directories
//! - Bounded string splitting
//! - Color parsing for highlight configuration
//! - Notifications routed through `tracing`, optionally deduplicated

pub mod helpers;
pub mod notify;

pub use helpers::{expand_home_path, get_home, max_split, parse_color};
pub use notify::{Level, notify, notify_once};
