//! Path display formatting for terminal pickers and file listings.
//!
//! The entry point is [PathDisplayFormatter]: give it a raw path and a [DisplayConfig]
//! and it returns the string to show together with highlight spans.
//!
//! ```
//! use pathdisplay::{DisplayConfig, FilenameFirst, PathDisplay, PathDisplayFormatter, RuleFlags};
//! use pathdisplay::core::FixedEnv;
//!
//! let mut formatter = PathDisplayFormatter::with_env(FixedEnv::new("/", 80).with_cwd("/home/me"));
//! let config = DisplayConfig::new(PathDisplay::Full(RuleFlags {
//!     filename_first: Some(FilenameFirst::default()),
//!     ..RuleFlags::default()
//! }));
//!
//! let formatted = formatter.format("/home/me/src/main.rs", &config);
//! assert_eq!(formatted.display(), "main.rs src");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod ui;
pub mod utils;

pub use crate::config::{
    Config, DisplayConfig, FilenameFirst, PathDisplay, RuleFlags, ShortenOptions, Truncate,
};
pub use crate::core::{FormattedPath, PathDisplayFormatter, SmartPathState, StyleSpan, is_uri};
pub use crate::error::{Error, Result};
