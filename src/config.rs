//! Configuration for pathdisplay.
//!
//! - [display]: the typed [DisplayConfig] the formatter consumes.
//! - [theme]: highlight colors for style span labels.
//! - [load]: reading `pathdisplay.toml` into a [Config].

pub mod display;
pub mod load;
pub mod theme;

pub use display::{
    CustomDisplay, CustomFn, DEFAULT_SHORTEN_EXCLUDE, DisplayConfig, FilenameFirst, PathDisplay,
    RuleFlags, ShortenOptions, Truncate,
};
pub use load::Config;
pub use theme::{ColorPair, HighlightTheme};
