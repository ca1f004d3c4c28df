//! Core logic for pathdisplay.
//!
//! This module contains the non-UI pieces:
//! - [formatter]: the [PathDisplayFormatter] pipeline and its [FormattedPath] output.
//! - [path]: lexical transforms (tail, relative, shorten, truncate, filename first).
//! - [smart]: the session state behind smart shortening.
//! - [uri]: URI detection, URIs bypass every transform.
//! - [env]: the [PathEnv] capabilities the formatter is built on.
//! - [proc]: running external commands that produce path lists.
//!
//! Most callers only need [PathDisplayFormatter] and [DisplayConfig](crate::config::DisplayConfig).

pub mod env;
pub mod formatter;
pub mod path;
pub mod proc;
pub mod smart;
pub mod uri;

pub use env::{FixedEnv, PathEnv, SystemEnv};
pub use formatter::{COMMENT_STYLE, FormattedPath, PathDisplayFormatter, StyleSpan};
pub use path::{
    ELLIPSIS, filename_first, make_relative, path_tail, resolve_relative, shorten_path,
    truncate_left,
};
pub use proc::{CommandOutput, get_os_command_output};
pub use smart::SmartPathState;
pub use uri::is_uri;
