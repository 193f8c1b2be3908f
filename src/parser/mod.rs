//! Turns manual tagging input into canonical events.
//!
//! Two shapes feed the same pipeline: short codes typed during live capture
//! and the canonical pipe-delimited log lines those codes produce.

pub mod logline;
pub mod shortcode;

pub use self::logline::{
    format_log_line, parse_log_line, parse_log_lines, resolve_team_id, ParsedLog, Rejected,
};
pub use self::shortcode::{parse_short_code, CaptureContext, TaggedAction};
