// ══════════════════════════════════════════════════════════════════════════════
// ERROR MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Configuration errors. The logging path itself never fails: only parsing a
// severity, palette, sink target or flag out of user input can be rejected.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	#[error("unknown severity '{0}' (expected error, warning, info, time, done, debug or default)")]
	UnknownSeverity(String),

	#[error("unknown color palette '{0}' (expected none, regular, bold, background or underline)")]
	UnknownPalette(String),

	#[error("unknown sink '{0}' (expected stdout or stderr)")]
	UnknownSink(String),

	#[error("invalid value '{value}' for {key} (expected on/off)")]
	InvalidFlag { key: String, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;
