// ══════════════════════════════════════════════════════════════════════════════
// LEVEL MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// The ordered severity scale. A statement is emitted when its rank is at most
// the rank of the current threshold, so lowering the threshold to `Error`
// silences everything but errors and raising it to `Debug` lets all through.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Severity of a single log statement, from most to least critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
	Error = 0,
	Warning = 1,
	Info = 2,
	Time = 3,
	Done = 4,
	Debug = 5,
}

impl Severity {
	/// Every severity in ascending rank.
	pub const ALL: [Severity; 6] = [
		Severity::Error,
		Severity::Warning,
		Severity::Info,
		Severity::Time,
		Severity::Done,
		Severity::Debug,
	];

	/// Threshold a fresh logger starts with: everything except `Debug`.
	pub const DEFAULT: Severity = Severity::Done;

	pub const fn rank(self) -> u8 {
		self as u8
	}

	/// Whether a statement at `self` passes the given threshold.
	pub const fn passes(self, threshold: Severity) -> bool {
		self.rank() <= threshold.rank()
	}

	/// Fixed-width word rendered inside the status tag.
	pub const fn label(self) -> &'static str {
		match self {
			Severity::Error => " ERROR   ",
			Severity::Warning => " WARNING ",
			Severity::Info => " INFO    ",
			Severity::Time => " TIME    ",
			Severity::Done => " DONE    ",
			Severity::Debug => " DEBUG   ",
		}
	}

	pub const fn name(self) -> &'static str {
		match self {
			Severity::Error => "error",
			Severity::Warning => "warning",
			Severity::Info => "info",
			Severity::Time => "time",
			Severity::Done => "done",
			Severity::Debug => "debug",
		}
	}
}

impl Default for Severity {
	fn default() -> Self {
		Severity::DEFAULT
	}
}

impl fmt::Display for Severity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Severity {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"error" | "err" => Ok(Severity::Error),
			"warning" | "warn" => Ok(Severity::Warning),
			"info" => Ok(Severity::Info),
			"time" => Ok(Severity::Time),
			"done" | "default" => Ok(Severity::Done),
			"debug" => Ok(Severity::Debug),
			_ => Err(Error::UnknownSeverity(s.to_string())),
		}
	}
}
