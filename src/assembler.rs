// ══════════════════════════════════════════════════════════════════════════════
// ASSEMBLER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// A `Statement` is one log line under construction. It owns its buffer, so two
// threads assembling lines at the same time never share state; the only
// contention is the single write to the sink when the statement is dropped.
//
//     logger.open(Severity::Info) << "x=" << 5;
//
// The temporary is dropped at the end of the expression statement, which
// appends the newline and writes the whole line in one call.

use std::fmt::{self, Display, Write as _};
use std::ops::Shl;

use crate::level::Severity;
use crate::logger::Logger;

pub struct Statement<'a> {
	logger: &'a Logger,
	severity: Severity,
	/// `None` when the statement was suppressed at open time.
	buffer: Option<String>,
}

impl<'a> Statement<'a> {
	pub(crate) fn enabled(logger: &'a Logger, severity: Severity, prefix: String) -> Self {
		Self { logger, severity, buffer: Some(prefix) }
	}

	pub(crate) fn suppressed(logger: &'a Logger, severity: Severity) -> Self {
		Self { logger, severity, buffer: None }
	}

	pub fn severity(&self) -> Severity {
		self.severity
	}

	/// Whether this statement will write anything when dropped.
	pub fn is_enabled(&self) -> bool {
		self.buffer.is_some()
	}

	/// Appends the textual form of `value`. Suppressed statements skip the
	/// conversion.
	pub fn push<T: Display>(&mut self, value: T) -> &mut Self {
		if let Some(buffer) = self.buffer.as_mut() {
			let _ = write!(buffer, "{}", value);
		}
		self
	}

	/// Appends pre-built format arguments, as produced by `format_args!`.
	pub fn push_fmt(&mut self, args: fmt::Arguments<'_>) -> &mut Self {
		if let Some(buffer) = self.buffer.as_mut() {
			let _ = buffer.write_fmt(args);
		}
		self
	}
}

impl<T: Display> Shl<T> for Statement<'_> {
	type Output = Self;

	fn shl(mut self, value: T) -> Self {
		self.push(value);
		self
	}
}

impl fmt::Write for Statement<'_> {
	fn write_str(&mut self, s: &str) -> fmt::Result {
		if let Some(buffer) = self.buffer.as_mut() {
			buffer.push_str(s);
		}
		Ok(())
	}
}

impl Drop for Statement<'_> {
	fn drop(&mut self) {
		if let Some(mut line) = self.buffer.take() {
			line.push('\n');
			self.logger.emit(&line);
		}
	}
}

impl fmt::Debug for Statement<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Statement")
			.field("severity", &self.severity)
			.field("buffer", &self.buffer)
			.finish()
	}
}
