// ══════════════════════════════════════════════════════════════════════════════
// MACROS MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Format-style shorthands over `Logger::open`. Arguments are only formatted
// when the statement passes the threshold.
//
//     log_info!(logger, "loaded {} files", count);

#[macro_export]
macro_rules! log_at {
	($logger:expr, $severity:expr, $($arg:tt)*) => {{
		let mut __statement = $logger.open($severity);
		if __statement.is_enabled() {
			__statement.push_fmt(format_args!($($arg)*));
		}
	}};
}

#[macro_export]
macro_rules! log_error { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Error, $($arg)*) } }
#[macro_export]
macro_rules! log_warn  { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Warning, $($arg)*) } }
#[macro_export]
macro_rules! log_info  { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Info, $($arg)*) } }
#[macro_export]
macro_rules! log_time  { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Time, $($arg)*) } }
#[macro_export]
macro_rules! log_done  { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Done, $($arg)*) } }
#[macro_export]
macro_rules! log_debug { ($logger:expr, $($arg:tt)*) => { $crate::log_at!($logger, $crate::Severity::Debug, $($arg)*) } }

#[cfg(test)]
mod tests {
	use std::cell::Cell;
	use std::fmt;

	use crate::level::Severity;
	use crate::logger::Logger;
	use crate::logger::tests::CaptureSink;

	struct Counted<'a>(&'a Cell<u32>);

	impl fmt::Display for Counted<'_> {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			self.0.set(self.0.get() + 1);
			f.write_str("counted")
		}
	}

	#[test]
	fn formats_enabled_statements() {
		let sink = CaptureSink::default();
		let logger = Logger::detached(sink.clone());
		log_done!(logger, "{} of {}", 3, 4);
		log_warn!(&logger, "{:>4}|", "ab");
		assert_eq!(sink.contents(), "3 of 4\n  ab|\n");
	}

	#[test]
	fn skips_formatting_when_suppressed() {
		let sink = CaptureSink::default();
		let logger = Logger::detached(sink.clone());
		let calls = Cell::new(0);
		log_debug!(logger, "{}", Counted(&calls));
		assert_eq!(calls.get(), 0);
		assert_eq!(sink.writes(), 0);

		logger.set_level(Severity::Debug);
		log_debug!(logger, "{}", Counted(&calls));
		assert_eq!(calls.get(), 1);
		assert_eq!(sink.contents(), "counted\n");
	}
}
