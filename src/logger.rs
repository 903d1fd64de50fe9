// ══════════════════════════════════════════════════════════════════════════════
// LOGGER MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Provides the process-wide, leveled, styled console logger. One instance is
// bound to an output sink on first use and lives for the rest of the process;
// later calls with a different sink get the same instance and the new sink is
// dropped unused.
//
// Locking: `state` guards threshold, styles and snapshots; `sink` guards the
// writer. A statement takes `state` once at open time and `sink` once when it
// is dropped, so whole lines never interleave. `state` is always taken before
// `sink`, never the other way around.

use std::io::{self, Write};
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::Instant;

use crate::assembler::Statement;
use crate::config::{Config, SinkTarget};
use crate::error::Result;
use crate::level::Severity;
use crate::snapshot::SnapshotTable;
use crate::style::{Palette, StyleState};

static INSTANCE: OnceLock<Logger> = OnceLock::new();

struct LoggerState {
	threshold: Severity,
	style: StyleState,
	snapshots: SnapshotTable,
}

pub struct Logger {
	state: Mutex<LoggerState>,
	sink: Mutex<Box<dyn Write + Send>>,
	started: Instant,
}

impl Logger {
	/// Returns the process-wide logger, binding it to `sink` if this is the
	/// first call. The sink must stay usable for the life of the process.
	pub fn instance<W: Write + Send + 'static>(sink: W) -> &'static Logger {
		INSTANCE.get_or_init(|| Logger::detached(sink))
	}

	/// Process-wide logger writing to standard output on first use.
	pub fn stdout() -> &'static Logger {
		Self::instance(io::stdout())
	}

	/// Process-wide logger writing to standard error on first use.
	pub fn stderr() -> &'static Logger {
		Self::instance(io::stderr())
	}

	/// The process-wide logger, if something already bound it.
	pub fn get() -> Option<&'static Logger> {
		INSTANCE.get()
	}

	/// Binds the process-wide logger to the configured target and applies the
	/// configured level and styles. If the logger was already bound, only the
	/// level and styles change.
	pub fn from_config(config: &Config) -> &'static Logger {
		let logger = match config.sink {
			SinkTarget::Stdout => Self::stdout(),
			SinkTarget::Stderr => Self::stderr(),
		};
		logger.apply(config);
		logger
	}

	/// Reads the `CONKIT_*` environment and binds the process-wide logger.
	pub fn from_env() -> Result<&'static Logger> {
		let config = Config::from_env()?;
		Ok(Self::from_config(&config))
	}

	/// A logger that is not registered as the process-wide instance.
	pub(crate) fn detached<W: Write + Send + 'static>(sink: W) -> Logger {
		Logger {
			state: Mutex::new(LoggerState {
				threshold: Severity::DEFAULT,
				style: StyleState::default(),
				snapshots: SnapshotTable::new(),
			}),
			sink: Mutex::new(Box::new(sink)),
			started: Instant::now(),
		}
	}

	pub fn apply(&self, config: &Config) {
		let mut state = self.lock_state();
		state.threshold = config.level;
		state.style.flags = config.flags;
		state.style.palette = config.palette;
	}

	fn lock_state(&self) -> MutexGuard<'_, LoggerState> {
		self.state.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Writes one finished line to the sink in a single call.
	pub(crate) fn emit(&self, line: &str) {
		let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
		let _ = sink.write_all(line.as_bytes());
		let _ = sink.flush();
	}

	// ══════════════════════════════════════════════════════════════════════════
	// STATEMENTS
	// ══════════════════════════════════════════════════════════════════════════

	/// Opens a statement at `severity`. Whether it is written is decided here,
	/// against the threshold at this moment.
	#[track_caller]
	pub fn open(&self, severity: Severity) -> Statement<'_> {
		let caller = Location::caller();
		let state = self.lock_state();
		if severity.passes(state.threshold) {
			Statement::enabled(self, severity, state.style.render_prefix(severity, caller))
		} else {
			Statement::suppressed(self, severity)
		}
	}

	#[track_caller]
	pub fn error(&self) -> Statement<'_> {
		self.open(Severity::Error)
	}

	#[track_caller]
	pub fn warning(&self) -> Statement<'_> {
		self.open(Severity::Warning)
	}

	#[track_caller]
	pub fn info(&self) -> Statement<'_> {
		self.open(Severity::Info)
	}

	#[track_caller]
	pub fn time(&self) -> Statement<'_> {
		self.open(Severity::Time)
	}

	#[track_caller]
	pub fn done(&self) -> Statement<'_> {
		self.open(Severity::Done)
	}

	#[track_caller]
	pub fn debug(&self) -> Statement<'_> {
		self.open(Severity::Debug)
	}

	// ══════════════════════════════════════════════════════════════════════════
	// SETUP
	// ══════════════════════════════════════════════════════════════════════════

	pub fn set_level(&self, threshold: Severity) {
		self.lock_state().threshold = threshold;
	}

	pub fn level(&self) -> Severity {
		self.lock_state().threshold
	}

	pub fn enabled(&self, severity: Severity) -> bool {
		severity.passes(self.level())
	}

	pub fn set_style_time(&self, on: bool) {
		self.lock_state().style.flags.time = on;
	}

	pub fn set_style_status(&self, on: bool) {
		self.lock_state().style.flags.status = on;
	}

	/// Tags each line with the file and line that opened it.
	pub fn set_style_location(&self, on: bool) {
		self.lock_state().style.flags.location = on;
	}

	/// Tags each line with the name (or id) of the thread that opened it.
	pub fn set_style_thread(&self, on: bool) {
		self.lock_state().style.flags.thread = on;
	}

	pub fn set_color_palette(&self, palette: Palette) {
		self.lock_state().style.palette = palette;
	}

	pub fn style(&self) -> StyleState {
		self.lock_state().style
	}

	pub fn palette(&self) -> Palette {
		self.lock_state().style.palette
	}

	// ══════════════════════════════════════════════════════════════════════════
	// TIME SNAPSHOTS
	// ══════════════════════════════════════════════════════════════════════════

	/// Records a named snapshot and announces it at `Time` severity.
	#[track_caller]
	pub fn add_snapshot(&self, name: impl Into<String>) {
		self.record_snapshot(name.into(), false, Location::caller());
	}

	/// Records a named snapshot without writing anything.
	#[track_caller]
	pub fn add_snapshot_quiet(&self, name: impl Into<String>) {
		self.record_snapshot(name.into(), true, Location::caller());
	}

	fn record_snapshot(&self, name: String, quiet: bool, caller: &Location<'_>) {
		let line = {
			let mut state = self.lock_state();
			let line = if quiet {
				None
			} else {
				render_line(&state, Severity::Time, caller, &format!("Added snap '{}'", name))
			};
			state.snapshots.push(name, Instant::now());
			line
		};
		if let Some(line) = line {
			self.emit(&line);
		}
	}

	pub fn snapshot_count(&self) -> usize {
		self.lock_state().snapshots.len()
	}

	/// Writes the seconds elapsed since the logger was created.
	#[track_caller]
	pub fn time_since_start(&self) {
		let caller = Location::caller();
		let line = {
			let state = self.lock_state();
			let elapsed = self.started.elapsed().as_secs_f64();
			render_line(&state, Severity::Time, caller, &format!("{:.6}s since instantiation", elapsed))
		};
		if let Some(line) = line {
			self.emit(&line);
		}
	}

	/// Writes the seconds elapsed since the most recent snapshot. Does nothing
	/// when no snapshot exists.
	#[track_caller]
	pub fn time_since_last_snapshot(&self) {
		let caller = Location::caller();
		let line = {
			let state = self.lock_state();
			state.snapshots.last().and_then(|snap| {
				let elapsed = snap.elapsed_at(Instant::now()).as_secs_f64();
				let text = format!("{:.6}s since last snap '{}'", elapsed, snap.name);
				render_line(&state, Severity::Time, caller, &text)
			})
		};
		if let Some(line) = line {
			self.emit(&line);
		}
	}

	/// Writes the seconds elapsed since the first snapshot named `name`. An
	/// unknown name produces a warning line instead.
	#[track_caller]
	pub fn time_since_snapshot(&self, name: &str) {
		let caller = Location::caller();
		let line = {
			let state = self.lock_state();
			match state.snapshots.find(name) {
				Some(snap) => {
					let elapsed = snap.elapsed_at(Instant::now()).as_secs_f64();
					let text = format!("{:.6}s since snap '{}'", elapsed, snap.name);
					render_line(&state, Severity::Time, caller, &text)
				}
				None => render_line(
					&state,
					Severity::Warning,
					caller,
					&format!("Could not find snapshot {}", name),
				),
			}
		};
		if let Some(line) = line {
			self.emit(&line);
		}
	}
}

/// Full line for a direct (non-streamed) message, or `None` when `severity`
/// is filtered out.
fn render_line(state: &LoggerState, severity: Severity, caller: &Location<'_>, text: &str) -> Option<String> {
	if !severity.passes(state.threshold) {
		return None;
	}
	let mut line = state.style.render_prefix(severity, caller);
	line.push_str(text);
	line.push('\n');
	Some(line)
}

/// Writes one message through the process-wide logger, binding it to
/// standard output if nothing bound it yet.
#[track_caller]
pub fn log(severity: Severity, message: &str) {
	Logger::stdout().open(severity) << message;
}

#[cfg(test)]
pub(crate) mod tests {
	use super::*;
	use std::sync::Arc;
	use std::thread;
	use std::time::Duration;

	use crate::constants::DELIMITER;
	use crate::style::StyleFlags;

	#[derive(Default)]
	struct Capture {
		bytes: Vec<u8>,
		writes: usize,
	}

	/// In-memory sink that remembers every byte and counts write calls.
	#[derive(Clone, Default)]
	pub(crate) struct CaptureSink {
		inner: Arc<Mutex<Capture>>,
	}

	impl CaptureSink {
		pub(crate) fn contents(&self) -> String {
			String::from_utf8(self.inner.lock().unwrap().bytes.clone()).unwrap()
		}

		pub(crate) fn writes(&self) -> usize {
			self.inner.lock().unwrap().writes
		}
	}

	impl Write for CaptureSink {
		fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
			let mut inner = self.inner.lock().unwrap();
			inner.bytes.extend_from_slice(buf);
			inner.writes += 1;
			Ok(buf.len())
		}

		fn flush(&mut self) -> io::Result<()> {
			Ok(())
		}
	}

	fn logger_at(level: Severity) -> (Logger, CaptureSink) {
		let sink = CaptureSink::default();
		let logger = Logger::detached(sink.clone());
		logger.set_level(level);
		(logger, sink)
	}

	/// Pulls the number in front of `s since` out of a timing line.
	fn elapsed_in(line: &str) -> f64 {
		let end = line.find("s since").unwrap();
		let start = line[..end].rfind(' ').map_or(0, |i| i + 1);
		line[start..end].parse().unwrap()
	}

	#[test]
	fn fresh_logger_has_documented_defaults() {
		let (logger, _) = logger_at(Severity::DEFAULT);
		assert_eq!(logger.level(), Severity::Done);
		assert_eq!(logger.style(), StyleState::default());
		assert_eq!(logger.palette(), Palette::None);
		assert_eq!(logger.snapshot_count(), 0);
	}

	#[test]
	fn emits_only_severities_at_or_above_threshold() {
		for threshold in Severity::ALL {
			let (logger, sink) = logger_at(threshold);
			for severity in Severity::ALL {
				logger.open(severity) << severity.name();
			}
			let lines: Vec<String> = sink.contents().lines().map(str::to_string).collect();
			let expected: Vec<String> = Severity::ALL
				.iter()
				.filter(|s| s.rank() <= threshold.rank())
				.map(|s| s.name().to_string())
				.collect();
			assert_eq!(lines, expected, "threshold {threshold}");
		}
	}

	#[test]
	fn error_threshold_silences_debug_completely() {
		let (logger, sink) = logger_at(Severity::Error);
		logger.debug() << "value " << 42 << ' ' << 1.5 << " more";
		assert_eq!(sink.writes(), 0);
		assert_eq!(sink.contents(), "");
	}

	#[test]
	fn bare_statement_has_no_prefix() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.open(Severity::Info) << "x=" << 5;
		assert_eq!(sink.contents(), "x=5\n");
	}

	#[test]
	fn status_only_style_has_tag_and_no_time() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.set_style_status(true);
		logger.warning() << "careful";
		assert_eq!(sink.contents(), format!("[ WARNING ]{DELIMITER}careful\n"));
	}

	#[test]
	fn time_and_status_render_in_order() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.set_style_time(true);
		logger.set_style_status(true);
		logger.info() << "both";
		let line = sink.contents();
		let date = line.find("[ D ").unwrap();
		let status = line.find("[ INFO    ]").unwrap();
		assert_eq!(date, 0);
		assert!(date < status);
		assert!(line.ends_with(&format!("]{DELIMITER}both\n")));
	}

	#[test]
	fn palette_colors_status_tag() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.set_style_status(true);
		logger.set_color_palette(Palette::Regular);
		logger.error() << "boom";
		assert_eq!(sink.contents(), format!("[\x1b[0;91m ERROR   \x1b[0;0m]{DELIMITER}boom\n"));
	}

	#[test]
	fn location_tag_points_at_caller() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.set_style_location(true);
		let line = line!() + 1;
		logger.done() << "here";
		assert!(sink.contents().starts_with(&format!("[ src/logger.rs:{line} ]")), "{}", sink.contents());
	}

	#[test]
	fn apply_copies_config() {
		let (logger, _) = logger_at(Severity::DEFAULT);
		let config = Config {
			level: Severity::Warning,
			flags: StyleFlags { time: true, status: true, location: false, thread: true },
			palette: Palette::Underline,
			sink: SinkTarget::Stderr,
		};
		logger.apply(&config);
		assert_eq!(logger.level(), Severity::Warning);
		assert_eq!(logger.style().flags, config.flags);
		assert_eq!(logger.palette(), Palette::Underline);
	}

	#[test]
	fn snapshot_announcement_respects_quiet_and_threshold() {
		let (logger, sink) = logger_at(Severity::Time);
		logger.add_snapshot("loud");
		logger.add_snapshot_quiet("silent");
		assert_eq!(sink.contents(), "Added snap 'loud'\n");

		logger.set_level(Severity::Info);
		logger.add_snapshot("hidden");
		assert_eq!(sink.contents(), "Added snap 'loud'\n");
		assert_eq!(logger.snapshot_count(), 3);
	}

	#[test]
	fn time_since_snapshot_reports_at_least_the_sleep() {
		let (logger, sink) = logger_at(Severity::Time);
		logger.add_snapshot_quiet("s1");
		thread::sleep(Duration::from_millis(50));
		logger.time_since_snapshot("s1");
		let line = sink.contents();
		assert!(line.contains("'s1'"), "{line}");
		assert!(elapsed_in(&line) >= 0.05, "{line}");
	}

	#[test]
	fn lookup_uses_first_snapshot_with_a_name() {
		let (logger, sink) = logger_at(Severity::Time);
		logger.add_snapshot_quiet("a");
		thread::sleep(Duration::from_millis(60));
		logger.add_snapshot_quiet("b");
		logger.add_snapshot_quiet("a");
		logger.time_since_snapshot("a");
		let line = sink.contents();
		assert!(line.ends_with("s since snap 'a'\n"), "{line}");
		assert!(elapsed_in(&line) >= 0.06, "{line}");
	}

	#[test]
	fn missing_snapshot_warns_without_touching_table() {
		let (logger, sink) = logger_at(Severity::Time);
		logger.set_style_status(true);
		logger.add_snapshot_quiet("known");
		logger.time_since_snapshot("ghost");
		assert_eq!(sink.contents(), format!("[ WARNING ]{DELIMITER}Could not find snapshot ghost\n"));
		assert_eq!(logger.snapshot_count(), 1);
	}

	#[test]
	fn missing_snapshot_warning_follows_warning_threshold() {
		let (logger, sink) = logger_at(Severity::Error);
		logger.time_since_snapshot("ghost");
		assert_eq!(sink.contents(), "");
	}

	#[test]
	fn last_snapshot_query_is_silent_when_table_is_empty() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.time_since_last_snapshot();
		assert_eq!(sink.writes(), 0);

		logger.add_snapshot_quiet("first");
		logger.add_snapshot_quiet("second");
		logger.time_since_last_snapshot();
		assert!(sink.contents().ends_with("s since last snap 'second'\n"));
	}

	#[test]
	fn time_since_start_is_gated_at_time() {
		let (logger, sink) = logger_at(Severity::Info);
		logger.time_since_start();
		assert_eq!(sink.contents(), "");

		logger.set_level(Severity::Time);
		logger.time_since_start();
		let line = sink.contents();
		assert!(line.ends_with("s since instantiation\n"));
		assert!(elapsed_in(&line) >= 0.0);
	}

	#[test]
	fn concurrent_statements_never_interleave() {
		let (logger, sink) = logger_at(Severity::Debug);
		logger.set_style_status(true);
		let one = format!("[ WARNING ]{DELIMITER}thread ONE : 1111 val");
		let two = format!("[ ERROR   ]{DELIMITER}thread TWO : 2222 val");

		thread::scope(|scope| {
			scope.spawn(|| {
				for _ in 0..1000 {
					logger.warning() << "thread ONE : " << 1111 << " val";
				}
			});
			scope.spawn(|| {
				for _ in 0..1000 {
					logger.error() << "thread TWO : " << 2222 << " val";
				}
			});
		});

		let contents = sink.contents();
		let lines: Vec<&str> = contents.lines().collect();
		assert_eq!(lines.len(), 2000);
		assert_eq!(lines.iter().filter(|l| **l == one).count(), 1000);
		assert_eq!(lines.iter().filter(|l| **l == two).count(), 1000);
		assert_eq!(sink.writes(), 2000);
	}
}
