// ══════════════════════════════════════════════════════════════════════════════
// STYLE MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Holds the style toggles and the active color palette, and renders the prefix
// segments of a log line: time, status tag, call site and thread. Escape codes
// are assembled from `colored::Color` values directly so that output written
// to a file or an in-memory buffer is the same as output written to a TTY.

use std::fmt;
use std::panic::Location;
use std::str::FromStr;
use std::thread;

use chrono::{DateTime, Local};
use colored::Color;

use crate::constants::{CLOCK_FORMAT, DATE_FORMAT, DELIMITER, LOCATION, RESET, TIME_MARKER, TIME_VALUE};
use crate::error::Error;
use crate::level::Severity;

/// Color scheme applied to status tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
	#[default]
	None,
	Regular,
	Bold,
	Background,
	Underline,
}

impl Palette {
	pub const ALL: [Palette; 5] = [
		Palette::None,
		Palette::Regular,
		Palette::Bold,
		Palette::Background,
		Palette::Underline,
	];

	/// Escape code for a severity, or an empty string for `Palette::None`.
	pub fn code(self, severity: Severity) -> String {
		match self {
			Palette::None => String::new(),
			Palette::Regular => sgr(0, &bright(severity).to_fg_str()),
			Palette::Bold => sgr(1, &base(severity).to_fg_str()),
			Palette::Background => sgr(0, &base(severity).to_bg_str()),
			Palette::Underline => sgr(4, &base(severity).to_fg_str()),
		}
	}

	pub const fn is_colored(self) -> bool {
		!matches!(self, Palette::None)
	}

	pub const fn name(self) -> &'static str {
		match self {
			Palette::None => "none",
			Palette::Regular => "regular",
			Palette::Bold => "bold",
			Palette::Background => "background",
			Palette::Underline => "underline",
		}
	}
}

fn sgr(attribute: u8, color: &str) -> String {
	format!("\x1b[{};{}m", attribute, color)
}

fn base(severity: Severity) -> Color {
	match severity {
		Severity::Error => Color::Red,
		Severity::Warning => Color::Yellow,
		Severity::Info => Color::White,
		Severity::Time => Color::Magenta,
		Severity::Done => Color::Green,
		Severity::Debug => Color::Blue,
	}
}

fn bright(severity: Severity) -> Color {
	match severity {
		Severity::Error => Color::BrightRed,
		Severity::Warning => Color::BrightYellow,
		Severity::Info => Color::BrightWhite,
		Severity::Time => Color::BrightMagenta,
		Severity::Done => Color::BrightGreen,
		Severity::Debug => Color::BrightBlue,
	}
}

impl fmt::Display for Palette {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for Palette {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"none" | "off" => Ok(Palette::None),
			"regular" => Ok(Palette::Regular),
			"bold" => Ok(Palette::Bold),
			"background" | "bg" => Ok(Palette::Background),
			"underline" => Ok(Palette::Underline),
			_ => Err(Error::UnknownPalette(s.to_string())),
		}
	}
}

/// Independent on/off switches for each prefix segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleFlags {
	pub time: bool,
	pub status: bool,
	pub location: bool,
	pub thread: bool,
}

/// Everything that decides how a line prefix looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleState {
	pub flags: StyleFlags,
	pub palette: Palette,
}

impl StyleState {
	/// Renders every enabled segment followed by the delimiter. Returns an
	/// empty string when no segment is enabled.
	pub fn render_prefix(&self, severity: Severity, caller: &Location<'_>) -> String {
		let mut prefix = String::new();
		if self.flags.time {
			prefix.push_str(&self.render_time(&Local::now()));
		}
		if self.flags.status {
			prefix.push_str(&self.render_status(severity));
		}
		if self.flags.location {
			prefix.push_str(&self.render_tag(&format!("{}:{}", caller.file(), caller.line())));
		}
		if self.flags.thread {
			prefix.push_str(&self.render_tag(&thread_label()));
		}
		if !prefix.is_empty() {
			prefix.push_str(DELIMITER);
		}
		prefix
	}

	/// `[ D YYYY-MM-DD; T HH:MM:SS ]`, with the markers and values colored
	/// when a palette is active.
	pub fn render_time(&self, now: &DateTime<Local>) -> String {
		let date = now.format(DATE_FORMAT);
		let clock = now.format(CLOCK_FORMAT);
		if self.palette.is_colored() {
			format!(
				"[ {TIME_MARKER}D {TIME_VALUE}{date}; {TIME_MARKER}T {TIME_VALUE}{clock}{RESET} ]"
			)
		} else {
			format!("[ D {date}; T {clock} ]")
		}
	}

	/// Fixed-width bracketed label such as `[ ERROR   ]`.
	pub fn render_status(&self, severity: Severity) -> String {
		if self.palette.is_colored() {
			format!("[{}{}{}]", self.palette.code(severity), severity.label(), RESET)
		} else {
			format!("[{}]", severity.label())
		}
	}

	fn render_tag(&self, text: &str) -> String {
		if self.palette.is_colored() {
			format!("[ {LOCATION}{text}{RESET} ]")
		} else {
			format!("[ {text} ]")
		}
	}
}

fn thread_label() -> String {
	let current = thread::current();
	match current.name() {
		Some(name) => name.to_string(),
		None => format!("{:?}", current.id()),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::TimeZone;

	fn fixed_time() -> DateTime<Local> {
		Local.with_ymd_and_hms(2023, 8, 5, 7, 4, 9).single().unwrap()
	}

	#[test]
	fn plain_time_prefix_is_zero_padded() {
		let style = StyleState::default();
		assert_eq!(style.render_time(&fixed_time()), "[ D 2023-08-05; T 07:04:09 ]");
	}

	#[test]
	fn colored_time_prefix_wraps_tokens() {
		let style = StyleState { palette: Palette::Bold, ..Default::default() };
		assert_eq!(
			style.render_time(&fixed_time()),
			"[ \x1b[0;34mD \x1b[0;96m2023-08-05; \x1b[0;34mT \x1b[0;96m07:04:09\x1b[0;0m ]"
		);
	}

	#[test]
	fn status_tag_without_palette_is_plain() {
		let style = StyleState::default();
		assert_eq!(style.render_status(Severity::Error), "[ ERROR   ]");
		assert_eq!(style.render_status(Severity::Warning), "[ WARNING ]");
	}

	#[test]
	fn palette_codes_match_fixed_table() {
		assert_eq!(Palette::None.code(Severity::Error), "");
		assert_eq!(Palette::Regular.code(Severity::Error), "\x1b[0;91m");
		assert_eq!(Palette::Regular.code(Severity::Debug), "\x1b[0;94m");
		assert_eq!(Palette::Bold.code(Severity::Done), "\x1b[1;32m");
		assert_eq!(Palette::Background.code(Severity::Warning), "\x1b[0;43m");
		assert_eq!(Palette::Underline.code(Severity::Time), "\x1b[4;35m");
	}

	#[test]
	fn colored_status_tag_resets_before_bracket() {
		let style = StyleState { palette: Palette::Background, ..Default::default() };
		assert_eq!(style.render_status(Severity::Info), "[\x1b[0;47m INFO    \x1b[0;0m]");
	}

	#[test]
	fn prefix_is_empty_when_everything_is_off() {
		let style = StyleState::default();
		assert_eq!(style.render_prefix(Severity::Info, Location::caller()), "");
	}

	#[test]
	fn prefix_orders_segments_and_ends_with_delimiter() {
		let style = StyleState {
			flags: StyleFlags { time: true, status: true, location: true, thread: false },
			palette: Palette::None,
		};
		let prefix = style.render_prefix(Severity::Done, Location::caller());
		let status = prefix.find("[ DONE    ]").unwrap();
		assert!(prefix.starts_with("[ D "));
		assert!(status > 0);
		assert!(prefix[status..].contains("style.rs:"));
		assert!(prefix.ends_with(DELIMITER));
	}

	#[test]
	fn thread_segment_uses_thread_name() {
		let style = StyleState {
			flags: StyleFlags { thread: true, ..Default::default() },
			palette: Palette::None,
		};
		let prefix = std::thread::Builder::new()
			.name("worker-7".into())
			.spawn(move || style.render_prefix(Severity::Info, Location::caller()))
			.unwrap()
			.join()
			.unwrap();
		assert_eq!(prefix, format!("[ worker-7 ]{DELIMITER}"));
	}

	#[test]
	fn parses_palette_names() {
		assert_eq!("Bold".parse::<Palette>(), Ok(Palette::Bold));
		assert_eq!("bg".parse::<Palette>(), Ok(Palette::Background));
		assert!("neon".parse::<Palette>().is_err());
	}
}
