// ══════════════════════════════════════════════════════════════════════════════
// SPINNER
// ══════════════════════════════════════════════════════════════════════════════
//
// Indeterminate activity indicator. Every `update()` advances one frame and
// redraws the current line in place; `done()` and `error()` replace it with a
// final status mark and move to the next line.

use std::io::Write;

use crossterm::QueueableCommand;
use crossterm::cursor::{Hide, MoveToColumn, Show};
use crossterm::terminal::{Clear, ClearType};

use crate::constants::RESET;
use crate::level::Severity;
use crate::style::Palette;

const SQUARE_FRAMES: [&str; 8] = [" ", "⬚", "◼", "⬚", " ", "⬚", "◼", "⬚"];
const CIRCLE_FRAMES: [&str; 8] = ["◝", "◞", "◟", "◜", "◝", "◞", "◟", "◜"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpinnerStyle {
	#[default]
	Default,
	Circle,
}

impl SpinnerStyle {
	/// Animation frames, followed by the frame shown while idle.
	fn frames(self) -> (&'static [&'static str], &'static str) {
		match self {
			SpinnerStyle::Default => (&SQUARE_FRAMES[..], " "),
			SpinnerStyle::Circle => (&CIRCLE_FRAMES[..], "◯"),
		}
	}
}

pub struct Spinner<W: Write> {
	out: W,
	style: SpinnerStyle,
	frame: usize,
	label: String,
	total: Option<u64>,
	progress: u64,
	cursor_hidden: bool,
}

impl<W: Write> Spinner<W> {
	pub fn new(out: W) -> Self {
		Self {
			out,
			style: SpinnerStyle::default(),
			frame: 0,
			label: String::new(),
			total: None,
			progress: 0,
			cursor_hidden: false,
		}
	}

	pub fn set_style(&mut self, style: SpinnerStyle) {
		self.style = style;
		self.frame = 0;
	}

	/// Starts tracking a named process. With a non-zero `total`, each update
	/// also counts one step towards it.
	pub fn process(&mut self, name: impl Into<String>, total: u64) {
		self.label = name.into();
		self.total = (total > 0).then_some(total);
		self.progress = 0;
		self.frame = 0;
	}

	/// Advances one frame and redraws.
	pub fn update(&mut self) {
		if let Some(total) = self.total {
			self.progress = (self.progress + 1).min(total);
		}
		let (frames, _) = self.style.frames();
		let glyph = frames[self.frame % frames.len()];
		self.frame = (self.frame + 1) % frames.len();

		if !self.cursor_hidden {
			let _ = self.out.queue(Hide);
			self.cursor_hidden = true;
		}
		let line = format!("{}{}{} {}", Palette::Bold.code(Severity::Error), glyph, RESET, self.status_text());
		self.redraw(&line);
	}

	/// Finishes the current process with a success mark.
	pub fn done(&mut self) {
		self.finish(Severity::Done, "✔");
	}

	/// Finishes the current process with a failure mark.
	pub fn error(&mut self) {
		self.finish(Severity::Error, "✘");
	}

	/// Forgets the current process without printing anything.
	pub fn reset(&mut self) {
		self.label.clear();
		self.total = None;
		self.progress = 0;
		self.frame = 0;
		self.show_cursor();
		let _ = self.out.flush();
	}

	pub fn idle_frame(&self) -> &'static str {
		self.style.frames().1
	}

	pub fn get_ref(&self) -> &W {
		&self.out
	}

	fn status_text(&self) -> String {
		match self.total {
			Some(total) => format!("{} {}/{}", self.label, self.progress, total),
			None => self.label.clone(),
		}
	}

	fn finish(&mut self, severity: Severity, mark: &str) {
		let line = format!("{}{}{} {}\n", Palette::Bold.code(severity), mark, RESET, self.status_text());
		self.redraw(&line);
		self.show_cursor();
		let _ = self.out.flush();
		self.label.clear();
		self.total = None;
		self.progress = 0;
		self.frame = 0;
	}

	fn redraw(&mut self, line: &str) {
		let _ = self.out.queue(MoveToColumn(0)).and_then(|out| out.queue(Clear(ClearType::CurrentLine)));
		let _ = self.out.write_all(line.as_bytes());
		let _ = self.out.flush();
	}

	fn show_cursor(&mut self) {
		if self.cursor_hidden {
			let _ = self.out.queue(Show);
			self.cursor_hidden = false;
		}
	}
}

impl<W: Write> Drop for Spinner<W> {
	fn drop(&mut self) {
		self.show_cursor();
		let _ = self.out.flush();
	}
}
