// ══════════════════════════════════════════════════════════════════════════════
// PROGRESS BAR
// ══════════════════════════════════════════════════════════════════════════════
//
// Single-line bar redrawn in place with percentage, throughput, elapsed time
// and ETA:
//
//     [#############.................] 43.21% | 12.40 KB/s | 01:05 | 01:26
//
// Redraws are rate-limited by the poll interval, except the one that reaches
// the maximum, which is always drawn and ends the line.

use std::io::Write;
use std::time::{Duration, Instant};

use super::{format_duration, si_scale};
use crate::constants::{DEFAULT_BAR_WIDTH, DEFAULT_POLL_INTERVAL_MS};

/// Glyph set used to draw the bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
	/// `[####....]`
	#[default]
	Hash,
	/// `|====    |`
	Fancy,
}

impl BarStyle {
	fn glyphs(self) -> (char, char, char, char) {
		match self {
			BarStyle::Hash => ('[', '#', '.', ']'),
			BarStyle::Fancy => ('|', '=', ' ', '|'),
		}
	}
}

pub struct ProgressBar<W: Write> {
	out: W,
	max: f64,
	sum: f64,
	width: u64,
	unit: String,
	style: BarStyle,
	poll_interval: Duration,
	started: Instant,
	last_draw: Instant,
	finished: bool,
}

impl<W: Write> ProgressBar<W> {
	pub fn new(out: W, max: u64) -> Self {
		let now = Instant::now();
		Self {
			out,
			max: max as f64,
			sum: 0.0,
			width: DEFAULT_BAR_WIDTH,
			unit: String::new(),
			style: BarStyle::default(),
			poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
			started: now,
			last_draw: now,
			finished: false,
		}
	}

	pub fn width(mut self, width: u64) -> Self {
		self.width = width.max(1);
		self
	}

	/// Unit shown after the SI prefix in the rate column, e.g. `B`.
	pub fn unit(mut self, unit: impl Into<String>) -> Self {
		self.unit = unit.into();
		self
	}

	pub fn style(mut self, style: BarStyle) -> Self {
		self.style = style;
		self
	}

	/// Minimum time between two redraws.
	pub fn poll_interval(mut self, interval: Duration) -> Self {
		self.poll_interval = interval;
		self
	}

	pub fn inc(&mut self) {
		self.add(1);
	}

	pub fn add(&mut self, amount: u64) {
		self.sum += amount as f64;
		self.check();
	}

	/// Jumps to an absolute position.
	pub fn set(&mut self, position: u64) {
		self.sum = position as f64;
		self.check();
	}

	pub fn position(&self) -> u64 {
		self.sum as u64
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

	pub fn get_ref(&self) -> &W {
		&self.out
	}

	/// Draws the current state once more and ends the line. Idempotent.
	pub fn finalize(&mut self) {
		if self.finished {
			return;
		}
		self.draw();
		let _ = self.out.write_all(b"\n");
		let _ = self.out.flush();
		self.finished = true;
	}

	fn check(&mut self) {
		if self.finished {
			return;
		}
		if self.sum >= self.max {
			self.finalize();
			return;
		}
		let now = Instant::now();
		if now.duration_since(self.last_draw) >= self.poll_interval {
			self.last_draw = now;
			self.draw();
		}
	}

	fn ratio(&self) -> f64 {
		if self.max <= 0.0 {
			1.0
		} else {
			(self.sum / self.max).clamp(0.0, 1.0)
		}
	}

	fn render(&self) -> String {
		let (open, full, empty, close) = self.style.glyphs();
		let filled = ((self.ratio() * self.width as f64).ceil() as u64).min(self.width);

		let elapsed = self.started.elapsed().as_secs_f64();
		let rate = if elapsed > 0.0 { self.sum / elapsed } else { 0.0 };
		let eta = if rate > 0.0 { ((self.max - self.sum).max(0.0) / rate).ceil() as u64 } else { 0 };
		let (scaled, prefix) = si_scale(rate);

		let mut line = String::with_capacity(self.width as usize + 64);
		line.push('\r');
		line.push(open);
		line.extend((0..self.width).map(|i| if i < filled { full } else { empty }));
		line.push(close);
		line.push_str(&format!(
			" {:.2}% | {:.2} {}{}/s | {} | {}",
			self.ratio() * 100.0,
			scaled,
			prefix,
			self.unit,
			format_duration(elapsed as u64),
			format_duration(eta),
		));
		line
	}

	fn draw(&mut self) {
		let line = self.render();
		let _ = self.out.write_all(line.as_bytes());
		let _ = self.out.flush();
	}
}

impl<W: Write> Drop for ProgressBar<W> {
	fn drop(&mut self) {
		self.finalize();
	}
}
