// ══════════════════════════════════════════════════════════════════════════════
// SIMPLE PROGRESS BAR
// ══════════════════════════════════════════════════════════════════════════════
//
// Append-only bar for sinks that cannot redraw (pipes, log files). Prints a
// scale once, then one `#` per width-th of progress:
//
//     0%                                                          100%
//     [##########################

use std::io::Write;

use crate::constants::DEFAULT_SIMPLE_BAR_WIDTH;

pub struct SimpleProgressBar<W: Write> {
	out: W,
	max: f64,
	sum: f64,
	step: f64,
	next: f64,
	remaining: u64,
	finished: bool,
}

impl<W: Write> SimpleProgressBar<W> {
	pub fn new(out: W, max: u64) -> Self {
		Self::with_width(out, max, DEFAULT_SIMPLE_BAR_WIDTH)
	}

	/// Prints the scale and the opening bracket immediately.
	pub fn with_width(mut out: W, max: u64, width: u64) -> Self {
		let width = width.max(1);
		let scale = format!("0%{}100%\n[", " ".repeat(width as usize - 1));
		let _ = out.write_all(scale.as_bytes());
		let _ = out.flush();

		let max = max as f64;
		let step = max / width as f64;
		Self { out, max, sum: 0.0, step, next: step, remaining: width, finished: false }
	}

	pub fn inc(&mut self) {
		self.add(1);
	}

	pub fn add(&mut self, amount: u64) {
		self.sum += amount as f64;
		self.check();
	}

	pub fn set(&mut self, position: u64) {
		self.sum = position as f64;
		self.check();
	}

	pub fn is_finished(&self) -> bool {
		self.finished
	}

	pub fn get_ref(&self) -> &W {
		&self.out
	}

	/// Closes the bracket, whether or not every cell was filled. Idempotent.
	pub fn finalize(&mut self) {
		if self.finished {
			return;
		}
		self.finished = true;
		let _ = self.out.write_all(b"]\n");
		let _ = self.out.flush();
	}

	fn check(&mut self) {
		if self.finished {
			return;
		}
		let mut cells = 0usize;
		while self.remaining > 0 && (self.sum >= self.next || self.sum >= self.max) {
			self.next += self.step;
			self.remaining -= 1;
			cells += 1;
		}
		if cells > 0 {
			let _ = self.out.write_all("#".repeat(cells).as_bytes());
			let _ = self.out.flush();
		}
		if self.remaining == 0 {
			self.finalize();
		}
	}
}

impl<W: Write> Drop for SimpleProgressBar<W> {
	fn drop(&mut self) {
		self.finalize();
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn text(bar: &SimpleProgressBar<Vec<u8>>) -> String {
		String::from_utf8(bar.get_ref().clone()).unwrap()
	}

	#[test]
	fn prints_scale_up_front() {
		let bar = SimpleProgressBar::with_width(Vec::new(), 100, 4);
		assert_eq!(text(&bar), "0%   100%\n[");
	}

	#[test]
	fn one_cell_per_step_and_closes_at_end() {
		let mut bar = SimpleProgressBar::with_width(Vec::new(), 8, 4);
		bar.inc();
		assert_eq!(text(&bar), "0%   100%\n[");
		bar.inc();
		assert_eq!(text(&bar), "0%   100%\n[#");
		bar.add(6);
		assert_eq!(text(&bar), "0%   100%\n[####]\n");
		assert!(bar.is_finished());
	}

	#[test]
	fn early_finalize_closes_once() {
		let mut bar = SimpleProgressBar::with_width(Vec::new(), 10, 5);
		bar.set(4);
		bar.finalize();
		bar.finalize();
		bar.inc();
		assert_eq!(text(&bar), "0%    100%\n[##]\n");
	}

	#[test]
	fn default_width_matches_constant() {
		let bar = SimpleProgressBar::new(Vec::new(), 1);
		let header = text(&bar);
		let scale = header.lines().next().unwrap();
		assert_eq!(scale.len(), "0%".len() + DEFAULT_SIMPLE_BAR_WIDTH as usize - 1 + "100%".len());
	}
}
