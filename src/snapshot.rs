// ══════════════════════════════════════════════════════════════════════════════
// SNAPSHOT MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Append-only, insertion-ordered table of named instants. Names may repeat;
// lookups return the first match. Nothing is ever evicted, so long-running
// programs should keep the number of snapshots bounded themselves.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
	pub name: String,
	pub at: Instant,
}

impl Snapshot {
	pub fn elapsed_at(&self, now: Instant) -> Duration {
		now.saturating_duration_since(self.at)
	}
}

#[derive(Debug, Default)]
pub struct SnapshotTable {
	entries: Vec<Snapshot>,
}

impl SnapshotTable {
	pub fn new() -> Self {
		Self::default()
	}

	/// Records `name` at `at`.
	pub fn push(&mut self, name: impl Into<String>, at: Instant) -> &Snapshot {
		self.entries.push(Snapshot { name: name.into(), at });
		&self.entries[self.entries.len() - 1]
	}

	/// First snapshot recorded under `name`, by linear scan.
	pub fn find(&self, name: &str) -> Option<&Snapshot> {
		self.entries.iter().find(|s| s.name == name)
	}

	pub fn last(&self) -> Option<&Snapshot> {
		self.entries.last()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
		self.entries.iter()
	}
}
