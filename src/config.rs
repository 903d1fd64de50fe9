// ══════════════════════════════════════════════════════════════════════════════
// CONFIG MODULE
// ══════════════════════════════════════════════════════════════════════════════
//
// Startup configuration for the process-wide logger. Values come from the
// `CONKIT_*` environment variables; anything unset keeps its default and
// anything unparseable is reported instead of silently ignored.

use std::fmt;
use std::str::FromStr;

use crate::constants::{ENV_LEVEL, ENV_LOCATION, ENV_PALETTE, ENV_SINK, ENV_STATUS, ENV_THREAD, ENV_TIME};
use crate::error::{Error, Result};
use crate::level::Severity;
use crate::style::{Palette, StyleFlags};

/// Where the process-wide logger writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SinkTarget {
	#[default]
	Stdout,
	Stderr,
}

impl fmt::Display for SinkTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			SinkTarget::Stdout => f.write_str("stdout"),
			SinkTarget::Stderr => f.write_str("stderr"),
		}
	}
}

impl FromStr for SinkTarget {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self> {
		match s.trim().to_ascii_lowercase().as_str() {
			"stdout" | "out" => Ok(SinkTarget::Stdout),
			"stderr" | "err" => Ok(SinkTarget::Stderr),
			_ => Err(Error::UnknownSink(s.to_string())),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
	pub level: Severity,
	pub flags: StyleFlags,
	pub palette: Palette,
	pub sink: SinkTarget,
}

impl Config {
	pub fn from_env() -> Result<Self> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Builds a config from any key lookup, starting from the defaults.
	pub fn from_lookup<F>(lookup: F) -> Result<Self>
	where
		F: Fn(&str) -> Option<String>,
	{
		let mut config = Config::default();
		if let Some(value) = lookup(ENV_LEVEL) {
			config.level = value.parse()?;
		}
		if let Some(value) = lookup(ENV_PALETTE) {
			config.palette = value.parse()?;
		}
		if let Some(value) = lookup(ENV_SINK) {
			config.sink = value.parse()?;
		}
		if let Some(value) = lookup(ENV_TIME) {
			config.flags.time = parse_flag(ENV_TIME, &value)?;
		}
		if let Some(value) = lookup(ENV_STATUS) {
			config.flags.status = parse_flag(ENV_STATUS, &value)?;
		}
		if let Some(value) = lookup(ENV_LOCATION) {
			config.flags.location = parse_flag(ENV_LOCATION, &value)?;
		}
		if let Some(value) = lookup(ENV_THREAD) {
			config.flags.thread = parse_flag(ENV_THREAD, &value)?;
		}
		Ok(config)
	}
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "on" | "yes" => Ok(true),
		"0" | "false" | "off" | "no" | "" => Ok(false),
		_ => Err(Error::InvalidFlag { key: key.to_string(), value: value.to_string() }),
	}
}
