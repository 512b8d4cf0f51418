//! Page configuration.
//!
//! The host page may embed a JSON document in
//! `<script id="portfolio-config" type="application/json">`. Every field is
//! optional; anything left out keeps its default.

use std::time::Duration;

use serde::Deserialize;

use crate::components::particle_field::Theme;

/// Element id of the embedded configuration document.
pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

/// Top-level configuration for every page feature.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	pub background: Theme,
	pub typing: TypingConfig,
	pub counters: CounterConfig,
	pub reveal: RevealConfig,
	pub contact: ContactConfig,
}

impl PageConfig {
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Typing effect text and cadence (milliseconds).
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
	pub text: String,
	pub start_delay_ms: u64,
	pub type_delay_ms: u64,
	pub delete_delay_ms: u64,
	/// How long the full text stays up before deleting starts.
	pub hold_ms: u64,
	/// Pause on the empty string before typing again.
	pub restart_ms: u64,
}

impl Default for TypingConfig {
	fn default() -> Self {
		Self {
			text: "Manosakthi Thiyagarajan".into(),
			start_delay_ms: 300,
			type_delay_ms: 50,
			delete_delay_ms: 30,
			hold_ms: 2000,
			restart_ms: 300,
		}
	}
}

/// Slot-machine counters.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct CounterConfig {
	pub spin_ms: u64,
	/// Idle time on the final number before spinning again.
	pub restart_ms: u64,
	/// Visible fraction that starts a counter.
	pub threshold: f64,
}

impl CounterConfig {
	pub fn spin(&self) -> Duration {
		Duration::from_millis(self.spin_ms)
	}
}

impl Default for CounterConfig {
	fn default() -> Self {
		Self {
			spin_ms: 80,
			restart_ms: 10_000,
			threshold: 0.5,
		}
	}
}

/// Reveal-on-scroll observer settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
	pub threshold: f64,
	pub root_margin: String,
	/// Delay between elements revealed in the same batch.
	pub stagger_ms: u64,
}

impl Default for RevealConfig {
	fn default() -> Self {
		Self {
			threshold: 0.1,
			root_margin: "0px 0px -30px 0px".into(),
			stagger_ms: 50,
		}
	}
}

/// Simulated contact form timing.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
	pub send_ms: u64,
	pub reset_ms: u64,
}

impl Default for ContactConfig {
	fn default() -> Self {
		Self {
			send_ms: 2000,
			reset_ms: 3000,
		}
	}
}
