//! Enhancements over the statically authored portfolio markup.
//!
//! Each feature looks up its own elements and silently does nothing when
//! they are missing, so the same bundle works on every page of the site.

pub mod contact;
pub mod counters;
pub mod effects;
pub mod filters;
pub mod navigation;
pub mod reveal;
pub mod scroll;
pub mod typing;

use log::debug;

use crate::config::PageConfig;

/// Wires every page feature. Call once, inside the app's reactive owner.
pub fn install(config: &PageConfig) {
	scroll::install();
	navigation::install();
	typing::install(&config.typing);
	counters::install(&config.counters);
	reveal::install(&config.reveal);
	filters::install();
	contact::install(&config.contact);
	effects::install();
	debug!("portfolio-fx: page enhancements installed");
}
