//! portfolio-fx: particle background and interactive effects for a portfolio site.
//!
//! This crate provides a WASM app that mounts a full-viewport particle field
//! behind the page and enhances the static portfolio markup with scroll state,
//! navigation, typing, counters, filtering and a simulated contact form.

use leptos::prelude::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

pub mod components;
pub mod config;
mod dom;

pub use components::particle_field::{ParticleFieldCanvas, Theme};
pub use config::PageConfig;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("portfolio-fx: logging initialized");
}

/// Load page configuration from a script element with id="portfolio-config".
/// Falls back to defaults when the element is missing or unreadable.
fn load_page_config() -> PageConfig {
	let Some(json_text) = dom::document()
		.and_then(|d| d.get_element_by_id(config::CONFIG_ELEMENT_ID))
		.and_then(|el| el.dyn_into::<HtmlScriptElement>().ok())
		.and_then(|script| script.text().ok())
	else {
		return PageConfig::default();
	};

	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!("portfolio-fx: loaded page configuration");
			config
		}
		Err(e) => {
			warn!("portfolio-fx: failed to parse page configuration: {}", e);
			PageConfig::default()
		}
	}
}

/// Main application component.
/// Mounts the particle background and wires the page enhancements.
#[component]
pub fn App() -> impl IntoView {
	let config = load_page_config();
	components::page::install(&config);

	view! { <ParticleFieldCanvas theme=config.background /> }
}
