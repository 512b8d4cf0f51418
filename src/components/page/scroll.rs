//! Scroll-driven page state: progress bar, navbar shading, active nav link,
//! and parallax drift of the decorative shapes.

use leptos::ev;
use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::dom;

/// Scroll distance after which the navbar switches to its solid style.
pub const NAVBAR_SCROLLED_AT: f64 = 50.0;
/// How far below the top of the viewport the active-section probe sits.
pub const SECTION_PROBE_OFFSET: f64 = 100.0;
/// Parallax speed per shape index.
pub const PARALLAX_STEP: f64 = 0.05;

/// Percentage of the scrollable distance already scrolled.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, viewport_height: f64) -> f64 {
	let travel = scroll_height - viewport_height;
	if travel <= 0.0 {
		return 0.0;
	}
	(scroll_top / travel * 100.0).clamp(0.0, 100.0)
}

/// Vertical extent of a page section.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
	pub top: f64,
	pub height: f64,
}

/// Index of the section under the probe line. The last match wins, matching
/// document order for nested or overlapping sections.
pub fn active_section(sections: &[SectionBounds], scroll_y: f64) -> Option<usize> {
	let probe = scroll_y + SECTION_PROBE_OFFSET;
	sections
		.iter()
		.rposition(|s| probe >= s.top && probe < s.top + s.height)
}

/// Diagonal translation for the `index`-th shape.
pub fn parallax_offset(index: usize, scroll_y: f64) -> f64 {
	scroll_y * PARALLAX_STEP * (index + 1) as f64
}

pub fn install() {
	install_progress();
	install_navbar_shading();
	install_section_tracking();
	install_parallax();
}

fn install_progress() {
	let Some(bar) = dom::query(".scroll-progress") else {
		return;
	};
	let _ = window_event_listener(ev::scroll, move |_| {
		let Some(window) = web_sys::window() else {
			return;
		};
		let scroll_height = dom::document()
			.and_then(|d| d.document_element())
			.map(|e| e.scroll_height() as f64)
			.unwrap_or(0.0);
		let (_, viewport_height) = dom::viewport_size(&window);
		let progress = progress_percent(dom::scroll_y(), scroll_height, viewport_height);
		dom::set_style(&bar, "width", &format!("{progress}%"));
	});
}

fn install_navbar_shading() {
	let Some(navbar) = dom::query(".navbar") else {
		return;
	};
	let _ = window_event_listener(ev::scroll, move |_| {
		dom::set_class(&navbar, "scrolled", dom::scroll_y() > NAVBAR_SCROLLED_AT);
	});
}

fn install_section_tracking() {
	let sections: Vec<(HtmlElement, String)> = dom::query_all("section[id]")
		.into_iter()
		.map(|s| {
			let id = s.id();
			(s, id)
		})
		.collect();
	if sections.is_empty() {
		return;
	}
	let links = dom::query_all(".nav-link");

	let _ = window_event_listener(ev::scroll, move |_| {
		// Offsets shift with layout, so read them on every event.
		let bounds: Vec<SectionBounds> = sections
			.iter()
			.map(|(s, _)| SectionBounds {
				top: s.offset_top() as f64,
				height: s.offset_height() as f64,
			})
			.collect();
		let Some(active) = active_section(&bounds, dom::scroll_y()) else {
			return;
		};
		let href = format!("#{}", sections[active].1);
		for link in &links {
			let is_active = link.get_attribute("href").as_deref() == Some(href.as_str());
			dom::set_class(link, "active", is_active);
		}
	});
}

fn install_parallax() {
	let shapes = dom::query_all(".shape");
	if shapes.is_empty() {
		return;
	}
	let _ = window_event_listener(ev::scroll, move |_| {
		let scrolled = dom::scroll_y();
		for (i, shape) in shapes.iter().enumerate() {
			let offset = parallax_offset(i, scrolled);
			dom::set_style(shape, "transform", &format!("translate({offset}px, {offset}px)"));
		}
	});
}
