//! Project card filtering by category.

use leptos::prelude::*;

use crate::dom;

/// Filter value that shows every card.
pub const SHOW_ALL: &str = "all";

/// Whether a card in `category` is visible under `filter`.
///
/// Cards and buttons without the data attribute compare equal to each other,
/// so an unlabeled button shows exactly the unlabeled cards.
pub fn shows(filter: Option<&str>, category: Option<&str>) -> bool {
	filter == Some(SHOW_ALL) || filter == category
}

/// Staggered fade-in for the `index`-th card.
pub fn fade_in_animation(index: usize) -> String {
	format!("fadeIn 0.5s ease {:.1}s forwards", index as f64 * 0.1)
}

pub fn install() {
	let buttons = dom::query_all(".filter-btn");
	if buttons.is_empty() {
		return;
	}
	let cards = dom::query_all(".project-card");
	let selected = RwSignal::new(None::<usize>);

	let buttons_fx = buttons.clone();
	Effect::new(move |_| {
		let Some(active) = selected.get() else {
			return;
		};
		for (i, button) in buttons_fx.iter().enumerate() {
			dom::set_class(button, "active", i == active);
		}

		let filter = dom::data(&buttons_fx[active], "filter");
		for (index, card) in cards.iter().enumerate() {
			// Restart the animation: clear it and force a reflow first.
			dom::set_style(card, "animation", "none");
			let _ = card.offset_height();

			let category = dom::data(card, "category");
			if shows(filter.as_deref(), category.as_deref()) {
				dom::set_class(card, "hidden", false);
				dom::set_style(card, "animation", &fade_in_animation(index));
			} else {
				dom::set_class(card, "hidden", true);
			}
		}
	});

	for (i, button) in buttons.iter().enumerate() {
		dom::listen(button, "click", move |_| selected.set(Some(i)));
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn all_shows_everything() {
		assert!(shows(Some("all"), Some("web")));
		assert!(shows(Some("all"), None));
	}

	#[test]
	fn category_must_match_exactly() {
		assert!(shows(Some("web"), Some("web")));
		assert!(!shows(Some("web"), Some("ml")));
		assert!(!shows(Some("web"), None));
		assert!(!shows(None, Some("web")));
		assert!(shows(None, None));
	}

	#[test]
	fn fade_in_is_staggered_per_card() {
		assert_eq!(fade_in_animation(0), "fadeIn 0.5s ease 0.0s forwards");
		assert_eq!(fade_in_animation(3), "fadeIn 0.5s ease 0.3s forwards");
		assert_eq!(fade_in_animation(12), "fadeIn 0.5s ease 1.2s forwards");
	}
}
