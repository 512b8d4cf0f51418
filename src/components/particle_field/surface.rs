//! The 2D drawing surface the particle field paints onto.

use std::f64::consts::PI;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::theme::Color;

/// Minimal 2D drawing operations needed by the particle renderer.
pub trait DrawingSurface {
	/// Sets the pixel dimensions of the backing store.
	fn set_size(&mut self, width: f64, height: f64);
	fn clear(&mut self);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color);
	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color);
}

/// A `<canvas>` element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquires the 2D context. `None` if the canvas has no 2D context.
	pub fn new(canvas: HtmlCanvasElement) -> Option<Self> {
		use wasm_bindgen::JsCast;

		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()?
			.dyn_into::<CanvasRenderingContext2d>()
			.ok()?;
		Some(Self { canvas, ctx })
	}
}

impl DrawingSurface for CanvasSurface {
	fn set_size(&mut self, width: f64, height: f64) {
		self.canvas.set_width(width as u32);
		self.canvas.set_height(height as u32);
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(
			0.0,
			0.0,
			self.canvas.width() as f64,
			self.canvas.height() as f64,
		);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
	}

	fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.stroke();
	}
}

#[cfg(test)]
pub mod recording {
	use super::*;

	/// A single recorded draw call.
	#[derive(Clone, Debug, PartialEq)]
	pub enum DrawCall {
		Resize(f64, f64),
		Clear,
		Circle { x: f64, y: f64, radius: f64, color: Color },
		Line { from: (f64, f64), to: (f64, f64), width: f64, color: Color },
	}

	/// Surface that records every call instead of drawing.
	#[derive(Default)]
	pub struct RecordingSurface {
		pub calls: Vec<DrawCall>,
	}

	impl RecordingSurface {
		pub fn lines(&self) -> Vec<&DrawCall> {
			self.calls
				.iter()
				.filter(|c| matches!(c, DrawCall::Line { .. }))
				.collect()
		}

		pub fn circles(&self) -> usize {
			self.calls
				.iter()
				.filter(|c| matches!(c, DrawCall::Circle { .. }))
				.count()
		}
	}

	impl DrawingSurface for RecordingSurface {
		fn set_size(&mut self, width: f64, height: f64) {
			self.calls.push(DrawCall::Resize(width, height));
		}

		fn clear(&mut self) {
			self.calls.push(DrawCall::Clear);
		}

		fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
			self.calls.push(DrawCall::Circle { x, y, radius, color });
		}

		fn stroke_line(&mut self, from: (f64, f64), to: (f64, f64), width: f64, color: Color) {
			self.calls.push(DrawCall::Line { from, to, width, color });
		}
	}
}
