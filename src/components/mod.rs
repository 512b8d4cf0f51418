//! UI components mounted by the portfolio app.

pub mod page;
pub mod particle_field;
