//! Charts module - Chart and table rendering

mod plotter;

pub use plotter::ChartPlotter;
