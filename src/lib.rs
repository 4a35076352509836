pub mod calculator;
pub mod config;

pub use calculator::StatefulCalculator;
