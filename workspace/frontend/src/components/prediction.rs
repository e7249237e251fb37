mod chart;
mod form;
mod recommendations;
mod results;
mod view;

pub use view::Prediction;
