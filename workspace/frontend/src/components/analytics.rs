mod chart;
mod view;

pub use view::Analytics;
