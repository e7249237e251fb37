//! Chart model, registry and Plotly backend.
//!
//! Components describe charts as a [`ChartSpec`]; the [`ChartRegistry`] owns the live
//! instance of every [`ChartSlot`] and is the only place that creates or disposes them.

pub mod plotly;
pub mod registry;
pub mod spec;

pub use registry::{ChartBackend, ChartError, ChartRegistry, ChartsHandle};
pub use spec::{ChartKind, ChartSpec, LegendPosition, Series};

/// A chart mount point on the page. At most one live chart per slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    Trend,
    Appliance,
    Forecast,
}

impl ChartSlot {
    pub const ALL: [ChartSlot; 3] = [ChartSlot::Trend, ChartSlot::Appliance, ChartSlot::Forecast];

    /// Element id of the mount point.
    pub fn mount_id(&self) -> &'static str {
        match self {
            ChartSlot::Trend => "trendChart",
            ChartSlot::Appliance => "applianceChart",
            ChartSlot::Forecast => "forecastChart",
        }
    }
}

impl std::fmt::Display for ChartSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mount_id())
    }
}
