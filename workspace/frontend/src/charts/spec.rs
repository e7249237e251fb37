use chrono::Month;
use ecowatt_common::TrendPoint;
use serde_json::{Value, json};

/// Monthly baseline consumption (kWh) shown on the trend chart.
pub const BASELINE_CONSUMPTION: [u32; 12] = [650, 580, 520, 480, 520, 680, 750, 720, 600, 550, 580, 620];

/// Share of the baseline the optimized profile keeps.
pub const OPTIMIZATION_FACTOR: f64 = 0.78;

/// Appliance breakdown shares in percent.
pub const APPLIANCE_SHARES: [(&str, f64, &str); 5] = [
    ("AC/Heating", 35.0, "#ef4444"),
    ("Refrigerator", 20.0, "#f59e0b"),
    ("Lighting", 15.0, "#10b981"),
    ("Electronics", 20.0, "#2563eb"),
    ("Others", 10.0, "#8b5cf6"),
];

const CONSUMPTION_AXIS: &str = "Energy Consumption (kWh)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Doughnut,
    Bar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// One color for line/bar series, one per slice for doughnuts.
    pub colors: Vec<&'static str>,
    /// Area fill under a line series.
    pub fill: Option<&'static str>,
}

/// Library-neutral description of a chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
    pub y_axis_title: Option<&'static str>,
    pub legend: LegendPosition,
}

/// Short month names, Jan..Dec.
pub fn month_labels() -> Vec<String> {
    (1..=12u8)
        .filter_map(|m| Month::try_from(m).ok())
        .map(|m| m.name()[..3].to_string())
        .collect()
}

pub fn optimized_consumption(baseline: &[u32]) -> Vec<f64> {
    baseline
        .iter()
        .map(|&v| (f64::from(v) * OPTIMIZATION_FACTOR).round())
        .collect()
}

/// Year-long consumption trend: baseline against the optimized profile.
pub fn trend_chart() -> ChartSpec {
    let current: Vec<f64> = BASELINE_CONSUMPTION.iter().map(|&v| f64::from(v)).collect();

    ChartSpec {
        kind: ChartKind::Line,
        labels: month_labels(),
        series: vec![
            Series {
                name: "Current Consumption".to_string(),
                values: current,
                colors: vec!["#ef4444"],
                fill: Some("rgba(239, 68, 68, 0.1)"),
            },
            Series {
                name: "AI Optimized".to_string(),
                values: optimized_consumption(&BASELINE_CONSUMPTION),
                colors: vec!["#10b981"],
                fill: Some("rgba(16, 185, 129, 0.1)"),
            },
        ],
        y_axis_title: Some(CONSUMPTION_AXIS),
        legend: LegendPosition::Top,
    }
}

pub fn appliance_chart() -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Doughnut,
        labels: APPLIANCE_SHARES.iter().map(|(label, _, _)| label.to_string()).collect(),
        series: vec![Series {
            name: "Share".to_string(),
            values: APPLIANCE_SHARES.iter().map(|(_, share, _)| *share).collect(),
            colors: APPLIANCE_SHARES.iter().map(|(_, _, color)| *color).collect(),
            fill: None,
        }],
        y_axis_title: None,
        legend: LegendPosition::Bottom,
    }
}

/// Forecast bars built from the prediction's trend points, in received order.
pub fn forecast_chart(trends: &[TrendPoint]) -> ChartSpec {
    ChartSpec {
        kind: ChartKind::Bar,
        labels: trends.iter().map(|t| t.month.clone()).collect(),
        series: vec![
            Series {
                name: "Predicted Consumption".to_string(),
                values: trends.iter().map(|t| t.predicted).collect(),
                colors: vec!["rgba(239, 68, 68, 0.8)"],
                fill: None,
            },
            Series {
                name: "Optimized Consumption".to_string(),
                values: trends.iter().map(|t| t.optimized).collect(),
                colors: vec!["rgba(16, 185, 129, 0.8)"],
                fill: None,
            },
        ],
        y_axis_title: Some(CONSUMPTION_AXIS),
        legend: LegendPosition::Top,
    }
}

impl ChartSpec {
    /// Plotly traces for this chart.
    pub fn plotly_data(&self) -> Value {
        let traces: Vec<Value> = match self.kind {
            ChartKind::Line => self
                .series
                .iter()
                .map(|s| {
                    let color = s.colors.first().copied().unwrap_or("#2563eb");
                    let fill = if s.fill.is_some() { "tozeroy" } else { "none" };
                    json!({
                        "x": self.labels,
                        "y": s.values,
                        "type": "scatter",
                        "mode": "lines",
                        "name": s.name,
                        "fill": fill,
                        "fillcolor": s.fill,
                        "line": {"color": color, "shape": "spline", "width": 3}
                    })
                })
                .collect(),
            ChartKind::Doughnut => self
                .series
                .iter()
                .map(|s| {
                    json!({
                        "labels": self.labels,
                        "values": s.values,
                        "type": "pie",
                        "hole": 0.5,
                        "sort": false,
                        "name": s.name,
                        "marker": {"colors": s.colors, "line": {"width": 0}}
                    })
                })
                .collect(),
            ChartKind::Bar => self
                .series
                .iter()
                .map(|s| {
                    json!({
                        "x": self.labels,
                        "y": s.values,
                        "type": "bar",
                        "name": s.name,
                        "marker": {"color": s.colors.first().copied().unwrap_or("#2563eb")}
                    })
                })
                .collect(),
        };
        Value::Array(traces)
    }

    pub fn plotly_layout(&self) -> Value {
        let legend = match self.legend {
            LegendPosition::Top => json!({"orientation": "h", "x": 0.5, "xanchor": "center", "y": 1.15}),
            LegendPosition::Bottom => json!({"orientation": "h", "x": 0.5, "xanchor": "center", "y": -0.15}),
        };

        let mut layout = json!({
            "margin": {"t": 30, "r": 10, "l": 60, "b": 40},
            "paper_bgcolor": "rgba(0,0,0,0)",
            "plot_bgcolor": "rgba(0,0,0,0)",
            "showlegend": true,
            "legend": legend
        });

        if self.kind != ChartKind::Doughnut {
            layout["xaxis"] = json!({"showgrid": false});
            layout["yaxis"] = json!({
                "rangemode": "tozero",
                "showgrid": true,
                "gridcolor": "#eee",
                "title": {"text": self.y_axis_title.unwrap_or_default()}
            });
        }
        if self.kind == ChartKind::Bar {
            layout["barmode"] = json!("group");
        }

        layout
    }

    pub fn plotly_config() -> Value {
        json!({"responsive": true, "displayModeBar": false})
    }
}
