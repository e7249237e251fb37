use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::prelude::*;

use super::{ChartBackend, ChartError, ChartSpec};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = Plotly, js_name = newPlot, catch)]
    fn new_plot(div_id: &str, data: JsValue, layout: JsValue, config: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = Plotly, catch)]
    fn purge(div_id: &str) -> Result<(), JsValue>;

    #[wasm_bindgen(js_namespace = ["Plotly", "Plots"], js_name = resize, catch)]
    fn plots_resize(div_id: &str) -> Result<JsValue, JsValue>;
}

/// Plotly.js, loaded by the host page as the global `Plotly`.
#[derive(Debug, Default)]
pub struct PlotlyBackend;

/// Handle of a live Plotly chart: the id of the div it is drawn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotlyChart {
    div_id: String,
}

fn to_js(value: &Value) -> Result<JsValue, ChartError> {
    // Plain objects, not ES Maps: Plotly only reads object properties.
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| ChartError::Payload(e.to_string()))
}

fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

impl ChartBackend for PlotlyBackend {
    type Handle = PlotlyChart;

    fn create(&mut self, target: &str, spec: &ChartSpec) -> Result<Self::Handle, ChartError> {
        let data = to_js(&spec.plotly_data())?;
        let layout = to_js(&spec.plotly_layout())?;
        let config = to_js(&ChartSpec::plotly_config())?;

        new_plot(target, data, layout, config).map_err(|e| ChartError::Render(describe(&e)))?;
        log::trace!("Plotly chart drawn on #{}", target);

        Ok(PlotlyChart {
            div_id: target.to_string(),
        })
    }

    fn dispose(&mut self, handle: Self::Handle) {
        if let Err(e) = purge(&handle.div_id) {
            log::warn!("Plotly.purge failed for #{}: {}", handle.div_id, describe(&e));
        }
    }

    fn resize(&mut self, handle: &Self::Handle) {
        if let Err(e) = plots_resize(&handle.div_id) {
            log::debug!("Plotly resize skipped for #{}: {}", handle.div_id, describe(&e));
        }
    }
}
