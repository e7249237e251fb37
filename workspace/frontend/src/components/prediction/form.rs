use wasm_bindgen::JsValue;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::common::notify::use_notifier;
use crate::form::{APPLIANCES, LOCATIONS, PredictionFormData};
use crate::hooks::use_prediction_submit;

fn field(form_data: &FormData, name: &str) -> String {
    form_data.get(name).as_string().unwrap_or_default()
}

/// Read the form, including every checked `appliances` checkbox.
fn read_form(form: &HtmlFormElement) -> Result<PredictionFormData, JsValue> {
    let form_data = FormData::new_with_form(form)?;
    let appliances = form_data
        .get_all("appliances")
        .iter()
        .filter_map(|value| value.as_string())
        .collect();

    Ok(PredictionFormData {
        location: field(&form_data, "location"),
        household_size: field(&form_data, "householdSize"),
        current_usage: field(&form_data, "currentUsage"),
        appliances,
    })
}

#[function_component(PredictionForm)]
pub fn prediction_form() -> Html {
    let form_ref = use_node_ref();
    let prediction = use_prediction_submit();
    let notifier = use_notifier();

    let on_submit = {
        let form_ref = form_ref.clone();
        let submit = prediction.submit.clone();
        let busy = prediction.busy;

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if busy {
                log::debug!("Submit ignored while a prediction is running");
                return;
            }

            let Some(form) = form_ref.cast::<HtmlFormElement>() else {
                log::error!("Prediction form is not mounted");
                return;
            };

            let data = match read_form(&form) {
                Ok(data) => data,
                Err(e) => {
                    log::error!("Failed to read prediction form: {:?}", e);
                    return;
                }
            };

            match data.into_request() {
                Ok(request) => {
                    log::info!("Submitting prediction for {}", request.location);
                    submit.emit(request);
                }
                Err(e) => {
                    log::warn!("Invalid prediction form: {}", e);
                    notifier.warning(&e.to_string());
                }
            }
        })
    };

    html! {
        <form ref={form_ref} id="advancedPredictionForm" onsubmit={on_submit} class="space-y-4">
            <div class="form-control">
                <label class="label"><span class="label-text">{"Location"}</span></label>
                <select name="location" class="select select-bordered w-full" required={true}>
                    {for LOCATIONS.iter().map(|(value, label)| html! {
                        <option value={*value}>{*label}</option>
                    })}
                </select>
            </div>

            <div class="grid grid-cols-2 gap-4">
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Household Size"}</span></label>
                    <input
                        type="number"
                        name="householdSize"
                        class="input input-bordered w-full"
                        min="1"
                        max="20"
                        value="3"
                        required={true}
                    />
                </div>
                <div class="form-control">
                    <label class="label"><span class="label-text">{"Current Usage (kWh, optional)"}</span></label>
                    <input
                        type="number"
                        name="currentUsage"
                        class="input input-bordered w-full"
                        min="0"
                        placeholder="0"
                    />
                </div>
            </div>

            <div class="form-control">
                <label class="label"><span class="label-text">{"Appliances"}</span></label>
                <div class="grid grid-cols-2 gap-2">
                    {for APPLIANCES.iter().map(|(value, label)| html! {
                        <label class="label cursor-pointer justify-start gap-2">
                            <input type="checkbox" name="appliances" value={*value} class="checkbox checkbox-primary checkbox-sm" />
                            <span class="label-text">{*label}</span>
                        </label>
                    })}
                </div>
            </div>

            <button type="submit" class="predict-btn btn btn-primary w-full" disabled={prediction.busy}>
                if prediction.busy {
                    <span class="loading loading-spinner loading-sm"></span>
                    {" Analyzing..."}
                } else {
                    <i class="fas fa-brain"></i>
                    {" Generate AI Prediction"}
                }
            </button>
        </form>
    }
}
