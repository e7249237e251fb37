use std::cell::Cell;
use std::rc::Rc;

use ecowatt_common::{PredictionRequest, PredictionResponse};
use yew::prelude::*;

use crate::api_client::prediction::{PredictionError, predict};
use crate::common::notify::use_notifier;
use crate::store::{DashboardAction, DashboardStore};

/// Marks a prediction request as in flight for as long as it is alive.
///
/// Dropping the guard clears the flag and runs the release callback, so the submit
/// control is restored on success and on every failure path.
pub struct InFlight {
    flag: Rc<Cell<bool>>,
    on_release: Option<Box<dyn FnOnce()>>,
}

impl InFlight {
    /// Returns `None` when a request is already in flight.
    pub fn try_begin<F>(flag: &Rc<Cell<bool>>, on_release: F) -> Option<Self>
    where
        F: FnOnce() + 'static,
    {
        if flag.replace(true) {
            return None;
        }
        Some(Self {
            flag: Rc::clone(flag),
            on_release: Some(Box::new(on_release)),
        })
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.flag.set(false);
        if let Some(release) = self.on_release.take() {
            release();
        }
    }
}

/// What a finished request does: a store action on success, otherwise the message to
/// show. A failure leaves the store untouched.
pub fn outcome_action(
    outcome: Result<PredictionResponse, PredictionError>,
) -> Result<DashboardAction, &'static str> {
    match outcome {
        Ok(response) => Ok(DashboardAction::PredictionReceived(response)),
        Err(err) => {
            log::error!("Error: {}", err);
            Err(err.alert_message())
        }
    }
}

/// Prediction submission state for the form.
#[derive(Clone, PartialEq)]
pub struct PredictionSubmit {
    pub busy: bool,
    pub submit: Callback<PredictionRequest>,
}

/// Submits predictions one at a time; a submit while a request is in flight is ignored.
#[hook]
pub fn use_prediction_submit() -> PredictionSubmit {
    let busy = use_state(|| false);
    let in_flight = use_state(|| Rc::new(Cell::new(false)));
    let store = use_context::<DashboardStore>().expect("DashboardStore context missing");
    let notifier = use_notifier();

    let submit = {
        let busy = busy.clone();
        let in_flight = (*in_flight).clone();

        use_callback((store, notifier), move |request: PredictionRequest, (store, notifier)| {
            let release_busy = busy.clone();
            let Some(guard) = InFlight::try_begin(&in_flight, move || release_busy.set(false)) else {
                log::warn!("Prediction already in flight, ignoring submit");
                return;
            };
            busy.set(true);

            let store = store.clone();
            let notifier = notifier.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = predict(&request).await;
                drop(guard);

                match outcome_action(outcome) {
                    Ok(action) => {
                        store.dispatch(action);
                        notifier.success("Prediction updated");
                    }
                    Err(message) => notifier.error(message),
                }
            });
        })
    };

    PredictionSubmit {
        busy: *busy,
        submit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_client::ApiError;
    use crate::store::DashboardState;

    fn apply(
        state: Rc<DashboardState>,
        outcome: Result<PredictionResponse, PredictionError>,
    ) -> (Rc<DashboardState>, Option<&'static str>) {
        match outcome_action(outcome) {
            Ok(action) => (state.reduce(action), None),
            Err(message) => (state, Some(message)),
        }
    }

    fn success() -> PredictionResponse {
        PredictionResponse {
            success: true,
            prediction: 350.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_success_dispatches_prediction() {
        let action = outcome_action(Ok(success()));
        assert!(matches!(action, Ok(DashboardAction::PredictionReceived(ref r)) if r.prediction == 350.0));
    }

    #[test]
    fn test_transport_failure_shows_network_message_and_keeps_results() {
        let (before, _) = apply(Rc::new(DashboardState::default()), Ok(success()));

        let failure = Err(PredictionError::Api(ApiError::Transport("connection refused".to_string())));
        let (after, message) = apply(before.clone(), failure);

        assert_eq!(message, Some("Network error. Please try again."));
        assert!(Rc::ptr_eq(&before, &after));
        assert_eq!(after.summary.current_consumption, "350 kWh");
        assert_eq!(after.predictions, 1);
    }

    #[test]
    fn test_rejection_shows_failure_message_without_dispatch() {
        let state = Rc::new(DashboardState::default());
        let (after, message) = apply(state.clone(), Err(PredictionError::Rejected { reason: None }));

        assert_eq!(message, Some("Prediction failed. Please try again."));
        assert!(after.latest.is_none());
        assert_eq!(*after, *state);
    }

    #[test]
    fn test_second_begin_is_refused_while_in_flight() {
        let flag = Rc::new(Cell::new(false));

        let first = InFlight::try_begin(&flag, || {});
        assert!(first.is_some());
        assert!(flag.get());
        assert!(InFlight::try_begin(&flag, || {}).is_none());

        drop(first);
        assert!(!flag.get());
        assert!(InFlight::try_begin(&flag, || {}).is_some());
    }

    #[test]
    fn test_release_runs_once_on_drop() {
        let flag = Rc::new(Cell::new(false));
        let released = Rc::new(Cell::new(0));

        let counter = released.clone();
        let guard = InFlight::try_begin(&flag, move || counter.set(counter.get() + 1)).unwrap();
        assert_eq!(released.get(), 0);

        drop(guard);
        assert_eq!(released.get(), 1);
    }

    #[test]
    fn test_refused_begin_does_not_release() {
        let flag = Rc::new(Cell::new(false));
        let released = Rc::new(Cell::new(false));

        let _guard = InFlight::try_begin(&flag, || {}).unwrap();
        let marker = released.clone();
        assert!(InFlight::try_begin(&flag, move || marker.set(true)).is_none());

        assert!(!released.get());
        assert!(flag.get());
    }
}
