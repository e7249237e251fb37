use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use super::{ChartSlot, ChartSpec};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChartError {
    #[error("failed to build chart payload: {0}")]
    Payload(String),
    #[error("charting library rejected chart: {0}")]
    Render(String),
}

/// Rendering service that draws a [`ChartSpec`] onto a mount element.
pub trait ChartBackend {
    type Handle;

    /// Draw `spec` onto the element with id `target`.
    fn create(&mut self, target: &str, spec: &ChartSpec) -> Result<Self::Handle, ChartError>;

    /// Release the rendering context bound by `create`.
    fn dispose(&mut self, handle: Self::Handle);

    /// Fit a live chart to its container again.
    fn resize(&mut self, _handle: &Self::Handle) {}
}

/// Owns the live chart of every slot.
///
/// A slot never holds two instances: [`ChartRegistry::replace`] disposes the current
/// one before the backend creates its successor.
pub struct ChartRegistry<B: ChartBackend> {
    backend: B,
    live: HashMap<ChartSlot, B::Handle>,
}

impl<B: ChartBackend> ChartRegistry<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            live: HashMap::new(),
        }
    }

    /// Dispose whatever `slot` currently shows, then draw `spec` on `target`.
    ///
    /// If creation fails the slot is left empty.
    pub fn replace(&mut self, slot: ChartSlot, target: &str, spec: &ChartSpec) -> Result<(), ChartError> {
        self.dispose(slot);

        log::debug!("Creating {} chart on #{}", slot, target);
        let handle = self.backend.create(target, spec)?;
        self.live.insert(slot, handle);
        Ok(())
    }

    /// Dispose the chart of `slot`, if any. Returns whether one was live.
    pub fn dispose(&mut self, slot: ChartSlot) -> bool {
        match self.live.remove(&slot) {
            Some(handle) => {
                log::debug!("Disposing {} chart", slot);
                self.backend.dispose(handle);
                true
            }
            None => false,
        }
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.live.contains_key(&slot)
    }

    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn resize_all(&mut self) {
        for slot in ChartSlot::ALL {
            if let Some(handle) = self.live.get(&slot) {
                log::trace!("Resizing {} chart", slot);
                self.backend.resize(handle);
            }
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

/// Shared, app-owned registry handed to components through context.
pub struct ChartsHandle<B: ChartBackend = super::plotly::PlotlyBackend>(Rc<RefCell<ChartRegistry<B>>>);

impl<B: ChartBackend> ChartsHandle<B> {
    pub fn new(backend: B) -> Self {
        Self(Rc::new(RefCell::new(ChartRegistry::new(backend))))
    }

    pub fn replace(&self, slot: ChartSlot, target: &str, spec: &ChartSpec) -> Result<(), ChartError> {
        self.0.borrow_mut().replace(slot, target, spec)
    }

    pub fn dispose(&self, slot: ChartSlot) -> bool {
        self.0.borrow_mut().dispose(slot)
    }

    pub fn resize_all(&self) {
        self.0.borrow_mut().resize_all();
    }

    pub fn is_live(&self, slot: ChartSlot) -> bool {
        self.0.borrow().is_live(slot)
    }
}

impl<B: ChartBackend> Clone for ChartsHandle<B> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<B: ChartBackend> PartialEq for ChartsHandle<B> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::spec::{appliance_chart, forecast_chart, trend_chart};
    use ecowatt_common::TrendPoint;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Created { id: usize, target: String, labels: Vec<String> },
        Disposed(usize),
        Resized(usize),
    }

    /// Backend that records calls and tracks how many instances are bound per target.
    #[derive(Default)]
    struct RecordingBackend {
        next_id: usize,
        events: Vec<Event>,
        bound: HashMap<String, usize>,
        fail_next: bool,
    }

    impl ChartBackend for RecordingBackend {
        type Handle = (usize, String);

        fn create(&mut self, target: &str, spec: &ChartSpec) -> Result<Self::Handle, ChartError> {
            if std::mem::take(&mut self.fail_next) {
                return Err(ChartError::Render("boom".to_string()));
            }
            let bound = self.bound.entry(target.to_string()).or_default();
            assert_eq!(*bound, 0, "second chart bound to #{target}");
            *bound += 1;

            let id = self.next_id;
            self.next_id += 1;
            self.events.push(Event::Created {
                id,
                target: target.to_string(),
                labels: spec.labels.clone(),
            });
            Ok((id, target.to_string()))
        }

        fn dispose(&mut self, (id, target): Self::Handle) {
            if let Some(bound) = self.bound.get_mut(&target) {
                *bound -= 1;
            }
            self.events.push(Event::Disposed(id));
        }

        fn resize(&mut self, handle: &Self::Handle) {
            self.events.push(Event::Resized(handle.0));
        }
    }

    fn trends(month: &str, predicted: f64, optimized: f64) -> Vec<TrendPoint> {
        vec![TrendPoint {
            month: month.to_string(),
            predicted,
            optimized,
        }]
    }

    #[test]
    fn test_replace_disposes_previous_forecast_first() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());

        registry
            .replace(ChartSlot::Forecast, "forecastChart", &forecast_chart(&trends("Jan", 600.0, 480.0)))
            .unwrap();
        registry
            .replace(ChartSlot::Forecast, "forecastChart", &forecast_chart(&trends("Feb", 550.0, 430.0)))
            .unwrap();

        assert_eq!(
            registry.backend().events,
            vec![
                Event::Created { id: 0, target: "forecastChart".to_string(), labels: vec!["Jan".to_string()] },
                Event::Disposed(0),
                Event::Created { id: 1, target: "forecastChart".to_string(), labels: vec!["Feb".to_string()] },
            ]
        );
        assert_eq!(registry.live_count(), 1);
    }

    #[test]
    fn test_slots_are_independent() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());

        registry.replace(ChartSlot::Trend, "trendChart", &trend_chart()).unwrap();
        registry.replace(ChartSlot::Appliance, "applianceChart", &appliance_chart()).unwrap();
        registry
            .replace(ChartSlot::Forecast, "forecastChart", &forecast_chart(&trends("Jan", 1.0, 1.0)))
            .unwrap();

        assert_eq!(registry.live_count(), 3);
        assert!(registry.backend().events.iter().all(|e| !matches!(e, Event::Disposed(_))));
    }

    #[test]
    fn test_failed_create_leaves_slot_empty() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());
        registry.replace(ChartSlot::Forecast, "forecastChart", &trend_chart()).unwrap();

        registry.backend.fail_next = true;
        let result = registry.replace(ChartSlot::Forecast, "forecastChart", &trend_chart());

        assert_eq!(result, Err(ChartError::Render("boom".to_string())));
        assert!(!registry.is_live(ChartSlot::Forecast));
        assert_eq!(registry.backend().events.last(), Some(&Event::Disposed(0)));
    }

    #[test]
    fn test_dispose_is_idempotent() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());
        registry.replace(ChartSlot::Trend, "trendChart", &trend_chart()).unwrap();

        assert!(registry.dispose(ChartSlot::Trend));
        assert!(!registry.dispose(ChartSlot::Trend));
        assert_eq!(registry.live_count(), 0);
    }

    #[test]
    fn test_resize_all_touches_only_live_charts() {
        let mut registry = ChartRegistry::new(RecordingBackend::default());
        registry.replace(ChartSlot::Appliance, "applianceChart", &appliance_chart()).unwrap();

        registry.resize_all();

        assert_eq!(registry.backend().events.last(), Some(&Event::Resized(0)));
    }

    #[test]
    fn test_handle_clones_share_registry() {
        let handle = ChartsHandle::new(RecordingBackend::default());
        let clone = handle.clone();

        clone.replace(ChartSlot::Trend, "trendChart", &trend_chart()).unwrap();

        assert!(handle.is_live(ChartSlot::Trend));
        assert!(handle == clone);
    }
}
