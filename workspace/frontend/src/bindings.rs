//! Chart mount points, collected once at the app root.

use thiserror::Error;
use web_sys::Element;
use yew::NodeRef;

use crate::charts::ChartSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("chart mount #{0} is not in the page")]
    Missing(ChartSlot),
}

/// `NodeRef`s of every chart mount, shared through context so each chart component
/// binds its element and the registry can resolve it by slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewBindings {
    trend: NodeRef,
    appliance: NodeRef,
    forecast: NodeRef,
}

impl ViewBindings {
    pub fn node_ref(&self, slot: ChartSlot) -> &NodeRef {
        match slot {
            ChartSlot::Trend => &self.trend,
            ChartSlot::Appliance => &self.appliance,
            ChartSlot::Forecast => &self.forecast,
        }
    }

    /// Id of the mounted element for `slot`, assigning the slot's id if the element
    /// has none.
    pub fn resolve(&self, slot: ChartSlot) -> Result<String, BindingError> {
        let element = self
            .node_ref(slot)
            .cast::<Element>()
            .ok_or(BindingError::Missing(slot))?;

        if element.id().is_empty() {
            element.set_id(slot.mount_id());
        }
        Ok(element.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmounted_slot_is_reported_missing() {
        let bindings = ViewBindings::default();

        for slot in ChartSlot::ALL {
            assert_eq!(bindings.resolve(slot), Err(BindingError::Missing(slot)));
        }
    }

    #[test]
    fn test_each_slot_has_its_own_ref() {
        let bindings = ViewBindings::default();

        assert!(bindings.node_ref(ChartSlot::Trend) != bindings.node_ref(ChartSlot::Forecast));
        assert_eq!(
            BindingError::Missing(ChartSlot::Forecast).to_string(),
            "chart mount #forecastChart is not in the page"
        );
    }
}
