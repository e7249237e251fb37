//! Section navigation model.
//!
//! The active section is derived from a single value (the current route), so the
//! "exactly one active section, exactly one active nav item" rule holds by
//! construction. The sidebar and the section wrappers both read it from here.

/// A top-level page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Prediction,
    Analytics,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Dashboard, Section::Prediction, Section::Analytics];

    /// Identifier used for `data-section` and the `<id>-section` element id.
    pub fn id(&self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::Prediction => "prediction",
            Section::Analytics => "analytics",
        }
    }

    /// Header title shown while the section is active.
    pub fn title(&self) -> &'static str {
        match self {
            Section::Dashboard => "Energy Dashboard",
            Section::Prediction => "AI Prediction Engine",
            Section::Analytics => "Advanced Analytics",
        }
    }

    /// Label of the sidebar entry.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::Prediction => "AI Prediction",
            Section::Analytics => "Analytics",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Dashboard => "fas fa-tachometer-alt",
            Section::Prediction => "fas fa-brain",
            Section::Analytics => "fas fa-chart-pie",
        }
    }

    pub fn element_id(&self) -> String {
        format!("{}-section", self.id())
    }
}

/// One sidebar entry and whether it carries the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub section: Section,
    pub active: bool,
}

impl NavItem {
    /// Classes of the nav item element; only the active entry carries `active`.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = vec!["nav-item"];
        if self.active {
            classes.push("active");
        }
        classes
    }
}

/// Sidebar entries for the given active section, in display order.
pub fn nav_items(active: Section) -> Vec<NavItem> {
    Section::ALL
        .iter()
        .map(|&section| NavItem {
            section,
            active: section == active,
        })
        .collect()
}
