use yew_router::prelude::*;

use crate::navigation::Section;

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Dashboard,
    #[at("/prediction")]
    Prediction,
    #[at("/analytics")]
    Analytics,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Section shown for this route. Unknown routes fall back to the dashboard.
    pub fn section(&self) -> Section {
        match self {
            Route::Dashboard => Section::Dashboard,
            Route::Prediction => Section::Prediction,
            Route::Analytics => Section::Analytics,
            Route::NotFound => {
                log::warn!("404 - Route not found, showing dashboard");
                Section::Dashboard
            }
        }
    }
}

impl From<Section> for Route {
    fn from(section: Section) -> Self {
        match section {
            Section::Dashboard => Route::Dashboard,
            Section::Prediction => Route::Prediction,
            Section::Analytics => Route::Analytics,
        }
    }
}
