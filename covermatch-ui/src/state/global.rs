//! Page State
//!
//! Reactive state shared by the form and the results panel.

use leptos::*;

use crate::api;
use crate::state::form::{FieldKey, RecommendationInput};
use crate::state::results::ResultsView;

/// Page state provided to all components
#[derive(Clone, Copy)]
pub struct PageState {
    /// Current form values
    pub form: RwSignal<RecommendationInput>,
    /// What the results area shows
    pub results: RwSignal<ResultsView>,
}

/// Provide page state to the component tree
pub fn provide_page_state() -> PageState {
    let state = PageState {
        form: create_rw_signal(RecommendationInput::default()),
        results: create_rw_signal(ResultsView::default()),
    };

    provide_context(state);
    state
}

impl PageState {
    pub fn set_field(&self, key: FieldKey, value: String) {
        self.form.update(|form| form.set(key, value));
    }

    /// Reset the results and ask the server for recommendations
    ///
    /// A later submission simply overwrites the results of an earlier one.
    pub fn submit(&self) {
        let input = self.form.get_untracked();
        self.results.update(ResultsView::begin_search);

        let results = self.results;
        spawn_local(async move {
            let outcome = api::predict(&input).await;
            if let Err(e) = &outcome {
                web_sys::console::warn_1(&format!("Prediction failed: {}", e).into());
            }
            results.update(|view| view.apply(outcome));
        });
    }

    pub fn toggle_more(&self) {
        self.results.update(ResultsView::toggle_more);
    }
}
