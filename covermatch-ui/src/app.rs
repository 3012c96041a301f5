//! App Root Component
//!
//! Page layout and state provider.

use leptos::*;

use crate::components::{BackgroundCanvas, PredictForm, ResultsPanel, ThemeToggle};
use crate::state::global::provide_page_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide page state to all components
    provide_page_state();

    view! {
        <BackgroundCanvas />

        <div class="page">
            <header class="topbar">
                <div>
                    <h1 class="title">"CoverMatch"</h1>
                    <p class="subtitle">"Health insurance policies matched to your profile"</p>
                </div>
                <ThemeToggle />
            </header>

            <main class="layout">
                <section class="panel">
                    <h2>"Your details"</h2>
                    <PredictForm />
                </section>

                <section class="panel">
                    <h2>"Recommendations"</h2>
                    <ResultsPanel />
                </section>
            </main>
        </div>
    }
}
