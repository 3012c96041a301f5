//! Results Panel Component
//!
//! Risk line, primary cards and the collapsible "more policies" section.

use leptos::*;

use crate::components::PolicyCard;
use crate::state::global::PageState;
use crate::state::recommendation::CardModel;
use crate::state::results::{ResultsStatus, SEARCHING_TEXT};

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let state = use_context::<PageState>().expect("PageState not found");
    let results = state.results;

    // Memos keep the cards from re-rendering when only the toggle changes
    let primary = create_memo(move |_| results.with(|r| (r.status.clone(), r.primary.clone())));
    let more = create_memo(move |_| results.with(|r| r.more.clone()));
    let show_more = create_memo(move |_| results.with(|r| r.show_more_visible()));
    let expanded = create_memo(move |_| results.with(|r| r.more_expanded));

    view! {
        <section class="results">
            <div id="risk" class="risk">{move || results.with(|r| r.risk_text.clone())}</div>

            <div id="cards" class="cards">
                {move || {
                    let (status, cards) = primary.get();
                    match status {
                        ResultsStatus::Idle => view! {}.into_view(),
                        ResultsStatus::Searching => view! {
                            <div class="hint">{SEARCHING_TEXT}</div>
                        }
                        .into_view(),
                        ResultsStatus::Failed(message) => view! {
                            <div class="error">{message}</div>
                        }
                        .into_view(),
                        ResultsStatus::Ready => card_list(cards),
                    }
                }}
            </div>

            <button
                id="show-more"
                type="button"
                class="show-more"
                style:display=move || if show_more.get() { "inline-block" } else { "none" }
                on:click=move |_| state.toggle_more()
            >
                {move || results.with(|r| r.toggle_label())}
            </button>

            <div
                id="more-section"
                style:display=move || if show_more.get() && expanded.get() { "block" } else { "none" }
            >
                <div id="more-cards" class="cards">{move || card_list(more.get())}</div>
            </div>
        </section>
    }
}

fn card_list(cards: Vec<CardModel>) -> View {
    cards
        .into_iter()
        .map(|card| view! { <PolicyCard card=card /> })
        .collect_view()
}
