//! Policy Card Component

use gloo_timers::callback::Timeout;
use leptos::*;

use crate::state::recommendation::CardModel;

/// Delay before the suitability bar fills in
const REVEAL_DELAY_MS: u32 = 80;

/// A single recommended policy with its suitability bar
#[component]
pub fn PolicyCard(card: CardModel) -> impl IntoView {
    let (shown, set_shown) = create_signal(false);

    let reveal = Timeout::new(REVEAL_DELAY_MS, move || set_shown.set(true));
    on_cleanup(move || drop(reveal));

    let percent = card.tier.fill_percent();
    let gradient = card.tier.gradient();

    view! {
        <div class="policy-card" class:show=move || shown.get()>
            <div class="policy-left">
                <div class="brand">
                    {card.brand}" "
                    <span class="suitability">{card.suitability.clone()}</span>
                </div>
                <div class="policy-name">{card.policy}</div>
                <div class="remarks">{card.remarks}</div>
                <div class="coverage">{card.coverage}</div>
                <a class="view-btn" href=card.url target="_blank" rel="noopener noreferrer">
                    "🔗 View "
                </a>
            </div>

            <div class="policy-right">
                <div class="price">{card.price}</div>
            </div>

            <div class="suit-bar">
                <div
                    class="suit-fill"
                    style:width=move || if shown.get() { format!("{}%", percent) } else { "0%".to_string() }
                    style:background=move || if shown.get() { gradient } else { "" }
                />
            </div>

            <div class="suit-label">
                <span class="label-text">"Suitability"</span>
                <span class="label-score">{card.suitability}</span>
            </div>
        </div>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::state::recommendation::{Recommendation, DEFAULT_POLICY_URL};
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::{Element, HtmlElement};

    fn mount_card(suitability: &str) -> HtmlElement {
        let document = web_sys::window().unwrap().document().unwrap();
        let container: HtmlElement = document.create_element("div").unwrap().unchecked_into();
        document.body().unwrap().append_child(&container).unwrap();

        let card = CardModel::from(&Recommendation {
            brand: "Acme".into(),
            policy: "Acme Care".into(),
            suitability: suitability.into(),
            price: 125000.0,
            ..Default::default()
        });
        mount_to(container.clone(), move || view! { <PolicyCard card=card /> });
        container
    }

    fn find(container: &HtmlElement, selector: &str) -> Element {
        container.query_selector(selector).unwrap().unwrap()
    }

    fn fill_width(container: &HtmlElement) -> String {
        find(container, ".suit-fill")
            .unchecked_into::<HtmlElement>()
            .style()
            .get_property_value("width")
            .unwrap()
    }

    fn is_shown(container: &HtmlElement) -> bool {
        find(container, ".policy-card")
            .get_attribute("class")
            .unwrap_or_default()
            .split_whitespace()
            .any(|class| class == "show")
    }

    #[wasm_bindgen_test]
    async fn test_high_card_fills_after_delay() {
        let container = mount_card("High suitability");
        assert_eq!(fill_width(&container), "0%");
        assert!(!is_shown(&container));

        TimeoutFuture::new(REVEAL_DELAY_MS * 3).await;

        assert_eq!(fill_width(&container), "100%");
        assert!(is_shown(&container));
        assert_eq!(find(&container, ".price").text_content().unwrap(), "₹ 1,25,000");
        assert_eq!(
            find(&container, ".view-btn").get_attribute("href").unwrap(),
            DEFAULT_POLICY_URL
        );
    }

    #[wasm_bindgen_test]
    async fn test_good_card_fills_two_thirds() {
        let container = mount_card("Good fit");
        TimeoutFuture::new(REVEAL_DELAY_MS * 3).await;
        assert_eq!(fill_width(&container), "66%");
    }
}
