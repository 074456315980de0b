use dioxus::prelude::*;

use crate::shared::types::PricingDto;
use crate::utils::format::{format_demand_score, format_price};

#[allow(non_snake_case)]
#[component]
pub fn PricingPanel(#[props(!optional)] pricing: Option<PricingDto>) -> Element {
    // Nothing until the first successful pricing fetch; the error banner covers failures
    let Some(p) = pricing else {
        return rsx!( Fragment {} );
    };
    let price = format_price(p.price_per_kwh);
    let demand = &p.based_on_demand;

    rsx! {
        div { class: "flex flex-col items-center gap-2 text-center",
            p { class: "text-lg text-slate-300", "Current Price" }
            div { class: "text-5xl font-bold text-indigo-400 tabular-nums", "{price}" }
            p { class: "text-lg text-slate-300", "per kWh" }
            div { class: "pt-4 space-y-1",
                p { class: "text-sm text-slate-400", "Based on Demand:" }
                p { class: "text-xl font-semibold capitalize text-slate-100", "{demand.demand_description}" }
                if let Some(score) = demand.demand_score {
                    p { class: "text-xs text-slate-500 tabular-nums", "Demand score {format_demand_score(score)}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::pricing;

    fn render(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_price_with_two_decimals() {
        fn root() -> Element {
            rsx! { PricingPanel { pricing: Some(pricing(0.35, "low")) } }
        }
        let html = render(root);
        assert!(html.contains("$0.35"), "{html}");
        assert!(html.contains("per kWh"));
        assert!(html.contains("low"));
        assert!(!html.contains("Demand score"));
    }

    #[test]
    fn shows_demand_score_when_present() {
        fn root() -> Element {
            let mut p = pricing(0.65, "Peak");
            p.based_on_demand.demand_score = Some(0.9);
            rsx! { PricingPanel { pricing: Some(p) } }
        }
        let html = render(root);
        assert!(html.contains("$0.65"), "{html}");
        assert!(html.contains("Demand score 90%"));
    }

    #[test]
    fn renders_nothing_before_first_load() {
        fn root() -> Element {
            rsx! { PricingPanel { pricing: None } }
        }
        let html = render(root);
        assert!(!html.contains("Current Price"), "{html}");
    }
}
