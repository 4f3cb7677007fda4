use dioxus::prelude::*;

use site::{
    SiteConfig,
    catalog::{PRICING_PLANS, TabGroup},
    nav::CONTACT_LINK,
};

use crate::{
    common::scroll::use_deferred_scroll,
    components::{hero::PageHero, navigation::SiteLink},
};

#[component]
pub fn Pricing() -> Element {
    let config = use_context::<SiteConfig>();
    use_deferred_scroll(config.deferred_scroll_ms);

    let mut tabs = use_signal(|| TabGroup::new(PRICING_PLANS.len()));
    let selected = tabs.read().selected();

    let Some(plan) = PRICING_PLANS.get(selected) else {
        return rsx! {};
    };

    rsx! {
        PageHero {
            title: "Pricing".to_owned(),
            subtitle: "Simple packages for the most common jobs. Anything else, we will quote.".to_owned(),
        }

        section {
            div { class: "container",
                div { class: "tabs", role: "tablist",
                    for (idx , candidate) in PRICING_PLANS.iter().enumerate() {
                        button {
                            key: "{candidate.label}",
                            class: if idx == selected { "tab selected" } else { "tab" },
                            role: "tab",
                            aria_selected: idx == selected,
                            onclick: move |_| {
                                tabs.write().select(idx);
                            },
                            "{candidate.label}"
                        }
                    }
                }

                div { class: "grid",
                    for tier in plan.tiers {
                        div {
                            key: "{tier.name}",
                            class: if tier.highlighted { "card pricing-card highlighted" } else { "card pricing-card" },
                            if tier.highlighted {
                                span { class: "badge", "Most popular" }
                            }
                            h3 { class: "card-title", "{tier.name}" }
                            div {
                                span { class: "pricing-price", "{tier.price}" }
                                span { class: "pricing-unit", "{tier.unit}" }
                            }
                            p { class: "card-text", "{tier.description}" }
                            ul {
                                for bullet in tier.bullets {
                                    li { key: "{bullet}", "{bullet}" }
                                }
                            }
                            SiteLink {
                                label: CONTACT_LINK.label.to_owned(),
                                href: CONTACT_LINK.href,
                                class: "btn btn-primary".to_owned(),
                            }
                        }
                    }
                }
            }
        }
    }
}
