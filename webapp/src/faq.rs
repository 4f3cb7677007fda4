use dioxus::prelude::*;

use site::{
    SiteConfig,
    catalog::{Accordion, FAQ},
    nav::CONTACT_LINK,
};

use crate::{
    common::scroll::use_deferred_scroll,
    components::{accordion::AccordionItem, hero::PageHero, navigation::SiteLink},
};

#[component]
pub fn Faq() -> Element {
    let config = use_context::<SiteConfig>();
    use_deferred_scroll(config.deferred_scroll_ms);

    let group = use_signal(|| Accordion::with_len(FAQ.len()));

    rsx! {
        PageHero {
            title: "Frequently Asked Questions".to_owned(),
            subtitle: "Licensing, weather, airspace and everything else people ask us.".to_owned(),
        }

        section {
            div { class: "container", style: "max-width: 800px;",
                for (index , entry) in FAQ.iter().enumerate() {
                    AccordionItem {
                        key: "{index}",
                        group,
                        index,
                        title: entry.question.to_owned(),
                        p { "{entry.answer}" }
                    }
                }

                div { style: "text-align: center; margin-top: var(--space-10);",
                    p { style: "margin-bottom: var(--space-4);", "Still have a question?" }
                    SiteLink {
                        label: "Ask us directly".to_owned(),
                        href: CONTACT_LINK.href,
                        class: "btn btn-primary".to_owned(),
                    }
                }
            }
        }
    }
}
