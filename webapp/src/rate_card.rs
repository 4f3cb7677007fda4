use dioxus::prelude::*;

use site::{
    SiteConfig,
    catalog::{Accordion, RATE_CARD},
};

use crate::{
    common::scroll::use_deferred_scroll,
    components::{accordion::AccordionItem, hero::PageHero},
};

#[component]
pub fn RateCard() -> Element {
    let config = use_context::<SiteConfig>();
    use_deferred_scroll(config.deferred_scroll_ms);

    // the first category starts expanded so the page is not a wall of headers
    let group = use_signal(|| {
        let mut group = Accordion::with_len(RATE_CARD.len());
        group.select(0);
        group
    });

    rsx! {
        PageHero {
            title: "Rate Card".to_owned(),
            subtitle: "Published rates for custom work, add-ons and travel.".to_owned(),
        }

        section {
            div { class: "container", style: "max-width: 900px;",
                for (index , category) in RATE_CARD.iter().enumerate() {
                    AccordionItem {
                        key: "{category.name}",
                        group,
                        index,
                        title: category.name.to_owned(),
                        div { class: "table-container",
                            table {
                                thead {
                                    tr {
                                        th { "Item" }
                                        th { "Rate" }
                                        th { "Notes" }
                                    }
                                }
                                tbody {
                                    for line in category.lines {
                                        tr { key: "{line.item}",
                                            td { "{line.item}" }
                                            td { "{line.rate}" }
                                            td { "{line.notes}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
