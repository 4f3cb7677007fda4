use dioxus::prelude::*;

use site::{
    SiteConfig,
    catalog::{COMPANY_NAME, COMPANY_VALUES, TEAM},
    nav::CONTACT_LINK,
};

use crate::{
    common::scroll::use_deferred_scroll,
    components::{hero::PageHero, navigation::SiteLink, showcase::SectionHeader},
};

#[component]
pub fn About() -> Element {
    let config = use_context::<SiteConfig>();
    use_deferred_scroll(config.deferred_scroll_ms);

    rsx! {
        PageHero {
            title: format!("About {COMPANY_NAME}"),
            subtitle: "A small team of pilots, surveyors and filmmakers who love a good vantage point.".to_owned(),
        }

        section {
            div { class: "container",
                SectionHeader {
                    title: "Our Story".to_owned(),
                    subtitle: "We started with one aircraft and a borrowed van. Today we fly for builders, farmers, agents and event organizers across the region, with the same checklist on every flight.".to_owned(),
                }
                div { class: "grid",
                    for value in COMPANY_VALUES {
                        div { class: "card", key: "{value.title}",
                            h3 { class: "card-title", "{value.title}" }
                            p { class: "card-text", "{value.description}" }
                        }
                    }
                }
            }
        }

        section { class: "section-alt",
            div { class: "container",
                SectionHeader {
                    title: "Meet the Team".to_owned(),
                    subtitle: "The people behind the controls.".to_owned(),
                }
                div { class: "grid",
                    for member in TEAM {
                        div { class: "card", key: "{member.name}",
                            h3 { class: "card-title", "{member.name}" }
                            p { class: "team-role", "{member.role}" }
                            p { class: "card-text", "{member.bio}" }
                        }
                    }
                }
                div { style: "text-align: center; margin-top: var(--space-10);",
                    SiteLink {
                        label: CONTACT_LINK.label.to_owned(),
                        href: CONTACT_LINK.href,
                        class: "btn btn-primary btn-lg".to_owned(),
                    }
                }
            }
        }
    }
}
