use dioxus::prelude::*;

use site::{
    catalog::{COMPANY_NAME, COMPANY_TAGLINE, STATS},
    nav::{CONTACT_LINK, SECTION_HOME},
};

use crate::{
    common::{scroll::NamedSection, theme::use_theme},
    components::navigation::SiteLink,
};

#[component]
pub fn Hero() -> Element {
    let theme = use_theme();
    let variant = if theme.is_dark() { "hero hero-dark" } else { "hero hero-light" };

    rsx! {
        NamedSection { name: SECTION_HOME, class: variant.to_owned(),
            div { class: "container",
                h1 { class: "hero-title", "{COMPANY_NAME}" }
                p { class: "hero-subtitle", "{COMPANY_TAGLINE}" }
                div { class: "hero-actions",
                    SiteLink {
                        label: CONTACT_LINK.label.to_owned(),
                        href: CONTACT_LINK.href,
                        class: "btn btn-accent btn-lg".to_owned(),
                    }
                    SiteLink {
                        label: "View Pricing".to_owned(),
                        href: "/pricing",
                        class: "btn btn-outline btn-lg".to_owned(),
                    }
                }
                div { class: "stats-grid",
                    for stat in STATS {
                        div { key: "{stat.label}",
                            div { class: "stat-value", "{stat.value}" }
                            div { class: "stat-label", "{stat.label}" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PageHeroProps {
    title: String,
    subtitle: String,
}

// the smaller banner at the top of the secondary pages
#[component]
pub fn PageHero(props: PageHeroProps) -> Element {
    let theme = use_theme();
    let variant = if theme.is_dark() { "hero hero-dark" } else { "hero hero-light" };

    rsx! {
        div { class: "{variant}",
            div { class: "container",
                h1 { class: "hero-title", "{props.title}" }
                p { class: "hero-subtitle", "{props.subtitle}" }
            }
        }
    }
}
