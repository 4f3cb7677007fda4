use dioxus::prelude::*;

use site::{
    catalog::{FEATURES, PORTFOLIO, SERVICES, TESTIMONIALS},
    nav::{SECTION_FEATURES, SECTION_PORTFOLIO, SECTION_SERVICES, SECTION_TESTIMONIALS},
};

use crate::common::scroll::NamedSection;

#[derive(Clone, PartialEq, Props)]
pub struct SectionHeaderProps {
    title: String,
    subtitle: String,
}

#[component]
pub fn SectionHeader(props: SectionHeaderProps) -> Element {
    rsx! {
        div { class: "section-header",
            h2 { class: "section-title", "{props.title}" }
            p { "{props.subtitle}" }
        }
    }
}

// first letter of the icon name stands in for artwork
fn icon_glyph(icon: &str) -> String {
    icon.chars().next().map(|c| c.to_ascii_uppercase().to_string()).unwrap_or_default()
}

#[component]
pub fn ServicesGrid() -> Element {
    rsx! {
        NamedSection { name: SECTION_SERVICES,
            div { class: "container",
                SectionHeader {
                    title: "Our Services".to_owned(),
                    subtitle: "From a single listing shoot to recurring site surveys, we fly it.".to_owned(),
                }
                div { class: "grid",
                    for service in SERVICES {
                        div { class: "card", key: "{service.name}",
                            div { class: "card-icon", {icon_glyph(service.icon)} }
                            h3 { class: "card-title", "{service.name}" }
                            p { class: "card-text", "{service.summary}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn FeatureGrid() -> Element {
    rsx! {
        NamedSection { name: SECTION_FEATURES, class: "section-alt".to_owned(),
            div { class: "container",
                SectionHeader {
                    title: "Why Choose Us".to_owned(),
                    subtitle: "Safety, speed and the right aircraft for the job.".to_owned(),
                }
                div { class: "grid",
                    for feature in FEATURES {
                        div { class: "card", key: "{feature.title}",
                            div { class: "card-icon", {icon_glyph(feature.icon)} }
                            h3 { class: "card-title", "{feature.title}" }
                            p { class: "card-text", "{feature.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn PortfolioGrid() -> Element {
    rsx! {
        NamedSection { name: SECTION_PORTFOLIO,
            div { class: "container",
                SectionHeader {
                    title: "Recent Work".to_owned(),
                    subtitle: "A few of the projects we have flown this year.".to_owned(),
                }
                div { class: "grid",
                    for item in PORTFOLIO {
                        div { class: "card portfolio-card", key: "{item.title}",
                            img { src: "{item.image}", alt: "{item.title}", loading: "lazy" }
                            div { class: "portfolio-info",
                                span { class: "badge", "{item.category}" }
                                h3 { class: "card-title", "{item.title}" }
                                p { class: "card-text", "{item.summary}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn Testimonials() -> Element {
    rsx! {
        NamedSection { name: SECTION_TESTIMONIALS, class: "section-alt".to_owned(),
            div { class: "container",
                SectionHeader {
                    title: "What Clients Say".to_owned(),
                    subtitle: "Our best advertising is the people we have flown for.".to_owned(),
                }
                div { class: "grid",
                    for testimonial in TESTIMONIALS {
                        div { class: "card", key: "{testimonial.author}",
                            p { class: "testimonial-quote", "“{testimonial.quote}”" }
                            div { class: "testimonial-author", "{testimonial.author}" }
                            div { class: "testimonial-role", "{testimonial.role}" }
                        }
                    }
                }
            }
        }
    }
}
