use dioxus::prelude::*;

use site::{
    catalog::{COMPANY_EMAIL, COMPANY_NAME, COMPANY_PHONE, COMPANY_TAGLINE},
    nav::{PAGE_LINKS, SECTION_LINKS},
};

use crate::{common::current_year, components::navigation::SiteLink};

#[component]
pub fn Footer() -> Element {
    let year = current_year();

    rsx! {
        footer { class: "site-footer",
            div { class: "container",
                div { class: "footer-grid",
                    div {
                        h4 { "{COMPANY_NAME}" }
                        p { "{COMPANY_TAGLINE}" }
                        p { style: "margin-top: var(--space-3);",
                            a { href: "mailto:{COMPANY_EMAIL}", "{COMPANY_EMAIL}" }
                        }
                        p { "{COMPANY_PHONE}" }
                    }
                    div {
                        h4 { "Explore" }
                        ul {
                            for link in SECTION_LINKS {
                                li { key: "{link.href}",
                                    SiteLink { label: link.label.to_owned(), href: link.href }
                                }
                            }
                        }
                    }
                    div {
                        h4 { "Company" }
                        ul {
                            for link in PAGE_LINKS {
                                li { key: "{link.href}",
                                    SiteLink { label: link.label.to_owned(), href: link.href }
                                }
                            }
                        }
                    }
                }
                div { class: "footer-bottom",
                    "© {year} {COMPANY_NAME}. All rights reserved."
                }
            }
        }
    }
}
