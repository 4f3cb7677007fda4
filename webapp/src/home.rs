use dioxus::prelude::*;

use site::SiteConfig;

use crate::{
    common::scroll::use_deferred_scroll,
    components::{
        hero::Hero,
        quote_form::QuoteIntake,
        showcase::{FeatureGrid, PortfolioGrid, ServicesGrid, Testimonials},
    },
};

#[component]
pub fn Home() -> Element {
    let config = use_context::<SiteConfig>();
    use_deferred_scroll(config.deferred_scroll_ms);

    rsx! {
        Hero {}
        ServicesGrid {}
        FeatureGrid {}
        PortfolioGrid {}
        Testimonials {}
        QuoteIntake {}
    }
}
