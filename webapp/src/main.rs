#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

use site::SiteConfig;

mod common;

mod components;
use components::navigation::NavBar;

mod about;
use about::About;

mod faq;
use faq::Faq;

mod home;
use home::Home;

mod not_found;
use not_found::NotFound;

mod pricing;
use pricing::Pricing;

mod rate_card;
use rate_card::RateCard;

const SITE_CONFIG: &str = include_str!("../site.toml");

fn main() {
    dioxus_logger::init(Level::DEBUG).expect("failed to init logger");
    launch(App);
}

// every page shares the nav bar/footer layout; anything unknown falls
// through to the not-found page
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/faq")]
        Faq {},
        #[route("/rate-card")]
        RateCard {},
        #[route("/pricing")]
        Pricing {},
        #[route("/about")]
        About {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    let config = use_context_provider(|| SiteConfig::from_toml_or_default(SITE_CONFIG));

    common::theme::use_theme_provider(config.theme_key.clone());
    common::scroll::use_scroll_provider(&config);

    rsx! {
        style { "{common::style::MODERN_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
