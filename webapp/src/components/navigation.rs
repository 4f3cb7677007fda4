use dioxus::prelude::*;
use dioxus_router::prelude::*;
use tracing::{debug, warn};

use site::{
    SiteConfig,
    catalog::COMPANY_NAME,
    nav::{CONTACT_LINK, LinkAction, NavTarget, PAGE_LINKS, SECTION_LINKS, SitePage, resolve_link},
};

use crate::{
    Route,
    common::{
        scroll::{ScrollContext, use_scroll, use_scroll_tracking},
        theme::use_theme,
    },
    components::footer::Footer,
};

// follow an internal href: scroll if it points into the current page,
// otherwise change route and leave the section for the next page to pick up
pub fn follow_link(href: &str, current: &Route, scroll: ScrollContext) {
    match resolve_link(&current.to_string(), href) {
        LinkAction::ScrollLocal(section) => scroll.scroll_to(&section),
        LinkAction::Navigate { path, then_scroll } => {
            let same_page = path == current.to_string();

            match then_scroll {
                Some(section) => scroll.set_pending(section),
                None if same_page => scroll.scroll_to_top(),
                None => scroll.jump_to_top(),
            }

            if same_page {
                return;
            }

            match path.parse::<Route>() {
                Ok(route) => {
                    debug!("navigating to {path}");
                    if let Some(err) = navigator().push(route) {
                        warn!("navigation to {path} failed: {err:?}");
                    }
                }
                Err(err) => warn!("no route for {path}: {err}"),
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct SiteLinkProps {
    label: String,
    href: &'static str,
    #[props(default)]
    class: String,
    #[props(default)]
    highlight: bool,
    onfollow: Option<EventHandler<()>>,
}

// an <a> that goes through follow_link instead of a full page load
#[component]
pub fn SiteLink(props: SiteLinkProps) -> Element {
    let current: Route = use_route();
    let scroll = use_scroll();
    let href = props.href;

    let class = if props.highlight && is_current(href, &current, &scroll) {
        format!("{} active", props.class)
    } else {
        props.class.clone()
    };

    rsx! {
        a {
            class: "{class}",
            href: "{href}",
            onclick: move |evt| {
                evt.prevent_default();
                follow_link(href, &current, scroll);
                if let Some(onfollow) = props.onfollow {
                    onfollow.call(());
                }
            },
            "{props.label}"
        }
    }
}

// page links light up on their page, section links only while their section is active
fn is_current(href: &str, current: &Route, scroll: &ScrollContext) -> bool {
    let current_path = current.to_string();
    let target = NavTarget::parse(href, &current_path);

    if target.path != current_path {
        return false;
    }

    match &target.fragment {
        Some(section) => scroll.active.read().as_deref() == Some(section.as_str()),
        None => true,
    }
}

#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_theme();

    let (icon, label) = if theme.is_dark() {
        ("☀", "Switch to light mode")
    } else {
        ("☾", "Switch to dark mode")
    };

    rsx! {
        button {
            class: "btn-icon",
            title: "{label}",
            aria_label: "{label}",
            onclick: move |_| theme.toggle(),
            "{icon}"
        }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut menu_open = use_signal(|| false);
    let close_menu = move |_: ()| menu_open.set(false);

    rsx! {
        header { class: "site-header",
            div { class: "container nav-container",
                SiteLink {
                    label: COMPANY_NAME.to_owned(),
                    href: "/#home",
                    class: "brand".to_owned(),
                    onfollow: close_menu,
                }

                nav { class: if menu_open() { "nav-links open" } else { "nav-links" },
                    for link in SECTION_LINKS {
                        SiteLink {
                            key: "{link.href}",
                            label: link.label.to_owned(),
                            href: link.href,
                            class: "nav-link".to_owned(),
                            highlight: true,
                            onfollow: close_menu,
                        }
                    }
                    for link in PAGE_LINKS {
                        SiteLink {
                            key: "{link.href}",
                            label: link.label.to_owned(),
                            href: link.href,
                            class: "nav-link".to_owned(),
                            highlight: true,
                            onfollow: close_menu,
                        }
                    }
                    SiteLink {
                        label: CONTACT_LINK.label.to_owned(),
                        href: CONTACT_LINK.href,
                        class: "btn btn-accent".to_owned(),
                        onfollow: close_menu,
                    }
                }

                div { style: "display: flex; gap: var(--space-2);",
                    ThemeToggle {}
                    button {
                        class: "btn-icon nav-toggle",
                        aria_label: "Toggle menu",
                        onclick: move |_| menu_open.toggle(),
                        "☰"
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    let config = use_context::<SiteConfig>();
    use_scroll_tracking(config.scroll_throttle_ms);

    let current: Route = use_route();
    let title = format!("{} | {COMPANY_NAME}", SitePage::from_path(&current.to_string()).title());

    rsx! {
        document::Title { "{title}" }
        NavBarInner {}
        main { class: "page-content", Outlet::<Route> {} }
        Footer {}
    }
}
