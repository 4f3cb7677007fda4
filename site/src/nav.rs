use std::fmt;

// the pages the router knows about
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SitePage {
    Home,
    Faq,
    RateCard,
    Pricing,
    About,
    NotFound,
}

impl SitePage {
    pub fn from_path(path: &str) -> SitePage {
        // tolerate a trailing slash on everything but the root
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        match path {
            "/" => SitePage::Home,
            "/faq" => SitePage::Faq,
            "/rate-card" => SitePage::RateCard,
            "/pricing" => SitePage::Pricing,
            "/about" => SitePage::About,
            _ => SitePage::NotFound,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            SitePage::Home => "/",
            SitePage::Faq => "/faq",
            SitePage::RateCard => "/rate-card",
            SitePage::Pricing => "/pricing",
            SitePage::About => "/about",
            SitePage::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SitePage::Home => "Home",
            SitePage::Faq => "FAQ",
            SitePage::RateCard => "Rate Card",
            SitePage::Pricing => "Pricing",
            SitePage::About => "About",
            SitePage::NotFound => "Page Not Found",
        }
    }
}

// a link target split into route path and optional section fragment
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavTarget {
    pub path: String,
    pub fragment: Option<String>,
}

impl NavTarget {
    // "#contact" is relative to the current page, so the caller supplies it
    pub fn parse(href: &str, current_path: &str) -> NavTarget {
        let (path, fragment) = match href.split_once('#') {
            Some((path, fragment)) => (path, Some(fragment)),
            None => (href, None),
        };

        let path = if path.is_empty() { current_path } else { path };

        NavTarget {
            path: normalize(path),
            fragment: fragment
                .filter(|f| !f.is_empty())
                .map(str::to_owned),
        }
    }
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fragment {
            Some(fragment) => write!(f, "{}#{}", self.path, fragment),
            None => f.write_str(&self.path),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkAction {
    // already on the owning page, just scroll
    ScrollLocal(String),
    // change route, then scroll once the new page has been laid out
    Navigate {
        path: String,
        then_scroll: Option<String>,
    },
}

// decide whether following href is a route change or a scroll within the page
pub fn resolve_link(current_path: &str, href: &str) -> LinkAction {
    let target = NavTarget::parse(href, current_path);

    match target.fragment {
        Some(section) if target.path == normalize(current_path) => LinkAction::ScrollLocal(section),
        then_scroll => LinkAction::Navigate {
            path: target.path,
            then_scroll,
        },
    }
}

// "#contact" -> "contact", used for deep links on first load
pub fn fragment_from_hash(hash: &str) -> Option<String> {
    let fragment = hash.strip_prefix('#').unwrap_or(hash).trim();

    if fragment.is_empty() {
        None
    } else {
        Some(fragment.to_owned())
    }
}

fn normalize(path: &str) -> String {
    match path.trim_end_matches('/') {
        "" => String::from("/"),
        trimmed if trimmed.starts_with('/') => trimmed.to_owned(),
        trimmed => format!("/{trimmed}"),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

// section anchors on the home page
pub const SECTION_HOME: &str = "home";
pub const SECTION_SERVICES: &str = "services";
pub const SECTION_FEATURES: &str = "why-us";
pub const SECTION_PORTFOLIO: &str = "portfolio";
pub const SECTION_TESTIMONIALS: &str = "testimonials";
pub const SECTION_CONTACT: &str = "contact";

pub const SECTION_LINKS: &[NavLink] = &[
    NavLink { label: "Home", href: "/#home" },
    NavLink { label: "Services", href: "/#services" },
    NavLink { label: "Portfolio", href: "/#portfolio" },
    NavLink { label: "Testimonials", href: "/#testimonials" },
];

pub const PAGE_LINKS: &[NavLink] = &[
    NavLink { label: "Pricing", href: "/pricing" },
    NavLink { label: "Rate Card", href: "/rate-card" },
    NavLink { label: "FAQ", href: "/faq" },
    NavLink { label: "About", href: "/about" },
];

pub const CONTACT_LINK: NavLink = NavLink {
    label: "Get a Quote",
    href: "/#contact",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_on_current_page_scrolls_locally() {
        assert_eq!(
            resolve_link("/", "/#contact"),
            LinkAction::ScrollLocal("contact".into())
        );
        assert_eq!(
            resolve_link("/pricing", "#tiers"),
            LinkAction::ScrollLocal("tiers".into())
        );
    }

    #[test]
    fn fragment_on_other_page_navigates_then_scrolls() {
        assert_eq!(
            resolve_link("/faq", "/#contact"),
            LinkAction::Navigate {
                path: "/".into(),
                then_scroll: Some("contact".into()),
            }
        );
    }

    #[test]
    fn plain_links_navigate() {
        assert_eq!(
            resolve_link("/", "/faq"),
            LinkAction::Navigate {
                path: "/faq".into(),
                then_scroll: None,
            }
        );
        // same page without a fragment still navigates (back to the top)
        assert_eq!(
            resolve_link("/about/", "/about"),
            LinkAction::Navigate {
                path: "/about".into(),
                then_scroll: None,
            }
        );
    }

    #[test]
    fn empty_fragment_is_ignored() {
        assert_eq!(
            NavTarget::parse("/#", "/faq"),
            NavTarget {
                path: "/".into(),
                fragment: None,
            }
        );
        assert_eq!(NavTarget::parse("/pricing#tiers", "/").to_string(), "/pricing#tiers");
    }

    #[test]
    fn pages_round_trip_through_paths() {
        for page in [
            SitePage::Home,
            SitePage::Faq,
            SitePage::RateCard,
            SitePage::Pricing,
            SitePage::About,
        ] {
            assert_eq!(SitePage::from_path(page.path()), page);
        }
        assert_eq!(SitePage::from_path("/faq/"), SitePage::Faq);
        assert_eq!(SitePage::from_path("/drones"), SitePage::NotFound);
    }

    #[test]
    fn hash_fragments() {
        assert_eq!(fragment_from_hash("#contact").as_deref(), Some("contact"));
        assert_eq!(fragment_from_hash("#"), None);
        assert_eq!(fragment_from_hash(""), None);
    }
}
