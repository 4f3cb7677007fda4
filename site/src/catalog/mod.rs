// read-only page content plus the little bits of selection state the
// accordions and tab strips need
//
// everything here is constant data rendered verbatim by the webapp

mod content;
mod selection;

pub use content::*;
pub use selection::{Accordion, AccordionState, TabGroup};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Service {
    pub name: &'static str,
    pub summary: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub summary: &'static str,
    pub image: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingTier {
    pub name: &'static str,
    pub price: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
    pub bullets: &'static [&'static str],
    pub highlighted: bool,
}

// one tab on the pricing page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PricingPlan {
    pub label: &'static str,
    pub tiers: &'static [PricingTier],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLine {
    pub item: &'static str,
    pub rate: &'static str,
    pub notes: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateCategory {
    pub name: &'static str,
    pub lines: &'static [RateLine],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CompanyValue {
    pub title: &'static str,
    pub description: &'static str,
}

// names offered in the quote form's service picker
pub fn service_names() -> impl Iterator<Item = &'static str> {
    SERVICES.iter().map(|s| s.name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pricing_plan_has_tiers() {
        assert!(!PRICING_PLANS.is_empty());
        for plan in PRICING_PLANS {
            assert!(!plan.tiers.is_empty(), "{}", plan.label);
            assert!(plan.tiers.iter().filter(|t| t.highlighted).count() <= 1);
        }
    }

    #[test]
    fn rate_card_categories_are_populated() {
        for category in RATE_CARD {
            assert!(!category.lines.is_empty(), "{}", category.name);
        }
    }

    #[test]
    fn service_names_are_unique() {
        let mut names: Vec<_> = service_names().collect();
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
