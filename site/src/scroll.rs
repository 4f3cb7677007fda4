use thiserror::Error;
use tracing::{debug, instrument};

use crate::config::SiteConfig;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScrollError {
    #[error("no section registered as {0:?}")]
    SectionNotFound(String),
    #[error("section {0:?} is not laid out")]
    NotLaidOut(String),
}

// vertical extent of a section, relative to the top of the document
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn new(top: f64, height: f64) -> Self {
        SectionBounds { top, height }
    }

    // half-open, so adjacent sections never both claim their shared edge
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// A rendered element owned by some view.
///
/// The coordinator never owns or creates these; it only asks for their current
/// position, which may change between calls (images loading, resizes).
pub trait SectionHandle {
    /// `None` once the element is no longer in the document.
    fn bounds(&self) -> Option<SectionBounds>;
}

/// The viewport being scrolled.
pub trait Scroller {
    fn scroll_y(&self) -> f64;

    // must retarget any in-flight animation rather than queue behind it
    fn smooth_scroll_to(&mut self, y: f64);
}

#[derive(Debug)]
struct SectionEntry<H> {
    name: String,
    handle: H,
}

// ordered name -> handle table
//
// lookups are linear; a page only has a handful of sections and we need
// registration order for the active-section scan anyway
#[derive(Debug)]
pub struct SectionRegistry<H> {
    entries: Vec<SectionEntry<H>>,
}

impl<H> Default for SectionRegistry<H> {
    fn default() -> Self {
        SectionRegistry {
            entries: Vec::new(),
        }
    }
}

impl<H> SectionRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    // last registration wins, but the section keeps its original slot
    pub fn register(&mut self, name: impl Into<String>, handle: H) -> Option<H> {
        let name = name.into();

        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(entry) => Some(std::mem::replace(&mut entry.handle, handle)),
            None => {
                self.entries.push(SectionEntry { name, handle });
                None
            }
        }
    }

    pub fn unregister(&mut self, name: &str) -> Option<H> {
        let idx = self.entries.iter().position(|e| e.name == name)?;
        Some(self.entries.remove(idx).handle)
    }

    pub fn get(&self, name: &str) -> Option<&H> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| &e.handle)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    #[cfg(test)]
    pub(crate) fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &H)> {
        self.entries.iter().map(|e| (e.name.as_str(), &e.handle))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// maps section names to scroll actions and tracks which section is current
#[derive(Debug)]
pub struct ScrollCoordinator<H> {
    registry: SectionRegistry<H>,
    active: Option<String>,
    nav_offset: f64,
    look_ahead: f64,
}

impl<H: SectionHandle> ScrollCoordinator<H> {
    pub fn new(nav_offset: f64, look_ahead: f64) -> Self {
        ScrollCoordinator {
            registry: SectionRegistry::new(),
            active: None,
            nav_offset,
            look_ahead,
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.nav_offset, config.look_ahead)
    }

    pub fn register_section(&mut self, name: impl Into<String>, handle: H) {
        let name = name.into();
        debug!("registering section {name}");
        self.registry.register(name, handle);
    }

    // required on view teardown, otherwise we would keep measuring a dead element
    pub fn unregister_section(&mut self, name: &str) {
        debug!("unregistering section {name}");
        self.registry.unregister(name);

        if self.active.as_deref() == Some(name) {
            self.active = None;
        }
    }

    pub fn registry(&self) -> &SectionRegistry<H> {
        &self.registry
    }

    pub fn active_section(&self) -> Option<&str> {
        self.active.as_deref()
    }

    // document offset to scroll to so that the section top sits just below the fixed nav bar
    pub fn scroll_target(&self, name: &str) -> Result<f64, ScrollError> {
        let handle = self
            .registry
            .get(name)
            .ok_or_else(|| ScrollError::SectionNotFound(name.to_owned()))?;

        let bounds = handle
            .bounds()
            .ok_or_else(|| ScrollError::NotLaidOut(name.to_owned()))?;

        Ok((bounds.top - self.nav_offset).max(0.0))
    }

    // fire-and-forget; a missing section is not an error anybody can act on,
    // so it stops here
    #[instrument(level = "debug", skip(self, scroller))]
    pub fn scroll_to_section<S: Scroller>(&self, name: &str, scroller: &mut S) -> bool {
        match self.scroll_target(name) {
            Ok(y) => {
                scroller.smooth_scroll_to(y);
                true
            }
            Err(err) => {
                debug!("ignoring scroll request: {err}");
                false
            }
        }
    }

    // first section, in registration order, whose extent contains the probe point
    //
    // when nothing matches (above the first section, past the end of the page)
    // the last match is kept so the nav highlight does not flicker off
    pub fn compute_active_section(&mut self, scroll_y: f64) -> Option<&str> {
        let probe = scroll_y + self.look_ahead;

        let hit = self
            .registry
            .iter()
            .find(|(_, handle)| handle.bounds().is_some_and(|b| b.contains(probe)))
            .map(|(name, _)| name.to_owned());

        if let Some(name) = hit {
            if self.active.as_deref() != Some(name.as_str()) {
                debug!("active section is now {name}");
                self.active = Some(name);
            }
        }

        self.active.as_deref()
    }
}

// at most one pending recompute at a time
//
// the scroll listener calls request() on every event and only schedules work
// when it returns true; the scheduled callback calls complete() before it
// recomputes, so events arriving during the recompute schedule the next one
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollThrottle {
    scheduled: bool,
}

impl ScrollThrottle {
    pub fn request(&mut self) -> bool {
        if self.scheduled {
            false
        } else {
            self.scheduled = true;
            true
        }
    }

    pub fn complete(&mut self) {
        self.scheduled = false;
    }

    #[cfg(test)]
    pub(crate) fn is_scheduled(&self) -> bool {
        self.scheduled
    }
}

// a section to scroll to once the freshly mounted page has been laid out
//
// filled either from the location hash on first load or by a cross-page link,
// and taken exactly once by the page that owns the section
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingScroll {
    section: Option<String>,
}

impl PendingScroll {
    pub fn set(&mut self, section: impl Into<String>) {
        self.section = Some(section.into());
    }

    pub fn take(&mut self) -> Option<String> {
        self.section.take()
    }

    #[cfg(test)]
    pub(crate) fn peek(&self) -> Option<&str> {
        self.section.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;

    #[derive(Clone, Debug)]
    struct FixedSection {
        bounds: Rc<Cell<Option<SectionBounds>>>,
    }

    impl FixedSection {
        fn at(top: f64, bottom: f64) -> Self {
            FixedSection {
                bounds: Rc::new(Cell::new(Some(SectionBounds::new(top, bottom - top)))),
            }
        }
    }

    impl SectionHandle for FixedSection {
        fn bounds(&self) -> Option<SectionBounds> {
            self.bounds.get()
        }
    }

    #[derive(Debug, Default)]
    struct RecordingScroller {
        y: f64,
        targets: Vec<f64>,
    }

    impl Scroller for RecordingScroller {
        fn scroll_y(&self) -> f64 {
            self.y
        }

        fn smooth_scroll_to(&mut self, y: f64) {
            self.targets.push(y);
        }
    }

    // a: [0, 500), b: [500, 1200), c: [1200, 2000)
    fn three_sections(look_ahead: f64) -> ScrollCoordinator<FixedSection> {
        let mut coordinator = ScrollCoordinator::new(70.0, look_ahead);
        coordinator.register_section("a", FixedSection::at(0.0, 500.0));
        coordinator.register_section("b", FixedSection::at(500.0, 1200.0));
        coordinator.register_section("c", FixedSection::at(1200.0, 2000.0));
        coordinator
    }

    #[test]
    fn active_section_contains_scroll_position() {
        let mut coordinator = three_sections(0.0);
        assert_eq!(coordinator.compute_active_section(550.0), Some("b"));
        assert_eq!(coordinator.compute_active_section(0.0), Some("a"));
        assert_eq!(coordinator.compute_active_section(1999.0), Some("c"));
    }

    #[test]
    fn active_section_is_retained_past_the_end() {
        let mut coordinator = three_sections(0.0);
        assert_eq!(coordinator.compute_active_section(2500.0), None);

        coordinator.compute_active_section(550.0);
        assert_eq!(coordinator.compute_active_section(2500.0), Some("b"));
        assert_eq!(coordinator.active_section(), Some("b"));
    }

    #[test]
    fn default_config_tracks_and_targets_sections() {
        let mut coordinator = ScrollCoordinator::from_config(&SiteConfig::default());
        coordinator.register_section("a", FixedSection::at(0.0, 500.0));
        coordinator.register_section("b", FixedSection::at(500.0, 1200.0));
        coordinator.register_section("c", FixedSection::at(1200.0, 2000.0));

        assert_eq!(coordinator.active_section(), None);
        assert_eq!(coordinator.compute_active_section(550.0), Some("b"));
        assert_eq!(coordinator.compute_active_section(2500.0), Some("b"));
        assert_eq!(coordinator.scroll_target("c"), Ok(1130.0));
    }

    #[test]
    fn look_ahead_activates_sections_early() {
        let mut coordinator = three_sections(100.0);
        // 420 + 100 already lands in b
        assert_eq!(coordinator.compute_active_section(420.0), Some("b"));
        assert_eq!(coordinator.compute_active_section(390.0), Some("a"));
    }

    #[test]
    fn sections_are_scanned_in_registration_order() {
        let mut coordinator = ScrollCoordinator::new(70.0, 0.0);
        coordinator.register_section("outer", FixedSection::at(0.0, 1000.0));
        coordinator.register_section("inner", FixedSection::at(200.0, 400.0));
        assert_eq!(coordinator.compute_active_section(300.0), Some("outer"));
    }

    #[test]
    fn scroll_target_subtracts_nav_offset() {
        let coordinator = three_sections(100.0);
        let mut scroller = RecordingScroller::default();

        assert!(coordinator.scroll_to_section("b", &mut scroller));
        assert!(coordinator.scroll_to_section("a", &mut scroller));
        // the section at the very top clamps to zero
        assert_eq!(scroller.targets, vec![430.0, 0.0]);
    }

    #[test]
    fn missing_section_is_a_silent_noop() {
        let coordinator = three_sections(100.0);
        let mut scroller = RecordingScroller::default();

        assert!(!coordinator.scroll_to_section("contact", &mut scroller));
        assert!(scroller.targets.is_empty());
        assert_eq!(
            coordinator.scroll_target("contact"),
            Err(ScrollError::SectionNotFound("contact".into()))
        );
    }

    #[test]
    fn positions_are_measured_at_request_time() {
        let coordinator = three_sections(100.0);
        let handle = coordinator.registry().get("c").cloned().unwrap();
        let mut scroller = RecordingScroller::default();

        // an image above finished loading and pushed everything down
        handle.bounds.set(Some(SectionBounds::new(1500.0, 800.0)));
        coordinator.scroll_to_section("c", &mut scroller);
        assert_eq!(scroller.targets, vec![1430.0]);

        handle.bounds.set(None);
        assert_eq!(
            coordinator.scroll_target("c"),
            Err(ScrollError::NotLaidOut("c".into()))
        );
    }

    #[test]
    fn reregistering_replaces_handle_and_keeps_slot() {
        let mut coordinator = ScrollCoordinator::new(70.0, 0.0);
        coordinator.register_section("a", FixedSection::at(0.0, 100.0));
        coordinator.register_section("b", FixedSection::at(100.0, 200.0));
        coordinator.register_section("a", FixedSection::at(1000.0, 1100.0));

        assert_eq!(coordinator.registry().len(), 2);
        assert_eq!(coordinator.registry().names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(coordinator.scroll_target("a"), Ok(930.0));
    }

    #[test]
    fn unregistering_active_section_clears_it() {
        let mut coordinator = three_sections(0.0);
        coordinator.compute_active_section(600.0);
        coordinator.unregister_section("b");

        assert_eq!(coordinator.active_section(), None);
        assert!(!coordinator.registry().contains("b"));
        assert_eq!(coordinator.compute_active_section(600.0), None);
    }

    #[test]
    fn throttle_allows_one_pending_recompute() {
        let mut throttle = ScrollThrottle::default();
        assert!(throttle.request());
        assert!(!throttle.request());
        assert!(!throttle.request());

        throttle.complete();
        assert!(!throttle.is_scheduled());
        assert!(throttle.request());
    }

    #[test]
    fn pending_scroll_is_taken_once() {
        let mut pending = PendingScroll::default();
        pending.set("contact");
        assert_eq!(pending.peek(), Some("contact"));
        assert_eq!(pending.take().as_deref(), Some("contact"));
        assert_eq!(pending.take(), None);
    }
}
