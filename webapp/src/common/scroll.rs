use std::{cell::RefCell, rc::Rc};

use dioxus::prelude::*;
use gloo_timers::callback::Timeout;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::{AddEventListenerOptions, ScrollBehavior, ScrollToOptions};

use site::{
    SiteConfig,
    nav::fragment_from_hash,
    scroll::{PendingScroll, ScrollCoordinator, ScrollThrottle, Scroller, SectionBounds, SectionHandle},
};

// a mounted <section>, measured on demand
#[derive(Clone, Debug)]
pub struct ElementSection {
    element: web_sys::Element,
}

impl ElementSection {
    pub fn new(element: web_sys::Element) -> Self {
        ElementSection { element }
    }
}

impl SectionHandle for ElementSection {
    fn bounds(&self) -> Option<SectionBounds> {
        if !self.element.is_connected() {
            return None;
        }

        // the rect is viewport-relative, so shift it by the current scroll
        let rect = self.element.get_bounding_client_rect();
        Some(SectionBounds::new(rect.top() + WindowScroller.scroll_y(), rect.height()))
    }
}

// the browser's own smooth scroll retargets in-flight animations and yields to
// the user's wheel or touch input, so there is nothing to cancel here
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowScroller;

impl Scroller for WindowScroller {
    fn scroll_y(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }

    fn smooth_scroll_to(&mut self, y: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };

        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_with_scroll_to_options(&options);
    }
}

pub type SectionCoordinator = ScrollCoordinator<ElementSection>;

// shared scroll state, provided once by App
//
// the coordinator itself is only touched from event handlers (peek/write), so
// nothing re-renders on registration; the nav bar subscribes to `active` alone
#[derive(Clone, Copy, PartialEq)]
pub struct ScrollContext {
    pub coordinator: Signal<SectionCoordinator>,
    pub active: Signal<Option<String>>,
    pub pending: Signal<PendingScroll>,
}

impl ScrollContext {
    pub fn scroll_to(&self, section: &str) {
        let Ok(coordinator) = self.coordinator.try_peek() else {
            return;
        };
        coordinator.scroll_to_section(section, &mut WindowScroller);
    }

    pub fn scroll_to_top(&self) {
        WindowScroller.smooth_scroll_to(0.0);
    }

    // new pages start at the top without animating across the old layout
    pub fn jump_to_top(&self) {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    // recompute the active section and only wake readers when it changed
    pub fn refresh_active(&self) {
        let mut sections = self.coordinator;
        let mut active = self.active;

        let Ok(mut coordinator) = sections.try_write() else {
            return;
        };
        let next = coordinator
            .compute_active_section(WindowScroller.scroll_y())
            .map(str::to_owned);
        drop(coordinator);

        if active.try_peek().is_ok_and(|current| *current != next) {
            active.set(next);
        }
    }

    pub fn set_pending(&self, section: String) {
        let mut pending = self.pending;
        pending.write().set(section);
    }

    pub fn take_pending(&self) -> Option<String> {
        let mut pending = self.pending;
        pending.write().take()
    }
}

pub fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    fragment_from_hash(&hash)
}

// scroll to a section requested by a cross-page link or by the url on first
// load, once the page that owns it has been laid out
pub fn use_deferred_scroll(delay_ms: u32) {
    let scroll = use_scroll();

    use_effect(move || {
        if let Some(section) = scroll.take_pending().or_else(location_fragment) {
            debug!("deferring scroll to {section}");
            after_layout(delay_ms, move || scroll.scroll_to(&section));
        }
    });
}

pub fn use_scroll_provider(config: &SiteConfig) -> ScrollContext {
    let config = config.clone();

    use_context_provider(move || ScrollContext {
        coordinator: Signal::new(ScrollCoordinator::from_config(&config)),
        active: Signal::new(None),
        pending: Signal::new(PendingScroll::default()),
    })
}

pub fn use_scroll() -> ScrollContext {
    use_context::<ScrollContext>()
}

#[derive(Clone, PartialEq, Props)]
pub struct NamedSectionProps {
    name: &'static str,
    #[props(default)]
    class: String,
    children: Element,
}

// a page region that registers itself for in-page navigation while mounted
#[component]
pub fn NamedSection(props: NamedSectionProps) -> Element {
    let name = props.name;
    let scroll = use_scroll();

    use_drop(move || {
        let mut sections = scroll.coordinator;
        if let Ok(mut coordinator) = sections.try_write() {
            coordinator.unregister_section(name);
        }
    });

    rsx! {
        section {
            id: "{name}",
            class: "{props.class}",
            onmounted: move |evt: MountedEvent| {
                match evt.data().downcast::<web_sys::Element>() {
                    Some(element) => {
                        let mut sections = scroll.coordinator;
                        sections.write().register_section(name, ElementSection::new(element.clone()));
                    }
                    None => warn!("section {name} mounted without a dom element"),
                }
            },
            {props.children}
        }
    }
}

// window scroll listener, registered once per mount and removed on drop
//
// events only schedule a recompute when none is pending, so a burst of scroll
// events costs one recompute per throttle window
struct ScrollListener {
    callback: Closure<dyn FnMut()>,
    pending: Rc<RefCell<Option<Timeout>>>,
}

pub fn use_scroll_tracking(throttle_ms: u32) {
    let scroll = use_scroll();

    let listener = use_hook(move || {
        let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));
        let pending: Rc<RefCell<Option<Timeout>>> = Rc::new(RefCell::new(None));

        let timer_slot = pending.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if !throttle.borrow_mut().request() {
                return;
            }

            let throttle = throttle.clone();
            let timeout = Timeout::new(throttle_ms, move || {
                throttle.borrow_mut().complete();
                scroll.refresh_active();
            });
            *timer_slot.borrow_mut() = Some(timeout);
        });

        if let Some(window) = web_sys::window() {
            if let Err(err) =
                window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
            {
                warn!("failed to register scroll listener: {err:?}");
            }
        }

        // pick up the initial position without waiting for the first scroll
        scroll.refresh_active();

        Rc::new(ScrollListener { callback, pending })
    });

    use_drop(move || {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.remove_event_listener_with_callback(
                "scroll",
                listener.callback.as_ref().unchecked_ref(),
            ) {
                warn!("failed to remove scroll listener: {err:?}");
            }
        }
        // dropping the timeout cancels a recompute that has not fired yet
        listener.pending.borrow_mut().take();
        debug!("scroll listener removed");
    });
}

// run f once the page has been laid out
//
// if the document is still loading (images in flight) we wait for the window
// load event, otherwise a short fixed delay covers the first render
pub fn after_layout(delay_ms: u32, f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };

    let loaded = window
        .document()
        .is_some_and(|d| d.ready_state() == "complete");

    if loaded {
        Timeout::new(delay_ms, f).forget();
        return;
    }

    let options = AddEventListenerOptions::new();
    options.set_once(true);

    let callback = Closure::once_into_js(f);
    if let Err(err) = window.add_event_listener_with_callback_and_add_event_listener_options(
        "load",
        callback.unchecked_ref(),
        &options,
    ) {
        warn!("failed to wait for page load: {err:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_section_renders_a_dioxus_element() {
        let component: fn(NamedSectionProps) -> Element = NamedSection;
        let _ = component;
    }

    #[test]
    fn element_section_wraps_a_dom_element() {
        let wrap: fn(web_sys::Element) -> ElementSection = ElementSection::new;
        let _ = wrap;
    }
}
