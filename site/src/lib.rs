// platform-independent core of the site
//
// nothing in here knows about the browser; the webapp plugs local storage,
// the document root, and window scrolling in through the traits below
pub mod catalog;
pub mod config;
pub mod nav;
pub mod quote;
pub mod scroll;
pub mod theme;

pub use config::SiteConfig;
pub use quote::{Accepted, QuoteError, QuoteField, QuoteForm, QuoteRequest, QuoteSubmitter};
pub use scroll::{ScrollCoordinator, ScrollThrottle, Scroller, SectionBounds, SectionHandle};
pub use theme::{ThemeFlag, ThemeMarker, ThemeStorage, ThemeStore};
