pub mod accordion;
pub mod footer;
pub mod hero;
pub mod navigation;
pub mod quote_form;
pub mod showcase;
