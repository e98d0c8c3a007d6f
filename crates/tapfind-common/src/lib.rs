pub mod locator;
pub mod selector;

pub use locator::{ContentMappedLocator, ContentType, Locator};
pub use selector::Selector;
