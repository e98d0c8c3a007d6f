//! Locator composition and content-context mapping.

use crate::selector::Selector;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An executable element query.
///
/// Fragments compose in two ways: `Chained` narrows the search context
/// fragment by fragment (all must match, in sequence), `AnyOf` accepts the
/// first fragment that matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locator {
    /// One selector, used as-is.
    Single(Selector),
    /// All fragments must match, each within the context of the previous one.
    Chained(Vec<Locator>),
    /// Any single matching fragment suffices.
    AnyOf(Vec<Locator>),
}

impl Locator {
    /// Shorthand for a single-selector locator.
    pub fn single(selector: Selector) -> Self {
        Locator::Single(selector)
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn join(fragments: &[Locator]) -> String {
            fragments
                .iter()
                .map(|fragment| fragment.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        }

        match self {
            Locator::Single(selector) => write!(f, "{}", selector),
            Locator::Chained(fragments) => write!(f, "chain({})", join(fragments)),
            Locator::AnyOf(fragments) => write!(f, "any({})", join(fragments)),
        }
    }
}

/// Which rendering layer a locator applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    /// Embedded web view or default content.
    HtmlOrDefault,
    /// The native platform UI tree.
    NativeMobileSpecific,
}

/// One locator per content context, both always populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentMappedLocator {
    pub html_or_default: Locator,
    pub native_mobile: Locator,
}

impl ContentMappedLocator {
    pub fn new(html_or_default: Locator, native_mobile: Locator) -> Self {
        Self {
            html_or_default,
            native_mobile,
        }
    }

    /// Returns the locator to execute in the given content context.
    pub fn locator_for(&self, context: ContentType) -> &Locator {
        match context {
            ContentType::HtmlOrDefault => &self.html_or_default,
            ContentType::NativeMobileSpecific => &self.native_mobile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locator_display() {
        let locator = Locator::Chained(vec![
            Locator::single(Selector::AccessibilityId("Form".into())),
            Locator::AnyOf(vec![
                Locator::single(Selector::Id("ok".into())),
                Locator::single(Selector::Name("ok".into())),
            ]),
        ]);
        assert_eq!(
            locator.to_string(),
            "chain(accessibility id=Form, any(id=ok, name=ok))"
        );
    }

    #[test]
    fn test_locator_serialization() {
        let locator = Locator::Chained(vec![Locator::single(Selector::Id("menu".into()))]);
        let json = serde_json::to_string(&locator).unwrap();
        assert_eq!(
            json,
            r#"{"chained":[{"single":{"using":"id","value":"menu"}}]}"#
        );

        let back: Locator = serde_json::from_str(&json).unwrap();
        assert_eq!(back, locator);
    }

    #[test]
    fn test_content_mapping_lookup() {
        let mapped = ContentMappedLocator::new(
            Locator::single(Selector::Css("#login".into())),
            Locator::single(Selector::AccessibilityId("Login".into())),
        );

        assert_eq!(
            mapped.locator_for(ContentType::HtmlOrDefault),
            &Locator::single(Selector::Css("#login".into()))
        );
        assert_eq!(
            mapped.locator_for(ContentType::NativeMobileSpecific),
            &Locator::single(Selector::AccessibilityId("Login".into()))
        );
    }
}
