//! Selector strategies and their wire names.
//!
//! A `Selector` is one strategy/expression pair as a driver accepts it. The
//! serialized form is the WebDriver locator pair `{"using": ..., "value": ...}`,
//! including the vendor-prefixed strategies of the native automation backends.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single element-selection strategy with its expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "using", content = "value")]
pub enum Selector {
    /// Match on the `id` attribute / resource id.
    #[serde(rename = "id")]
    Id(String),

    /// Match on the `name` attribute.
    #[serde(rename = "name")]
    Name(String),

    /// Match on the `id` attribute, falling back to `name`. Used for
    /// locators synthesized from a field's own identifier.
    #[serde(rename = "id or name")]
    IdOrName(String),

    /// Match on a class name token.
    #[serde(rename = "class name")]
    ClassName(String),

    /// CSS selector (web content only).
    #[serde(rename = "css selector")]
    Css(String),

    /// Match on the tag/element type name.
    #[serde(rename = "tag name")]
    TagName(String),

    /// Exact anchor text (web content only).
    #[serde(rename = "link text")]
    LinkText(String),

    /// Partial anchor text (web content only).
    #[serde(rename = "partial link text")]
    PartialLinkText(String),

    /// XPath expression.
    #[serde(rename = "xpath")]
    Xpath(String),

    /// Accessibility identifier (content-description / accessibility id).
    #[serde(rename = "accessibility id")]
    AccessibilityId(String),

    /// Android UiAutomator2 selector expression.
    #[serde(rename = "-android uiautomator")]
    AndroidUiAutomator(String),

    /// Android view tag (Espresso).
    #[serde(rename = "-android viewtag")]
    AndroidViewTag(String),

    /// Android data matcher (Espresso).
    #[serde(rename = "-android datamatcher")]
    AndroidDataMatcher(String),

    /// iOS NSPredicate expression.
    #[serde(rename = "-ios predicate string")]
    IosPredicate(String),

    /// iOS class chain expression.
    #[serde(rename = "-ios class chain")]
    IosClassChain(String),

    /// Windows UIAutomation selector.
    #[serde(rename = "-windows uiautomation")]
    WindowsAutomation(String),
}

impl Selector {
    /// Returns the wire name of this strategy.
    pub fn strategy(&self) -> &'static str {
        match self {
            Selector::Id(_) => "id",
            Selector::Name(_) => "name",
            Selector::IdOrName(_) => "id or name",
            Selector::ClassName(_) => "class name",
            Selector::Css(_) => "css selector",
            Selector::TagName(_) => "tag name",
            Selector::LinkText(_) => "link text",
            Selector::PartialLinkText(_) => "partial link text",
            Selector::Xpath(_) => "xpath",
            Selector::AccessibilityId(_) => "accessibility id",
            Selector::AndroidUiAutomator(_) => "-android uiautomator",
            Selector::AndroidViewTag(_) => "-android viewtag",
            Selector::AndroidDataMatcher(_) => "-android datamatcher",
            Selector::IosPredicate(_) => "-ios predicate string",
            Selector::IosClassChain(_) => "-ios class chain",
            Selector::WindowsAutomation(_) => "-windows uiautomation",
        }
    }

    /// Returns the strategy expression.
    pub fn expression(&self) -> &str {
        match self {
            Selector::Id(value)
            | Selector::Name(value)
            | Selector::IdOrName(value)
            | Selector::ClassName(value)
            | Selector::Css(value)
            | Selector::TagName(value)
            | Selector::LinkText(value)
            | Selector::PartialLinkText(value)
            | Selector::Xpath(value)
            | Selector::AccessibilityId(value)
            | Selector::AndroidUiAutomator(value)
            | Selector::AndroidViewTag(value)
            | Selector::AndroidDataMatcher(value)
            | Selector::IosPredicate(value)
            | Selector::IosClassChain(value)
            | Selector::WindowsAutomation(value) => value,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.strategy(), self.expression())
    }
}
