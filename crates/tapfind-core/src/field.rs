//! Per-field locator declarations.
//!
//! A `FieldDescription` is the explicit configuration record a caller builds
//! (or deserializes from a page definition) for each element field it wants
//! resolved. Default-context declarations and per-backend declarations live
//! in separate slots; backend declarations are repeatable and carry a
//! priority that controls composition order.

use crate::driver::Backend;
use serde::{Deserialize, Serialize};
use tapfind_common::Selector;

/// Ordering capability for locator declarations. Lower values sort first.
pub trait Prioritized {
    fn priority(&self) -> i32;
}

/// One selector declaration with its composition priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindBy {
    pub selector: Selector,
    #[serde(default)]
    pub priority: i32,
}

impl FindBy {
    pub fn new(selector: Selector) -> Self {
        Self {
            selector,
            priority: 0,
        }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Prioritized for FindBy {
    fn priority(&self) -> i32 {
        self.priority
    }
}

/// An ordered inner set of selector declarations, itself carrying a priority
/// relative to sibling declarations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FindSet {
    pub value: Vec<FindBy>,
    #[serde(default)]
    pub priority: i32,
}

impl FindSet {
    pub fn new(value: Vec<FindBy>) -> Self {
        Self { value, priority: 0 }
    }

    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}

impl Prioritized for FindSet {
    fn priority(&self) -> i32 {
        self.priority
    }
}

/// One backend-scoped locator declaration on a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindDecl {
    /// A single selector, used as-is.
    By(FindBy),
    /// A chained set: every inner selector must match, in priority order.
    Bys(FindSet),
    /// An any-of set: one matching inner selector suffices.
    All(FindSet),
}

impl FindDecl {
    /// Shorthand for a single-selector declaration with default priority.
    pub fn single(selector: Selector) -> Self {
        FindDecl::By(FindBy::new(selector))
    }
}

impl Prioritized for FindDecl {
    fn priority(&self) -> i32 {
        match self {
            FindDecl::By(find) => find.priority,
            FindDecl::Bys(set) | FindDecl::All(set) => set.priority,
        }
    }
}

/// How multiple resolved fragments for one field combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocatorGroupStrategy {
    /// All fragments must match in sequence.
    #[default]
    Chain,
    /// Any single matching fragment suffices.
    AllPossible,
}

/// Optional per-backend strategy overrides for one field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HowToUseLocators {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selendroid: Option<LocatorGroupStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub android: Option<LocatorGroupStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios_xcuit: Option<LocatorGroupStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ios: Option<LocatorGroupStrategy>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub windows: Option<LocatorGroupStrategy>,
}

impl HowToUseLocators {
    pub fn for_backend(&self, backend: Backend) -> Option<LocatorGroupStrategy> {
        match backend {
            Backend::Selendroid => self.selendroid,
            Backend::Android => self.android,
            Backend::IosXcuit => self.ios_xcuit,
            Backend::Ios => self.ios,
            Backend::Windows => self.windows,
        }
    }
}

/// Everything the resolver needs to know about one element field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    /// The field's declared identifier; feeds the synthesized fallback
    /// locator when no declaration applies.
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_by: Option<Selector>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_bys: Option<Vec<Selector>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub find_all: Option<Vec<Selector>>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selendroid: Vec<FindDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub android: Vec<FindDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ios_xcuit: Vec<FindDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ios: Vec<FindDecl>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub windows: Vec<FindDecl>,

    #[serde(default)]
    pub strategies: HowToUseLocators,

    #[serde(default)]
    pub cache_lookup: bool,
}

impl FieldDescription {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            find_by: None,
            find_bys: None,
            find_all: None,
            selendroid: Vec::new(),
            android: Vec::new(),
            ios_xcuit: Vec::new(),
            ios: Vec::new(),
            windows: Vec::new(),
            strategies: HowToUseLocators::default(),
            cache_lookup: false,
        }
    }

    pub fn with_find_by(mut self, selector: Selector) -> Self {
        self.find_by = Some(selector);
        self
    }

    pub fn with_find_bys(mut self, selectors: Vec<Selector>) -> Self {
        self.find_bys = Some(selectors);
        self
    }

    pub fn with_find_all(mut self, selectors: Vec<Selector>) -> Self {
        self.find_all = Some(selectors);
        self
    }

    /// Appends one backend-scoped declaration. Declarations are repeatable.
    pub fn with_decl(mut self, backend: Backend, decl: FindDecl) -> Self {
        self.declarations_mut(backend).push(decl);
        self
    }

    pub fn with_strategy(mut self, backend: Backend, strategy: LocatorGroupStrategy) -> Self {
        let slot = match backend {
            Backend::Selendroid => &mut self.strategies.selendroid,
            Backend::Android => &mut self.strategies.android,
            Backend::IosXcuit => &mut self.strategies.ios_xcuit,
            Backend::Ios => &mut self.strategies.ios,
            Backend::Windows => &mut self.strategies.windows,
        };
        *slot = Some(strategy);
        self
    }

    pub fn with_cache_lookup(mut self) -> Self {
        self.cache_lookup = true;
        self
    }

    pub fn declarations_for(&self, backend: Backend) -> &[FindDecl] {
        match backend {
            Backend::Selendroid => &self.selendroid,
            Backend::Android => &self.android,
            Backend::IosXcuit => &self.ios_xcuit,
            Backend::Ios => &self.ios,
            Backend::Windows => &self.windows,
        }
    }

    fn declarations_mut(&mut self, backend: Backend) -> &mut Vec<FindDecl> {
        match backend {
            Backend::Selendroid => &mut self.selendroid,
            Backend::Android => &mut self.android,
            Backend::IosXcuit => &mut self.ios_xcuit,
            Backend::Ios => &mut self.ios,
            Backend::Windows => &mut self.windows,
        }
    }
}
