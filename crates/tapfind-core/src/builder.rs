//! Locator resolution.
//!
//! `LocatorBuilder` turns one `FieldDescription` into a `ContentMappedLocator`:
//! a default-context locator for web/hybrid content and a native-context
//! locator picked by walking the backend families in fixed priority order.
//! When neither context has an applicable declaration, a locator is
//! synthesized from the field's own name.

use crate::driver::{Backend, DriverContext};
use crate::field::{FieldDescription, FindBy, FindDecl, LocatorGroupStrategy, Prioritized};
use tapfind_common::{ContentMappedLocator, Locator, Selector};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("a field that declares '{first}' must not also declare '{second}'")]
    DisallowedDeclarationPair {
        first: &'static str,
        second: &'static str,
    },
}

/// Resolves field descriptions against one driver session's identity.
#[derive(Debug, Clone)]
pub struct LocatorBuilder {
    driver: DriverContext,
}

impl LocatorBuilder {
    pub fn new(driver: DriverContext) -> Self {
        Self { driver }
    }

    pub fn driver(&self) -> &DriverContext {
        &self.driver
    }

    /// Resolves one field into its content-mapped locator.
    ///
    /// The default-context and native-context locators are computed
    /// independently; when one side has no applicable declaration the other
    /// fills in, and when neither does, the field name itself becomes the
    /// locator (id-or-name for web content, exact id for native content).
    pub fn build(&self, field: &FieldDescription) -> Result<ContentMappedLocator, BuildError> {
        assert_valid_declarations(field)?;

        let default_locator = build_default_locator(field);
        let native_locator = self.build_native_locator(field);

        let (html_or_default, native_mobile) = match (default_locator, native_locator) {
            (None, None) => (
                Locator::single(Selector::IdOrName(field.name.clone())),
                Locator::single(Selector::Id(field.name.clone())),
            ),
            (None, Some(native)) => (
                Locator::single(Selector::IdOrName(field.name.clone())),
                native,
            ),
            (Some(default), None) => (default.clone(), default),
            (Some(default), Some(native)) => (default, native),
        };

        Ok(ContentMappedLocator::new(html_or_default, native_mobile))
    }

    /// Whether lookups on this field should be cached by the caller.
    pub fn is_lookup_cached(&self, field: &FieldDescription) -> bool {
        field.cache_lookup
    }

    fn build_native_locator(&self, field: &FieldDescription) -> Option<Locator> {
        for backend in Backend::ORDER {
            if !self.driver.supports(backend) {
                continue;
            }

            let fragments = collect_fragments(field.declarations_for(backend));
            tracing::trace!(
                "field '{}': {} fragment(s) from {} declarations",
                field.name,
                fragments.len(),
                backend.name()
            );

            // An applicable backend with no declarations falls through to the
            // next family in priority order.
            let strategy = field.strategies.for_backend(backend);
            if let Some(locator) = compose_fragments(strategy, fragments) {
                tracing::debug!(
                    "field '{}' resolved via {} backend: {}",
                    field.name,
                    backend.name(),
                    locator
                );
                return Some(locator);
            }
        }

        None
    }
}

/// Default-context declarations are mutually exclusive; the three pair checks
/// run in fixed order.
fn assert_valid_declarations(field: &FieldDescription) -> Result<(), BuildError> {
    let slots = [
        ("find_by", field.find_by.is_some()),
        ("find_bys", field.find_bys.is_some()),
        ("find_all", field.find_all.is_some()),
    ];

    for (index, &(first, first_set)) in slots.iter().enumerate() {
        for &(second, second_set) in &slots[index + 1..] {
            if first_set && second_set {
                return Err(BuildError::DisallowedDeclarationPair { first, second });
            }
        }
    }

    Ok(())
}

/// Builds the web/hybrid-content locator, if any declaration applies.
fn build_default_locator(field: &FieldDescription) -> Option<Locator> {
    if let Some(selector) = &field.find_by {
        return Some(Locator::single(selector.clone()));
    }

    if let Some(selectors) = &field.find_bys {
        return Some(Locator::Chained(singles(selectors)));
    }

    if let Some(selectors) = &field.find_all {
        return Some(Locator::AnyOf(singles(selectors)));
    }

    None
}

fn singles(selectors: &[Selector]) -> Vec<Locator> {
    selectors
        .iter()
        .map(|selector| Locator::single(selector.clone()))
        .collect()
}

/// Maps one backend family's declarations to locator fragments, lowest
/// priority first. Inner sets sort by priority independently.
fn collect_fragments(declarations: &[FindDecl]) -> Vec<Locator> {
    let mut ordered: Vec<&FindDecl> = declarations.iter().collect();
    ordered.sort_by_key(|declaration| declaration.priority());

    ordered
        .into_iter()
        .map(|declaration| match declaration {
            FindDecl::By(find) => Locator::single(find.selector.clone()),
            FindDecl::Bys(set) => Locator::Chained(sorted_singles(&set.value)),
            FindDecl::All(set) => Locator::AnyOf(sorted_singles(&set.value)),
        })
        .collect()
}

fn sorted_singles(finds: &[FindBy]) -> Vec<Locator> {
    let mut ordered: Vec<&FindBy> = finds.iter().collect();
    ordered.sort_by_key(|find| find.priority());

    ordered
        .into_iter()
        .map(|find| Locator::single(find.selector.clone()))
        .collect()
}

fn compose_fragments(
    strategy: Option<LocatorGroupStrategy>,
    fragments: Vec<Locator>,
) -> Option<Locator> {
    if fragments.is_empty() {
        return None;
    }

    match strategy.unwrap_or_default() {
        LocatorGroupStrategy::AllPossible => Some(Locator::AnyOf(fragments)),
        LocatorGroupStrategy::Chain => Some(Locator::Chained(fragments)),
    }
}
