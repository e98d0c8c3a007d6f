//! Declarative page definitions.
//!
//! A page definition groups the field descriptions of one screen so a client
//! can resolve them in a single pass, the way a page-initialization routine
//! visits every annotated field once.

use crate::builder::{BuildError, LocatorBuilder};
use crate::field::FieldDescription;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tapfind_common::ContentMappedLocator;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PageError {
    #[error("malformed page definition: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("duplicate field name '{0}' in page definition")]
    DuplicateField(String),

    #[error("field '{field}': {source}")]
    Build {
        field: String,
        #[source]
        source: BuildError,
    },
}

/// The field descriptions of one screen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageDefinition {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescription>,
}

/// One resolved field: everything the caller stores for later lookups.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedField {
    pub name: String,
    pub locator: ContentMappedLocator,
    pub cache_lookup: bool,
}

impl PageDefinition {
    pub fn from_yaml(input: &str) -> Result<Self, PageError> {
        let de = serde_yaml::Deserializer::from_str(input);
        Ok(serde_yaml::with::singleton_map_recursive::deserialize(de)?)
    }

    /// Resolves every field in declaration order. Field names must be unique
    /// within one page; a build failure is reported with its field name.
    pub fn resolve(&self, builder: &LocatorBuilder) -> Result<Vec<ResolvedField>, PageError> {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(self.fields.len());

        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(PageError::DuplicateField(field.name.clone()));
            }

            let locator = builder.build(field).map_err(|source| PageError::Build {
                field: field.name.clone(),
                source,
            })?;

            resolved.push(ResolvedField {
                name: field.name.clone(),
                locator,
                cache_lookup: builder.is_lookup_cached(field),
            });
        }

        Ok(resolved)
    }
}
