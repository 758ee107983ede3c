//! Entity record
//!
//! The decoded answer to one request.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{PokeError, Result};

/// An entity name with its integer attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRecord {
    name: String,
    attributes: BTreeMap<String, i32>,
}

impl EntityRecord {
    /// Create a record; the name must not be empty
    pub fn new(name: impl Into<String>, attributes: BTreeMap<String, i32>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(PokeError::EmptyName);
        }
        Ok(Self { name, attributes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attributes(&self) -> &BTreeMap<String, i32> {
        &self.attributes
    }

    /// Look up a single attribute
    pub fn get(&self, key: &str) -> Option<i32> {
        self.attributes.get(key).copied()
    }

    /// Number of attributes
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Output line: `name;key:value;key:value`
    pub fn format(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for EntityRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (key, value) in &self.attributes {
            write!(f, ";{}:{}", key, value)?;
        }
        Ok(())
    }
}
