//! Declarative attribute mapping.
//!
//! A resource type declares, once, which attributes it exposes and which
//! field of the raw API object each one reads. Reading is a pure renaming
//! projection: no validation, no defaults, no conversion.
//!
//! # Example
//!
//! ```rust
//! use etsy_api::rest::AttributeMap;
//! use serde_json::json;
//!
//! let map = AttributeMap::define(|map| {
//!     map.declare_attributes(["title"])?
//!         .declare_attribute("id", "shop_id")?;
//!     Ok(())
//! })
//! .unwrap();
//!
//! let raw = json!({ "title": "Reagent", "shop_id": 5500349 });
//! let raw = raw.as_object().unwrap();
//!
//! assert_eq!(map.get(raw, "id"), Some(&json!(5500349)));
//! assert_eq!(map.get(raw, "title"), Some(&json!("Reagent")));
//! assert_eq!(map.get(raw, "missing"), None);
//! ```

use serde_json::{Map, Value};

use crate::error::ConfigError;

/// One declared mapping from a local attribute name to a source field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    local_name: String,
    source_field: String,
}

impl Attribute {
    /// The name the attribute is exposed under.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local_name
    }

    /// The field of the raw API object the attribute reads.
    #[must_use]
    pub fn source_field(&self) -> &str {
        &self.source_field
    }
}

/// The set of attributes a resource type exposes, in declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AttributeMap {
    attributes: Vec<Attribute>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            attributes: Vec::new(),
        }
    }

    /// Builds a map by running a block of declarations against an empty map.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised by a declaration.
    pub fn define<F>(declare: F) -> Result<Self, ConfigError>
    where
        F: FnOnce(&mut Self) -> Result<(), ConfigError>,
    {
        let mut map = Self::new();
        declare(&mut map)?;
        Ok(map)
    }

    /// Builds a map from a static declaration table.
    ///
    /// A `None` source field reads the field named like the attribute.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] raised by a declaration.
    pub fn from_declarations(declarations: &[(&str, Option<&str>)]) -> Result<Self, ConfigError> {
        let mut map = Self::new();
        for &(local_name, source_field) in declarations {
            map.declare_attribute(local_name, source_field.unwrap_or(local_name))?;
        }
        Ok(map)
    }

    /// Declares `local_name` as reading `source_field`.
    ///
    /// Declaring the same pair twice is a no-op. Declaring an existing local
    /// name with a different source field replaces the earlier mapping and
    /// keeps its position.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAttributeName`] if `local_name` is blank and
    /// [`ConfigError::EmptySourceField`] if `source_field` is blank.
    pub fn declare_attribute(
        &mut self,
        local_name: impl Into<String>,
        source_field: impl Into<String>,
    ) -> Result<&mut Self, ConfigError> {
        let local_name = local_name.into();
        let source_field = source_field.into();

        if local_name.trim().is_empty() {
            return Err(ConfigError::EmptyAttributeName);
        }
        if source_field.trim().is_empty() {
            return Err(ConfigError::EmptySourceField {
                attribute: local_name,
            });
        }

        match self
            .attributes
            .iter_mut()
            .find(|attribute| attribute.local_name == local_name)
        {
            Some(existing) => existing.source_field = source_field,
            None => self.attributes.push(Attribute {
                local_name,
                source_field,
            }),
        }

        Ok(self)
    }

    /// Declares several attributes that read a field of the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAttributeName`] at the first blank name;
    /// names before it stay declared.
    pub fn declare_attributes<I, S>(&mut self, local_names: I) -> Result<&mut Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for local_name in local_names {
            let local_name = local_name.into();
            self.declare_attribute(local_name.clone(), local_name)?;
        }
        Ok(self)
    }

    /// Returns the source field `local_name` reads, if declared.
    #[must_use]
    pub fn source_field(&self, local_name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attribute| attribute.local_name == local_name)
            .map(Attribute::source_field)
    }

    /// Returns `true` if `local_name` is declared.
    #[must_use]
    pub fn contains(&self, local_name: &str) -> bool {
        self.source_field(local_name).is_some()
    }

    /// Returns the number of declared attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns `true` if nothing is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Iterates over the declared attributes in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
        self.attributes.iter()
    }

    /// Reads `local_name` from a raw API object.
    ///
    /// Returns the stored value verbatim (an explicit JSON `null` included),
    /// or `None` when the attribute is undeclared or the field is absent.
    #[must_use]
    pub fn get<'a>(&self, raw: &'a Map<String, Value>, local_name: &str) -> Option<&'a Value> {
        self.source_field(local_name)
            .and_then(|source_field| raw.get(source_field))
    }

    /// Re-keys a raw API object by local attribute names.
    ///
    /// Undeclared fields are dropped, as are declared attributes whose field
    /// is absent.
    #[must_use]
    pub fn project(&self, raw: &Map<String, Value>) -> Map<String, Value> {
        self.attributes
            .iter()
            .filter_map(|attribute| {
                raw.get(&attribute.source_field)
                    .map(|value| (attribute.local_name.clone(), value.clone()))
            })
            .collect()
    }
}
