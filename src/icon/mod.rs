//! Icon data model, naming rules and source scanning.
//!
//! # Module Structure
//!
//! ```text
//! icon/
//! ├── error      # IconError (invalid / duplicate names)
//! ├── name       # canonical names and code identifiers
//! ├── normalize  # svg shell normalization, attribute cleaning
//! ├── scan       # source tree → MonochromeLibrary / ColorLibrary
//! └── validate   # forbidden characters, NameRegistry
//! ```

mod error;
pub mod name;
pub mod normalize;
pub mod scan;
pub mod validate;

pub use error::IconError;
pub use normalize::{AttrCleaner, Normalizer};
pub use validate::NameRegistry;

use anyhow::Result;
use name::NameDeriver;
use serde_json::Value;

use crate::config::IconsConfig;

/// Name derivation and markup normalization rules for one build.
#[derive(Debug, Clone)]
pub struct IconRules {
    pub names: NameDeriver,
    pub normalizer: Normalizer,
}

impl IconRules {
    pub fn from_config(config: &IconsConfig) -> Result<Self> {
        Ok(Self {
            names: NameDeriver::new(&config.build.size_suffix)?,
            normalizer: Normalizer::new(AttrCleaner::new(&config.build.clean_attrs)?),
        })
    }
}

/// One icon after name derivation and normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalIcon {
    /// Globally unique, lowercase, hyphenated name.
    pub name: String,
    /// Destination category; always set for monochrome icons.
    pub category: Option<String>,
    /// Shell-normalized markup.
    pub markup: String,
}

impl CanonicalIcon {
    /// Markup without the `<svg>` shell.
    pub fn body(&self) -> String {
        normalize::unwrap_svg_shell(&self.markup)
    }

    /// Identifier of the generated constant holding this icon.
    pub fn var_name(&self) -> String {
        name::icon_var_name(&self.name)
    }

    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}

/// A monochrome category with at least one icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDescriptor {
    pub name: String,
    pub icons: Vec<CanonicalIcon>,
}

impl CategoryDescriptor {
    /// Identifier of the generated category descriptor.
    pub fn var_name(&self) -> String {
        name::category_var_name(&self.name)
    }
}

/// Every monochrome icon of one build, grouped by category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonochromeLibrary {
    categories: Vec<CategoryDescriptor>,
    registry: NameRegistry,
}

impl MonochromeLibrary {
    /// Add an icon, consuming the library.
    ///
    /// The name is registered globally first, so a duplicate in any
    /// category fails before the icon is stored. Distinct names that
    /// camelize to the same constant within a category module, or to the
    /// same descriptor in the root module, are rejected as well.
    pub fn insert(mut self, icon: CanonicalIcon) -> Result<Self, IconError> {
        let category = icon.category.clone().unwrap_or_default();
        self.registry = self.registry.register(&icon.name, &category)?;

        match self.categories.iter_mut().find(|c| c.name == category) {
            Some(descriptor) => {
                let identifier = icon.var_name();
                if let Some(other) = descriptor.icons.iter().find(|i| i.var_name() == identifier) {
                    return Err(IconError::IdentifierCollision {
                        identifier,
                        name: icon.name,
                        existing: other.name.clone(),
                    });
                }
                descriptor.icons.push(icon);
            }
            None => {
                let descriptor = CategoryDescriptor {
                    name: category,
                    icons: vec![icon],
                };
                let identifier = descriptor.var_name();
                if let Some(other) = self.categories.iter().find(|c| c.var_name() == identifier) {
                    return Err(IconError::IdentifierCollision {
                        identifier,
                        name: descriptor.name,
                        existing: other.name.clone(),
                    });
                }
                self.categories.push(descriptor);
            }
        }
        Ok(self)
    }

    pub fn categories(&self) -> &[CategoryDescriptor] {
        &self.categories
    }

    pub fn icon_count(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Icon name → category, in scan order.
    pub fn category_by_icon_name(&self) -> &NameRegistry {
        &self.registry
    }
}

/// A color icon, copied without markup changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorIcon {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ColorIcon {
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }
}

/// Color icons in scan order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorLibrary {
    icons: Vec<ColorIcon>,
    registry: NameRegistry,
}

/// Category reported when two color icons share a name.
pub const COLOR_NAMESPACE: &str = "color";

impl ColorLibrary {
    pub fn insert(mut self, icon: ColorIcon) -> Result<Self, IconError> {
        self.registry = self.registry.register(&icon.name, COLOR_NAMESPACE)?;
        self.icons.push(icon);
        Ok(self)
    }

    pub fn icons(&self) -> &[ColorIcon] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    /// `<name>.svg` for every icon, as listed in `COLOR_ICONS_LIST`.
    pub fn file_names(&self) -> Vec<Value> {
        self.icons
            .iter()
            .map(|icon| Value::String(icon.file_name()))
            .collect()
    }
}
