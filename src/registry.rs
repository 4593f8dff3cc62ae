//! Icon registry for looking up icon data by name

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::error::{IconError, LoadError};
use crate::icon::IconData;

/// Named icon store
#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    icons: HashMap<String, IconData>,
}

/// TOML structure for deserializing icon sets
#[derive(Deserialize)]
struct TomlIconSet {
    /// Default width for icons that do not set one
    width: Option<f64>,
    /// Default height for icons that do not set one
    height: Option<f64>,
    #[serde(default)]
    icons: HashMap<String, IconData>,
}

impl IconRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Load an icon set from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load an icon set from a TOML string
    ///
    /// ```toml
    /// width = 24
    /// height = 24
    ///
    /// [icons.home]
    /// body = '<path d="M10 20v-6h4v6"/>'
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, LoadError> {
        let parsed: TomlIconSet = toml::from_str(content)?;

        let mut registry = Self::new();
        for (name, mut icon) in parsed.icons {
            icon.width = icon.width.or(parsed.width);
            icon.height = icon.height.or(parsed.height);
            registry.register(name, icon);
        }
        Ok(registry)
    }

    /// Register an icon, replacing any icon with the same name
    pub fn register(&mut self, name: impl Into<String>, icon: IconData) {
        let name = name.into();
        if self.icons.insert(name.clone(), icon).is_some() {
            tracing::debug!(name = %name, "replaced registered icon");
        }
    }

    /// Register several icons at once
    pub fn register_all<I, S>(&mut self, icons: I)
    where
        I: IntoIterator<Item = (S, IconData)>,
        S: Into<String>,
    {
        for (name, icon) in icons {
            self.register(name, icon);
        }
    }

    /// Look up an icon by name
    pub fn get(&self, name: &str) -> Result<&IconData, IconError> {
        self.icons.get(name).ok_or_else(|| IconError::UnknownIconName {
            name: name.to_string(),
        })
    }

    /// Check whether an icon is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.icons.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.icons.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

/// Where the icon to render comes from
#[derive(Debug, Clone, PartialEq)]
pub enum IconInput {
    /// Icon data supplied directly
    Data(IconData),
    /// Name to look up in a registry
    Name(String),
}

impl From<IconData> for IconInput {
    fn from(icon: IconData) -> Self {
        IconInput::Data(icon)
    }
}

impl From<&str> for IconInput {
    fn from(name: &str) -> Self {
        IconInput::Name(name.to_string())
    }
}

/// Resolve an icon input to icon data
pub fn resolve_icon(
    input: Option<&IconInput>,
    registry: &IconRegistry,
) -> Result<IconData, IconError> {
    match input {
        None => Err(IconError::MissingIconInput),
        Some(IconInput::Data(icon)) => Ok(icon.clone()),
        Some(IconInput::Name(name)) => registry.get(name).cloned(),
    }
}
