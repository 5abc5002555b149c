//! Resolution data model: root locations and module descriptors.

use std::fmt;

/// A search-path entry a resolver is bound to: a filesystem directory or a
/// base URL. Immutable once the resolver is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RootLocation(String);

impl RootLocation {
    pub fn new(location: impl Into<String>) -> Self {
        Self(location.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RootLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RootLocation {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for RootLocation {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&String> for RootLocation {
    fn from(value: &String) -> Self {
        Self::new(value.clone())
    }
}

/// Metadata produced by a successful resolution: the dotted name, the
/// absolute origin (path or URL) the source lives at, and whether the name
/// is a package. Handed off to the host; not retained by the framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDescriptor {
    name: String,
    origin: String,
    is_package: bool,
}

impl ModuleDescriptor {
    pub fn new(name: impl Into<String>, origin: impl Into<String>, is_package: bool) -> Self {
        Self {
            name: name.into(),
            origin: origin.into(),
            is_package,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn is_package(&self) -> bool {
        self.is_package
    }
}
