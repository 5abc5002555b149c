//! Module shell and the host evaluation boundary.
//!
//! The framework does not own evaluation semantics: it materializes a
//! `ModuleShell` (name, namespace, sub-search-path) and hands source text to
//! a `ModuleHost` supplied by the embedding interpreter.

use std::collections::BTreeMap;

use crate::descriptor::{ModuleDescriptor, RootLocation};
use crate::error::EvalError;

/// Name-to-value bindings produced by evaluating a module body.
pub type Namespace = BTreeMap<String, String>;

/// The module object under construction: the namespace the body evaluates
/// into, plus the sub-search-path entries set when the module is a package.
#[derive(Debug, Clone)]
pub struct ModuleShell {
    descriptor: ModuleDescriptor,
    namespace: Namespace,
    source_locations: Vec<RootLocation>,
}

impl ModuleShell {
    pub fn new(descriptor: ModuleDescriptor) -> Self {
        Self {
            descriptor,
            namespace: Namespace::new(),
            source_locations: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn descriptor(&self) -> &ModuleDescriptor {
        &self.descriptor
    }

    /// Binds a name in the module namespace, replacing any previous value.
    pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.namespace.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.namespace.get(name).map(String::as_str)
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// Search roots for this module's submodules. Non-empty only for
    /// packages, set by the loader before the body runs.
    pub fn source_locations(&self) -> &[RootLocation] {
        &self.source_locations
    }

    pub fn set_source_locations(&mut self, locations: Vec<RootLocation>) {
        self.source_locations = locations;
    }
}

/// Evaluation side of the host import system. The framework feeds it
/// normalized source text; any failure propagates to the importer unchanged.
pub trait ModuleHost {
    fn evaluate(&self, source: &str, module: &mut ModuleShell) -> Result<(), EvalError>;
}
