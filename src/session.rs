//! Per-import-attempt state and the import walk.
//!
//! One `ResolutionSession` exists for the duration of a single import
//! attempt and is dropped when it completes, success or failure; nothing is
//! persisted across imports. The walk consults search-path entries in order,
//! asks the registry for a resolver per entry, and takes the first
//! successful resolution.

use crate::descriptor::{ModuleDescriptor, RootLocation};
use crate::error::ImportError;
use crate::module::{ModuleHost, ModuleShell};
use crate::registry::HookRegistry;
use crate::resolver::validate_module_name;

/// Transient state for one import attempt.
#[derive(Debug, Default)]
pub struct ResolutionSession {
    fullname: String,
    is_package: bool,
    source: Option<String>,
    descriptor: Option<ModuleDescriptor>,
}

impl ResolutionSession {
    pub fn new(fullname: &str) -> Self {
        Self {
            fullname: fullname.to_string(),
            ..Self::default()
        }
    }

    pub fn fullname(&self) -> &str {
        &self.fullname
    }

    pub fn is_package(&self) -> bool {
        self.is_package
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn descriptor(&self) -> Option<&ModuleDescriptor> {
        self.descriptor.as_ref()
    }

    fn record(&mut self, descriptor: ModuleDescriptor, source: String) {
        self.is_package = descriptor.is_package();
        self.descriptor = Some(descriptor);
        self.source = Some(source);
    }
}

/// Imports `fullname` by walking `search_paths` against the registry and
/// executing the first resolution found.
///
/// A hard failure from one resolver (e.g. an HTTP 500) does not stop the
/// walk; subsequent entries are still tried, and the failure is reported
/// only if nothing else resolves the name. The failing resolver itself is
/// never reattempted.
pub fn import_module(
    registry: &HookRegistry,
    search_paths: &[RootLocation],
    fullname: &str,
    host: &dyn ModuleHost,
) -> Result<ModuleShell, ImportError> {
    validate_module_name(fullname)?;
    let mut session = ResolutionSession::new(fullname);
    let mut first_failure: Option<ImportError> = None;

    for root in search_paths {
        let Some(resolver) = registry.resolver_for(root.as_str()) else {
            tracing::debug!("no hook claims {}", root);
            continue;
        };
        match resolver.resolve(fullname, None, None) {
            Ok(Some(descriptor)) => {
                let loader = resolver.loader();
                let source = loader.source_text(&descriptor)?;
                session.record(descriptor.clone(), source);
                let mut module = loader
                    .create_module(&descriptor)
                    .unwrap_or_else(|| ModuleShell::new(descriptor));
                let body = session.source().unwrap_or_default();
                loader.execute(&mut module, body, host)?;
                tracing::debug!("imported {} from {}", fullname, root);
                return Ok(module);
            }
            Ok(None) => continue,
            Err(err) => {
                tracing::warn!("resolver for {} failed: {}", root, err);
                if first_failure.is_none() {
                    first_failure = Some(err);
                }
            }
        }
    }

    Err(first_failure.unwrap_or_else(|| ImportError::NotFound {
        name: fullname.to_string(),
    }))
}
