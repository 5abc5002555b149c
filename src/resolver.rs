//! Resolver and source-loader contracts.
//!
//! A `Resolver` answers "can you supply source for this dotted name"; its
//! paired `SourceLoader` turns a resolved descriptor into a running module.
//! For every backend shipped here the two are the same concrete object.

use crate::descriptor::{ModuleDescriptor, RootLocation};
use crate::error::ImportError;
use crate::module::{ModuleHost, ModuleShell};

/// Decides whether this backend can supply source for a dotted name.
pub trait Resolver {
    /// Resolves `fullname` under this resolver's root.
    ///
    /// `Ok(None)` is the unresolved case and never an error; the host moves
    /// on to the next registry entry. `Err` is reserved for genuinely
    /// exceptional conditions: malformed input or a backend failure that is
    /// not "not found".
    ///
    /// `search_path` and `import_target` mirror the host finder contract;
    /// root-bound resolvers may ignore them.
    fn resolve(
        &self,
        fullname: &str,
        search_path: Option<&[RootLocation]>,
        import_target: Option<&str>,
    ) -> Result<Option<ModuleDescriptor>, ImportError>;

    /// The loader paired with this resolver (typically `self`).
    fn loader(&self) -> &dyn SourceLoader;
}

/// Materializes a runnable module from a resolved descriptor.
pub trait SourceLoader {
    /// A custom module shell, or `None` to use the host's default shell.
    fn create_module(&self, descriptor: &ModuleDescriptor) -> Option<ModuleShell> {
        let _ = descriptor;
        None
    }

    /// Search roots a package contributes for its own submodules. Empty for
    /// plain modules.
    fn source_locations(&self, descriptor: &ModuleDescriptor) -> Vec<RootLocation> {
        let _ = descriptor;
        Vec::new()
    }

    /// Raw source text at the descriptor's origin. Fails with
    /// `ImportError::SourceNotFound` when nothing exists there anymore.
    fn source_text(&self, descriptor: &ModuleDescriptor) -> Result<String, ImportError>;

    /// Executes the module body: normalizes line endings, seeds the package
    /// sub-search-path, and evaluates the source against the shell's
    /// namespace. Evaluation failures propagate unmodified.
    fn execute(
        &self,
        module: &mut ModuleShell,
        source: &str,
        host: &dyn ModuleHost,
    ) -> Result<(), ImportError> {
        let text = normalize_source(source);
        if module.descriptor().is_package() {
            let locations = self.source_locations(module.descriptor());
            module.set_source_locations(locations);
        }
        host.evaluate(&text, module).map_err(ImportError::from)
    }
}

/// CRLF-normalizes source text before evaluation.
pub(crate) fn normalize_source(source: &str) -> String {
    source.replace("\r\n", "\n")
}

/// Rejects empty dotted names and names with empty segments ("", "a..b").
pub(crate) fn validate_module_name(fullname: &str) -> Result<(), ImportError> {
    if fullname.is_empty() || fullname.split('.').any(str::is_empty) {
        return Err(ImportError::MalformedName {
            name: fullname.to_string(),
        });
    }
    Ok(())
}
