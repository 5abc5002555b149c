//! Backend-generic resolution: one shared module/package trial algorithm
//! over two narrow primitives (`join`, `read_source`).
//!
//! The filesystem and URL resolvers differ only in how a path segment is
//! joined to the root and how bytes are fetched from an origin. Everything
//! else (trial order, descriptor construction, package sub-search-path)
//! lives here, so further backends implement only the two primitives.

pub mod fs;
pub mod http;

use crate::descriptor::{ModuleDescriptor, RootLocation};
use crate::error::ImportError;
use crate::resolver::{validate_module_name, Resolver, SourceLoader};

/// Source-file suffix used when none is configured.
pub const DEFAULT_SOURCE_SUFFIX: &str = "py";

/// Outcome of one backend read. "Not found" is an ordinary value here, not
/// an error: it is what drives the module-form to package-form fallback.
/// Hard failures travel in the surrounding `Result`.
#[derive(Debug)]
pub enum ReadOutcome {
    Found(String),
    NotFound,
}

/// The two primitives a storage backend supplies.
pub trait SourceBackend {
    /// Joins a relative segment onto a base (filesystem concatenation or
    /// URL relative-reference resolution).
    fn join(&self, base: &str, segment: &str) -> String;

    /// Reads the source at `origin`, scoped to this one call: any handle or
    /// connection is released before returning on every exit path.
    fn read_source(&self, origin: &str) -> Result<ReadOutcome, ImportError>;
}

/// Resolver + loader over a single root, generic in the backend.
///
/// Stateless with respect to past resolutions: every `resolve` call is
/// independent and nothing is memoized across names.
pub struct SourceResolver<B: SourceBackend> {
    root: RootLocation,
    suffix: String,
    backend: B,
}

impl<B: SourceBackend> SourceResolver<B> {
    pub fn with_backend(root: RootLocation, backend: B) -> Self {
        Self::with_suffix(root, backend, DEFAULT_SOURCE_SUFFIX)
    }

    pub fn with_suffix(root: RootLocation, backend: B, suffix: &str) -> Self {
        Self {
            root,
            suffix: suffix.to_string(),
            backend,
        }
    }

    pub fn root(&self) -> &RootLocation {
        &self.root
    }

    /// Root-relative location of a dotted name (no suffix yet).
    fn location_for(&self, fullname: &str) -> String {
        let relative = fullname.replace('.', "/");
        self.backend.join(self.root.as_str(), &relative)
    }

    /// Candidate origin for one trial: `<location>.<suffix>` for the module
    /// form, `<location>/__init__.<suffix>` for the package form.
    fn origin_for(&self, location: &str, is_package: bool) -> String {
        if is_package {
            format!("{}/__init__.{}", location, self.suffix)
        } else {
            format!("{}.{}", location, self.suffix)
        }
    }
}

impl<B: SourceBackend> Resolver for SourceResolver<B> {
    fn resolve(
        &self,
        fullname: &str,
        _search_path: Option<&[RootLocation]>,
        _import_target: Option<&str>,
    ) -> Result<Option<ModuleDescriptor>, ImportError> {
        validate_module_name(fullname)?;
        let location = self.location_for(fullname);
        // Module form strictly before package form: a file beats a
        // same-named directory.
        for is_package in [false, true] {
            let origin = self.origin_for(&location, is_package);
            tracing::debug!("trying {} (package: {})", origin, is_package);
            match self.backend.read_source(&origin)? {
                ReadOutcome::Found(_) => {
                    tracing::debug!("resolved {} at {}", fullname, origin);
                    return Ok(Some(ModuleDescriptor::new(fullname, origin, is_package)));
                }
                ReadOutcome::NotFound => {}
            }
        }
        Ok(None)
    }

    fn loader(&self) -> &dyn SourceLoader {
        self
    }
}

impl<B: SourceBackend> SourceLoader for SourceResolver<B> {
    fn source_locations(&self, descriptor: &ModuleDescriptor) -> Vec<RootLocation> {
        if descriptor.is_package() {
            // The package's own directory becomes the search root for its
            // submodules.
            vec![RootLocation::new(self.location_for(descriptor.name()))]
        } else {
            Vec::new()
        }
    }

    fn source_text(&self, descriptor: &ModuleDescriptor) -> Result<String, ImportError> {
        match self.backend.read_source(descriptor.origin())? {
            ReadOutcome::Found(text) => Ok(text),
            ReadOutcome::NotFound => Err(ImportError::SourceNotFound {
                name: descriptor.name().to_string(),
                origin: descriptor.origin().to_string(),
            }),
        }
    }
}

/// Decodes fetched bytes as UTF-8 source text.
pub(crate) fn decode_source(origin: &str, bytes: Vec<u8>) -> Result<String, ImportError> {
    String::from_utf8(bytes).map_err(|source| ImportError::Encoding {
        origin: origin.to_string(),
        source,
    })
}
