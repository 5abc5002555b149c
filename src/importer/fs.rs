//! Filesystem backend: roots are directories, origins are file paths.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::sync::Arc;

use crate::descriptor::RootLocation;
use crate::error::ImportError;
use crate::registry::PathHook;
use crate::resolver::Resolver;

use super::{decode_source, ReadOutcome, SourceBackend, SourceResolver, DEFAULT_SOURCE_SUFFIX};

/// Reads source files from the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsBackend;

impl SourceBackend for FsBackend {
    fn join(&self, base: &str, segment: &str) -> String {
        Path::new(base).join(segment).to_string_lossy().into_owned()
    }

    fn read_source(&self, origin: &str) -> Result<ReadOutcome, ImportError> {
        match fs::read(origin) {
            Ok(bytes) => decode_source(origin, bytes).map(ReadOutcome::Found),
            // NotADirectory: a path component is a plain file, e.g. probing
            // `a/__init__.py` when `a` is a file. Same meaning as absent.
            Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
                Ok(ReadOutcome::NotFound)
            }
            Err(e) => Err(ImportError::Io {
                origin: origin.to_string(),
                source: e,
            }),
        }
    }
}

/// Resolver over a directory root.
pub type PathResolver = SourceResolver<FsBackend>;

impl SourceResolver<FsBackend> {
    pub fn new(root: impl Into<RootLocation>) -> Self {
        SourceResolver::with_backend(root.into(), FsBackend)
    }
}

/// Path hook producing a `PathResolver` for directory search-path entries.
/// Declines URL-shaped entries so they fall through to the URL hook.
#[derive(Debug, Clone)]
pub struct PathResolverHook {
    suffix: String,
}

impl PathResolverHook {
    pub fn new(suffix: &str) -> Self {
        Self {
            suffix: suffix.to_string(),
        }
    }
}

impl Default for PathResolverHook {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_SUFFIX)
    }
}

impl PathHook for PathResolverHook {
    fn resolver_for(&self, root: &str) -> Option<Box<dyn Resolver>> {
        if root.contains("://") {
            return None;
        }
        Some(Box::new(SourceResolver::with_suffix(
            RootLocation::from(root),
            FsBackend,
            &self.suffix,
        )))
    }
}

/// Convenience for hosts that manage the default filesystem hook explicitly.
pub fn path_hook() -> Arc<dyn PathHook> {
    Arc::new(PathResolverHook::default())
}
