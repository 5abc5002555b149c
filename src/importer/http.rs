//! HTTP backend: roots are base URLs, origins are fetched with GET.
//!
//! Uses the curl crate (libcurl). A 404 is the network analog of a missing
//! file and maps to `ReadOutcome::NotFound`, so the shared algorithm falls
//! through to the package-form attempt. Any other non-2xx status or
//! transport failure is a fatal `ImportError::Communication`.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::descriptor::RootLocation;
use crate::error::ImportError;
use crate::registry::PathHook;
use crate::resolver::Resolver;

use super::{decode_source, ReadOutcome, SourceBackend, SourceResolver, DEFAULT_SOURCE_SUFFIX};

/// Transport settings for URL-rooted resolvers. Timeout policy lives here,
/// not in the resolution algorithm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpOptions {
    pub connect_timeout_secs: u64,
    pub timeout_secs: u64,
    pub max_redirects: u32,
}

impl Default for HttpOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            max_redirects: 10,
        }
    }
}

/// Fetches source over HTTP GET.
#[derive(Debug, Clone, Default)]
pub struct HttpBackend {
    options: HttpOptions,
}

impl HttpBackend {
    pub fn new(options: HttpOptions) -> Self {
        Self { options }
    }
}

impl SourceBackend for HttpBackend {
    fn join(&self, base: &str, segment: &str) -> String {
        // Relative-reference resolution against the base URL, not path
        // concatenation: a base without a trailing slash replaces its last
        // segment, matching standard URL join semantics.
        match url::Url::parse(base).and_then(|b| b.join(segment)) {
            Ok(joined) => joined.to_string(),
            Err(_) => format!("{}/{}", base.trim_end_matches('/'), segment),
        }
    }

    fn read_source(&self, origin: &str) -> Result<ReadOutcome, ImportError> {
        let comm = |detail: String| ImportError::Communication {
            origin: origin.to_string(),
            detail,
        };

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(origin).map_err(|e| comm(format!("invalid URL: {}", e)))?;
        easy.follow_location(true).map_err(|e| comm(e.to_string()))?;
        easy.max_redirections(self.options.max_redirects)
            .map_err(|e| comm(e.to_string()))?;
        easy.connect_timeout(Duration::from_secs(self.options.connect_timeout_secs))
            .map_err(|e| comm(e.to_string()))?;
        easy.timeout(Duration::from_secs(self.options.timeout_secs))
            .map_err(|e| comm(e.to_string()))?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(|e| comm(e.to_string()))?;
            transfer
                .perform()
                .map_err(|e| comm(format!("GET failed: {}", e)))?;
        }

        let code = easy
            .response_code()
            .map_err(|e| comm(format!("no response code: {}", e)))?;
        if code == 404 {
            tracing::debug!("GET {} returned 404", origin);
            return Ok(ReadOutcome::NotFound);
        }
        if !(200..300).contains(&code) {
            return Err(comm(format!("HTTP {}", code)));
        }

        decode_source(origin, body).map(ReadOutcome::Found)
    }
}

/// Resolver over a base-URL root.
pub type UrlResolver = SourceResolver<HttpBackend>;

impl SourceResolver<HttpBackend> {
    pub fn new(root: impl Into<RootLocation>) -> Self {
        Self::with_options(root, HttpOptions::default())
    }

    pub fn with_options(root: impl Into<RootLocation>, options: HttpOptions) -> Self {
        SourceResolver::with_backend(root.into(), HttpBackend::new(options))
    }
}

/// Path hook producing a `UrlResolver` for http(s) search-path entries;
/// declines everything else.
#[derive(Debug, Clone)]
pub struct UrlResolverHook {
    suffix: String,
    options: HttpOptions,
}

impl UrlResolverHook {
    pub fn new(suffix: &str, options: HttpOptions) -> Self {
        Self {
            suffix: suffix.to_string(),
            options,
        }
    }
}

impl Default for UrlResolverHook {
    fn default() -> Self {
        Self::new(DEFAULT_SOURCE_SUFFIX, HttpOptions::default())
    }
}

impl PathHook for UrlResolverHook {
    fn resolver_for(&self, root: &str) -> Option<Box<dyn Resolver>> {
        if !is_http_root(root) {
            return None;
        }
        // A root that does not parse as a URL cannot serve as a join base.
        url::Url::parse(root).ok()?;
        Some(Box::new(SourceResolver::with_suffix(
            RootLocation::from(root),
            HttpBackend::new(self.options.clone()),
            &self.suffix,
        )))
    }
}

/// Convenience for hosts that manage the default URL hook explicitly.
pub fn url_hook() -> Arc<dyn PathHook> {
    Arc::new(UrlResolverHook::default())
}

fn is_http_root(root: &str) -> bool {
    root.starts_with("http://") || root.starts_with("https://")
}
