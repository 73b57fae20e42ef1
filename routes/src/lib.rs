//! Ordered route table mapping URL paths to view handles.
//!
//! This crate is UI-framework agnostic so client crates can consume it
//! directly: the view slot is a generic handle, not a widget type. A table
//! is built once at startup through [`RouteTable::register`] and is
//! immutable afterwards; [`RouteTable::resolve`] answers navigation events
//! with the first matching entry or an explicit [`NotFound`].


/// A single path-to-view binding.
///
/// `path` is the URL pattern as written at the registration point (it doubles
/// as the `href` for navigation chrome); `name` is a unique identifier for
/// the route; `view` is a handle to a renderable UI unit owned by the client.
#[derive(Clone, Debug)]
pub struct RouteEntry<V> {
    pub path: String,
    pub name: String,
    pub view: V,
}

impl<V> RouteEntry<V> {
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: V) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view,
        }
    }
}

/// Error rejecting a route set at registration time.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigurationError {
    /// Two entries share a path (after normalization).
    #[error("duplicate route path: {0}")]
    DuplicatePath(String),
    /// Two entries share a name.
    #[error("duplicate route name: {0}")]
    DuplicateName(String),
}

/// No registered entry matches the requested path.
///
/// Carries the path as the caller supplied it, for logging and fallback UI.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("no route matches path: {path}")]
pub struct NotFound {
    pub path: String,
}

/// Ordered, immutable route table.
///
/// Insertion order is priority order: `resolve` scans entries front to back
/// and returns the first match. Paths are compared in normalized form, which
/// is precomputed per entry at registration.
#[derive(Clone, Debug)]
pub struct RouteTable<V> {
    entries: Vec<RouteEntry<V>>,
    normalized: Vec<String>,
}

impl<V> RouteTable<V> {
    /// Build a table from an ordered entry list.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError`] when two entries share a normalized
    /// path or a name. The first offending entry is reported.
    pub fn register(entries: Vec<RouteEntry<V>>) -> Result<Self, ConfigurationError> {
        let mut normalized = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let path = normalize_path(&entry.path);
            if normalized.contains(&path) {
                return Err(ConfigurationError::DuplicatePath(entry.path.clone()));
            }
            if entries[..index].iter().any(|prior| prior.name == entry.name) {
                return Err(ConfigurationError::DuplicateName(entry.name.clone()));
            }
            normalized.push(path);
        }
        Ok(Self {
            entries,
            normalized,
        })
    }

    /// Resolve a navigation path to the first matching entry.
    ///
    /// # Errors
    ///
    /// Returns [`NotFound`] carrying the requested path when no entry
    /// matches.
    pub fn resolve(&self, path: &str) -> Result<&RouteEntry<V>, NotFound> {
        let needle = normalize_path(path);
        self.normalized
            .iter()
            .position(|candidate| *candidate == needle)
            .map(|index| &self.entries[index])
            .ok_or_else(|| NotFound {
                path: path.to_owned(),
            })
    }

    /// Registered entries in insertion (priority) order.
    #[must_use]
    pub fn entries(&self) -> &[RouteEntry<V>] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Canonical form of a navigation path for matching and duplicate checks.
///
/// Strips the query string and fragment, restores a missing leading `/`, and
/// collapses trailing slashes. The empty path canonicalizes to `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> String {
    let without_fragment = raw.split('#').next().unwrap_or("");
    let without_query = without_fragment.split('?').next().unwrap_or("");
    let trimmed = without_query.trim_end_matches('/');
    if trimmed.is_empty() {
        return "/".to_owned();
    }
    if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}
