//! Route table with explicit precedence.
//!
//! Paths are matched segment by segment against a prioritised list of
//! [`RouteEntry`] values. The first entry (lowest priority number, ties broken
//! by declaration order) that matches wins.
//!
//! # Matching rules
//!
//! - Query string and fragment are ignored (`/traces?x=1#a` is `/traces`)
//! - Empty segments are ignored, so a trailing slash never matters
//! - Static segments compare case-insensitively
//! - `:name` captures exactly one non-empty segment, percent-decoded
//!   (`/application/my%20svc` captures `my svc`)
//! - [`MatchKind::Exact`] requires the whole path to be consumed;
//!   [`MatchKind::Prefix`] accepts any number of trailing segments

use std::collections::BTreeMap;

use percent_encoding::percent_decode_str;

use crate::page::PageId;

/// How much of the path an entry must consume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchKind {
    /// Matches only when the pattern consumes the whole path.
    Exact,
    /// Matches the pattern followed by any trailing segments.
    Prefix,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    /// Literal segment, stored lowercase.
    Static(String),
    /// `:name` placeholder.
    Param(String),
}

/// Split a location into its non-empty path segments.
pub(crate) fn path_segments(path: &str) -> impl Iterator<Item = &str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty())
}

/// Percent-decode a captured segment; invalid UTF-8 keeps the raw text.
pub(crate) fn decode_segment(raw: &str) -> String {
    percent_decode_str(raw)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

/// A parsed path pattern such as `/application/:servicename`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(raw: &str) -> Self {
        let segments = path_segments(raw)
            .map(|s| match s.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Static(s.to_ascii_lowercase()),
            })
            .collect();

        Self {
            raw: raw.to_string(),
            segments,
        }
    }

    /// The pattern as written.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Match `path` against this pattern, returning captured parameters.
    pub fn matches(&self, path: &str, kind: MatchKind) -> Option<RouteParams> {
        let parts: Vec<&str> = path_segments(path).collect();

        if parts.len() < self.segments.len() {
            return None;
        }
        if kind == MatchKind::Exact && parts.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, part) in self.segments.iter().zip(&parts) {
            match segment {
                Segment::Static(literal) => {
                    if !part.eq_ignore_ascii_case(literal) {
                        return None;
                    }
                }
                Segment::Param(name) => params.insert(name, decode_segment(part)),
            }
        }
        Some(params)
    }

    /// Whether every path accepted by `(other, other_kind)` is also accepted
    /// by `(self, kind)`.
    fn covers(&self, kind: MatchKind, other: &RoutePattern, other_kind: MatchKind) -> bool {
        let length_ok = match kind {
            MatchKind::Prefix => self.segments.len() <= other.segments.len(),
            MatchKind::Exact => {
                other_kind == MatchKind::Exact && self.segments.len() == other.segments.len()
            }
        };

        length_ok
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|(mine, theirs)| match (mine, theirs) {
                    (Segment::Param(_), _) => true,
                    (Segment::Static(a), Segment::Static(b)) => a == b,
                    (Segment::Static(_), Segment::Param(_)) => false,
                })
    }
}

/// Parameters captured from `:name` segments.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams(BTreeMap<String, String>);

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_string(), value.into());
    }
}

impl<const N: usize> From<[(&str, &str); N]> for RouteParams {
    fn from(pairs: [(&str, &str); N]) -> Self {
        let mut params = Self::default();
        for (name, value) in pairs {
            params.insert(name, value);
        }
        params
    }
}

/// A single row of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub pattern: RoutePattern,
    pub kind: MatchKind,
    pub page: PageId,
    /// Lower values are tried first.
    pub priority: u16,
}

impl RouteEntry {
    pub fn exact(pattern: &str, page: PageId, priority: u16) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            kind: MatchKind::Exact,
            page,
            priority,
        }
    }

    pub fn prefix(pattern: &str, page: PageId, priority: u16) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            kind: MatchKind::Prefix,
            page,
            priority,
        }
    }
}

/// Result of resolving a location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub page: PageId,
    /// Pattern of the entry that matched.
    pub pattern: String,
    pub params: RouteParams,
}

/// An entry that can never be selected because an earlier one accepts
/// every path it accepts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShadowedRoute {
    pub pattern: String,
    pub shadowed_by: String,
}

/// Ordered route table.
#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Build a table, ordering entries by priority (stable for ties).
    pub fn new(mut entries: Vec<RouteEntry>) -> Self {
        entries.sort_by_key(|e| e.priority);
        Self { entries }
    }

    /// The dashboard's route table.
    ///
    /// `/` is a prefix entry declared ahead of `/application` (exact), so
    /// the bare `/application` path is served by `/`. Both mount the
    /// services table, which keeps the outcome identical either way;
    /// [`RouteTable::shadowed`] reports the unreachable entry.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteEntry::prefix("/application/:servicename", PageId::ServiceMetrics, 10),
            RouteEntry::prefix("/service-map", PageId::ServiceMap, 20),
            RouteEntry::exact("/traces", PageId::TraceDetail, 30),
            RouteEntry::prefix("/traces/:id", PageId::TraceGraph, 40),
            RouteEntry::exact("/settings", PageId::Settings, 50),
            RouteEntry::exact("/add-instrumentation", PageId::Instrumentation, 60),
            RouteEntry::prefix("/usage-explorer", PageId::UsageExplorer, 70),
            RouteEntry::prefix("/", PageId::ServicesTable, 80),
            RouteEntry::exact("/application", PageId::ServicesTable, 90),
        ])
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// Select the first entry matching `path`.
    pub fn resolve(&self, path: &str) -> Option<RouteMatch> {
        self.entries.iter().find_map(|entry| {
            entry
                .pattern
                .matches(path, entry.kind)
                .map(|params| RouteMatch {
                    page: entry.page,
                    pattern: entry.pattern.as_str().to_string(),
                    params,
                })
        })
    }

    /// Whether some entry was declared with exactly this pattern.
    pub fn declares(&self, pattern: &str) -> bool {
        let wanted = RoutePattern::parse(pattern);
        self.entries.iter().any(|e| e.pattern.segments == wanted.segments)
    }

    /// Entries that can never win because an earlier entry covers them.
    pub fn shadowed(&self) -> Vec<ShadowedRoute> {
        let mut shadowed = Vec::new();
        for (i, later) in self.entries.iter().enumerate() {
            let earlier = self.entries[..i]
                .iter()
                .find(|e| e.pattern.covers(e.kind, &later.pattern, later.kind));
            if let Some(earlier) = earlier {
                shadowed.push(ShadowedRoute {
                    pattern: later.pattern.as_str().to_string(),
                    shadowed_by: earlier.pattern.as_str().to_string(),
                });
            }
        }
        shadowed
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
