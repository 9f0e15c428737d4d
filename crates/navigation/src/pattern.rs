use std::collections::BTreeMap;
use std::fmt;

use shared_types::AppError;

/// Values captured by `:name` and `*name` segments, keyed by name.
pub type RouteParams = BTreeMap<String, String>;

/// Canonical form of a location: query and fragment dropped, empty
/// segments collapsed, no trailing slash, always a leading slash.
///
/// `"/dashboard/?tab=1"` and `"dashboard"` both become `"/dashboard"`.
pub fn normalize_path(raw: &str) -> String {
    let end = raw.find(|c: char| c == '?' || c == '#').unwrap_or(raw.len());
    let segments: Vec<&str> = raw[..end].split('/').filter(|s| !s.is_empty()).collect();
    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
    CatchAll(String),
}

/// A compiled path pattern such as `/referrals/:id` or `/files/*rest`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutePattern {
    raw: String,
    segments: Vec<Segment>,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, AppError> {
        if !pattern.starts_with('/') {
            return Err(AppError::config(format!(
                "route pattern `{pattern}` must start with `/`"
            )));
        }

        let parts: Vec<&str> = pattern.split('/').filter(|s| !s.is_empty()).collect();
        let mut segments = Vec::with_capacity(parts.len());
        for (i, part) in parts.iter().enumerate() {
            let segment = if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(AppError::config(format!(
                        "route pattern `{pattern}` has an unnamed parameter"
                    )));
                }
                Segment::Param(name.to_string())
            } else if let Some(name) = part.strip_prefix('*') {
                if name.is_empty() {
                    return Err(AppError::config(format!(
                        "route pattern `{pattern}` has an unnamed catch-all"
                    )));
                }
                if i + 1 != parts.len() {
                    return Err(AppError::config(format!(
                        "catch-all `*{name}` must be the last segment of `{pattern}`"
                    )));
                }
                Segment::CatchAll(name.to_string())
            } else {
                Segment::Static(part.to_string())
            };
            segments.push(segment);
        }

        Ok(Self {
            raw: normalize_path(pattern),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// True when the pattern has no parameters, so it matches exactly one path.
    pub fn is_literal(&self) -> bool {
        self.segments.iter().all(|s| matches!(s, Segment::Static(_)))
    }

    /// Match `path` (normalized first) and return the captured parameters.
    pub fn matches(&self, path: &str) -> Option<RouteParams> {
        let path = normalize_path(path);
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        let mut params = RouteParams::new();

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Static(expected) => {
                    if parts.get(i) != Some(&expected.as_str()) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    let value = parts.get(i)?;
                    params.insert(name.clone(), (*value).to_string());
                }
                Segment::CatchAll(name) => {
                    let rest = parts.get(i..).unwrap_or_default().join("/");
                    params.insert(name.clone(), rest);
                    return Some(params);
                }
            }
        }

        (parts.len() == self.segments.len()).then_some(params)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
