//! Locale-prefixed page routing.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    En,
    #[default]
    Id,
}

pub const SUPPORTED_LOCALES: [Locale; 2] = [Locale::En, Locale::Id];

impl Locale {
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Id => "id",
        }
    }

    /// Locale named by the first path segment, if any.
    pub fn from_path(path: &str) -> Option<Self> {
        let segment = path.trim_start_matches('/').split('/').next()?;
        segment.parse().ok()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownLocale(pub String);

impl fmt::Display for UnknownLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown locale {:?} (expected en or id)", self.0)
    }
}

impl std::error::Error for UnknownLocale {}

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "id" => Ok(Locale::Id),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// Redirect target for a request path, or `None` when the path is served as-is.
///
/// API routes, files with an extension and paths already carrying a locale
/// pass through; everything else gets the default locale prefix.
pub fn localize_path(path: &str) -> Option<String> {
    if path.starts_with("/api") || has_file_extension(path) {
        return None;
    }
    if SUPPORTED_LOCALES
        .iter()
        .any(|locale| path.starts_with(&format!("/{}", locale.code())))
    {
        return None;
    }
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };
    Some(format!("/{}{}", Locale::default().code(), path))
}

fn has_file_extension(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|last| last.contains('.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unprefixed_paths_redirect_to_default_locale() {
        assert_eq!(localize_path("/tracking").as_deref(), Some("/id/tracking"));
        assert_eq!(localize_path("/").as_deref(), Some("/id/"));
    }

    #[test]
    fn prefixed_api_and_file_paths_pass_through() {
        assert_eq!(localize_path("/en/tracking"), None);
        assert_eq!(localize_path("/id"), None);
        assert_eq!(localize_path("/api/track"), None);
        assert_eq!(localize_path("/images/logo.png"), None);
    }

    #[test]
    fn locale_is_read_from_first_segment() {
        assert_eq!(Locale::from_path("/en/tracking"), Some(Locale::En));
        assert_eq!(Locale::from_path("/id"), Some(Locale::Id));
        assert_eq!(Locale::from_path("/tracking"), None);
    }
}
