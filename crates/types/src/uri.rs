//! # URIs
//!
//! Validated URI newtypes and the source classification they support.
//!
//! This crate only stores and classifies URIs; dereferencing them
//! (content retrieval, chain lookup) is strictly external.

use thiserror::Error;

/// Error produced when a string is not a valid absolute URI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{0}` is not a valid absolute URI")]
pub struct InvalidUri(pub String);

/// Identifies a blockchain or network.
///
/// Used only as a deployment grouping key; never dereferenced.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainUri(pub(crate) String);

/// Identifies externally retrievable content, e.g. source code or a
/// dependency manifest.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContentUri(pub(crate) String);

impl ChainUri {
    /// The URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the URI, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl ContentUri {
    /// The URI as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the URI, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

/// One entry in a package's sources map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// The source lives at an externally retrievable URI.
    Uri(ContentUri),
    /// The source text is inlined into the manifest.
    Inline(String),
}

impl Source {
    /// Classify a raw source entry.
    ///
    /// A string that parses as a valid absolute URI becomes
    /// [`Source::Uri`]; anything else is retained verbatim as inline
    /// source text. This is the only content-based classification in
    /// the model; classification is attempted, never assumed.
    pub fn classify(source: impl Into<String>) -> Self {
        let source = source.into();
        match source.parse::<ContentUri>() {
            Ok(uri) => Self::Uri(uri),
            Err(InvalidUri(source)) => Self::Inline(source),
        }
    }

    /// The raw string form, regardless of classification.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Uri(uri) => uri.as_str(),
            Self::Inline(source) => source,
        }
    }
}

/// Check for RFC 3986 absolute-URI shape: an ASCII-alpha led scheme
/// followed by `:`.
pub(crate) fn is_absolute(candidate: &str) -> bool {
    let Some((scheme, _)) = candidate.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_uri() {
        let source = Source::classify("ipfs://QmVu9zuza5mkJwwcFdh2SXBugm1oSgZVuEKkph9XLsbUwg");
        assert!(matches!(source, Source::Uri(_)));
    }

    #[test]
    fn classify_inline() {
        let source = Source::classify("pragma solidity ^0.4.24;");
        assert_eq!(
            source,
            Source::Inline("pragma solidity ^0.4.24;".to_string())
        );
    }

    #[test]
    fn scheme_must_lead_with_alpha() {
        assert!(!is_absolute("0x1234:stuff"));
        assert!(!is_absolute(":no-scheme"));
        assert!(!is_absolute("no colon here"));
        assert!(is_absolute("blockchain://chain/block/b"));
        assert!(is_absolute("ipfs://Qm"));
    }
}
