//! `core::fmt` implementations and related items.

use crate::uri::{ChainUri, ContentUri, InvalidUri};
use core::{fmt, str};

impl fmt::Display for ChainUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl fmt::Display for ContentUri {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.as_str().fmt(f)
    }
}

impl str::FromStr for ChainUri {
    type Err = InvalidUri;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if crate::uri::is_absolute(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidUri(s.to_string()))
        }
    }
}

impl str::FromStr for ContentUri {
    type Err = InvalidUri;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if crate::uri::is_absolute(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidUri(s.to_string()))
        }
    }
}
