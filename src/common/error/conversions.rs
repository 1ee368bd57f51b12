//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from internal
//! error types to the unified Error type.

use super::types::Error;
use crate::ooxml::error::OoxmlError;

impl From<OoxmlError> for Error {
    fn from(err: OoxmlError) -> Self {
        match err {
            OoxmlError::Io(e) => Error::Io(e),
            OoxmlError::Xml(s) => Error::Xml(s),
            OoxmlError::Zip(s) => Error::Zip(s),
            OoxmlError::InvalidFormat(s) => Error::Other(s),
            OoxmlError::PartNotFound(s) => Error::Other(format!("part not found: {}", s)),
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::Zip(err.to_string())
    }
}

#[cfg(feature = "remote")]
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::CapabilityUnavailable(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ooxml_errors_keep_their_kind() {
        let err: Error = OoxmlError::Xml("bad".to_string()).into();
        assert!(matches!(err, Error::Xml(ref s) if s == "bad"));

        let err: Error = OoxmlError::Zip("truncated".to_string()).into();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_display_names_the_failure() {
        let err = Error::EnvironmentMismatch("no download directory".to_string());
        assert_eq!(err.to_string(), "Environment mismatch: no download directory");
    }
}
