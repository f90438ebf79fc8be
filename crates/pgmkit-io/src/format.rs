//! PGM sub-format detection
//!
//! Detects the PGM sub-format by examining the magic token at the start
//! of the data.

use crate::{IoError, IoResult};

/// Magic tokens for sub-format detection
mod magic {
    /// ASCII PGM: "P2"
    pub const PGM_ASCII: &[u8] = b"P2";

    /// Binary PGM: "P5"
    pub const PGM_BINARY: &[u8] = b"P5";
}

/// PGM sub-format.
///
/// Both sub-formats share the same header layout; they differ only in the
/// payload encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PgmFormat {
    /// P2: decimal sample tokens separated by whitespace
    Ascii,
    /// P5: one raw byte per sample
    Binary,
}

impl PgmFormat {
    /// Get the two-character magic token for this sub-format.
    pub fn magic(self) -> &'static str {
        match self {
            Self::Ascii => "P2",
            Self::Binary => "P5",
        }
    }
}

/// Detect the PGM sub-format from the first bytes of a buffer.
///
/// # Errors
///
/// Returns [`IoError::Format`] if the buffer does not start with a
/// recognized magic token.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<PgmFormat> {
    if data.len() < 2 {
        return Err(IoError::Format(
            "not enough data to detect format".to_string(),
        ));
    }

    match &data[..2] {
        m if m == magic::PGM_ASCII => Ok(PgmFormat::Ascii),
        m if m == magic::PGM_BINARY => Ok(PgmFormat::Binary),
        other => Err(IoError::Format(format!(
            "unrecognized magic token: {:?}",
            String::from_utf8_lossy(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_ascii() {
        assert_eq!(
            detect_format_from_bytes(b"P2\n3 3\n255\n").unwrap(),
            PgmFormat::Ascii
        );
    }

    #[test]
    fn test_detect_binary() {
        assert_eq!(
            detect_format_from_bytes(b"P5\n100 100\n255\n").unwrap(),
            PgmFormat::Binary
        );
    }

    #[test]
    fn test_detect_unknown() {
        assert!(detect_format_from_bytes(b"P6\n2 2\n255\n").is_err());
        assert!(detect_format_from_bytes(b"X").is_err());
    }
}
