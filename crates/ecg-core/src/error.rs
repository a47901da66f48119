//! Error handling for the ECG workspace
//!
//! Decoding has exactly one fatal outcome (no ECG payload anywhere in the
//! input). Everything else the decoder meets is recovered from in place.

use thiserror::Error;

/// Result type alias for ECG operations
pub type EcgResult<T> = Result<T, EcgError>;

/// Fatal decoder outcome
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The whole input was scanned without a single valid ECG payload
    #[error("no valid ECG data found in {bytes_scanned} bytes ({header_rejections} rejected headers, {payload_checksum_failures} bad payloads)")]
    NoEcgData {
        /// Total bytes handed to the decoder
        bytes_scanned: usize,
        /// Sync bytes whose header failed validation
        header_rejections: usize,
        /// ECG payloads discarded for a bad checksum
        payload_checksum_failures: usize,
    },
}

/// Error type for all ECG workspace operations
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EcgError {
    /// Byte stream could not be decoded
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Configuration can never be processed
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration problem
        message: String,
    },

    /// Lead name not one of the twelve standard labels
    #[error("Unknown lead name: {name}")]
    UnknownLead {
        /// Name as supplied by the caller
        name: String,
    },

    /// Sample range outside the recording
    #[error("Invalid sample range {start}..{end} for {len} samples")]
    InvalidRange {
        /// First requested sample
        start: usize,
        /// One past the last requested sample
        end: usize,
        /// Samples available per lead
        len: usize,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Serializer message
        message: String,
    },
}

/// Convenience macro for creating configuration errors
#[macro_export]
macro_rules! config_error {
    ($($arg:tt)*) => {
        $crate::error::EcgError::Configuration {
            message: format!($($arg)*),
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = DecodeError::NoEcgData {
            bytes_scanned: 128,
            header_rejections: 3,
            payload_checksum_failures: 1,
        };
        let display = format!("{}", error);
        assert!(display.contains("no valid ECG data"));
        assert!(display.contains("128"));
        assert!(display.contains("3 rejected headers"));
    }

    #[test]
    fn test_decode_error_wraps_transparently() {
        let inner = DecodeError::NoEcgData {
            bytes_scanned: 0,
            header_rejections: 0,
            payload_checksum_failures: 0,
        };
        let error: EcgError = inner.clone().into();
        assert_eq!(error, EcgError::Decode(inner.clone()));
        assert_eq!(error.to_string(), inner.to_string());
    }

    #[test]
    fn test_config_error_macro() {
        let error = config_error!("sampling rate {} must be positive", -1.0);
        assert_eq!(
            error,
            EcgError::Configuration {
                message: "sampling rate -1 must be positive".to_string()
            }
        );
    }
}
