//! Error type shared by the detector and its I/O helpers.
//!
//! Only malformed input is an error. A frame in which no lane pair can be
//! fitted is a regular outcome and is reported as
//! [`LaneResult::NOT_FOUND`](crate::types::LaneResult::NOT_FOUND).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaneError {
    #[error("invalid frame {width}x{height}: both sides must be at least {min_side} px")]
    InvalidFrame {
        width: u32,
        height: u32,
        min_side: u32,
    },

    #[error("failed to read image {}: {source}", path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to write image {}: {source}", path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, LaneError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_frame_message_names_dimensions() {
        let err = LaneError::InvalidFrame {
            width: 1,
            height: 1,
            min_side: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains("1x1"), "unexpected message: {msg}");
        assert!(msg.contains("3 px"), "unexpected message: {msg}");
    }

    #[test]
    fn io_error_keeps_source() {
        let err = LaneError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.to_string().contains("missing.json"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
