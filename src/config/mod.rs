//! JSON configuration for command-line tools.
//!
//! Tool configs name the input frame, optionally override detector and
//! overlay parameters, and list the output paths to write.

pub mod demo;
