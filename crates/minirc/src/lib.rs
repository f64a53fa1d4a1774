//! Control frame toolkit for MINI RC-style toy quadcopters.
//!
//! The stock transmitter app drives these airframes with fixed 11-byte
//! command frames. This crate bundles the encoders and, behind the `cli`
//! feature, a command-line harness for producing frames and checksums by
//! hand.
//!
//! # Crate Structure
//!
//! - [`frame`] — Frame and checksum encoding (re-export of `minirc-frame`)

/// Re-export frame types.
pub mod frame {
    pub use minirc_frame::*;
}
