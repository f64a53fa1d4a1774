//! Control frame encoding for MINI RC-style toy quadcopters.
//!
//! Every outbound control packet is an 11-byte frame:
//! - A 1-byte sync marker (0xFF) for stream synchronization
//! - A 1-byte frame-type marker (0x08)
//! - 9 payload bytes for stick axes, trims, a command byte, and a
//!   trailing validation byte
//!
//! Two encoders live here. [`wire`] carries the raw field model and the
//! wide checksum the transmitter derives from it; [`command`] packs scaled
//! stick positions into the complete frame the radio link expects.
//!
//! No I/O, no retained state. Every operation is a pure function over its
//! inputs and is safe to call from any thread.

pub mod command;
pub mod error;
pub mod wire;

pub use command::{
    arm_sequence, control_frame, encode_command, encode_command_into, idle_frame, CommandTrims,
    StickPosition, COMMAND_CONTROL, TAKEOFF_FRAME,
};
pub use error::{FrameError, Result};
pub use wire::{
    checksum_hex, encode_skeleton, frame_skeleton, widen_trim, ControlInputs, TrimInputs,
    AXIS_CENTER, CHECKSUM_BASE, FRAME_LEN, FRAME_TYPE, SYNC_BYTE, TRIM_CENTER, TRIM_MAX,
    TRIM_WIDEN_MASK,
};
