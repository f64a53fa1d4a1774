use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};

/// Total frame size on the wire: sync (1) + frame type (1) + payload (9).
pub const FRAME_LEN: usize = 11;

/// Sync marker, byte 0 of every frame.
pub const SYNC_BYTE: u8 = 0xFF;

/// Frame-type marker, byte 1 of every frame.
pub const FRAME_TYPE: u8 = 0x08;

/// Base constant the checksum subtracts every field from.
pub const CHECKSUM_BASE: i64 = 0x8FF;

/// Mask OR-ed onto the widened left trim. Forces bits 7 and up to 1, so
/// the widened value is always negative and bit 7 of the input never
/// reaches the sum.
pub const TRIM_WIDEN_MASK: u64 = 0xFFFF_FFFF_FFFF_FF80;

/// Largest trim offset the transmitter's 5-bit trim field can carry.
pub const TRIM_MAX: u8 = 0x1F;

/// Trim rocker center detent.
pub const TRIM_CENTER: u8 = 0x10;

/// Stick axis center value.
pub const AXIS_CENTER: u8 = 0x64;

/// Trim rocker positions. Valid range is 0x00..=[`TRIM_MAX`]; values
/// outside it are a caller error, not clamped here. [`TrimInputs::validate`]
/// reports them, the arithmetic below accepts them as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrimInputs {
    pub left: u8,
    pub right: u8,
    pub rudder: u8,
}

impl TrimInputs {
    /// All rockers on the center detent.
    pub const CENTER: TrimInputs = TrimInputs {
        left: TRIM_CENTER,
        right: TRIM_CENTER,
        rudder: TRIM_CENTER,
    };

    /// Check every rocker against the 5-bit range.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("rudder", self.rudder),
        ] {
            if value > TRIM_MAX {
                return Err(FrameError::TrimOutOfRange {
                    name,
                    value,
                    max: TRIM_MAX,
                });
            }
        }
        Ok(())
    }
}

impl Default for TrimInputs {
    fn default() -> Self {
        Self::CENTER
    }
}

/// One transmitter's worth of raw control fields.
///
/// The flags byte is opaque payload; no bit of it is interpreted here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlInputs {
    pub flags: u8,
    pub yaw: u8,
    pub throttle: u8,
    pub roll: u8,
    pub pitch: u8,
    pub trim: TrimInputs,
}

impl ControlInputs {
    /// Checksum over all fields: [`CHECKSUM_BASE`] minus each field in
    /// turn, with the left trim widened through [`widen_trim`] first.
    /// Evaluated in i64 throughout, so the subtraction chain cannot
    /// overflow. The result is not truncated to a byte; callers that want
    /// one use [`checksum_byte`](Self::checksum_byte).
    pub fn checksum(&self) -> i64 {
        CHECKSUM_BASE
            - i64::from(self.flags)
            - i64::from(self.yaw)
            - i64::from(self.throttle)
            - i64::from(self.roll)
            - i64::from(self.pitch)
            - widen_trim(self.trim.left)
            - i64::from(self.trim.rudder)
            - i64::from(self.trim.right)
    }

    /// The checksum's low byte.
    pub fn checksum_byte(&self) -> u8 {
        (self.checksum() & 0xFF) as u8
    }

    /// Validate the trim fields. The axes and flags have no invalid
    /// values.
    pub fn validate(&self) -> Result<()> {
        self.trim.validate()
    }
}

impl Default for ControlInputs {
    /// Centered sticks, centered trims, flags bit 0 set.
    fn default() -> Self {
        Self {
            flags: 0x01,
            yaw: AXIS_CENTER,
            throttle: AXIS_CENTER,
            roll: AXIS_CENTER,
            pitch: AXIS_CENTER,
            trim: TrimInputs::CENTER,
        }
    }
}

/// Widen the left trim byte for the checksum sum.
///
/// The byte is zero-extended to 64 bits, then OR-ed with
/// [`TRIM_WIDEN_MASK`] and reinterpreted as signed. Only bits 0-6 of the
/// input survive; the mask overwrites bit 7 and everything above it, so
/// the result is negative for every input.
pub fn widen_trim(left_trim: u8) -> i64 {
    (u64::from(left_trim) | TRIM_WIDEN_MASK) as i64
}

/// The fixed frame skeleton: sync and frame-type markers followed by nine
/// zero bytes. Field values and the checksum are not folded into it; the
/// checksum travels as a separate output.
pub fn frame_skeleton() -> [u8; FRAME_LEN] {
    let mut frame = [0u8; FRAME_LEN];
    frame[0] = SYNC_BYTE;
    frame[1] = FRAME_TYPE;
    frame
}

/// Append the frame skeleton to a buffer.
pub fn encode_skeleton(dst: &mut BytesMut) {
    dst.reserve(FRAME_LEN);
    dst.put_slice(&frame_skeleton());
}

/// Format a checksum the way the transmitter tooling prints it: lowercase
/// hex, no padding, no prefix.
pub fn checksum_hex(value: i64) -> String {
    format!("{value:x}")
}
