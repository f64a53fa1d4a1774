//! Packed control commands.
//!
//! The transmitter sends one of these frames per control tick (the stock
//! remote runs at 100Hz). Stick positions arrive as floats in 0.0..=1.0
//! with 0.5 on center, get scaled into the byte ranges the airframe
//! expects, and are packed together with the trim bytes, a command byte,
//! and a trailing end byte.

use bytes::{BufMut, BytesMut};

use crate::error::{FrameError, Result};
use crate::wire::{FRAME_LEN, FRAME_TYPE, SYNC_BYTE, TRIM_CENTER, TRIM_MAX};

/// Command byte for an ordinary control frame.
pub const COMMAND_CONTROL: u8 = 0x01;

/// Base constant of the end-byte sum.
const END_BYTE_BASE: i32 = 0x87;

/// End-byte center offsets: full-range throttle vs. half-range axes.
const THROTTLE_OFFSET: i32 = 0x7F;
const AXIS_OFFSET: i32 = 0x40;

/// The canned takeoff frame. Sent in a loop for the duration of the
/// automatic takeoff; its trailing byte does not follow the control
/// end-byte fold and is kept verbatim.
pub const TAKEOFF_FRAME: [u8; FRAME_LEN] = [
    0xFF, 0x08, 0x7F, 0x40, 0x40, 0x40, 0x90, 0x10, 0x10, 0x41, 0xC7,
];

/// Stick positions as fractions of travel. 0.5 is center on every axis;
/// throttle below 0.5 descends, above ascends. Values outside 0.0..=1.0
/// are pinned during scaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickPosition {
    pub throttle: f64,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
}

impl StickPosition {
    /// All sticks on center.
    pub const CENTER: StickPosition = StickPosition {
        throttle: 0.5,
        pitch: 0.5,
        roll: 0.5,
        yaw: 0.5,
    };
}

impl Default for StickPosition {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Trim rocker bytes as they appear in the packed frame. Same 5-bit range
/// contract as the raw field model: 0x00..=0x1F, 0x10 on the detent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandTrims {
    pub throttle: u8,
    pub pitch: u8,
    pub roll: u8,
}

impl CommandTrims {
    /// All rockers on the center detent.
    pub const CENTER: CommandTrims = CommandTrims {
        throttle: TRIM_CENTER,
        pitch: TRIM_CENTER,
        roll: TRIM_CENTER,
    };

    /// Check every rocker against the 5-bit range.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("throttle", self.throttle),
            ("pitch", self.pitch),
            ("roll", self.roll),
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

impl Default for CommandTrims {
    fn default() -> Self {
        Self::CENTER
    }
}

/// Encode a packed control command.
///
/// Wire format:
/// ```text
/// ┌──────┬──────┬──────────┬─────┬───────┬──────┬─────────────────┬─────────┬──────────┐
/// │ Sync │ Type │ Throttle │ Yaw │ Pitch │ Roll │ Trims (thr/p/r) │ Command │ End byte │
/// │ 0xFF │ 0x08 │ (1B)     │ (1B)│ (1B)  │ (1B) │ (3B)            │ (1B)    │ (1B)     │
/// └──────┴──────┴──────────┴─────┴───────┴──────┴─────────────────┴─────────┴──────────┘
/// ```
pub fn encode_command(
    sticks: &StickPosition,
    trims: &CommandTrims,
    command: u8,
) -> [u8; FRAME_LEN] {
    let throttle = scale_throttle(sticks.throttle);
    let yaw = scale_axis(sticks.yaw);
    let pitch = scale_axis(sticks.pitch);
    let roll = scale_axis(sticks.roll);
    let end = end_byte(throttle, yaw, pitch, roll, trims, command);

    [
        SYNC_BYTE,
        FRAME_TYPE,
        throttle,
        yaw,
        pitch,
        roll,
        trims.throttle,
        trims.pitch,
        trims.roll,
        command,
        end,
    ]
}

/// Append a packed control command to a buffer.
pub fn encode_command_into(
    sticks: &StickPosition,
    trims: &CommandTrims,
    command: u8,
    dst: &mut BytesMut,
) {
    dst.reserve(FRAME_LEN);
    dst.put_slice(&encode_command(sticks, trims, command));
}

/// A control frame with centered trims and the plain control command byte.
pub fn control_frame(sticks: &StickPosition) -> [u8; FRAME_LEN] {
    encode_command(sticks, &CommandTrims::CENTER, COMMAND_CONTROL)
}

/// The idle frame: all sticks centered. Sending these is what makes the
/// airframe acknowledge a new controller before takeoff or arming.
pub fn idle_frame() -> [u8; FRAME_LEN] {
    control_frame(&StickPosition::CENTER)
}

/// The manual-arm sequence: full throttle followed by center. The motors
/// spin up after the second frame; the airframe disarms again unless a
/// climb-rate throttle follows shortly.
pub fn arm_sequence() -> [[u8; FRAME_LEN]; 2] {
    [
        control_frame(&StickPosition {
            throttle: 1.0,
            ..StickPosition::CENTER
        }),
        idle_frame(),
    ]
}

/// Throttle uses the full byte range: 0.0 maps to 0x00, 1.0 to 0xFF.
fn scale_throttle(value: f64) -> u8 {
    let scaled = 255.0 * value;
    if scaled > 255.0 {
        0xFF
    } else if scaled < 0.0 {
        0x00
    } else {
        scaled as u8
    }
}

/// The attitude axes use half the range, pinned to 0x7F just below the
/// top so a full deflection never collides with the sync byte value.
fn scale_axis(value: f64) -> u8 {
    let scaled = 128.0 * value;
    if scaled >= 126.0 {
        0x7F
    } else if scaled < 0.0 {
        0x00
    } else {
        scaled as u8
    }
}

/// The end byte: every scaled field's offset from its center, summed onto
/// a base constant, folded back into one byte. Negative sums negate;
/// sums past 0xFF wrap down by 0x100.
fn end_byte(throttle: u8, yaw: u8, pitch: u8, roll: u8, trims: &CommandTrims, command: u8) -> u8 {
    let trim_center = i32::from(TRIM_CENTER);
    let sum = END_BYTE_BASE
        + (THROTTLE_OFFSET - i32::from(throttle))
        + (AXIS_OFFSET - i32::from(yaw))
        + (AXIS_OFFSET - i32::from(pitch))
        + (AXIS_OFFSET - i32::from(roll))
        + (trim_center - i32::from(trims.throttle))
        + (trim_center - i32::from(trims.roll))
        + (trim_center - i32::from(trims.pitch))
        + (i32::from(COMMAND_CONTROL) - i32::from(command));

    let folded = if sum < 0 {
        -sum
    } else if sum > 0xFF {
        sum - 0x100
    } else {
        sum
    };
    folded as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: [u8; FRAME_LEN] = [
        0xFF, 0x08, 0x7F, 0x40, 0x40, 0x40, 0x10, 0x10, 0x10, 0x01, 0x87,
    ];

    #[test]
    fn idle_frame_bytes() {
        assert_eq!(idle_frame(), IDLE);
        assert_eq!(control_frame(&StickPosition::CENTER), IDLE);
    }

    #[test]
    fn full_throttle_end_byte() {
        let frame = control_frame(&StickPosition {
            throttle: 1.0,
            ..StickPosition::CENTER
        });
        assert_eq!(frame[2], 0xFF);
        assert_eq!(frame[10], 0x07);
    }

    #[test]
    fn zero_throttle_wraps_end_byte_past_ff() {
        let frame = control_frame(&StickPosition {
            throttle: 0.0,
            ..StickPosition::CENTER
        });
        assert_eq!(frame[2], 0x00);
        assert_eq!(frame[10], 0x06);
    }

    #[test]
    fn negative_end_byte_sum_negates() {
        // A large command byte drives the sum negative: 0x87 + (0x01 - 0xF0).
        let frame = encode_command(&StickPosition::CENTER, &CommandTrims::CENTER, 0xF0);
        assert_eq!(frame[9], 0xF0);
        assert_eq!(frame[10], 0x68);
    }

    #[test]
    fn axis_scaling_pins() {
        let frame = control_frame(&StickPosition {
            throttle: 2.0,
            pitch: 1.0,
            roll: -0.25,
            yaw: 0.99,
        });
        assert_eq!(frame[2], 0xFF); // throttle pinned high
        assert_eq!(frame[3], 0x7F); // yaw 126.72 >= 126 pins to 0x7F
        assert_eq!(frame[4], 0x7F); // pitch pinned below the sync value
        assert_eq!(frame[5], 0x00); // roll pinned low
    }

    #[test]
    fn axis_scaling_truncates() {
        let frame = control_frame(&StickPosition {
            pitch: 0.9,
            ..StickPosition::CENTER
        });
        assert_eq!(frame[4], 115); // 128 * 0.9 = 115.2
    }

    #[test]
    fn frame_markers_present() {
        let frame = encode_command(
            &StickPosition::CENTER,
            &CommandTrims {
                throttle: 0x00,
                pitch: 0x1F,
                roll: 0x10,
            },
            COMMAND_CONTROL,
        );
        assert_eq!(frame.len(), FRAME_LEN);
        assert_eq!(frame[0], SYNC_BYTE);
        assert_eq!(frame[1], FRAME_TYPE);
    }

    #[test]
    fn trim_bytes_pack_in_order() {
        let trims = CommandTrims {
            throttle: 0x01,
            pitch: 0x02,
            roll: 0x03,
        };
        let frame = encode_command(&StickPosition::CENTER, &trims, COMMAND_CONTROL);
        assert_eq!(&frame[6..9], &[0x01, 0x02, 0x03]);
    }

    #[test]
    fn arm_sequence_frames() {
        let [spin_up, settle] = arm_sequence();
        assert_eq!(spin_up[2], 0xFF);
        assert_eq!(settle, IDLE);
    }

    #[test]
    fn takeoff_frame_shape() {
        assert_eq!(TAKEOFF_FRAME.len(), FRAME_LEN);
        assert_eq!(TAKEOFF_FRAME[0], SYNC_BYTE);
        assert_eq!(TAKEOFF_FRAME[1], FRAME_TYPE);
        assert_eq!(TAKEOFF_FRAME[10], 0xC7);
    }

    #[test]
    fn encode_into_appends() {
        let mut buf = BytesMut::new();
        encode_command_into(
            &StickPosition::CENTER,
            &CommandTrims::CENTER,
            COMMAND_CONTROL,
            &mut buf,
        );
        encode_command_into(
            &StickPosition::CENTER,
            &CommandTrims::CENTER,
            COMMAND_CONTROL,
            &mut buf,
        );
        assert_eq!(buf.len(), 2 * FRAME_LEN);
        assert_eq!(&buf[..FRAME_LEN], IDLE.as_slice());
    }

    #[test]
    fn command_trim_validation() {
        assert!(CommandTrims::CENTER.validate().is_ok());
        let err = CommandTrims {
            throttle: 0x10,
            pitch: 0x90,
            roll: 0x10,
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            crate::error::FrameError::TrimOutOfRange { name: "pitch", .. }
        ));
    }
}
