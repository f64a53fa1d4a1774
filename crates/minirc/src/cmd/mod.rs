use clap::{Args, Subcommand};

use minirc_frame::{ControlInputs, TrimInputs};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod checksum;
pub mod control;
pub mod envinfo;
pub mod frame;
pub mod takeoff;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the checksum over a set of control values.
    Checksum(ChecksumArgs),
    /// Emit the fixed frame skeleton and its checksum.
    Frame(FrameArgs),
    /// Encode a packed control command from stick positions.
    Control(ControlArgs),
    /// Emit the canned takeoff frame.
    Takeoff(TakeoffArgs),
    /// Show version information.
    Version(VersionArgs),
    /// Print build and environment diagnostics.
    Envinfo(EnvinfoArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Checksum(args) => checksum::run(args, format),
        Command::Frame(args) => frame::run(args, format),
        Command::Control(args) => control::run(args, format),
        Command::Takeoff(args) => takeoff::run(args, format),
        Command::Version(args) => version::run(args),
        Command::Envinfo(args) => envinfo::run(args, format),
    }
}

/// Raw control fields shared by `checksum` and `frame`. Values accept
/// decimal or 0x-prefixed hex; defaults are the centered transmitter.
#[derive(Args, Debug)]
pub struct ControlValueArgs {
    /// Flags byte (opaque payload bits).
    #[arg(long, value_parser = parse_byte, default_value = "0x01")]
    pub flags: u8,
    /// Yaw axis (0x00-0xff, center 0x64).
    #[arg(long, value_parser = parse_byte, default_value = "0x64")]
    pub yaw: u8,
    /// Throttle axis (0x00-0xff, center 0x64).
    #[arg(long, value_parser = parse_byte, default_value = "0x64")]
    pub throttle: u8,
    /// Roll axis (0x00-0xff, center 0x64).
    #[arg(long, value_parser = parse_byte, default_value = "0x64")]
    pub roll: u8,
    /// Pitch axis (0x00-0xff, center 0x64).
    #[arg(long, value_parser = parse_byte, default_value = "0x64")]
    pub pitch: u8,
    /// Left trim rocker (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub left_trim: u8,
    /// Right trim rocker (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub right_trim: u8,
    /// Rudder trim rocker (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub rudder_trim: u8,
}

impl ControlValueArgs {
    pub fn to_inputs(&self) -> ControlInputs {
        ControlInputs {
            flags: self.flags,
            yaw: self.yaw,
            throttle: self.throttle,
            roll: self.roll,
            pitch: self.pitch,
            trim: TrimInputs {
                left: self.left_trim,
                right: self.right_trim,
                rudder: self.rudder_trim,
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct ChecksumArgs {
    #[command(flatten)]
    pub values: ControlValueArgs,
    /// Skip trim range validation.
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Args, Debug)]
pub struct FrameArgs {
    #[command(flatten)]
    pub values: ControlValueArgs,
    /// Skip trim range validation.
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Args, Debug)]
pub struct ControlArgs {
    /// Throttle stick, 0.0-1.0 (0.5 holds altitude).
    #[arg(long, default_value_t = 0.5)]
    pub throttle: f64,
    /// Pitch stick, 0.0-1.0 (0.5 on center).
    #[arg(long, default_value_t = 0.5)]
    pub pitch: f64,
    /// Roll stick, 0.0-1.0 (0.5 on center).
    #[arg(long, default_value_t = 0.5)]
    pub roll: f64,
    /// Yaw stick, 0.0-1.0 (0.5 on center).
    #[arg(long, default_value_t = 0.5)]
    pub yaw: f64,
    /// Throttle trim byte (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub throttle_trim: u8,
    /// Pitch trim byte (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub pitch_trim: u8,
    /// Roll trim byte (0x00-0x1f).
    #[arg(long, value_parser = parse_byte, default_value = "0x10")]
    pub roll_trim: u8,
    /// Command byte.
    #[arg(long, value_parser = parse_byte, default_value = "0x01")]
    pub command: u8,
    /// Skip trim range validation.
    #[arg(long)]
    pub unchecked: bool,
}

#[derive(Args, Debug, Default)]
pub struct TakeoffArgs {}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

#[derive(Args, Debug, Default)]
pub struct EnvinfoArgs {}

pub(crate) fn parse_byte(input: &str) -> Result<u8, String> {
    let input = input.trim();
    let parsed = if let Some(hex) = input.strip_prefix("0x").or_else(|| input.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else {
        input.parse()
    };
    parsed.map_err(|_| format!("expected a byte value (0-255 or 0x00-0xff), got {input:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_byte_accepts_both_radixes() {
        assert_eq!(parse_byte("100").unwrap(), 100);
        assert_eq!(parse_byte("0x64").unwrap(), 0x64);
        assert_eq!(parse_byte("0X1F").unwrap(), 0x1F);
        assert_eq!(parse_byte(" 0xff ").unwrap(), 0xFF);
    }

    #[test]
    fn parse_byte_rejects_oversized_values() {
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0x100").is_err());
        assert!(parse_byte("banana").is_err());
    }
}
