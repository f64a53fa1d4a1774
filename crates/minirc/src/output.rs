use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use minirc_frame::{checksum_hex, FRAME_LEN};
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ChecksumOutput {
    checksum: String,
    value: i64,
    low_byte: String,
}

pub fn print_checksum(value: i64, low_byte: u8, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = ChecksumOutput {
                checksum: checksum_hex(value),
                value,
                low_byte: format!("{low_byte:02x}"),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CHECKSUM", "VALUE", "LOW BYTE"])
                .add_row(vec![
                    checksum_hex(value),
                    value.to_string(),
                    format!("{low_byte:02x}"),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!(
                "checksum={} value={} low_byte={:02x}",
                checksum_hex(value),
                value,
                low_byte
            );
        }
        OutputFormat::Raw => {
            // The transmitter tooling's textual form: lowercase hex, no
            // padding, no prefix.
            println!("{}", checksum_hex(value));
        }
    }
}

#[derive(Serialize)]
struct FrameOutput {
    frame: String,
    len: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<String>,
}

pub fn print_frame(frame: &[u8; FRAME_LEN], checksum: Option<i64>, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = FrameOutput {
                frame: hex_string(frame, ""),
                len: frame.len(),
                checksum: checksum.map(checksum_hex),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["FRAME", "LEN", "CHECKSUM"])
                .add_row(vec![
                    hex_string(frame, " "),
                    frame.len().to_string(),
                    checksum.map(checksum_hex).unwrap_or_else(|| "-".to_string()),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => match checksum {
            Some(value) => println!(
                "frame={} len={} checksum={}",
                hex_string(frame, " "),
                frame.len(),
                checksum_hex(value)
            ),
            None => println!("frame={} len={}", hex_string(frame, " "), frame.len()),
        },
        OutputFormat::Raw => {
            print_raw(frame);
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

fn hex_string(bytes: &[u8], separator: &str) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect::<Vec<_>>()
        .join(separator)
}
