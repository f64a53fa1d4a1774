/// Errors reported while building control frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// A trim offset exceeds the 5-bit range the transmitter supports.
    #[error("{name} trim out of range (0x{value:02x}, max 0x{max:02x})")]
    TrimOutOfRange {
        name: &'static str,
        value: u8,
        max: u8,
    },
}

pub type Result<T> = std::result::Result<T, FrameError>;
