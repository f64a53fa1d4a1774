use minirc_frame::frame_skeleton;

use crate::cmd::FrameArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

/// The skeleton itself is input-independent; the control values only feed
/// the checksum, which travels alongside the frame rather than inside it.
/// Raw output writes the frame bytes only.
pub fn run(args: FrameArgs, format: OutputFormat) -> CliResult<i32> {
    let inputs = args.values.to_inputs();
    if let Err(err) = inputs.validate() {
        if args.unchecked {
            tracing::warn!(error = %err, "encoding with out-of-range trim");
        } else {
            return Err(frame_error("invalid control values", err));
        }
    }

    print_frame(&frame_skeleton(), Some(inputs.checksum()), format);
    Ok(SUCCESS)
}
