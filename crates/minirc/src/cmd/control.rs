use minirc_frame::{encode_command, CommandTrims, StickPosition};

use crate::cmd::ControlArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: ControlArgs, format: OutputFormat) -> CliResult<i32> {
    let sticks = StickPosition {
        throttle: args.throttle,
        pitch: args.pitch,
        roll: args.roll,
        yaw: args.yaw,
    };
    let trims = CommandTrims {
        throttle: args.throttle_trim,
        pitch: args.pitch_trim,
        roll: args.roll_trim,
    };

    if let Err(err) = trims.validate() {
        if args.unchecked {
            tracing::warn!(error = %err, "encoding with out-of-range trim");
        } else {
            return Err(frame_error("invalid trim values", err));
        }
    }

    tracing::debug!(?sticks, ?trims, command = args.command, "encoding control frame");
    let frame = encode_command(&sticks, &trims, args.command);
    print_frame(&frame, None, format);
    Ok(SUCCESS)
}
