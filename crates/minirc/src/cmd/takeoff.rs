use minirc_frame::TAKEOFF_FRAME;

use crate::cmd::TakeoffArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(_args: TakeoffArgs, format: OutputFormat) -> CliResult<i32> {
    print_frame(&TAKEOFF_FRAME, None, format);
    Ok(SUCCESS)
}
