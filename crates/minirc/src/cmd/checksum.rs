use crate::cmd::ChecksumArgs;
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_checksum, OutputFormat};

pub fn run(args: ChecksumArgs, format: OutputFormat) -> CliResult<i32> {
    let inputs = args.values.to_inputs();
    if let Err(err) = inputs.validate() {
        if args.unchecked {
            tracing::warn!(error = %err, "computing checksum with out-of-range trim");
        } else {
            return Err(frame_error("invalid control values", err));
        }
    }

    tracing::debug!(?inputs, "computing checksum");
    print_checksum(inputs.checksum(), inputs.checksum_byte(), format);
    Ok(SUCCESS)
}
