use tlvwire_frame::{FrameConfig, FrameReader};

use crate::cmd::{open_input, source_label, UnpackArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::{print_frame, OutputFormat};

pub fn run(args: UnpackArgs, format: OutputFormat) -> CliResult<i32> {
    let source = source_label(&args.input);
    let input = open_input(&args.input)?;

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_frame_size {
        config.max_frame_size = max;
    }
    let mut reader = FrameReader::with_config(input, config);

    let mut printed = 0usize;
    let mut seq = 0usize;

    loop {
        let frame = match reader.read_frame() {
            // Clean end of stream: normal completion.
            Ok(None) => break,
            Ok(Some(frame)) => frame,
            // Anything else is stream-fatal; resynchronizing after a
            // misread length is impossible.
            Err(err) => return Err(frame_error("unpack failed", err)),
        };
        seq += 1;

        if let Some(tags) = &args.tags {
            if !tags.contains(&frame.tag) {
                continue;
            }
        }

        print_frame(&frame, seq, &source, format);
        printed = printed.saturating_add(1);

        if let Some(count) = args.count {
            if printed >= count {
                break;
            }
        }
    }

    tracing::debug!(frames = seq, printed, "unpack complete");
    Ok(SUCCESS)
}
