use std::fs::OpenOptions;
use std::io::Read;

use tlvwire_frame::{FrameConfig, FrameWriter};

use crate::cmd::PackArgs;
use crate::exit::{frame_error, io_error, CliResult, SUCCESS};

pub fn run(args: PackArgs) -> CliResult<i32> {
    let payload = resolve_payload(&args)?;

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_frame_size {
        config.max_frame_size = max;
    }

    match &args.out {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| io_error(&format!("failed opening {}", path.display()), err))?;
            let mut writer = FrameWriter::with_config(file, config);
            writer
                .send(args.tag, &payload)
                .map_err(|err| frame_error("pack failed", err))?;
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = FrameWriter::with_config(stdout.lock(), config);
            writer
                .send(args.tag, &payload)
                .map_err(|err| frame_error("pack failed", err))?;
        }
    }

    tracing::debug!(tag = args.tag, len = payload.len(), "frame packed");
    Ok(SUCCESS)
}

fn resolve_payload(args: &PackArgs) -> CliResult<Vec<u8>> {
    if let Some(data) = &args.data {
        return Ok(data.as_bytes().to_vec());
    }
    if let Some(path) = &args.file {
        if path.as_os_str() == "-" {
            return read_stdin();
        }
        return std::fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    read_stdin()
}

fn read_stdin() -> CliResult<Vec<u8>> {
    let mut payload = Vec::new();
    std::io::stdin()
        .read_to_end(&mut payload)
        .map_err(|err| io_error("failed reading stdin", err))?;
    Ok(payload)
}
