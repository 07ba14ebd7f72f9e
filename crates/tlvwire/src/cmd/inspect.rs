use std::collections::BTreeMap;

use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use tlvwire_frame::{tag, FrameConfig, FrameReader};

use crate::cmd::{open_input, InspectArgs};
use crate::exit::{frame_error, CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct TagStats {
    tag: u8,
    tag_name: &'static str,
    frames: usize,
    payload_bytes: usize,
    min_payload: usize,
    max_payload: usize,
}

#[derive(Serialize)]
struct StreamSummary {
    frames: usize,
    payload_bytes: usize,
    tags: Vec<TagStats>,
}

pub fn run(args: InspectArgs, format: OutputFormat) -> CliResult<i32> {
    let input = open_input(&args.input)?;

    let mut config = FrameConfig::default();
    if let Some(max) = args.max_frame_size {
        config.max_frame_size = max;
    }
    let mut reader = FrameReader::with_config(input, config);

    let mut per_tag: BTreeMap<u8, (usize, usize, usize, usize)> = BTreeMap::new();
    let mut frames = 0usize;
    let mut payload_bytes = 0usize;

    loop {
        let frame = match reader.read_frame() {
            Ok(None) => break,
            Ok(Some(frame)) => frame,
            Err(err) => return Err(frame_error("inspect failed", err)),
        };

        frames += 1;
        let len = frame.payload.len();
        payload_bytes += len;

        per_tag
            .entry(frame.tag)
            .and_modify(|(count, bytes, min, max)| {
                *count += 1;
                *bytes += len;
                *min = (*min).min(len);
                *max = (*max).max(len);
            })
            .or_insert((1, len, len, len));
    }

    let summary = StreamSummary {
        frames,
        payload_bytes,
        tags: per_tag
            .into_iter()
            .map(|(t, (count, bytes, min, max))| TagStats {
                tag: t,
                tag_name: tag::tag_name(t),
                frames: count,
                payload_bytes: bytes,
                min_payload: min,
                max_payload: max,
            })
            .collect(),
    };

    print_summary(&summary, format);
    Ok(SUCCESS)
}

fn print_summary(summary: &StreamSummary, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(summary).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TAG", "FRAMES", "BYTES", "MIN", "MAX"]);
            for stats in &summary.tags {
                table.add_row(vec![
                    format!("{} ({})", stats.tag, stats.tag_name),
                    stats.frames.to_string(),
                    stats.payload_bytes.to_string(),
                    stats.min_payload.to_string(),
                    stats.max_payload.to_string(),
                ]);
            }
            println!("{table}");
            println!(
                "{} frames, {} payload bytes",
                summary.frames, summary.payload_bytes
            );
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for stats in &summary.tags {
                println!(
                    "tag={} ({}) frames={} bytes={} min={} max={}",
                    stats.tag,
                    stats.tag_name,
                    stats.frames,
                    stats.payload_bytes,
                    stats.min_payload,
                    stats.max_payload
                );
            }
            println!(
                "{} frames, {} payload bytes",
                summary.frames, summary.payload_bytes
            );
        }
    }
}
