#![cfg(all(unix, feature = "cli"))]

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn unique_temp_dir(tag: &str) -> PathBuf {
    let dir = PathBuf::from(format!(
        "/tmp/tlvwire-{tag}-{}-{}",
        std::process::id(),
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .expect("time should be after epoch")
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("temp dir should be creatable");
    dir
}

fn tlvwire(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tlvwire"))
        .args(["--log-level", "error"])
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("tlvwire should run")
}

#[test]
fn pack_then_unpack_roundtrip() {
    let dir = unique_temp_dir("roundtrip");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    for (tag, data) in [("1", "a"), ("2", "bb"), ("3", "ccc")] {
        let out = tlvwire(&["pack", "--tag", tag, "--data", data, "--out", frames_str]);
        assert!(out.status.success(), "pack failed: {out:?}");
        assert!(out.stdout.is_empty());
    }

    let out = tlvwire(&["--format", "json", "unpack", frames_str]);
    assert!(out.status.success(), "unpack failed: {out:?}");

    let stdout = String::from_utf8(out.stdout).expect("json output should be UTF-8");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);

    for (line, (tag, data)) in lines.iter().zip([(1, "a"), (2, "bb"), (3, "ccc")]) {
        let value: serde_json::Value = serde_json::from_str(line).expect("line should be JSON");
        assert_eq!(value["tag"], tag);
        assert_eq!(value["payload"], data);
        assert_eq!(value["payload_size"], data.len());
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_raw_recovers_payload_bytes() {
    let dir = unique_temp_dir("raw");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    let out = tlvwire(&["pack", "--tag", "9", "--data", "opaque", "--out", frames_str]);
    assert!(out.status.success());

    let out = tlvwire(&["--format", "raw", "unpack", frames_str]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"opaque");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_filters_and_limits() {
    let dir = unique_temp_dir("filter");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    for (tag, data) in [("1", "keep-1"), ("2", "drop"), ("1", "keep-2")] {
        let out = tlvwire(&["pack", "--tag", tag, "--data", data, "--out", frames_str]);
        assert!(out.status.success());
    }

    let out = tlvwire(&["--format", "json", "unpack", frames_str, "--tags", "1"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 2);

    let out = tlvwire(&[
        "--format", "json", "unpack", frames_str, "--tags", "1", "--count", "1",
    ]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1);
    assert!(stdout.contains("keep-1"));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_empty_stream_is_clean() {
    let dir = unique_temp_dir("empty");
    let frames = dir.join("frames.bin");
    std::fs::write(&frames, b"").unwrap();

    let out = tlvwire(&["--format", "json", "unpack", frames.to_str().unwrap()]);
    assert!(out.status.success());
    assert!(out.stdout.is_empty());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_truncated_stream_fails() {
    let dir = unique_temp_dir("truncated");
    let frames = dir.join("frames.bin");
    // Tag 1, claimed length 16, only 4 payload bytes.
    std::fs::write(&frames, [&[0x01, 0x10][..], b"part"].concat()).unwrap();

    let out = tlvwire(&["unpack", frames.to_str().unwrap()]);
    assert!(!out.status.success());
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("mid-frame"), "stderr: {stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_malformed_varint_fails_with_data_invalid() {
    let dir = unique_temp_dir("badvarint");
    let frames = dir.join("frames.bin");
    let mut bytes = vec![0x01];
    bytes.extend_from_slice(&[0xff; 11]);
    std::fs::write(&frames, bytes).unwrap();

    let out = tlvwire(&["unpack", frames.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn unpack_oversized_frame_fails_with_data_invalid() {
    let dir = unique_temp_dir("oversized");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    let out = tlvwire(&["pack", "--data", "too big for reader", "--out", frames_str]);
    assert!(out.status.success());

    let out = tlvwire(&["unpack", frames_str, "--max-frame-size", "4"]);
    assert_eq!(out.status.code(), Some(60));

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn pack_rejects_oversized_payload_without_writing() {
    let dir = unique_temp_dir("packsize");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    let out = tlvwire(&[
        "pack",
        "--data",
        "oversized",
        "--max-frame-size",
        "4",
        "--out",
        frames_str,
    ]);
    assert_eq!(out.status.code(), Some(60));
    // The frame was rejected before any byte hit the file.
    assert_eq!(std::fs::metadata(&frames).map(|m| m.len()).unwrap_or(0), 0);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn pack_reads_payload_from_file() {
    let dir = unique_temp_dir("packfile");
    let payload = dir.join("payload.bin");
    let frames = dir.join("frames.bin");
    std::fs::write(&payload, b"from-a-file").unwrap();

    let out = tlvwire(&[
        "pack",
        "--tag",
        "8",
        "--file",
        payload.to_str().unwrap(),
        "--out",
        frames.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let out = tlvwire(&["--format", "raw", "unpack", frames.to_str().unwrap()]);
    assert!(out.status.success());
    assert_eq!(out.stdout, b"from-a-file");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn inspect_summarizes_per_tag() {
    let dir = unique_temp_dir("inspect");
    let frames = dir.join("frames.bin");
    let frames_str = frames.to_str().unwrap();

    for (tag, data) in [("1", "aa"), ("1", "bbbb"), ("2", "c")] {
        let out = tlvwire(&["pack", "--tag", tag, "--data", data, "--out", frames_str]);
        assert!(out.status.success());
    }

    let out = tlvwire(&["--format", "json", "inspect", frames_str]);
    assert!(out.status.success());

    let summary: serde_json::Value =
        serde_json::from_slice(&out.stdout).expect("summary should be JSON");
    assert_eq!(summary["frames"], 3);
    assert_eq!(summary["payload_bytes"], 7);

    let tags = summary["tags"].as_array().expect("tags array");
    assert_eq!(tags.len(), 2);
    assert_eq!(tags[0]["tag"], 1);
    assert_eq!(tags[0]["frames"], 2);
    assert_eq!(tags[0]["min_payload"], 2);
    assert_eq!(tags[0]["max_payload"], 4);
    assert_eq!(tags[1]["tag"], 2);
    assert_eq!(tags[1]["frames"], 1);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn version_prints_package_version() {
    let out = tlvwire(&["version"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
