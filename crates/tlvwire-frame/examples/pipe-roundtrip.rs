//! Frame a few messages over a socket pair and read them back.
//!
//! Run with: cargo run -p tlvwire-frame --example pipe-roundtrip

use std::os::unix::net::UnixStream;

use tlvwire_frame::{tag, FrameReader, FrameWriter};

fn main() -> tlvwire_frame::Result<()> {
    let (left, right) = UnixStream::pair()?;
    let mut writer = FrameWriter::new(left);
    let mut reader = FrameReader::new(right);

    writer.send(tag::CONTROL, b"hello")?;
    writer.send(tag::DATA, b"some payload bytes")?;
    writer.send(tag::HEARTBEAT, b"")?;
    drop(writer);

    while let Some(frame) = reader.read_frame()? {
        println!(
            "tag={} ({}) len={}",
            frame.tag,
            tag::tag_name(frame.tag),
            frame.payload.len()
        );
    }
    println!("stream finished cleanly");

    Ok(())
}
