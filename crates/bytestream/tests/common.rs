#![allow(missing_docs, dead_code)]

use core::fmt::Write;

use bytestream::Buffer;

/// An HTTP request head split at awkward points.
pub const STREAM: [&[u8]; 4] = [
    b"GET /ind",
    b"ex.html HTTP/1.1\r\n",
    b"Host: ex",
    b"ample.com\r\n\r\n",
];

/// Streams `chunks` through a `window`-byte buffer and records every handler
/// call and the queue length after each chunk.
pub fn transcript(window: usize, chunks: &[&[u8]]) -> String {
    let mut buf = Buffer::with_len(window).expect("window allocation");
    let mut out = String::new();

    for chunk in chunks {
        buf.consume(chunk, |w| {
            writeln!(out, "window {:?}", String::from_utf8_lossy(w.as_slice()))
        })
        .expect("consume");
        writeln!(out, "queued {}", buf.queued()).unwrap();
    }
    buf.flush(|w| writeln!(out, "flush  {:?}", String::from_utf8_lossy(w.as_slice())))
        .expect("flush");

    out
}
