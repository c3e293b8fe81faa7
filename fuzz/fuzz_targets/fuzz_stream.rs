#![no_main]

use arbitrary::Arbitrary;
use bytestream::Buffer;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    window: u8,
    splits: Vec<u8>,
    payload: &'a [u8],
}

fn stream(input: Input<'_>) {
    let window = usize::from(input.window.max(1));
    let mut buf = Buffer::with_len(window).unwrap();
    let mut seen = Vec::with_capacity(input.payload.len());
    let mut short = 0;

    let mut rest = input.payload;
    let mut splits = input.splits.iter().copied().map(usize::from);
    while !rest.is_empty() {
        let at = splits.next().map_or(rest.len(), |s| 1 + s % rest.len());
        let (chunk, tail) = rest.split_at(at);
        rest = tail;

        buf.consume(chunk, |w| {
            assert_eq!(w.len(), window);
            seen.extend_from_slice(w.as_slice());
            Ok::<_, ()>(())
        })
        .unwrap();
        assert!(buf.queued() < window);
    }

    buf.flush(|w| {
        assert!(w.len() < window);
        short += 1;
        seen.extend_from_slice(w.as_slice());
        Ok::<_, ()>(())
    })
    .unwrap();

    assert_eq!(seen, input.payload);
    assert_eq!(short, usize::from(input.payload.len() % window != 0));
    assert_eq!(buf.queued(), 0);
}

fuzz_target!(|input: Input<'_>| stream(input));
