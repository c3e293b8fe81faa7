#![no_main]

use arbitrary::Arbitrary;
use bytestream::{Buffer, BufferOptions, Error, codec};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    codec: u8,
    max_capacity: Option<u16>,
    previous: &'a [u8],
    text: &'a [u8],
}

fn decode(input: Input<'_>) {
    let codecs: Vec<_> = codec::codecs().collect();
    let codec = codecs[usize::from(input.codec) % codecs.len()];
    let options = BufferOptions {
        max_capacity: input.max_capacity.map(usize::from),
    };

    let mut buf = Buffer::with_options(options);
    if buf.load(input.previous).is_err() {
        return;
    }

    match buf.decode(codec.name(), input.text) {
        Ok(()) => {
            // Whatever decodes must survive a round trip, up to hex case.
            let text = buf.encode_to_string(codec.name()).unwrap();
            let mut again = Buffer::new();
            again.decode(codec.name(), &text).unwrap();
            assert_eq!(again.as_slice(), buf.as_slice());
            assert_eq!(text.len() + 1, buf.encode_size(codec.name()).unwrap());
        }
        Err(Error::InvalidInput(_)) => {
            assert!(buf.is_empty());
            assert_eq!(buf.capacity(), 0);
        }
        Err(Error::OutOfMemory { .. }) => assert_eq!(buf.as_slice(), input.previous),
        Err(err) => panic!("unexpected decode error: {err}"),
    }
}

fuzz_target!(|input: Input<'_>| decode(input));
