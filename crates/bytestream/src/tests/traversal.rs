use alloc::vec;

use rstest::rstest;

use crate::{Buffer, Error};

fn buffer(bytes: &[u8]) -> Buffer<'static> {
    Buffer::from(bytes.to_vec())
}

#[rstest]
#[case(b"@[`{+,AZaz09", b"@[`{+,AZAZ09")]
#[case(b"\0\x7F\xFF", b"\0\x7F\xFF")]
#[case(b"", b"")]
fn map_uppercase(#[case] input: &[u8], #[case] expected: &[u8]) {
    let mut buf = buffer(input);
    buf.map_uppercase();
    assert_eq!(buf.as_slice(), expected);
}

#[rstest]
#[case(b"@[`{+,AZaz09", b"@[`{+,azaz09")]
#[case(b"\0\x7F\xFF", b"\0\x7F\xFF")]
fn map_lowercase(#[case] input: &[u8], #[case] expected: &[u8]) {
    let mut buf = buffer(input);
    buf.map_lowercase();
    assert_eq!(buf.as_slice(), expected);
}

#[test]
fn map_not_twice_is_identity() {
    let mut buf = buffer(b"\x00\x0F\xF0\xFF");
    buf.map_not();
    assert_eq!(buf.as_slice(), b"\xFF\xF0\x0F\x00");
    buf.map_not();
    assert_eq!(buf.as_slice(), b"\x00\x0F\xF0\xFF");
}

#[rstest]
#[case(b"test str", b"teststr")]
#[case(b"\x09\x0A\x0D ", b"")]
#[case(b" a\tb\nc\rd ", b"abcd")]
#[case(b"\x0B\x0C", b"\x0B\x0C")]
fn filter_whitespace(#[case] input: &[u8], #[case] expected: &[u8]) {
    let mut buf = buffer(input);
    let capacity = buf.capacity();
    buf.filter_whitespace();
    assert_eq!(buf.as_slice(), expected);
    assert_eq!(buf.capacity(), capacity);
}

#[test]
fn filter_resets_stale_queue() {
    let mut buf = Buffer::with_len(8).unwrap();
    buf.consume(b"  ab  ", |_| Ok::<_, ()>(())).unwrap();
    assert_eq!(buf.queued(), 6);

    buf.filter_whitespace();
    assert_eq!(buf.as_slice(), b"ab\0\0");
    assert_eq!(buf.queued(), 0);
}

#[rstest]
#[case(b"Test input", 1008)]
#[case(b"", 0)]
#[case(b"\xFF\xFF", 510)]
fn fold_sum(#[case] input: &[u8], #[case] expected: u32) {
    assert_eq!(buffer(input).fold_sum(), Ok(expected));
}

#[test]
#[cfg_attr(miri, ignore)]
fn fold_sum_reports_overflow() {
    let len = (u32::MAX / 255) as usize + 1;
    let buf = Buffer::from(vec![0xFF; len]);
    assert_eq!(buf.fold_sum(), Err(Error::Overflow));
}

#[rstest]
#[case(b"Test input", 38)]
#[case(b"\x00", 0)]
#[case(b"\xFF\x01\x80", 10)]
fn fold_bitcount(#[case] input: &[u8], #[case] expected: u32) {
    assert_eq!(buffer(input).fold_bitcount(), Ok(expected));
}

#[test]
fn fold_stops_at_first_error() {
    let mut seen = 0;
    let result = buffer(b"ab!cd").fold(0usize, |count, byte| {
        seen += 1;
        if byte == b'!' { Err(count) } else { Ok(count + 1) }
    });
    assert_eq!(result, Err(2));
    assert_eq!(seen, 3);
}

#[test]
fn compare_counts_matching_bytes() {
    let left = buffer(b"abcdef");
    let right = buffer(b"abXdYf");
    let matching = left.compare(&right, 0u32, |count, l, r| {
        Ok::<_, Error>(count + u32::from(l == r))
    });
    assert_eq!(matching, Ok(4));
}

#[test]
fn compare_rejects_length_mismatch() {
    let left = buffer(b"abc");
    let right = buffer(b"ab");
    assert_eq!(
        left.compare(&right, (), |(), _, _| Ok::<_, Error>(())),
        Err(Error::LengthMismatch { left: 3, right: 2 })
    );
    assert_eq!(
        left.compare_hamming(&right),
        Err(Error::LengthMismatch { left: 3, right: 2 })
    );
}

#[test]
fn compare_equal_checks_contents() {
    assert!(buffer(b"same").compare_equal(&buffer(b"same")));
    assert!(!buffer(b"same").compare_equal(&buffer(b"Same")));
    assert!(!buffer(b"same").compare_equal(&buffer(b"sam")));
    assert!(Buffer::new().compare_equal(&Buffer::new()));
}

#[rstest]
#[case(b"\xFF", b"\x0F", 4)]
#[case(b"karolin", b"kathrin", 9)]
#[case(b"", b"", 0)]
fn compare_hamming(#[case] left: &[u8], #[case] right: &[u8], #[case] expected: u32) {
    assert_eq!(buffer(left).compare_hamming(&buffer(right)), Ok(expected));
}

#[test]
fn combine_overwrite_cycles_operand() {
    let mut buf = buffer(b"        ");
    buf.combine(&buffer(b"1"), |_, operand| operand).unwrap();
    assert_eq!(buf.as_slice(), b"11111111");
}

#[rstest]
#[case::xor(Buffer::combine_xor, b"\xAB\x98\x89\xCD\x32\x67\x67\x54")]
#[case::or(Buffer::combine_or, b"\xAB\xBB\xCD\xEF\xBB\xEF\xEF\xFF")]
#[case::and(Buffer::combine_and, b"\x00\x23\x44\x22\x89\x88\x88\xAB")]
fn combine_bitwise(
    #[case] op: fn(&mut Buffer<'static>, &Buffer<'_>) -> crate::Result<()>,
    #[case] expected: &[u8],
) {
    let mut buf = buffer(b"\x01\x23\x45\x67\x89\xAB\xCD\xEF");
    op(&mut buf, &buffer(b"\xAA\xBB\xCC")).unwrap();
    assert_eq!(buf.as_slice(), expected);
}

#[test]
fn combine_add_and_sub() {
    let mut buf = buffer(b"1234");
    buf.combine_add(&buffer(b"\x01")).unwrap();
    assert_eq!(buf.as_slice(), b"2345");

    buf.combine_sub(&buffer(b"\x01")).unwrap();
    assert_eq!(buf.as_slice(), b"1234");
}

#[test]
fn combine_arithmetic_wraps() {
    let mut buf = buffer(b"\xFF\x00");
    buf.combine_add(&buffer(b"\x01")).unwrap();
    assert_eq!(buf.as_slice(), b"\x00\x01");

    buf.combine_sub(&buffer(b"\x02")).unwrap();
    assert_eq!(buf.as_slice(), b"\xFE\xFF");
}

#[test]
fn combine_truncates_long_operand() {
    let mut buf = buffer(b"\x00\x00");
    buf.combine_or(&buffer(b"\x01\x02\x03\x04")).unwrap();
    assert_eq!(buf.as_slice(), b"\x01\x02");
}

#[test]
fn combine_rejects_empty_operand() {
    let mut buf = buffer(b"abc");
    assert!(matches!(
        buf.combine_xor(&Buffer::new()),
        Err(Error::InvalidArgument(_))
    ));
    assert_eq!(buf.as_slice(), b"abc");
}
