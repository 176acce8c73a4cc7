use super::*;

#[test]
fn reads_big_endian_integers() {
    let data = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0xff, 0xfe];
    let mut cur = Cursor::new(&data, 0, "test");
    assert_eq!(cur.read_u8().unwrap(), 0x01);
    assert_eq!(cur.read_u16().unwrap(), 0x0203);
    assert_eq!(cur.read_u32().unwrap(), 0x040506ff);
    assert_eq!(cur.read_u8().unwrap(), 0xfe);
    assert!(cur.is_empty());
}

#[test]
fn reads_signed_and_float_values() {
    let mut data = Vec::new();
    data.extend_from_slice(&(-12i16).to_be_bytes());
    data.extend_from_slice(&(-34i32).to_be_bytes());
    data.extend_from_slice(&1.5f32.to_be_bytes());
    data.extend_from_slice(&(-2.25f64).to_be_bytes());
    let mut cur = Cursor::new(&data, 0, "test");
    assert_eq!(cur.read_i16().unwrap(), -12);
    assert_eq!(cur.read_i32().unwrap(), -34);
    assert_eq!(cur.read_f32().unwrap(), 1.5);
    assert_eq!(cur.read_f64().unwrap(), -2.25);
}

#[test]
fn read_f64s_reads_consecutive_values() {
    let mut data = Vec::new();
    for v in [1.0f64, 2.0, 3.0] {
        data.extend_from_slice(&v.to_be_bytes());
    }
    let mut cur = Cursor::new(&data, 0, "test");
    assert_eq!(cur.read_f64s(3).unwrap(), vec![1.0, 2.0, 3.0]);
}

#[test]
fn take_and_skip_advance_position() {
    let data = [1, 2, 3, 4, 5];
    let mut cur = Cursor::new(&data, 100, "test");
    cur.skip(2).unwrap();
    assert_eq!(cur.position(), 2);
    assert_eq!(cur.offset(), 102);
    assert_eq!(cur.take(2).unwrap(), &[3, 4]);
    assert_eq!(cur.remaining(), 1);
}

#[test]
fn read_past_end_reports_truncation_with_offsets() {
    let data = [1, 2];
    let mut cur = Cursor::new(&data, 50, "LIST:Fold/cdta");
    cur.skip(1).unwrap();
    let err = cur.read_u32().unwrap_err();
    match err {
        AepError::Truncated {
            path,
            offset,
            need,
            have,
        } => {
            assert_eq!(path, "LIST:Fold/cdta");
            assert_eq!(offset, 51);
            assert_eq!(need, 4);
            assert_eq!(have, 1);
        }
        other => panic!("expected Truncated, got {other:?}"),
    }
}

#[test]
fn cp1250_field_stops_at_nul_padding() {
    let mut data = *b"Solid 1\0\0\0\0\0";
    data[7] = 0;
    let mut cur = Cursor::new(&data, 0, "test");
    assert_eq!(cur.read_cp1250(12).unwrap(), "Solid 1");
    assert!(cur.is_empty());
}

#[test]
fn cp1250_decodes_non_ascii_bytes() {
    // 0xE9 is e-acute in windows-1250
    let data = [b'c', b'a', b'f', 0xe9];
    assert_eq!(decode_cp1250(&data), "caf\u{e9}");
}

#[test]
fn cp1250_to_nul_consumes_terminator() {
    let data = b"group\0tail";
    let mut cur = Cursor::new(data, 0, "test");
    assert_eq!(cur.read_cp1250_to_nul().unwrap(), "group");
    assert_eq!(cur.take(4).unwrap(), b"tail");
}
