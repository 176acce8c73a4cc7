use super::*;

#[test]
fn truncated_message_names_path_and_counts() {
    let err = AepError::truncated("root/cdta", 42, 8, 3);
    assert_eq!(
        err.to_string(),
        "truncated data in `root/cdta` at offset 42: need 8 bytes, have 3"
    );
}

#[test]
fn chunk_not_found_message_names_tag_and_container() {
    let err = AepError::chunk_not_found("ldta", "LIST:Layr");
    assert_eq!(
        err.to_string(),
        "required chunk `ldta` not found under `LIST:Layr`"
    );
}

#[test]
fn invalid_magic_lists_both_tags() {
    let err = AepError::InvalidMagic {
        offset: 0,
        expected: *b"RIFX",
        found: *b"RIFF",
    };
    let msg = err.to_string();
    assert!(msg.contains("offset 0"), "{msg}");
    assert!(err.is_fatal());
}

#[test]
fn decode_errors_are_not_fatal() {
    let err = AepError::decode("LIST:Fold/idta", 10, "unknown item type 9");
    assert!(!err.is_fatal());
    assert!(AepError::malformed_cos(3, "unterminated string").is_fatal());
    assert!(AepError::unsupported_value_type("a", "b").is_fatal());
    assert!(AepError::unexpected_chunk("a", 0, "b").is_fatal());
}

#[test]
fn anyhow_errors_convert_transparently() {
    let err: AepError = anyhow::anyhow!("io failed").into();
    assert_eq!(err.to_string(), "io failed");
}
