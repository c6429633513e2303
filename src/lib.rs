// Decoder for `Err1:` lines, error text logged as space separated hex
// code points, e.g. `Err1:48 65 6c 6c 6f` for `Hello`.

pub mod error;
pub mod scan;

pub use error::{DecodeError, Error, Result};
pub use scan::{decode_file, decode_lines, ScanSummary};

pub const PREFIX: &str = "Err1:";

/// Returns whatever follows `Err1:` on a matching line, after trimming
/// the line. Non-matching lines give `None`.
pub fn match_payload(line: &str) -> Option<&str> {
    line.trim().strip_prefix(PREFIX)
}

/// One token is one code point in base 16, with an optional `0x`.
pub fn decode_token(token: &str) -> std::result::Result<char, DecodeError> {
    if token.is_empty() {
        return Err(DecodeError::EmptyToken);
    }
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    // Deliberately strict: bare hex digits only, so a sign, '_' separators
    // or embedded whitespace are rejected rather than tolerated
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DecodeError::InvalidHex {
            token: token.to_owned(),
        });
    }
    let code_point = u32::from_str_radix(digits, 16).map_err(|_| DecodeError::InvalidHex {
        token: token.to_owned(),
    })?;
    char::from_u32(code_point).ok_or_else(|| DecodeError::InvalidCodePoint {
        token: token.to_owned(),
        code_point,
    })
}

pub fn decode_payload(payload: &str) -> std::result::Result<String, DecodeError> {
    if payload.is_empty() {
        return Ok(String::new());
    }
    payload.split(' ').map(decode_token).collect()
}

/// `Ok(None)` for lines that are not `Err1:` lines.
pub fn decode_line(line: &str) -> std::result::Result<Option<String>, DecodeError> {
    match_payload(line).map(decode_payload).transpose()
}

#[test]
fn decodes_hello() {
    assert_eq!(
        decode_line("Err1:48 65 6c 6c 6f").unwrap().as_deref(),
        Some("Hello")
    );
    assert_eq!(
        decode_line("  Err1:48 65 6C 6C 6F \r").unwrap().as_deref(),
        Some("Hello")
    );
}

#[test]
fn empty_payload_is_empty_line() {
    assert_eq!(decode_line("Err1:").unwrap().as_deref(), Some(""));
    assert_eq!(decode_line("Err1:   ").unwrap().as_deref(), Some(""));
}

#[test]
fn non_matching_lines() {
    for line in [
        "",
        "hello world",
        "err1:48",
        "Err2:48 65",
        "Err1 :48",
        "x Err1:48",
        "Err:48",
    ] {
        assert_eq!(decode_line(line).unwrap(), None, "{line:?}");
    }
}

#[test]
fn tokens() {
    assert_eq!(decode_token("41").unwrap(), 'A');
    assert_eq!(decode_token("0x41").unwrap(), 'A');
    assert_eq!(decode_token("0X7e").unwrap(), '~');
    assert_eq!(decode_token("a").unwrap(), '\n');
    assert_eq!(decode_token("00e9").unwrap(), 'é');
    assert_eq!(decode_token("1f600").unwrap(), '😀');
}

#[test]
fn bad_tokens() {
    assert_eq!(decode_token(""), Err(DecodeError::EmptyToken));
    for token in ["zz", "+41", "-1", "4 1", "4_1", "\t41", "0x", "0xg1", "ffffffffff"] {
        assert!(
            matches!(decode_token(token), Err(DecodeError::InvalidHex { .. })),
            "{token:?} -> {:?}",
            decode_token(token)
        );
    }
    assert_eq!(
        decode_token("d800"),
        Err(DecodeError::InvalidCodePoint {
            token: "d800".into(),
            code_point: 0xd800
        })
    );
    assert!(matches!(
        decode_token("110000"),
        Err(DecodeError::InvalidCodePoint { code_point: 0x110000, .. })
    ));
}

#[test]
fn strict_payloads() {
    // Doubled or leading spaces leave empty tokens behind
    assert_eq!(decode_line("Err1:48  65"), Err(DecodeError::EmptyToken));
    assert_eq!(decode_line("Err1: 48"), Err(DecodeError::EmptyToken));
    assert!(decode_line("Err1:48 zz 65").is_err());
}

#[test]
fn monitor_shaped_lines() {
    // The monitor writes "%02x " per byte, so lines end in a space, and
    // the bytes are a cut-off NMEA sentence, CR included
    assert_eq!(
        decode_line("Err1:24 47 50 47 47 41 2c 0d \n").unwrap().as_deref(),
        Some("$GPGGA,\r")
    );
    // Err2:/Err3: markers have no newline, the next sentence follows
    assert_eq!(decode_line("Err3:$GPGGA,123519,4807.038,N*47").unwrap(), None);
    assert_eq!(decode_line("Err2:Err1:24 ").unwrap(), None);
}
