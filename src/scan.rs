/* Walk a log line by line and print what the `Err1:` lines say */
use super::*;
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use tracing::{debug, trace};

// Example:
// boot ok
// Err1:48 65 6c 6c 6f
// Err1:6e 6f 20 66 69 78

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    pub lines: usize,
    pub decoded: usize,
}

/// Decode every `Err1:` line of `input` into `output`, one line each.
/// Stops at the first line that fails; earlier lines stay written.
pub fn decode_lines<R: BufRead, W: Write>(input: R, mut output: W) -> Result<ScanSummary> {
    let mut summary = ScanSummary::default();

    for (lineno, line) in input.lines().enumerate() {
        let line = line?;
        summary.lines += 1;

        match decode_line(&line) {
            Ok(Some(text)) => {
                debug!(line = lineno + 1, %text, "decoded");
                writeln!(output, "{text}")?;
                summary.decoded += 1;
            }
            Ok(None) => trace!(line = lineno + 1, "skipped"),
            Err(source) => {
                return Err(Error::Decode {
                    line: lineno + 1,
                    source,
                })
            }
        }
    }

    output.flush()?;
    debug!(lines = summary.lines, decoded = summary.decoded, "done");
    Ok(summary)
}

pub fn decode_file<P: AsRef<Path>, W: Write>(path: P, output: W) -> Result<ScanSummary> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening");
    let file = File::open(path)?;
    decode_lines(BufReader::new(file), output)
}

#[test]
fn check_scan() {
    let log = "boot ok
Err1:48 65 6c 6c 6f
  something else
Err1:
Err1:6e 6f 20 66 69 78
";
    let mut out = Vec::new();
    let summary = decode_lines(log.as_bytes(), &mut out).expect("This should have decoded");
    assert_eq!(String::from_utf8(out).unwrap(), "Hello\n\nno fix\n");
    assert_eq!(
        summary,
        ScanSummary {
            lines: 5,
            decoded: 3
        }
    );
}

#[test]
fn nothing_matches() {
    let mut out = Vec::new();
    let summary = decode_lines("a\nb\n\nErr2:41\n".as_bytes(), &mut out).unwrap();
    assert!(out.is_empty());
    assert_eq!(summary.decoded, 0);
}

#[test]
fn stops_at_bad_token() {
    let log = "Err1:41\nErr1:zz\nErr1:42\n";
    let mut out = Vec::new();
    match decode_lines(log.as_bytes(), &mut out) {
        Err(Error::Decode { line, source }) => {
            assert_eq!(line, 2);
            assert_eq!(
                source,
                DecodeError::InvalidHex {
                    token: "zz".into()
                }
            );
        }
        other => panic!("expected a decode error, got {other:?}"),
    }
    assert_eq!(out, b"A\n");
}

#[test]
fn non_utf8_is_io_error() {
    let mut out = Vec::new();
    let err = decode_lines(&b"Err1:41\n\xff\xfe\n"[..], &mut out).unwrap_err();
    assert!(matches!(err, Error::Io(_)), "{err:?}");
}

#[test]
fn missing_file() {
    let mut out = Vec::new();
    let err = decode_file("/nonexistent/err1dec/input.log", &mut out).unwrap_err();
    match err {
        Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected an io error, got {other:?}"),
    }
    assert!(out.is_empty());
}
