//! PGM I/O regression test
//!
//! Round-trips both sub-formats, exercises comment and whitespace
//! handling in the header, and checks the specific error for each way a
//! stream can be malformed.

use pgmkit_io::{
    IoError, PgmFormat, detect_format_from_bytes, read_pgm, read_pgm_mem, write_pgm_mem,
};
use pgmkit_test::{RegParams, ramp_raster, uniform_raster};
use std::io::Cursor;

#[test]
fn pgmio_reg() {
    let mut rp = RegParams::new("pgmio");

    // --- Round-trip: both sub-formats, exact ---
    for format in [PgmFormat::Ascii, PgmFormat::Binary] {
        for raster in [ramp_raster(37, 11), uniform_raster(5, 5, 100)] {
            let bytes = write_pgm_mem(&raster, format).expect("encode");
            assert_eq!(detect_format_from_bytes(&bytes).unwrap(), format);

            let (decoded, informat) = read_pgm_mem(&bytes).expect("decode");
            rp.compare_values(
                1.0,
                if informat == format { 1.0 } else { 0.0 },
                0.0,
            );
            rp.compare_raster(&raster, &decoded);
        }
    }

    // --- Reader entry point behaves like the in-memory one ---
    let raster = ramp_raster(16, 4);
    let bytes = write_pgm_mem(&raster, PgmFormat::Binary).expect("encode");
    let (decoded, _) = read_pgm(Cursor::new(&bytes)).expect("decode from reader");
    rp.compare_raster(&raster, &decoded);

    assert!(rp.cleanup(), "pgmio regression test failed");
}

#[test]
fn test_ascii_payload_layout() {
    // Space between row neighbors, newline after each row's last value.
    let raster = pgmkit_core::Raster::from_samples(3, 2, vec![0, 1, 2, 3, 4, 5]).unwrap();
    let bytes = write_pgm_mem(&raster, PgmFormat::Ascii).unwrap();
    assert_eq!(&bytes, b"P2\n3 2\n255\n0 1 2\n3 4 5\n");
}

#[test]
fn test_comments_before_every_header_field() {
    let data = b"# created by pgmkit\nP2\n# dimensions follow\n2 2\n# ceiling\n255\n10 20\n30 40\n";
    let (raster, format) = read_pgm_mem(data).unwrap();
    assert_eq!(format, PgmFormat::Ascii);
    assert_eq!(raster.samples(), &[10, 20, 30, 40]);
}

#[test]
fn test_many_consecutive_comment_lines() {
    // The comment skipper is iterative, so a pathological number of
    // consecutive comment lines must not exhaust the stack.
    let mut data = Vec::new();
    for i in 0..10_000 {
        data.extend_from_slice(format!("# comment line {i}\n").as_bytes());
    }
    data.extend_from_slice(b"P2\n1 1\n255\n200\n");

    let (raster, _) = read_pgm_mem(&data).unwrap();
    assert_eq!(raster.samples(), &[200]);
}

#[test]
fn test_unrecognized_magic() {
    let result = read_pgm_mem(b"P6\n2 2\n255\n");
    assert!(matches!(result, Err(IoError::Format(_))));
}

#[test]
fn test_unparsable_header_token() {
    let result = read_pgm_mem(b"P2\ntwo 2\n255\n1 2\n");
    assert!(matches!(result, Err(IoError::Format(_))));

    let result = read_pgm_mem(b"P2\n2 2\nmax\n1 2 3 4\n");
    assert!(matches!(result, Err(IoError::Format(_))));
}

#[test]
fn test_ascii_sample_out_of_range() {
    let result = read_pgm_mem(b"P2\n2 2\n255\n1 2 300 4\n");
    assert!(matches!(
        result,
        Err(IoError::SampleOutOfRange { value: 300 })
    ));

    let result = read_pgm_mem(b"P2\n2 2\n255\n1 -2 3 4\n");
    assert!(matches!(
        result,
        Err(IoError::SampleOutOfRange { value: -2 })
    ));
}

#[test]
fn test_truncated_binary_payload() {
    let result = read_pgm_mem(b"P5\n4 4\n255\nab");
    assert!(matches!(result, Err(IoError::Io(_))));
}

#[test]
fn test_declared_max_is_parsed_but_ceiling_stays_255() {
    // The header's max-value token must be a valid integer, but samples
    // are validated against the fixed 8-bit ceiling.
    let (raster, _) = read_pgm_mem(b"P2\n2 1\n100\n7 99\n").unwrap();
    assert_eq!(raster.max_value(), 255);
    assert_eq!(raster.samples(), &[7, 99]);

    // Binary payload follows a single whitespace byte after the token.
    let (raster, _) = read_pgm_mem(b"P5\n2 1\n255\n\x07\xff").unwrap();
    assert_eq!(raster.samples(), &[7, 255]);
}
