//! Filter pipeline regression test
//!
//! End-to-end scenarios over encoded bytes: decode, convolve, normalize,
//! extend, encode. Covers the behavior the command-line commands rely
//! on: the smoothing filters restore the input dimensions, sobel leaves
//! the shrunk dimensions.

use pgmkit_filter::{EdgeOrientation, FilterError, FilterSpec, OutputFormat, apply_filter};
use pgmkit_io::{IoError, PgmFormat, read_pgm_mem, write_pgm_mem};
use pgmkit_test::{RegParams, uniform_raster};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    // --- 5x5 of all 100, mean kernel 3: interior all 100, restored to
    // a 5x5 of all 100 ---
    let input = uniform_raster(5, 5, 100);
    for format in [PgmFormat::Ascii, PgmFormat::Binary] {
        let bytes = write_pgm_mem(&input, format).expect("encode input");

        let out = apply_filter(&bytes, &FilterSpec::average(3)).expect("average filter");
        let (raster, outformat) = read_pgm_mem(&out).expect("decode output");
        rp.compare_raster(&input, &raster);
        // The original sub-format is preserved.
        rp.compare_values(
            1.0,
            if outformat == format { 1.0 } else { 0.0 },
            0.0,
        );

        // --- Same scenario under the median ---
        let out = apply_filter(&bytes, &FilterSpec::median(3)).expect("median filter");
        let (raster, _) = read_pgm_mem(&out).expect("decode output");
        rp.compare_raster(&input, &raster);
    }

    // --- Sobel: no padding restore, dimensions shrink by the margin ---
    let bytes = write_pgm_mem(&uniform_raster(7, 6, 42), PgmFormat::Binary).expect("encode");
    let out = apply_filter(&bytes, &FilterSpec::sobel(EdgeOrientation::Vertical))
        .expect("sobel filter");
    let (raster, _) = read_pgm_mem(&out).expect("decode output");
    rp.compare_values(5.0, raster.width() as f64, 0.0);
    rp.compare_values(4.0, raster.height() as f64, 0.0);
    // Flat input: degenerate normalization, all zeros.
    rp.compare_raster(&uniform_raster(5, 4, 0), &raster);

    // --- Forcing the output sub-format converts it ---
    let bytes = write_pgm_mem(&input, PgmFormat::Ascii).expect("encode");
    let mut spec = FilterSpec::average(3);
    spec.output = OutputFormat::Force(PgmFormat::Binary);
    let out = apply_filter(&bytes, &spec).expect("average with forced format");
    let (_, outformat) = read_pgm_mem(&out).expect("decode output");
    rp.compare_values(
        1.0,
        if outformat == PgmFormat::Binary { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup(), "pipeline regression test failed");
}

#[test]
fn test_decode_failure_aborts_pipeline() {
    let result = apply_filter(b"not a pgm at all", &FilterSpec::average(3));
    assert!(matches!(
        result,
        Err(FilterError::Io(IoError::Format(_)))
    ));
}

#[test]
fn test_invalid_kernel_rejected() {
    let bytes = write_pgm_mem(&uniform_raster(5, 5, 9), PgmFormat::Binary).unwrap();

    // Even size.
    let result = apply_filter(&bytes, &FilterSpec::average(4));
    assert!(matches!(result, Err(FilterError::InvalidParameters(_))));

    // Larger than the raster.
    let result = apply_filter(&bytes, &FilterSpec::median(7));
    assert!(matches!(result, Err(FilterError::InvalidParameters(_))));
}

#[test]
fn test_size_one_average_roundtrips_input() {
    let input = uniform_raster(4, 3, 123);
    let bytes = write_pgm_mem(&input, PgmFormat::Ascii).unwrap();
    let out = apply_filter(&bytes, &FilterSpec::average(1)).unwrap();
    assert_eq!(out, bytes);
}
