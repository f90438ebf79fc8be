//! PGM (Portable Gray Map) codec
//!
//! Reads and writes 8-bit grayscale rasters in the P2 (ASCII) and
//! P5 (binary) sub-formats.
//!
//! The header is three whitespace-separated fields - magic token,
//! `width height`, maximum sample value - where every field may be
//! preceded by comment lines starting with `#`, discarded whole-line.
//! Comment skipping is a plain loop, so inputs with arbitrarily many
//! consecutive comment lines decode without growing the stack.
//!
//! The maximum-value header token must parse as an integer, but the
//! decoded raster always carries 255: samples are stored one byte each
//! and validated against that fixed ceiling.

use crate::format::PgmFormat;
use crate::{IoError, IoResult};
use pgmkit_core::{MAX_SAMPLE, Raster};
use std::io::{BufRead, Write};
use tracing::debug;

/// Comment lines start with this marker and run to end of line.
const COMMENT_MARKER: u8 = b'#';

/// Header scanner over an in-memory PGM buffer.
///
/// Yields whitespace-separated tokens, discarding comment lines, and
/// hands out the raw remainder for binary payloads.
struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(data: &'a [u8]) -> Self {
        Scanner { data, pos: 0 }
    }

    /// Skip whitespace and whole comment lines before the next token.
    fn skip_separators(&mut self) {
        loop {
            while self.pos < self.data.len() && self.data[self.pos].is_ascii_whitespace() {
                self.pos += 1;
            }
            if self.pos < self.data.len() && self.data[self.pos] == COMMENT_MARKER {
                while self.pos < self.data.len() && self.data[self.pos] != b'\n' {
                    self.pos += 1;
                }
            } else {
                return;
            }
        }
    }

    /// Read the next whitespace-delimited token.
    fn token(&mut self, what: &str) -> IoResult<&'a str> {
        self.skip_separators();
        let start = self.pos;
        while self.pos < self.data.len() && !self.data[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
        if start == self.pos {
            return Err(IoError::Format(format!(
                "unexpected end of input while reading {what}"
            )));
        }
        std::str::from_utf8(&self.data[start..self.pos])
            .map_err(|_| IoError::Format(format!("non-ASCII {what} token")))
    }

    /// Read the next token and parse it as an unsigned integer.
    fn u32_token(&mut self, what: &str) -> IoResult<u32> {
        let token = self.token(what)?;
        token
            .parse()
            .map_err(|_| IoError::Format(format!("invalid {what} token: {token:?}")))
    }

    /// Read the next token and parse it as a signed integer.
    fn i64_token(&mut self, what: &str) -> IoResult<i64> {
        let token = self.token(what)?;
        token
            .parse()
            .map_err(|_| IoError::Format(format!("invalid {what} token: {token:?}")))
    }

    /// Consume the single whitespace byte separating header and payload,
    /// then return the rest of the buffer.
    fn payload(&mut self) -> &'a [u8] {
        if self.pos < self.data.len() {
            self.pos += 1;
        }
        &self.data[self.pos..]
    }
}

/// Read a PGM raster from a reader.
///
/// Reads the stream to completion, then decodes. Returns the raster and
/// the sub-format it was stored in, so callers can preserve the original
/// encoding on output.
pub fn read_pgm<R: BufRead>(mut reader: R) -> IoResult<(Raster, PgmFormat)> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    read_pgm_mem(&data)
}

/// Decode a PGM raster from memory.
///
/// # Errors
///
/// - [`IoError::Format`] if the magic token is neither `P2` nor `P5`, or
///   a header token fails to parse as an integer
/// - [`IoError::SampleOutOfRange`] the moment an ASCII sample token lies
///   outside `[0, 255]`; no partial raster is returned
/// - [`IoError::Io`] if a binary payload is shorter than `width * height`
pub fn read_pgm_mem(data: &[u8]) -> IoResult<(Raster, PgmFormat)> {
    let mut scanner = Scanner::new(data);

    let magic = scanner.token("magic")?;
    let format = match magic {
        "P2" => PgmFormat::Ascii,
        "P5" => PgmFormat::Binary,
        other => {
            return Err(IoError::Format(format!(
                "unrecognized magic token: {other:?}"
            )));
        }
    };

    let width = scanner.u32_token("width")?;
    let height = scanner.u32_token("height")?;
    // Must be a valid integer, but the raster's ceiling is fixed at 255.
    let _declared_max = scanner.u32_token("max value")?;

    let mut raster = Raster::new(width, height)?;
    let count = raster.samples().len();

    match format {
        PgmFormat::Binary => {
            let payload = scanner.payload();
            if payload.len() < count {
                return Err(IoError::Io(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!(
                        "binary payload truncated: expected {count} bytes, got {}",
                        payload.len()
                    ),
                )));
            }
            raster.samples_mut().copy_from_slice(&payload[..count]);
        }
        PgmFormat::Ascii => {
            for i in 0..count {
                let value = scanner.i64_token("sample")?;
                if value < 0 || value > i64::from(MAX_SAMPLE) {
                    return Err(IoError::SampleOutOfRange { value });
                }
                raster.samples_mut()[i] = value as u8;
            }
        }
    }

    debug!(width, height, ?format, "decoded PGM raster");
    Ok((raster, format))
}

/// Write a raster as PGM to a writer in the requested sub-format.
///
/// The header is always the three-line form `magic`, `width height`,
/// `max value`. ASCII payloads put a single space between values on the
/// same row and a newline after each row's last value.
pub fn write_pgm<W: Write>(raster: &Raster, mut writer: W, format: PgmFormat) -> IoResult<()> {
    write!(
        writer,
        "{}\n{} {}\n{}\n",
        format.magic(),
        raster.width(),
        raster.height(),
        raster.max_value()
    )?;

    match format {
        PgmFormat::Binary => writer.write_all(raster.samples())?,
        PgmFormat::Ascii => {
            let width = raster.width() as usize;
            for (i, value) in raster.samples().iter().enumerate() {
                let sep = if (i + 1) % width == 0 { '\n' } else { ' ' };
                write!(writer, "{value}{sep}")?;
            }
        }
    }

    Ok(())
}

/// Encode a raster as PGM into a byte buffer.
pub fn write_pgm_mem(raster: &Raster, format: PgmFormat) -> IoResult<Vec<u8>> {
    let mut out = Vec::new();
    write_pgm(raster, &mut out, format)?;
    debug!(
        width = raster.width(),
        height = raster.height(),
        ?format,
        bytes = out.len(),
        "encoded PGM raster"
    );
    Ok(out)
}
