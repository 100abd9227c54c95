//! Response body decoding.
//!
//! The HTTP client does not decompress bodies (that would strip the
//! `Content-Encoding` header), so the fetcher undoes the content codings here.

use std::io::{self, Read};

use flate2::read::{DeflateDecoder, GzDecoder, ZlibDecoder};
use log::{debug, warn};

const BROTLI_BUFFER_SIZE: usize = 4096;

/// Decodes `body` according to a `Content-Encoding` header value.
///
/// Codings are listed in the order they were applied, so they are undone in
/// reverse. `identity` and an absent header leave the body untouched; unknown
/// codings are passed through with a warning. An empty body has nothing to
/// decode and is returned as is, whatever the header claims.
///
/// # Errors
///
/// Returns an `io::Error` if a compressed stream is corrupt.
pub fn decode_body(body: Vec<u8>, content_encoding: Option<&str>) -> io::Result<Vec<u8>> {
    let Some(encoding) = content_encoding else {
        return Ok(body);
    };
    if body.is_empty() {
        debug!("Empty body with Content-Encoding {encoding}, nothing to decode");
        return Ok(body);
    }

    let mut decoded = body;
    for coding in encoding.split(',').rev() {
        let coding = coding.trim().to_ascii_lowercase();
        decoded = match coding.as_str() {
            "" | "identity" => decoded,
            "gzip" | "x-gzip" => read_all(GzDecoder::new(decoded.as_slice()))?,
            "deflate" => inflate(&decoded)?,
            "br" => read_all(brotli::Decompressor::new(
                decoded.as_slice(),
                BROTLI_BUFFER_SIZE,
            ))?,
            other => {
                warn!("Unsupported content coding '{other}', leaving body as received");
                decoded
            }
        };
    }

    debug!("Decoded {encoding} body to {} bytes", decoded.len());
    Ok(decoded)
}

/// HTTP `deflate` is meant to be zlib-wrapped, but raw deflate streams are
/// common in the wild.
fn inflate(body: &[u8]) -> io::Result<Vec<u8>> {
    read_all(ZlibDecoder::new(body)).or_else(|_| read_all(DeflateDecoder::new(body)))
}

fn read_all(mut reader: impl Read) -> io::Result<Vec<u8>> {
    let mut out = Vec::new();
    reader.read_to_end(&mut out)?;
    Ok(out)
}
