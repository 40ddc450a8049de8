//! Gzip handling for `.litematic` input.

use std::borrow::Cow;
use std::io::Read;

use flate2::read::GzDecoder;
use tracing::{debug, warn};

/// Gunzip `data`, or hand it back unchanged if it is not a gzip stream.
pub fn gunzip_or_raw(data: &[u8]) -> Cow<'_, [u8]> {
    let mut decoder = GzDecoder::new(data);
    let mut output = Vec::new();
    match decoder.read_to_end(&mut output) {
        Ok(_) => {
            debug!("decompressed {} -> {} bytes", data.len(), output.len());
            Cow::Owned(output)
        }
        Err(e) => {
            warn!("input is not gzip ({e}), reading it as raw NBT");
            Cow::Borrowed(data)
        }
    }
}
