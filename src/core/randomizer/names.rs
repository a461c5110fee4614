use std::ffi::{OsStr, OsString};
use std::path::Path;

use rand::RngCore;

use super::RandomizeOptions;
use crate::error::{Error, Result};

/// Lowercase hex encoding of `length` random bytes.
pub(crate) fn random_hex<R: RngCore + ?Sized>(rng: &mut R, length: usize) -> Result<String> {
    let mut bytes = vec![0u8; length];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| Error::internal_unexpected(format!("random source failed: {}", e)))?;
    Ok(hex::encode(bytes))
}

/// Build a random replacement for `original`.
///
/// With `preserve_extensions`, the suffix after the last `.` of the base name
/// is carried over as raw OS bytes. A leading dot alone (`.env`) is not an
/// extension, while a trailing dot (`draft.`) keeps the bare `.`.
pub(crate) fn generate_name<R: RngCore + ?Sized>(
    original: &OsStr,
    options: &RandomizeOptions,
    rng: &mut R,
) -> Result<OsString> {
    let mut name = OsString::from(random_hex(rng, options.length)?);

    if options.preserve_extensions {
        if let Some(extension) = Path::new(original).extension() {
            name.push(".");
            name.push(extension);
        }
    }

    Ok(name)
}
