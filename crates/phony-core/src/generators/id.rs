//! Random identifier generator.

use crate::error::GeneratorError;
use crate::registry::Resolver;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const ID_LENGTH: usize = 10;

/// Ten characters drawn uniformly, with replacement, from `[a-zA-Z0-9]`.
pub fn id(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let id = (0..ID_LENGTH)
        .map(|_| ALPHABET[r.below(ALPHABET.len())] as char)
        .collect();
    Ok(id)
}
