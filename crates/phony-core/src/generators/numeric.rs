//! Decimal number generators.

use crate::error::GeneratorError;
use crate::registry::Resolver;

/// Uniform in `[-90, 90)`, six fractional digits.
pub fn latitude(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let latitude = r.unit() * 180.0 - 90.0;
    Ok(format!("{latitude:.6}"))
}

/// Uniform in `[-180, 180)`, six fractional digits.
pub fn longitude(
    r: &mut Resolver<'_>,
    _args: Option<&[String]>,
) -> Result<String, GeneratorError> {
    let longitude = r.unit() * 360.0 - 180.0;
    Ok(format!("{longitude:.6}"))
}

/// Standard normal sample scaled by 1000, four fractional digits.
pub fn double(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let value = r.standard_normal() * 1000.0;
    Ok(format!("{value:.4}"))
}
