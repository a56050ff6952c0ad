//! Network address generators.
//!
//! Hex groups are printed without zero padding and drawn from `[0, 254]`,
//! so `mac.address` values are not guaranteed to be valid unicast MACs.

use crate::error::GeneratorError;
use crate::registry::Resolver;

const IPV6_PREFIX: &str = "2001:cafe";

/// Uniform integer in `[0, 254]`.
fn octet(r: &mut Resolver<'_>) -> usize {
    r.below(255)
}

/// Uniform integer in `[1, 253]`, used for the outer IPv4 octets.
fn outer_octet(r: &mut Resolver<'_>) -> usize {
    1 + r.below(253)
}

fn hex_groups(r: &mut Resolver<'_>, count: usize) -> Vec<String> {
    (0..count).map(|_| format!("{:x}", octet(r))).collect()
}

pub fn ipv4(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let a = outer_octet(r);
    let b = octet(r);
    let c = octet(r);
    let d = outer_octet(r);
    Ok(format!("{a}.{b}.{c}.{d}"))
}

/// `2001:cafe:` followed by six hex groups.
pub fn ipv6(r: &mut Resolver<'_>, _args: Option<&[String]>) -> Result<String, GeneratorError> {
    let groups = hex_groups(r, 6);
    Ok(format!("{IPV6_PREFIX}:{}", groups.join(":")))
}

pub fn mac_address(
    r: &mut Resolver<'_>,
    _args: Option<&[String]>,
) -> Result<String, GeneratorError> {
    Ok(hex_groups(r, 6).join(":"))
}
