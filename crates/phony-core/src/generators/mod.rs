//! Builtin generators.
//!
//! Every generator shares one shape: it receives a [`Resolver`] and the
//! optional placeholder arguments, and returns a string. None of the
//! builtins consume arguments yet.
//!
//! [`Resolver`]: crate::registry::Resolver

pub mod compose;
pub mod id;
pub mod network;
pub mod numeric;
pub mod timestamp;

use crate::registry::Registry;

/// Register every builtin generator on `registry`.
///
/// Word-list generators (`name.first`, `username`, ...) are not included;
/// see [`Registry::register_wordlist`].
pub fn register_builtins(registry: &mut Registry) {
    registry.register("name", compose::name);
    registry.register("email", compose::email);
    registry.register("domain", compose::domain);
    registry.register("avatar", compose::avatar);
    registry.register("unixtime", timestamp::unixtime);
    registry.register("id", id::id);
    registry.register("ipv4", network::ipv4);
    registry.register("ipv6", network::ipv6);
    registry.register("mac.address", network::mac_address);
    registry.register("latitude", numeric::latitude);
    registry.register("longitude", numeric::longitude);
    registry.register("double", numeric::double);
}
