//! Generator registry for phony.
//!
//! This crate maps dotted generator names (`name`, `name.first`,
//! `mac.address`, ...) to functions that produce a fresh string value on
//! every call. Some generators are compositions of others: `email` asks the
//! registry for `username` and `domain`, and `domain` in turn asks for
//! `domain.name` and `domain.tld`.
//!
//! # Architecture
//!
//! ```text
//!   WordList (YAML corpus)      Clock
//!          │                      │
//!          ▼                      ▼
//! ┌──────────────────────────────────┐
//! │             Registry             │
//! │  name -> GeneratorFn             │
//! └────────────────┬─────────────────┘
//!                  │ resolver(&mut rng)
//!                  ▼
//!             Resolver ── get("name.first") ──┐
//!                  ▲                          │
//!                  └──────── nested get ──────┘
//! ```
//!
//! The registry itself is immutable once built and can be shared freely.
//! Randomness is never global: every lookup borrows the caller's RNG, so
//! a seeded `StdRng` gives reproducible output.
//!
//! # Example
//!
//! ```rust
//! use phony_core::{Registry, WordList};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let registry = Registry::builtin(&WordList::builtin());
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let email = registry.get(&mut rng, "email").unwrap();
//! assert!(email.contains('@'));
//! ```
//!
//! # Generators
//!
//! - `name`, `email`, `domain`, `avatar` - compositions of word-list generators
//! - `unixtime` - nanoseconds since the Unix epoch
//! - `id` - 10 random alphanumeric characters
//! - `ipv4`, `ipv6`, `mac.address` - network addresses
//! - `latitude`, `longitude`, `double` - decimal numbers
//! - one generator per word-list category (`name.first`, `username`, ...)

pub mod clock;
pub mod error;
pub mod generators;
pub mod registry;
pub mod wordlist;

// Re-exports for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{GeneratorError, WordListError};
pub use registry::{GeneratorFn, Registry, Resolver, MAX_COMPOSITION_DEPTH};
pub use wordlist::WordList;
