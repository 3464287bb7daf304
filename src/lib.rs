//! # Fichas
//!
//! ### Owned client records, growable text and value boxes
//!
//! This crate is a small collection of owning data structures whose copies
//! never share state. At present it includes 3 main types: [`Registry`],
//! [`Text`] and [`ValueBox`], which are described below.
//!
//! ---
//!
//! ## [`Registry`]
//!
//! An owning collection of [`Client`] records (a "locker of files") keyed by a
//! unique [`ClientId`]. Clients can be added, removed, visited, queried and
//! listed. Rejected operations return a [`RegistryError`] and leave the
//! registry untouched; lookups of unknown clients return `None`.
//!
//! ### Example
//!
//! ```rust
//! use fichas::Registry;
//!
//! # fn main() -> Result<(), fichas::RegistryError> {
//! let mut registry = Registry::new();
//! registry.add_client("Ana", 123)?;
//! registry.add_client("Joao", 456)?;
//! registry.record_visit(123)?;
//!
//! assert!(registry.add_client("Ana again", 123).is_err());
//! assert_eq!(registry.list_all(), "Ana / 123 / 1\nJoao / 456 / 0\n");
//! # Ok(())
//! # }
//! ```
//!
//! ## [`Text`]
//!
//! A growable UTF-8 string with character-indexed, bounds-checked editing.
//!
//! ## [`ValueBox`]
//!
//! A heap-owning wrapper around a single value with deep-copy semantics.
//!
//! ---
//!
//! ## `no_std` Support
//!
//! Everything here only needs `alloc`, so the crate builds in `no_std`
//! environments unless the `std` feature is enabled.
//!
//! ---
//!
//! ## Features
//!
//! - `std`: Enables integration with the Rust standard library. When disabled,
//!   the crate operates in `no_std` mode. Required by the `fichas-demo` binary.
//! - `serde`†: Enables serialization and deserialization support via Serde.
//! - `log`: Emits registry diagnostics through the [`log`] facade.
//! - `is_variant`†: `is_*` predicates on the error enums.
//! - `constructors`†: Derived `new` constructor for [`ClientInfo`].
//!
//! > † enabled by default
//!
//! [`log`]: https://docs.rs/log

#![cfg_attr(not(any(test, feature = "std")), no_std)]

extern crate alloc;
extern crate core;

/// Forwards to the matching `log` macro when the `log` feature is enabled.
macro_rules! diag {
  ($level:ident, $($arg:tt)+) => {
    #[cfg(feature = "log")]
    log::$level!($($arg)+);
  };
}

pub mod client;
pub mod error;
pub mod registry;
pub mod text;
pub mod value_box;

pub use client::*;
pub use error::*;
pub use registry::*;
pub use text::*;
pub use value_box::*;
