//! Error types shared by the registry and text modules.

use crate::client::ClientId;

/// Reasons a [`Registry`](crate::Registry) operation can be rejected.
///
/// A rejected operation never modifies the registry.
///
/// # Example
///
/// ```rust
/// # use fichas::{Registry, RegistryError};
/// let mut registry = Registry::new();
/// registry.add_client("Ana", 123).unwrap();
///
/// let err = registry.add_client("Outra Ana", 123).unwrap_err();
/// assert_eq!(err, RegistryError::DuplicateId(123));
/// assert_eq!(err.to_string(), "client 123 is already registered");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum RegistryError {
  /// Another client already holds this identifier.
  #[error("client {0} is already registered")]
  DuplicateId(ClientId),
  /// No client holds this identifier.
  #[error("client {0} is not registered")]
  NotFound(ClientId),
}

impl RegistryError {
  /// The identifier the failed operation was called with.
  #[inline]
  pub const fn id(&self) -> ClientId {
    match *self {
      RegistryError::DuplicateId(id) | RegistryError::NotFound(id) => id,
    }
  }
}

/// Reasons a [`Text`](crate::Text) edit can be rejected.
///
/// Positions and lengths are counted in characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "is_variant", derive(derive_more::IsVariant))]
pub enum TextError {
  #[error("index {index} is out of bounds for text of length {len}")]
  IndexOutOfBounds { index: usize, len: usize },
  #[error("range {start}..={end} is invalid for text of length {len}")]
  InvalidRange { start: usize, end: usize, len: usize },
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::string::ToString;

  #[test]
  fn registry_error_messages() {
    assert_eq!(
      RegistryError::DuplicateId(7).to_string(),
      "client 7 is already registered"
    );
    assert_eq!(
      RegistryError::NotFound(-3).to_string(),
      "client -3 is not registered"
    );
  }

  #[test]
  fn registry_error_id() {
    assert_eq!(RegistryError::DuplicateId(1).id(), 1);
    assert_eq!(RegistryError::NotFound(2).id(), 2);
  }

  #[test]
  fn text_error_messages() {
    let err = TextError::IndexOutOfBounds { index: 5, len: 3 };
    assert_eq!(err.to_string(), "index 5 is out of bounds for text of length 3");
    let err = TextError::InvalidRange {
      start: 4,
      end: 2,
      len: 8,
    };
    assert_eq!(err.to_string(), "range 4..=2 is invalid for text of length 8");
  }

  #[cfg(feature = "is_variant")]
  #[test]
  fn variant_predicates() {
    assert!(RegistryError::NotFound(1).is_not_found());
    assert!(!RegistryError::NotFound(1).is_duplicate_id());
    assert!(TextError::InvalidRange { start: 0, end: 0, len: 0 }.is_invalid_range());
  }
}
