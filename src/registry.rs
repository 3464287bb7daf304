//! The client registry: an owning collection of [`Client`] records keyed by a
//! unique [`ClientId`].
//!
//! Every lookup is a linear scan over the records. The registry is meant for
//! small collections where insertion order is occasionally useful for display,
//! so no index is maintained on the side.
//!
//! ## Examples
//!
//! ```
//! use fichas::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add_client("Ana", 123)?;
//! registry.add_client("Joao", 456)?;
//! registry.record_visit(123)?;
//!
//! assert_eq!(registry.query_client(123).map(|i| i.visits()), Some(1));
//! assert_eq!(registry.list_all(), "Ana / 123 / 1\nJoao / 456 / 0\n");
//!
//! registry.remove_client(456)?;
//! assert_eq!(registry.len(), 1);
//! assert!(registry.query_client(456).is_none());
//! # Ok::<(), fichas::RegistryError>(())
//! ```
//!
//! Cloning a registry copies every record, so the clone evolves independently:
//!
//! ```
//! use fichas::Registry;
//!
//! let mut original = Registry::new();
//! original.add_client("Ana", 123)?;
//!
//! let mut copy = original.clone();
//! copy.record_visit(123)?;
//! copy.add_client("Joao", 456)?;
//!
//! assert_eq!(original.list_all(), "Ana / 123 / 0\n");
//! assert_eq!(copy.list_all(), "Ana / 123 / 1\nJoao / 456 / 0\n");
//! # Ok::<(), fichas::RegistryError>(())
//! ```

use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

use crate::client::Client;
use crate::client::ClientId;
use crate::client::ClientInfo;
use crate::error::RegistryError;

/// Owning collection of clients with pairwise distinct identifiers.
///
/// Records are kept in insertion order until one is removed, at which point
/// the last record takes the place of the removed one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
  clients: Vec<Client>,
}

impl Registry {
  /// Creates an empty registry.
  pub const fn new() -> Self {
    Self {
      clients: Vec::new(),
    }
  }

  /// Creates an empty registry with room for `capacity` clients before it
  /// needs to reallocate.
  pub fn with_capacity(capacity: usize) -> Self {
    Self {
      clients: Vec::with_capacity(capacity),
    }
  }

  /// Builds a registry from `clients`, failing on the first identifier that
  /// was already seen.
  ///
  /// ```
  /// # use fichas::{Client, Registry, RegistryError};
  /// let ok = Registry::try_from_iter([Client::new("Ana", 1), Client::new("Rui", 2)]);
  /// assert_eq!(ok.map(|r| r.len()), Ok(2));
  ///
  /// let dup = Registry::try_from_iter([Client::new("Ana", 1), Client::new("Rui", 1)]);
  /// assert_eq!(dup, Err(RegistryError::DuplicateId(1)));
  /// ```
  pub fn try_from_iter<I>(clients: I) -> Result<Self, RegistryError>
  where
    I: IntoIterator<Item = Client>,
  {
    let clients = clients.into_iter();
    let mut registry = Self::with_capacity(clients.size_hint().0);
    for client in clients {
      registry.insert(client)?;
    }
    Ok(registry)
  }

  /// Returns the number of clients.
  #[inline]
  pub fn len(&self) -> usize {
    self.clients.len()
  }

  /// Returns `true` if the registry holds no clients.
  #[inline]
  pub fn is_empty(&self) -> bool {
    self.clients.is_empty()
  }

  /// Returns `true` if a client with this identifier is registered.
  #[inline]
  pub fn contains(&self, id: ClientId) -> bool {
    self.position(id).is_some()
  }

  /// Returns the client registered under `id`, if any.
  pub fn get(&self, id: ClientId) -> Option<&Client> {
    self.clients.iter().find(|c| c.id() == id)
  }

  /// Iterates over the clients in their current order.
  #[inline]
  pub fn iter(&self) -> core::slice::Iter<'_, Client> {
    self.clients.iter()
  }

  /// Registers a new client with no visits.
  ///
  /// Fails with [`RegistryError::DuplicateId`] if the identifier is taken, in
  /// which case the registry is left untouched.
  pub fn add_client(
    &mut self,
    name: impl Into<String>,
    id: ClientId,
  ) -> Result<(), RegistryError> {
    self.insert(Client::new(name, id))
  }

  /// Registers an existing client record as-is, visit count included.
  pub fn insert(&mut self, client: Client) -> Result<(), RegistryError> {
    let id = client.id();
    if self.contains(id) {
      diag!(trace, "rejected duplicate client {id}");
      return Err(RegistryError::DuplicateId(id));
    }
    self.clients.push(client);
    diag!(debug, "registered client {id} ({} total)", self.clients.len());
    Ok(())
  }

  /// Removes the client registered under `id` and hands it back.
  ///
  /// The last record is moved into the freed slot, so the relative order of
  /// the remaining clients is not preserved.
  pub fn remove_client(&mut self, id: ClientId) -> Result<Client, RegistryError> {
    let Some(index) = self.position(id) else {
      diag!(trace, "cannot remove unknown client {id}");
      return Err(RegistryError::NotFound(id));
    };
    let removed = self.clients.swap_remove(index);
    diag!(debug, "removed client {id} ({} left)", self.clients.len());
    Ok(removed)
  }

  /// Records a visit for the client registered under `id` and returns its
  /// updated visit count.
  pub fn record_visit(&mut self, id: ClientId) -> Result<u64, RegistryError> {
    match self.clients.iter_mut().find(|c| c.id() == id) {
      Some(client) => {
        let visits = client.record_visit();
        diag!(debug, "client {id} now has {visits} visits");
        Ok(visits)
      }
      None => {
        diag!(trace, "cannot record visit for unknown client {id}");
        Err(RegistryError::NotFound(id))
      }
    }
  }

  /// Returns a snapshot of the name and visit count of the client registered
  /// under `id`, or `None` if there is no such client.
  pub fn query_client(&self, id: ClientId) -> Option<ClientInfo> {
    self.get(id).map(Client::info)
  }

  /// Renders every client on its own `'\n'`-terminated line, in the current
  /// order. An empty registry renders as an empty string.
  pub fn list_all(&self) -> String {
    self.to_string()
  }

  /// Removes every client.
  pub fn clear(&mut self) {
    diag!(debug, "clearing {} clients", self.clients.len());
    self.clients.clear();
  }

  fn position(&self, id: ClientId) -> Option<usize> {
    self.clients.iter().position(|c| c.id() == id)
  }
}

impl Display for Registry {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    for client in &self.clients {
      writeln!(f, "{client}")?;
    }
    Ok(())
  }
}

impl IntoIterator for Registry {
  type Item = Client;
  type IntoIter = alloc::vec::IntoIter<Client>;
  fn into_iter(self) -> Self::IntoIter {
    self.clients.into_iter()
  }
}

impl<'a> IntoIterator for &'a Registry {
  type Item = &'a Client;
  type IntoIter = core::slice::Iter<'a, Client>;
  fn into_iter(self) -> Self::IntoIter {
    self.clients.iter()
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  const MAX_PREALLOCATED: usize = 1024;

  impl serde::Serialize for Registry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      use serde::ser::SerializeSeq;
      let mut seq = serializer.serialize_seq(Some(self.len()))?;
      for client in &self.clients {
        seq.serialize_element(client)?;
      }
      seq.end()
    }
  }

  impl<'de> serde::Deserialize<'de> for Registry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      use serde::de::Error;
      use serde::de::SeqAccess;
      use serde::de::Visitor;
      struct RegistryVisitor;
      impl<'de> Visitor<'de> for RegistryVisitor {
        type Value = Registry;
        fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
          formatter.write_str("a sequence of clients with unique ids")
        }
        fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
        where
          A: SeqAccess<'de>,
        {
          let hint = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED);
          let mut registry = Registry::with_capacity(hint);
          while let Some(client) = seq.next_element::<Client>()? {
            registry.insert(client).map_err(A::Error::custom)?;
          }
          Ok(registry)
        }
      }
      deserializer.deserialize_seq(RegistryVisitor)
    }
  }
}
