//! Client records and the read-only snapshots handed out by the registry.

use alloc::string::String;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;

/// Identifier of a client, e.g. a tax number. Any value is accepted.
pub type ClientId = i64;

/// One client held by a [`Registry`](crate::Registry).
///
/// The identifier is fixed at creation and the visit count only ever grows:
/// neither has a setter, and [`record_visit`](Client::record_visit) is the
/// only way to change the count.
///
/// # Example
///
/// ```rust
/// # use fichas::Client;
/// let mut ana = Client::new("Ana", 123);
/// assert_eq!(ana.visits(), 0);
///
/// ana.record_visit();
/// assert_eq!(ana.describe(), "Ana / 123 / 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Client {
  name:   String,
  id:     ClientId,
  #[cfg_attr(feature = "serde", serde(default))]
  visits: u64,
}

impl Client {
  /// Creates a client with no recorded visits.
  pub fn new(name: impl Into<String>, id: ClientId) -> Self {
    Self {
      name: name.into(),
      id,
      visits: 0,
    }
  }

  #[inline]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[inline]
  pub const fn id(&self) -> ClientId {
    self.id
  }

  #[inline]
  pub const fn visits(&self) -> u64 {
    self.visits
  }

  /// Records one more visit and returns the updated count. The count
  /// saturates at `u64::MAX`.
  #[inline]
  pub fn record_visit(&mut self) -> u64 {
    self.visits = self.visits.saturating_add(1);
    self.visits
  }

  /// Formats the client as `"<name> / <id> / <visits>"`.
  pub fn describe(&self) -> String {
    alloc::format!("{self}")
  }

  /// Takes a snapshot of the displayable state of this client.
  pub fn info(&self) -> ClientInfo {
    ClientInfo {
      name:   self.name.clone(),
      visits: self.visits,
    }
  }
}

impl Display for Client {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(f, "{} / {} / {}", self.name, self.id, self.visits)
  }
}

/// Snapshot of a client's name and visit count at query time.
///
/// The snapshot owns its data, so later changes to the registry it came from
/// are not reflected in it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "constructors", derive(derive_more::Constructor))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClientInfo {
  name:   String,
  visits: u64,
}

impl ClientInfo {
  /// Creates a new `ClientInfo`.
  #[cfg(not(feature = "constructors"))]
  pub const fn new(name: String, visits: u64) -> Self {
    Self { name, visits }
  }

  #[inline]
  pub fn name(&self) -> &str {
    &self.name
  }

  #[inline]
  pub const fn visits(&self) -> u64 {
    self.visits
  }
}

impl From<&Client> for ClientInfo {
  #[inline]
  fn from(client: &Client) -> Self {
    client.info()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::string::ToString;

  #[test]
  fn new_client_has_no_visits() {
    let c = Client::new("Ana", 123);
    assert_eq!(c.name(), "Ana");
    assert_eq!(c.id(), 123);
    assert_eq!(c.visits(), 0);
  }

  #[test]
  fn accepts_any_name_and_id() {
    let c = Client::new("", -42);
    assert_eq!(c.name(), "");
    assert_eq!(c.id(), -42);
    assert_eq!(c.describe(), " / -42 / 0");
  }

  #[test]
  fn record_visit_increments_by_one() {
    let mut c = Client::new("Joao", 456);
    assert_eq!(c.record_visit(), 1);
    assert_eq!(c.record_visit(), 2);
    assert_eq!(c.record_visit(), 3);
    assert_eq!(c.visits(), 3);
    assert_eq!(c.id(), 456);
  }

  #[cfg(feature = "serde")]
  #[test]
  fn record_visit_saturates() {
    let mut c: Client = serde_json::from_str(
      r#"{"name":"Ana","id":1,"visits":18446744073709551615}"#,
    )
    .unwrap();
    assert_eq!(c.record_visit(), u64::MAX);
    assert_eq!(c.visits(), u64::MAX);
  }

  #[test]
  fn describe_matches_display() {
    let mut c = Client::new("Ana", 123);
    c.record_visit();
    assert_eq!(c.describe(), "Ana / 123 / 1");
    assert_eq!(c.to_string(), c.describe());
  }

  #[test]
  fn info_is_a_detached_snapshot() {
    let mut c = Client::new("Ana", 123);
    let before = c.info();
    c.record_visit();
    assert_eq!(before.name(), "Ana");
    assert_eq!(before.visits(), 0);
    assert_eq!(ClientInfo::from(&c).visits(), 1);
  }

  #[test]
  fn info_constructor() {
    let mut c = Client::new("Ana", 1);
    c.record_visit();
    c.record_visit();
    assert_eq!(ClientInfo::new("Ana".into(), 2), c.info());
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;
    use serde_json;

    #[test]
    fn serialize_client() {
      let mut c = Client::new("Ana", 123);
      c.record_visit();
      let json = serde_json::to_string(&c).unwrap();
      assert_eq!(json, r#"{"name":"Ana","id":123,"visits":1}"#);
      let de: Client = serde_json::from_str(&json).unwrap();
      assert_eq!(de, c);
    }

    #[test]
    fn missing_visits_default_to_zero() {
      let de: Client = serde_json::from_str(r#"{"name":"Ana","id":9}"#).unwrap();
      assert_eq!(de.visits(), 0);
    }

    #[test]
    fn serialize_info() {
      let info = Client::new("Joao", 456).info();
      let json = serde_json::to_string(&info).unwrap();
      assert_eq!(json, r#"{"name":"Joao","visits":0}"#);
    }
  }
}
