//! A heap-owning wrapper around a single value.
//!
//! [`ValueBox<T>`] keeps its value behind its own allocation, and cloning the
//! box allocates a fresh copy of the value. Two boxes therefore never share
//! state, no matter how they were created.
//!
//! ```
//! use fichas::ValueBox;
//!
//! let original = ValueBox::new(10);
//! let mut copy = original.clone();
//! copy.set(20);
//!
//! assert_eq!(*original.get(), 10);
//! assert_eq!(*copy, 20);
//! ```

use alloc::boxed::Box;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use core::ops::Deref;

/// Owns exactly one heap-allocated `T`.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ValueBox<T> {
  value: Box<T>,
}

impl<T> ValueBox<T> {
  pub fn new(value: T) -> Self {
    Self {
      value: Box::new(value),
    }
  }

  #[inline]
  pub fn get(&self) -> &T {
    &self.value
  }

  /// Overwrites the stored value, dropping the previous one.
  #[inline]
  pub fn set(&mut self, value: T) {
    *self.value = value;
  }

  /// Stores `value` and returns the previous one.
  #[inline]
  pub fn replace(&mut self, value: T) -> T {
    core::mem::replace(&mut *self.value, value)
  }

  #[inline]
  pub fn into_inner(self) -> T {
    *self.value
  }
}

impl<T> Deref for ValueBox<T> {
  type Target = T;

  #[inline(always)]
  fn deref(&self) -> &T {
    &self.value
  }
}

impl<T> From<T> for ValueBox<T> {
  #[inline]
  fn from(value: T) -> Self {
    Self::new(value)
  }
}

impl<T: Display> Display for ValueBox<T> {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    Display::fmt(&*self.value, f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use alloc::string::String;
  use alloc::string::ToString;

  #[test]
  fn get_and_set() {
    let mut b = ValueBox::new(5);
    assert_eq!(*b.get(), 5);
    b.set(7);
    assert_eq!(*b.get(), 7);
  }

  #[test]
  fn replace_returns_previous() {
    let mut b = ValueBox::new(String::from("old"));
    assert_eq!(b.replace("new".into()), "old");
    assert_eq!(b.into_inner(), "new");
  }

  #[test]
  fn clone_does_not_share() {
    let a = ValueBox::new(1);
    let mut b = a.clone();
    b.set(2);
    assert_eq!(*a, 1);
    assert_eq!(*b, 2);

    let mut c = ValueBox::new(3);
    c.clone_from(&b);
    c.set(4);
    assert_eq!(*b, 2);
    assert_eq!(*c, 4);
  }

  #[test]
  fn default_and_display() {
    let b: ValueBox<i32> = ValueBox::default();
    assert_eq!(*b, 0);
    assert_eq!(ValueBox::from(42).to_string(), "42");
  }

  #[cfg(feature = "serde")]
  mod serde_tests {
    use super::*;
    use serde_json;

    #[test]
    fn serialize_transparently() {
      let b = ValueBox::new(42);
      let json = serde_json::to_string(&b).unwrap();
      assert_eq!(json, "42");
      let de: ValueBox<i32> = serde_json::from_str(&json).unwrap();
      assert_eq!(de, b);
    }
  }
}
