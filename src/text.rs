//! A growable UTF‑8 text buffer with index-checked editing.
//!
//! `Text` owns its contents and grows as needed when appended to. Editing
//! operations address the text by *character* position rather than byte
//! offset, and every edit validates its positions first: a rejected edit
//! returns a [`TextError`] and leaves the text as it was.
//!
//! ## Examples
//!
//! ```
//! use fichas::Text;
//!
//! let mut text = Text::from("Ola");
//! text.append("mundo");
//! assert_eq!(text, "Olamundo");
//!
//! text.remove_range(2, 4)?;
//! assert_eq!(text, "Olndo");
//!
//! // out-of-range edits are rejected
//! assert!(text.remove_range(2, 9).is_err());
//! assert!(text.set_char_at(5, 'x').is_err());
//! assert_eq!(text, "Olndo");
//! # Ok::<(), fichas::TextError>(())
//! ```
//!
//! Clones are independent copies:
//!
//! ```
//! use fichas::Text;
//!
//! let mut c = Text::from("abc");
//! let a = c.clone();
//! c.set_char_at(1, 'x')?;
//! assert_eq!(c, "axc");
//! assert_eq!(a, "abc");
//! # Ok::<(), fichas::TextError>(())
//! ```

use alloc::string::String;
use core::convert::Infallible;
use core::fmt;
use core::fmt::Display;
use core::fmt::Formatter;
use core::ops::Deref;
use core::ops::Range;
use core::str::FromStr;

use crate::error::TextError;

/// Owned, growable UTF‑8 text.
///
/// Only a read-only view of the contents is exposed (through
/// [`as_str`](Text::as_str) and `Deref<Target = str>`); all mutation goes
/// through the checked editing methods.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Text {
  buf: String,
}

impl Text {
  /// Creates an empty `Text`.
  pub const fn new() -> Self {
    Self { buf: String::new() }
  }

  /// Returns the number of characters.
  pub fn len(&self) -> usize {
    self.buf.chars().count()
  }

  /// Returns the length of the contents in bytes.
  #[inline]
  pub fn byte_len(&self) -> usize {
    self.buf.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.buf.is_empty()
  }

  #[inline]
  pub fn as_str(&self) -> &str {
    &self.buf
  }

  /// Appends `s` to the end of the text.
  pub fn append(&mut self, s: &str) {
    self.buf.push_str(s);
  }

  /// Replaces the whole contents with `s`.
  pub fn assign(&mut self, s: &str) {
    self.buf.clear();
    self.buf.push_str(s);
  }

  /// Replaces the character at position `index` with `ch`.
  pub fn set_char_at(&mut self, index: usize, ch: char) -> Result<(), TextError> {
    let Some((start, old)) = self.buf.char_indices().nth(index) else {
      return Err(TextError::IndexOutOfBounds {
        index,
        len: self.len(),
      });
    };
    let mut encoded = [0u8; 4];
    self
      .buf
      .replace_range(start..start + old.len_utf8(), ch.encode_utf8(&mut encoded));
    Ok(())
  }

  /// Removes the characters from position `start` through `end`, both
  /// inclusive.
  ///
  /// Fails if `end` lies past the last character or before `start`.
  pub fn remove_range(&mut self, start: usize, end: usize) -> Result<(), TextError> {
    let bytes = self.byte_range(start, end)?;
    self.buf.replace_range(bytes, "");
    Ok(())
  }

  /// Consumes the `Text` and returns its contents as a `String`.
  #[inline]
  pub fn into_string(self) -> String {
    self.buf
  }

  /// Maps the inclusive character range `start..=end` to a byte range.
  fn byte_range(&self, start: usize, end: usize) -> Result<Range<usize>, TextError> {
    let mut offsets = self.buf.char_indices().map(|(i, _)| i).skip(start);
    let begin = if end >= start { offsets.next() } else { None };
    let finish = begin.and_then(|_| {
      let mut rest = offsets.skip(end - start);
      match rest.next() {
        Some(next) => Some(next),
        // nothing follows `end`, so it must be the last character
        None => (self.len() - 1 == end).then_some(self.buf.len()),
      }
    });
    match (begin, finish) {
      (Some(begin), Some(finish)) => Ok(begin..finish),
      _ => Err(TextError::InvalidRange {
        start,
        end,
        len: self.len(),
      }),
    }
  }
}

impl Display for Text {
  #[inline(always)]
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_str(&self.buf)
  }
}

impl Deref for Text {
  type Target = str;

  #[inline(always)]
  fn deref(&self) -> &str {
    &self.buf
  }
}

impl AsRef<str> for Text {
  #[inline(always)]
  fn as_ref(&self) -> &str {
    &self.buf
  }
}

impl From<&str> for Text {
  #[inline]
  fn from(s: &str) -> Self {
    Self { buf: s.into() }
  }
}

impl From<String> for Text {
  #[inline]
  fn from(buf: String) -> Self {
    Self { buf }
  }
}

impl From<Text> for String {
  #[inline]
  fn from(text: Text) -> Self {
    text.buf
  }
}

impl FromStr for Text {
  type Err = Infallible;

  #[inline]
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    Ok(Self::from(s))
  }
}

impl PartialEq<str> for Text {
  fn eq(&self, other: &str) -> bool {
    self.buf == other
  }
}

impl PartialEq<&str> for Text {
  fn eq(&self, other: &&str) -> bool {
    self.buf == *other
  }
}

#[cfg(feature = "serde")]
mod serde_impl {
  use super::*;

  impl serde::Serialize for Text {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
      S: serde::Serializer,
    {
      serializer.serialize_str(&self.buf)
    }
  }

  impl<'de> serde::Deserialize<'de> for Text {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
      D: serde::Deserializer<'de>,
    {
      <String as serde::Deserialize>::deserialize(deserializer).map(Text::from)
    }
  }
}
