//! Null-terminated byte strings.
//!
//! A [`ByteString`] is a [`Slice<u8>`](crate::Slice) whose last element is
//! always a `0` terminator. The terminator is not part of the reported
//! length and cannot be indexed, but it is present in the buffer so the
//! string can be handed to terminator-based text consumers as-is.

use std::ffi::{c_char, CStr};
use std::fmt;
use std::io;
use std::ops::Index;

use gx_core::{Container, Print};

use crate::check;
use crate::slice::Slice;

/// An owned, null-terminated byte string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteString {
    /// Live bytes followed by exactly one `0`; never empty.
    bytes: Slice<u8>,
}

impl ByteString {
    /// The empty string: a buffer holding only the terminator.
    pub fn new() -> Self {
        Self {
            bytes: Slice::from([0u8]),
        }
    }

    /// Copy `bytes` up to (not including) the first `0`, or all of them if
    /// there is none, and append a terminator.
    ///
    /// The buffer has exactly `length + 1` slots.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
        let mut out = Slice::with_capacity(len + 1);
        out.extend(bytes[..len].iter().copied());
        out.append(0);
        Self { bytes: out }
    }

    /// Copy UTF-8 text. Stops at an embedded `\0`, like any C string.
    pub fn from_text(text: &str) -> Self {
        Self::from_bytes(text.as_bytes())
    }

    /// Copy a C string.
    pub fn from_c_str(text: &CStr) -> Self {
        Self::from_bytes(text.to_bytes())
    }

    /// Number of bytes, excluding the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Whether the string has no bytes before the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The byte at `index`.
    ///
    /// Reports `string index out of bounds` and terminates unless
    /// `index < len()`. The terminator is not addressable.
    #[inline]
    pub fn get(&self, index: usize) -> u8 {
        *check::elem(Container::String, self.as_bytes(), index)
    }

    /// The bytes, excluding the terminator.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        let all = self.bytes.as_slice();
        &all[..all.len() - 1]
    }

    /// The bytes, including the terminator.
    #[inline]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        self.bytes.as_slice()
    }

    /// The buffer as a C string.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_with_nul(self.as_bytes_with_nul())
            .expect("byte strings hold exactly one terminator, at the end")
    }

    /// Address of the first byte, for terminator-based consumers.
    ///
    /// The pointer borrows the buffer: it must not be used after the
    /// string is mutated or dropped.
    #[inline]
    pub fn as_ptr(&self) -> *const c_char {
        self.bytes.as_ptr().cast()
    }

    /// Iterate over the bytes, excluding the terminator.
    #[inline]
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, u8>> {
        self.as_bytes().iter().copied()
    }
}

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ByteString {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<&CStr> for ByteString {
    fn from(text: &CStr) -> Self {
        Self::from_c_str(text)
    }
}

impl PartialEq<str> for ByteString {
    fn eq(&self, other: &str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Index<usize> for ByteString {
    type Output = u8;

    #[inline]
    fn index(&self, index: usize) -> &u8 {
        check::elem(Container::String, self.as_bytes(), index)
    }
}

impl<'a> IntoIterator for &'a ByteString {
    type Item = u8;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, u8>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl Print for ByteString {
    fn print_to(&self, out: &mut dyn io::Write) -> io::Result<()> {
        out.write_all(self.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_string_holds_only_terminator() {
        let s = ByteString::new();
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.as_bytes_with_nul(), b"\0");
        assert_eq!(s.as_c_str(), c"");
    }

    #[test]
    fn buffer_is_exactly_length_plus_one() {
        let s = ByteString::from("abc");
        assert_eq!(s.bytes.len(), 4);
        assert_eq!(s.bytes.capacity(), 4);
        assert_eq!(s.as_bytes_with_nul(), b"abc\0");
    }

    #[test]
    fn construction_stops_at_embedded_terminator() {
        let s = ByteString::from_bytes(b"ab\0cd");
        assert_eq!(s.len(), 2);
        assert_eq!(s, "ab");
    }

    #[test]
    fn equality_includes_length() {
        assert_eq!(ByteString::from("foo"), ByteString::from("foo"));
        assert_ne!(ByteString::from("foo"), ByteString::from("fo"));
        assert_ne!(ByteString::from("foo"), ByteString::from("fao"));
        assert!(ByteString::from("foo") == "foo");
        assert!(ByteString::from("foo") != "nope");
    }

    #[test]
    fn c_str_round_trip() {
        let s = ByteString::from_c_str(c"hello");
        assert_eq!(s.as_c_str(), c"hello");
        assert_eq!(s.to_string(), "hello");
    }

    #[test]
    fn debug_and_display() {
        let s = ByteString::from("a\"b");
        assert_eq!(format!("{s}"), "a\"b");
        assert_eq!(format!("{s:?}"), "\"a\\\"b\"");
    }
}
