//! Contract-violation categories reported by the runtime.
//!
//! A violation is a programming defect, not a recoverable condition: it is
//! never returned in a `Result`, only formatted by the fatal reporter.

use std::error::Error;
use std::fmt;

/// The container kind whose precondition was violated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Container {
    /// A fixed-size `Array<T, N>`.
    Array,
    /// A growable `Slice<T>`.
    Slice,
    /// A null-terminated `ByteString`.
    String,
}

impl Container {
    /// Lower-case name used as the message prefix.
    pub fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Slice => "slice",
            Self::String => "string",
        }
    }
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A violated runtime precondition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    /// An index fell outside the container's valid range.
    IndexOutOfBounds {
        /// Which container kind was accessed.
        container: Container,
        /// The offending index.
        index: usize,
        /// Length of the container at the time of access.
        len: usize,
    },
    /// A pointer that was nil got dereferenced.
    NilDereference,
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds {
                container,
                index,
                len,
            } => {
                write!(
                    f,
                    "{container} index out of bounds: index {index}, length {len}"
                )
            }
            Self::NilDereference => write!(f, "nil pointer dereference"),
        }
    }
}

impl Error for ContractViolation {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_message_names_container() {
        let v = ContractViolation::IndexOutOfBounds {
            container: Container::Slice,
            index: 4,
            len: 3,
        };
        assert_eq!(
            v.to_string(),
            "slice index out of bounds: index 4, length 3"
        );
    }

    #[test]
    fn each_container_has_its_own_prefix() {
        for (container, prefix) in [
            (Container::Array, "array index out of bounds"),
            (Container::Slice, "slice index out of bounds"),
            (Container::String, "string index out of bounds"),
        ] {
            let v = ContractViolation::IndexOutOfBounds {
                container,
                index: 0,
                len: 0,
            };
            assert!(v.to_string().starts_with(prefix));
        }
    }

    #[test]
    fn nil_message() {
        assert_eq!(
            ContractViolation::NilDereference.to_string(),
            "nil pointer dereference"
        );
    }
}
