//! C declaration wrapper around the escaped stream.
//!
//! Given a symbol name `NAME`, the generated file exports
//! `const char NAME[]` holding the data and `const size_t NAME_len` holding
//! its length without the terminating NUL.
use alloc::{format, string::String};

use crate::error::DeclarationError;

/// A validated C symbol name and the text surrounding the escaped data.
///
/// ```rust
/// use bin2c::Declaration;
///
/// let decl = Declaration::new("blob").unwrap();
/// assert_eq!(decl.prologue(), "#include <stdlib.h>\nconst char blob[] = \"\\\n");
/// assert!(Declaration::new("2fast").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    name: String,
}

impl Declaration {
    /// Validates `name` as a C identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`DeclarationError`] unless `name` matches
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn new(name: impl Into<String>) -> Result<Self, DeclarationError> {
        let name = name.into();
        if is_c_identifier(&name) {
            Ok(Self { name })
        } else {
            Err(DeclarationError { name })
        }
    }

    /// The symbol name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Text emitted before the escaped data. Ends inside an open string
    /// literal, after a line continuation.
    #[must_use]
    pub fn prologue(&self) -> String {
        format!("#include <stdlib.h>\nconst char {}[] = \"\\\n", self.name)
    }

    /// Text emitted after the escaped data.
    #[must_use]
    pub fn epilogue(&self) -> String {
        format!(
            "\";\nconst size_t {name}_len = sizeof({name}) - 1;\n",
            name = self.name
        )
    }
}

fn is_c_identifier(name: &str) -> bool {
    let mut bytes = name.bytes();
    bytes
        .next()
        .is_some_and(|b| b == b'_' || b.is_ascii_alphabetic())
        && bytes.all(|b| b == b'_' || b.is_ascii_alphanumeric())
}
