//! Null/whitespace string checks.
//!
//! [`StrExt`] answers "is there any text here?" uniformly for `str`,
//! `String`, and optional strings, so form validation code does not need
//! to unwrap before checking.
//!
//! ```
//! use horizon_lattice_extensions::StrExt;
//!
//! let missing: Option<&str> = None;
//! assert!(missing.is_null_or_empty());
//! assert!(Some(" \t").is_null_or_whitespace());
//! assert!(!"text".is_null_or_whitespace());
//! ```

/// Emptiness checks on possibly absent strings.
pub trait StrExt {
    /// `true` if the string is absent or has zero length.
    fn is_null_or_empty(&self) -> bool;

    /// `true` if the string is absent, empty, or contains only whitespace.
    ///
    /// Whitespace is anything [`char::is_whitespace`] accepts (the Unicode
    /// `White_Space` property).
    fn is_null_or_whitespace(&self) -> bool;
}

impl StrExt for str {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.chars().all(char::is_whitespace)
    }
}

impl StrExt for String {
    fn is_null_or_empty(&self) -> bool {
        self.as_str().is_null_or_empty()
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.as_str().is_null_or_whitespace()
    }
}

impl<S: AsRef<str>> StrExt for Option<S> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref()
            .map(AsRef::<str>::as_ref)
            .is_none_or(<str as StrExt>::is_null_or_empty)
    }

    fn is_null_or_whitespace(&self) -> bool {
        self.as_ref()
            .map(AsRef::<str>::as_ref)
            .is_none_or(<str as StrExt>::is_null_or_whitespace)
    }
}
