//! Greedy, ordered, multi-character token substitution.
//!
//! Used to re-skin a fixed alphabet of symbols (for example the dots and
//! dashes of a Morse-style code) with caller-chosen marks, and to reverse that
//! mapping.
//!
//! At each position the source tokens are tried in list order and the first
//! literal match wins, so earlier tokens take priority over later ones even
//! when a later token is longer. A character that starts no token is dropped.

use alloc::{
    string::{String, ToString},
    vec::Vec,
};

use crate::error::{CodecError, Result};

/// Replaces the tokens of `from` found in `input` with the token at the same
/// position in `to`.
///
/// # Errors
///
/// - [`CodecError::MarkCountMismatch`] if `from` and `to` differ in length.
/// - [`CodecError::EmptyMark`] if a token of `from` is empty.
///
/// # Examples
///
/// ```rust
/// use textbricks::translate;
///
/// assert_eq!(translate("..-.", &[".", "-"], &["X", "Y"]).unwrap(), "XXYX");
/// assert_eq!(translate("a.-", &[".", "-"], &["X", "Y"]).unwrap(), "XY");
/// ```
pub fn translate<F, T>(input: &str, from: &[F], to: &[T]) -> Result<String>
where
    F: AsRef<str>,
    T: AsRef<str>,
{
    check_tokens(from, to.len())?;
    Ok(translate_unchecked(input, from, to))
}

fn check_tokens<F: AsRef<str>>(from: &[F], to_len: usize) -> Result<()> {
    if from.len() != to_len {
        return Err(CodecError::MarkCountMismatch {
            from: from.len(),
            to: to_len,
        });
    }
    match from.iter().position(|token| token.as_ref().is_empty()) {
        Some(index) => Err(CodecError::EmptyMark { index }),
        None => Ok(()),
    }
}

fn translate_unchecked<F, T>(input: &str, from: &[F], to: &[T]) -> String
where
    F: AsRef<str>,
    T: AsRef<str>,
{
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(c) = rest.chars().next() {
        match from.iter().position(|token| rest.starts_with(token.as_ref())) {
            Some(i) => {
                out.push_str(to[i].as_ref());
                rest = &rest[from[i].as_ref().len()..];
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }
    out
}

/// A validated, reusable token table.
///
/// # Examples
///
/// ```rust
/// use textbricks::MarkTable;
///
/// let skin = MarkTable::dot_dash("🔴", "🔵");
/// let skinned = skin.translate(".- -...");
/// assert_eq!(skinned, "🔴🔵 🔵🔴🔴🔴");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkTable {
    from: Vec<String>,
    to: Vec<String>,
}

impl MarkTable {
    /// Builds a table mapping `from[i]` to `to[i]`.
    ///
    /// # Errors
    ///
    /// The same conditions as [`translate`].
    pub fn new<F, T>(from: &[F], to: &[T]) -> Result<Self>
    where
        F: AsRef<str>,
        T: AsRef<str>,
    {
        check_tokens(from, to.len())?;
        Ok(Self {
            from: from.iter().map(|s| s.as_ref().to_string()).collect(),
            to: to.iter().map(|s| s.as_ref().to_string()).collect(),
        })
    }

    /// Builds a table from `(from, to)` pairs.
    ///
    /// # Errors
    ///
    /// [`CodecError::EmptyMark`] if a source token is empty.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let (from, to): (Vec<&str>, Vec<&str>) = pairs.into_iter().unzip();
        Self::new(&from, &to)
    }

    /// Maps the two-symbol alphabet `.`/`-` onto `dot` and `dash`.
    ///
    /// Space is kept as a separator.
    #[must_use]
    pub fn dot_dash(dot: &str, dash: &str) -> Self {
        Self {
            from: Vec::from([".".into(), "-".into(), " ".into()]),
            to: Vec::from([dot.into(), dash.into(), " ".into()]),
        }
    }

    /// Applies the table to `input`.
    #[must_use]
    pub fn translate(&self, input: &str) -> String {
        translate_unchecked(input, &self.from, &self.to)
    }

    /// Returns the table mapping targets back to sources.
    ///
    /// # Errors
    ///
    /// [`CodecError::EmptyMark`] if a target token is empty and so cannot be
    /// matched.
    pub fn inverse(&self) -> Result<Self> {
        Self::new(&self.to, &self.from)
    }

    /// Number of token pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.from.len()
    }

    /// Returns `true` if the table has no pairs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.from.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;

    #[test]
    fn replaces_in_order() {
        assert_eq!(translate("..-.", &[".", "-"], &["X", "Y"]).unwrap(), "XXYX");
    }

    #[test]
    fn unmatched_characters_are_dropped() {
        assert_eq!(translate("a.-", &[".", "-"], &["X", "Y"]).unwrap(), "XY");
        assert_eq!(translate("é🎉.", &["."], &["X"]).unwrap(), "X");
    }

    #[test]
    fn earlier_tokens_win_over_longer_ones() {
        assert_eq!(translate("abc", &["a", "ab"], &["1", "2"]).unwrap(), "1");
        assert_eq!(translate("abc", &["ab", "a"], &["1", "2"]).unwrap(), "1");
        assert_eq!(translate("aab", &["ab", "a"], &["1", "2"]).unwrap(), "21");
    }

    #[test]
    fn multi_character_marks_round_trip() {
        let table = MarkTable::new(&[".", "-"], &["dit", "dah"]).unwrap();
        let skinned = table.translate("..-");
        assert_eq!(skinned, "ditditdah");
        assert_eq!(table.inverse().unwrap().translate(&skinned), "..-");
    }

    #[test]
    fn replacements_may_be_empty() {
        assert_eq!(translate("a-b", &["-"], &[""]).unwrap(), "");
    }

    #[test]
    fn invalid_tables() {
        assert_eq!(
            translate("x", &[".", "-"], &["X"]),
            Err(CodecError::MarkCountMismatch { from: 2, to: 1 })
        );
        assert_eq!(
            translate("x", &[".", ""], &["X", "Y"]),
            Err(CodecError::EmptyMark { index: 1 })
        );
        let table = MarkTable::new(&["."], &[""]).unwrap();
        assert_eq!(table.inverse(), Err(CodecError::EmptyMark { index: 0 }));
    }

    #[test]
    fn pairs_and_dot_dash() {
        let table = MarkTable::from_pairs(vec![(".", "0"), ("-", "1")]).unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.is_empty());
        assert_eq!(table.translate("-.-"), "101");

        let skin = MarkTable::dot_dash("*", "~~");
        assert_eq!(skin.translate(".- -..."), "*~~ ~~***");
        assert_eq!(skin.inverse().unwrap().translate("*~~ ~~***"), ".- -...");
    }

    #[test]
    fn empty_input() {
        assert_eq!(translate("", &["."], &["X"]).unwrap(), "");
        let empty: [&str; 0] = [];
        assert_eq!(translate("abc", &empty, &empty).unwrap(), "");
    }
}
