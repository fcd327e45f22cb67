/// Configuration for [`convert_numerals`](crate::numeral::convert_numerals).
///
/// # Examples
///
/// ```rust
/// use textbricks::{ConvertOptions, NumeralSystem, convert_numerals};
///
/// let options = ConvertOptions {
///     drop_unmatched: true,
///     ..Default::default()
/// };
/// let out = convert_numerals("12 x 7", NumeralSystem::Decimal, NumeralSystem::Roman, options);
/// assert_eq!(out, "XII  VII");
/// ```
///
/// # Default
///
/// All options default to `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(default))]
pub struct ConvertOptions {
    /// Whether tokens that cannot be converted are removed from the output.
    ///
    /// When `false`, such tokens are copied through unchanged. Whitespace
    /// around a removed token is kept either way.
    ///
    /// # Default
    ///
    /// `false`
    pub drop_unmatched: bool,

    /// Whether only ASCII whitespace separates tokens.
    ///
    /// By default any Unicode whitespace (for example U+00A0 or U+3000)
    /// separates numerals, which suits pasted text.
    ///
    /// # Default
    ///
    /// `false`
    pub ascii_whitespace_only: bool,
}

impl ConvertOptions {
    pub(crate) fn is_separator(self, c: char) -> bool {
        if self.ascii_whitespace_only {
            c.is_ascii_whitespace()
        } else {
            c.is_whitespace()
        }
    }
}
