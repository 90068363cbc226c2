use crate::coder::AlphabetCode;

use lazy_static::lazy_static;

/// The 26 uppercase Latin letters, `A = 0` through `Z = 25`.
pub const LATIN_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase Latin letters followed by the ten decimal digits (`0 = 26`).
pub const LATIN_UPPERCASE_DIGITS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

lazy_static! {
    /// A ready-made code over [`LATIN_UPPERCASE`], matching the output of
    /// [`crate::stats::clean_text`].
    pub static ref LATIN_UPPERCASE_CODE: AlphabetCode =
        AlphabetCode::from_unique_symbols(LATIN_UPPERCASE);

    /// A ready-made code over [`LATIN_UPPERCASE_DIGITS`].
    pub static ref LATIN_UPPERCASE_DIGITS_CODE: AlphabetCode =
        AlphabetCode::from_unique_symbols(LATIN_UPPERCASE_DIGITS);
}
