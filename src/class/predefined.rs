//! Ready-made character classes with fixed spellings.
//!
//! The spellings are those of a Java-compatible `Pattern` engine and must be
//! reproduced exactly; a different host engine may not accept all of them.

use std::sync::LazyLock;

use hashbrown::HashMap;

use super::CharClass;

// Shorthand classes

pub const ANY_CHARACTER: CharClass = CharClass::predefined(".");
pub const DIGIT: CharClass = CharClass::predefined("\\d");
pub const NON_DIGIT: CharClass = CharClass::predefined("\\D");
pub const HORIZONTAL_WHITESPACE: CharClass = CharClass::predefined("\\h");
pub const NON_HORIZONTAL_WHITESPACE: CharClass = CharClass::predefined("\\H");
pub const WHITESPACE: CharClass = CharClass::predefined("\\s");
pub const NON_WHITESPACE: CharClass = CharClass::predefined("\\S");
pub const VERTICAL_WHITESPACE: CharClass = CharClass::predefined("\\v");
pub const NON_VERTICAL_WHITESPACE: CharClass = CharClass::predefined("\\V");
pub const WORD_CHARACTER: CharClass = CharClass::predefined("\\w");
pub const NON_WORD_CHARACTER: CharClass = CharClass::predefined("\\W");

// POSIX classes (US-ASCII only)

pub const LOWER_CASE_ALPHABETIC: CharClass = CharClass::predefined("\\p{Lower}");
pub const UPPER_CASE_ALPHABETIC: CharClass = CharClass::predefined("\\p{Upper}");
pub const ALL_ASCII: CharClass = CharClass::predefined("\\p{ASCII}");
pub const ASCII_ALPHABETIC: CharClass = CharClass::predefined("\\p{Alpha}");
pub const DECIMAL_DIGIT: CharClass = CharClass::predefined("\\p{Digit}");
pub const ALPHANUMERIC: CharClass = CharClass::predefined("\\p{Alnum}");
pub const PUNCTUATION: CharClass = CharClass::predefined("\\p{Punct}");
pub const VISIBLE_CHARACTER: CharClass = CharClass::predefined("\\p{Graph}");
pub const PRINTABLE_CHARACTER: CharClass = CharClass::predefined("\\p{Print}");
pub const SPACE_OR_TAB: CharClass = CharClass::predefined("\\p{Blank}");
pub const CONTROL_CHARACTER: CharClass = CharClass::predefined("\\p{Cntrl}");
pub const HEXADECIMAL_DIGIT: CharClass = CharClass::predefined("\\p{XDigit}");

// java.lang.Character classes

pub const JAVA_LOWER_CASE: CharClass = CharClass::predefined("\\p{javaLowerCase}");
pub const JAVA_UPPER_CASE: CharClass = CharClass::predefined("\\p{javaUpperCase}");
pub const JAVA_WHITESPACE: CharClass = CharClass::predefined("\\p{javaWhitespace}");
pub const JAVA_MIRRORED: CharClass = CharClass::predefined("\\p{javaMirrored}");

// Unicode scripts, blocks, categories and binary properties

pub const LATIN_SCRIPT: CharClass = CharClass::predefined("\\p{IsLatin}");
pub const IN_GREEK_BLOCK: CharClass = CharClass::predefined("\\p{InGreek}");
pub const UPPERCASE_LETTER: CharClass = CharClass::predefined("\\p{Lu}");
pub const UNICODE_ALPHABETIC: CharClass = CharClass::predefined("\\p{IsAlphabetic}");
pub const CURRENCY_SYMBOL: CharClass = CharClass::predefined("\\p{Sc}");
pub const NOT_IN_GREEK_BLOCK: CharClass = CharClass::predefined("\\P{InGreek}");
pub const ANY_LETTER_EXCEPT_UPPERCASE: CharClass =
    CharClass::predefined("[\\p{L}&&[^\\p{Lu}]]");
pub const LINE_BREAK: CharClass = CharClass::predefined("\\R");

static REGISTRY: LazyLock<HashMap<&'static str, CharClass>> = LazyLock::new(|| {
    HashMap::from_iter([
        ("any", ANY_CHARACTER),
        ("digit", DIGIT),
        ("non_digit", NON_DIGIT),
        ("horizontal_whitespace", HORIZONTAL_WHITESPACE),
        ("non_horizontal_whitespace", NON_HORIZONTAL_WHITESPACE),
        ("whitespace", WHITESPACE),
        ("non_whitespace", NON_WHITESPACE),
        ("vertical_whitespace", VERTICAL_WHITESPACE),
        ("non_vertical_whitespace", NON_VERTICAL_WHITESPACE),
        ("word", WORD_CHARACTER),
        ("non_word", NON_WORD_CHARACTER),
        ("lower", LOWER_CASE_ALPHABETIC),
        ("upper", UPPER_CASE_ALPHABETIC),
        ("ascii", ALL_ASCII),
        ("alpha", ASCII_ALPHABETIC),
        ("decimal_digit", DECIMAL_DIGIT),
        ("alnum", ALPHANUMERIC),
        ("punct", PUNCTUATION),
        ("graph", VISIBLE_CHARACTER),
        ("print", PRINTABLE_CHARACTER),
        ("blank", SPACE_OR_TAB),
        ("cntrl", CONTROL_CHARACTER),
        ("xdigit", HEXADECIMAL_DIGIT),
        ("java_lower_case", JAVA_LOWER_CASE),
        ("java_upper_case", JAVA_UPPER_CASE),
        ("java_whitespace", JAVA_WHITESPACE),
        ("java_mirrored", JAVA_MIRRORED),
        ("latin", LATIN_SCRIPT),
        ("in_greek", IN_GREEK_BLOCK),
        ("uppercase_letter", UPPERCASE_LETTER),
        ("unicode_alphabetic", UNICODE_ALPHABETIC),
        ("currency_symbol", CURRENCY_SYMBOL),
        ("not_in_greek", NOT_IN_GREEK_BLOCK),
        ("letter_except_uppercase", ANY_LETTER_EXCEPT_UPPERCASE),
        ("line_break", LINE_BREAK),
    ])
});

/// Looks up a predefined class by its registry name.
///
/// The registry is built once and never mutated, so lookups are safe from any
/// thread.
pub fn lookup(name: &str) -> Option<&'static CharClass> {
    REGISTRY.get(name)
}
