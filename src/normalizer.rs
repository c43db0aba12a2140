//! Text normalization applied before address matching.
//!
//! The country grammars are written against a canonical form of the input:
//! single spaces, a single space after every comma, no space before a comma,
//! ASCII hyphens, and line breaks rendered as comma separators so that an
//! address spanning several lines reads as one comma-delimited line. The
//! transform is fixed and deterministic, not a heuristic, and is idempotent.

use std::sync::LazyLock;

use regex::Regex;

/// Unicode hyphen/dash variants (U+2010..U+2015) collapsed to `-`.
static UNICODE_DASHES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{2010}-\x{2015}]").expect("dash pattern must compile"));

/// A line break acts as a soft separator and becomes `", "`.
static LINE_BREAKS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r*\n").expect("line break pattern must compile"));

static WHITESPACE_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern must compile"));

static SPACE_BEFORE_COMMA: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+,").expect("space-before-comma pattern must compile"));

/// Comma runs appear when a line break followed an existing comma.
static COMMA_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",{2,}").expect("comma run pattern must compile"));

static COMMA_WITHOUT_SPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",(\S)").expect("comma spacing pattern must compile"));

/// Canonicalize raw input text into the form the grammars are written against.
///
/// Pure and total: never fails, and `normalize(normalize(t)) == normalize(t)`
/// for any input. Casing is left untouched; the grammars match
/// case-insensitively.
///
/// # Example
///
/// ```rust
/// let clean = addrgrep::normalize("225 E. John Carpenter Freeway\nSuite 1500\nIrving, Texas");
/// assert_eq!(clean, "225 E. John Carpenter Freeway, Suite 1500, Irving, Texas");
/// ```
pub fn normalize(text: &str) -> String {
    let text = UNICODE_DASHES.replace_all(text, "-");
    let text = LINE_BREAKS.replace_all(&text, ", ");
    let text = WHITESPACE_RUNS.replace_all(&text, " ");
    let text = SPACE_BEFORE_COMMA.replace_all(&text, ",");
    let text = COMMA_RUNS.replace_all(&text, ",");
    let text = COMMA_WITHOUT_SPACE.replace_all(&text, ", $1");
    text.into_owned()
}
