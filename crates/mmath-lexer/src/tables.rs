//! The closed vocabulary of the Metric Math language.
//!
//! Three literal tables -- built-in function names, reserved keywords, and
//! operator symbols -- each compiled once into an anchored alternation
//! matcher cached for the process lifetime. Table membership determines
//! classification; table order does not: members are sorted longest-first
//! before joining so no multi-character entry can be shadowed by one of its
//! prefixes (`LOG10` by `LOG`, `==` by `=`-shaped neighbors).

use once_cell::sync::Lazy;
use regex::Regex;

/// Built-in function names. Matching is exact-case; the language is
/// case-sensitive for function names.
pub const METRIC_MATH_FNS: &[&str] = &[
    "ABS",
    "ANOMALY_DETECTION_BAND",
    "AVG",
    "CEIL",
    "DATAPOINT_COUNT",
    "DIFF",
    "DIFF_TIME",
    "FILL",
    "FIRST",
    "LAST",
    "FLOOR",
    "IF",
    "INSIGHT_RULE_METRIC",
    "LOG",
    "LOG10",
    "MAX",
    "METRIC_COUNT",
    "METRICS",
    "MIN",
    "MINUTE",
    "HOUR",
    "DAY",
    "DATE",
    "MONTH",
    "YEAR",
    "EPOCH",
    "PERIOD",
    "RATE",
    "REMOVE_EMPTY",
    "RUNNING_SUM",
    "SEARCH",
    "SERVICE_QUOTA",
    "SLICE",
    "SORT",
    "STDDEV",
    "SUM",
    "TIME_SERIES",
];

/// Standalone magic arguments accepted by specific functions (ordering and
/// fill-shape hints). Lexically identifier-shaped but reserved.
pub const METRIC_MATH_KEYWORDS: &[&str] = &["REPEAT", "LINEAR", "ASC", "DSC"];

/// Arithmetic, comparison, and logical operators, including the word
/// operators `AND` and `OR`.
pub const METRIC_MATH_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "^", "==", "!=", "<=", ">=", "<", ">", "AND", "&&", "OR", "||",
];

/// Compile a literal table into one anchored alternation.
///
/// Every member is regex-escaped; members are sorted longest-first (then
/// lexicographically, for determinism) so matching is independent of table
/// order.
fn alternation(words: &[&str]) -> Regex {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    let pattern = sorted
        .iter()
        .map(|w| regex::escape(w))
        .collect::<Vec<_>>()
        .join("|");
    // Static data, not user input: a failure to compile is a bug in the
    // tables themselves.
    Regex::new(&format!("^(?:{pattern})")).expect("lexical table pattern must compile")
}

pub(crate) static FUNCTIONS_RE: Lazy<Regex> = Lazy::new(|| alternation(METRIC_MATH_FNS));
pub(crate) static KEYWORDS_RE: Lazy<Regex> = Lazy::new(|| alternation(METRIC_MATH_KEYWORDS));
pub(crate) static OPERATORS_RE: Lazy<Regex> = Lazy::new(|| alternation(METRIC_MATH_OPERATORS));
