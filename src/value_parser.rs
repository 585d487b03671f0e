//! # Best-effort numeric-string parsing for catalog values
//!
//! Archive catalogs deliver numeric columns as free-form strings: plain or
//! scientific notation, symmetric uncertainties (`"615.8 ± 19.5"`),
//! asymmetric error notations (`"0.146 +0.318 -0.146"`, with or without a
//! space before the minus), and trailing unit tokens (`"5700 K"`,
//! `"615.8 ppm"`). This module extracts a central value plus uncertainty
//! metadata from such strings, and offers a tolerant boolean parser for flag
//! columns.
//!
//! The parser is self-contained: it has no interaction with the transit
//! search. Regexes are compiled once at first use.
//!
//! ## Example
//! -----------------
//! ```rust
//! use exoseeker::value_parser::{parse_value, Uncertainty};
//!
//! let parsed = parse_value("615.8±19.5").unwrap();
//! assert_eq!(parsed.value, 615.8);
//! assert_eq!(parsed.uncertainty, Uncertainty::Symmetric(19.5));
//!
//! assert!(parse_value("not a number").is_none());
//! ```
//!
//! ## See also
//! ------------
//! * [`KoiFeatures::from_row`](crate::catalog::KoiFeatures::from_row) – Main consumer.
use once_cell::sync::Lazy;
use regex::Regex;

const NUM: &str = r"[+-]?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?";

/// Plain int/float/scientific number, nothing else on the line.
static RE_SCI: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?\s*$").unwrap());

/// Symmetric uncertainty: `v ± s`.
static RE_PM: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*({NUM})\s*±\s*({NUM})\s*$")).unwrap());

/// Asymmetric uncertainty: `v +up -down`, tolerating a missing space before
/// the minus (`"0.146 +0.318-0.146"`).
static RE_ASYM: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"^\s*({NUM})\s*\+\s*({NUM})\s*-\s*({NUM})\s*$")).unwrap());

/// One trailing unit token worth stripping before numeric parsing.
static RE_UNIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s*(ppm|K|mag|deg|days|hrs|hours|AU)\s*$").unwrap());

/// Characters that can never be part of a parseable number.
static RE_CLUTTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d\.\-\+\seE±]").unwrap());

/// Uncertainty metadata attached to a parsed central value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Uncertainty {
    /// No uncertainty notation present.
    None,
    /// `v ± sigma`
    Symmetric(f64),
    /// `v +plus -minus`
    Asymmetric { plus: f64, minus: f64 },
}

/// A central value extracted from a catalog string, with its uncertainty.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedValue {
    pub value: f64,
    pub uncertainty: Uncertainty,
}

impl ParsedValue {
    fn plain(value: f64) -> Self {
        ParsedValue {
            value,
            uncertainty: Uncertainty::None,
        }
    }
}

/// Strip a single trailing unit token (`"5700 K"` → `"5700"`).
///
/// Values like `"615.8±19.5"` pass through untouched; only one unit word at
/// the end of the string is removed.
fn clean_units(raw: &str) -> String {
    RE_UNIT.replace(raw.trim(), "").trim().to_string()
}

/// Parse a catalog string into a central value plus uncertainty metadata.
///
/// Recognized forms, tried in order:
/// 1. `v ± s` – symmetric uncertainty.
/// 2. `v +up -down` – asymmetric uncertainty (space before `-` optional).
/// 3. Plain int/float/scientific number.
/// 4. Last resort: the same after removing non-numeric clutter.
///
/// A single trailing unit token is stripped first. The central value is
/// always the leading number; uncertainty notations never shift it.
///
/// Arguments
/// -----------------
/// * `raw`: the catalog cell content.
///
/// Return
/// ----------
/// * `Some(ParsedValue)` on success, `None` when nothing numeric remains.
pub fn parse_value(raw: &str) -> Option<ParsedValue> {
    let s = clean_units(raw);

    if let Some(caps) = RE_PM.captures(&s) {
        let value: f64 = caps[1].parse().ok()?;
        let sigma: f64 = caps[2].parse().ok()?;
        return Some(ParsedValue {
            value,
            uncertainty: Uncertainty::Symmetric(sigma),
        });
    }

    if let Some(caps) = RE_ASYM.captures(&s) {
        let value: f64 = caps[1].parse().ok()?;
        let plus: f64 = caps[2].parse().ok()?;
        let minus: f64 = caps[3].parse().ok()?;
        return Some(ParsedValue {
            value,
            uncertainty: Uncertainty::Asymmetric { plus, minus },
        });
    }

    if RE_SCI.is_match(&s) {
        if let Ok(value) = s.trim().parse::<f64>() {
            return Some(ParsedValue::plain(value));
        }
    }

    // Last resort: drop clutter (stray unit letters, separators) and retry.
    let stripped = RE_CLUTTER.replace_all(&s, "");
    if stripped != s && RE_SCI.is_match(&stripped) {
        if let Ok(value) = stripped.trim().parse::<f64>() {
            return Some(ParsedValue::plain(value));
        }
    }

    None
}

/// Parse a tolerant boolean from a catalog flag cell.
///
/// Accepts the usual truthy/falsy words (`"true"/"t"/"yes"/"y"/"on"/"1"` and
/// their negative counterparts, case-insensitive); any other numeric value is
/// interpreted as `!= 0`.
///
/// Return
/// ----------
/// * `Some(bool)` when recognized, `None` otherwise.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let s = raw.trim().to_lowercase();
    match s.as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" => return Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" => return Some(false),
        _ => {}
    }
    if RE_SCI.is_match(&s) {
        if let Ok(v) = s.parse::<f64>() {
            return Some(v != 0.0);
        }
    }
    None
}

#[cfg(test)]
mod value_parser_tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(parse_value("10"), Some(ParsedValue::plain(10.0)));
        assert_eq!(parse_value("  -3.25 "), Some(ParsedValue::plain(-3.25)));
        assert_eq!(parse_value("1.2e-3"), Some(ParsedValue::plain(1.2e-3)));
        assert_eq!(parse_value(".5"), Some(ParsedValue::plain(0.5)));
    }

    #[test]
    fn test_symmetric_uncertainty() {
        let parsed = parse_value("615.8±19.5").unwrap();
        assert_eq!(parsed.value, 615.8);
        assert_eq!(parsed.uncertainty, Uncertainty::Symmetric(19.5));

        let spaced = parse_value(" 4.4 ± 0.1 ").unwrap();
        assert_eq!(spaced.value, 4.4);
        assert_eq!(spaced.uncertainty, Uncertainty::Symmetric(0.1));
    }

    #[test]
    fn test_asymmetric_uncertainty() {
        let parsed = parse_value("0.146 +0.318 -0.146").unwrap();
        assert_eq!(parsed.value, 0.146);
        assert_eq!(
            parsed.uncertainty,
            Uncertainty::Asymmetric {
                plus: 0.318,
                minus: 0.146
            }
        );

        // No space before the final minus
        let tight = parse_value("0.146 +0.318-0.146").unwrap();
        assert_eq!(tight.value, 0.146);
    }

    #[test]
    fn test_trailing_units_are_stripped() {
        assert_eq!(parse_value("5700 K").unwrap().value, 5700.0);
        assert_eq!(parse_value("615.8 ppm").unwrap().value, 615.8);
        assert_eq!(parse_value("3.0 hours").unwrap().value, 3.0);
        assert_eq!(parse_value("1.0 AU").unwrap().value, 1.0);
    }

    #[test]
    fn test_units_with_uncertainty() {
        let parsed = parse_value("615.8±19.5 ppm").unwrap();
        assert_eq!(parsed.value, 615.8);
        assert_eq!(parsed.uncertainty, Uncertainty::Symmetric(19.5));
    }

    #[test]
    fn test_unparseable_input() {
        assert_eq!(parse_value(""), None);
        assert_eq!(parse_value("CONFIRMED"), None);
        assert_eq!(parse_value("--"), None);
    }

    #[test]
    fn test_clutter_fallback() {
        // Stray characters around an otherwise plain number
        assert_eq!(parse_value("~1.5*").unwrap().value, 1.5);
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("true"), Some(true));
        assert_eq!(parse_bool("Y"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("0"), Some(false));
        assert_eq!(parse_bool("2.0"), Some(true));
        assert_eq!(parse_bool("0.0"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
