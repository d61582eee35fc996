//! Numeric profit values and their column-level type.
//!
//! A `TotalProfit` cell is read as an integer when it can be, as a float
//! otherwise, and as [`Profit::Missing`] when it holds one of the usual
//! missing-value markers ([`NA_VALUES`]). The column as a whole is then typed
//! by [`NumericKind`], which decides how the values are written back out.

use std::cmp::Ordering;

/// Most decimals ever shown for a float column.
const MAX_DECIMALS: usize = 6;

/// Cells that mean "no value". Matched exactly, before any trimming.
pub const NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Float columns switch to scientific notation when a value reaches this size
const SCIENTIFIC_ABOVE: f64 = 1e16;
/// ...or when a non-zero value is smaller than this
const SCIENTIFIC_BELOW: f64 = 1e-4;

/// A single parsed profit value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profit {
    /// Whole-number value
    Int(i64),
    /// Fractional (or out of `i64` range) value
    Float(f64),
    /// Missing-value marker or NaN
    Missing,
}

impl Profit {
    /// Parse a raw CSV cell. Returns `None` when the cell is not numeric.
    ///
    /// Surrounding whitespace is allowed around a number, but a cell of only
    /// whitespace is text, not a missing value.
    pub fn parse(raw: &str) -> Option<Profit> {
        if NA_VALUES.contains(&raw) {
            return Some(Profit::Missing);
        }
        let s = raw.trim();
        if s.is_empty() {
            return None;
        }
        if let Ok(v) = s.parse::<i64>() {
            return Some(Profit::Int(v));
        }
        match s.parse::<f64>() {
            Ok(v) if v.is_nan() => Some(Profit::Missing),
            Ok(v) => Some(Profit::Float(v)),
            Err(_) => None,
        }
    }

    /// Value as `f64`, or `None` when missing.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Profit::Int(v) => Some(*v as f64),
            Profit::Float(v) => Some(*v),
            Profit::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Profit::Missing)
    }

    /// Numeric comparison. Missing values compare below every present value.
    pub fn compare(&self, other: &Profit) -> Ordering {
        match (self, other) {
            (Profit::Int(a), Profit::Int(b)) => a.cmp(b),
            (Profit::Missing, Profit::Missing) => Ordering::Equal,
            (Profit::Missing, _) => Ordering::Less,
            (_, Profit::Missing) => Ordering::Greater,
            (a, b) => {
                // Neither side is NaN: parse() maps NaN to Missing.
                let a = a.as_f64().unwrap_or_default();
                let b = b.as_f64().unwrap_or_default();
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
        }
    }
}

/// Inferred type of a whole profit column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericKind {
    /// Every value is a whole number
    #[default]
    Integer,
    /// At least one value is fractional or missing
    Float,
}

impl NumericKind {
    /// Infer the kind of a column from its values.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Profit>) -> Self {
        if values
            .into_iter()
            .all(|v| matches!(v, Profit::Int(_)))
        {
            NumericKind::Integer
        } else {
            NumericKind::Float
        }
    }
}

/// Format profit values for display.
///
/// Integer columns print plain integers. Float columns print every value
/// with the same number of decimals: as many as the most precise value
/// needs, at least one and at most six. When any value is very large or
/// very small, the whole column uses scientific notation instead.
pub fn format_profits(values: &[Profit], kind: NumericKind) -> Vec<String> {
    match kind {
        NumericKind::Integer => values.iter().map(format_plain).collect(),
        NumericKind::Float => {
            let finite: Vec<f64> = values
                .iter()
                .filter_map(|v| v.as_f64())
                .filter(|v| v.is_finite())
                .collect();
            let scientific = finite.iter().any(|v| {
                let abs = v.abs();
                abs >= SCIENTIFIC_ABOVE || (abs > 0.0 && abs < SCIENTIFIC_BELOW)
            });

            let decimals = finite
                .iter()
                .map(|v| {
                    if scientific {
                        shortest_decimals(&format!("{:e}", v))
                    } else {
                        shortest_decimals(&v.to_string())
                    }
                })
                .max()
                .unwrap_or(1)
                .clamp(1, MAX_DECIMALS);

            values
                .iter()
                .map(|v| match v.as_f64() {
                    Some(f) if f.is_finite() && scientific => format_scientific(f, decimals),
                    Some(f) if f.is_finite() => format!("{:.prec$}", f, prec = decimals),
                    Some(f) => f.to_string(),
                    None => "NaN".to_string(),
                })
                .collect()
        }
    }
}

fn format_plain(value: &Profit) -> String {
    match value {
        Profit::Int(v) => v.to_string(),
        Profit::Float(v) => v.to_string(),
        Profit::Missing => "NaN".to_string(),
    }
}

/// `1.5e+300` style: signed exponent of at least two digits.
fn format_scientific(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$e}", value, prec = decimals);
    match formatted.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => formatted,
    }
}

/// Decimals of a number's shortest round-trip representation.
fn shortest_decimals(repr: &str) -> usize {
    let mantissa = repr.split_once('e').map_or(repr, |(m, _)| m);
    mantissa
        .split_once('.')
        .map(|(_, frac)| frac.len())
        .unwrap_or(0)
}
