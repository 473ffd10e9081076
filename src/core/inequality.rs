//! Linear inequalities over three variables and their canonical form.
//!
//! `a·x ≤ b` becomes `(-b, -a)`, `a·x ≥ b` stays `(b, a)`, and `a·x = b` is the
//! pair of both directions (`≤` first).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Number of variables in every inequality (x1, x2, x3).
pub const DIM: usize = 3;

/// Errors turning user text into an inequality.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InequalityError {
    #[error("unrecognized sign '{0}' (expected <=, >= or =)")]
    InvalidSign(String),
    #[error("{field}: '{value}' is not a number")]
    InvalidNumber { field: &'static str, value: String },
}

/// Comparison sign of an inequality row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sign {
    #[serde(rename = "<=")]
    Le,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "=")]
    Eq,
}

impl Sign {
    /// ASCII spelling, as accepted on input and written to text sources.
    pub fn as_str(self) -> &'static str {
        match self {
            Sign::Le => "<=",
            Sign::Ge => ">=",
            Sign::Eq => "=",
        }
    }

    /// Mathematical symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Sign::Le => "≤",
            Sign::Ge => "≥",
            Sign::Eq => "=",
        }
    }

    /// Next sign in selector order (wraps).
    pub fn next(self) -> Sign {
        match self {
            Sign::Le => Sign::Ge,
            Sign::Ge => Sign::Eq,
            Sign::Eq => Sign::Le,
        }
    }

    /// Previous sign in selector order (wraps).
    pub fn prev(self) -> Sign {
        match self {
            Sign::Le => Sign::Eq,
            Sign::Ge => Sign::Le,
            Sign::Eq => Sign::Ge,
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sign {
    type Err = InequalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(Sign::Le),
            ">=" | "≥" => Ok(Sign::Ge),
            "=" | "==" => Ok(Sign::Eq),
            other => Err(InequalityError::InvalidSign(other.to_string())),
        }
    }
}

/// One user-entered constraint `coeffs·x SIGN rhs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Inequality {
    pub coeffs: [f64; DIM],
    pub sign: Sign,
    pub rhs: f64,
}

impl Inequality {
    pub fn new(coeffs: [f64; DIM], sign: Sign, rhs: f64) -> Self {
        Self { coeffs, sign, rhs }
    }

    /// Canonical constraints for this inequality.
    pub fn normalize(&self) -> Vec<CanonicalConstraint> {
        normalize(self.coeffs, self.sign, self.rhs)
    }
}

/// Normalized constraint: a `(rhs, coeffs)` tuple in the polyhedron's `ieqs` list.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanonicalConstraint {
    pub rhs: f64,
    pub coeffs: [f64; DIM],
}

impl CanonicalConstraint {
    /// The tuple as emitted: rhs followed by the three coefficients.
    pub fn tuple(&self) -> [f64; DIM + 1] {
        [self.rhs, self.coeffs[0], self.coeffs[1], self.coeffs[2]]
    }
}

/// Convert one inequality into canonical constraints. Pure.
///
/// Returns exactly one constraint for `≤` and `≥`, and two for `=`.
/// Zero entries are always `+0.0`, never `-0.0`.
pub fn normalize(coeffs: [f64; DIM], sign: Sign, rhs: f64) -> Vec<CanonicalConstraint> {
    match sign {
        Sign::Le => vec![CanonicalConstraint {
            rhs: -rhs + 0.0,
            coeffs: coeffs.map(|c| -c + 0.0),
        }],
        Sign::Ge => vec![CanonicalConstraint {
            rhs: rhs + 0.0,
            coeffs: coeffs.map(|c| c + 0.0),
        }],
        Sign::Eq => {
            let mut out = normalize(coeffs, Sign::Le, rhs);
            out.extend(normalize(coeffs, Sign::Ge, rhs));
            out
        }
    }
}

/// Normalize every inequality in order and concatenate the results.
pub fn normalize_all(inequalities: &[Inequality]) -> Vec<CanonicalConstraint> {
    let out: Vec<CanonicalConstraint> = inequalities.iter().flat_map(Inequality::normalize).collect();
    log::debug!(
        "normalized {} inequalities into {} constraints",
        inequalities.len(),
        out.len()
    );
    out
}

/// Parse a coefficient or right-hand side. Rejects empty text, NaN and infinities.
pub fn parse_number(field: &'static str, value: &str) -> Result<f64, InequalityError> {
    let invalid = || InequalityError::InvalidNumber {
        field,
        value: value.to_string(),
    };
    let v: f64 = value.trim().parse().map_err(|_| invalid())?;
    if v.is_finite() { Ok(v) } else { Err(invalid()) }
}

/// Parse the five raw strings of a form row into an inequality.
pub fn parse_parts(
    x1: &str,
    x2: &str,
    x3: &str,
    sign: &str,
    rhs: &str,
) -> Result<Inequality, InequalityError> {
    let sign: Sign = sign.parse()?;
    let coeffs = [
        parse_number("x1", x1)?,
        parse_number("x2", x2)?,
        parse_number("x3", x3)?,
    ];
    let rhs = parse_number("rhs", rhs)?;
    Ok(Inequality::new(coeffs, sign, rhs))
}
