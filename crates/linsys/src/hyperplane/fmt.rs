use std::fmt;

use itertools::Itertools;

use super::Hyperplane;

/// Rounds `value` to 3 decimal places, turning `-0.0` into `0.0`.
pub(crate) fn round(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// A variable name with a 0-based index, printed 1-based (`x_1`, `t_3`).
#[derive(Clone, Copy)]
pub(crate) struct Variable {
    pub(crate) name: &'static str,
    pub(crate) index: usize,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.name, self.index + 1)
    }
}

/// One term of a sum, like `- 2.5x_2`.
///
/// The leading term of a sum is printed without a `+` and without a space after its sign.
pub(crate) struct Term {
    pub(crate) coefficient: f64,
    pub(crate) variable: Variable,
    pub(crate) leading: bool,
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficient = round(self.coefficient);
        match (self.leading, coefficient < 0.0) {
            (true, true) => f.write_str("-")?,
            (true, false) => {}
            (false, true) => f.write_str("- ")?,
            (false, false) => f.write_str("+ ")?,
        }

        let magnitude = coefficient.abs();
        if magnitude != 1.0 {
            write!(f, "{magnitude}")?;
        }
        write!(f, "{}", self.variable)
    }
}

/// Writes `coefficients` as a sum of terms in the variable `name`, skipping zero terms.
///
/// If `leading` is `false`, the sum continues an expression that was already written, so every
/// term gets a `+`/`-` operator. Returns whether anything was written.
pub(crate) fn write_terms(
    f: &mut fmt::Formatter<'_>,
    name: &'static str,
    coefficients: impl IntoIterator<Item = (usize, f64)>,
    leading: bool,
) -> Result<bool, fmt::Error> {
    let terms = coefficients
        .into_iter()
        .filter(|&(_, coefficient)| round(coefficient) != 0.0)
        .enumerate()
        .map(|(position, (index, coefficient))| Term {
            coefficient,
            variable: Variable { name, index },
            leading: leading && position == 0,
        })
        .collect::<Vec<_>>();

    if !leading && !terms.is_empty() {
        f.write_str(" ")?;
    }
    write!(f, "{}", terms.iter().format(" "))?;
    Ok(!terms.is_empty())
}

impl fmt::Display for Hyperplane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let coefficients = self.normal_vector.iter().copied().enumerate();
        if !write_terms(f, "x", coefficients, true)? {
            f.write_str("0")?;
        }
        write!(f, " = {}", round(self.constant_term))
    }
}
