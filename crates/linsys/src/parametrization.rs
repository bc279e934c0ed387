use std::fmt;

use linsys_linalg::{Error, Vector};

use crate::hyperplane::fmt::{round, write_terms};

/// The solution set of a [`LinearSystem`][crate::LinearSystem]: a basepoint plus any linear
/// combination of the direction vectors.
///
/// Every point `basepoint + t_1·d_1 + … + t_k·d_k` solves the system. A parametrization without
/// direction vectors describes a unique solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Parametrization {
    basepoint: Vector,
    direction_vectors: Vec<Vector>,
}

impl Parametrization {
    /// Creates a parametrization from a basepoint and a list of direction vectors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if any direction vector has a different dimension than
    /// `basepoint`.
    pub fn new(basepoint: Vector, direction_vectors: Vec<Vector>) -> Result<Self, Error> {
        if let Some(direction) = direction_vectors
            .iter()
            .find(|d| d.dimension() != basepoint.dimension())
        {
            return Err(Error::DimensionMismatch {
                expected: basepoint.dimension(),
                found: direction.dimension(),
            });
        }

        Ok(Self {
            basepoint,
            direction_vectors,
        })
    }

    #[inline]
    pub fn basepoint(&self) -> &Vector {
        &self.basepoint
    }

    /// Returns the direction vectors, one per free variable, in ascending order of the free
    /// variable's column.
    #[inline]
    pub fn direction_vectors(&self) -> &[Vector] {
        &self.direction_vectors
    }

    #[inline]
    pub fn dimension(&self) -> usize {
        self.basepoint.dimension()
    }

    /// Returns whether this parametrization describes exactly one point.
    #[inline]
    pub fn is_unique(&self) -> bool {
        self.direction_vectors.is_empty()
    }

    /// Evaluates the parametrization at the given parameter values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] unless there is exactly one parameter per direction
    /// vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use linsys::{Parametrization, linalg::{vec2, Error}};
    /// let line = Parametrization::new(vec2(1.0, 0.0), vec![vec2(-1.0, 1.0)])?;
    /// assert_eq!(line.point_at(&[2.0])?, vec2(-1.0, 2.0));
    /// assert_eq!(
    ///     line.point_at(&[]),
    ///     Err(Error::DimensionMismatch { expected: 1, found: 0 })
    /// );
    ///
    /// let point = Parametrization::new(vec2(1.0, 0.0), vec![])?;
    /// assert_eq!(point.point_at(&[])?, vec2(1.0, 0.0));
    /// # Ok::<_, linsys::linalg::Error>(())
    /// ```
    pub fn point_at(&self, params: &[f64]) -> Result<Vector, Error> {
        if params.len() != self.direction_vectors.len() {
            return Err(Error::DimensionMismatch {
                expected: self.direction_vectors.len(),
                found: params.len(),
            });
        }

        if params.is_empty() {
            return Ok(self.basepoint.clone());
        }

        Ok(Vector::from_fn(self.dimension(), |i| {
            self.basepoint[i]
                + params
                    .iter()
                    .zip(&self.direction_vectors)
                    .map(|(t, d)| t * d[i])
                    .sum::<f64>()
        }))
    }
}

/// Prints one line per coordinate, eg. `x_1 = 1 - 2t_1 + t_2`.
impl fmt::Display for Parametrization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dimension() {
            if i != 0 {
                f.write_str("\n")?;
            }
            write!(f, "x_{} = {}", i + 1, round(self.basepoint[i]))?;

            let terms = self.direction_vectors.iter().map(|d| d[i]).enumerate();
            write_terms(f, "t", terms, false)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use linsys_linalg::{assert_approx_eq, vec3};

    use super::*;

    #[test]
    fn new() {
        let p = Parametrization::new(vec3(1.0, 2.0, 3.0), vec![]).unwrap();
        assert!(p.is_unique());
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.basepoint(), &vec3(1.0, 2.0, 3.0));

        assert_eq!(
            Parametrization::new(
                vec3(1.0, 2.0, 3.0),
                vec![vec3(1.0, 0.0, 0.0), Vector::zero(2)]
            ),
            Err(Error::DimensionMismatch {
                expected: 3,
                found: 2
            })
        );
    }

    #[test]
    fn point_at() {
        let plane = Parametrization::new(
            vec3(1.0, 0.0, 0.0),
            vec![vec3(-1.0, 1.0, 0.0), vec3(-1.0, 0.0, 1.0)],
        )
        .unwrap();
        assert!(!plane.is_unique());
        assert_eq!(plane.direction_vectors().len(), 2);

        assert_eq!(plane.point_at(&[0.0, 0.0]).unwrap(), vec3(1.0, 0.0, 0.0));
        assert_approx_eq!(
            plane.point_at(&[0.5, -2.0]).unwrap(),
            vec3(2.5, 0.5, -2.0)
        );
        assert_eq!(
            plane.point_at(&[1.0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            plane.point_at(&[]),
            Err(Error::DimensionMismatch {
                expected: 2,
                found: 0
            })
        );

        let unique = Parametrization::new(vec3(1.0, 2.0, 3.0), vec![]).unwrap();
        assert_eq!(unique.point_at(&[]).unwrap(), vec3(1.0, 2.0, 3.0));
        assert!(unique.point_at(&[0.0]).is_err());
    }

    #[test]
    fn display() {
        let p = Parametrization::new(
            vec3(1.0, 0.0, -0.5),
            vec![vec3(-1.0, 1.0, 0.0), vec3(-2.5, 0.0, 1.0)],
        )
        .unwrap();
        assert_eq!(
            p.to_string(),
            "x_1 = 1 - t_1 - 2.5t_2\nx_2 = 0 + t_1\nx_3 = -0.5 + t_2"
        );

        let unique = Parametrization::new(vec3(1.0, 2.0, 3.0), vec![]).unwrap();
        assert_eq!(unique.to_string(), "x_1 = 1\nx_2 = 2\nx_3 = 3");
    }
}
