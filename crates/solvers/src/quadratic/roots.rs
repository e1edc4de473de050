use std::slice;

/// Real roots of a quadratic equation.
///
/// Roots keep the order in which the solver computed them. When two roots
/// exist, the first uses `+√d` and the second `−√d`, so for a positive
/// leading coefficient the larger root comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Roots {
    /// The equation has no real roots.
    No([f64; 0]),
    /// The equation has one repeated root.
    One([f64; 1]),
    /// The equation has two distinct roots.
    Two([f64; 2]),
}

impl Roots {
    /// Returns the roots as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        match self {
            Self::No(x) => x,
            Self::One(x) => x,
            Self::Two(x) => x,
        }
    }

    /// Returns the number of roots, which is always 0, 1, or 2.
    #[must_use]
    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns `true` if there are no real roots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::No(_))
    }

    /// Iterates over the roots in computation order.
    pub fn iter(&self) -> slice::Iter<'_, f64> {
        self.as_slice().iter()
    }

    /// Copies the roots into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<f64> {
        self.as_slice().to_vec()
    }
}

impl AsRef<[f64]> for Roots {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl<'a> IntoIterator for &'a Roots {
    type Item = &'a f64;
    type IntoIter = slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Roots> for Vec<f64> {
    fn from(roots: Roots) -> Self {
        roots.to_vec()
    }
}
