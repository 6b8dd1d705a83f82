// MIT/Apache2 License

/// Decides whether a point lies inside a path when filling, clipping or hit-testing.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FillRule {
    /// Inside if the winding number is non-zero.
    NonZero,
    /// Inside if the path crosses an odd number of times.
    EvenOdd,
}

impl Default for FillRule {
    #[inline]
    fn default() -> FillRule {
        FillRule::NonZero
    }
}

impl FillRule {
    /// The canvas keyword for this rule.
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            FillRule::NonZero => "nonzero",
            FillRule::EvenOdd => "evenodd",
        }
    }
}
