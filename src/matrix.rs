// MIT/Apache2 License

use crate::Operation;
use lyon_geom::Transform;

/// A 2D affine matrix descriptor, as passed to [`Path2D::add_path_with_transform`].
///
/// The matrix is `[a c e; b d f; 0 0 1]`: `a` and `d` scale, `b` and `c` skew, `e` and `f` translate.
/// A descriptor only counts as a transform when all six coefficients are present; a partial descriptor
/// is treated as no transform at all.
///
/// [`Path2D::add_path_with_transform`]: crate::Path2D::add_path_with_transform
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct MatrixInit {
    pub a: Option<f32>,
    pub b: Option<f32>,
    pub c: Option<f32>,
    pub d: Option<f32>,
    pub e: Option<f32>,
    pub f: Option<f32>,
}

impl MatrixInit {
    /// Create a complete descriptor from six coefficients.
    #[inline]
    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self {
            a: Some(a),
            b: Some(b),
            c: Some(c),
            d: Some(d),
            e: Some(e),
            f: Some(f),
        }
    }

    /// The identity matrix.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)
    }

    /// Whether all six coefficients are present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.coefficients().is_some()
    }

    /// The six coefficients in `a, b, c, d, e, f` order, if all are present.
    #[inline]
    pub fn coefficients(&self) -> Option<[f32; 6]> {
        Some([self.a?, self.b?, self.c?, self.d?, self.e?, self.f?])
    }

    /// The `transform` operation this descriptor stands for, if it is complete.
    #[inline]
    pub fn to_operation(&self) -> Option<Operation> {
        let [a, b, c, d, e, f] = self.coefficients()?;
        Some(Operation::Transform { a, b, c, d, e, f })
    }

    /// Convert to a `lyon_geom` transform, if the descriptor is complete.
    #[inline]
    pub fn to_transform(&self) -> Option<Transform<f32>> {
        let [a, b, c, d, e, f] = self.coefficients()?;
        Some(Transform::new(a, b, c, d, e, f))
    }
}

impl From<Transform<f32>> for MatrixInit {
    #[inline]
    fn from(t: Transform<f32>) -> Self {
        Self::new(t.m11, t.m12, t.m21, t.m22, t.m31, t.m32)
    }
}

impl From<[f32; 6]> for MatrixInit {
    #[inline]
    fn from([a, b, c, d, e, f]: [f32; 6]) -> Self {
        Self::new(a, b, c, d, e, f)
    }
}
