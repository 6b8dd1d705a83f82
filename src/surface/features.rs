// MIT/Apache2 License

/// Primitives that are implemented natively by the [`Surface`](super::Surface).
///
/// A `false` field means the surface relies on the trait's default for that primitive: an emulation for
/// `ellipse`, a `NotSupported` error for the others.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SurfaceFeatures {
    /// `ellipse()` is native rather than emulated through `arc()`.
    pub ellipse: bool,
    /// `arc_to()` is available.
    pub arc_to: bool,
    /// `is_point_in_stroke()` is available.
    pub point_in_stroke: bool,
}

impl SurfaceFeatures {
    /// Every primitive is native.
    #[inline]
    pub fn all() -> Self {
        Self {
            ellipse: true,
            arc_to: true,
            point_in_stroke: true,
        }
    }
}
