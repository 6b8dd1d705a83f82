// MIT/Apache2 License

//! Teach a surface to consume `Path2D` objects.
//!
//! [`PathBridge`] wraps any [`Surface`] and adds versions of `fill()`, `stroke()`, `clip()`,
//! `is_point_in_path()` and `is_point_in_stroke()` that take a [`PathTarget`]. If the target is a path,
//! it is replayed into the surface's current path first, and then the surface's own primitive is called
//! with the remaining arguments. Otherwise the primitive is called unchanged.
//!
//! ```
//! use chalkboard_path::{FillRule, Path2D, PathBridge, PathTarget, RecordingSurface};
//!
//! let mut path = Path2D::new();
//! path.rect(0.0, 0.0, 10.0, 10.0);
//!
//! let mut bridge = PathBridge::new(RecordingSurface::new());
//! bridge.fill(&path, FillRule::EvenOdd).unwrap();
//! bridge.stroke(PathTarget::Current).unwrap();
//! ```

use crate::{replay, FillRule, Path2D, Surface, SurfaceFeatures};

/// The path a bridge operation acts on.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathTarget<'a> {
    /// Whatever is already in the surface's current path.
    Current,
    /// A recorded path, replayed into the surface before the operation.
    Path(&'a Path2D),
}

impl<'a> Default for PathTarget<'a> {
    #[inline]
    fn default() -> Self {
        Self::Current
    }
}

impl<'a> From<&'a Path2D> for PathTarget<'a> {
    #[inline]
    fn from(path: &'a Path2D) -> Self {
        Self::Path(path)
    }
}

impl<'a> From<Option<&'a Path2D>> for PathTarget<'a> {
    #[inline]
    fn from(path: Option<&'a Path2D>) -> Self {
        match path {
            Some(path) => Self::Path(path),
            None => Self::Current,
        }
    }
}

/// A surface wrapper that understands `Path2D` arguments.
///
/// `PathBridge` also implements [`Surface`] itself by forwarding every primitive to the wrapped surface,
/// so it can be used anywhere the wrapped surface could.
#[derive(Debug, Clone, Default)]
pub struct PathBridge<S> {
    inner: S,
}

impl<S: Surface> PathBridge<S> {
    /// Wrap a surface.
    #[inline]
    pub fn new(inner: S) -> Self {
        log::debug!("Bridging surface with features {:?}", inner.features());
        Self { inner }
    }

    /// Get a reference to the wrapped surface.
    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Get a mutable reference to the wrapped surface.
    #[inline]
    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    /// Unwrap the surface.
    #[inline]
    pub fn into_inner(self) -> S {
        self.inner
    }

    #[inline]
    fn prepare(&mut self, target: PathTarget<'_>) -> crate::Result {
        match target {
            PathTarget::Current => Ok(()),
            PathTarget::Path(path) => replay(path, &mut self.inner),
        }
    }

    /// Fill the target path with the given rule.
    #[inline]
    pub fn fill<'p>(&mut self, target: impl Into<PathTarget<'p>>, rule: FillRule) -> crate::Result {
        let target = target.into();
        log::trace!("Bridged fill ({:?})", rule);
        self.prepare(target)?;
        self.inner.fill(rule)
    }

    /// Stroke the target path.
    #[inline]
    pub fn stroke<'p>(&mut self, target: impl Into<PathTarget<'p>>) -> crate::Result {
        let target = target.into();
        log::trace!("Bridged stroke");
        self.prepare(target)?;
        self.inner.stroke()
    }

    /// Intersect the clip region with the target path.
    ///
    /// The surface's state is not saved or restored around the replay, so the new clip region persists.
    #[inline]
    pub fn clip<'p>(&mut self, target: impl Into<PathTarget<'p>>, rule: FillRule) -> crate::Result {
        let target = target.into();
        log::trace!("Bridged clip ({:?})", rule);
        self.prepare(target)?;
        self.inner.clip(rule)
    }

    /// Tell whether the point (x, y) lies inside the target path.
    #[inline]
    pub fn is_point_in_path<'p>(
        &mut self,
        target: impl Into<PathTarget<'p>>,
        x: f32,
        y: f32,
        rule: FillRule,
    ) -> crate::Result<bool> {
        let target = target.into();
        log::trace!("Bridged is_point_in_path({}, {})", x, y);
        self.prepare(target)?;
        self.inner.is_point_in_path(x, y, rule)
    }

    /// Tell whether the point (x, y) lies on the stroke of the target path.
    #[inline]
    pub fn is_point_in_stroke<'p>(
        &mut self,
        target: impl Into<PathTarget<'p>>,
        x: f32,
        y: f32,
    ) -> crate::Result<bool> {
        let target = target.into();
        log::trace!("Bridged is_point_in_stroke({}, {})", x, y);
        self.prepare(target)?;
        self.inner.is_point_in_stroke(x, y)
    }
}

impl<S: Surface> Surface for PathBridge<S> {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        self.inner.features()
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        self.inner.begin_path()
    }
    #[inline]
    fn close_path(&mut self) -> crate::Result {
        self.inner.close_path()
    }
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.inner.move_to(x, y)
    }
    #[inline]
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.inner.line_to(x, y)
    }
    #[inline]
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> crate::Result {
        self.inner.quadratic_curve_to(cpx, cpy, x, y)
    }
    #[inline]
    fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> crate::Result {
        self.inner.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y)
    }
    #[inline]
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.inner.rect(x, y, width, height)
    }
    #[inline]
    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) -> crate::Result {
        self.inner
            .arc(x, y, radius, start_angle, end_angle, anticlockwise)
    }
    #[inline]
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> crate::Result {
        self.inner.arc_to(x1, y1, x2, y2, radius)
    }
    #[inline]
    fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) -> crate::Result {
        self.inner.ellipse(
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        )
    }
    #[inline]
    fn save(&mut self) -> crate::Result {
        self.inner.save()
    }
    #[inline]
    fn restore(&mut self) -> crate::Result {
        self.inner.restore()
    }
    #[inline]
    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> crate::Result {
        self.inner.transform(a, b, c, d, e, f)
    }
    #[inline]
    fn translate(&mut self, x: f32, y: f32) -> crate::Result {
        self.inner.translate(x, y)
    }
    #[inline]
    fn rotate(&mut self, angle: f32) -> crate::Result {
        self.inner.rotate(angle)
    }
    #[inline]
    fn scale(&mut self, x: f32, y: f32) -> crate::Result {
        self.inner.scale(x, y)
    }
    #[inline]
    fn fill(&mut self, rule: FillRule) -> crate::Result {
        self.inner.fill(rule)
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        self.inner.stroke()
    }
    #[inline]
    fn clip(&mut self, rule: FillRule) -> crate::Result {
        self.inner.clip(rule)
    }
    #[inline]
    fn is_point_in_path(&mut self, x: f32, y: f32, rule: FillRule) -> crate::Result<bool> {
        self.inner.is_point_in_path(x, y, rule)
    }
    #[inline]
    fn is_point_in_stroke(&mut self, x: f32, y: f32) -> crate::Result<bool> {
        self.inner.is_point_in_stroke(x, y)
    }
}
