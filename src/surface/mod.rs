// MIT/Apache2 License

use crate::{FillRule, OpKind};

/// Default implementations of `Surface` functions.
mod defaults;
/// Provides the `SurfaceFeatures` type.
mod features;
/// Implements `Surface` on `&mut Surface`.
mod mut_impl;
/// A `Surface` that records the calls made against it.
pub mod recording;

pub use features::SurfaceFeatures;
pub use recording::{Call, RecordingSurface};

/// A stateful 2D drawing target with a current path; in other words, a canvas context.
///
/// `Surface`s keep a single "current path" that the path primitives append to, a current transformation
/// matrix, and a stack of saved drawing states. `fill()`, `stroke()`, `clip()` and the hit tests operate on
/// the current path. What a `Surface` lacks is a path *object*: there is no way to hand it a prebuilt path.
/// That gap is filled by [`Path2D`] together with [`replay`] and [`PathBridge`].
///
/// Implementors must provide the following:
///
/// * The path primitives `begin_path()`, `close_path()`, `move_to()`, `line_to()`,
///   `quadratic_curve_to()`, `bezier_curve_to()` and `arc()`.
/// * The state primitives `save()`, `restore()` and `transform()`.
/// * The consumers `fill()`, `stroke()`, `clip()` and `is_point_in_path()`.
///
/// The remaining methods have default implementations:
///
/// * `rect()` is built from `move_to()`, `line_to()` and `close_path()`.
/// * `ellipse()` is emulated by scaling a unit `arc()` inside a `save()`/`restore()` pair. Surfaces with a
///   native ellipse should override it and report it through [`SurfaceFeatures`].
/// * `translate()`, `rotate()` and `scale()` are expressed through `transform()`.
/// * `arc_to()` and `is_point_in_stroke()` return `NotSupported`.
///
/// [`Path2D`]: crate::Path2D
/// [`replay`]: crate::replay
/// [`PathBridge`]: crate::PathBridge
pub trait Surface {
    /* Setup */

    /// Get the primitives this `Surface` implements natively.
    ///
    /// See the [`SurfaceFeatures`] structure for more information.
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        SurfaceFeatures::default()
    }

    /* Path Primitives */

    /// Discard the current path and start an empty one.
    fn begin_path(&mut self) -> crate::Result;
    /// Close the current subpath with a straight line back to its start.
    fn close_path(&mut self) -> crate::Result;
    /// Begin a new subpath at (x, y).
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result;
    /// Add a straight line from the current point to (x, y).
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result;
    /// Add a quadratic bezier curve with control point (cpx, cpy) ending at (x, y).
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> crate::Result;
    /// Add a cubic bezier curve with two control points ending at (x, y).
    fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> crate::Result;
    /// Add a closed rectangular subpath.
    #[inline]
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        defaults::rect(self, x, y, width, height)
    }
    /// Add a circular arc centered on (x, y), connected to the current point by a straight line.
    ///
    /// Angles are in radians, measured from the positive X axis.
    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) -> crate::Result;
    /// Add an arc tangent to the lines (current point, p1) and (p1, p2).
    #[inline]
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> crate::Result {
        let _ = (x1, y1, x2, y2, radius);
        Err(crate::Error::NotSupported(OpKind::ArcTo))
    }
    /// Add an elliptical arc, connected to the current point by a straight line.
    #[allow(clippy::too_many_arguments)]
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
        defaults::ellipse(
            self,
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

    /* State Functions */

    /// Push the current drawing state, including the transform and clip region.
    fn save(&mut self) -> crate::Result;
    /// Pop the most recently saved drawing state. Does nothing if the stack is empty.
    fn restore(&mut self) -> crate::Result;
    /// Multiply the current transform by the matrix `[a c e; b d f; 0 0 1]`.
    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> crate::Result;
    /// Translate the current transform.
    #[inline]
    fn translate(&mut self, x: f32, y: f32) -> crate::Result {
        defaults::translate(self, x, y)
    }
    /// Rotate the current transform clockwise by `angle` radians.
    #[inline]
    fn rotate(&mut self, angle: f32) -> crate::Result {
        defaults::rotate(self, angle)
    }
    /// Scale the current transform.
    #[inline]
    fn scale(&mut self, x: f32, y: f32) -> crate::Result {
        defaults::scale(self, x, y)
    }

    /* Consumers of the Current Path */

    /// Fill the current path.
    fn fill(&mut self, rule: FillRule) -> crate::Result;
    /// Stroke the current path.
    fn stroke(&mut self) -> crate::Result;
    /// Intersect the clip region with the current path.
    fn clip(&mut self, rule: FillRule) -> crate::Result;
    /// Tell whether (x, y) lies inside the current path.
    fn is_point_in_path(&mut self, x: f32, y: f32, rule: FillRule) -> crate::Result<bool>;
    /// Tell whether (x, y) lies on the stroke of the current path.
    #[inline]
    fn is_point_in_stroke(&mut self, x: f32, y: f32) -> crate::Result<bool> {
        let _ = (x, y);
        Err(crate::Error::NotSupported(OpKind::IsPointInStroke))
    }
}
