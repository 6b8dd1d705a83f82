// MIT/Apache2 License

//! A [`Surface`] that draws nothing and remembers everything.
//!
//! `RecordingSurface` logs each primitive call it receives as a [`Call`], and keeps track of the state
//! stack and the current transform the way a real canvas would. It is useful for inspecting what a path
//! replays into, and for testing surface-facing code.

use super::{defaults, Surface, SurfaceFeatures};
use crate::{Error, FillRule, OpKind, Operation};
use lyon_geom::Transform;

/// One primitive call received by a [`RecordingSurface`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Call {
    /// `begin_path()`.
    BeginPath,
    /// A path, state or hit-test primitive, in its recorded form.
    Op(Operation),
    /// `fill()`.
    Fill(FillRule),
    /// `stroke()`.
    Stroke,
    /// `clip()`.
    Clip(FillRule),
}

/// A surface that records calls instead of drawing.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    calls: Vec<Call>,
    features: SurfaceFeatures,
    current: Transform<f32>,
    stack: Vec<Transform<f32>>,
    hit: bool,
}

impl Default for RecordingSurface {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create a recording surface where every primitive is native.
    #[inline]
    pub fn new() -> Self {
        Self::with_features(SurfaceFeatures::all())
    }

    /// Create a recording surface that only natively supports the given primitives.
    ///
    /// Unsupported primitives fall back to the `Surface` defaults: `ellipse()` is emulated and the others
    /// fail with `NotSupported`.
    #[inline]
    pub fn with_features(features: SurfaceFeatures) -> Self {
        Self {
            calls: Vec::new(),
            features,
            current: Transform::identity(),
            stack: Vec::new(),
            hit: false,
        }
    }

    /// Set the answer given by `is_point_in_path()` and `is_point_in_stroke()`.
    #[inline]
    pub fn set_hit(&mut self, hit: bool) {
        self.hit = hit;
    }

    /// The calls received so far, in order.
    #[inline]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Take the calls received so far, leaving the log empty.
    #[inline]
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    /// The current transformation matrix.
    #[inline]
    pub fn current_transform(&self) -> Transform<f32> {
        self.current
    }

    /// The number of saved states on the stack.
    #[inline]
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    #[inline]
    fn record(&mut self, op: Operation) -> crate::Result {
        log::trace!("recording {}", op);
        self.calls.push(Call::Op(op));
        Ok(())
    }
}

impl Surface for RecordingSurface {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        self.features
    }

    fn begin_path(&mut self) -> crate::Result {
        self.calls.push(Call::BeginPath);
        Ok(())
    }

    fn close_path(&mut self) -> crate::Result {
        self.record(Operation::ClosePath)
    }

    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.record(Operation::MoveTo { x, y })
    }

    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        self.record(Operation::LineTo { x, y })
    }

    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> crate::Result {
        self.record(Operation::QuadraticCurveTo { cpx, cpy, x, y })
    }

    fn bezier_curve_to(
        &mut self,
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    ) -> crate::Result {
        self.record(Operation::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        })
    }

    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        self.record(Operation::Rect {
            x,
            y,
            width,
            height,
        })
    }

    fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) -> crate::Result {
        self.record(Operation::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> crate::Result {
        if !self.features.arc_to {
            return Err(Error::NotSupported(OpKind::ArcTo));
        }

        self.record(Operation::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        })
    }

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
        if !self.features.ellipse {
            return defaults::ellipse(
                self,
                x,
                y,
                radius_x,
                radius_y,
                rotation,
                start_angle,
                end_angle,
                anticlockwise,
            );
        }

        self.record(Operation::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        })
    }

    fn save(&mut self) -> crate::Result {
        self.stack.push(self.current);
        self.record(Operation::Save)
    }

    fn restore(&mut self) -> crate::Result {
        if let Some(saved) = self.stack.pop() {
            self.current = saved;
        }
        self.record(Operation::Restore)
    }

    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> crate::Result {
        // the new matrix applies to points before the existing one does
        self.current = Transform::new(a, b, c, d, e, f).then(&self.current);
        self.record(Operation::Transform { a, b, c, d, e, f })
    }

    fn fill(&mut self, rule: FillRule) -> crate::Result {
        self.calls.push(Call::Fill(rule));
        Ok(())
    }

    fn stroke(&mut self) -> crate::Result {
        self.calls.push(Call::Stroke);
        Ok(())
    }

    fn clip(&mut self, rule: FillRule) -> crate::Result {
        self.calls.push(Call::Clip(rule));
        Ok(())
    }

    fn is_point_in_path(&mut self, x: f32, y: f32, rule: FillRule) -> crate::Result<bool> {
        self.record(Operation::IsPointInPath { x, y, rule })?;
        Ok(self.hit)
    }

    fn is_point_in_stroke(&mut self, x: f32, y: f32) -> crate::Result<bool> {
        if !self.features.point_in_stroke {
            return Err(Error::NotSupported(OpKind::IsPointInStroke));
        }

        self.record(Operation::IsPointInStroke { x, y })?;
        Ok(self.hit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyon_geom::point;

    #[test]
    fn restore_pops_the_saved_transform() {
        let mut surface = RecordingSurface::new();
        surface.save().unwrap();
        surface.translate(5.0, 5.0).unwrap();
        assert_eq!(surface.depth(), 1);
        assert_eq!(
            surface.current_transform().transform_point(point(1.0, 1.0)),
            point(6.0, 6.0)
        );
        surface.restore().unwrap();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.current_transform(), Transform::identity());
    }

    #[test]
    fn later_transforms_apply_first() {
        let mut surface = RecordingSurface::new();
        surface.translate(10.0, 0.0).unwrap();
        surface.scale(2.0, 2.0).unwrap();
        // scale, then translate
        assert_eq!(
            surface.current_transform().transform_point(point(1.0, 1.0)),
            point(12.0, 2.0)
        );
    }

    #[test]
    fn unbalanced_restore_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.restore().unwrap();
        assert_eq!(surface.depth(), 0);
        assert_eq!(surface.calls(), &[Call::Op(Operation::Restore)]);
    }

    #[test]
    fn missing_features_are_reported() {
        let mut surface = RecordingSurface::with_features(SurfaceFeatures::default());
        assert_eq!(
            surface.arc_to(0.0, 0.0, 1.0, 1.0, 1.0),
            Err(Error::NotSupported(OpKind::ArcTo))
        );
        assert_eq!(
            surface.is_point_in_stroke(0.0, 0.0),
            Err(Error::NotSupported(OpKind::IsPointInStroke))
        );
        assert!(surface.calls().is_empty());
    }
}
