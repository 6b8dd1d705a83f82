// MIT/Apache2 License

use super::{Surface, SurfaceFeatures};
use crate::FillRule;

impl<S: Surface + ?Sized> Surface for &mut S {
    #[inline]
    fn features(&self) -> SurfaceFeatures {
        (**self).features()
    }
    #[inline]
    fn begin_path(&mut self) -> crate::Result {
        (**self).begin_path()
    }
    #[inline]
    fn close_path(&mut self) -> crate::Result {
        (**self).close_path()
    }
    #[inline]
    fn move_to(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).move_to(x, y)
    }
    #[inline]
    fn line_to(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).line_to(x, y)
    }
    #[inline]
    fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) -> crate::Result {
        (**self).quadratic_curve_to(cpx, cpy, x, y)
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
        (**self).bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y)
    }
    #[inline]
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) -> crate::Result {
        (**self).rect(x, y, width, height)
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
        (**self).arc(x, y, radius, start_angle, end_angle, anticlockwise)
    }
    #[inline]
    fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) -> crate::Result {
        (**self).arc_to(x1, y1, x2, y2, radius)
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
        (**self).ellipse(
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
        (**self).save()
    }
    #[inline]
    fn restore(&mut self) -> crate::Result {
        (**self).restore()
    }
    #[inline]
    fn transform(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> crate::Result {
        (**self).transform(a, b, c, d, e, f)
    }
    #[inline]
    fn translate(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).translate(x, y)
    }
    #[inline]
    fn rotate(&mut self, angle: f32) -> crate::Result {
        (**self).rotate(angle)
    }
    #[inline]
    fn scale(&mut self, x: f32, y: f32) -> crate::Result {
        (**self).scale(x, y)
    }
    #[inline]
    fn fill(&mut self, rule: FillRule) -> crate::Result {
        (**self).fill(rule)
    }
    #[inline]
    fn stroke(&mut self) -> crate::Result {
        (**self).stroke()
    }
    #[inline]
    fn clip(&mut self, rule: FillRule) -> crate::Result {
        (**self).clip(rule)
    }
    #[inline]
    fn is_point_in_path(&mut self, x: f32, y: f32, rule: FillRule) -> crate::Result<bool> {
        (**self).is_point_in_path(x, y, rule)
    }
    #[inline]
    fn is_point_in_stroke(&mut self, x: f32, y: f32) -> crate::Result<bool> {
        (**self).is_point_in_stroke(x, y)
    }
}
