// MIT/Apache2 License

use super::Surface;
use lyon_geom::{Angle, Transform};

#[inline]
pub(crate) fn rect<S: Surface + ?Sized>(
    s: &mut S,
    x: f32,
    y: f32,
    width: f32,
    height: f32,
) -> crate::Result {
    s.move_to(x, y)?;
    s.line_to(x + width, y)?;
    s.line_to(x + width, y + height)?;
    s.line_to(x, y + height)?;
    s.close_path()?;
    // the rectangle leaves a fresh subpath behind at its origin
    s.move_to(x, y)
}

#[allow(clippy::too_many_arguments)]
#[inline]
pub(crate) fn ellipse<S: Surface + ?Sized>(
    s: &mut S,
    x: f32,
    y: f32,
    radius_x: f32,
    radius_y: f32,
    rotation: f32,
    start_angle: f32,
    end_angle: f32,
    anticlockwise: bool,
) -> crate::Result {
    s.save()?;

    let drawn = unit_arc(
        s,
        x,
        y,
        radius_x,
        radius_y,
        rotation,
        start_angle,
        end_angle,
        anticlockwise,
    );

    // the transform must not outlive the arc, even if drawing failed
    let restored = s.restore();
    drawn.and(restored)
}

#[allow(clippy::too_many_arguments)]
#[inline]
fn unit_arc<S: Surface + ?Sized>(
    s: &mut S,
    x: f32,
    y: f32,
    radius_x: f32,
    radius_y: f32,
    rotation: f32,
    start_angle: f32,
    end_angle: f32,
    anticlockwise: bool,
) -> crate::Result {
    s.translate(x, y)?;
    s.rotate(rotation)?;
    s.scale(radius_x, radius_y)?;
    s.arc(0.0, 0.0, 1.0, start_angle, end_angle, anticlockwise)
}

#[inline]
pub(crate) fn translate<S: Surface + ?Sized>(s: &mut S, x: f32, y: f32) -> crate::Result {
    apply_transform(s, Transform::translation(x, y))
}

#[inline]
pub(crate) fn rotate<S: Surface + ?Sized>(s: &mut S, angle: f32) -> crate::Result {
    apply_transform(s, Transform::rotation(Angle::radians(angle)))
}

#[inline]
pub(crate) fn scale<S: Surface + ?Sized>(s: &mut S, x: f32, y: f32) -> crate::Result {
    apply_transform(s, Transform::scale(x, y))
}

#[inline]
fn apply_transform<S: Surface + ?Sized>(s: &mut S, t: Transform<f32>) -> crate::Result {
    s.transform(t.m11, t.m12, t.m21, t.m22, t.m31, t.m32)
}

#[cfg(test)]
mod tests {
    use crate::{
        surface::recording::{Call, RecordingSurface},
        Operation, Surface, SurfaceFeatures,
    };
    use approx::assert_relative_eq;

    #[test]
    fn ellipse_is_emulated_with_a_scaled_unit_arc() {
        let mut surface = RecordingSurface::with_features(SurfaceFeatures::default());
        surface
            .ellipse(10.0, 20.0, 4.0, 2.0, 0.0, 0.0, 1.5, true)
            .unwrap();

        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], Call::Op(Operation::Save));
        assert_eq!(
            calls[1],
            Call::Op(Operation::Transform {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: 1.0,
                e: 10.0,
                f: 20.0
            })
        );
        assert_eq!(
            calls[4],
            Call::Op(Operation::Arc {
                x: 0.0,
                y: 0.0,
                radius: 1.0,
                start_angle: 0.0,
                end_angle: 1.5,
                anticlockwise: true
            })
        );
        assert_eq!(calls[5], Call::Op(Operation::Restore));
        assert_eq!(surface.depth(), 0);
    }

    #[test]
    fn emulated_ellipse_transform_is_undone() {
        let mut surface = RecordingSurface::with_features(SurfaceFeatures::default());
        surface.translate(3.0, 4.0).unwrap();
        let before = surface.current_transform();
        surface
            .ellipse(1.0, 1.0, 5.0, 6.0, 0.3, 0.0, 3.0, false)
            .unwrap();
        assert_eq!(surface.current_transform(), before);
    }

    #[test]
    fn rect_closes_and_reopens_at_origin() {
        let mut surface = RecordingSurface::new();
        super::rect(&mut surface, 1.0, 2.0, 3.0, 4.0).unwrap();
        let calls = surface.calls();
        assert_eq!(calls.len(), 6);
        assert_eq!(calls[0], Call::Op(Operation::MoveTo { x: 1.0, y: 2.0 }));
        assert_eq!(calls[1], Call::Op(Operation::LineTo { x: 4.0, y: 2.0 }));
        assert_eq!(calls[2], Call::Op(Operation::LineTo { x: 4.0, y: 6.0 }));
        assert_eq!(calls[3], Call::Op(Operation::LineTo { x: 1.0, y: 6.0 }));
        assert_eq!(calls[4], Call::Op(Operation::ClosePath));
        assert_eq!(calls[5], Call::Op(Operation::MoveTo { x: 1.0, y: 2.0 }));
    }

    #[test]
    fn rotate_goes_through_transform() {
        let mut surface = RecordingSurface::new();
        surface.rotate(std::f32::consts::FRAC_PI_2).unwrap();
        match surface.calls()[0] {
            Call::Op(Operation::Transform { a, b, c, d, e, f }) => {
                assert_relative_eq!(a, 0.0, epsilon = 1e-6);
                assert_relative_eq!(b, 1.0, epsilon = 1e-6);
                assert_relative_eq!(c, -1.0, epsilon = 1e-6);
                assert_relative_eq!(d, 0.0, epsilon = 1e-6);
                assert_eq!((e, f), (0.0, 0.0));
            }
            ref other => panic!("unexpected call {:?}", other),
        }
    }
}
