// MIT/Apache2 License

use crate::{Error, FillRule, MatrixInit, Operation};
use std::{any::Any, slice::Iter as SliceIter};

mod round_rect;
pub use round_rect::{CornerRadii, Radius};

/// A recorded path. This is the path object that a bare [`Surface`] does not have.
///
/// A `Path2D` is an ordered list of [`Operation`]s. Drawing methods append to it; nothing is evaluated
/// until the path is [replayed](crate::replay) onto a surface, at which point every operation is issued,
/// in order, as a live call against the surface's current state. The same path can be replayed any
/// number of times, onto any number of surfaces.
///
/// Operations are only ever appended. Cloning a path or adding it to another copies its operations, so
/// later changes to one path are never visible through another.
///
/// [`Surface`]: crate::Surface
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path2D {
    ops: Vec<Operation>,
}

impl Path2D {
    /// Create an empty path.
    #[inline]
    pub fn new() -> Self {
        Self { ops: Vec::new() }
    }

    /// Create a path from SVG path data, such as `"M 10 10 h 80 v 80 h -80 Z"`.
    ///
    /// Path data that fails to parse produces an empty path rather than an error. Use
    /// [`parse_path_data`](crate::parse::parse_path_data) to see why parsing failed.
    #[cfg(feature = "path-data")]
    #[inline]
    pub fn from_path_data(data: &str) -> Self {
        match crate::parse::parse_path_data(data) {
            Ok(ops) => Self { ops },
            Err(e) => {
                log::debug!("Treating invalid path data as an empty path: {}", e);
                Self::new()
            }
        }
    }

    /// Create a path from a dynamically typed constructor argument.
    ///
    /// `()` stands for an absent argument and produces an empty path. A `Path2D` is copied. With the
    /// `path-data` feature, path data given as a `String`, `Box<str>`, `&'static str` or `&'static String`
    /// is parsed. Any other type fails with [`Error::InvalidArgument`]. Since `T` must be `'static`, path
    /// data borrowed for a shorter lifetime should go through [`from_path_data`](Path2D::from_path_data).
    pub fn from_value<T: Any>(value: &T) -> crate::Result<Self> {
        let value = value as &dyn Any;

        if value.is::<()>() {
            return Ok(Self::new());
        }
        if let Some(path) = value.downcast_ref::<Path2D>() {
            return Ok(path.clone());
        }

        #[cfg(feature = "path-data")]
        {
            if let Some(data) = value.downcast_ref::<String>() {
                return Ok(Self::from_path_data(data));
            }
            if let Some(data) = value.downcast_ref::<&str>() {
                return Ok(Self::from_path_data(data));
            }
            if let Some(data) = value.downcast_ref::<Box<str>>() {
                return Ok(Self::from_path_data(data));
            }
            if let Some(data) = value.downcast_ref::<&String>() {
                return Ok(Self::from_path_data(data));
            }
        }

        Err(Error::InvalidArgument(std::any::type_name::<T>()))
    }

    /// The recorded operations, in order.
    #[inline]
    pub fn operations(&self) -> &[Operation] {
        &self.ops
    }

    /// Iterate over the recorded operations.
    #[inline]
    pub fn iter(&self) -> SliceIter<'_, Operation> {
        self.ops.iter()
    }

    /// The number of recorded operations.
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    fn push(&mut self, op: Operation) {
        self.ops.push(op);
    }

    /* Recording */

    /// Record a `closePath` operation.
    #[inline]
    pub fn close_path(&mut self) {
        self.push(Operation::ClosePath);
    }

    /// Record a `moveTo` operation.
    #[inline]
    pub fn move_to(&mut self, x: f32, y: f32) {
        self.push(Operation::MoveTo { x, y });
    }

    /// Record a `lineTo` operation.
    #[inline]
    pub fn line_to(&mut self, x: f32, y: f32) {
        self.push(Operation::LineTo { x, y });
    }

    /// Record a `quadraticCurveTo` operation.
    #[inline]
    pub fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.push(Operation::QuadraticCurveTo { cpx, cpy, x, y });
    }

    /// Record a `bezierCurveTo` operation.
    #[inline]
    pub fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        self.push(Operation::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
    }

    /// Record a `rect` operation.
    #[inline]
    pub fn rect(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.push(Operation::Rect {
            x,
            y,
            width,
            height,
        });
    }

    /// Record an `arc` operation. Pass `false` for `anticlockwise` to get the canvas default.
    #[inline]
    pub fn arc(
        &mut self,
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        self.push(Operation::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    /// Record an `arcTo` operation.
    #[inline]
    pub fn arc_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, radius: f32) {
        self.push(Operation::ArcTo {
            x1,
            y1,
            x2,
            y2,
            radius,
        });
    }

    /// Record an `ellipse` operation. Pass `false` for `anticlockwise` to get the canvas default.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn ellipse(
        &mut self,
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    ) {
        self.push(Operation::Ellipse {
            x,
            y,
            radius_x,
            radius_y,
            rotation,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    /// Record an `isPointInPath` operation. Its answer is discarded on replay.
    #[inline]
    pub fn is_point_in_path(&mut self, x: f32, y: f32, rule: FillRule) {
        self.push(Operation::IsPointInPath { x, y, rule });
    }

    /// Record an `isPointInStroke` operation. Its answer is discarded on replay.
    #[inline]
    pub fn is_point_in_stroke(&mut self, x: f32, y: f32) {
        self.push(Operation::IsPointInStroke { x, y });
    }

    /* Composition */

    /// Append a copy of every operation in `path`.
    #[inline]
    pub fn add_path(&mut self, path: &Path2D) {
        self.ops.extend_from_slice(&path.ops);
    }

    /// Append a copy of every operation in `path`, drawn under `transform`.
    ///
    /// If the descriptor is complete, the copied operations are wrapped in `save`, `transform` ...
    /// `restore`, so the transform does not leak into whatever is recorded afterwards. An incomplete
    /// descriptor is ignored and the operations are appended as with [`add_path`](Path2D::add_path).
    pub fn add_path_with_transform(&mut self, path: &Path2D, transform: &MatrixInit) {
        match transform.to_operation() {
            Some(op) => {
                self.ops.reserve(path.len() + 3);
                self.push(Operation::Save);
                self.push(op);
                self.add_path(path);
                self.push(Operation::Restore);
            }
            None => self.add_path(path),
        }
    }
}

impl From<&Path2D> for Path2D {
    #[inline]
    fn from(path: &Path2D) -> Self {
        path.clone()
    }
}

#[cfg(feature = "path-data")]
impl From<&str> for Path2D {
    #[inline]
    fn from(data: &str) -> Self {
        Self::from_path_data(data)
    }
}

impl<'a> IntoIterator for &'a Path2D {
    type Item = &'a Operation;
    type IntoIter = SliceIter<'a, Operation>;

    #[inline]
    fn into_iter(self) -> SliceIter<'a, Operation> {
        self.ops.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpKind;

    fn triangle() -> Path2D {
        let mut path = Path2D::new();
        path.move_to(0.0, 0.0);
        path.line_to(10.0, 0.0);
        path.line_to(5.0, 8.0);
        path.close_path();
        path
    }

    #[test]
    fn recording_keeps_call_order_and_arguments() {
        let mut path = Path2D::new();
        path.move_to(1.0, 2.0);
        path.quadratic_curve_to(3.0, 4.0, 5.0, 6.0);
        path.arc(0.0, 0.0, 5.0, 0.0, 3.0, true);
        path.arc_to(1.0, 1.0, 2.0, 2.0, 0.5);
        path.is_point_in_path(1.0, 1.0, FillRule::EvenOdd);

        let kinds: Vec<OpKind> = path.iter().map(Operation::kind).collect();
        assert_eq!(
            kinds,
            [
                OpKind::MoveTo,
                OpKind::QuadraticCurveTo,
                OpKind::Arc,
                OpKind::ArcTo,
                OpKind::IsPointInPath
            ]
        );
        assert_eq!(
            path.operations()[2],
            Operation::Arc {
                x: 0.0,
                y: 0.0,
                radius: 5.0,
                start_angle: 0.0,
                end_angle: 3.0,
                anticlockwise: true
            }
        );
    }

    #[test]
    fn recording_does_not_validate() {
        let mut path = Path2D::new();
        path.arc(0.0, 0.0, -5.0, 0.0, f32::NAN, false);
        path.rect(0.0, 0.0, -1.0, -1.0);
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn copies_are_independent() {
        let mut a = triangle();
        let mut b = Path2D::from(&a);
        assert_eq!(a, b);

        a.line_to(100.0, 100.0);
        assert_eq!(b.len(), 4);

        b.rect(0.0, 0.0, 1.0, 1.0);
        assert_eq!(a.len(), 5);
        assert_eq!(a.operations()[4], Operation::LineTo { x: 100.0, y: 100.0 });
    }

    #[test]
    fn add_path_appends_without_bracketing() {
        let mut path = Path2D::new();
        path.move_to(-1.0, -1.0);
        path.add_path(&triangle());

        assert_eq!(path.len(), 5);
        assert_eq!(&path.operations()[1..], triangle().operations());
    }

    #[test]
    fn add_path_with_transform_brackets_the_copy() {
        let mut path = Path2D::new();
        path.add_path_with_transform(
            &triangle(),
            &MatrixInit::new(2.0, 0.0, 0.0, 2.0, 10.0, 20.0),
        );

        let ops = path.operations();
        assert_eq!(ops.len(), 4 + 3);
        assert_eq!(ops[0], Operation::Save);
        assert_eq!(
            ops[1],
            Operation::Transform {
                a: 2.0,
                b: 0.0,
                c: 0.0,
                d: 2.0,
                e: 10.0,
                f: 20.0
            }
        );
        assert_eq!(&ops[2..6], triangle().operations());
        assert_eq!(ops[6], Operation::Restore);
    }

    #[test]
    fn incomplete_transform_is_ignored() {
        let mut path = Path2D::new();
        let partial = MatrixInit {
            e: Some(10.0),
            f: Some(10.0),
            ..Default::default()
        };
        path.add_path_with_transform(&triangle(), &partial);
        assert_eq!(path, triangle());
    }

    #[test]
    fn composed_copy_does_not_alias_source() {
        let mut source = triangle();
        let mut composed = Path2D::new();
        composed.add_path(&source);

        source.close_path();
        assert_eq!(composed.len(), 4);

        composed.move_to(0.0, 0.0);
        assert_eq!(source.len(), 5);
    }

    #[test]
    fn path_can_be_added_to_itself() {
        let mut path = triangle();
        let snapshot = path.clone();
        path.add_path(&snapshot);
        assert_eq!(path.len(), 8);
        assert_eq!(&path.operations()[4..], snapshot.operations());
    }

    #[test]
    fn from_value_accepts_absent_and_paths() {
        assert!(Path2D::from_value(&()).unwrap().is_empty());
        assert_eq!(Path2D::from_value(&triangle()).unwrap(), triangle());
    }

    #[test]
    fn from_value_rejects_other_types() {
        match Path2D::from_value(&42_u32) {
            Err(Error::InvalidArgument(ty)) => assert_eq!(ty, "u32"),
            other => panic!("unexpected result {:?}", other),
        }

        let err = Path2D::from_value(&vec![1.0_f32]).unwrap_err();
        assert!(err.to_string().contains("is not a valid argument"));
    }

    #[cfg(feature = "path-data")]
    #[test]
    fn from_value_parses_strings() {
        let path = Path2D::from_value(&"M 0 0 L 10 10").unwrap();
        assert_eq!(path.len(), 2);

        let path = Path2D::from_value(&String::from("M 0 0 Z")).unwrap();
        assert_eq!(path.len(), 2);

        let boxed: Box<str> = "M 0 0 H 5 V 5".into();
        assert_eq!(Path2D::from_value(&boxed).unwrap().len(), 3);

        static DATA: String = String::new();
        assert!(Path2D::from_value(&&DATA).unwrap().is_empty());
    }

    #[cfg(feature = "path-data")]
    #[test]
    fn malformed_path_data_yields_an_empty_path() {
        assert!(Path2D::from_path_data("hello world").is_empty());
        assert!(Path2D::from_path_data("M 10").is_empty());
        assert!(Path2D::from("M 0 0 L 10 10 X 5 5").is_empty());
        assert!(Path2D::from_path_data("").is_empty());
    }
}
