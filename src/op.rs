// MIT/Apache2 License

//! The closed set of commands a [`Path2D`](crate::Path2D) can record.

use crate::{FillRule, Surface};
use std::{fmt, ops::RangeInclusive};
use tinyvec::ArrayVec;

/// The arguments of an [`Operation`], in call order.
///
/// No operation takes more than eight arguments, so this never allocates.
pub type Arguments = ArrayVec<[Argument; 8]>;

/// The name of a recordable operation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OpKind {
    ClosePath,
    MoveTo,
    LineTo,
    QuadraticCurveTo,
    BezierCurveTo,
    Rect,
    Arc,
    ArcTo,
    Ellipse,
    IsPointInPath,
    IsPointInStroke,
    Save,
    Transform,
    Restore,
}

impl OpKind {
    /// Every kind, in vocabulary order.
    pub const ALL: [OpKind; 14] = [
        OpKind::ClosePath,
        OpKind::MoveTo,
        OpKind::LineTo,
        OpKind::QuadraticCurveTo,
        OpKind::BezierCurveTo,
        OpKind::Rect,
        OpKind::Arc,
        OpKind::ArcTo,
        OpKind::Ellipse,
        OpKind::IsPointInPath,
        OpKind::IsPointInStroke,
        OpKind::Save,
        OpKind::Transform,
        OpKind::Restore,
    ];

    /// The case-sensitive canvas identifier of this kind.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            OpKind::ClosePath => "closePath",
            OpKind::MoveTo => "moveTo",
            OpKind::LineTo => "lineTo",
            OpKind::QuadraticCurveTo => "quadraticCurveTo",
            OpKind::BezierCurveTo => "bezierCurveTo",
            OpKind::Rect => "rect",
            OpKind::Arc => "arc",
            OpKind::ArcTo => "arcTo",
            OpKind::Ellipse => "ellipse",
            OpKind::IsPointInPath => "isPointInPath",
            OpKind::IsPointInStroke => "isPointInStroke",
            OpKind::Save => "save",
            OpKind::Transform => "transform",
            OpKind::Restore => "restore",
        }
    }

    /// Look up a kind by its canvas identifier.
    #[inline]
    pub fn from_name(name: &str) -> Option<OpKind> {
        OpKind::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// The number of arguments the canvas call accepts. Trailing flags are optional.
    #[inline]
    pub fn arity(self) -> RangeInclusive<usize> {
        match self {
            OpKind::ClosePath | OpKind::Save | OpKind::Restore => 0..=0,
            OpKind::MoveTo | OpKind::LineTo | OpKind::IsPointInStroke => 2..=2,
            OpKind::IsPointInPath => 2..=3,
            OpKind::QuadraticCurveTo | OpKind::Rect => 4..=4,
            OpKind::ArcTo => 5..=5,
            OpKind::Arc => 5..=6,
            OpKind::BezierCurveTo | OpKind::Transform => 6..=6,
            OpKind::Ellipse => 7..=8,
        }
    }
}

impl fmt::Display for OpKind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single recorded argument.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Argument {
    Number(f32),
    Flag(bool),
    Rule(FillRule),
}

impl Default for Argument {
    #[inline]
    fn default() -> Argument {
        Argument::Number(0.0)
    }
}

impl fmt::Display for Argument {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Argument::Number(n) => fmt::Display::fmt(n, f),
            Argument::Flag(b) => fmt::Display::fmt(b, f),
            Argument::Rule(rule) => write!(f, "\"{}\"", rule.as_str()),
        }
    }
}

/// One recorded drawing command.
///
/// Every variant corresponds to exactly one [`Surface`] primitive. Arguments are stored as given; nothing
/// is validated or evaluated at recording time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Operation {
    ClosePath,
    MoveTo {
        x: f32,
        y: f32,
    },
    LineTo {
        x: f32,
        y: f32,
    },
    QuadraticCurveTo {
        cpx: f32,
        cpy: f32,
        x: f32,
        y: f32,
    },
    BezierCurveTo {
        cp1x: f32,
        cp1y: f32,
        cp2x: f32,
        cp2y: f32,
        x: f32,
        y: f32,
    },
    Rect {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
    Arc {
        x: f32,
        y: f32,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    ArcTo {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        radius: f32,
    },
    Ellipse {
        x: f32,
        y: f32,
        radius_x: f32,
        radius_y: f32,
        rotation: f32,
        start_angle: f32,
        end_angle: f32,
        anticlockwise: bool,
    },
    IsPointInPath {
        x: f32,
        y: f32,
        rule: FillRule,
    },
    IsPointInStroke {
        x: f32,
        y: f32,
    },
    Save,
    /// Multiply the current transform by the matrix `[a c e; b d f; 0 0 1]`.
    Transform {
        a: f32,
        b: f32,
        c: f32,
        d: f32,
        e: f32,
        f: f32,
    },
    Restore,
}

impl Operation {
    /// The kind tag of this operation.
    #[inline]
    pub fn kind(&self) -> OpKind {
        match self {
            Operation::ClosePath => OpKind::ClosePath,
            Operation::MoveTo { .. } => OpKind::MoveTo,
            Operation::LineTo { .. } => OpKind::LineTo,
            Operation::QuadraticCurveTo { .. } => OpKind::QuadraticCurveTo,
            Operation::BezierCurveTo { .. } => OpKind::BezierCurveTo,
            Operation::Rect { .. } => OpKind::Rect,
            Operation::Arc { .. } => OpKind::Arc,
            Operation::ArcTo { .. } => OpKind::ArcTo,
            Operation::Ellipse { .. } => OpKind::Ellipse,
            Operation::IsPointInPath { .. } => OpKind::IsPointInPath,
            Operation::IsPointInStroke { .. } => OpKind::IsPointInStroke,
            Operation::Save => OpKind::Save,
            Operation::Transform { .. } => OpKind::Transform,
            Operation::Restore => OpKind::Restore,
        }
    }

    /// The arguments of this operation, in the order the canvas call takes them.
    pub fn arguments(&self) -> Arguments {
        let mut args = Arguments::new();

        match *self {
            Operation::ClosePath | Operation::Save | Operation::Restore => {}
            Operation::MoveTo { x, y }
            | Operation::LineTo { x, y }
            | Operation::IsPointInStroke { x, y } => push_numbers(&mut args, &[x, y]),
            Operation::QuadraticCurveTo { cpx, cpy, x, y } => {
                push_numbers(&mut args, &[cpx, cpy, x, y])
            }
            Operation::BezierCurveTo {
                cp1x,
                cp1y,
                cp2x,
                cp2y,
                x,
                y,
            } => push_numbers(&mut args, &[cp1x, cp1y, cp2x, cp2y, x, y]),
            Operation::Rect {
                x,
                y,
                width,
                height,
            } => push_numbers(&mut args, &[x, y, width, height]),
            Operation::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                push_numbers(&mut args, &[x, y, radius, start_angle, end_angle]);
                args.push(Argument::Flag(anticlockwise));
            }
            Operation::ArcTo {
                x1,
                y1,
                x2,
                y2,
                radius,
            } => push_numbers(&mut args, &[x1, y1, x2, y2, radius]),
            Operation::Ellipse {
                x,
                y,
                radius_x,
                radius_y,
                rotation,
                start_angle,
                end_angle,
                anticlockwise,
            } => {
                push_numbers(
                    &mut args,
                    &[x, y, radius_x, radius_y, rotation, start_angle, end_angle],
                );
                args.push(Argument::Flag(anticlockwise));
            }
            Operation::IsPointInPath { x, y, rule } => {
                push_numbers(&mut args, &[x, y]);
                args.push(Argument::Rule(rule));
            }
            Operation::Transform { a, b, c, d, e, f } => {
                push_numbers(&mut args, &[a, b, c, d, e, f])
            }
        }

        args
    }

    /// Issue this operation as a live call against `surface`.
    ///
    /// Hit-test operations run the test and discard its answer.
    pub fn apply<S: Surface + ?Sized>(&self, surface: &mut S) -> crate::Result {
        match *self {
            Operation::ClosePath => surface.close_path(),
            Operation::MoveTo { x, y } => surface.move_to(x, y),
            Operation::LineTo { x, y } => surface.line_to(x, y),
            Operation::QuadraticCurveTo { cpx, cpy, x, y } => {
                surface.quadratic_curve_to(cpx, cpy, x, y)
            }
            Operation::BezierCurveTo {
                cp1x,
                cp1y,
                cp2x,
                cp2y,
                x,
                y,
            } => surface.bezier_curve_to(cp1x, cp1y, cp2x, cp2y, x, y),
            Operation::Rect {
                x,
                y,
                width,
                height,
            } => surface.rect(x, y, width, height),
            Operation::Arc {
                x,
                y,
                radius,
                start_angle,
                end_angle,
                anticlockwise,
            } => surface.arc(x, y, radius, start_angle, end_angle, anticlockwise),
            Operation::ArcTo {
                x1,
                y1,
                x2,
                y2,
                radius,
            } => surface.arc_to(x1, y1, x2, y2, radius),
            Operation::Ellipse {
                x,
                y,
                radius_x,
                radius_y,
                rotation,
                start_angle,
                end_angle,
                anticlockwise,
            } => surface.ellipse(
                x,
                y,
                radius_x,
                radius_y,
                rotation,
                start_angle,
                end_angle,
                anticlockwise,
            ),
            Operation::IsPointInPath { x, y, rule } => {
                surface.is_point_in_path(x, y, rule).map(drop)
            }
            Operation::IsPointInStroke { x, y } => surface.is_point_in_stroke(x, y).map(drop),
            Operation::Save => surface.save(),
            Operation::Transform { a, b, c, d, e, f } => surface.transform(a, b, c, d, e, f),
            Operation::Restore => surface.restore(),
        }
    }
}

#[inline]
fn push_numbers(args: &mut Arguments, values: &[f32]) {
    args.extend(values.iter().copied().map(Argument::Number));
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.kind())?;
        for (i, arg) in self.arguments().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(arg, f)?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_lookup() {
        for kind in OpKind::ALL.iter().copied() {
            assert_eq!(OpKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(OpKind::from_name("beginPath"), None);
        assert_eq!(OpKind::from_name("moveto"), None);
    }

    #[test]
    fn arguments_fit_declared_arity() {
        let ops = [
            Operation::ClosePath,
            Operation::MoveTo { x: 1.0, y: 2.0 },
            Operation::Arc {
                x: 0.0,
                y: 0.0,
                radius: 5.0,
                start_angle: 0.0,
                end_angle: 1.0,
                anticlockwise: true,
            },
            Operation::Ellipse {
                x: 0.0,
                y: 0.0,
                radius_x: 1.0,
                radius_y: 2.0,
                rotation: 0.0,
                start_angle: 0.0,
                end_angle: 1.0,
                anticlockwise: false,
            },
            Operation::IsPointInPath {
                x: 3.0,
                y: 4.0,
                rule: FillRule::EvenOdd,
            },
            Operation::Transform {
                a: 1.0,
                b: 0.0,
                c: 0.0,
                d: 1.0,
                e: 5.0,
                f: 6.0,
            },
        ];

        for op in ops.iter() {
            assert!(op.kind().arity().contains(&op.arguments().len()), "{}", op);
        }
    }

    #[test]
    fn display_uses_canvas_names() {
        let op = Operation::BezierCurveTo {
            cp1x: 1.0,
            cp1y: 2.0,
            cp2x: 3.0,
            cp2y: 4.0,
            x: 5.0,
            y: 6.5,
        };
        assert_eq!(op.to_string(), "bezierCurveTo(1, 2, 3, 4, 5, 6.5)");
        assert_eq!(Operation::Save.to_string(), "save()");
        assert_eq!(
            Operation::IsPointInPath {
                x: 1.0,
                y: 1.0,
                rule: FillRule::NonZero
            }
            .to_string(),
            "isPointInPath(1, 1, \"nonzero\")"
        );
    }
}
