// MIT/Apache2 License

//! Parsing SVG path data into recorded operations.
//!
//! Every command is turned into absolute coordinates. Lines (`L`, `H`, `V`) become `lineTo`, cubic curves
//! (`C`, `S`) become `bezierCurveTo`, quadratic curves (`Q`, `T`) become `quadraticCurveTo`, and elliptical
//! arcs (`A`) are converted to center parameterization and become `ellipse`.

use crate::{Argument, Operation};
use lyon_geom::{point, vector, Angle, Arc, ArcFlags, Point, SvgArc};
use std::fmt;

/// Why a piece of path data could not be parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The data does not start with a moveto command.
    MissingMoveTo,
    /// A character that is not a path command was found where a command was expected.
    UnknownCommand(char),
    /// The data ended, or a command was cut short, before all of its numbers were read.
    UnexpectedEnd,
    /// A number could not be read.
    InvalidNumber(String),
    /// An arc flag was not `0` or `1`.
    InvalidFlag(char),
    /// A coordinate grew too large to be represented.
    Overflow,
}

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingMoveTo => f.write_str("Path data must begin with a moveto command"),
            Self::UnknownCommand(c) => write!(f, "Unknown path command {:?}", c),
            Self::UnexpectedEnd => f.write_str("Path data ended in the middle of a command"),
            Self::InvalidNumber(s) => write!(f, "Invalid number \"{}\"", s),
            Self::InvalidFlag(c) => write!(f, "Arc flags must be 0 or 1, found {:?}", c),
            Self::Overflow => f.write_str("Path coordinates overflowed"),
        }
    }
}

/// Parse SVG path data into a list of operations.
///
/// Blank data parses to an empty list.
///
/// # Example
///
/// ```
/// use chalkboard_path::{parse::parse_path_data, Operation};
///
/// let ops = parse_path_data("M 10 10 h 5 z").unwrap();
/// assert_eq!(ops[1], Operation::LineTo { x: 15.0, y: 10.0 });
/// assert_eq!(ops[2], Operation::ClosePath);
/// ```
pub fn parse_path_data(data: &str) -> Result<Vec<Operation>, ParseError> {
    let mut parser = Parser {
        data: data.as_bytes(),
        pos: 0,
        ops: Vec::new(),
        current: point(0.0, 0.0),
        subpath_start: point(0.0, 0.0),
        last_cubic_ctrl: None,
        last_quad_ctrl: None,
    };
    parser.run()?;
    Ok(parser.ops)
}

struct Parser<'a> {
    data: &'a [u8],
    pos: usize,
    ops: Vec<Operation>,
    current: Point<f32>,
    subpath_start: Point<f32>,
    // only a C/S or Q/T immediately before an S or T may be reflected
    last_cubic_ctrl: Option<Point<f32>>,
    last_quad_ctrl: Option<Point<f32>>,
}

impl<'a> Parser<'a> {
    fn run(&mut self) -> Result<(), ParseError> {
        self.skip_separators();
        match self.peek() {
            None => return Ok(()),
            Some(b'M') | Some(b'm') => {}
            Some(_) => return Err(ParseError::MissingMoveTo),
        }

        let mut command = b'M';
        loop {
            self.skip_separators();
            let c = match self.peek() {
                None => return Ok(()),
                Some(c) => c,
            };

            if c.is_ascii_alphabetic() {
                self.pos += 1;
                command = c;
                self.command(command)?;
            } else if command == b'Z' || command == b'z' {
                // closepath takes no numbers to repeat
                return Err(ParseError::UnknownCommand(c as char));
            } else {
                // another set of numbers for the previous command
                command = match command {
                    b'M' => b'L',
                    b'm' => b'l',
                    other => other,
                };
                self.command(command)?;
            }
        }
    }

    fn command(&mut self, command: u8) -> Result<(), ParseError> {
        let relative = command.is_ascii_lowercase();
        let origin = if relative {
            self.current
        } else {
            point(0.0, 0.0)
        };

        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;

        match command.to_ascii_uppercase() {
            b'M' => {
                let to = origin + self.vector()?;
                self.ops.push(Operation::MoveTo { x: to.x, y: to.y });
                self.current = to;
                self.subpath_start = to;
            }
            b'L' => {
                let to = origin + self.vector()?;
                self.line_to(to);
            }
            b'H' => {
                let x = self.number()?;
                let to = point(if relative { self.current.x + x } else { x }, self.current.y);
                self.line_to(to);
            }
            b'V' => {
                let y = self.number()?;
                let to = point(self.current.x, if relative { self.current.y + y } else { y });
                self.line_to(to);
            }
            b'C' => {
                let ctrl1 = origin + self.vector()?;
                let ctrl2 = origin + self.vector()?;
                let to = origin + self.vector()?;
                self.cubic_to(ctrl1, ctrl2, to);
                cubic_ctrl = Some(ctrl2);
            }
            b'S' => {
                let ctrl1 = self.reflect(self.last_cubic_ctrl);
                let ctrl2 = origin + self.vector()?;
                let to = origin + self.vector()?;
                self.cubic_to(ctrl1, ctrl2, to);
                cubic_ctrl = Some(ctrl2);
            }
            b'Q' => {
                let ctrl = origin + self.vector()?;
                let to = origin + self.vector()?;
                self.quad_to(ctrl, to);
                quad_ctrl = Some(ctrl);
            }
            b'T' => {
                let ctrl = self.reflect(self.last_quad_ctrl);
                let to = origin + self.vector()?;
                self.quad_to(ctrl, to);
                quad_ctrl = Some(ctrl);
            }
            b'A' => {
                let radii = self.vector()?;
                let x_rotation = self.number()?;
                let large_arc = self.flag()?;
                let sweep = self.flag()?;
                let to = origin + self.vector()?;
                self.arc_to(SvgArc {
                    from: self.current,
                    to,
                    radii,
                    x_rotation: Angle::degrees(x_rotation),
                    flags: ArcFlags { large_arc, sweep },
                })?;
            }
            b'Z' => {
                self.ops.push(Operation::ClosePath);
                self.current = self.subpath_start;
            }
            _ => return Err(ParseError::UnknownCommand(command as char)),
        }

        self.last_cubic_ctrl = cubic_ctrl;
        self.last_quad_ctrl = quad_ctrl;

        // relative offsets can push finite numbers past f32::MAX
        let overflowed = self.ops.last().map_or(false, |op| {
            op.arguments().iter().any(|arg| match *arg {
                Argument::Number(n) => !n.is_finite(),
                _ => false,
            })
        });
        if overflowed {
            Err(ParseError::Overflow)
        } else {
            Ok(())
        }
    }

    #[inline]
    fn reflect(&self, ctrl: Option<Point<f32>>) -> Point<f32> {
        match ctrl {
            Some(ctrl) => self.current + (self.current - ctrl),
            None => self.current,
        }
    }

    #[inline]
    fn line_to(&mut self, to: Point<f32>) {
        self.ops.push(Operation::LineTo { x: to.x, y: to.y });
        self.current = to;
    }

    #[inline]
    fn cubic_to(&mut self, ctrl1: Point<f32>, ctrl2: Point<f32>, to: Point<f32>) {
        self.ops.push(Operation::BezierCurveTo {
            cp1x: ctrl1.x,
            cp1y: ctrl1.y,
            cp2x: ctrl2.x,
            cp2y: ctrl2.y,
            x: to.x,
            y: to.y,
        });
        self.current = to;
    }

    #[inline]
    fn quad_to(&mut self, ctrl: Point<f32>, to: Point<f32>) {
        self.ops.push(Operation::QuadraticCurveTo {
            cpx: ctrl.x,
            cpy: ctrl.y,
            x: to.x,
            y: to.y,
        });
        self.current = to;
    }

    fn arc_to(&mut self, svg_arc: SvgArc<f32>) -> Result<(), ParseError> {
        let to = svg_arc.to;

        // the center conversion only accepts finite endpoints
        if !(to.x.is_finite() && to.y.is_finite()) {
            return Err(ParseError::Overflow);
        }

        if svg_arc.from == svg_arc.to {
            // a zero-length arc draws nothing
            return Ok(());
        }
        if svg_arc.is_straight_line() {
            self.line_to(to);
            return Ok(());
        }

        let arc = Arc::from_svg_arc(&svg_arc);
        let start_angle = arc.start_angle.radians;
        self.ops.push(Operation::Ellipse {
            x: arc.center.x,
            y: arc.center.y,
            radius_x: arc.radii.x,
            radius_y: arc.radii.y,
            rotation: arc.x_rotation.radians,
            start_angle,
            end_angle: start_angle + arc.sweep_angle.radians,
            anticlockwise: arc.sweep_angle.radians < 0.0,
        });
        self.current = to;
        Ok(())
    }

    /* Lexing */

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.data.get(self.pos).copied()
    }

    #[inline]
    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_ascii_whitespace() || c == b',' {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    #[inline]
    fn vector(&mut self) -> Result<lyon_geom::Vector<f32>, ParseError> {
        let x = self.number()?;
        let y = self.number()?;
        Ok(vector(x, y))
    }

    fn number(&mut self) -> Result<f32, ParseError> {
        self.skip_separators();
        let start = self.pos;

        if let Some(b'+') | Some(b'-') = self.peek() {
            self.pos += 1;
        }

        let int_digits = self.digits();
        let mut frac_digits = 0;
        if self.peek() == Some(b'.') {
            self.pos += 1;
            frac_digits = self.digits();
        }

        if int_digits + frac_digits == 0 {
            return match self.peek() {
                None => Err(ParseError::UnexpectedEnd),
                Some(c) if c.is_ascii_alphabetic() && self.pos == start => {
                    Err(ParseError::UnexpectedEnd)
                }
                Some(_) => Err(ParseError::InvalidNumber(self.lexeme(start))),
            };
        }

        // only treat an e as an exponent if digits follow it
        if let Some(b'e') | Some(b'E') = self.peek() {
            let mark = self.pos;
            self.pos += 1;
            if let Some(b'+') | Some(b'-') = self.peek() {
                self.pos += 1;
            }
            if self.digits() == 0 {
                self.pos = mark;
            }
        }

        let lexeme = self.lexeme(start);
        match lexeme.parse::<f32>() {
            Ok(n) if n.is_finite() => Ok(n),
            _ => Err(ParseError::InvalidNumber(lexeme)),
        }
    }

    fn flag(&mut self) -> Result<bool, ParseError> {
        self.skip_separators();
        match self.peek() {
            Some(b'0') => {
                self.pos += 1;
                Ok(false)
            }
            Some(b'1') => {
                self.pos += 1;
                Ok(true)
            }
            Some(c) => Err(ParseError::InvalidFlag(c as char)),
            None => Err(ParseError::UnexpectedEnd),
        }
    }

    #[inline]
    fn digits(&mut self) -> usize {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_ascii_digit() {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.pos - start
    }

    #[inline]
    fn lexeme(&self, start: usize) -> String {
        String::from_utf8_lossy(&self.data[start..self.pos]).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpKind;
    use approx::assert_relative_eq;
    use std::f32::consts::PI;

    fn kinds(data: &str) -> Vec<OpKind> {
        parse_path_data(data)
            .unwrap()
            .iter()
            .map(Operation::kind)
            .collect()
    }

    #[test]
    fn blank_data_is_empty() {
        assert_eq!(parse_path_data(""), Ok(vec![]));
        assert_eq!(parse_path_data(" \n\t "), Ok(vec![]));
    }

    #[test]
    fn lines_and_close() {
        let ops = parse_path_data("M0,0 L100,0 L100,100 Z").unwrap();
        assert_eq!(
            ops,
            vec![
                Operation::MoveTo { x: 0.0, y: 0.0 },
                Operation::LineTo { x: 100.0, y: 0.0 },
                Operation::LineTo { x: 100.0, y: 100.0 },
                Operation::ClosePath,
            ]
        );
    }

    #[test]
    fn relative_commands_become_absolute() {
        let ops = parse_path_data("m10,10 l50,0 h-5 v20 z l1,1").unwrap();
        assert_eq!(ops[1], Operation::LineTo { x: 60.0, y: 10.0 });
        assert_eq!(ops[2], Operation::LineTo { x: 55.0, y: 10.0 });
        assert_eq!(ops[3], Operation::LineTo { x: 55.0, y: 30.0 });
        assert_eq!(ops[4], Operation::ClosePath);
        // after closing, the current point is back at the subpath start
        assert_eq!(ops[5], Operation::LineTo { x: 11.0, y: 11.0 });
    }

    #[test]
    fn implicit_lineto_after_moveto() {
        assert_eq!(
            kinds("M0,0 10,10 20,20"),
            [OpKind::MoveTo, OpKind::LineTo, OpKind::LineTo]
        );
        let ops = parse_path_data("m1 1 2 2").unwrap();
        assert_eq!(ops[1], Operation::LineTo { x: 3.0, y: 3.0 });
    }

    #[test]
    fn curves() {
        assert_eq!(
            kinds("M0,0 C25,50 75,50 100,0 S175,-50 200,0 Q250,50 300,0 T400,0"),
            [
                OpKind::MoveTo,
                OpKind::BezierCurveTo,
                OpKind::BezierCurveTo,
                OpKind::QuadraticCurveTo,
                OpKind::QuadraticCurveTo
            ]
        );
    }

    #[test]
    fn smooth_curves_reflect_the_previous_control_point() {
        let ops = parse_path_data("M0,0 C0,10 90,10 100,0 S200,-10 200,0").unwrap();
        match ops[2] {
            Operation::BezierCurveTo { cp1x, cp1y, .. } => assert_eq!((cp1x, cp1y), (110.0, -10.0)),
            ref other => panic!("unexpected {}", other),
        }

        // no reflection when the previous command was not a cubic
        let ops = parse_path_data("M0,0 L10,10 S20,20 30,10").unwrap();
        match ops[2] {
            Operation::BezierCurveTo { cp1x, cp1y, .. } => assert_eq!((cp1x, cp1y), (10.0, 10.0)),
            ref other => panic!("unexpected {}", other),
        }

        let ops = parse_path_data("M0,0 Q10,10 20,0 T40,0").unwrap();
        match ops[2] {
            Operation::QuadraticCurveTo { cpx, cpy, .. } => assert_eq!((cpx, cpy), (30.0, -10.0)),
            ref other => panic!("unexpected {}", other),
        }
    }

    #[test]
    fn half_circle_arc_becomes_ellipse() {
        let ops = parse_path_data("M0,50 A50,50 0 0,1 100,50").unwrap();
        assert_eq!(ops.len(), 2);
        match ops[1] {
            Operation::Ellipse {
                x,
                y,
                radius_x,
                radius_y,
                start_angle,
                end_angle,
                ..
            } => {
                assert_relative_eq!(x, 50.0, epsilon = 1e-3);
                assert_relative_eq!(y, 50.0, epsilon = 1e-3);
                assert_relative_eq!(radius_x, 50.0, epsilon = 1e-3);
                assert_relative_eq!(radius_y, 50.0, epsilon = 1e-3);
                assert_relative_eq!((end_angle - start_angle).abs(), PI, epsilon = 1e-3);
            }
            ref other => panic!("unexpected {}", other),
        }
    }

    #[test]
    fn degenerate_arcs() {
        // zero radius draws a straight line
        assert_eq!(kinds("M0,0 A0,0 0 0,1 10,10"), [OpKind::MoveTo, OpKind::LineTo]);
        // zero length draws nothing
        assert_eq!(kinds("M5,5 A10,10 0 0,1 5,5"), [OpKind::MoveTo]);
    }

    #[test]
    fn compact_arc_flags() {
        assert_eq!(
            kinds("M0,0a10 10 0 0110 0"),
            [OpKind::MoveTo, OpKind::Ellipse]
        );
    }

    #[test]
    fn number_forms() {
        let ops = parse_path_data("M-1.5e1,+.5 L0.6.5").unwrap();
        assert_eq!(ops[0], Operation::MoveTo { x: -15.0, y: 0.5 });
        assert_eq!(ops[1], Operation::LineTo { x: 0.6, y: 0.5 });

        let ops = parse_path_data("M1e2,1E2").unwrap();
        assert_eq!(ops[0], Operation::MoveTo { x: 100.0, y: 100.0 });
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse_path_data("L 10 10"),
            Err(ParseError::MissingMoveTo)
        );
        assert_eq!(
            parse_path_data("hello world"),
            Err(ParseError::MissingMoveTo)
        );
        assert_eq!(
            parse_path_data("M0,0 X100,100"),
            Err(ParseError::UnknownCommand('X'))
        );
        assert_eq!(parse_path_data("M0,0 L100"), Err(ParseError::UnexpectedEnd));
        assert_eq!(
            parse_path_data("M0,0 L10 Z"),
            Err(ParseError::UnexpectedEnd)
        );
        assert_eq!(
            parse_path_data("M0,0 L10 #"),
            Err(ParseError::InvalidNumber(String::new()))
        );
        assert_eq!(
            parse_path_data("M0,0 A1 1 0 2 0 5 5"),
            Err(ParseError::InvalidFlag('2'))
        );
        assert_eq!(
            parse_path_data("M0,0 Z 5 5"),
            Err(ParseError::UnknownCommand('5'))
        );
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        assert_eq!(
            parse_path_data("M 1e39 0 A 1 1 0 0 1 0 0"),
            Err(ParseError::InvalidNumber("1e39".to_string()))
        );
        assert_eq!(
            parse_path_data("m3e38 0 l3e38 0"),
            Err(ParseError::Overflow)
        );
        assert_eq!(
            parse_path_data("M3e38 0 a1 1 0 0 1 3e38 0"),
            Err(ParseError::Overflow)
        );
        assert!(crate::Path2D::from_path_data("m1e39 0 l-1e39 0 a 1 1 0 0 1 1 1").is_empty());
        assert!(crate::Path2D::from_path_data("m3e38 0 l3e38 0 a 1 1 0 0 1 1 1").is_empty());
    }
}
