// MIT/Apache2 License

use crate::OpKind;
use std::fmt;

/// Sum error type for path operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// A static string message. Not produced by this crate; `Surface` implementations use it to report
    /// their own failures.
    StaticMsg(&'static str),
    /// A string message. Not produced by this crate; `Surface` implementations use it to report their
    /// own failures.
    Msg(String),
    /// A path was constructed from a value that is neither absent, path data, nor a path.
    InvalidArgument(&'static str),
    /// `round_rect` was called with an unsupported number of positional arguments.
    TypeMismatch { found: usize },
    /// The corner radii of a rounded rectangle do not fit along the given edge.
    Range(Edge),
    /// The surface does not implement the given primitive.
    NotSupported(OpKind),
}

/// An edge of a rounded rectangle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

impl fmt::Display for Edge {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        })
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StaticMsg(s) => f.write_str(s),
            Self::Msg(s) => f.write_str(s),
            Self::InvalidArgument(ty) => {
                write!(f, "{} is not a valid argument to Path2D", ty)
            }
            Self::TypeMismatch { found } => write!(
                f,
                "Wrong number of arguments: expected 5, 6, 8 or 12, got {}",
                found
            ),
            Self::Range(edge) => write!(
                f,
                "Radii exceed bounds of the rectangle along the {} edge",
                edge
            ),
            Self::NotSupported(op) => {
                write!(f, "Surface does not support primitive \"{}\"", op.name())
            }
        }
    }
}

/// Convenience result type.
pub type Result<T = ()> = std::result::Result<T, Error>;
