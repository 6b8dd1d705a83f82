// MIT/Apache2 License

//! Recorded path objects for surfaces that only understand a current path.
//!
//! A [`Path2D`] records drawing operations without drawing them. [`replay`] re-issues those operations
//! onto any [`Surface`], and [`PathBridge`] wraps a surface so that its `fill()`, `stroke()`, `clip()` and
//! hit tests accept a `Path2D` directly.
//!
//! ```
//! use chalkboard_path::{FillRule, Path2D, PathBridge, RecordingSurface};
//!
//! let mut card = Path2D::new();
//! card.round_rect(0.0, 0.0, 100.0, 60.0, 8.0).unwrap();
//!
//! let mut outline = Path2D::new();
//! outline.add_path(&card);
//! outline.move_to(10.0, 30.0);
//! outline.line_to(90.0, 30.0);
//!
//! let mut bridge = PathBridge::new(RecordingSurface::new());
//! bridge.fill(&card, FillRule::NonZero).unwrap();
//! bridge.stroke(&outline).unwrap();
//! ```

#![forbid(unsafe_code)]

mod error;

pub mod bridge;
pub mod fill;
pub mod matrix;
pub mod op;
#[cfg(feature = "path-data")]
pub mod parse;
pub mod path;
pub mod replay;
pub mod surface;

pub use bridge::*;
pub use error::*;
pub use fill::*;
pub use matrix::*;
pub use op::*;
pub use path::*;
pub use replay::*;
pub use surface::*;
