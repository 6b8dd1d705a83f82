// MIT/Apache2 License

use super::Path2D;
use crate::{Edge, Error, Operation};
use std::f32::consts::{FRAC_PI_2, PI};

/// The radii of one corner of a rounded rectangle.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Radius {
    /// Radius along the X axis.
    pub horizontal: f32,
    /// Radius along the Y axis.
    pub vertical: f32,
}

impl Radius {
    /// A circular corner.
    #[inline]
    pub fn circular(r: f32) -> Self {
        Self {
            horizontal: r,
            vertical: r,
        }
    }

    /// An elliptical corner.
    #[inline]
    pub fn elliptical(horizontal: f32, vertical: f32) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// The corner radii of a rounded rectangle.
///
/// Per-corner values are ordered top-left, top-right, bottom-right, bottom-left.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum CornerRadii {
    /// One radius for both axes of every corner.
    Uniform(f32),
    /// One horizontal and one vertical radius shared by every corner.
    AxisPair { horizontal: f32, vertical: f32 },
    /// One radius per corner, used for both axes.
    PerCorner([f32; 4]),
    /// A horizontal and vertical radius per corner.
    PerCornerAxes([Radius; 4]),
}

impl CornerRadii {
    #[inline]
    pub fn uniform(r: f32) -> Self {
        CornerRadii::Uniform(r)
    }

    #[inline]
    pub fn axis_pair(horizontal: f32, vertical: f32) -> Self {
        CornerRadii::AxisPair {
            horizontal,
            vertical,
        }
    }

    #[inline]
    pub fn per_corner(radii: [f32; 4]) -> Self {
        CornerRadii::PerCorner(radii)
    }

    #[inline]
    pub fn per_corner_axes(radii: [(f32, f32); 4]) -> Self {
        let [tl, tr, br, bl] = radii;
        CornerRadii::PerCornerAxes([
            Radius::elliptical(tl.0, tl.1),
            Radius::elliptical(tr.0, tr.1),
            Radius::elliptical(br.0, br.1),
            Radius::elliptical(bl.0, bl.1),
        ])
    }

    /// Interpret the radius arguments that trail `x, y, width, height` in a positional call.
    ///
    /// Accepts 1, 2, 4 or 8 values.
    fn from_positional(radii: &[f32]) -> Option<Self> {
        match *radii {
            [r] => Some(Self::uniform(r)),
            [rh, rv] => Some(Self::axis_pair(rh, rv)),
            [r1, r2, r3, r4] => Some(Self::per_corner([r1, r2, r3, r4])),
            [h1, v1, h2, v2, h3, v3, h4, v4] => Some(Self::per_corner_axes([
                (h1, v1),
                (h2, v2),
                (h3, v3),
                (h4, v4),
            ])),
            _ => None,
        }
    }

    /// The radii of each corner: top-left, top-right, bottom-right, bottom-left.
    #[inline]
    pub fn resolve(self) -> [Radius; 4] {
        match self {
            CornerRadii::Uniform(r) => [Radius::circular(r); 4],
            CornerRadii::AxisPair {
                horizontal,
                vertical,
            } => [Radius::elliptical(horizontal, vertical); 4],
            CornerRadii::PerCorner([r1, r2, r3, r4]) => [
                Radius::circular(r1),
                Radius::circular(r2),
                Radius::circular(r3),
                Radius::circular(r4),
            ],
            CornerRadii::PerCornerAxes(radii) => radii,
        }
    }
}

impl From<f32> for CornerRadii {
    #[inline]
    fn from(r: f32) -> Self {
        Self::uniform(r)
    }
}

impl From<(f32, f32)> for CornerRadii {
    #[inline]
    fn from((horizontal, vertical): (f32, f32)) -> Self {
        Self::axis_pair(horizontal, vertical)
    }
}

impl From<[f32; 4]> for CornerRadii {
    #[inline]
    fn from(radii: [f32; 4]) -> Self {
        Self::per_corner(radii)
    }
}

impl From<[(f32, f32); 4]> for CornerRadii {
    #[inline]
    fn from(radii: [(f32, f32); 4]) -> Self {
        Self::per_corner_axes(radii)
    }
}

impl From<[Radius; 4]> for CornerRadii {
    #[inline]
    fn from(radii: [Radius; 4]) -> Self {
        CornerRadii::PerCornerAxes(radii)
    }
}

/// Make sure adjacent corners fit along every edge.
#[inline]
fn check_bounds(width: f32, height: f32, [tl, tr, br, bl]: [Radius; 4]) -> Result<(), Edge> {
    if tl.horizontal + tr.horizontal > width {
        Err(Edge::Top)
    } else if bl.horizontal + br.horizontal > width {
        Err(Edge::Bottom)
    } else if tl.vertical + bl.vertical > height {
        Err(Edge::Left)
    } else if tr.vertical + br.vertical > height {
        Err(Edge::Right)
    } else {
        Ok(())
    }
}

impl Path2D {
    /// Record a rectangle with rounded corners.
    ///
    /// The outline is a closed subpath made of four quarter-ellipses, one per corner, joined by the
    /// straight edges that each `ellipse` draws from the current point to its start. The current subpath is
    /// closed first, so the rounded rectangle never connects to earlier geometry.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::Range`] if the radii of two adjacent corners add up to more than the length of
    /// the edge between them. Nothing is recorded in that case.
    pub fn round_rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        radii: impl Into<CornerRadii>,
    ) -> crate::Result {
        let corners = radii.into().resolve();
        if let Err(edge) = check_bounds(width, height, corners) {
            log::debug!(
                "Rejecting rounded rectangle {}x{}: radii {:?} exceed the {} edge",
                width,
                height,
                corners,
                edge
            );
            return Err(Error::Range(edge));
        }

        let [tl, tr, br, bl] = corners;
        let centers = [
            (x + tl.horizontal, y + tl.vertical),
            (x + width - tr.horizontal, y + tr.vertical),
            (x + width - br.horizontal, y + height - br.vertical),
            (x + bl.horizontal, y + height - bl.vertical),
        ];

        self.ops.reserve(7);
        self.close_path();
        self.move_to(x, y + tl.vertical);

        // each corner sweeps a quarter turn, picking up where the last one ended
        for (i, (&(cx, cy), corner)) in centers.iter().zip(corners.iter()).enumerate() {
            let start_angle = PI + FRAC_PI_2 * i as f32;
            self.push(Operation::Ellipse {
                x: cx,
                y: cy,
                radius_x: corner.horizontal,
                radius_y: corner.vertical,
                rotation: 0.0,
                start_angle,
                end_angle: start_angle + FRAC_PI_2,
                anticlockwise: false,
            });
        }

        self.close_path();
        Ok(())
    }

    /// Record a rounded rectangle from positional arguments.
    ///
    /// `args` is `x, y, width, height` followed by 1, 2, 4 or 8 radius values, exactly as they would be
    /// passed to the canvas `roundRect()` call:
    ///
    /// * `r`: one radius everywhere.
    /// * `rh, rv`: a shared horizontal and vertical radius.
    /// * `r1, r2, r3, r4`: one radius per corner.
    /// * `h1, v1, h2, v2, h3, v3, h4, v4`: both radii per corner.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::TypeMismatch`] if `args` does not hold 5, 6, 8 or 12 values, and with
    /// [`Error::Range`] as described in [`round_rect`](Path2D::round_rect).
    pub fn round_rect_args(&mut self, args: &[f32]) -> crate::Result {
        let mismatch = Error::TypeMismatch { found: args.len() };
        if args.len() < 4 {
            return Err(mismatch);
        }

        let (rect, radii) = args.split_at(4);
        let radii = CornerRadii::from_positional(radii).ok_or(mismatch)?;
        self.round_rect(rect[0], rect[1], rect[2], rect[3], radii)
    }
}
