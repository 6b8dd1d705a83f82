// MIT/Apache2 License

use crate::{Path2D, Surface};

/// Replay the operations recorded in a path onto a surface.
///
/// A fresh path is started with `begin_path()`, and then every recorded operation is issued to the
/// surface in order, with the arguments it was recorded with. Replay stops at the first operation the
/// surface rejects. The path itself is never modified, so it can be replayed any number of times.
#[inline]
pub fn replay<S: Surface + ?Sized>(path: &Path2D, surface: &mut S) -> crate::Result {
    log::trace!("Replaying {} operations", path.len());
    surface.begin_path()?;
    path.iter().try_for_each(|op| op.apply(surface))
}
