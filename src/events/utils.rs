use crate::state::CellRect;

/// What: Whether terminal cell `(x, y)` lies inside `rect`.
pub(super) const fn point_in(rect: CellRect, x: u16, y: u16) -> bool {
    let (rx, ry, rw, rh) = rect;
    x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
}

/// What: Whether column `x` lies inside a horizontal `(x, width)` span.
pub(super) fn in_span(span: Option<(u16, u16)>, x: u16) -> bool {
    span.is_some_and(|(sx, sw)| x >= sx && x < sx.saturating_add(sw))
}
