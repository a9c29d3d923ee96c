use crate::core::math::Rect;

/// Collider bounds shrunk by the skin width on all four sides.
///
/// When the skin is wider than half the body the inset collapses onto the
/// center line instead of turning inside out.
#[inline]
pub fn skin_bounds(collider: &Rect, skin_width: f32) -> Rect {
    let mut r = collider.inset(skin_width);
    if r.left > r.right {
        let cx = (collider.left + collider.right) * 0.5;
        r.left = cx;
        r.right = cx;
    }
    if r.top > r.bottom {
        let cy = (collider.top + collider.bottom) * 0.5;
        r.top = cy;
        r.bottom = cy;
    }
    r
}
