use egui::{Pos2, Vec2};

/// `Some(size)` if both dimensions are usable for layout.
///
/// A board that has not been measured yet reports zero (or garbage) dimensions; positions stay
/// unset until both are known.
pub(super) fn measured_size(width: f32, height: f32) -> Option<Vec2> {
    let usable = |v: f32| v.is_finite() && v > 0.0;
    (usable(width) && usable(height)).then(|| Vec2::new(width, height))
}

pub(super) fn board_center(size: Vec2) -> Vec2 {
    size * 0.5
}

pub(super) fn position_from_offset(offset: Vec2, size: Vec2) -> Pos2 {
    Pos2::ZERO + offset + board_center(size)
}

pub(super) fn offset_from_position(position: Pos2, size: Vec2) -> Vec2 {
    position.to_vec2() - board_center(size)
}
