/// Reduces any signed angle in degrees to the canonical range `[0, 360)`.
///
/// # Arguments
/// * `angle` - The angle in degrees, any signed value including multi-turn [i32]
///
/// # Returns
/// The equivalent angle in `[0, 360)` [i32]
pub const fn normalize_angle(angle: i32) -> i32 {
    // Map the exact full turn to zero before the general modulo
    if angle == 360 {
        return 0;
    }

    let angle = angle % 360;
    if angle < 0 {
        angle + 360
    } else {
        angle
    }
}
