/// Scale factor for the fixed-point sine/cosine values: a conceptual value v
/// is stored as `round(v * 1000)`.
pub const TRIG_SCALE: i32 = 1000;

/// Sine values for the first quarter wave (0 to 90 degrees) in 5-degree steps,
/// scaled by `TRIG_SCALE`. This quarter-wave table allows for easy computation
/// of sine and cosine values for any angle: cosine is the same table read
/// mirrored, `table[18 - index]`. The array has 19 values, including the
/// 90-degree endpoint.
const SINE_QUARTER_WAVE: [i32; 19] = [
    0, 87, 174, 259, 342, 423, 500, 574, 643, 707, 766, 819, 866, 906, 940, 966, 985, 996, 1000,
];

/// Computes the sine and cosine values for a given angle in degrees.
///
/// ### Arguments
/// * `angle` - The input angle in degrees. Any signed value is accepted; the
///             function reduces it to `[0, 360)` internally.
///
/// ### Returns
/// * A tuple `(sine, cosine)` - Both scaled by `TRIG_SCALE`.
///
/// ### Notes
/// * The function uses a quarter-wave lookup table for computational efficiency.
///   The lookup is performed in 4 quadrants, reducing the memory footprint while
///   allowing for full 360-degree coverage.
/// * Table resolution is 5 degrees. Angles that are not a multiple of 5 truncate
///   to the next-lower 5-degree bucket; this is a resolution limitation, not an
///   error.
pub const fn angle2sincos(angle: i32) -> (i32, i32) {
    let mut angle = angle % 360;
    if angle < 0 {
        angle += 360;
    }

    // Map the reduced angle to the index of the quarter wave array (0 to 17)
    let index = ((angle % 90) / 5) as usize;

    let sin_base = SINE_QUARTER_WAVE[index];
    let cos_base = SINE_QUARTER_WAVE[18 - index];

    // Based on the quadrant, determine the correct sine and cosine values
    match angle / 90 {
        0 => (sin_base, cos_base),   // First quadrant: 0 to 89
        1 => (cos_base, -sin_base),  // Second quadrant: 90 to 179
        2 => (-sin_base, -cos_base), // Third quadrant: 180 to 269
        _ => (-cos_base, sin_base),  // Fourth quadrant: 270 to 359
    }
}

/// Rotates a 2D vector by the angle whose sine and cosine are given.
///
/// ### Arguments
/// * `x`, `y` - The vector components [i32]
/// * `sin_val`, `cos_val` - Sine and cosine of the rotation angle, scaled by
///                          `TRIG_SCALE` (as produced by [`angle2sincos`])
///
/// ### Returns
/// * A tuple `(x', y')` - The rotated vector components.
///
/// ### Notes
/// * Division truncates toward zero. The small rotation error this introduces
///   is the cost of staying in integer arithmetic; do not replace with
///   floating point or rounded division, since that changes outputs.
pub const fn rotate_xy(x: i32, y: i32, sin_val: i32, cos_val: i32) -> (i32, i32) {
    let new_x = (x * cos_val - y * sin_val) / TRIG_SCALE;
    let new_y = (x * sin_val + y * cos_val) / TRIG_SCALE;
    (new_x, new_y)
}
