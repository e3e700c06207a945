use crate::math_integer::normalization::normalize_angle;

/// Parameters for one bounded angle step, typically supplied by a key binding
/// or similar action layer from its static configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepConfig {
    pub step_deg: i32, // Signed step size in degrees
    pub min_deg: i32,  // Lower bound, normalized to [0, 360) before use
    pub max_deg: i32,  // Upper bound, normalized to [0, 360) before use
    pub wrap: bool,    // Jump to the opposite bound instead of clamping
}

impl StepConfig {
    pub const DEFAULT_MIN_DEG: i32 = 0;
    pub const DEFAULT_MAX_DEG: i32 = 315;

    /// Creates a step config with the default bounds (0 to 315) and clamping
    /// behavior. Override the public fields for anything else.
    pub const fn new(step_deg: i32) -> Self {
        Self {
            step_deg,
            min_deg: Self::DEFAULT_MIN_DEG,
            max_deg: Self::DEFAULT_MAX_DEG,
            wrap: false,
        }
    }
}

/// Computes the next angle after applying a signed step against a [min, max]
/// bound with clamp-or-wrap policy.
///
/// The stepped candidate is the raw sum `current + step_deg`, compared against
/// the normalized bounds before any normalization of its own. The caller is
/// expected to normalize the result (the angle setter does).
///
/// Known limitation: bounds where `min_deg > max_deg` after normalization
/// (e.g. a range meant to cross 0, min=350 max=10) are not handled and behave
/// unpredictably.
pub const fn step_angle(current: i32, step_deg: i32, min_deg: i32, max_deg: i32, wrap: bool) -> i32 {
    let min_deg = normalize_angle(min_deg);
    let max_deg = normalize_angle(max_deg);

    let angle = current + step_deg;

    if step_deg > 0 && angle > max_deg {
        if wrap {
            min_deg
        } else {
            max_deg
        }
    } else if step_deg < 0 && angle < min_deg {
        if wrap {
            max_deg
        } else {
            min_deg
        }
    } else {
        angle
    }
}
