#![cfg_attr(not(feature = "std"), no_std)]

pub mod angle_step;
pub mod input_event;
pub mod math_integer;

use angle_step::{step_angle, StepConfig};
use input_event::{EventType, InputEvent, ProcessResult, REL_X, REL_Y};
use math_integer::normalization::normalize_angle;
use math_integer::trigonometry::{angle2sincos, rotate_xy, TRIG_SCALE};

/// Rotation state for one relative-motion sensor mounted at an adjustable
/// angle. Rewrites incoming X/Y deltas as if the sensor were mounted at 0
/// degrees; the mounting angle can be changed at runtime, absolutely or in
/// bounded steps.
///
/// One instance per sensor, accessed sequentially; `&mut self` on every
/// mutating operation enforces the exclusive access the transform assumes.
pub struct SensorRotation {
    angle: i32,   // Current mounting angle in degrees, always in [0, 360)
    sin_val: i32, // Cached sine of angle, scaled x1000, never stale vs angle
    cos_val: i32, // Cached cosine of angle, scaled x1000, never stale vs angle
    x: i32,       // Last raw (pre-rotation) X delta seen
    y: i32,       // Last raw (pre-rotation) Y delta seen
}

impl SensorRotation {
    /// Creates the rotation state for a sensor mounted at `rotation_angle`
    /// degrees.
    pub fn new(rotation_angle: i32) -> Self {
        let mut state = Self {
            angle: 0,
            sin_val: 0,
            cos_val: TRIG_SCALE,
            x: 0,
            y: 0,
        };
        state.set_angle(rotation_angle);
        state
    }

    /// Getter for the current mounting angle in degrees, in [0, 360).
    pub fn angle(&self) -> i32 {
        self.angle
    }

    /// Sets the mounting angle. Normalizes the input, stores it and refreshes
    /// the cached sine/cosine pair in one step. This is the only write path
    /// for the angle, so the trig cache can never go stale.
    ///
    /// # Arguments
    /// * `angle` - The new angle in degrees, any signed value [i32]
    ///
    /// # Returns
    /// The normalized angle that was stored [i32]
    pub fn set_angle(&mut self, angle: i32) -> i32 {
        let angle = normalize_angle(angle);
        self.angle = angle;
        let (sin_val, cos_val) = angle2sincos(angle);
        self.sin_val = sin_val;
        self.cos_val = cos_val;

        #[cfg(feature = "defmt")]
        defmt::debug!("Sensor rotation angle updated to {}", angle);

        angle
    }

    /// Steps the mounting angle by `step_deg`, clamping or wrapping against
    /// the normalized [`min_deg`, `max_deg`] bound, then commits the result
    /// through [`Self::set_angle`]. See [`step_angle`] for the bound policy
    /// and its crossing-zero limitation.
    ///
    /// # Returns
    /// The normalized angle after the step [i32]
    pub fn step_angle(&mut self, step_deg: i32, min_deg: i32, max_deg: i32, wrap: bool) -> i32 {
        let next = step_angle(self.angle, step_deg, min_deg, max_deg, wrap);
        self.set_angle(next)
    }

    /// Steps the mounting angle using a prebuilt [`StepConfig`], as an action
    /// binding would from its static configuration.
    pub fn step(&mut self, cfg: &StepConfig) -> i32 {
        self.step_angle(cfg.step_deg, cfg.min_deg, cfg.max_deg, cfg.wrap)
    }

    /// Offers one input event to the transform. Relative X/Y deltas are
    /// rewritten in place with their rotated value; any other event type is
    /// left alone and reported as [`ProcessResult::Continue`] so the caller
    /// forwards it unchanged.
    ///
    /// Each event carries one axis, so the rotation pairs the incoming delta
    /// with the last raw delta seen on the other axis. The stored companion
    /// value is always the raw input, not the rotated output; swapping that
    /// order changes the results.
    pub fn handle_event(&mut self, event: &mut InputEvent) -> ProcessResult {
        match event.event_type {
            EventType::Relative => {
                if event.code == REL_X {
                    let (new_x, _) = rotate_xy(event.value, self.y, self.sin_val, self.cos_val);
                    self.x = event.value;
                    event.value = new_x;

                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "X value: {}, rotate {} : {}, {} : sin {}, cos {}",
                        event.value,
                        self.angle,
                        self.x,
                        self.y,
                        self.sin_val,
                        self.cos_val
                    );
                } else if event.code == REL_Y {
                    let (_, new_y) = rotate_xy(self.x, event.value, self.sin_val, self.cos_val);
                    self.y = event.value;
                    event.value = new_y;

                    #[cfg(feature = "defmt")]
                    defmt::debug!(
                        "Y value: {}, rotate {} : {}, {} : sin {}, cos {}",
                        event.value,
                        self.angle,
                        self.x,
                        self.y,
                        self.sin_val,
                        self.cos_val
                    );
                }
                ProcessResult::Handled
            }
            _ => ProcessResult::Continue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use input_event::REL_WHEEL;

    #[test]
    fn new_normalizes_configured_angle() {
        let state = SensorRotation::new(-90);
        assert_eq!(state.angle(), 270);
    }

    #[test]
    fn set_angle_refreshes_trig_cache() {
        let mut state = SensorRotation::new(0);
        assert_eq!((state.sin_val, state.cos_val), (0, 1000));
        assert_eq!(state.set_angle(90), 90);
        assert_eq!((state.sin_val, state.cos_val), (1000, 0));
    }

    #[test]
    fn identity_at_zero_degrees() {
        let mut state = SensorRotation::new(0);
        let mut event = InputEvent::rel_x(123);
        assert_eq!(state.handle_event(&mut event), ProcessResult::Handled);
        assert_eq!(event.value, 123);
    }

    #[test]
    fn x_delta_at_quarter_turn() {
        let mut state = SensorRotation::new(90);
        let mut event = InputEvent::rel_x(100);
        assert_eq!(state.handle_event(&mut event), ProcessResult::Handled);
        // x' = (100*cos90 - 0*sin90) / 1000 = 0
        assert_eq!(event.value, 0);
    }

    #[test]
    fn companion_axis_is_stored_raw() {
        let mut state = SensorRotation::new(90);
        let mut x_event = InputEvent::rel_x(100);
        state.handle_event(&mut x_event);
        assert_eq!(x_event.value, 0);

        // y' pairs with the raw x=100, not the rotated 0:
        // y' = (100*sin90 + 50*cos90) / 1000 = 100
        let mut y_event = InputEvent::rel_y(50);
        state.handle_event(&mut y_event);
        assert_eq!(y_event.value, 100);
    }

    #[test]
    fn relative_wheel_is_handled_but_unmodified() {
        let mut state = SensorRotation::new(90);
        let mut event = InputEvent {
            event_type: EventType::Relative,
            code: REL_WHEEL,
            value: -3,
        };
        assert_eq!(state.handle_event(&mut event), ProcessResult::Handled);
        assert_eq!(event.value, -3);
    }

    #[test]
    fn non_relative_events_pass_through() {
        let mut state = SensorRotation::new(90);
        let mut event = InputEvent {
            event_type: EventType::Key,
            code: 0x110,
            value: 1,
        };
        assert_eq!(state.handle_event(&mut event), ProcessResult::Continue);
        assert_eq!(event.value, 1);
    }

    #[test]
    fn step_commits_through_setter() {
        let mut state = SensorRotation::new(300);
        assert_eq!(state.step_angle(30, 0, 315, false), 315);
        assert_eq!(state.angle(), 315);
        assert_eq!((state.sin_val, state.cos_val), (-707, 707));
    }

    #[test]
    fn step_with_config_defaults() {
        let mut state = SensorRotation::new(300);
        let mut cfg = StepConfig::new(30);
        cfg.wrap = true;
        assert_eq!(state.step(&cfg), 0);
    }
}
