/// Relative X axis event code.
pub const REL_X: u16 = 0x00;
/// Relative Y axis event code.
pub const REL_Y: u16 = 0x01;
/// Relative wheel event code.
pub const REL_WHEEL: u16 = 0x08;

/// Input event class, following the evdev event type split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum EventType {
    /// Relative motion delta (one axis per event)
    Relative,
    /// Absolute position report
    Absolute,
    /// Key or button state change
    Key,
}

/// A single input event: an event class, an axis/key code within that class,
/// and a signed value. Relative events carry a delta, one axis at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputEvent {
    pub event_type: EventType,
    pub code: u16,
    pub value: i32,
}

impl InputEvent {
    /// Shorthand for a relative X motion delta.
    pub const fn rel_x(value: i32) -> Self {
        Self {
            event_type: EventType::Relative,
            code: REL_X,
            value,
        }
    }

    /// Shorthand for a relative Y motion delta.
    pub const fn rel_y(value: i32) -> Self {
        Self {
            event_type: EventType::Relative,
            code: REL_Y,
            value,
        }
    }
}

/// Outcome of offering an event to a processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ProcessResult {
    /// The event was consumed (its value possibly rewritten in place).
    Handled,
    /// The event kind is not recognized; pass it through unchanged.
    Continue,
}
