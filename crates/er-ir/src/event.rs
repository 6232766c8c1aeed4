//! Control events delivered by the platform.
//!
//! The platform hands the controller a kind byte plus a payload. Those are
//! decoded once at the boundary into [`ControlEvent`], which the engine
//! matches exhaustively.

use arrayvec::ArrayVec;
use thiserror::Error;

/// Largest inter-device message payload carried through.
pub const I2C_MAX_LEN: usize = 16;

/// Raw event kind numbers as sent by the platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EventKind {
    MainClockReceived = 0,
    MainClockSwitched = 1,
    GateReceived = 2,
    GridConnected = 3,
    GridKeyPressed = 4,
    GridKeyHeld = 5,
    ArcEncoderCoarse = 6,
    FrontButtonPressed = 7,
    FrontButtonHeld = 8,
    ButtonPressed = 9,
    I2cReceived = 10,
    TimedEvent = 11,
}

impl EventKind {
    /// Map a raw kind byte, `None` for kinds this controller does not know.
    pub const fn from_raw(kind: u8) -> Option<Self> {
        Some(match kind {
            0 => EventKind::MainClockReceived,
            1 => EventKind::MainClockSwitched,
            2 => EventKind::GateReceived,
            3 => EventKind::GridConnected,
            4 => EventKind::GridKeyPressed,
            5 => EventKind::GridKeyHeld,
            6 => EventKind::ArcEncoderCoarse,
            7 => EventKind::FrontButtonPressed,
            8 => EventKind::FrontButtonHeld,
            9 => EventKind::ButtonPressed,
            10 => EventKind::I2cReceived,
            11 => EventKind::TimedEvent,
            _ => return None,
        })
    }

    /// Minimum payload length for this kind.
    pub const fn payload_len(self) -> usize {
        match self {
            EventKind::MainClockReceived => 2,
            EventKind::MainClockSwitched => 1,
            EventKind::GateReceived => 2,
            EventKind::GridConnected => 1,
            EventKind::GridKeyPressed => 3,
            EventKind::GridKeyHeld => 2,
            EventKind::ArcEncoderCoarse => 2,
            EventKind::FrontButtonPressed => 1,
            EventKind::FrontButtonHeld => 0,
            EventKind::ButtonPressed => 2,
            EventKind::I2cReceived => 0,
            EventKind::TimedEvent => 1,
        }
    }
}

/// A decoded platform event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ControlEvent {
    /// Main clock pulse
    MainClock { external: bool, phase: bool },
    /// Clock source switched between internal and external
    ClockSwitched { external: bool },
    /// Gate input changed
    GateReceived { input: u8, on: bool },
    /// Grid plugged in or removed
    GridConnected { connected: bool },
    /// Grid key pressed (`pressed = true`) or released
    GridKey { x: u8, y: u8, pressed: bool },
    /// Grid key held past the hold threshold
    GridKeyHeld { x: u8, y: u8 },
    /// Arc encoder turned
    ArcEncoder { encoder: u8, delta: i8 },
    /// Front panel button pressed or released
    FrontButton { pressed: bool },
    /// Front panel button held
    FrontButtonHeld,
    /// Generic hardware button
    Button { button: u8, pressed: bool },
    /// Message from another device on the bus
    I2c { data: ArrayVec<u8, I2C_MAX_LEN> },
    /// A previously scheduled timer fired
    Timed { id: u8 },
}

/// Payload bytes did not match the event kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("{kind:?} payload too short: expected {expected} bytes, got {actual}")]
    Truncated {
        kind: EventKind,
        expected: usize,
        actual: usize,
    },
    #[error("payload of {len} bytes exceeds the {max} byte limit")]
    Oversized { len: usize, max: usize },
}

impl ControlEvent {
    /// Decode a raw platform event.
    ///
    /// Unknown kinds yield `Ok(None)`. Extra trailing payload bytes are ignored.
    pub fn decode(kind: u8, data: &[u8]) -> Result<Option<Self>, DecodeError> {
        let Some(kind) = EventKind::from_raw(kind) else {
            return Ok(None);
        };
        let expected = kind.payload_len();
        if data.len() < expected {
            return Err(DecodeError::Truncated {
                kind,
                expected,
                actual: data.len(),
            });
        }

        let flag = |i: usize| data[i] != 0;
        let event = match kind {
            EventKind::MainClockReceived => ControlEvent::MainClock {
                external: flag(0),
                phase: flag(1),
            },
            EventKind::MainClockSwitched => ControlEvent::ClockSwitched { external: flag(0) },
            EventKind::GateReceived => ControlEvent::GateReceived {
                input: data[0],
                on: flag(1),
            },
            EventKind::GridConnected => ControlEvent::GridConnected { connected: flag(0) },
            EventKind::GridKeyPressed => ControlEvent::GridKey {
                x: data[0],
                y: data[1],
                pressed: flag(2),
            },
            EventKind::GridKeyHeld => ControlEvent::GridKeyHeld { x: data[0], y: data[1] },
            EventKind::ArcEncoderCoarse => ControlEvent::ArcEncoder {
                encoder: data[0],
                delta: data[1] as i8,
            },
            EventKind::FrontButtonPressed => ControlEvent::FrontButton { pressed: flag(0) },
            EventKind::FrontButtonHeld => ControlEvent::FrontButtonHeld,
            EventKind::ButtonPressed => ControlEvent::Button {
                button: data[0],
                pressed: flag(1),
            },
            EventKind::I2cReceived => {
                let data = ArrayVec::try_from(data).map_err(|_| DecodeError::Oversized {
                    len: data.len(),
                    max: I2C_MAX_LEN,
                })?;
                ControlEvent::I2c { data }
            }
            EventKind::TimedEvent => ControlEvent::Timed { id: data[0] },
        };
        Ok(Some(event))
    }

    /// The raw kind this event travels as.
    pub fn kind(&self) -> EventKind {
        match self {
            ControlEvent::MainClock { .. } => EventKind::MainClockReceived,
            ControlEvent::ClockSwitched { .. } => EventKind::MainClockSwitched,
            ControlEvent::GateReceived { .. } => EventKind::GateReceived,
            ControlEvent::GridConnected { .. } => EventKind::GridConnected,
            ControlEvent::GridKey { .. } => EventKind::GridKeyPressed,
            ControlEvent::GridKeyHeld { .. } => EventKind::GridKeyHeld,
            ControlEvent::ArcEncoder { .. } => EventKind::ArcEncoderCoarse,
            ControlEvent::FrontButton { .. } => EventKind::FrontButtonPressed,
            ControlEvent::FrontButtonHeld => EventKind::FrontButtonHeld,
            ControlEvent::Button { .. } => EventKind::ButtonPressed,
            ControlEvent::I2c { .. } => EventKind::I2cReceived,
            ControlEvent::Timed { .. } => EventKind::TimedEvent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_main_clock_flags() {
        let event = ControlEvent::decode(0, &[1, 0]).unwrap();
        assert_eq!(event, Some(ControlEvent::MainClock { external: true, phase: false }));
    }

    #[test]
    fn decodes_grid_key() {
        let event = ControlEvent::decode(4, &[5, 3, 1]).unwrap();
        assert_eq!(event, Some(ControlEvent::GridKey { x: 5, y: 3, pressed: true }));
    }

    #[test]
    fn nonzero_bytes_are_true() {
        let event = ControlEvent::decode(0, &[0x80, 7]).unwrap();
        assert_eq!(event, Some(ControlEvent::MainClock { external: true, phase: true }));
    }

    #[test]
    fn arc_delta_is_signed() {
        let event = ControlEvent::decode(6, &[1, 0xff]).unwrap();
        assert_eq!(event, Some(ControlEvent::ArcEncoder { encoder: 1, delta: -1 }));
    }

    #[test]
    fn unknown_kind_is_none() {
        assert_eq!(ControlEvent::decode(12, &[1, 2, 3]), Ok(None));
        assert_eq!(ControlEvent::decode(255, &[]), Ok(None));
    }

    #[test]
    fn short_payload_is_rejected() {
        let err = ControlEvent::decode(4, &[5, 3]).unwrap_err();
        assert_eq!(
            err,
            DecodeError::Truncated { kind: EventKind::GridKeyPressed, expected: 3, actual: 2 }
        );
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let event = ControlEvent::decode(11, &[2, 9, 9]).unwrap();
        assert_eq!(event, Some(ControlEvent::Timed { id: 2 }));
    }

    #[test]
    fn i2c_payload_is_carried() {
        let event = ControlEvent::decode(10, &[0x10, 0x20]).unwrap().unwrap();
        match event {
            ControlEvent::I2c { data } => assert_eq!(data.as_slice(), &[0x10, 0x20]),
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn oversized_i2c_is_rejected() {
        let data = [0u8; I2C_MAX_LEN + 1];
        assert_eq!(
            ControlEvent::decode(10, &data),
            Err(DecodeError::Oversized { len: I2C_MAX_LEN + 1, max: I2C_MAX_LEN })
        );
    }

    #[test]
    fn kind_matches_decoded_kind() {
        for raw in 0..12u8 {
            let payload = [1u8; 3];
            let event = ControlEvent::decode(raw, &payload).unwrap().unwrap();
            assert_eq!(event.kind() as u8, raw);
        }
    }
}
