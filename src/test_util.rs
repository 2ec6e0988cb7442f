//! Test doubles shared by the unit tests.

use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use embedded_hal_mock::eh1::digital::{State as PinState, Transaction as PinTransaction};

use crate::consts::SESSION_REPEATS;
use crate::frame::Frame;

#[derive(Debug, Default)]
struct Line {
    level: bool,
    /// (level, nanoseconds) for every delay
    pulses: Vec<(bool, u32)>,
}

/// Records the pin level in effect during every delay.
#[derive(Debug, Clone, Default)]
pub(crate) struct Recorder {
    line: Arc<Mutex<Line>>,
}

impl Recorder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn pin(&self) -> RecordingPin {
        RecordingPin {
            line: Arc::clone(&self.line),
        }
    }

    pub(crate) fn delay(&self) -> RecordingDelay {
        RecordingDelay {
            line: Arc::clone(&self.line),
        }
    }

    pub(crate) fn pulses(&self) -> Vec<(bool, u32)> {
        self.line.lock().unwrap().pulses.clone()
    }

    pub(crate) fn level(&self) -> bool {
        self.line.lock().unwrap().level
    }
}

#[derive(Debug)]
pub(crate) struct RecordingPin {
    line: Arc<Mutex<Line>>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.line.lock().unwrap().level = false;
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.line.lock().unwrap().level = true;
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct RecordingDelay {
    line: Arc<Mutex<Line>>,
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        let mut line = self.line.lock().unwrap();
        let level = line.level;
        line.pulses.push((level, ns));
    }
}

/// Pin transactions for a freshly built transmitter sending `frame`
/// `sessions` times.
pub(crate) fn expected_pin_transactions(frame: &Frame, sessions: usize) -> Vec<PinTransaction> {
    let high = || PinTransaction::set(PinState::High);
    let low = || PinTransaction::set(PinState::Low);

    let mut expected = vec![low()];
    for _ in 0..sessions * SESSION_REPEATS as usize {
        // sync
        expected.extend([high(), low()]);
        for _ in frame {
            expected.extend([high(), low(), high(), low()]);
        }
        // pause
        expected.extend([high(), low()]);
    }
    expected
}
