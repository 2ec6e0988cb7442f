use crate::driver::NexaTransmitter;
use crate::frame::Frame;
use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Sends `frame` as a full session with interrupts masked.
///
/// A session takes roughly 0.2 s; interrupt latency is deferred for all of it.
///
/// # Example
/// ```rust,ignore
/// let frame = config.frame(true);
/// transmit_uninterrupted(&mut transmitter, &frame);
/// ```
pub fn transmit_uninterrupted<TX: OutputPin, D: DelayNs>(
    transmitter: &mut NexaTransmitter<TX, D>,
    frame: &Frame,
) {
    critical_section::with(|_cs| transmitter.transmit(frame));
}

/// Used to initialize a global static `NexaTransmitter` for use with
/// `critical_section`.
///
/// # Returns
/// * An empty mutable ref-cell
///
/// # Example
/// ```rust,ignore
/// use nexa433::driver::NexaTransmitter;
/// use nexa433::timer::global_transmitter_init;
/// use core::cell::RefCell;
/// use critical_section::Mutex;
/// use some_hal::{PD2, Delay};
///
/// static NEXA: Mutex<RefCell<Option<NexaTransmitter<PD2, Delay>>>> =
///     global_transmitter_init::<PD2, Delay>();
/// ```
pub const fn global_transmitter_init<TX: OutputPin, D: DelayNs>()
-> Mutex<RefCell<Option<NexaTransmitter<TX, D>>>> {
    Mutex::new(RefCell::new(None))
}

/// Places a new transmitter in the global slot, replacing any previous one.
///
/// # Arguments
/// * The global static `NexaTransmitter`
/// * The tx pin
/// * The delay source
pub fn global_transmitter_setup<TX: OutputPin, D: DelayNs>(
    global: &'static Mutex<RefCell<Option<NexaTransmitter<TX, D>>>>,
    tx: TX,
    delay: D,
) {
    critical_section::with(|cs| {
        let _ = global
            .borrow(cs)
            .replace(Some(NexaTransmitter::new(tx, delay)));
    });
}

/// Sends `frame` on the global transmitter without being interrupted.
///
/// # Returns
/// `false` if [`global_transmitter_setup`] has not been called yet.
pub fn global_transmitter_send<TX: OutputPin, D: DelayNs>(
    global: &'static Mutex<RefCell<Option<NexaTransmitter<TX, D>>>>,
    frame: &Frame,
) -> bool {
    critical_section::with(|cs| match global.borrow(cs).borrow_mut().as_mut() {
        Some(transmitter) => {
            transmitter.transmit(frame);
            true
        }
        None => false,
    })
}
