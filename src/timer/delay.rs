use crate::switch::{NexaSwitch, StatusSink};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

/// Runs a blocking loop that refreshes `switch` every `interval_ms`.
///
/// Each refresh re-sends the remembered state and reports it, so receivers
/// and hubs that missed a command converge.
///
/// # Arguments
/// - `switch`: the switch to refresh
/// - `delay`: a delay provider for the wait between refreshes; the transmitter
///   keeps its own for pulse timing
/// - `interval_ms`: pause between the end of one refresh and the next
///
/// # Example
/// ```rust,ignore
/// use nexa433::timer::run_refresh_loop;
/// run_refresh_loop(&mut switch, &mut delay, 60_000);
/// ```
///
/// # Notes
/// - This loop will never return; it is intended for single-purpose firmware.
/// - Commands arriving from an interrupt can still be applied between refreshes
///   if the switch is shared through a critical-section mutex.
pub fn run_refresh_loop<TX, D, S, W>(
    switch: &mut NexaSwitch<'_, TX, D, S>,
    delay: &mut W,
    interval_ms: u32,
) -> !
where
    TX: OutputPin,
    D: DelayNs,
    S: StatusSink,
    W: DelayNs,
{
    loop {
        run_refresh_cycles(switch, delay, interval_ms, 1);
    }
}

/// Refreshes `switch` `cycles` times, waiting `interval_ms` after each.
pub fn run_refresh_cycles<TX, D, S, W>(
    switch: &mut NexaSwitch<'_, TX, D, S>,
    delay: &mut W,
    interval_ms: u32,
    cycles: u32,
) where
    TX: OutputPin,
    D: DelayNs,
    S: StatusSink,
    W: DelayNs,
{
    for _ in 0..cycles {
        switch.refresh();
        delay.delay_ms(interval_ms);
    }
}
