//! Speed ramp: the tick delay shrinks each time food is eaten.

/// Delay between ticks at the start of every run
pub const INITIAL_SPEED_DELAY_MS: u32 = 200;

/// The ramp never goes below this delay
pub const MIN_SPEED_DELAY_MS: u32 = 25;

/// Delay after one more food item has been eaten.
///
/// | current delay | step |
/// |---------------|------|
/// | > 150         | -5   |
/// | > 100         | -3   |
/// | > 50          | -2   |
/// | > 25          | -1   |
/// | otherwise     | 0    |
pub fn ramp(delay_ms: u32) -> u32 {
    if delay_ms > 150 {
        delay_ms - 5
    } else if delay_ms > 100 {
        delay_ms - 3
    } else if delay_ms > 50 {
        delay_ms - 2
    } else if delay_ms > MIN_SPEED_DELAY_MS {
        delay_ms - 1
    } else {
        delay_ms
    }
}
