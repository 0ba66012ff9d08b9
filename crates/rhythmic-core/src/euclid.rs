//! Euclidean rhythm generation.
//!
//! Distributes a number of beats as evenly as possible across a number of
//! pulses, using the floor-stepping rule equivalent to the Bjorklund
//! algorithm: position `i` is a beat iff `floor(i * beats / pulses)`
//! differs from the value at `i - 1`.

use crate::pattern::Pattern;
use crate::pulse::Pulse;

impl Pattern {
    /// Generate the maximally even distribution of `beats` onsets across
    /// `pulses` positions. Zero beats yields all rests; `beats` greater
    /// than `pulses` is clamped to an all-beat pattern.
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// assert_eq!(Pattern::euclidean(3, 8).to_string(), "x--x--x-");
    /// assert_eq!(Pattern::euclidean(3, 4).to_string(), "x-xx");
    /// ```
    pub fn euclidean(beats: usize, pulses: usize) -> Pattern {
        if beats == 0 {
            return Pattern::with_length(pulses);
        }
        let beats = beats.min(pulses);
        let mut result = Vec::with_capacity(pulses);
        let mut previous = None;
        for i in 0..pulses {
            let step = i * beats / pulses;
            result.push(if Some(step) != previous {
                Pulse::Beat
            } else {
                Pulse::Rest
            });
            previous = Some(step);
        }
        Pattern::from(result)
    }
}
