use std::fmt;
use std::ops::Not;

/// Characters that mark a rest when they open a symbol.
const REST_GLYPHS: [char; 5] = [' ', '\t', '_', '.', '-'];

/// A single time slot in a pattern: an onset or silence.
///
/// `Rest` orders before `Beat`, matching the lexicographic order of the
/// string form (`'-'` < `'x'`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pulse {
    /// Silence at this slot
    #[default]
    Rest,
    /// An onset at this slot
    Beat,
}

impl Pulse {
    /// Check whether this pulse is an onset
    pub fn is_beat(self) -> bool {
        matches!(self, Pulse::Beat)
    }
}

impl Not for Pulse {
    type Output = Pulse;

    fn not(self) -> Pulse {
        match self {
            Pulse::Rest => Pulse::Beat,
            Pulse::Beat => Pulse::Rest,
        }
    }
}

impl fmt::Display for Pulse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pulse::Beat => write!(f, "x"),
            Pulse::Rest => write!(f, "-"),
        }
    }
}

/// Classify a value as beat or rest.
///
/// Every value reads as a beat except zero, `false`, empty strings, and
/// strings whose first character is a rest glyph (space, tab, underscore,
/// dot, minus). This makes mixed notations like `"|RL-RRL--|"` or
/// `["1", "_", "_", "+"]` parse the intended way: letters and numerals are
/// beats, punctuation placeholders are rests.
pub trait AsPulse {
    fn as_pulse(&self) -> Pulse;
}

impl AsPulse for Pulse {
    fn as_pulse(&self) -> Pulse {
        *self
    }
}

impl AsPulse for bool {
    fn as_pulse(&self) -> Pulse {
        if *self {
            Pulse::Beat
        } else {
            Pulse::Rest
        }
    }
}

impl AsPulse for char {
    fn as_pulse(&self) -> Pulse {
        if REST_GLYPHS.contains(self) {
            Pulse::Rest
        } else {
            Pulse::Beat
        }
    }
}

impl AsPulse for &str {
    fn as_pulse(&self) -> Pulse {
        match self.chars().next() {
            Some(c) => c.as_pulse(),
            None => Pulse::Rest,
        }
    }
}

impl AsPulse for String {
    fn as_pulse(&self) -> Pulse {
        self.as_str().as_pulse()
    }
}

macro_rules! as_pulse_for_int {
    ($($t:ty),* $(,)?) => {$(
        impl AsPulse for $t {
            fn as_pulse(&self) -> Pulse {
                if *self == 0 {
                    Pulse::Rest
                } else {
                    Pulse::Beat
                }
            }
        }
    )*};
}

as_pulse_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);
