use crate::pulse::{AsPulse, Pulse};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// A cyclic sequence of beats and rests.
///
/// Index 0 is the nominal start, but patterns are logically cyclic:
/// rotations of the same sequence are related necklaces, not identical
/// values. Transform methods mutate in place and return `&mut Self` so
/// calls can be chained; generators and `clone` allocate a fresh pattern.
///
/// # Examples
///
/// ```
/// use rhythmic_core::Pattern;
///
/// let mut r = Pattern::new();
/// r.beat(3).beat(3).beat(1).rest(1);
/// assert_eq!(r.to_string(), "x--x--x-");
/// assert_eq!(r, Pattern::from_pattern("|+__R  L.|"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Pattern {
    pub(crate) pulses: Vec<Pulse>,
}

/// Drop one optional pair of enclosing bars, with surrounding whitespace.
/// Leading whitespace without a bar is kept (a space is a rest).
fn strip_bars(s: &str) -> &str {
    let mut s = s;
    if let Some(rest) = s.trim_start().strip_prefix('|') {
        s = rest;
    }
    if let Some(rest) = s.trim_end().strip_suffix('|') {
        s = rest;
    }
    s
}

impl Pattern {
    /// Create an empty pattern
    pub fn new() -> Self {
        Pattern { pulses: Vec::new() }
    }

    /// Create a pattern of `length` rests
    pub fn with_length(length: usize) -> Self {
        Pattern {
            pulses: vec![Pulse::Rest; length],
        }
    }

    /// Read a sequence of values as a pattern, classifying each with
    /// [`AsPulse`].
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// let r = Pattern::from_symbols(["1", "_", "_", "+", "_", "_", "4", "_"]);
    /// assert_eq!(r.to_string(), "x--x--x-");
    /// assert_eq!(r, Pattern::from_symbols([1, 0, 0, 1, 0, 0, 1, 0]));
    /// ```
    pub fn from_symbols<I>(symbols: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsPulse,
    {
        Pattern {
            pulses: symbols.into_iter().map(|s| s.as_pulse()).collect(),
        }
    }

    /// Parse a pattern string, one character per pulse.
    ///
    /// Enclosing bars (`|...|`) are stripped first. Rest glyphs are space,
    /// tab, underscore, dot, and minus; every other character is a beat.
    /// Parsing never fails.
    pub fn from_pattern(pattern: &str) -> Self {
        Pattern::from_symbols(strip_bars(pattern).chars())
    }

    /// Reinitialize this pattern in place from any pattern source
    pub fn replace(&mut self, source: impl Into<Pattern>) -> &mut Self {
        self.pulses = source.into().pulses;
        self
    }

    /// Append one beat followed by `duration - 1` rests.
    /// A zero duration coerces to 1.
    pub fn beat(&mut self, duration: usize) -> &mut Self {
        let duration = duration.max(1);
        self.pulses.push(Pulse::Beat);
        for _ in 1..duration {
            self.pulses.push(Pulse::Rest);
        }
        self
    }

    /// Append one beat per duration, each followed by its rests
    pub fn beat_each(&mut self, durations: &[usize]) -> &mut Self {
        for &duration in durations {
            self.beat(duration);
        }
        self
    }

    /// Append `duration` rests
    pub fn rest(&mut self, duration: usize) -> &mut Self {
        for _ in 0..duration {
            self.pulses.push(Pulse::Rest);
        }
        self
    }

    /// Extend the pattern until it holds `times` copies of itself.
    /// `times <= 1` leaves it unchanged.
    pub fn repeat(&mut self, times: usize) -> &mut Self {
        if times > 1 {
            let period = self.pulses.clone();
            for _ in 1..times {
                self.pulses.extend_from_slice(&period);
            }
        }
        self
    }

    /// Number of pulses
    pub fn len(&self) -> usize {
        self.pulses.len()
    }

    /// Whether the pattern has no pulses at all
    pub fn is_empty(&self) -> bool {
        self.pulses.is_empty()
    }

    /// Whether the pattern contains no beats
    pub fn is_silent(&self) -> bool {
        self.first_beat().is_none()
    }

    /// The pulses as a slice
    pub fn pulses(&self) -> &[Pulse] {
        &self.pulses
    }

    /// Iterate over the pulses
    pub fn iter(&self) -> std::slice::Iter<'_, Pulse> {
        self.pulses.iter()
    }

    /// Number of beats
    pub fn beat_count(&self) -> usize {
        self.pulses.iter().filter(|p| p.is_beat()).count()
    }

    /// Indices where a beat occurs
    pub fn beat_positions(&self) -> Vec<usize> {
        self.pulses
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_beat())
            .map(|(i, _)| i)
            .collect()
    }

    /// Position of the first beat, or `None` for a silent pattern
    pub fn first_beat(&self) -> Option<usize> {
        self.pulses.iter().position(|p| p.is_beat())
    }

    /// Rotate the pattern `pulses` slots to the right (negative rotates
    /// left). Any integer is reduced modulo the length; rotating an empty
    /// pattern is a no-op.
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// let mut r = Pattern::from_pattern("x--x-");
    /// r.rotate(1);
    /// assert_eq!(r.to_string(), "-x--x");
    /// ```
    pub fn rotate(&mut self, pulses: i64) -> &mut Self {
        let len = self.pulses.len();
        if len > 0 {
            let shift = pulses.rem_euclid(len as i64) as usize;
            self.pulses.rotate_right(shift);
        }
        self
    }

    /// Rotate so that the pulse `beats` beats after the current first beat
    /// lands on position 0. `rotate_beats(0)` therefore removes any leading
    /// rests. A silent pattern is left unchanged.
    pub fn rotate_beats(&mut self, beats: i64) -> &mut Self {
        let positions = self.beat_positions();
        if !positions.is_empty() {
            let index = (-beats).rem_euclid(positions.len() as i64) as usize;
            let shift = positions[index] as i64;
            self.rotate(-shift);
        }
        self
    }

    /// Signed rotation amount that turns this pattern into `other`, found
    /// by searching the doubled string form. `None` when lengths differ or
    /// no rotation matches.
    pub fn rotation(&self, other: &Pattern) -> Option<i64> {
        if self.len() != other.len() {
            return None;
        }
        let doubled = format!("{self}{self}");
        doubled.find(&other.to_string()).map(|i| -(i as i64))
    }

    /// Whether the two patterns are the same necklace, up to rotation
    pub fn equivalent(&self, other: &Pattern) -> bool {
        self.rotation(other).is_some()
    }

    /// Swap every beat and rest
    pub fn complement(&mut self) -> &mut Self {
        for pulse in &mut self.pulses {
            *pulse = !*pulse;
        }
        self
    }

    /// Whether `other`'s beats form a subset of this pattern's beats.
    /// Patterns of different length are never included in each other.
    pub fn includes(&self, other: &Pattern) -> bool {
        self.len() == other.len()
            && self
                .pulses
                .iter()
                .zip(&other.pulses)
                .all(|(ours, theirs)| !theirs.is_beat() || ours.is_beat())
    }

    /// Interleave a rest between each pair of pulses, turning straight
    /// pairs into shuffled triplets. No-op unless the length is even.
    pub fn shuffle(&mut self) -> &mut Self {
        if !self.pulses.is_empty() && self.pulses.len() % 2 == 0 {
            let mut shuffled = Vec::with_capacity(self.pulses.len() / 2 * 3);
            for pair in self.pulses.chunks(2) {
                shuffled.push(pair[0]);
                shuffled.push(Pulse::Rest);
                shuffled.push(pair[1]);
            }
            self.pulses = shuffled;
        }
        self
    }

    /// Reverse of [`shuffle`](Pattern::shuffle): drop the middle pulse of
    /// each triplet. No-op unless the length is divisible by 3.
    pub fn unshuffle(&mut self) -> &mut Self {
        if !self.pulses.is_empty() && self.pulses.len() % 3 == 0 {
            let mut straight = Vec::with_capacity(self.pulses.len() / 3 * 2);
            for triplet in self.pulses.chunks(3) {
                straight.push(triplet[0]);
                straight.push(triplet[2]);
            }
            self.pulses = straight;
        }
        self
    }

    /// The rhythmic oddity property: no two beats sit diametrically
    /// opposite each other. Trivially true for odd or zero lengths.
    pub fn odd(&self) -> bool {
        let len = self.pulses.len();
        if len % 2 != 0 {
            return true;
        }
        let half = len / 2;
        (0..half).all(|i| !(self.pulses[i].is_beat() && self.pulses[i + half].is_beat()))
    }
}

impl fmt::Display for Pattern {
    /// `x` for beat, `-` for rest, one character per pulse. This form is
    /// stable: it round-trips through [`Pattern::from_pattern`] and is the
    /// form used for equality and ordering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pulse in &self.pulses {
            write!(f, "{pulse}")?;
        }
        Ok(())
    }
}

impl FromStr for Pattern {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Infallible> {
        Ok(Pattern::from_pattern(s))
    }
}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::from_pattern(s)
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::from_pattern(&s)
    }
}

impl From<Vec<Pulse>> for Pattern {
    fn from(pulses: Vec<Pulse>) -> Self {
        Pattern { pulses }
    }
}

impl From<&[Pulse]> for Pattern {
    fn from(pulses: &[Pulse]) -> Self {
        Pattern {
            pulses: pulses.to_vec(),
        }
    }
}

impl From<&Pattern> for Pattern {
    fn from(pattern: &Pattern) -> Self {
        pattern.clone()
    }
}

impl FromIterator<Pulse> for Pattern {
    fn from_iter<I: IntoIterator<Item = Pulse>>(iter: I) -> Self {
        Pattern {
            pulses: iter.into_iter().collect(),
        }
    }
}

impl Index<usize> for Pattern {
    type Output = Pulse;

    fn index(&self, index: usize) -> &Pulse {
        &self.pulses[index]
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Pulse;
    type IntoIter = std::slice::Iter<'a, Pulse>;

    fn into_iter(self) -> Self::IntoIter {
        self.pulses.iter()
    }
}

impl Ord for Pattern {
    /// Total order: shorter patterns sort first, equal lengths compare
    /// lexicographically pulse by pulse (rest before beat).
    fn cmp(&self, other: &Pattern) -> Ordering {
        self.len()
            .cmp(&other.len())
            .then_with(|| self.pulses.cmp(&other.pulses))
    }
}

impl PartialOrd for Pattern {
    fn partial_cmp(&self, other: &Pattern) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for Pattern {
    /// Serialize as the canonical string form
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct PatternVisitor;

        impl Visitor<'_> for PatternVisitor {
            type Value = Pattern;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a pattern string of beat and rest glyphs")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Pattern, E> {
                Ok(Pattern::from_pattern(v))
            }
        }

        deserializer.deserialize_str(PatternVisitor)
    }
}
