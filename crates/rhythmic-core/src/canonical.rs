//! Canonical-form reduction: divisors, repetition removal, and the
//! lexicographically minimal rotation of a necklace.

use crate::pattern::Pattern;
use crate::pulse::Pulse;

/// Greatest common divisor of two numbers
fn gcd(a: usize, b: usize) -> usize {
    let (mut a, mut b) = (a, b);
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

impl Pattern {
    /// Greatest common divisor of all durations.
    ///
    /// `None` when the pattern is empty or does not start on a beat: a
    /// divisor is only meaningful relative to the first onset. `Some(1)`
    /// means the durations share no common factor but the pattern still
    /// starts on a beat.
    pub fn divisor(&self) -> Option<usize> {
        if !self.pulses.first()?.is_beat() {
            return None;
        }
        self.durations().into_iter().reduce(gcd)
    }

    /// Shrink the pattern by keeping every `div`-th pulse. `div = 0` means
    /// the full [`divisor`](Pattern::divisor). No-op unless the divisor is
    /// greater than 1 and `div` evenly divides it.
    pub fn deflate(&mut self, div: usize) -> &mut Self {
        let Some(divisor) = self.divisor() else {
            return self;
        };
        let div = if div == 0 { divisor } else { div };
        if divisor > 1 && divisor % div == 0 {
            let kept: Vec<Pulse> = self.pulses.iter().copied().step_by(div).collect();
            self.pulses = kept;
        }
        self
    }

    /// Grow the pattern by replacing every pulse with that pulse followed
    /// by `n - 1` rests. Inflating by `n` exactly reverses a deflate by
    /// `n`. `n < 2` is a no-op.
    pub fn inflate(&mut self, n: usize) -> &mut Self {
        if n >= 2 {
            let mut inflated = Vec::with_capacity(self.pulses.len() * n);
            for &pulse in &self.pulses {
                inflated.push(pulse);
                inflated.resize(inflated.len() + n - 1, Pulse::Rest);
            }
            self.pulses = inflated;
        }
        self
    }

    /// The largest `n` dividing the length such that the pattern is `n`
    /// concatenated copies of its first `length / n` pulses, or 1 if there
    /// is no such period.
    pub fn repetitions(&self) -> usize {
        let len = self.pulses.len();
        for n in (2..=len).rev() {
            if len % n == 0 {
                let period = len / n;
                if self.pulses.chunks(period).all(|c| c == &self.pulses[..period]) {
                    return n;
                }
            }
        }
        1
    }

    /// Truncate to a single period when the pattern repeats itself
    pub fn cut(&mut self) -> &mut Self {
        let repetitions = self.repetitions();
        if repetitions > 1 {
            let period = self.pulses.len() / repetitions;
            self.pulses.truncate(period);
        }
        self
    }

    /// Reduce to the canonical core of this pattern's equivalence class:
    /// rotate the first beat to position 0, deflate fully, cut repetition,
    /// then pick the lexicographically smallest among the rotations that
    /// start on a beat. Rotations and multiples of the same necklace all
    /// normalize to the same result, and normalizing is idempotent.
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// let mut r = Pattern::from_pattern("-x--x-----x-");
    /// r.normalize();
    /// assert_eq!(r.to_string(), "x-xx");
    /// ```
    pub fn normalize(&mut self) -> &mut Self {
        self.rotate_beats(0);
        self.deflate(0);
        self.cut();

        let len = self.pulses.len();
        if len > 1 && self.pulses[0].is_beat() {
            let current = self.to_string();
            let doubled = format!("{current}{current}");
            let bytes = doubled.as_bytes();
            let mut best = current.as_str();
            for i in 1..len {
                if bytes[i] == b'x' {
                    let candidate = &doubled[i..i + len];
                    if candidate < best {
                        best = candidate;
                    }
                }
            }
            if best != current {
                self.pulses = Pattern::from_pattern(best).pulses;
            }
        }
        self
    }

    /// Whether the pattern already is the canonical core of its class
    pub fn is_core(&self) -> bool {
        let mut normalized = self.clone();
        normalized.normalize();
        normalized == *self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(s: &str) -> Pattern {
        Pattern::from_pattern(s)
    }

    #[test]
    fn test_divisor() {
        assert_eq!(pattern("x-x-x-").divisor(), Some(2));
        assert_eq!(pattern("xx").divisor(), Some(1));
        assert_eq!(pattern("x-x").divisor(), Some(1));
        assert_eq!(pattern("x--x-----").divisor(), Some(3));
        assert_eq!(pattern("x-----").divisor(), Some(6));
        assert_eq!(pattern("--x---").divisor(), None);
        assert_eq!(pattern("").divisor(), None);
    }

    #[test]
    fn test_deflate() {
        let mut r = pattern("x-x-x-");
        r.deflate(2);
        assert_eq!(r.to_string(), "xxx");

        let mut r = pattern("x--x-----");
        r.deflate(0);
        assert_eq!(r.to_string(), "xx-");

        // div does not divide the divisor: no-op
        let mut r = pattern("x--x-----");
        r.deflate(2);
        assert_eq!(r.to_string(), "x--x-----");

        // not beat-first: no-op
        let mut r = pattern("-x-x-x");
        r.deflate(0);
        assert_eq!(r.to_string(), "-x-x-x");
    }

    #[test]
    fn test_inflate_reverses_deflate() {
        for (source, divisor, deflated) in [
            ("x-x-x-", 2, "xxx"),
            ("x--x-----", 3, "xx-"),
            ("x-----", 6, "x"),
        ] {
            let mut r = pattern(source);
            r.deflate(divisor);
            assert_eq!(r.to_string(), deflated);
            r.inflate(divisor);
            assert_eq!(r.to_string(), source);
        }
    }

    #[test]
    fn test_repetitions_and_cut() {
        assert_eq!(pattern("xx").repetitions(), 2);
        assert_eq!(pattern("x-x-x-").repetitions(), 3);
        assert_eq!(pattern("x--x--x-").repetitions(), 1);
        assert_eq!(pattern("").repetitions(), 1);

        let mut r = pattern("xx");
        r.cut();
        assert_eq!(r.to_string(), "x");

        let mut r = pattern("-xx--xx-");
        r.cut();
        assert_eq!(r.to_string(), "-xx-");

        let mut r = pattern("x--x-");
        r.cut();
        assert_eq!(r.to_string(), "x--x-");
    }

    #[test]
    fn test_normalize() {
        let mut r = pattern("-x--x-----x-");
        assert_eq!(r.durations(), vec![3, 6, 3]);
        r.normalize();
        assert_eq!(r.to_string(), "x-xx");

        let mut r = pattern("xx");
        r.normalize();
        assert_eq!(r.to_string(), "x");

        let mut r = pattern("x--x--x-");
        r.normalize();
        assert_eq!(r.to_string(), "x--x--x-");
    }

    #[test]
    fn test_normalize_idempotent() {
        for source in ["-x--x-----x-", "x--x--x-", "xx", "---", "", "x-x-x--x--"] {
            let mut once = pattern(source);
            once.normalize();
            let mut twice = once.clone();
            twice.normalize();
            assert_eq!(twice, once, "normalize not idempotent for {source:?}");
        }
    }

    #[test]
    fn test_equivalence_class_converges() {
        // rotations and multiples of the same necklace share one core
        let mut a = pattern("-x--x-----x-");
        let mut b = pattern("x-xxx---"); // unrelated shape, different core
        let mut c = pattern("x-xx");
        a.normalize();
        b.normalize();
        c.normalize();
        assert_eq!(a, c);
        assert_ne!(a, b);
    }

    #[test]
    fn test_is_core() {
        assert!(pattern("x").is_core());
        assert!(pattern("x-x").is_core());
        assert!(pattern("x-xx").is_core());
        assert!(!pattern("xx").is_core());
        assert!(!pattern("x--").is_core());
        assert!(!pattern("-x-x").is_core());
    }
}
