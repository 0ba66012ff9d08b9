//! Digit-string generators: each octal or hex digit expands to its
//! fixed-width binary representation and the bits concatenate into pulses.

use crate::pattern::Pattern;
use crate::pulse::Pulse;

fn from_radix(digits: &str, radix: u32, width: u32) -> Option<Pattern> {
    let mut pulses = Vec::with_capacity(digits.len() * width as usize);
    for c in digits.chars() {
        let value = c.to_digit(radix)?;
        for bit in (0..width).rev() {
            pulses.push(if value >> bit & 1 == 1 {
                Pulse::Beat
            } else {
                Pulse::Rest
            });
        }
    }
    Some(Pattern::from(pulses))
}

impl Pattern {
    /// Read a string of octal digits as a pattern, three pulses per digit
    /// (Tracy drum notation). `None` if any character is not an octal
    /// digit.
    ///
    /// ```
    /// use rhythmic_core::Pattern;
    ///
    /// assert_eq!(Pattern::from_tracy("5325").unwrap().to_string(), "x-x-xx-x-x-x");
    /// ```
    pub fn from_tracy(digits: &str) -> Option<Pattern> {
        from_radix(digits, 8, 3)
    }

    /// Read a string of hex digits as a pattern, four pulses per digit.
    /// `None` if any character is not a hex digit.
    pub fn from_hex(digits: &str) -> Option<Pattern> {
        from_radix(digits, 16, 4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracy() {
        assert_eq!(Pattern::from_tracy("5325").unwrap().to_string(), "x-x-xx-x-x-x");
        assert_eq!(Pattern::from_tracy("0").unwrap().to_string(), "---");
        assert_eq!(Pattern::from_tracy("7").unwrap().to_string(), "xxx");
        assert_eq!(Pattern::from_tracy("8"), None);
        assert_eq!(Pattern::from_tracy("").unwrap().to_string(), "");
    }

    #[test]
    fn test_hex() {
        assert_eq!(Pattern::from_hex("8f").unwrap().to_string(), "x---xxxx");
        assert_eq!(Pattern::from_hex("8F").unwrap().to_string(), "x---xxxx");
        assert_eq!(Pattern::from_hex("a"), Some(Pattern::from_pattern("x-x-")));
        assert_eq!(Pattern::from_hex("z"), None);
    }
}
