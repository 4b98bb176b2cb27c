//! Six-slot verification code entry.
//!
//! Each slot holds one digit. Typing advances focus, backspace on an empty
//! slot steps back, and pasting spreads digits across the remaining slots.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of digits in a verification code.
pub const CODE_LENGTH: usize = 6;

/// A complete six-digit verification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode(String);

impl VerificationCode {
    /// Accepts exactly six ASCII digits.
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() == CODE_LENGTH && raw.chars().all(|c| c.is_ascii_digit()) {
            Some(Self(raw.to_string()))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VerificationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInput {
    slots: [Option<char>; CODE_LENGTH],
    focus: usize,
}

impl CodeInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the text an input slot received.
    ///
    /// More than one character is treated as a paste. A single non-digit is
    /// rejected and leaves the slot unchanged. Empty text clears the slot.
    pub fn input(&mut self, index: usize, text: &str) {
        if index >= CODE_LENGTH {
            return;
        }

        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (None, _) => {
                self.slots[index] = None;
            }
            (Some(c), None) => {
                if !c.is_ascii_digit() {
                    return;
                }
                self.slots[index] = Some(c);
                if index < CODE_LENGTH - 1 {
                    self.focus = index + 1;
                }
            }
            (Some(_), Some(_)) => self.paste(index, text),
        }
    }

    /// Spread the digits of `text` over slots `index..`.
    pub fn paste(&mut self, index: usize, text: &str) {
        if index >= CODE_LENGTH {
            return;
        }

        let digits: Vec<char> = text
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(CODE_LENGTH - index)
            .collect();

        for (offset, digit) in digits.iter().enumerate() {
            self.slots[index + offset] = Some(*digit);
        }
        self.focus = (index + digits.len()).min(CODE_LENGTH - 1);
    }

    /// Backspace pressed in slot `index`.
    ///
    /// A filled slot is cleared in place; on an empty slot focus moves one
    /// slot back without touching its value.
    pub fn backspace(&mut self, index: usize) {
        if index >= CODE_LENGTH {
            return;
        }

        if self.slots[index].is_some() {
            self.slots[index] = None;
            self.focus = index;
        } else if index > 0 {
            self.focus = index - 1;
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn slot(&self, index: usize) -> Option<char> {
        self.slots.get(index).copied().flatten()
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// The assembled code, only once every slot is filled.
    pub fn code(&self) -> Option<VerificationCode> {
        if !self.is_complete() {
            return None;
        }
        let raw: String = self.slots.iter().flatten().collect();
        VerificationCode::parse(&raw)
    }

    /// Slots rendered with `_` for empty positions, e.g. `12____`.
    pub fn masked(&self) -> String {
        self.slots.iter().map(|s| s.unwrap_or('_')).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_digits_assemble_the_code() {
        let mut input = CodeInput::new();
        for (i, d) in ["1", "2", "3", "4", "5", "6"].iter().enumerate() {
            assert!(!input.is_complete());
            input.input(i, d);
        }

        assert!(input.is_complete());
        assert_eq!(input.code().unwrap().as_str(), "123456");
        assert_eq!(input.focus(), 5);
    }

    #[test]
    fn any_empty_slot_blocks_the_code() {
        let mut input = CodeInput::new();
        for i in [0, 1, 2, 4, 5] {
            input.input(i, "7");
        }

        assert!(!input.is_complete());
        assert_eq!(input.code(), None);
        assert_eq!(input.masked(), "777_77");
    }

    #[test]
    fn typing_moves_focus_forward() {
        let mut input = CodeInput::new();
        input.input(0, "4");
        assert_eq!(input.focus(), 1);
        input.input(3, "2");
        assert_eq!(input.focus(), 4);
    }

    #[test]
    fn non_digit_single_char_is_rejected() {
        let mut input = CodeInput::new();
        input.input(2, "5");
        input.input(2, "x");

        assert_eq!(input.slot(2), Some('5'));
        assert_eq!(input.focus(), 3);
    }

    #[test]
    fn paste_strips_non_digits_and_stops_at_last_slot() {
        let mut input = CodeInput::new();
        input.input(1, "4567xx89");

        assert_eq!(input.slot(0), None);
        assert_eq!(input.slot(1), Some('4'));
        assert_eq!(input.slot(2), Some('5'));
        assert_eq!(input.slot(3), Some('6'));
        assert_eq!(input.slot(4), Some('7'));
        assert_eq!(input.slot(5), Some('8'));
        assert_eq!(input.focus(), 5);
        assert!(!input.is_complete());
    }

    #[test]
    fn short_paste_moves_focus_after_last_filled_slot() {
        let mut input = CodeInput::new();
        input.paste(0, "12");

        assert_eq!(input.masked(), "12____");
        assert_eq!(input.focus(), 2);
    }

    #[test]
    fn backspace_on_empty_slot_only_moves_focus() {
        let mut input = CodeInput::new();
        input.input(0, "1");
        input.input(1, "2");
        input.backspace(2);

        assert_eq!(input.focus(), 1);
        assert_eq!(input.slot(1), Some('2'));
    }

    #[test]
    fn backspace_on_first_empty_slot_stays_put() {
        let mut input = CodeInput::new();
        input.backspace(0);
        assert_eq!(input.focus(), 0);
    }

    #[test]
    fn backspace_on_filled_slot_clears_it() {
        let mut input = CodeInput::new();
        input.paste(0, "123456");
        input.backspace(3);

        assert_eq!(input.slot(3), None);
        assert_eq!(input.focus(), 3);
        assert!(!input.is_complete());
    }

    #[test]
    fn clear_resets_slots_and_focus() {
        let mut input = CodeInput::new();
        input.paste(0, "987654");
        input.clear();

        assert!(input.is_empty());
        assert_eq!(input.focus(), 0);
    }

    #[test]
    fn verification_code_parse_requires_six_digits() {
        assert!(VerificationCode::parse("123456").is_some());
        assert!(VerificationCode::parse("12345").is_none());
        assert!(VerificationCode::parse("12345a").is_none());
        assert!(VerificationCode::parse("1234567").is_none());
    }
}
