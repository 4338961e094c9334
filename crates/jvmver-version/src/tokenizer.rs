//! Splits a raw version string into a leading item and `(separator, item)`
//! pairs.
//!
//! The scan is total: every input, including the empty string and arbitrary
//! Unicode, produces a token stream. Each loop iteration consumes at least
//! one character, so it always terminates.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::item::Item;

/// Digit runs at least this long become [`Item::BigNumber`].
const BIG_NUMBER_DIGITS: usize = 10;

/// Punctuation between two items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
    Dot,
    Hyphen,
    Underscore,
    Plus,
    /// The two items are adjacent, e.g. `rc` and `1` in `rc1`.
    None,
}

impl Separator {
    fn from_char(c: char) -> Self {
        match c {
            '.' => Separator::Dot,
            '-' => Separator::Hyphen,
            '_' => Separator::Underscore,
            '+' => Separator::Plus,
            _ => Separator::None,
        }
    }
}

/// Raw token stream of a version string, before post-processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokens {
    pub first: Item,
    pub rest: Vec<(Separator, Item)>,
}

/// Tokenize a raw version string.
pub fn tokenize(input: &str) -> Tokens {
    let mut scanner = Scanner::new(input);
    let first = scanner.item(false);
    let mut rest = Vec::new();

    while !scanner.at_end() {
        let separator = scanner.separator();
        if separator == Separator::Plus {
            rest.push((separator, Item::BuildMetadata(scanner.remainder())));
            break;
        }
        let item = scanner.item(separator == Separator::Dot);
        rest.push((separator, item));
    }

    Tokens { first, rest }
}

/// Code points of `0` in every Unicode decimal digit block (general
/// category `Nd`). Each block holds the ten digits `0..=9` contiguously.
const DECIMAL_ZEROS: [u32; 66] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E950, 0x1FBF0,
];

/// Decimal value of `c` if it is a digit in any script, e.g. `'7'`, `'٣'`
/// (Arabic-Indic three) or `'７'` (fullwidth seven).
fn decimal_value(c: char) -> Option<u32> {
    let cp = u32::from(c);
    let block = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = DECIMAL_ZEROS[..block].last()?;
    let value = cp - zero;
    (value < 10).then_some(value)
}

fn is_digit(c: char) -> bool {
    decimal_value(c).is_some()
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic()
}

fn is_separator(c: char) -> bool {
    Separator::from_char(c) != Separator::None
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
}

impl Scanner {
    fn new(input: &str) -> Self {
        Self {
            chars: input.chars().collect(),
            pos: 0,
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Consume a separator if one is next. Adjacent runs yield
    /// [`Separator::None`] without consuming anything.
    fn separator(&mut self) -> Separator {
        let separator = self.peek().map_or(Separator::None, Separator::from_char);
        if separator != Separator::None {
            self.pos += 1;
        }
        separator
    }

    /// Consume the longest prefix whose characters satisfy `pred`.
    fn take_while(&mut self, pred: impl Fn(char) -> bool) -> String {
        let start = self.pos;
        while self.peek().is_some_and(&pred) {
            self.pos += 1;
        }
        self.chars[start..self.pos].iter().collect()
    }

    fn remainder(&mut self) -> String {
        let rest = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        rest
    }

    fn item(&mut self, after_dot: bool) -> Item {
        let Some(c) = self.peek() else {
            return Item::EMPTY;
        };

        if is_digit(c) {
            number(&self.take_while(is_digit))
        } else if is_letter(c) {
            let word = self.take_while(is_letter).to_lowercase();
            match word.as_str() {
                "x" if after_dot => Item::Max,
                "min" => Item::Min,
                "max" => Item::Max,
                _ => Item::tag(word),
            }
        } else if is_separator(c) {
            // `1.+` means "any 1.x"; the `+` is left for the next separator read.
            if after_dot && c == '+' {
                Item::Max
            } else {
                Item::EMPTY
            }
        } else {
            let other = self.take_while(|c| !is_digit(c) && !is_letter(c) && !is_separator(c));
            if after_dot && other == "*" {
                Item::Max
            } else {
                Item::tag(other)
            }
        }
    }
}

fn number(digits: &str) -> Item {
    let values = digits.chars().filter_map(decimal_value);
    if digits.chars().count() >= BIG_NUMBER_DIGITS {
        Item::BigNumber(values.fold(BigUint::zero(), |acc, d| acc * 10u32 + d))
    } else {
        Item::Number(values.fold(0u32, |acc, d| acc * 10 + d))
    }
}
