/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! List markers.
//!
//! A [`CounterStyle`] turns an ordinal into marker text: its numbering
//! [`System`] maps the ordinal to a sequence of indices into the symbol
//! table, which is then wrapped in the style's prefix, negative sign,
//! padding and suffix. A value the system cannot represent is formatted
//! with the fallback style instead.

use std::collections::HashMap;

use itertools::repeat_n;
use lazy_static::lazy_static;
use log::debug;
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::properties::keywords::ListStyleType;
use crate::properties::{ComputedStyle, longhands};

mod tables;

pub use self::tables::*;

/// Most digits a system may produce before the fallback style is used.
pub const MAX_DIGITS: usize = 20;

type Digits = SmallVec<[u8; MAX_DIGITS]>;

/// <https://drafts.csswg.org/css-counter-styles/#counter-style-system>
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum System {
    /// Positional notation with the symbols as digits.
    Numeric,
    /// One symbol per value, cycling through the table.
    Cyclic,
    /// Greedy sum of weighted symbols.
    Additive,
    /// Bijective numeration: like numeric, but with no zero digit.
    Alphabetic,
    /// Additive with subtractive pairs.
    Roman,
}

#[derive(Debug)]
pub struct CounterStyle {
    pub name: &'static str,
    pub system: System,
    /// Used for values this style cannot represent.
    pub fallback: Option<&'static CounterStyle>,
    pub symbols: &'static [&'static str],
    /// Weight of each symbol, for the additive systems.
    pub weights: &'static [i32],
    /// Values the additive systems accept.
    pub range: (i32, i32),
    /// Minimum number of digits and the symbol that pads up to it.
    pub pad: (usize, &'static str),
    /// Text around the digits of a negative value.
    pub negative: (&'static str, &'static str),
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// A counter value as a sequence of symbol indices.
struct Numeral {
    digits: Digits,
    negative: bool,
}

impl CounterStyle {
    /// Formats `value` into `buffer`, falling back as needed.
    ///
    /// Returns the length of the complete marker in bytes, which may exceed
    /// the length of `buffer`. Nothing is written past the end of `buffer`.
    pub fn format(&'static self, value: i32, buffer: &mut [u8]) -> Result<usize> {
        let mut output = TruncatingWriter { buffer, len: 0 };
        self.format_into(value, &mut output)?;
        Ok(output.len)
    }

    /// Formats `value`, falling back as needed.
    pub fn format_to_string(&'static self, value: i32) -> Result<String> {
        let mut output = String::new();
        self.format_into(value, &mut output)?;
        Ok(output)
    }

    fn format_into<W: MarkerWriter>(&'static self, value: i32, output: &mut W) -> Result<()> {
        let mut style = Some(self);
        while let Some(current) = style {
            match current.numeral(value) {
                Some(numeral) if numeral.digits.len() < MAX_DIGITS => {
                    current.write(&numeral, output);
                    return Ok(());
                },
                _ => {
                    debug!(
                        "Counter style {} cannot represent {}, falling back to {:?}",
                        current.name,
                        value,
                        current.fallback.map(|style| style.name),
                    );
                    style = current.fallback;
                },
            }
        }
        Err(Error::Invalid)
    }

    fn numeral(&self, value: i32) -> Option<Numeral> {
        match self.system {
            System::Numeric => Some(self.numeric(value)),
            System::Cyclic => self.cyclic(value),
            System::Additive => self.additive(value),
            System::Alphabetic => self.alphabetic(value),
            System::Roman => self.roman(value),
        }
    }

    fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    fn in_range(&self, value: i32) -> bool {
        self.range.0 <= value && value <= self.range.1
    }

    fn numeric(&self, value: i32) -> Numeral {
        let mut digits = Digits::new();
        let mut rest = value.unsigned_abs();
        if rest == 0 {
            digits.push(0);
        }
        while rest > 0 {
            digits.push((rest % self.base()) as u8);
            rest /= self.base();
        }
        digits.reverse();
        Numeral {
            digits,
            negative: value < 0,
        }
    }

    fn cyclic(&self, value: i32) -> Option<Numeral> {
        if self.symbols.is_empty() {
            return None;
        }
        let index = (value as i64 - 1).rem_euclid(self.symbols.len() as i64);
        Some(Numeral {
            digits: smallvec::smallvec![index as u8],
            negative: false,
        })
    }

    fn additive(&self, value: i32) -> Option<Numeral> {
        if !self.in_range(value) {
            return None;
        }

        if value == 0 {
            let zero = self.weights.iter().position(|weight| *weight == 0)?;
            return Some(Numeral {
                digits: smallvec::smallvec![zero as u8],
                negative: false,
            });
        }

        let mut digits = Digits::new();
        let mut rest = value.unsigned_abs();
        for (index, weight) in self.weights.iter().enumerate() {
            if *weight == 0 {
                break;
            }
            let weight = *weight as u32;
            let times = rest / weight;
            digits.extend(repeat_n(index as u8, times as usize));
            rest -= times * weight;
        }
        Some(Numeral {
            digits,
            negative: value < 0,
        })
    }

    fn alphabetic(&self, value: i32) -> Option<Numeral> {
        if value < 1 {
            return None;
        }
        let mut digits = Digits::new();
        let mut rest = value as u32;
        while rest > 0 {
            rest -= 1;
            digits.push((rest % self.base()) as u8);
            rest /= self.base();
        }
        digits.reverse();
        Some(Numeral {
            digits,
            negative: false,
        })
    }

    fn roman(&self, value: i32) -> Option<Numeral> {
        if !self.in_range(value) || self.weights.len() != ROMAN_REPEAT_LIMITS.len() {
            return None;
        }
        Some(Numeral {
            digits: roman_digits(value, self.weights),
            negative: false,
        })
    }

    fn write<W: MarkerWriter>(&self, numeral: &Numeral, output: &mut W) {
        output.write(self.prefix);
        if numeral.negative {
            output.write(self.negative.0);
        }
        let (pad_length, pad) = self.pad;
        for _ in numeral.digits.len()..pad_length {
            output.write(pad);
        }
        for digit in &numeral.digits {
            output.write(self.symbols[*digit as usize]);
        }
        if numeral.negative {
            output.write(self.negative.1);
        }
        output.write(self.suffix);
    }
}

/// How many times in a row each roman weight may be written before a
/// subtractive pair replaces it. Zero means no limit.
const ROMAN_REPEAT_LIMITS: [u32; 7] = [0, 2, 4, 2, 4, 2, 4];

/// `weights` holds the seven roman weights, largest first.
fn roman_digits(value: i32, weights: &[i32]) -> Digits {
    let weights: SmallVec<[u32; 7]> = weights.iter().map(|weight| *weight as u32).collect();
    let last = weights.len() - 1;
    let mut digits = Digits::new();
    let mut rest = value.max(0) as u32;
    let mut index = 0;

    while rest > 0 && index <= last {
        let weight = weights[index];
        if weight <= rest {
            let times = rest / weight;
            rest -= times * weight;
            let next_times = if index < last { rest / weights[index + 1] } else { 0 };

            if index < last && next_times >= ROMAN_REPEAT_LIMITS[index + 1] {
                // The next weight would repeat too often: write it before
                // the weight above this one (CM, XC, IX).
                rest -= next_times * weights[index + 1];
                digits.extend([index as u8 + 1, index as u8 - 1]);
            } else if ROMAN_REPEAT_LIMITS[index] != 0 && times >= ROMAN_REPEAT_LIMITS[index] {
                // This weight repeats too often: write it before the weight
                // above (CD, XL, IV).
                digits.extend([index as u8, index as u8 - 1]);
            } else {
                digits.extend(repeat_n(index as u8, times as usize));
            }
        }
        index += 1;
    }
    digits
}

trait MarkerWriter {
    fn write(&mut self, text: &str);
}

impl MarkerWriter for String {
    #[inline]
    fn write(&mut self, text: &str) {
        self.push_str(text);
    }
}

/// Writes as much as fits and counts everything.
struct TruncatingWriter<'a> {
    buffer: &'a mut [u8],
    len: usize,
}

impl<'a> MarkerWriter for TruncatingWriter<'a> {
    fn write(&mut self, text: &str) {
        let bytes = text.as_bytes();
        if let Some(free) = self.buffer.get_mut(self.len..) {
            let count = free.len().min(bytes.len());
            free[..count].copy_from_slice(&bytes[..count]);
        }
        self.len += bytes.len();
    }
}

lazy_static! {
    static ref BY_NAME: HashMap<&'static str, &'static CounterStyle> =
        ALL_COUNTER_STYLES.iter().map(|style| (style.name, *style)).collect();
}

impl CounterStyle {
    /// The predefined style called `name`, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<&'static CounterStyle> {
        BY_NAME
            .get(name)
            .or_else(|| BY_NAME.get(name.to_ascii_lowercase().as_str()))
            .copied()
    }

    /// The style used for a `list-style-type`. `none` has none.
    pub fn for_list_style_type(list_style_type: ListStyleType) -> Option<&'static CounterStyle> {
        use self::ListStyleType::*;

        Some(match list_style_type {
            Inherit | None => return Option::None,
            Disc => &DISC,
            Circle => &CIRCLE,
            Square => &SQUARE,
            Decimal => &DECIMAL,
            DecimalLeadingZero => &DECIMAL_LEADING_ZERO,
            LowerRoman => &LOWER_ROMAN,
            UpperRoman => &UPPER_ROMAN,
            LowerGreek => &LOWER_GREEK,
            LowerAlpha | LowerLatin => &LOWER_ALPHA,
            UpperAlpha | UpperLatin => &UPPER_ALPHA,
            Armenian | UpperArmenian => &UPPER_ARMENIAN,
            LowerArmenian => &LOWER_ARMENIAN,
            Georgian => &GEORGIAN,
            Binary => &BINARY,
            Octal => &OCTAL,
            LowerHexadecimal => &LOWER_HEXADECIMAL,
            UpperHexadecimal => &UPPER_HEXADECIMAL,
            ArabicIndic => &ARABIC_INDIC,
            Bengali => &BENGALI,
            Cambodian | Khmer => &CAMBODIAN,
            CjkDecimal => &CJK_DECIMAL,
            Devanagari => &DEVANAGARI,
            Gujarati => &GUJARATI,
            Gurmukhi => &GURMUKHI,
            Hebrew => &HEBREW,
            Kannada => &KANNADA,
            Lao => &LAO,
            Malayalam => &MALAYALAM,
            Mongolian => &MONGOLIAN,
            Myanmar => &MYANMAR,
            Oriya => &ORIYA,
            Persian => &PERSIAN,
            Tamil => &TAMIL,
            Telugu => &TELUGU,
            Thai => &THAI,
            Tibetan => &TIBETAN,
            CjkEarthlyBranch => &CJK_EARTHLY_BRANCH,
            CjkHeavenlyStem => &CJK_HEAVENLY_STEM,
            Hiragana => &HIRAGANA,
            HiraganaIroha => &HIRAGANA_IROHA,
            Katakana => &KATAKANA,
            KatakanaIroha => &KATAKANA_IROHA,
            JapaneseInformal => &JAPANESE_INFORMAL,
            JapaneseFormal => &JAPANESE_FORMAL,
            KoreanHangulFormal => &KOREAN_HANGUL_FORMAL,
            KoreanHanjaInformal => &KOREAN_HANJA_INFORMAL,
            KoreanHanjaFormal => &KOREAN_HANJA_FORMAL,
        })
    }
}

/// Formats the list marker for `value` in the `list-style-type` of `style`.
///
/// Returns the length of the complete marker, which may exceed the length
/// of `buffer`; the marker is truncated to fit. Fails with
/// [`Error::Invalid`] when the style has no markers.
pub fn format_list_style(style: &ComputedStyle, value: i32, buffer: &mut [u8]) -> Result<usize> {
    counter_style_of(style)?.format(value, buffer)
}

/// Like [`format_list_style`], returning an owned string.
pub fn format_list_style_to_string(style: &ComputedStyle, value: i32) -> Result<String> {
    counter_style_of(style)?.format_to_string(value)
}

fn counter_style_of(style: &ComputedStyle) -> Result<&'static CounterStyle> {
    let list_style_type = style.get_bits::<longhands::ListStyleType>();
    CounterStyle::for_list_style_type(list_style_type).ok_or(Error::Invalid)
}
