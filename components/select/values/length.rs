/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Lengths and their units.

use std::fmt;

#[cfg(feature = "servo")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::fixed::Fixed;

/// A dimension unit. The discriminant is the five bit tag stored in a
/// property's unit field.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
#[repr(u8)]
pub enum Unit {
    #[default]
    Px = 0,
    Ex = 1,
    Em = 2,
    In = 3,
    Cm = 4,
    Mm = 5,
    Pt = 6,
    Pc = 7,
    Ch = 8,
    Rem = 9,
    Lh = 10,
    Vh = 11,
    Vw = 12,
    Vi = 13,
    Vb = 14,
    Vmin = 15,
    Vmax = 16,
    Q = 17,
    Pct = 18,
    Deg = 19,
    Grad = 20,
    Rad = 21,
    Ms = 22,
    S = 23,
    Hz = 24,
    Khz = 25,
}

const UNITS: [Unit; 26] = [
    Unit::Px,
    Unit::Ex,
    Unit::Em,
    Unit::In,
    Unit::Cm,
    Unit::Mm,
    Unit::Pt,
    Unit::Pc,
    Unit::Ch,
    Unit::Rem,
    Unit::Lh,
    Unit::Vh,
    Unit::Vw,
    Unit::Vi,
    Unit::Vb,
    Unit::Vmin,
    Unit::Vmax,
    Unit::Q,
    Unit::Pct,
    Unit::Deg,
    Unit::Grad,
    Unit::Rad,
    Unit::Ms,
    Unit::S,
    Unit::Hz,
    Unit::Khz,
];

impl Unit {
    /// Number of bits a unit tag occupies in the packed style.
    pub const BITS: u32 = 5;

    /// Decodes a packed unit tag. Tags outside the unit range decode as
    /// pixels.
    #[inline]
    pub fn from_bits(bits: u32) -> Unit {
        UNITS.get(bits as usize).copied().unwrap_or(Unit::Px)
    }

    #[inline]
    pub fn to_bits(self) -> u32 {
        self as u32
    }

    /// Units resolved against a font size. `lh` is left to layout.
    pub fn is_font_relative(self) -> bool {
        matches!(self, Unit::Em | Unit::Ex | Unit::Ch | Unit::Rem)
    }

    pub fn is_viewport_relative(self) -> bool {
        matches!(
            self,
            Unit::Vh | Unit::Vw | Unit::Vi | Unit::Vb | Unit::Vmin | Unit::Vmax
        )
    }

    /// Physical lengths with a fixed ratio to CSS pixels.
    pub fn is_absolute_length(self) -> bool {
        matches!(
            self,
            Unit::Px | Unit::In | Unit::Cm | Unit::Mm | Unit::Q | Unit::Pt | Unit::Pc
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Ex => "ex",
            Unit::Em => "em",
            Unit::In => "in",
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Ch => "ch",
            Unit::Rem => "rem",
            Unit::Lh => "lh",
            Unit::Vh => "vh",
            Unit::Vw => "vw",
            Unit::Vi => "vi",
            Unit::Vb => "vb",
            Unit::Vmin => "vmin",
            Unit::Vmax => "vmax",
            Unit::Q => "q",
            Unit::Pct => "%",
            Unit::Deg => "deg",
            Unit::Grad => "grad",
            Unit::Rad => "rad",
            Unit::Ms => "ms",
            Unit::S => "s",
            Unit::Hz => "hz",
            Unit::Khz => "khz",
        }
    }
}

impl TryFrom<u8> for Unit {
    type Error = Error;

    fn try_from(tag: u8) -> Result<Unit, Error> {
        UNITS.get(tag as usize).copied().ok_or(Error::Invalid)
    }
}

/// A number with a unit.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct Length {
    pub value: Fixed,
    pub unit: Unit,
}

impl Length {
    #[inline]
    pub const fn new(value: Fixed, unit: Unit) -> Length {
        Length { value, unit }
    }

    #[inline]
    pub const fn zero() -> Length {
        Length::new(Fixed::ZERO, Unit::Px)
    }

    #[inline]
    pub const fn px(value: Fixed) -> Length {
        Length::new(value, Unit::Px)
    }

    #[inline]
    pub const fn percentage(value: Fixed) -> Length {
        Length::new(value, Unit::Pct)
    }

    /// Whether resolving this length needs a font or the viewport.
    pub fn is_relative(&self) -> bool {
        self.unit.is_font_relative() || self.unit.is_viewport_relative()
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}{}", self.value, self.unit.as_str())
    }
}

/// Two lengths stored in one slot: background-position (horizontal then
/// vertical) and border-spacing.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct LengthPair {
    pub horizontal: Length,
    pub vertical: Length,
}

impl LengthPair {
    pub const fn new(horizontal: Length, vertical: Length) -> LengthPair {
        LengthPair { horizontal, vertical }
    }
}

/// The `rect()` of the clip property. Each edge is either a length or
/// `auto`; the length of an `auto` edge is zero.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct ClipRect {
    pub top: Length,
    pub right: Length,
    pub bottom: Length,
    pub left: Length,
    pub top_auto: bool,
    pub right_auto: bool,
    pub bottom_auto: bool,
    pub left_auto: bool,
}

impl ClipRect {
    pub fn new(top: Length, right: Length, bottom: Length, left: Length) -> ClipRect {
        ClipRect {
            top,
            right,
            bottom,
            left,
            ..ClipRect::default()
        }
    }

    /// A rectangle with every edge `auto`.
    pub fn auto() -> ClipRect {
        ClipRect {
            top_auto: true,
            right_auto: true,
            bottom_auto: true,
            left_auto: true,
            ..ClipRect::default()
        }
    }
}
