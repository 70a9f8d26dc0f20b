/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Binary fixed-point numbers used for every length, number and factor that
//! lives in a computed style.
//!
//! A [`Fixed`] is an `i32` with ten fractional bits. Addition and subtraction
//! are plain integer arithmetic and wrap. Multiplication and division widen to
//! 64 bits before rescaling and saturate to the `i32` range.

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "servo")]
use serde::{Deserialize, Serialize};

/// Number of fractional bits in a [`Fixed`].
pub const RADIX_POINT: u32 = 10;

#[derive(Clone, Copy, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct Fixed(pub i32);

impl Fixed {
    pub const ZERO: Fixed = Fixed(0);
    pub const HALF: Fixed = Fixed(0x200);
    pub const ONE: Fixed = Fixed(0x400);
    pub const F_72: Fixed = Fixed(0x12000);
    pub const F_96: Fixed = Fixed(0x18000);
    pub const F_100: Fixed = Fixed(0x19000);
    pub const MIN: Fixed = Fixed(i32::MIN);
    pub const MAX: Fixed = Fixed(i32::MAX);

    #[inline]
    pub const fn from_raw(raw: i32) -> Fixed {
        Fixed(raw)
    }

    #[inline]
    pub const fn raw(self) -> i32 {
        self.0
    }

    /// Converts an integer, wrapping if it does not fit in 21 bits.
    #[inline]
    pub const fn from_int(value: i32) -> Fixed {
        Fixed(value.wrapping_shl(RADIX_POINT))
    }

    /// Converts a float, truncating toward zero. Out of range values
    /// saturate.
    #[inline]
    pub const fn from_f32(value: f32) -> Fixed {
        Fixed((value * (1 << RADIX_POINT) as f32) as i32)
    }

    /// The integer part, rounded toward negative infinity.
    #[inline]
    pub const fn to_int(self) -> i32 {
        self.0 >> RADIX_POINT
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 / (1 << RADIX_POINT) as f32
    }

    /// Clears the fractional bits.
    #[inline]
    pub const fn truncate(self) -> Fixed {
        Fixed(self.0 & !((1 << RADIX_POINT) - 1))
    }

    #[inline]
    pub const fn abs(self) -> Fixed {
        Fixed(self.0.wrapping_abs())
    }

    #[inline]
    pub fn max(self, other: Fixed) -> Fixed {
        std::cmp::max(self, other)
    }

    #[inline]
    pub fn min(self, other: Fixed) -> Fixed {
        std::cmp::min(self, other)
    }
}

#[inline]
fn saturate(wide: i64) -> i32 {
    wide.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

impl fmt::Debug for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.to_f32(), f)
    }
}

impl Add for Fixed {
    type Output = Fixed;

    #[inline]
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}

impl AddAssign for Fixed {
    #[inline]
    fn add_assign(&mut self, other: Fixed) {
        *self = *self + other;
    }
}

impl Sub for Fixed {
    type Output = Fixed;

    #[inline]
    fn sub(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_sub(other.0))
    }
}

impl SubAssign for Fixed {
    #[inline]
    fn sub_assign(&mut self, other: Fixed) {
        *self = *self - other;
    }
}

impl Mul for Fixed {
    type Output = Fixed;

    #[inline]
    fn mul(self, other: Fixed) -> Fixed {
        Fixed(saturate((self.0 as i64 * other.0 as i64) >> RADIX_POINT))
    }
}

impl Div for Fixed {
    type Output = Fixed;

    #[inline]
    fn div(self, other: Fixed) -> Fixed {
        if other.0 == 0 {
            return match self.0.signum() {
                1 => Fixed::MAX,
                -1 => Fixed::MIN,
                _ => Fixed::ZERO,
            };
        }
        Fixed(saturate(((self.0 as i64) << RADIX_POINT) / other.0 as i64))
    }
}

impl Neg for Fixed {
    type Output = Fixed;

    #[inline]
    fn neg(self) -> Fixed {
        Fixed(self.0.wrapping_neg())
    }
}

impl From<i32> for Fixed {
    #[inline]
    fn from(value: i32) -> Fixed {
        Fixed::from_int(value)
    }
}
