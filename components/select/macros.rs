/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

/// Declares the opcode enum of a property. Every opcode enum has an
/// `Inherit = 0` variant; the remaining discriminants are the values stored
/// in the property's type bits. Bit patterns with no variant decode as
/// `Inherit`.
macro_rules! opcode_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$variant_meta:meta])* $variant:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[cfg_attr(feature = "servo", derive(::serde::Deserialize, ::serde::Serialize))]
        #[repr(u8)]
        pub enum $name {
            $( $(#[$variant_meta])* $variant = $value, )+
        }

        impl $crate::properties::Opcode for $name {
            const INHERIT: Self = $name::Inherit;

            #[inline]
            fn from_bits(bits: u32) -> Self {
                match bits {
                    $( $value => $name::$variant, )+
                    _ => $name::Inherit,
                }
            }

            #[inline]
            fn to_bits(self) -> u32 {
                self as u32
            }
        }
    };
}

/// Asserts the size of a type at compile time.
macro_rules! size_of_test {
    ($t: ty, $expected_size: expr) => {
        #[cfg(target_pointer_width = "64")]
        static_assertions::const_assert_eq!(std::mem::size_of::<$t>(), $expected_size);
    };
}
