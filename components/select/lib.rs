/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Computed style storage and resolution.
//!
//! This crate holds the computed values of an element's CSS properties in a
//! packed record ([`ComputedStyle`]), composes a cascaded style with its
//! parent's ([`cascade::compose`]), converts lengths between units
//! ([`unit`]), formats list markers ([`counter_style`]) and decides which
//! `@media` rules apply ([`media_queries`], [`stylesheets`]).

#![deny(unsafe_code)]

#[macro_use]
mod macros;

pub mod atom;
pub mod cascade;
pub mod counter_style;
pub mod error;
pub mod fixed;
pub mod media_queries;
pub mod prefs;
pub mod properties;
pub mod sharing;
pub mod stylesheets;
pub mod unit;
pub mod values;

pub use crate::atom::Atom;
pub use crate::error::{Error, Result};
pub use crate::fixed::Fixed;
pub use crate::properties::{ComputedStyle, Longhand, LonghandId};
pub use crate::unit::UnitContext;

size_of_test!(fixed::Fixed, 4);
size_of_test!(values::Length, 8);
size_of_test!(values::Color, 4);
size_of_test!(atom::Atom, 8);
