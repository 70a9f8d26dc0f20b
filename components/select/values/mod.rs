/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Payload types carried next to the packed opcodes of a computed style.

mod color;
mod content;
mod length;

pub use self::color::Color;
pub use self::content::{ContentItem, Counter};
pub use self::length::{ClipRect, Length, LengthPair, Unit};
