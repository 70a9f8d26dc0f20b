/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

#![cfg(test)]

use css_select::Fixed;
use css_select::unit::{UnitContext, UnitSettings};
use css_select::values::{Length, Unit};
use euclid::default::Size2D;

mod cascade;
mod layout;
mod media_queries;
mod prefs;
mod properties;
mod resolved;
mod sharing;
#[cfg(target_pointer_width = "64")]
mod size_of;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn px(value: i32) -> Length {
    Length::px(Fixed::from_int(value))
}

fn length(value: f32, unit: Unit) -> Length {
    Length::new(Fixed::from_f32(value), unit)
}

/// An 800x600 viewport with the default client settings.
fn context() -> UnitContext<'static> {
    UnitContext::new(
        Size2D::new(Fixed::from_int(800), Fixed::from_int(600)),
        UnitSettings::default(),
    )
}
