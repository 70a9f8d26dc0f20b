/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use std::mem::size_of;

use css_select::values::{Color, Length, LengthPair};
use css_select::{Atom, Fixed};

#[test]
fn payloads_stay_small() {
    assert_eq!(size_of::<Fixed>(), 4);
    assert_eq!(size_of::<Color>(), 4);
    assert_eq!(size_of::<Length>(), 8);
    assert_eq!(size_of::<LengthPair>(), 16);
}

#[test]
fn optional_atoms_are_free() {
    assert_eq!(size_of::<Option<Atom>>(), size_of::<Atom>());
}
