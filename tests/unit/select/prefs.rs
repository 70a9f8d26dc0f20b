/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::prefs::{self, Preferences};

#[test]
fn defaults() {
    assert_eq!(prefs::get_i32(prefs::FONT_SIZE_DEFAULT), 16);
    assert_eq!(prefs::get_i32(prefs::FONT_SIZE_MINIMUM), 0);
    assert_eq!(prefs::get_i32(prefs::DEVICE_DPI), 96);
    assert!(prefs::get_bool(prefs::STYLE_SHARING_ENABLED));
}

#[test]
fn unknown_keys() {
    let store = Preferences::default();
    assert_eq!(store.get_i32("layout.unknown"), 0);
    assert!(!store.get_bool("layout.unknown"));
}

#[test]
fn set_and_reset() {
    let store = Preferences::default();
    store.set_i32(prefs::FONT_SIZE_DEFAULT, 20);
    store.set_bool(prefs::STYLE_SHARING_ENABLED, false);
    assert_eq!(store.get_i32(prefs::FONT_SIZE_DEFAULT), 20);
    assert!(!store.get_bool(prefs::STYLE_SHARING_ENABLED));

    store.reset();
    assert_eq!(store.get_i32(prefs::FONT_SIZE_DEFAULT), 16);
    assert!(store.get_bool(prefs::STYLE_SHARING_ENABLED));
}
