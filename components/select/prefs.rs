/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Process-wide preferences.
//!
//! Unknown keys read as the default listed in [`DEFAULT_I32_PREFS`] and
//! [`DEFAULT_BOOL_PREFS`], or as zero / `false`.

use std::collections::HashMap;

use lazy_static::lazy_static;
use parking_lot::RwLock;

/// Client default font size, in CSS pixels.
pub const FONT_SIZE_DEFAULT: &str = "font.size.default-px";
/// Smallest font size the client renders, in CSS pixels.
pub const FONT_SIZE_MINIMUM: &str = "font.size.minimum-px";
/// Resolution of the output device.
pub const DEVICE_DPI: &str = "layout.css.dpi";
/// Whether the style pool shares structurally equal styles.
pub const STYLE_SHARING_ENABLED: &str = "layout.css.style-sharing.enabled";

pub const DEFAULT_I32_PREFS: &[(&str, i32)] = &[
    (FONT_SIZE_DEFAULT, 16),
    (FONT_SIZE_MINIMUM, 0),
    (DEVICE_DPI, 96),
];

pub const DEFAULT_BOOL_PREFS: &[(&str, bool)] = &[(STYLE_SHARING_ENABLED, true)];

lazy_static! {
    static ref PREFS: Preferences = Preferences::default();
}

#[derive(Debug, Default)]
pub struct Preferences {
    bool_prefs: RwLock<HashMap<String, bool>>,
    i32_prefs: RwLock<HashMap<String, i32>>,
}

impl Preferences {
    pub fn get_bool(&self, key: &str) -> bool {
        if let Some(value) = self.bool_prefs.read().get(key) {
            return *value;
        }
        DEFAULT_BOOL_PREFS
            .iter()
            .find(|(name, _)| *name == key)
            .is_some_and(|(_, value)| *value)
    }

    pub fn get_i32(&self, key: &str) -> i32 {
        if let Some(value) = self.i32_prefs.read().get(key) {
            return *value;
        }
        DEFAULT_I32_PREFS
            .iter()
            .find(|(name, _)| *name == key)
            .map_or(0, |(_, value)| *value)
    }

    pub fn set_bool(&self, key: &str, value: bool) {
        self.bool_prefs.write().insert(key.to_owned(), value);
    }

    pub fn set_i32(&self, key: &str, value: i32) {
        self.i32_prefs.write().insert(key.to_owned(), value);
    }

    /// Forgets every value set at runtime.
    pub fn reset(&self) {
        self.bool_prefs.write().clear();
        self.i32_prefs.write().clear();
    }
}

pub fn get_bool(key: &str) -> bool {
    PREFS.get_bool(key)
}

pub fn get_i32(key: &str) -> i32 {
    PREFS.get_i32(key)
}

pub fn set_bool(key: &str, value: bool) {
    PREFS.set_bool(key, value)
}

pub fn set_i32(key: &str, value: i32) {
    PREFS.set_i32(key, value)
}

pub fn reset() {
    PREFS.reset()
}
