/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::properties::{SLOTS, STYLE_WORDS, slots_are_disjoint};
use css_select::{ComputedStyle, LonghandId};

#[test]
fn slots_fit_and_do_not_overlap() {
    assert!(slots_are_disjoint(&SLOTS));

    let mut used = [0u32; STYLE_WORDS];
    for id in LonghandId::ALL {
        let slot = id.slot();
        assert!(slot.index < STYLE_WORDS, "{} is outside the style", id.name());
        assert!(slot.shift + slot.width() <= 32, "{} spills out of its word", id.name());
        assert_eq!(used[slot.index] & slot.mask(), 0, "{} overlaps", id.name());
        used[slot.index] |= slot.mask();
    }
}

#[test]
fn writing_one_property_leaves_the_others_alone() {
    for &id in LonghandId::ALL {
        let mut style = ComputedStyle::default();
        style.reset_longhand(id);
        assert_ne!(style.get_raw_bits(id), 0, "{} has no initial opcode", id.name());

        for &other in LonghandId::ALL.iter().filter(|&&other| other != id) {
            assert_eq!(
                style.get_raw_bits(other),
                0,
                "setting {} changed {}",
                id.name(),
                other.name(),
            );
        }
    }
}

#[test]
fn raw_bits_stay_inside_the_slot() {
    let style = ComputedStyle::initial_values();
    for &id in LonghandId::ALL {
        let slot = id.slot();
        let raw = style.get_raw_bits(id);
        assert_eq!(raw & !(slot.mask() >> slot.shift), 0, "{}", id.name());
    }
}
