/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The computed style record and its property table.
//!
//! Every longhand is described once, in [`longhands`], by a zero-sized
//! descriptor type implementing [`Longhand`]: its opcode enum, the slot its
//! opcode (and unit tags) occupy in the packed words, the shape of its
//! payload and its initial value. [`ComputedStyle`] exposes one generic
//! accessor family driven by those descriptors.

use std::fmt;

pub mod computed_style;
pub mod keywords;
pub mod longhands;
pub mod resolved;

pub use self::computed_style::{ComputedStyle, STYLE_WORDS};
pub use self::longhands::{LONGHAND_COUNT, LonghandId, SLOTS};

use crate::error::Result;

/// A property's value category, stored in the low bits of its slot.
pub trait Opcode: Copy + Eq + fmt::Debug + 'static {
    /// The inherit opcode. Always encoded as zero.
    const INHERIT: Self;

    /// Decodes the type bits of a slot.
    fn from_bits(bits: u32) -> Self;

    fn to_bits(self) -> u32;
}

/// Where a property lives in the packed words: `type_bits` of opcode at
/// `shift` in word `index`, followed by `unit_bits` of unit tags (or other
/// per-property flags).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Slot {
    pub index: usize,
    pub shift: u32,
    pub type_bits: u32,
    pub unit_bits: u32,
}

impl Slot {
    pub const fn new(index: usize, shift: u32, type_bits: u32, unit_bits: u32) -> Slot {
        Slot {
            index,
            shift,
            type_bits,
            unit_bits,
        }
    }

    #[inline]
    pub const fn width(&self) -> u32 {
        self.type_bits + self.unit_bits
    }

    /// The bits of word `index` owned by this slot.
    #[inline]
    pub const fn mask(&self) -> u32 {
        (((1u64 << self.width()) - 1) as u32) << self.shift
    }

    #[inline]
    pub const fn type_mask(&self) -> u32 {
        (1 << self.type_bits) - 1
    }

    #[inline]
    pub const fn unit_mask(&self) -> u32 {
        (((1u64 << self.unit_bits) - 1) as u32)
    }
}

/// Checks that no two slots overlap and that every slot fits its word.
pub const fn slots_are_disjoint(slots: &[Slot]) -> bool {
    let mut i = 0;
    while i < slots.len() {
        let a = slots[i];
        if a.index >= STYLE_WORDS || a.shift + a.width() > 32 || a.type_bits == 0 {
            return false;
        }
        let mut j = i + 1;
        while j < slots.len() {
            let b = slots[j];
            if a.index == b.index && a.mask() & b.mask() != 0 {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

static_assertions::const_assert!(slots_are_disjoint(&SLOTS));

/// A longhand property descriptor.
pub trait Longhand: 'static {
    type Opcode: Opcode;
    /// The owned payload handed to the mutator.
    type Value: Clone + fmt::Debug + PartialEq;
    /// The payload as seen through the accessor.
    type Ref<'a>: Copy + fmt::Debug + PartialEq;

    const ID: LonghandId;
    const SLOT: Slot;
    /// Whether the property inherits by default.
    const INHERITED: bool;

    /// Whether `opcode` carries a payload.
    fn has_value(opcode: Self::Opcode) -> bool;

    /// Reads the payload regardless of opcode.
    fn load(style: &ComputedStyle) -> Option<Self::Ref<'_>>;

    /// Writes the payload and any unit bits. `None` stores the zero value.
    fn store(style: &mut ComputedStyle, value: Option<Self::Value>);

    /// Takes a new reference to a borrowed payload.
    fn to_value(value: Self::Ref<'_>) -> Result<Self::Value>;

    fn initial_value() -> (Self::Opcode, Option<Self::Value>);
}

/// A set of longhand properties.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct LonghandIdSet {
    storage: [u32; (LONGHAND_COUNT + 31) / 32],
}

impl LonghandIdSet {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The set of every longhand.
    pub fn all() -> Self {
        let mut set = Self::new();
        for id in LonghandId::ALL {
            set.insert(*id);
        }
        set
    }

    /// The set of longhands that inherit by default.
    pub fn inherited() -> Self {
        let mut set = Self::new();
        for id in LonghandId::ALL.iter().filter(|id| id.is_inherited()) {
            set.insert(*id);
        }
        set
    }

    #[inline]
    pub fn contains(&self, id: LonghandId) -> bool {
        let bit = id as usize;
        (self.storage[bit / 32] & (1 << (bit % 32))) != 0
    }

    #[inline]
    pub fn insert(&mut self, id: LonghandId) {
        let bit = id as usize;
        self.storage[bit / 32] |= 1 << (bit % 32);
    }

    #[inline]
    pub fn remove(&mut self, id: LonghandId) {
        let bit = id as usize;
        self.storage[bit / 32] &= !(1 << (bit % 32));
    }

    #[inline]
    pub fn clear(&mut self) {
        self.storage = Default::default();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.iter().all(|word| *word == 0)
    }

    pub fn iter(&self) -> impl Iterator<Item = LonghandId> + '_ {
        LonghandId::ALL.iter().copied().filter(move |id| self.contains(*id))
    }
}

impl fmt::Debug for LonghandIdSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter().map(LonghandId::name)).finish()
    }
}
