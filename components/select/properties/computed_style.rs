/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The packed computed style.

use super::{Longhand, LonghandId, LonghandIdSet, Opcode, Slot};
use crate::atom::Atom;
use crate::error::Result;
use crate::fixed::Fixed;
use crate::values::{Color, ContentItem, Counter};

/// Number of 32-bit words holding opcodes and unit tags.
pub const STYLE_WORDS: usize = 15;

/// Every property of one element.
///
/// Opcodes and unit tags are packed into [`STYLE_WORDS`] words; the payload
/// of a property lives in its own field and is only meaningful when the
/// opcode says so. A default style holds the inherit opcode for every
/// property.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ComputedStyle {
    pub(crate) bits: [u32; STYLE_WORDS],

    pub(crate) background_color: Color,
    pub(crate) background_image: Option<Atom>,
    pub(crate) background_position: [Fixed; 2],
    pub(crate) border_bottom_color: Color,
    pub(crate) border_bottom_width: Fixed,
    pub(crate) border_left_color: Color,
    pub(crate) border_left_width: Fixed,
    pub(crate) border_right_color: Color,
    pub(crate) border_right_width: Fixed,
    pub(crate) border_spacing: [Fixed; 2],
    pub(crate) border_top_color: Color,
    pub(crate) border_top_width: Fixed,
    pub(crate) bottom: Fixed,
    pub(crate) clip: [Fixed; 4],
    pub(crate) color: Color,
    pub(crate) column_count: i32,
    pub(crate) column_gap: Fixed,
    pub(crate) column_rule_color: Color,
    pub(crate) column_rule_width: Fixed,
    pub(crate) column_width: Fixed,
    pub(crate) flex_basis: Fixed,
    pub(crate) flex_grow: Fixed,
    pub(crate) flex_shrink: Fixed,
    pub(crate) font_size: Fixed,
    pub(crate) height: Fixed,
    pub(crate) left: Fixed,
    pub(crate) letter_spacing: Fixed,
    pub(crate) line_height: Fixed,
    pub(crate) list_style_image: Option<Atom>,
    pub(crate) margin_bottom: Fixed,
    pub(crate) margin_left: Fixed,
    pub(crate) margin_right: Fixed,
    pub(crate) margin_top: Fixed,
    pub(crate) max_height: Fixed,
    pub(crate) max_width: Fixed,
    pub(crate) min_height: Fixed,
    pub(crate) min_width: Fixed,
    pub(crate) opacity: Fixed,
    pub(crate) order: i32,
    pub(crate) orphans: i32,
    pub(crate) outline_color: Color,
    pub(crate) outline_width: Fixed,
    pub(crate) padding_bottom: Fixed,
    pub(crate) padding_left: Fixed,
    pub(crate) padding_right: Fixed,
    pub(crate) padding_top: Fixed,
    pub(crate) right: Fixed,
    pub(crate) text_indent: Fixed,
    pub(crate) top: Fixed,
    pub(crate) vertical_align: Fixed,
    pub(crate) widows: i32,
    pub(crate) width: Fixed,
    pub(crate) word_spacing: Fixed,
    pub(crate) z_index: i32,

    pub(crate) content: Option<Box<[ContentItem]>>,
    pub(crate) counter_increment: Option<Box<[Counter]>>,
    pub(crate) counter_reset: Option<Box<[Counter]>>,
    pub(crate) cursor: Option<Box<[Atom]>>,
    pub(crate) font_family: Option<Box<[Atom]>>,
    pub(crate) quotes: Option<Box<[Atom]>>,

    /// Properties the cascade set to `initial`.
    pub(crate) initial_marks: LonghandIdSet,
    /// Properties the cascade set to `unset`, or never touched.
    pub(crate) unset_marks: LonghandIdSet,
}

impl ComputedStyle {
    /// A style with every property at its initial value.
    pub fn initial_values() -> ComputedStyle {
        let mut style = ComputedStyle::default();
        for id in LonghandId::ALL {
            style.reset_longhand(*id);
        }
        style
    }

    /// The state of a style before the cascade has applied anything: every
    /// property is `unset`.
    pub fn unset() -> ComputedStyle {
        ComputedStyle {
            unset_marks: LonghandIdSet::all(),
            ..ComputedStyle::default()
        }
    }

    /// Reads the opcode without touching the payload.
    #[inline]
    pub fn get_bits<P: Longhand>(&self) -> P::Opcode {
        P::Opcode::from_bits(self.field_bits(P::SLOT) & P::SLOT.type_mask())
    }

    /// Reads the opcode and, when the opcode carries one, the payload.
    #[inline]
    pub fn get<P: Longhand>(&self) -> (P::Opcode, Option<P::Ref<'_>>) {
        let opcode = self.get_bits::<P>();
        if P::has_value(opcode) {
            (opcode, P::load(self))
        } else {
            (opcode, None)
        }
    }

    /// Stores an opcode and its payload, dropping the previous payload. A
    /// payload given with an opcode that carries none is discarded, and the
    /// payload fields are zeroed so that equal values compare equal.
    pub fn set<P: Longhand>(&mut self, opcode: P::Opcode, value: Option<P::Value>) {
        let value = if P::has_value(opcode) { value } else { None };
        self.set_type_bits(P::SLOT, opcode.to_bits());
        P::store(self, value);
        self.initial_marks.remove(P::ID);
        self.unset_marks.remove(P::ID);
    }

    /// Copies a property from `other`, taking new references to any strings
    /// it holds.
    pub fn copy_from<P: Longhand>(&mut self, other: &ComputedStyle) -> Result<()> {
        let (opcode, value) = other.get::<P>();
        let value = match value {
            Some(value) => Some(P::to_value(value)?),
            None => None,
        };
        self.set::<P>(opcode, value);
        Ok(())
    }

    /// Sets a property to its initial value.
    pub fn reset<P: Longhand>(&mut self) {
        let (opcode, value) = P::initial_value();
        self.set::<P>(opcode, value);
    }

    /// Marks a property as explicitly `initial`.
    pub fn set_initial<P: Longhand>(&mut self) {
        self.set_initial_by_id(P::ID)
    }

    /// Marks a property as explicitly `unset`.
    pub fn set_unset<P: Longhand>(&mut self) {
        self.set_unset_by_id(P::ID)
    }

    pub fn set_initial_by_id(&mut self, id: LonghandId) {
        self.unset_marks.remove(id);
        self.initial_marks.insert(id);
    }

    pub fn set_unset_by_id(&mut self, id: LonghandId) {
        self.initial_marks.remove(id);
        self.unset_marks.insert(id);
    }

    #[inline]
    pub fn is_initial_marked(&self, id: LonghandId) -> bool {
        self.initial_marks.contains(id)
    }

    #[inline]
    pub fn is_unset_marked(&self, id: LonghandId) -> bool {
        self.unset_marks.contains(id)
    }

    /// Whether no property is waiting for `initial` or `unset` resolution.
    pub fn is_fully_cascaded(&self) -> bool {
        self.initial_marks.is_empty() && self.unset_marks.is_empty()
    }

    /// The packed field of a property: its type bits with unit bits above.
    #[inline]
    pub fn get_raw_bits(&self, id: LonghandId) -> u32 {
        self.field_bits(id.slot())
    }

    /// The packed words, for comparing layouts.
    #[inline]
    pub fn words(&self) -> &[u32; STYLE_WORDS] {
        &self.bits
    }

    #[inline]
    fn field_bits(&self, slot: Slot) -> u32 {
        (self.bits[slot.index] & slot.mask()) >> slot.shift
    }

    #[inline]
    fn set_field_bits(&mut self, slot: Slot, field: u32) {
        let word = &mut self.bits[slot.index];
        *word = (*word & !slot.mask()) | ((field << slot.shift) & slot.mask());
    }

    #[inline]
    fn set_type_bits(&mut self, slot: Slot, opcode: u32) {
        let field = self.field_bits(slot);
        let type_mask = slot.type_mask();
        self.set_field_bits(slot, (field & !type_mask) | (opcode & type_mask));
    }

    /// The bits above the opcode.
    #[inline]
    pub(crate) fn unit_bits(&self, slot: Slot) -> u32 {
        (self.field_bits(slot) >> slot.type_bits) & slot.unit_mask()
    }

    #[inline]
    pub(crate) fn set_unit_bits(&mut self, slot: Slot, units: u32) {
        let field = self.field_bits(slot);
        let type_mask = slot.type_mask();
        let units = (units & slot.unit_mask()) << slot.type_bits;
        self.set_field_bits(slot, (field & type_mask) | units);
    }
}
