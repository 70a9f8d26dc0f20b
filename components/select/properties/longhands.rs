/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The longhand table.
//!
//! Each entry names a descriptor type, the CSS name, the payload shape, the
//! opcode enum, the slot `[word, shift, type bits, unit bits]`, whether the
//! property inherits, and how to reach its payload field. The five
//! properties with an explicit `none` keyword next to their list or image
//! (`background-image`, `list-style-image`, both counter properties and
//! `quotes`) keep two type bits in the low half of word 14.

use super::{ComputedStyle, Longhand, Opcode, Slot, keywords};
use crate::atom::Atom;
use crate::error::{Result, try_clone_slice};
use crate::fixed::Fixed;
use crate::values::{self, ClipRect, ContentItem, Counter, Length, LengthPair, Unit};

macro_rules! is_inherited {
    (inherited) => {
        true
    };
    (reset) => {
        false
    };
}

macro_rules! has_value {
    ($opcode:ident, $op:expr, any) => {
        $op != <keywords::$opcode as Opcode>::INHERIT
    };
    ($opcode:ident, $op:expr, [$($set:ident)|+]) => {
        matches!($op, $(keywords::$opcode::$set)|+)
    };
}

macro_rules! longhand_impl {
    (@header $desc:ident, $opcode:ident, $slot:expr, $inherited:ident) => {
        type Opcode = keywords::$opcode;
        const ID: LonghandId = LonghandId::$desc;
        const SLOT: Slot = $slot;
        const INHERITED: bool = is_inherited!($inherited);
    };

    (keyword $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { initial: $init:ident }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = ();
            type Ref<'a> = ();

            #[inline]
            fn has_value(_: Self::Opcode) -> bool {
                false
            }

            #[inline]
            fn load(_: &ComputedStyle) -> Option<()> {
                None
            }

            #[inline]
            fn store(_: &mut ComputedStyle, _: Option<()>) {}

            #[inline]
            fn to_value(_: ()) -> Result<()> {
                Ok(())
            }

            fn initial_value() -> (Self::Opcode, Option<()>) {
                (keywords::$opcode::$init, None)
            }
        }
    };

    (length $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { field: $field:ident, value: $value:tt, initial: $init:ident $(= $initial:expr)? }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = Length;
            type Ref<'a> = Length;

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                has_value!($opcode, opcode, $value)
            }

            #[inline]
            fn load(style: &ComputedStyle) -> Option<Length> {
                let unit = Unit::from_bits(style.unit_bits(Self::SLOT));
                Some(Length::new(style.$field, unit))
            }

            #[inline]
            fn store(style: &mut ComputedStyle, value: Option<Length>) {
                let length = value.unwrap_or_default();
                style.$field = length.value;
                style.set_unit_bits(Self::SLOT, length.unit.to_bits());
            }

            #[inline]
            fn to_value(value: Length) -> Result<Length> {
                Ok(value)
            }

            fn initial_value() -> (Self::Opcode, Option<Length>) {
                let value: Option<Length> = None $( .or(Some($initial)) )?;
                (keywords::$opcode::$init, value)
            }
        }
    };

    (scalar $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { field: $field:ident, ty: $ty:ty, value: $value:tt, initial: $init:ident $(= $initial:expr)? }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = $ty;
            type Ref<'a> = $ty;

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                has_value!($opcode, opcode, $value)
            }

            #[inline]
            fn load(style: &ComputedStyle) -> Option<$ty> {
                Some(style.$field)
            }

            #[inline]
            fn store(style: &mut ComputedStyle, value: Option<$ty>) {
                style.$field = value.unwrap_or_default();
            }

            #[inline]
            fn to_value(value: $ty) -> Result<$ty> {
                Ok(value)
            }

            fn initial_value() -> (Self::Opcode, Option<$ty>) {
                let value: Option<$ty> = None $( .or(Some($initial)) )?;
                (keywords::$opcode::$init, value)
            }
        }
    };

    (pair $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { field: $field:ident, value: $value:tt, initial: $init:ident = $initial:expr }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = LengthPair;
            type Ref<'a> = LengthPair;

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                has_value!($opcode, opcode, $value)
            }

            fn load(style: &ComputedStyle) -> Option<LengthPair> {
                let units = style.unit_bits(Self::SLOT);
                Some(LengthPair::new(
                    Length::new(style.$field[0], Unit::from_bits(units >> Unit::BITS)),
                    Length::new(style.$field[1], Unit::from_bits(units & 0x1f)),
                ))
            }

            fn store(style: &mut ComputedStyle, value: Option<LengthPair>) {
                let pair = value.unwrap_or_default();
                style.$field = [pair.horizontal.value, pair.vertical.value];
                style.set_unit_bits(
                    Self::SLOT,
                    pair.horizontal.unit.to_bits() << Unit::BITS | pair.vertical.unit.to_bits(),
                );
            }

            #[inline]
            fn to_value(value: LengthPair) -> Result<LengthPair> {
                Ok(value)
            }

            fn initial_value() -> (Self::Opcode, Option<LengthPair>) {
                (keywords::$opcode::$init, Some($initial))
            }
        }
    };

    (image $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { field: $field:ident, value: $value:tt, initial: $init:ident }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = Atom;
            type Ref<'a> = &'a Atom;

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                has_value!($opcode, opcode, $value)
            }

            #[inline]
            fn load(style: &ComputedStyle) -> Option<&Atom> {
                style.$field.as_ref()
            }

            #[inline]
            fn store(style: &mut ComputedStyle, value: Option<Atom>) {
                style.$field = value;
            }

            #[inline]
            fn to_value(value: &Atom) -> Result<Atom> {
                Ok(value.clone())
            }

            fn initial_value() -> (Self::Opcode, Option<Atom>) {
                (keywords::$opcode::$init, None)
            }
        }
    };

    (list $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { field: $field:ident, item: $item:ty, value: $value:tt, initial: $init:ident }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = Box<[$item]>;
            type Ref<'a> = &'a [$item];

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                has_value!($opcode, opcode, $value)
            }

            #[inline]
            fn load(style: &ComputedStyle) -> Option<&[$item]> {
                style.$field.as_deref()
            }

            /// Replacing the list drops the previous one, releasing every
            /// string it referenced.
            #[inline]
            fn store(style: &mut ComputedStyle, value: Option<Box<[$item]>>) {
                style.$field = value;
            }

            #[inline]
            fn to_value(value: &[$item]) -> Result<Box<[$item]>> {
                try_clone_slice(value)
            }

            fn initial_value() -> (Self::Opcode, Option<Box<[$item]>>) {
                (keywords::$opcode::$init, None)
            }
        }
    };
    (clip $desc:ident, $opcode:ident, $slot:expr, $inherited:ident,
     { initial: $init:ident }) => {
        impl Longhand for $desc {
            longhand_impl!(@header $desc, $opcode, $slot, $inherited);
            type Value = ClipRect;
            type Ref<'a> = ClipRect;

            #[inline]
            fn has_value(opcode: Self::Opcode) -> bool {
                opcode == keywords::$opcode::Rect
            }

            #[inline]
            fn load(style: &ComputedStyle) -> Option<ClipRect> {
                Some(load_clip(style, Self::SLOT))
            }

            #[inline]
            fn store(style: &mut ComputedStyle, value: Option<ClipRect>) {
                store_clip(style, Self::SLOT, value.unwrap_or_default())
            }

            #[inline]
            fn to_value(value: ClipRect) -> Result<ClipRect> {
                Ok(value)
            }

            fn initial_value() -> (Self::Opcode, Option<ClipRect>) {
                (keywords::$opcode::$init, None)
            }
        }
    };
}

macro_rules! longhands {
    (
        $(
            $(#[$doc:meta])*
            $desc:ident($name:literal): $kind:ident<$opcode:ident>
                [$index:literal, $shift:literal, $type_bits:literal, $unit_bits:literal]
                $inherited:ident { $($args:tt)* }
        )+
    ) => {
        /// Identifies a longhand property.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        #[cfg_attr(feature = "servo", derive(::serde::Deserialize, ::serde::Serialize))]
        #[repr(u8)]
        pub enum LonghandId {
            $( $desc, )+
        }

        /// Number of longhand properties.
        pub const LONGHAND_COUNT: usize = [$( LonghandId::$desc, )+].len();

        /// Slot of every longhand, indexed by `LonghandId`.
        pub const SLOTS: [Slot; LONGHAND_COUNT] = [$( <$desc as Longhand>::SLOT, )+];

        impl LonghandId {
            pub const ALL: &'static [LonghandId] = &[$( LonghandId::$desc, )+];

            /// The CSS name of the property.
            pub fn name(self) -> &'static str {
                match self {
                    $( LonghandId::$desc => $name, )+
                }
            }

            #[inline]
            pub fn slot(self) -> Slot {
                SLOTS[self as usize]
            }

            pub fn is_inherited(self) -> bool {
                match self {
                    $( LonghandId::$desc => <$desc as Longhand>::INHERITED, )+
                }
            }

            pub fn from_name(name: &str) -> Option<LonghandId> {
                LonghandId::ALL
                    .iter()
                    .copied()
                    .find(|id| id.name().eq_ignore_ascii_case(name))
            }
        }

        $(
            $(#[$doc])*
            #[derive(Clone, Copy, Debug)]
            pub struct $desc;

            longhand_impl!(
                $kind $desc,
                $opcode,
                Slot::new($index, $shift, $type_bits, $unit_bits),
                $inherited,
                { $($args)* }
            );
        )+

        impl ComputedStyle {
            /// Whether the property holds its inherit opcode.
            pub fn is_inherit(&self, id: LonghandId) -> bool {
                match id {
                    $(
                        LonghandId::$desc => {
                            self.get_bits::<$desc>() == <keywords::$opcode as Opcode>::INHERIT
                        },
                    )+
                }
            }

            /// Copies one property, chosen at runtime, from `other`.
            pub fn copy_longhand_from(&mut self, id: LonghandId, other: &ComputedStyle) -> Result<()> {
                match id {
                    $( LonghandId::$desc => self.copy_from::<$desc>(other), )+
                }
            }

            /// Sets one property, chosen at runtime, to its initial value.
            pub fn reset_longhand(&mut self, id: LonghandId) {
                match id {
                    $( LonghandId::$desc => self.reset::<$desc>(), )+
                }
            }
        }
    };
}

const ZERO: Length = Length::zero();
const ZERO_PAIR: LengthPair = LengthPair::new(Length::zero(), Length::zero());
const ORIGIN: LengthPair = LengthPair::new(
    Length::percentage(Fixed::ZERO),
    Length::percentage(Fixed::ZERO),
);

longhands! {
    AlignContent("align-content"): keyword<AlignContent> [10, 20, 3, 0] reset {
        initial: Stretch
    }
    AlignItems("align-items"): keyword<AlignItems> [10, 23, 3, 0] reset {
        initial: Stretch
    }
    AlignSelf("align-self"): keyword<AlignSelf> [10, 26, 3, 0] reset {
        initial: Auto
    }
    BackgroundAttachment("background-attachment"): keyword<BackgroundAttachment> [14, 28, 2, 0] reset {
        initial: Scroll
    }
    BackgroundColor("background-color"): scalar<BorderColor> [14, 30, 2, 0] reset {
        field: background_color, ty: values::Color, value: [Color], initial: Color = values::Color::TRANSPARENT
    }
    BackgroundImage("background-image"): image<Image> [14, 0, 2, 0] reset {
        field: background_image, value: [Image], initial: None
    }
    /// Horizontal then vertical offset.
    BackgroundPosition("background-position"): pair<Explicit> [12, 10, 1, 10] reset {
        field: background_position, value: [Set], initial: Set = ORIGIN
    }
    BackgroundRepeat("background-repeat"): keyword<BackgroundRepeat> [10, 29, 3, 0] reset {
        initial: Repeat
    }
    BorderBottomColor("border-bottom-color"): scalar<BorderColor> [11, 0, 2, 0] reset {
        field: border_bottom_color, ty: values::Color, value: [Color], initial: CurrentColor
    }
    BorderBottomStyle("border-bottom-style"): keyword<BorderStyle> [13, 28, 4, 0] reset {
        initial: None
    }
    BorderBottomWidth("border-bottom-width"): length<BorderWidth> [0, 0, 3, 5] reset {
        field: border_bottom_width, value: [Width], initial: Medium
    }
    BorderCollapse("border-collapse"): keyword<BorderCollapse> [11, 2, 2, 0] inherited {
        initial: Separate
    }
    BorderLeftColor("border-left-color"): scalar<BorderColor> [11, 4, 2, 0] reset {
        field: border_left_color, ty: values::Color, value: [Color], initial: CurrentColor
    }
    BorderLeftStyle("border-left-style"): keyword<BorderStyle> [9, 3, 4, 0] reset {
        initial: None
    }
    BorderLeftWidth("border-left-width"): length<BorderWidth> [0, 8, 3, 5] reset {
        field: border_left_width, value: [Width], initial: Medium
    }
    BorderRightColor("border-right-color"): scalar<BorderColor> [11, 6, 2, 0] reset {
        field: border_right_color, ty: values::Color, value: [Color], initial: CurrentColor
    }
    BorderRightStyle("border-right-style"): keyword<BorderStyle> [9, 7, 4, 0] reset {
        initial: None
    }
    BorderRightWidth("border-right-width"): length<BorderWidth> [0, 16, 3, 5] reset {
        field: border_right_width, value: [Width], initial: Medium
    }
    /// Horizontal then vertical spacing.
    BorderSpacing("border-spacing"): pair<Explicit> [12, 21, 1, 10] inherited {
        field: border_spacing, value: [Set], initial: Set = ZERO_PAIR
    }
    BorderTopColor("border-top-color"): scalar<BorderColor> [11, 8, 2, 0] reset {
        field: border_top_color, ty: values::Color, value: [Color], initial: CurrentColor
    }
    BorderTopStyle("border-top-style"): keyword<BorderStyle> [9, 11, 4, 0] reset {
        initial: None
    }
    BorderTopWidth("border-top-width"): length<BorderWidth> [0, 24, 3, 5] reset {
        field: border_top_width, value: [Width], initial: Medium
    }
    Bottom("bottom"): length<Inset> [3, 11, 2, 5] reset {
        field: bottom, value: [Set], initial: Auto
    }
    BoxSizing("box-sizing"): keyword<BoxSizing> [11, 10, 2, 0] reset {
        initial: ContentBox
    }
    BreakAfter("break-after"): keyword<BreakBetween> [9, 15, 4, 0] reset {
        initial: Auto
    }
    BreakBefore("break-before"): keyword<BreakBetween> [9, 19, 4, 0] reset {
        initial: Auto
    }
    BreakInside("break-inside"): keyword<BreakInside> [9, 23, 4, 0] reset {
        initial: Auto
    }
    CaptionSide("caption-side"): keyword<CaptionSide> [11, 12, 2, 0] inherited {
        initial: Top
    }
    Clear("clear"): keyword<Clear> [13, 1, 3, 0] reset {
        initial: None
    }
    Clip("clip"): clip<Clip> [2, 6, 2, 24] reset {
        initial: Auto
    }
    /// The initial color is the user agent's text color.
    Color("color"): scalar<ColorOpcode> [14, 19, 1, 0] inherited {
        field: color, ty: values::Color, value: [Color], initial: Color = values::Color::BLACK
    }
    ColumnCount("column-count"): scalar<ColumnCount> [11, 14, 2, 0] reset {
        field: column_count, ty: i32, value: [Set], initial: Auto
    }
    ColumnFill("column-fill"): keyword<ColumnFill> [11, 16, 2, 0] reset {
        initial: Balance
    }
    ColumnGap("column-gap"): length<Spacing> [3, 18, 2, 5] reset {
        field: column_gap, value: [Set], initial: Normal
    }
    ColumnRuleColor("column-rule-color"): scalar<BorderColor> [11, 18, 2, 0] reset {
        field: column_rule_color, ty: values::Color, value: [Color], initial: CurrentColor
    }
    ColumnRuleStyle("column-rule-style"): keyword<BorderStyle> [7, 0, 4, 0] reset {
        initial: None
    }
    ColumnRuleWidth("column-rule-width"): length<BorderWidth> [1, 7, 3, 5] reset {
        field: column_rule_width, value: [Width], initial: Medium
    }
    ColumnSpan("column-span"): keyword<ColumnSpan> [11, 20, 2, 0] reset {
        initial: None
    }
    ColumnWidth("column-width"): length<ColumnWidth> [3, 25, 2, 5] reset {
        field: column_width, value: [Set], initial: Auto
    }
    Content("content"): list<Content> [11, 22, 2, 0] reset {
        field: content, item: ContentItem, value: [Set], initial: Normal
    }
    CounterIncrement("counter-increment"): list<Counters> [14, 2, 2, 0] reset {
        field: counter_increment, item: Counter, value: [Named], initial: None
    }
    CounterReset("counter-reset"): list<Counters> [14, 4, 2, 0] reset {
        field: counter_reset, item: Counter, value: [Named], initial: None
    }
    /// The opcode is the fallback keyword after the list of cursor images.
    Cursor("cursor"): list<Cursor> [9, 27, 5, 0] inherited {
        field: cursor, item: Atom, value: any, initial: Auto
    }
    Direction("direction"): keyword<Direction> [11, 24, 2, 0] inherited {
        initial: Ltr
    }
    Display("display"): keyword<Display> [8, 3, 5, 0] reset {
        initial: Inline
    }
    EmptyCells("empty-cells"): keyword<EmptyCells> [11, 26, 2, 0] inherited {
        initial: Show
    }
    FlexBasis("flex-basis"): length<FlexBasis> [7, 4, 2, 5] reset {
        field: flex_basis, value: [Set], initial: Auto
    }
    FlexDirection("flex-direction"): keyword<FlexDirection> [13, 4, 3, 0] reset {
        initial: Row
    }
    FlexGrow("flex-grow"): scalar<Explicit> [14, 22, 1, 0] reset {
        field: flex_grow, ty: Fixed, value: [Set], initial: Set = Fixed::ZERO
    }
    FlexShrink("flex-shrink"): scalar<Explicit> [14, 23, 1, 0] reset {
        field: flex_shrink, ty: Fixed, value: [Set], initial: Set = Fixed::ONE
    }
    FlexWrap("flex-wrap"): keyword<FlexWrap> [11, 28, 2, 0] reset {
        initial: Nowrap
    }
    Float("float"): keyword<Float> [11, 30, 2, 0] reset {
        initial: None
    }
    /// The opcode is the generic family after the list of named families.
    /// The initial family is the user agent's.
    FontFamily("font-family"): list<FontFamily> [13, 7, 3, 0] inherited {
        field: font_family, item: Atom, value: any, initial: SansSerif
    }
    FontSize("font-size"): length<FontSize> [1, 23, 4, 5] inherited {
        field: font_size, value: [Dimension], initial: Medium
    }
    FontStyle("font-style"): keyword<FontStyle> [10, 0, 2, 0] inherited {
        initial: Normal
    }
    FontVariant("font-variant"): keyword<FontVariant> [10, 2, 2, 0] inherited {
        initial: Normal
    }
    FontWeight("font-weight"): keyword<FontWeight> [6, 0, 4, 0] inherited {
        initial: Normal
    }
    Height("height"): length<Size> [7, 11, 2, 5] reset {
        field: height, value: [Set], initial: Auto
    }
    JustifyContent("justify-content"): keyword<JustifyContent> [13, 10, 3, 0] reset {
        initial: FlexStart
    }
    Left("left"): length<Inset> [7, 18, 2, 5] reset {
        field: left, value: [Set], initial: Auto
    }
    LetterSpacing("letter-spacing"): length<Spacing> [7, 25, 2, 5] inherited {
        field: letter_spacing, value: [Set], initial: Normal
    }
    /// A `Number` keeps its multiplier in the value with a px unit.
    LineHeight("line-height"): length<LineHeight> [6, 4, 2, 5] inherited {
        field: line_height, value: [Number | Dimension], initial: Normal
    }
    ListStyleImage("list-style-image"): image<Image> [14, 6, 2, 0] inherited {
        field: list_style_image, value: [Image], initial: None
    }
    ListStylePosition("list-style-position"): keyword<ListStylePosition> [10, 4, 2, 0] inherited {
        initial: Outside
    }
    ListStyleType("list-style-type"): keyword<ListStyleType> [8, 8, 6, 0] inherited {
        initial: Disc
    }
    MarginBottom("margin-bottom"): length<Margin> [6, 11, 2, 5] reset {
        field: margin_bottom, value: [Set], initial: Set = ZERO
    }
    MarginLeft("margin-left"): length<Margin> [6, 18, 2, 5] reset {
        field: margin_left, value: [Set], initial: Set = ZERO
    }
    MarginRight("margin-right"): length<Margin> [6, 25, 2, 5] reset {
        field: margin_right, value: [Set], initial: Set = ZERO
    }
    MarginTop("margin-top"): length<Margin> [5, 4, 2, 5] reset {
        field: margin_top, value: [Set], initial: Set = ZERO
    }
    MaxHeight("max-height"): length<MaxSize> [5, 11, 2, 5] reset {
        field: max_height, value: [Set], initial: None
    }
    MaxWidth("max-width"): length<MaxSize> [5, 18, 2, 5] reset {
        field: max_width, value: [Set], initial: None
    }
    MinHeight("min-height"): length<MinSize> [5, 25, 2, 5] reset {
        field: min_height, value: [Set], initial: Auto
    }
    MinWidth("min-width"): length<MinSize> [4, 4, 2, 5] reset {
        field: min_width, value: [Set], initial: Auto
    }
    Opacity("opacity"): scalar<Explicit> [14, 25, 1, 0] reset {
        field: opacity, ty: Fixed, value: [Set], initial: Set = Fixed::ONE
    }
    Order("order"): scalar<Explicit> [14, 26, 1, 0] reset {
        field: order, ty: i32, value: [Set], initial: Set = 0
    }
    Orphans("orphans"): scalar<Explicit> [14, 27, 1, 0] inherited {
        field: orphans, ty: i32, value: [Set], initial: Set = 2
    }
    OutlineColor("outline-color"): scalar<OutlineColor> [10, 6, 2, 0] reset {
        field: outline_color, ty: values::Color, value: [Color], initial: Invert
    }
    OutlineStyle("outline-style"): keyword<BorderStyle> [5, 0, 4, 0] reset {
        initial: None
    }
    OutlineWidth("outline-width"): length<BorderWidth> [1, 15, 3, 5] reset {
        field: outline_width, value: [Width], initial: Medium
    }
    OverflowX("overflow-x"): keyword<Overflow> [13, 13, 3, 0] reset {
        initial: Visible
    }
    OverflowY("overflow-y"): keyword<Overflow> [13, 16, 3, 0] reset {
        initial: Visible
    }
    PaddingBottom("padding-bottom"): length<Explicit> [8, 14, 1, 5] reset {
        field: padding_bottom, value: [Set], initial: Set = ZERO
    }
    PaddingLeft("padding-left"): length<Explicit> [8, 20, 1, 5] reset {
        field: padding_left, value: [Set], initial: Set = ZERO
    }
    PaddingRight("padding-right"): length<Explicit> [8, 26, 1, 5] reset {
        field: padding_right, value: [Set], initial: Set = ZERO
    }
    PaddingTop("padding-top"): length<Explicit> [3, 5, 1, 5] reset {
        field: padding_top, value: [Set], initial: Set = ZERO
    }
    PageBreakAfter("page-break-after"): keyword<PageBreak> [13, 19, 3, 0] reset {
        initial: Auto
    }
    PageBreakBefore("page-break-before"): keyword<PageBreak> [13, 22, 3, 0] reset {
        initial: Auto
    }
    PageBreakInside("page-break-inside"): keyword<PageBreakInside> [10, 8, 2, 0] reset {
        initial: Auto
    }
    Position("position"): keyword<Position> [13, 25, 3, 0] reset {
        initial: Static
    }
    /// Open and close quote strings, in pairs.
    Quotes("quotes"): list<Quotes> [14, 8, 2, 0] inherited {
        field: quotes, item: Atom, value: [String], initial: None
    }
    Right("right"): length<Inset> [4, 11, 2, 5] reset {
        field: right, value: [Set], initial: Auto
    }
    TableLayout("table-layout"): keyword<TableLayout> [10, 10, 2, 0] reset {
        initial: Auto
    }
    TextAlign("text-align"): keyword<TextAlign> [4, 0, 4, 0] inherited {
        initial: Default
    }
    TextDecoration("text-decoration"): keyword<TextDecoration> [3, 0, 5, 0] reset {
        initial: NONE
    }
    TextIndent("text-indent"): length<Explicit> [2, 0, 1, 5] inherited {
        field: text_indent, value: [Set], initial: Set = ZERO
    }
    TextTransform("text-transform"): keyword<TextTransform> [9, 0, 3, 0] inherited {
        initial: None
    }
    Top("top"): length<Inset> [4, 18, 2, 5] reset {
        field: top, value: [Set], initial: Auto
    }
    UnicodeBidi("unicode-bidi"): keyword<UnicodeBidi> [10, 12, 2, 0] reset {
        initial: Normal
    }
    VerticalAlign("vertical-align"): length<VerticalAlign> [12, 1, 4, 5] reset {
        field: vertical_align, value: [Set], initial: Baseline
    }
    Visibility("visibility"): keyword<Visibility> [10, 14, 2, 0] inherited {
        initial: Visible
    }
    WhiteSpace("white-space"): keyword<WhiteSpace> [8, 0, 3, 0] inherited {
        initial: Normal
    }
    Widows("widows"): scalar<Explicit> [12, 0, 1, 0] inherited {
        field: widows, ty: i32, value: [Set], initial: Set = 2
    }
    Width("width"): length<Size> [4, 25, 2, 5] reset {
        field: width, value: [Set], initial: Auto
    }
    WordSpacing("word-spacing"): length<Spacing> [1, 0, 2, 5] inherited {
        field: word_spacing, value: [Set], initial: Normal
    }
    WritingMode("writing-mode"): keyword<WritingMode> [10, 16, 2, 0] inherited {
        initial: HorizontalTb
    }
    ZIndex("z-index"): scalar<ZIndex> [10, 18, 2, 0] reset {
        field: z_index, ty: i32, value: [Set], initial: Auto
    }
}

/// `clip` packs its edge units and `auto` flags above the opcode:
/// `top unit | right unit | bottom unit | left unit | top, right, bottom,
/// left auto`, most significant first.
fn load_clip(style: &ComputedStyle, slot: Slot) -> ClipRect {
    let packed = style.unit_bits(slot);
    let units = packed >> 4;
    let edge = |index: usize, shift: u32| {
        Length::new(style.clip[index], Unit::from_bits((units >> shift) & 0x1f))
    };
    ClipRect {
        top: edge(0, 15),
        right: edge(1, 10),
        bottom: edge(2, 5),
        left: edge(3, 0),
        top_auto: packed & 0x8 != 0,
        right_auto: packed & 0x4 != 0,
        bottom_auto: packed & 0x2 != 0,
        left_auto: packed & 0x1 != 0,
    }
}

fn store_clip(style: &mut ComputedStyle, slot: Slot, rect: ClipRect) {
    style.clip = [rect.top.value, rect.right.value, rect.bottom.value, rect.left.value];
    let units = rect.top.unit.to_bits() << 15 |
        rect.right.unit.to_bits() << 10 |
        rect.bottom.unit.to_bits() << 5 |
        rect.left.unit.to_bits();
    let autos = (rect.top_auto as u32) << 3 |
        (rect.right_auto as u32) << 2 |
        (rect.bottom_auto as u32) << 1 |
        rect.left_auto as u32;
    style.set_unit_bits(slot, units << 4 | autos);
}
