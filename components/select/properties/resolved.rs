/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Values that depend on more than one property of a composed style.

use super::keywords::{self, BorderColor, Direction, Display, Float, Inset, LineHeight, Position};
use super::{ComputedStyle, Longhand, longhands};
use crate::fixed::Fixed;
use crate::unit::UnitContext;
use crate::values::{Color, Length, Unit};

const NORMAL_LINE_HEIGHT: Fixed = Fixed::from_f32(1.3);

/// A color property whose value may be `currentColor`.
pub trait CurrentColorLonghand: Longhand<Opcode = BorderColor> {
    fn stored_color(style: &ComputedStyle) -> Color;
}

macro_rules! current_color_longhands {
    ($($desc:ident: $field:ident,)+) => {
        $(
            impl CurrentColorLonghand for longhands::$desc {
                #[inline]
                fn stored_color(style: &ComputedStyle) -> Color {
                    style.$field
                }
            }
        )+
    };
}

current_color_longhands! {
    BackgroundColor: background_color,
    BorderBottomColor: border_bottom_color,
    BorderLeftColor: border_left_color,
    BorderRightColor: border_right_color,
    BorderTopColor: border_top_color,
    ColumnRuleColor: column_rule_color,
}

/// An inset as layout sees it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedInset {
    Auto,
    Length(Length),
}

impl ComputedStyle {
    /// The `display` used for layout: absolutely positioned, floated and
    /// root boxes are blockified.
    pub fn display(&self, is_root: bool) -> Display {
        let display = self.get_bits::<longhands::Display>();
        if display == Display::None {
            return display;
        }

        let position = self.get_bits::<longhands::Position>();
        let floated = !matches!(self.get_bits::<longhands::Float>(), Float::None | Float::Inherit);
        if !(position.is_absolutely_positioned() || floated || is_root) {
            return display;
        }

        match display {
            Display::InlineTable => Display::Table,
            Display::InlineFlex => Display::Flex,
            Display::InlineGrid => Display::Grid,
            Display::Inline |
            Display::RunIn |
            Display::InlineBlock |
            Display::TableRowGroup |
            Display::TableHeaderGroup |
            Display::TableFooterGroup |
            Display::TableRow |
            Display::TableColumnGroup |
            Display::TableColumn |
            Display::TableCell |
            Display::TableCaption => Display::Block,
            display => display,
        }
    }

    /// The `float` used for layout. Absolutely positioned boxes do not
    /// float.
    pub fn float(&self) -> Float {
        if self.get_bits::<longhands::Position>().is_absolutely_positioned() {
            return Float::None;
        }
        self.get_bits::<longhands::Float>()
    }

    pub fn top(&self) -> ResolvedInset {
        let (top, bottom) = (self.inset::<longhands::Top>(), self.inset::<longhands::Bottom>());
        self.resolve_offset(top, bottom, true)
    }

    pub fn bottom(&self) -> ResolvedInset {
        let (top, bottom) = (self.inset::<longhands::Top>(), self.inset::<longhands::Bottom>());
        self.resolve_offset(bottom, top, false)
    }

    pub fn left(&self) -> ResolvedInset {
        let (left, right) = (self.inset::<longhands::Left>(), self.inset::<longhands::Right>());
        let ltr = self.get_bits::<longhands::Direction>() != Direction::Rtl;
        self.resolve_offset(left, right, ltr)
    }

    pub fn right(&self) -> ResolvedInset {
        let (left, right) = (self.inset::<longhands::Left>(), self.inset::<longhands::Right>());
        let ltr = self.get_bits::<longhands::Direction>() != Direction::Rtl;
        self.resolve_offset(right, left, !ltr)
    }

    fn inset<P>(&self) -> ResolvedInset
    where
        P: for<'a> Longhand<Opcode = Inset, Ref<'a> = Length>,
    {
        match self.get::<P>() {
            (Inset::Set, Some(length)) => ResolvedInset::Length(length),
            _ => ResolvedInset::Auto,
        }
    }

    /// Relative offsets: a side mirrors its opposite when it is `auto` or
    /// when the opposite side wins.
    fn resolve_offset(
        &self,
        this: ResolvedInset,
        opposite: ResolvedInset,
        this_wins: bool,
    ) -> ResolvedInset {
        let negate = |length: Length| ResolvedInset::Length(Length::new(-length.value, length.unit));
        match self.get_bits::<longhands::Position>() {
            Position::Static | Position::Inherit => ResolvedInset::Auto,
            Position::Relative => match (this, opposite) {
                (ResolvedInset::Auto, ResolvedInset::Auto) => ResolvedInset::Length(Length::zero()),
                (ResolvedInset::Auto, ResolvedInset::Length(other)) => negate(other),
                (ResolvedInset::Length(_), ResolvedInset::Length(other)) if !this_wins => {
                    negate(other)
                },
                (this, _) => this,
            },
            Position::Absolute | Position::Fixed => this,
        }
    }

    /// The element's own color.
    pub fn current_color(&self) -> Color {
        match self.get::<longhands::Color>() {
            (keywords::ColorOpcode::Color, Some(color)) => color,
            _ => Color::BLACK,
        }
    }

    /// The color of `P` with `currentColor` replaced by the element's
    /// color. `None` while the property still inherits.
    pub fn resolved_color<P: CurrentColorLonghand>(&self) -> Option<Color> {
        match self.get_bits::<P>() {
            BorderColor::Color => Some(P::stored_color(self)),
            BorderColor::CurrentColor => Some(self.current_color()),
            BorderColor::Inherit => None,
        }
    }

    /// The outline color; `None` for `invert`.
    pub fn resolved_outline_color(&self) -> Option<Color> {
        match self.get::<longhands::OutlineColor>() {
            (keywords::OutlineColor::Color, Some(color)) => Some(color),
            (keywords::OutlineColor::CurrentColor, _) => Some(self.current_color()),
            _ => None,
        }
    }

    /// The font size in CSS pixels.
    pub fn font_size_px(&self, context: &UnitContext) -> Fixed {
        context.font_size_px(Some(self))
    }

    /// The line height in CSS pixels. `normal` is 1.3 times the font size.
    pub fn line_height_px(&self, context: &UnitContext) -> Fixed {
        let font_size = self.font_size_px(context);
        match self.get::<longhands::LineHeight>() {
            (LineHeight::Number, Some(number)) => number.value * font_size,
            (LineHeight::Dimension, Some(length)) if length.unit == Unit::Pct => {
                length.value * font_size / Fixed::F_100
            },
            (LineHeight::Dimension, Some(length)) => context.len2css_px(Some(self), length),
            _ => NORMAL_LINE_HEIGHT * font_size,
        }
    }
}
