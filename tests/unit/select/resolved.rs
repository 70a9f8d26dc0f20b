/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::properties::keywords::{self, Display, Float, Position};
use css_select::properties::longhands;
use css_select::properties::resolved::ResolvedInset;
use css_select::values::{Color, Length, Unit};
use css_select::{ComputedStyle, Fixed};

use crate::{context, length, px};

const RED: Color = Color::from_rgb(0xff, 0, 0);
const BLUE: Color = Color::from_rgb(0, 0, 0xff);

fn style(display: Display, position: Position, float: Float) -> ComputedStyle {
    let mut style = ComputedStyle::initial_values();
    style.set::<longhands::Display>(display, None);
    style.set::<longhands::Position>(position, None);
    style.set::<longhands::Float>(float, None);
    style
}

#[test]
fn blockification() {
    let absolute = style(Display::Inline, Position::Absolute, Float::None);
    assert_eq!(absolute.display(false), Display::Block);

    let floated = style(Display::InlineFlex, Position::Static, Float::Left);
    assert_eq!(floated.display(false), Display::Flex);

    let root = style(Display::InlineTable, Position::Static, Float::None);
    assert_eq!(root.display(true), Display::Table);
    assert_eq!(root.display(false), Display::InlineTable);

    let hidden = style(Display::None, Position::Fixed, Float::Right);
    assert_eq!(hidden.display(true), Display::None);

    let list_item = style(Display::ListItem, Position::Absolute, Float::None);
    assert_eq!(list_item.display(false), Display::ListItem);
}

#[test]
fn absolute_positioning_cancels_float() {
    assert_eq!(style(Display::Block, Position::Absolute, Float::Left).float(), Float::None);
    assert_eq!(style(Display::Block, Position::Fixed, Float::Right).float(), Float::None);
    assert_eq!(style(Display::Block, Position::Relative, Float::Right).float(), Float::Right);
}

fn inset(value: i32) -> ResolvedInset {
    ResolvedInset::Length(px(value))
}

#[test]
fn relative_offsets() {
    let mut style = style(Display::Block, Position::Relative, Float::None);
    style.set::<longhands::Top>(keywords::Inset::Set, Some(px(10)));
    style.set::<longhands::Left>(keywords::Inset::Set, Some(px(5)));
    style.set::<longhands::Right>(keywords::Inset::Set, Some(px(7)));

    assert_eq!(style.top(), inset(10));
    assert_eq!(style.bottom(), inset(-10));
    assert_eq!(style.left(), inset(5));
    assert_eq!(style.right(), inset(-5));

    style.set::<longhands::Direction>(keywords::Direction::Rtl, None);
    assert_eq!(style.left(), inset(-7));
    assert_eq!(style.right(), inset(7));
}

#[test]
fn relative_offsets_default_to_zero() {
    let style = style(Display::Block, Position::Relative, Float::None);
    assert_eq!(style.top(), ResolvedInset::Length(Length::zero()));
    assert_eq!(style.left(), ResolvedInset::Length(Length::zero()));
}

#[test]
fn offsets_of_other_positions() {
    let mut style = style(Display::Block, Position::Static, Float::None);
    style.set::<longhands::Top>(keywords::Inset::Set, Some(px(10)));
    assert_eq!(style.top(), ResolvedInset::Auto);

    style.set::<longhands::Position>(Position::Absolute, None);
    assert_eq!(style.top(), inset(10));
    assert_eq!(style.bottom(), ResolvedInset::Auto);
}

#[test]
fn current_color() {
    let mut style = ComputedStyle::initial_values();
    style.set::<longhands::Color>(keywords::ColorOpcode::Color, Some(RED));

    assert_eq!(style.resolved_color::<longhands::BorderTopColor>(), Some(RED));
    style.set::<longhands::BorderTopColor>(keywords::BorderColor::Color, Some(BLUE));
    assert_eq!(style.resolved_color::<longhands::BorderTopColor>(), Some(BLUE));
    assert_eq!(
        ComputedStyle::default().resolved_color::<longhands::BorderTopColor>(),
        None
    );

    assert_eq!(style.resolved_outline_color(), None);
    style.set::<longhands::OutlineColor>(keywords::OutlineColor::CurrentColor, None);
    assert_eq!(style.resolved_outline_color(), Some(RED));
}

#[test]
fn line_height() {
    let ctx = context();
    let mut style = ComputedStyle::initial_values();
    style.set::<longhands::FontSize>(keywords::FontSize::Dimension, Some(px(20)));
    let twenty = Fixed::from_int(20);

    assert_eq!(style.line_height_px(&ctx), Fixed::from_f32(1.3) * twenty);

    style.set::<longhands::LineHeight>(keywords::LineHeight::Number, Some(length(1.5, Unit::Px)));
    assert_eq!(style.line_height_px(&ctx), Fixed::from_int(30));

    style.set::<longhands::LineHeight>(
        keywords::LineHeight::Dimension,
        Some(length(150., Unit::Pct)),
    );
    assert_eq!(style.line_height_px(&ctx), Fixed::from_int(30));

    style.set::<longhands::LineHeight>(keywords::LineHeight::Dimension, Some(px(24)));
    assert_eq!(style.line_height_px(&ctx), Fixed::from_int(24));
}
