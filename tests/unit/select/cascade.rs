/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::cascade::compose;
use css_select::properties::{keywords, longhands};
use css_select::values::{Color, ContentItem, Unit};
use css_select::{Atom, ComputedStyle, Fixed};

use crate::{context, init_logger, length, px};

const RED: Color = Color::from_rgb(0xff, 0, 0);

/// A composed root element with a red color, a 20px font and a 100px width.
fn root() -> ComputedStyle {
    let mut cascaded = ComputedStyle::default();
    cascaded.set::<longhands::Color>(keywords::ColorOpcode::Color, Some(RED));
    cascaded.set::<longhands::FontSize>(keywords::FontSize::Dimension, Some(px(20)));
    cascaded.set::<longhands::Width>(keywords::Size::Set, Some(px(100)));
    compose(None, &cascaded, &context()).unwrap()
}

#[test]
fn root_without_declarations_gets_initial_values() {
    init_logger();
    let ctx = context();
    let from_default = compose(None, &ComputedStyle::default(), &ctx).unwrap();
    let from_unset = compose(None, &ComputedStyle::unset(), &ctx).unwrap();
    assert_eq!(from_default, from_unset);
    assert!(from_default.is_fully_cascaded());

    assert_eq!(from_default.get_bits::<longhands::Display>(), keywords::Display::Inline);
    assert_eq!(
        from_default.get::<longhands::FontSize>(),
        (keywords::FontSize::Dimension, Some(px(16)))
    );
}

#[test]
fn inherit_copies_the_parent() {
    init_logger();
    let parent = root();
    let child = compose(Some(&parent), &ComputedStyle::default(), &context()).unwrap();
    assert_eq!(child.current_color(), RED);
    // An explicit inherit applies to reset properties too.
    assert_eq!(child.get::<longhands::Width>(), (keywords::Size::Set, Some(px(100))));
}

#[test]
fn initial_and_unset() {
    init_logger();
    let parent = root();
    let mut cascaded = ComputedStyle::default();
    cascaded.set_initial::<longhands::Color>();
    cascaded.set_unset::<longhands::Width>();
    cascaded.set_unset::<longhands::FontSize>();

    let child = compose(Some(&parent), &cascaded, &context()).unwrap();
    assert_eq!(child.current_color(), Color::BLACK);
    assert_eq!(child.get::<longhands::Width>(), (keywords::Size::Auto, None));
    assert_eq!(child.font_size_px(&context()), Fixed::from_int(20));
    assert!(child.is_fully_cascaded());
}

#[test]
fn declared_values_win() {
    init_logger();
    let parent = root();
    let mut cascaded = ComputedStyle::unset();
    cascaded.set::<longhands::Display>(keywords::Display::Block, None);
    let child = compose(Some(&parent), &cascaded, &context()).unwrap();
    assert_eq!(child.get_bits::<longhands::Display>(), keywords::Display::Block);
    // Unset inherited properties still inherit.
    assert_eq!(child.current_color(), RED);
}

#[test]
fn relative_font_sizes() {
    init_logger();
    let parent = root();
    let ctx = context().with_root_style(&parent);
    let font_size = |opcode, value| {
        let mut cascaded = ComputedStyle::default();
        cascaded.set::<longhands::FontSize>(opcode, value);
        let child = compose(Some(&parent), &cascaded, &ctx).unwrap();
        child.get::<longhands::FontSize>()
    };

    let dimension = |length| (keywords::FontSize::Dimension, Some(length));
    assert_eq!(
        font_size(keywords::FontSize::Larger, None),
        dimension(css_select::values::Length::px(Fixed::from_int(20) * Fixed::from_f32(1.2)))
    );
    assert_eq!(
        font_size(keywords::FontSize::Dimension, Some(length(150., Unit::Pct))),
        dimension(px(30))
    );
    assert_eq!(
        font_size(keywords::FontSize::Dimension, Some(length(2., Unit::Em))),
        dimension(px(40))
    );
    assert_eq!(
        font_size(keywords::FontSize::Dimension, Some(length(2., Unit::Rem))),
        dimension(px(40))
    );
    assert_eq!(font_size(keywords::FontSize::XxLarge, None), dimension(px(32)));
    assert_eq!(
        font_size(keywords::FontSize::Dimension, Some(length(12., Unit::Pt))),
        dimension(length(12., Unit::Pt))
    );
}

#[test]
fn percentage_of_the_default_font_size() {
    init_logger();
    let ctx = context();
    let parent = compose(None, &ComputedStyle::default(), &ctx).unwrap();
    let mut cascaded = ComputedStyle::default();
    cascaded.set::<longhands::FontSize>(
        keywords::FontSize::Dimension,
        Some(length(120., Unit::Pct)),
    );

    let child = compose(Some(&parent), &cascaded, &ctx).unwrap();
    let (opcode, size) = child.get::<longhands::FontSize>();
    assert_eq!(opcode, keywords::FontSize::Dimension);
    let size = size.unwrap();
    assert_eq!(size.unit, Unit::Px);
    // 19.2px, truncated to the nearest 1/1024.
    assert_eq!(size.value.raw(), 0x4ccc);
    assert_eq!(child.font_size_px(&ctx).raw(), 0x4ccc);
}

#[test]
fn lengths_become_absolute() {
    init_logger();
    let parent = root();
    let mut cascaded = ComputedStyle::default();
    cascaded.set::<longhands::MarginLeft>(keywords::Margin::Set, Some(length(2., Unit::Em)));
    cascaded.set::<longhands::PaddingTop>(keywords::Explicit::Set, Some(length(10., Unit::Vw)));
    cascaded.set::<longhands::Height>(keywords::Size::Set, Some(length(50., Unit::Pct)));
    cascaded.set::<longhands::LineHeight>(
        keywords::LineHeight::Number,
        Some(length(1.5, Unit::Px)),
    );

    let child = compose(Some(&parent), &cascaded, &context()).unwrap();
    // The child's own font size, inherited as 20px, is the em reference.
    assert_eq!(child.get::<longhands::MarginLeft>().1, Some(px(40)));
    assert_eq!(child.get::<longhands::PaddingTop>().1, Some(px(80)));
    assert_eq!(child.get::<longhands::Height>().1, Some(length(50., Unit::Pct)));
    assert_eq!(
        child.get::<longhands::LineHeight>(),
        (keywords::LineHeight::Number, Some(length(1.5, Unit::Px)))
    );
}

#[test]
fn line_widths() {
    init_logger();
    let mut cascaded = ComputedStyle::unset();
    cascaded.set::<longhands::BorderTopStyle>(keywords::BorderStyle::Solid, None);
    cascaded.set::<longhands::BorderTopWidth>(keywords::BorderWidth::Thick, None);
    cascaded.set::<longhands::BorderLeftWidth>(keywords::BorderWidth::Thin, None);
    cascaded.set::<longhands::OutlineStyle>(keywords::BorderStyle::Dotted, None);

    let style = compose(None, &cascaded, &context()).unwrap();
    let width = keywords::BorderWidth::Width;
    assert_eq!(style.get::<longhands::BorderTopWidth>(), (width, Some(px(4))));
    // No border style, no border.
    assert_eq!(style.get::<longhands::BorderLeftWidth>(), (width, Some(px(0))));
    assert_eq!(style.get::<longhands::OutlineWidth>(), (width, Some(px(2))));
}

#[test]
fn composing_balances_string_references() {
    init_logger();
    let quote = Atom::new("select-tests-compose-quote");
    let base = quote.strong_count();

    let mut cascaded = ComputedStyle::unset();
    let items = vec![ContentItem::String(quote.clone())].into_boxed_slice();
    cascaded.set::<longhands::Content>(keywords::Content::Set, Some(items));
    let parent = compose(None, &cascaded, &context()).unwrap();
    assert_eq!(quote.strong_count(), base + 2);

    // `content` is not inherited, but an explicit inherit still copies it.
    let child = compose(Some(&parent), &ComputedStyle::default(), &context()).unwrap();
    assert_eq!(quote.strong_count(), base + 3);

    drop((cascaded, parent, child));
    assert_eq!(quote.strong_count(), base);
}
