/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::properties::keywords::{self, TextDecoration};
use css_select::properties::{LonghandIdSet, Opcode, longhands};
use css_select::values::{ClipRect, Color, ContentItem, Counter, LengthPair, Unit};
use css_select::{Atom, ComputedStyle, Fixed, LonghandId};

use crate::{length, px};

#[test]
fn default_style_inherits_everything() {
    let style = ComputedStyle::default();
    for id in LonghandId::ALL {
        assert!(style.is_inherit(*id), "{} should inherit", id.name());
    }
    assert!(style.is_fully_cascaded());
}

#[test]
fn initial_values() {
    let style = ComputedStyle::initial_values();
    assert_eq!(style.get_bits::<longhands::Display>(), keywords::Display::Inline);
    assert_eq!(style.get_bits::<longhands::Position>(), keywords::Position::Static);
    assert_eq!(
        style.get::<longhands::MarginTop>(),
        (keywords::Margin::Set, Some(px(0)))
    );
    assert_eq!(style.get::<longhands::Width>(), (keywords::Size::Auto, None));
    assert_eq!(
        style.get::<longhands::Color>(),
        (keywords::ColorOpcode::Color, Some(Color::BLACK))
    );
    assert_eq!(
        style.get::<longhands::Opacity>(),
        (keywords::Explicit::Set, Some(Fixed::ONE))
    );
    assert_eq!(
        style.get_bits::<longhands::TextDecoration>(),
        TextDecoration::NONE
    );
    for id in LonghandId::ALL {
        assert!(!style.is_inherit(*id), "{} has no initial value", id.name());
    }
}

#[test]
fn lengths_keep_their_unit() {
    let mut style = ComputedStyle::default();
    let em = length(1.5, Unit::Em);
    style.set::<longhands::FontSize>(keywords::FontSize::Dimension, Some(em));
    assert_eq!(
        style.get::<longhands::FontSize>(),
        (keywords::FontSize::Dimension, Some(em))
    );

    let vmax = length(-12.25, Unit::Vmax);
    style.set::<longhands::TextIndent>(keywords::Explicit::Set, Some(vmax));
    assert_eq!(style.get::<longhands::TextIndent>().1, Some(vmax));
    // Neighbours are untouched.
    assert_eq!(style.get::<longhands::FontSize>().1, Some(em));
}

#[test]
fn keyword_opcodes_drop_the_payload() {
    let mut with_payload = ComputedStyle::default();
    with_payload.set::<longhands::Width>(keywords::Size::Auto, Some(length(5., Unit::Cm)));

    let mut without = ComputedStyle::default();
    without.set::<longhands::Width>(keywords::Size::Auto, None);

    assert_eq!(with_payload.get::<longhands::Width>(), (keywords::Size::Auto, None));
    assert_eq!(with_payload, without);
}

#[test]
fn pairs_and_clip_rects() {
    let mut style = ComputedStyle::default();
    let pair = LengthPair::new(length(50., Unit::Pct), length(2., Unit::Rem));
    style.set::<longhands::BackgroundPosition>(keywords::Explicit::Set, Some(pair));
    assert_eq!(style.get::<longhands::BackgroundPosition>().1, Some(pair));

    let rect = ClipRect {
        right_auto: true,
        ..ClipRect::new(px(1), px(0), length(3., Unit::Em), length(4., Unit::Vw))
    };
    style.set::<longhands::Clip>(keywords::Clip::Rect, Some(rect));
    assert_eq!(style.get::<longhands::Clip>(), (keywords::Clip::Rect, Some(rect)));

    style.set::<longhands::Clip>(keywords::Clip::Auto, None);
    assert_eq!(style.get::<longhands::Clip>(), (keywords::Clip::Auto, None));
}

#[test]
fn wide_opcodes() {
    let mut style = ComputedStyle::default();
    style.set::<longhands::ListStyleType>(keywords::ListStyleType::KoreanHanjaFormal, None);
    style.set::<longhands::Display>(keywords::Display::InlineGrid, None);
    let decoration = TextDecoration::UNDERLINE | TextDecoration::BLINK;
    style.set::<longhands::TextDecoration>(decoration, None);

    assert_eq!(
        style.get_bits::<longhands::ListStyleType>(),
        keywords::ListStyleType::KoreanHanjaFormal
    );
    assert_eq!(style.get_bits::<longhands::Display>(), keywords::Display::InlineGrid);
    assert_eq!(style.get_bits::<longhands::TextDecoration>(), decoration);
    assert_eq!(
        style.get_raw_bits(LonghandId::Display),
        keywords::Display::InlineGrid.to_bits()
    );
}

#[test]
fn strings_are_reference_counted() {
    let atom = Atom::new("select-tests-content-string");
    let base = atom.strong_count();

    let mut style = ComputedStyle::default();
    let items = vec![ContentItem::String(atom.clone()), ContentItem::OpenQuote];
    style.set::<longhands::Content>(keywords::Content::Set, Some(items.into_boxed_slice()));
    assert_eq!(atom.strong_count(), base + 1);

    let mut copy = ComputedStyle::default();
    copy.copy_from::<longhands::Content>(&style).unwrap();
    assert_eq!(atom.strong_count(), base + 2);
    assert_eq!(
        copy.get::<longhands::Content>().1,
        Some(&[ContentItem::String(atom.clone()), ContentItem::OpenQuote][..])
    );

    drop(copy);
    assert_eq!(atom.strong_count(), base + 1);

    style.set::<longhands::Content>(keywords::Content::None, None);
    assert_eq!(atom.strong_count(), base);
}

#[test]
fn setting_the_same_list_twice() {
    let atom = Atom::new("select-tests-repeated-quote");
    let base = atom.strong_count();
    let quotes = || vec![atom.clone(), atom.clone()].into_boxed_slice();

    let mut style = ComputedStyle::default();
    style.set::<longhands::Quotes>(keywords::Quotes::String, Some(quotes()));
    let once = style.clone();
    style.set::<longhands::Quotes>(keywords::Quotes::String, Some(quotes()));

    assert_eq!(style, once);
    assert_eq!(atom.strong_count(), base + 4);
    drop(once);
    assert_eq!(atom.strong_count(), base + 2);
}

#[test]
fn counters_and_images() {
    let name = Atom::new("select-tests-counter");
    let image = Atom::new("select-tests-image.png");
    let base = (name.strong_count(), image.strong_count());

    let mut style = ComputedStyle::default();
    let counters = vec![Counter::new(name.clone(), Fixed::from_int(2))].into_boxed_slice();
    style.set::<longhands::CounterIncrement>(keywords::Counters::Named, Some(counters));
    style.set::<longhands::ListStyleImage>(keywords::Image::Image, Some(image.clone()));
    assert_eq!((name.strong_count(), image.strong_count()), (base.0 + 1, base.1 + 1));

    assert_eq!(
        style.get::<longhands::ListStyleImage>(),
        (keywords::Image::Image, Some(&image))
    );
    let (opcode, counters) = style.get::<longhands::CounterIncrement>();
    assert_eq!(opcode, keywords::Counters::Named);
    assert_eq!(counters.map(|c| c[0].value), Some(Fixed::from_int(2)));

    drop(style);
    assert_eq!((name.strong_count(), image.strong_count()), base);
}

#[test]
fn initial_and_unset_marks() {
    let mut style = ComputedStyle::default();
    style.set_initial::<longhands::Color>();
    style.set_unset::<longhands::Width>();
    assert!(style.is_initial_marked(LonghandId::Color));
    assert!(style.is_unset_marked(LonghandId::Width));
    assert!(!style.is_fully_cascaded());

    // Setting a value clears the mark.
    style.set::<longhands::Color>(keywords::ColorOpcode::Color, Some(Color::WHITE));
    assert!(!style.is_initial_marked(LonghandId::Color));

    style.set_initial::<longhands::Width>();
    assert!(style.is_initial_marked(LonghandId::Width));
    assert!(!style.is_unset_marked(LonghandId::Width));

    let unset = ComputedStyle::unset();
    assert!(LonghandId::ALL.iter().all(|id| unset.is_unset_marked(*id)));
}

#[test]
fn reset_restores_the_initial_value() {
    let mut style = ComputedStyle::default();
    style.set::<longhands::Orphans>(keywords::Explicit::Set, Some(7));
    style.reset::<longhands::Orphans>();
    assert_eq!(style.get::<longhands::Orphans>(), (keywords::Explicit::Set, Some(2)));
}

#[test]
fn longhand_table() {
    assert_eq!(LonghandId::from_name("Font-Size"), Some(LonghandId::FontSize));
    assert_eq!(LonghandId::from_name("no-such-property"), None);
    assert_eq!(LonghandId::BorderTopWidth.name(), "border-top-width");
    assert!(LonghandId::Color.is_inherited());
    assert!(LonghandId::Quotes.is_inherited());
    assert!(!LonghandId::Width.is_inherited());

    let inherited = LonghandIdSet::inherited();
    assert!(inherited.contains(LonghandId::FontFamily));
    assert!(!inherited.contains(LonghandId::Display));
}

#[test]
fn opcodes_decode_from_bits() {
    assert_eq!(keywords::Float::from_bits(2), keywords::Float::Right);
    assert_eq!(keywords::Float::from_bits(0), keywords::Float::INHERIT);
}
