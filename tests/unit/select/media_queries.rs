/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

use css_select::media_queries::{
    Comparison, FeatureValue, Media, MediaCondition, MediaFeatureExpression, MediaList, MediaQuery,
    MediaType,
};
use css_select::values::Unit;
use css_select::{Atom, Fixed};

use crate::{context, init_logger, length, px};

fn screen(width: i32) -> Media {
    Media::screen(Fixed::from_int(width), Fixed::from_int(600))
}

fn dimension(value: i32) -> FeatureValue {
    FeatureValue::Dimension(px(value))
}

fn feature(expression: MediaFeatureExpression) -> MediaCondition {
    MediaCondition::Feature(expression)
}

fn matches(condition: &MediaCondition, media: &Media) -> bool {
    condition.matches(&context(), media)
}

#[test]
fn min_and_max_width() {
    init_logger();
    let min = feature(MediaFeatureExpression::min("width", dimension(450)));
    let max = feature(MediaFeatureExpression::max("width", dimension(450)));

    assert!(matches(&min, &screen(700)));
    assert!(!matches(&min, &screen(400)));
    assert!(matches(&min, &screen(450)));
    assert!(!matches(&max, &screen(700)));
    assert!(matches(&max, &screen(400)));
}

#[test]
fn width_window() {
    init_logger();
    let window = MediaCondition::and(vec![
        feature(MediaFeatureExpression::min("width", dimension(300))),
        feature(MediaFeatureExpression::max("width", dimension(600))),
    ]);
    assert!(matches(&window, &screen(450)));
    assert!(!matches(&window, &screen(700)));
    assert!(!matches(&window, &screen(299)));
}

#[test]
fn range_syntax() {
    init_logger();
    // 400px < width <= 800px
    let range = feature(MediaFeatureExpression::range(
        dimension(400),
        Comparison::Lt,
        "width",
        Comparison::Lte,
        dimension(800),
    ));
    assert!(!matches(&range, &screen(400)));
    assert!(matches(&range, &screen(401)));
    assert!(matches(&range, &screen(800)));
    assert!(!matches(&range, &screen(801)));

    // 700px > height
    let height = feature(MediaFeatureExpression::compare("height", Comparison::Gt, dimension(700)));
    assert!(matches(&height, &screen(1000)));

    let exact = feature(MediaFeatureExpression::equals("WIDTH", dimension(1024)));
    assert!(matches(&exact, &screen(1024)));
    assert!(!matches(&exact, &screen(1023)));
}

#[test]
fn font_relative_lengths_use_the_default_font() {
    init_logger();
    let min = feature(MediaFeatureExpression::min(
        "width",
        FeatureValue::Dimension(length(30., Unit::Em)),
    ));
    assert!(matches(&min, &screen(480)));
    assert!(!matches(&min, &screen(479)));
}

#[test]
fn non_length_values_never_match_lengths() {
    init_logger();
    let number = feature(MediaFeatureExpression::min("width", FeatureValue::Number(Fixed::ONE)));
    assert!(!matches(&number, &screen(700)));

    let boolean = feature(MediaFeatureExpression::boolean("width"));
    assert!(!matches(&boolean, &screen(700)));
}

#[test]
fn color_scheme() {
    init_logger();
    let dark = feature(MediaFeatureExpression::equals(
        "prefers-color-scheme",
        FeatureValue::Ident(Atom::new("dark")),
    ));
    let any = feature(MediaFeatureExpression::boolean("prefers-color-scheme"));

    assert!(matches(&dark, &screen(700).with_color_scheme("DARK")));
    assert!(!matches(&dark, &screen(700).with_color_scheme("light")));
    assert!(!matches(&dark, &screen(700)));
    assert!(matches(&any, &screen(700)));
}

#[test]
fn unknown_features_never_match() {
    init_logger();
    let unknown = feature(MediaFeatureExpression::boolean("scripting"));
    assert!(!matches(&unknown, &screen(700)));
    assert!(matches(&MediaCondition::not(unknown), &screen(700)));
}

#[test]
fn operators() {
    init_logger();
    let wide = || feature(MediaFeatureExpression::min("width", dimension(600)));
    let tall = || feature(MediaFeatureExpression::min("height", dimension(900)));
    let media = screen(700);

    assert!(!matches(&MediaCondition::and(vec![wide(), tall()]), &media));
    assert!(matches(&MediaCondition::or(vec![wide(), tall()]), &media));
    assert!(matches(&MediaCondition::not(MediaCondition::and(vec![wide(), tall()])), &media));
    assert!(!matches(&MediaCondition::not(wide()), &media));
    assert!(matches(&MediaCondition::not(MediaCondition::not(wide())), &media));

    assert!(matches(&MediaCondition::and(vec![]), &media));
    assert!(!matches(&MediaCondition::or(vec![]), &media));
}

#[test]
fn media_types() {
    init_logger();
    let ctx = context();
    let media = screen(700);

    assert!(MediaQuery::new(false, MediaType::SCREEN, None).matches(&ctx, &media));
    assert!(!MediaQuery::new(false, MediaType::PRINT, None).matches(&ctx, &media));
    assert!(MediaQuery::new(true, MediaType::PRINT, None).matches(&ctx, &media));
    assert!(!MediaQuery::new(true, MediaType::SCREEN, None).matches(&ctx, &media));
    assert!(MediaQuery::new(false, MediaType::PRINT | MediaType::SCREEN, None).matches(&ctx, &media));
    assert!(!MediaQuery::never_matching().matches(&ctx, &media));

    // `not print and (min-width: 800px)`: the condition is not negated.
    let narrow = MediaQuery::new(
        true,
        MediaType::PRINT,
        Some(feature(MediaFeatureExpression::min("width", dimension(800)))),
    );
    assert!(!narrow.matches(&ctx, &media));
    assert!(narrow.matches(&ctx, &screen(900)));
}

#[test]
fn media_type_names() {
    assert_eq!(MediaType::from_name("Screen"), Some(MediaType::SCREEN));
    assert_eq!(MediaType::from_name("all"), Some(MediaType::ALL));
    assert_eq!(MediaType::from_name("tv"), Some(MediaType::TV));
    assert_eq!(MediaType::from_name("hologram"), None);
}

#[test]
fn media_lists() {
    init_logger();
    let ctx = context();
    let media = screen(700);

    assert!(MediaList::empty().is_empty());
    assert!(!MediaList::empty().evaluate(&ctx, &media));
    assert!(!MediaList::default().evaluate(&ctx, &screen(800)));

    let print = MediaQuery::new(false, MediaType::PRINT, None);
    let wide = MediaQuery::from_condition(feature(MediaFeatureExpression::min("width", dimension(600))));

    assert!(!MediaList::new(vec![print.clone()]).evaluate(&ctx, &media));
    assert!(MediaList::new(vec![print, wide]).evaluate(&ctx, &media));
    assert!(!MediaList::new(vec![MediaQuery::never_matching()]).evaluate(&ctx, &media));
}
