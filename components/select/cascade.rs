/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Composition of a cascaded style with its parent's computed style.
//!
//! The cascade leaves each property of an element's style in one of three
//! states: explicitly `inherit` (or never set), marked `initial` or `unset`,
//! or holding a declared value. [`compose`] resolves the first two against
//! the parent and the initial values, then makes every font or viewport
//! relative length absolute. Percentages that resolve against the
//! containing block are left for layout.

use log::trace;

use crate::error::Result;
use crate::fixed::Fixed;
use crate::properties::keywords::{BorderStyle, BorderWidth, FontSize, LineHeight};
use crate::properties::longhands::{self, LonghandId};
use crate::properties::{ComputedStyle, Longhand};
use crate::unit::{ResolvedFontSize, UnitContext, compute_absolute_font_size};
use crate::values::{ClipRect, Length, LengthPair};

/// Builds the computed style of an element from its cascaded style `child`
/// and the computed style of its parent, if it has one.
///
/// On error nothing is returned and every string reference taken while
/// composing has been released.
pub fn compose(
    parent: Option<&ComputedStyle>,
    child: &ComputedStyle,
    context: &UnitContext,
) -> Result<ComputedStyle> {
    trace!("Composing style (root: {})", parent.is_none());

    let mut result = ComputedStyle::default();
    for &id in LonghandId::ALL {
        let inherit = if child.is_initial_marked(id) {
            false
        } else if child.is_unset_marked(id) {
            id.is_inherited()
        } else if child.is_inherit(id) {
            true
        } else {
            result.copy_longhand_from(id, child)?;
            continue;
        };

        match parent {
            Some(parent) if inherit => result.copy_longhand_from(id, parent)?,
            _ => result.reset_longhand(id),
        }
    }

    resolve_font_size(&mut result, parent, context);
    resolve_lengths(&mut result, context);
    resolve_line_widths(&mut result);

    trace!("Composed style");
    Ok(result)
}

/// Font size goes first: every other `em` on the element refers to it.
fn resolve_font_size(style: &mut ComputedStyle, parent: Option<&ComputedStyle>, context: &UnitContext) {
    let (opcode, value) = style.get::<longhands::FontSize>();
    let reference = parent.and_then(ResolvedFontSize::of);
    let size = compute_absolute_font_size(
        opcode,
        value,
        reference,
        context.root_style,
        context.settings.font_size_default,
    );
    style.set::<longhands::FontSize>(FontSize::Dimension, Some(size.length()));
}

fn absolute(style: &ComputedStyle, context: &UnitContext, length: Length) -> Length {
    if length.is_relative() {
        Length::px(context.len2css_px(Some(style), length))
    } else {
        length
    }
}

fn resolve_length<P>(style: &mut ComputedStyle, context: &UnitContext)
where
    P: for<'a> Longhand<Value = Length, Ref<'a> = Length>,
{
    if let (opcode, Some(length)) = style.get::<P>() {
        if length.is_relative() {
            let length = absolute(style, context, length);
            style.set::<P>(opcode, Some(length));
        }
    }
}

fn resolve_pair<P>(style: &mut ComputedStyle, context: &UnitContext)
where
    P: for<'a> Longhand<Value = LengthPair, Ref<'a> = LengthPair>,
{
    if let (opcode, Some(pair)) = style.get::<P>() {
        let pair = LengthPair::new(
            absolute(style, context, pair.horizontal),
            absolute(style, context, pair.vertical),
        );
        style.set::<P>(opcode, Some(pair));
    }
}

macro_rules! resolve_lengths {
    ($style:expr, $context:expr, [$($desc:ident),+ $(,)?]) => {
        $( resolve_length::<longhands::$desc>($style, $context); )+
    };
}

fn resolve_lengths(style: &mut ComputedStyle, context: &UnitContext) {
    resolve_lengths!(style, context, [
        BorderBottomWidth, BorderLeftWidth, BorderRightWidth, BorderTopWidth,
        Bottom, ColumnGap, ColumnRuleWidth, ColumnWidth, FlexBasis, Height, Left,
        LetterSpacing, MarginBottom, MarginLeft, MarginRight, MarginTop, MaxHeight,
        MaxWidth, MinHeight, MinWidth, OutlineWidth, PaddingBottom, PaddingLeft,
        PaddingRight, PaddingTop, Right, TextIndent, Top, VerticalAlign, Width,
        WordSpacing,
    ]);

    // A number is a multiplier, not a length.
    if style.get_bits::<longhands::LineHeight>() == LineHeight::Dimension {
        resolve_length::<longhands::LineHeight>(style, context);
    }

    resolve_pair::<longhands::BackgroundPosition>(style, context);
    resolve_pair::<longhands::BorderSpacing>(style, context);

    if let (opcode, Some(rect)) = style.get::<longhands::Clip>() {
        let rect = ClipRect {
            top: absolute(style, context, rect.top),
            right: absolute(style, context, rect.right),
            bottom: absolute(style, context, rect.bottom),
            left: absolute(style, context, rect.left),
            ..rect
        };
        style.set::<longhands::Clip>(opcode, Some(rect));
    }
}

fn resolve_line_width<W, S>(style: &mut ComputedStyle)
where
    W: for<'a> Longhand<Opcode = BorderWidth, Value = Length, Ref<'a> = Length>,
    S: Longhand<Opcode = BorderStyle>,
{
    let px = |value: i32| Some(Length::px(Fixed::from_int(value)));
    let width = if style.get_bits::<S>().is_none_or_hidden() {
        px(0)
    } else {
        match style.get::<W>() {
            (BorderWidth::Thin, _) => px(1),
            (BorderWidth::Medium, _) => px(2),
            (BorderWidth::Thick, _) => px(4),
            (BorderWidth::Width, width) => width,
            (BorderWidth::Inherit, _) => return,
        }
    };
    style.set::<W>(BorderWidth::Width, width);
}

/// Line width keywords become lengths, and a line with no style has no
/// width.
fn resolve_line_widths(style: &mut ComputedStyle) {
    resolve_line_width::<longhands::BorderTopWidth, longhands::BorderTopStyle>(style);
    resolve_line_width::<longhands::BorderRightWidth, longhands::BorderRightStyle>(style);
    resolve_line_width::<longhands::BorderBottomWidth, longhands::BorderBottomStyle>(style);
    resolve_line_width::<longhands::BorderLeftWidth, longhands::BorderLeftStyle>(style);
    resolve_line_width::<longhands::OutlineWidth, longhands::OutlineStyle>(style);
    resolve_line_width::<longhands::ColumnRuleWidth, longhands::ColumnRuleStyle>(style);
}
