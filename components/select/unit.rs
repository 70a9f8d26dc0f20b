/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Conversion of lengths to CSS and device pixels.
//!
//! Font relative units resolve against a reference style's font size, `rem`
//! against the root style's, and viewport units against the viewport held
//! by the [`UnitContext`]. The number of pixels per unit is rounded to a
//! whole pixel before it scales the length.

use std::fmt;

use euclid::default::Size2D;
#[cfg(feature = "servo")]
use serde::{Deserialize, Serialize};

use crate::fixed::Fixed;
use crate::prefs;
use crate::properties::ComputedStyle;
use crate::properties::keywords::{FontSize, WritingMode};
use crate::properties::longhands;
use crate::values::{Length, Unit};

const F_2_54: Fixed = Fixed::from_f32(2.54);
const F_25_4: Fixed = Fixed::from_f32(25.4);
const F_101_6: Fixed = Fixed::from_f32(101.6);
const F_1_2: Fixed = Fixed::from_f32(1.2);
const EX_RATIO: Fixed = Fixed::from_f32(0.6);
const CH_RATIO: Fixed = Fixed::from_f32(0.4);

/// Measures font dependent units exactly.
pub trait FontMetrics {
    /// The size of one `ex` or `ch` of the font of `style`, in CSS pixels.
    /// `style` is `None` when the client default font applies.
    fn measure(&self, style: Option<&ComputedStyle>, unit: Unit) -> Fixed;
}

/// Client settings that feed unit conversion.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct UnitSettings {
    /// The size of `font-size: medium`, in CSS pixels.
    pub font_size_default: Fixed,
    /// Font sizes are never smaller than this, in CSS pixels.
    pub font_size_minimum: Fixed,
    /// Resolution of the output device, in dots per inch.
    pub device_dpi: Fixed,
}

impl Default for UnitSettings {
    fn default() -> Self {
        UnitSettings {
            font_size_default: Fixed::from_int(16),
            font_size_minimum: Fixed::ZERO,
            device_dpi: Fixed::F_96,
        }
    }
}

impl UnitSettings {
    /// Reads the settings from the preference store.
    pub fn from_prefs() -> Self {
        UnitSettings {
            font_size_default: Fixed::from_int(prefs::get_i32(prefs::FONT_SIZE_DEFAULT)),
            font_size_minimum: Fixed::from_int(prefs::get_i32(prefs::FONT_SIZE_MINIMUM)),
            device_dpi: Fixed::from_int(prefs::get_i32(prefs::DEVICE_DPI)),
        }
    }
}

/// Everything a length conversion depends on besides the length itself.
#[derive(Clone, Copy)]
pub struct UnitContext<'a> {
    /// The viewport, in CSS pixels.
    pub viewport: Size2D<Fixed>,
    pub settings: UnitSettings,
    /// The style of the root element, for `rem`.
    pub root_style: Option<&'a ComputedStyle>,
    /// Exact `ex` and `ch` metrics. Without it `ex` is 0.6em and `ch` 0.4em.
    pub measure: Option<&'a dyn FontMetrics>,
}

impl<'a> fmt::Debug for UnitContext<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("UnitContext")
            .field("viewport", &self.viewport)
            .field("settings", &self.settings)
            .field("root_style", &self.root_style.is_some())
            .field("measure", &self.measure.is_some())
            .finish()
    }
}

impl<'a> UnitContext<'a> {
    pub fn new(viewport: Size2D<Fixed>, settings: UnitSettings) -> Self {
        UnitContext {
            viewport,
            settings,
            root_style: None,
            measure: None,
        }
    }

    /// A context with settings read from the preference store.
    pub fn from_prefs(viewport: Size2D<Fixed>) -> Self {
        Self::new(viewport, UnitSettings::from_prefs())
    }

    pub fn with_root_style(self, root_style: &'a ComputedStyle) -> Self {
        UnitContext {
            root_style: Some(root_style),
            ..self
        }
    }

    pub fn with_measure(self, measure: &'a dyn FontMetrics) -> Self {
        UnitContext {
            measure: Some(measure),
            ..self
        }
    }

    /// Maps the logical and min/max viewport units onto `vw` or `vh`. The
    /// logical units follow the writing mode of `style`, horizontal when
    /// there is none.
    pub fn map_viewport_unit(&self, style: Option<&ComputedStyle>, unit: Unit) -> Unit {
        let vertical = style.is_some_and(|style| {
            matches!(
                style.get_bits::<longhands::WritingMode>(),
                WritingMode::VerticalRl | WritingMode::VerticalLr
            )
        });
        let Size2D { width, height, .. } = self.viewport;
        match unit {
            Unit::Vi if vertical => Unit::Vh,
            Unit::Vi => Unit::Vw,
            Unit::Vb if vertical => Unit::Vw,
            Unit::Vb => Unit::Vh,
            Unit::Vmin if height < width => Unit::Vh,
            Unit::Vmin => Unit::Vw,
            Unit::Vmax if height > width => Unit::Vh,
            Unit::Vmax => Unit::Vw,
            unit => unit,
        }
    }

    /// Converts an absolute or viewport relative length to points. Font
    /// relative lengths and percentages have no absolute size and give
    /// zero.
    pub fn font_size_len2pt(&self, style: Option<&ComputedStyle>, length: Length) -> Fixed {
        let value = length.value;
        let Size2D { width, height, .. } = self.viewport;
        match self.map_viewport_unit(style, length.unit) {
            Unit::Px => value * Fixed::F_72 / Fixed::F_96,
            Unit::In => value * Fixed::F_72,
            Unit::Cm => value * (Fixed::F_72 / F_2_54),
            Unit::Mm => value * (Fixed::F_72 / F_25_4),
            Unit::Q => value * (Fixed::F_72 / F_101_6),
            Unit::Pt => value,
            Unit::Pc => value * Fixed::from_int(12),
            Unit::Vh => value * height / Fixed::F_100 * Fixed::F_72 / Fixed::F_96,
            Unit::Vw => value * width / Fixed::F_100 * Fixed::F_72 / Fixed::F_96,
            _ => Fixed::ZERO,
        }
    }

    /// The font size of `style` in CSS pixels, clamped to the minimum.
    pub fn font_size_px(&self, style: Option<&ComputedStyle>) -> Fixed {
        let Some(style) = style else {
            return self.settings.font_size_default;
        };
        let length = match ResolvedFontSize::of(style) {
            Some(size) => size.length(),
            None => return self.settings.font_size_default,
        };
        let px = if length.unit == Unit::Px {
            length.value
        } else {
            self.font_size_len2pt(Some(style), length) * Fixed::F_96 / Fixed::F_72
        };
        px.max(self.settings.font_size_minimum)
    }

    fn px_per_unit(
        &self,
        style: Option<&ComputedStyle>,
        root_style: Option<&ComputedStyle>,
        unit: Unit,
    ) -> Fixed {
        let Size2D { width, height, .. } = self.viewport;
        match self.map_viewport_unit(style, unit) {
            Unit::Em => self.font_size_px(style),
            Unit::Ex => match self.measure {
                Some(measure) => measure.measure(style, Unit::Ex),
                None => self.font_size_px(style) * EX_RATIO,
            },
            Unit::Ch => match self.measure {
                Some(measure) => measure.measure(style, Unit::Ch),
                None => self.font_size_px(style) * CH_RATIO,
            },
            Unit::Px => Fixed::ONE,
            Unit::In => Fixed::F_96,
            Unit::Cm => Fixed::F_96 / F_2_54,
            Unit::Mm => Fixed::F_96 / F_25_4,
            Unit::Q => Fixed::F_96 / F_101_6,
            Unit::Pt => Fixed::F_96 / Fixed::F_72,
            Unit::Pc => Fixed::F_96 / Fixed::from_int(6),
            Unit::Rem => self.font_size_px(root_style),
            Unit::Vh => height / Fixed::F_100,
            Unit::Vw => width / Fixed::F_100,
            _ => Fixed::ZERO,
        }
    }

    /// Converts a length to CSS pixels. `style` is the reference for font
    /// relative units and the logical viewport units.
    pub fn len2css_px(&self, style: Option<&ComputedStyle>, length: Length) -> Fixed {
        let px_per_unit = self.px_per_unit(style, self.root_style, length.unit);
        length.value * (px_per_unit + Fixed::HALF).truncate()
    }

    /// Converts a length to device pixels.
    pub fn len2device_px(&self, style: Option<&ComputedStyle>, length: Length) -> Fixed {
        let px_per_unit = self.px_per_unit(style, self.root_style, length.unit);
        let px_per_unit = css2device_px(px_per_unit, self.settings.device_dpi);
        length.value * (px_per_unit + Fixed::HALF).truncate()
    }

    /// Converts a length in a media query, where there is no element and so
    /// neither a reference nor a root style.
    pub fn len2px_mq(&self, length: Length) -> Fixed {
        let px_per_unit = self.px_per_unit(None, None, length.unit);
        length.value * (px_per_unit + Fixed::HALF).truncate()
    }

    #[inline]
    pub fn css2device_px(&self, px: Fixed) -> Fixed {
        css2device_px(px, self.settings.device_dpi)
    }

    #[inline]
    pub fn device2css_px(&self, px: Fixed) -> Fixed {
        device2css_px(px, self.settings.device_dpi)
    }
}

#[inline]
pub fn css2device_px(px: Fixed, device_dpi: Fixed) -> Fixed {
    px * device_dpi / Fixed::F_96
}

#[inline]
pub fn device2css_px(px: Fixed, device_dpi: Fixed) -> Fixed {
    px * Fixed::F_96 / device_dpi
}

/// A font size with no font relative unit left in it.
///
/// Only [`compute_absolute_font_size`] creates one from scratch; a style's
/// font size can be read as one once the cascade has resolved it.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ResolvedFontSize(Length);

impl ResolvedFontSize {
    /// The client default size.
    pub fn default_size(settings: &UnitSettings) -> Self {
        ResolvedFontSize(Length::px(settings.font_size_default))
    }

    /// The font size of `style`, if it is an absolute dimension.
    pub fn of(style: &ComputedStyle) -> Option<Self> {
        match style.get::<longhands::FontSize>() {
            (FontSize::Dimension, Some(length)) if is_absolute_font_unit(length.unit) => {
                Some(ResolvedFontSize(length))
            },
            _ => None,
        }
    }

    #[inline]
    pub fn length(&self) -> Length {
        self.0
    }
}

fn is_absolute_font_unit(unit: Unit) -> bool {
    unit.is_absolute_length() || unit.is_viewport_relative()
}

/// Resolves a specified font size against the parent's resolved size
/// `reference` (the client default when there is none).
///
/// Keywords scale the client default. `larger` and `smaller` scale the
/// reference by 1.2 and keep its unit. Percentages, `em`, `ex` and `ch`
/// scale the reference (`ex` by a further 0.6 and `ch` by 0.4), and `rem`
/// scales the root style's size. A font size has no line height to refer
/// to yet, so `lh` counts as `em`. Other units pass through. `inherit`
/// takes the reference as is.
pub fn compute_absolute_font_size(
    opcode: FontSize,
    value: Option<Length>,
    reference: Option<ResolvedFontSize>,
    root_style: Option<&ComputedStyle>,
    font_size_default: Fixed,
) -> ResolvedFontSize {
    let reference = reference.map_or(Length::px(font_size_default), |size| size.0);

    let length = match opcode {
        FontSize::Inherit => reference,
        FontSize::Larger => Length::new(reference.value * F_1_2, reference.unit),
        FontSize::Smaller => Length::new(reference.value / F_1_2, reference.unit),
        FontSize::Dimension => {
            let length = value.unwrap_or_default();
            match length.unit {
                Unit::Pct => Length::new(
                    length.value * reference.value / Fixed::F_100,
                    reference.unit,
                ),
                Unit::Em | Unit::Lh => {
                    Length::new(length.value * reference.value, reference.unit)
                },
                Unit::Ex => Length::new(
                    length.value * reference.value * EX_RATIO,
                    reference.unit,
                ),
                Unit::Ch => Length::new(
                    length.value * reference.value * CH_RATIO,
                    reference.unit,
                ),
                Unit::Rem => {
                    let root = root_style
                        .and_then(ResolvedFontSize::of)
                        .map_or(Length::px(font_size_default), |size| size.0);
                    Length::new(length.value * root.value, root.unit)
                },
                _ => length,
            }
        },
        keyword => {
            let factor = keyword.keyword_factor().unwrap_or(1.0);
            Length::px(Fixed::from_f32(factor) * font_size_default)
        },
    };
    ResolvedFontSize(length)
}
