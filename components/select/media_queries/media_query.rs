/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A media query:
//!
//! https://drafts.csswg.org/mediaqueries/#typedef-media-query

use bitflags::bitflags;

use super::{Media, MediaCondition};
use crate::unit::UnitContext;

bitflags! {
    /// <https://drafts.csswg.org/mediaqueries/#media-types>
    ///
    /// A query may name several types at once; a medium usually has exactly
    /// one.
    #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
    #[cfg_attr(feature = "servo", derive(::serde::Deserialize, ::serde::Serialize))]
    pub struct MediaType: u16 {
        const AURAL = 1 << 0;
        const BRAILLE = 1 << 1;
        const EMBOSSED = 1 << 2;
        const HANDHELD = 1 << 3;
        const PRINT = 1 << 4;
        const PROJECTION = 1 << 5;
        const SCREEN = 1 << 6;
        const SPEECH = 1 << 7;
        const TTY = 1 << 8;
        const TV = 1 << 9;
        const ALL = Self::AURAL.bits() |
            Self::BRAILLE.bits() |
            Self::EMBOSSED.bits() |
            Self::HANDHELD.bits() |
            Self::PRINT.bits() |
            Self::PROJECTION.bits() |
            Self::SCREEN.bits() |
            Self::SPEECH.bits() |
            Self::TTY.bits() |
            Self::TV.bits();
    }
}

impl MediaType {
    /// Parses a single media type name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "all" => MediaType::ALL,
            "aural" => MediaType::AURAL,
            "braille" => MediaType::BRAILLE,
            "embossed" => MediaType::EMBOSSED,
            "handheld" => MediaType::HANDHELD,
            "print" => MediaType::PRINT,
            "projection" => MediaType::PROJECTION,
            "screen" => MediaType::SCREEN,
            "speech" => MediaType::SPEECH,
            "tty" => MediaType::TTY,
            "tv" => MediaType::TV,
            _ => return None,
        })
    }
}

/// A [media query][mq].
///
/// [mq]: https://drafts.csswg.org/mediaqueries/
#[derive(Clone, Debug, PartialEq)]
pub struct MediaQuery {
    /// Whether the query was qualified with `not`.
    pub negate_type: bool,
    /// The media types this query applies to.
    pub media_type: MediaType,
    /// The condition that follows the media type, if any.
    pub condition: Option<MediaCondition>,
}

impl MediaQuery {
    pub fn new(negate_type: bool, media_type: MediaType, condition: Option<MediaCondition>) -> Self {
        MediaQuery {
            negate_type,
            media_type,
            condition,
        }
    }

    /// A bare condition such as `(min-width: 100px)`, which applies to
    /// every media type.
    pub fn from_condition(condition: MediaCondition) -> Self {
        Self::new(false, MediaType::ALL, Some(condition))
    }

    /// A query that never matches, used in place of queries that failed to
    /// parse.
    pub fn never_matching() -> Self {
        Self::new(true, MediaType::ALL, None)
    }

    /// Whether this query matches `media`.
    ///
    /// `not` negates the media type test only; the condition must hold
    /// either way.
    pub fn matches(&self, context: &UnitContext, media: &Media) -> bool {
        let type_match = self.media_type.intersects(media.media_type);
        if type_match == self.negate_type {
            return false;
        }

        self.condition
            .as_ref()
            .map_or(true, |condition| condition.matches(context, media))
    }
}
