/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A media query list:
//!
//! https://drafts.csswg.org/mediaqueries/#typedef-media-query-list

use super::{Media, MediaQuery};
use crate::unit::UnitContext;

/// A type that encapsulates a media query list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MediaList {
    /// The list of media queries.
    pub media_queries: Vec<MediaQuery>,
}

impl MediaList {
    pub fn new(media_queries: Vec<MediaQuery>) -> Self {
        MediaList { media_queries }
    }

    /// Create an empty MediaList.
    pub fn empty() -> Self {
        MediaList {
            media_queries: vec![],
        }
    }

    /// Evaluate a whole `MediaList` against `media`. The queries are
    /// alternatives, so a list with none of them never matches.
    pub fn evaluate(&self, context: &UnitContext, media: &Media) -> bool {
        self.media_queries
            .iter()
            .any(|query| query.matches(context, media))
    }

    /// Whether this `MediaList` contains no media queries.
    pub fn is_empty(&self) -> bool {
        self.media_queries.is_empty()
    }
}
