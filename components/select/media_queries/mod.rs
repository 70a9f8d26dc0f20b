/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! [Media queries][mq].
//!
//! [mq]: https://drafts.csswg.org/mediaqueries/

mod media_condition;
mod media_list;
mod media_query;
pub mod media_feature_expression;

#[cfg(feature = "servo")]
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::fixed::Fixed;

pub use self::media_condition::{MediaCondition, Operator};
pub use self::media_feature_expression::{Comparison, FeatureValue, MediaFeatureExpression};
pub use self::media_list::MediaList;
pub use self::media_query::{MediaQuery, MediaType};

/// The medium a document is presented on, as media queries see it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct Media {
    pub media_type: MediaType,
    /// Viewport width in CSS pixels.
    pub width: Fixed,
    /// Viewport height in CSS pixels.
    pub height: Fixed,
    /// The user's preferred color scheme, if they have one.
    pub prefers_color_scheme: Option<Atom>,
}

impl Media {
    pub fn new(media_type: MediaType, width: Fixed, height: Fixed) -> Self {
        Media {
            media_type,
            width,
            height,
            prefers_color_scheme: None,
        }
    }

    /// A screen of the given size.
    pub fn screen(width: Fixed, height: Fixed) -> Self {
        Self::new(MediaType::SCREEN, width, height)
    }

    pub fn with_color_scheme(mut self, scheme: &str) -> Self {
        self.prefers_color_scheme = Some(Atom::new(scheme));
        self
    }
}
