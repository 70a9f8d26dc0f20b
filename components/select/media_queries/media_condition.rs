/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A media query condition:
//!
//! https://drafts.csswg.org/mediaqueries-4/#typedef-media-condition

use super::{Media, MediaFeatureExpression};
use crate::unit::UnitContext;

/// A binary `and` or `or` operator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Operator {
    And,
    Or,
}

/// Represents a media condition.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaCondition {
    /// A simple media feature expression, implicitly parenthesized.
    Feature(MediaFeatureExpression),
    /// A group of conditions joined by one operator, optionally negated
    /// as a whole.
    Operation {
        operator: Operator,
        negated: bool,
        parts: Box<[MediaCondition]>,
    },
}

impl MediaCondition {
    pub fn and(parts: Vec<MediaCondition>) -> Self {
        MediaCondition::Operation {
            operator: Operator::And,
            negated: false,
            parts: parts.into_boxed_slice(),
        }
    }

    pub fn or(parts: Vec<MediaCondition>) -> Self {
        MediaCondition::Operation {
            operator: Operator::Or,
            negated: false,
            parts: parts.into_boxed_slice(),
        }
    }

    /// `not <condition>`.
    pub fn not(condition: MediaCondition) -> Self {
        match condition {
            MediaCondition::Operation {
                operator,
                negated,
                parts,
            } => MediaCondition::Operation {
                operator,
                negated: !negated,
                parts,
            },
            feature => MediaCondition::Operation {
                operator: Operator::And,
                negated: true,
                parts: Box::new([feature]),
            },
        }
    }

    /// Whether this condition matches `media`.
    ///
    /// Parts are evaluated in order and evaluation stops as soon as the
    /// result is known, so an empty `and` matches and an empty `or` does
    /// not.
    pub fn matches(&self, context: &UnitContext, media: &Media) -> bool {
        match *self {
            MediaCondition::Feature(ref f) => f.matches(context, media),
            MediaCondition::Operation {
                operator,
                negated,
                ref parts,
            } => {
                let mut parts = parts.iter();
                let matched = match operator {
                    Operator::And => parts.all(|c| c.matches(context, media)),
                    Operator::Or => parts.any(|c| c.matches(context, media)),
                };
                matched != negated
            },
        }
    }
}
