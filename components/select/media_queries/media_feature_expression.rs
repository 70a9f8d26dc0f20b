/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Parsed representation of media feature expressions, like `(width >=
//! 100px)` or `(prefers-color-scheme: dark)`.

use log::debug;

use super::Media;
use crate::atom::Atom;
use crate::fixed::Fixed;
use crate::unit::UnitContext;
use crate::values::{Length, Unit};

/// How a feature value relates to the environment.
///
/// In the first comparison of an expression the query value is on the
/// left (`100px <= width`); in the second it is on the right (`width <=
/// 600px`). `min-` and `max-` prefixes map onto the first comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Comparison {
    /// A boolean context test, such as `(prefers-color-scheme)`.
    Bool,
    Lt,
    Lte,
    Eq,
    Gte,
    Gt,
    /// No second comparison.
    Unused,
}

impl Comparison {
    fn compare(self, left: Fixed, right: Fixed) -> bool {
        match self {
            Comparison::Lt => left < right,
            Comparison::Lte => left <= right,
            Comparison::Eq => left == right,
            Comparison::Gte => left >= right,
            Comparison::Gt => left > right,
            Comparison::Bool | Comparison::Unused => false,
        }
    }
}

/// A value in a media feature expression.
#[derive(Clone, Debug, PartialEq)]
pub enum FeatureValue {
    Dimension(Length),
    Ident(Atom),
    Number(Fixed),
    Ratio(Fixed, Fixed),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Feature {
    Width,
    Height,
    PrefersColorScheme,
}

impl Feature {
    fn from_name(name: &str) -> Option<Self> {
        Some(match name.to_ascii_lowercase().as_str() {
            "width" => Feature::Width,
            "height" => Feature::Height,
            "prefers-color-scheme" => Feature::PrefersColorScheme,
            _ => return None,
        })
    }
}

/// A media feature expression.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaFeatureExpression {
    pub name: Atom,
    pub op: Comparison,
    pub value: Option<FeatureValue>,
    pub op2: Comparison,
    pub value2: Option<FeatureValue>,
}

impl MediaFeatureExpression {
    /// `(name)`.
    pub fn boolean(name: &str) -> Self {
        MediaFeatureExpression {
            name: Atom::new(name),
            op: Comparison::Bool,
            value: None,
            op2: Comparison::Unused,
            value2: None,
        }
    }

    /// `(name: value)`.
    pub fn equals(name: &str, value: FeatureValue) -> Self {
        Self::compare(name, Comparison::Eq, value)
    }

    /// `value op name`.
    pub fn compare(name: &str, op: Comparison, value: FeatureValue) -> Self {
        MediaFeatureExpression {
            name: Atom::new(name),
            op,
            value: Some(value),
            op2: Comparison::Unused,
            value2: None,
        }
    }

    /// `(min-name: value)`, that is `value <= name`.
    pub fn min(name: &str, value: FeatureValue) -> Self {
        Self::compare(name, Comparison::Lte, value)
    }

    /// `(max-name: value)`, that is `value >= name`.
    pub fn max(name: &str, value: FeatureValue) -> Self {
        Self::compare(name, Comparison::Gte, value)
    }

    /// `value op name op2 value2`.
    pub fn range(
        value: FeatureValue,
        op: Comparison,
        name: &str,
        op2: Comparison,
        value2: FeatureValue,
    ) -> Self {
        MediaFeatureExpression {
            name: Atom::new(name),
            op,
            value: Some(value),
            op2,
            value2: Some(value2),
        }
    }

    /// Whether this expression matches `media`. Features we do not know
    /// never match.
    pub fn matches(&self, context: &UnitContext, media: &Media) -> bool {
        let feature = match Feature::from_name(&self.name) {
            Some(feature) => feature,
            None => {
                debug!("Unknown media feature {:?}", self.name);
                return false;
            },
        };

        match feature {
            Feature::Width => self.matches_length(context, media.width),
            Feature::Height => self.matches_length(context, media.height),
            Feature::PrefersColorScheme => {
                self.op == Comparison::Bool ||
                    self.matches_ident(media.prefers_color_scheme.as_ref())
            },
        }
    }

    fn matches_length(&self, context: &UnitContext, client: Fixed) -> bool {
        let to_px = |value: Option<&FeatureValue>| match value {
            Some(&FeatureValue::Dimension(length)) if length.unit == Unit::Px => Some(length.value),
            Some(&FeatureValue::Dimension(length)) => Some(context.len2px_mq(length)),
            _ => None,
        };

        let first = match to_px(self.value.as_ref()) {
            Some(v) => self.op.compare(v, client),
            None => false,
        };
        if !first {
            return false;
        }

        if self.op2 == Comparison::Unused {
            return true;
        }
        match to_px(self.value2.as_ref()) {
            Some(v) => self.op2.compare(client, v),
            None => false,
        }
    }

    fn matches_ident(&self, client: Option<&Atom>) -> bool {
        match (self.op, self.value.as_ref(), client) {
            (Comparison::Eq, Some(FeatureValue::Ident(ident)), Some(client)) => {
                ident.eq_ignore_ascii_case(client)
            },
            _ => false,
        }
    }
}
