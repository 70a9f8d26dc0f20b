/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! The rule tree of a stylesheet, as far as media matching needs it.

use std::iter;

use servo_arc::Arc;

use crate::atom::Atom;
use crate::media_queries::{Media, MediaList};
use crate::unit::UnitContext;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum CssRuleType {
    // https://drafts.csswg.org/cssom/#the-cssrule-interface
    Style = 1,
    Import = 3,
    Media = 4,
}

/// What a rule holds.
#[derive(Debug)]
pub enum CssRuleKind {
    Style,
    Import { url: Atom, media: MediaList },
    Media(MediaList),
}

/// A rule and a link to the rule that encloses it. Top-level rules have no
/// parent; their parent is the stylesheet itself.
#[derive(Debug)]
pub struct CssRule {
    kind: CssRuleKind,
    parent: Option<Arc<CssRule>>,
}

impl CssRule {
    pub fn top_level(kind: CssRuleKind) -> Arc<CssRule> {
        Arc::new(CssRule { kind, parent: None })
    }

    pub fn nested(kind: CssRuleKind, parent: &Arc<CssRule>) -> Arc<CssRule> {
        Arc::new(CssRule {
            kind,
            parent: Some(parent.clone()),
        })
    }

    #[inline]
    pub fn kind(&self) -> &CssRuleKind {
        &self.kind
    }

    #[inline]
    pub fn parent(&self) -> Option<&Arc<CssRule>> {
        self.parent.as_ref()
    }

    pub fn rule_type(&self) -> CssRuleType {
        match self.kind {
            CssRuleKind::Style => CssRuleType::Style,
            CssRuleKind::Import { .. } => CssRuleType::Import,
            CssRuleKind::Media(..) => CssRuleType::Media,
        }
    }

    /// This rule followed by its enclosing rules, innermost first.
    pub fn ancestors(&self) -> impl Iterator<Item = &CssRule> {
        iter::successors(Some(self), |rule| rule.parent.as_deref())
    }

    /// How deeply this rule is nested in other rules.
    pub fn depth(&self) -> usize {
        self.ancestors().count() - 1
    }
}

/// Whether `rule` applies to `media`: every `@media` rule enclosing it,
/// itself included, must match.
///
/// The media list of an `@import` belongs to the imported sheet and is
/// checked when the import is followed, not here.
pub fn rule_good_for_media(rule: &CssRule, context: &UnitContext, media: &Media) -> bool {
    rule.ancestors().all(|ancestor| match ancestor.kind {
        CssRuleKind::Media(ref list) => list.evaluate(context, media),
        _ => true,
    })
}
