/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Items of the `content`, `counter-increment` and `counter-reset`
//! properties.

#[cfg(feature = "servo")]
use serde::{Deserialize, Serialize};

use crate::atom::Atom;
use crate::fixed::Fixed;
use crate::properties::keywords::ListStyleType;

/// A named counter with its increment or reset value.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub struct Counter {
    pub name: Atom,
    pub value: Fixed,
}

impl Counter {
    pub fn new(name: Atom, value: Fixed) -> Counter {
        Counter { name, value }
    }
}

/// One token of generated content.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "servo", derive(Deserialize, Serialize))]
pub enum ContentItem {
    String(Atom),
    Uri(Atom),
    /// `attr(name)`
    Attr(Atom),
    /// `counter(name, style)`
    Counter { name: Atom, style: ListStyleType },
    /// `counters(name, separator, style)`
    Counters {
        name: Atom,
        separator: Atom,
        style: ListStyleType,
    },
    OpenQuote,
    CloseQuote,
    NoOpenQuote,
    NoCloseQuote,
}
