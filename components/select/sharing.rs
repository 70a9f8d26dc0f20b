/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! A pool of computed styles, so that elements whose styles come out
//! identical can share a single allocation.
//!
//! The pool holds at most one canonical instance per distinct style.
//! Lookups only need a shared lock; inserting takes the exclusive one.

use std::hash::{Hash, Hasher};

use log::trace;
use parking_lot::RwLock;
use rustc_hash::{FxHashMap, FxHasher};
use servo_arc::Arc;
use smallvec::SmallVec;

use crate::error::Result;
use crate::prefs;
use crate::properties::ComputedStyle;

/// Styles whose hashes collide. Collisions are rare, so one inline entry is
/// enough.
type Bin = SmallVec<[Arc<ComputedStyle>; 1]>;

fn hash_style(style: &ComputedStyle) -> u64 {
    let mut hasher = FxHasher::default();
    style.hash(&mut hasher);
    hasher.finish()
}

fn find(bin: &Bin, style: &ComputedStyle) -> Option<Arc<ComputedStyle>> {
    bin.iter().find(|candidate| ***candidate == *style).cloned()
}

pub struct StylePool {
    bins: RwLock<FxHashMap<u64, Bin>>,
    sharing: bool,
}

impl Default for StylePool {
    fn default() -> Self {
        Self::new()
    }
}

impl StylePool {
    /// A pool that shares styles unless the preferences disable it.
    pub fn new() -> Self {
        Self::with_sharing(prefs::get_bool(prefs::STYLE_SHARING_ENABLED))
    }

    pub fn with_sharing(sharing: bool) -> Self {
        StylePool {
            bins: RwLock::new(FxHashMap::default()),
            sharing,
        }
    }

    #[inline]
    pub fn is_sharing(&self) -> bool {
        self.sharing
    }

    /// Returns the canonical instance of `style`, adding it to the pool if
    /// there is none yet.
    ///
    /// When sharing is off every call returns a fresh, unshared style.
    pub fn intern(&self, style: ComputedStyle) -> Result<Arc<ComputedStyle>> {
        if !self.sharing {
            return Ok(Arc::new(style));
        }

        let hash = hash_style(&style);
        if let Some(shared) = self.bins.read().get(&hash).and_then(|bin| find(bin, &style)) {
            trace!("Style pool hit ({:#x})", hash);
            return Ok(shared);
        }

        let mut bins = self.bins.write();
        // Another thread may have inserted it between the two locks.
        if let Some(shared) = bins.get(&hash).and_then(|bin| find(bin, &style)) {
            trace!("Style pool hit ({:#x})", hash);
            return Ok(shared);
        }

        trace!("Style pool miss ({:#x})", hash);
        bins.try_reserve(1)?;
        let style = Arc::new(style);
        bins.entry(hash).or_default().push(style.clone());
        Ok(style)
    }

    /// Whether `style` is the canonical instance held by this pool.
    pub fn contains(&self, style: &Arc<ComputedStyle>) -> bool {
        self.bins
            .read()
            .get(&hash_style(style))
            .is_some_and(|bin| bin.iter().any(|s| Arc::ptr_eq(s, style)))
    }

    /// Drops every style nobody but the pool refers to, and returns how many
    /// were dropped.
    pub fn purge(&self) -> usize {
        let mut bins = self.bins.write();
        let before = bins.values().map(|bin| bin.len()).sum::<usize>();
        bins.retain(|_, bin| {
            bin.retain(|style| !style.is_unique());
            !bin.is_empty()
        });
        let purged = before - bins.values().map(|bin| bin.len()).sum::<usize>();
        trace!("Purged {} pooled styles", purged);
        purged
    }

    /// Number of canonical styles in the pool.
    pub fn len(&self) -> usize {
        self.bins.read().values().map(|bin| bin.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.read().is_empty()
    }

    pub fn clear(&self) {
        self.bins.write().clear();
    }
}
