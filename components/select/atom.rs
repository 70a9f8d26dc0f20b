/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Interned strings.
//!
//! Font family names, content strings, counter names and URLs are shared by
//! many styles. The characters live once in `string_cache`'s process-wide
//! set, which frees a dynamic string when its last atom goes away. A style
//! holds a string through a reference-counted [`Atom`] handle: cloning the
//! handle takes a reference and dropping it releases one.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

use string_cache::DefaultAtom;

#[derive(Clone)]
pub struct Atom(Arc<DefaultAtom>);

impl Atom {
    /// Interns `string`.
    pub fn new(string: &str) -> Atom {
        Atom(Arc::new(DefaultAtom::from(string)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of live references to this handle.
    #[inline]
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }

    /// Whether both are the same handle, not merely the same string.
    #[inline]
    pub fn ptr_eq(&self, other: &Atom) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn eq_ignore_ascii_case(&self, other: &Atom) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialEq for Atom {
    #[inline]
    fn eq(&self, other: &Atom) -> bool {
        self.ptr_eq(other) || *self.0 == *other.0
    }
}

impl Eq for Atom {}

impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state)
    }
}

impl Deref for Atom {
    type Target = str;

    #[inline]
    fn deref(&self) -> &str {
        &self.0
    }
}

impl<'a> From<&'a str> for Atom {
    #[inline]
    fn from(string: &'a str) -> Atom {
        Atom::new(string)
    }
}

impl fmt::Debug for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Atom({:?})", self.as_str())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(feature = "servo")]
impl serde::Serialize for Atom {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "servo")]
impl<'de> serde::Deserialize<'de> for Atom {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Atom, D::Error> {
        let string = String::deserialize(deserializer)?;
        Ok(Atom::new(&string))
    }
}
