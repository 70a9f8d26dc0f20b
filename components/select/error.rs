/* This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/. */

//! Errors reported by style selection.

use std::collections::TryReserveError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// An allocation for a side array or a pooled style failed.
    OutOfMemory,
    /// Raw data did not describe a valid value.
    Invalid,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::OutOfMemory => f.write_str("out of memory"),
            Error::Invalid => f.write_str("invalid value"),
        }
    }
}

impl std::error::Error for Error {}

impl From<TryReserveError> for Error {
    fn from(err: TryReserveError) -> Self {
        log::warn!("Allocation failed: {}", err);
        Error::OutOfMemory
    }
}

/// Clones a slice into a freshly allocated boxed slice, reporting allocation
/// failure instead of aborting.
pub fn try_clone_slice<T: Clone>(items: &[T]) -> Result<Box<[T]>> {
    let mut vec = Vec::new();
    vec.try_reserve_exact(items.len())?;
    vec.extend_from_slice(items);
    Ok(vec.into_boxed_slice())
}
