#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

/// A set of item ids borrowed from the inputs of a selection operation.
#[cfg(feature = "std")]
pub(crate) type IdSet<'a> = HashSet<&'a str>;
#[cfg(not(feature = "std"))]
pub(crate) type IdSet<'a> = BTreeSet<&'a str>;
