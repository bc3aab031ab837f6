// Copyright 2026 the plainset developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # plainset
//! A plain, unordered, in-memory set of unique elements, with bulk mutation
//! operations that report whether the set changed.
//!
//! `PlainSet` is backed by a hash map from each element to a `()` presence
//! marker, so membership checks and single-element mutations are amortized
//! O(1) and bulk operations are O(n) in the input size. Besides the usual
//! `insert`/`remove`/`contains`, it carries the bulk forms `insert_all`,
//! `remove_all` and `retain_all`, each returning `true` iff the call
//! actually changed the membership. This makes it a drop-in home for code
//! ported from collection frameworks with `addAll`/`removeAll`/`retainAll`
//! style contracts.
//!
//! The set provides no internal synchronization; wrap it in a lock if it
//! must be shared across threads.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! plainset = "0.1.0"
//! ```
//!
//! and then:
//!
//! ```rust
//! use plainset::plain_set::PlainSet;
//!
//! let mut set = PlainSet::new();
//! set.insert_all(vec![1, 2, 3]);
//! assert!(set.contains_all(&[1, 2]));
//! ```

pub mod plain_set;

/// Creates a [`PlainSet`] containing the arguments.
///
/// `plainset!` allows `PlainSet`s to be defined with the same syntax as
/// array expressions. Duplicates among the arguments collapse silently:
///
/// ```
/// use plainset::plainset;
/// use plainset::plain_set::PlainSet;
///
/// let s: PlainSet<i32> = plainset![1, 2, 3, 2];
/// assert_eq!(s.len(), 3);
/// assert!(s.contains(&1));
/// assert!(s.contains(&2));
/// assert!(s.contains(&3));
///
/// let empty: PlainSet<i32> = plainset![];
/// assert!(empty.is_empty());
/// ```
///
/// [`PlainSet`]: plain_set/struct.PlainSet.html
#[macro_export]
macro_rules! plainset {
    ($($x:expr),*$(,)*) => ({
        let mut set = $crate::plain_set::PlainSet::new();
        $(set.insert($x);)*
        set
    });
}
