//! predset - Grouped predicate registry with two-level boolean evaluation
//!
//! This crate provides a reusable predicate-combination utility:
//! - Register any number of named, grouped boolean predicates over a generic
//!   element type (`FilterSet::add`, `FilterSet::add_with`)
//! - Apply all of them to a sequence, keeping the elements that satisfy the
//!   combined expression (`FilterSet::apply_filters`)
//!
//! Predicates sharing a group are combined with logical OR; distinct groups
//! are combined with logical AND. That two-level shape is the whole engine:
//! there is no expression-tree or query-compilation layer.
//!
//! # Empty-set policy
//!
//! A `FilterSet` with no registered filters **excludes everything**:
//! `apply_filters` returns an empty result rather than passing the input
//! through unchanged. This surprises callers expecting identity behavior for
//! an unconfigured set, so it is stated here once more on purpose.
//!
//! # Concurrency
//!
//! All operations are synchronous and the set does no internal locking. For
//! concurrent mutation and evaluation, wrap the set in an external mutual
//! exclusion boundary.

pub mod error;
pub mod predicate;
pub mod set;

mod ident;


pub use error::{FilterError, Result};
pub use predicate::{Predicate, SharedPredicate};
pub use set::{FilterHandle, FilterSet};
