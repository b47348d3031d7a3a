//! Predicate abstraction for filter entries.
//!
//! A predicate is any `Fn(&T) -> bool` closure (or hand-written type) that
//! answers yes/no for a single element. Registries store predicates erased
//! behind `Arc`, which also gives callers a stable identity for targeted
//! removal via [`Arc::ptr_eq`].

use std::sync::Arc;

/// A boolean test over a single element type.
pub trait Predicate<T>: Send + Sync {
    /// Returns true if the element passes the predicate.
    fn test(&self, value: &T) -> bool;
}

impl<T, F> Predicate<T> for F
where
    F: Fn(&T) -> bool + Send + Sync,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// A reference-counted, type-erased predicate.
///
/// Registering through [`FilterSet::add_shared`](crate::FilterSet::add_shared)
/// and keeping a clone of the `Arc` lets the caller later remove exactly that
/// entry with [`FilterSet::remove_predicate`](crate::FilterSet::remove_predicate).
/// Identity is pointer identity: two separately constructed but
/// equal-looking closures never match each other.
pub type SharedPredicate<T> = Arc<dyn Predicate<T> + 'static>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_implements_predicate() {
        let even = |x: &i32| x % 2 == 0;
        assert!(even.test(&4));
        assert!(!even.test(&3));
    }

    #[test]
    fn shared_predicate_is_callable_through_erasure() {
        let p: SharedPredicate<i32> = Arc::new(|x: &i32| *x > 10);
        assert!(p.test(&11));
        assert!(!p.test(&10));
    }

    #[test]
    fn shared_predicate_identity_is_per_allocation() {
        let a: SharedPredicate<i32> = Arc::new(|x: &i32| *x > 0);
        let b: SharedPredicate<i32> = Arc::new(|x: &i32| *x > 0);
        assert!(Arc::ptr_eq(&a, &a.clone()));
        assert!(!Arc::ptr_eq(&a, &b));
    }
}
