//! Typed Ids

use std::{
    cmp::Ordering,
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    hash::{Hash, Hasher},
    marker::PhantomData,
};

/// An integer surrogate key tagged with the entity it identifies, so ids of
/// different tables cannot be mixed up. Ids are allocated monotonically per
/// table, starting at 1.
pub struct TypedId<T>(i64, PhantomData<T>);

impl<T> TypedId<T> {
    /// Wraps a raw id.
    #[must_use]
    pub const fn from_i64(id: i64) -> Self {
        Self(id, PhantomData)
    }

    /// The raw id.
    #[must_use]
    pub const fn into_i64(self) -> i64 {
        self.0
    }
}

impl<T> Clone for TypedId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedId<T> {}

impl<T> Debug for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Debug::fmt(&self.0, f)
    }
}

impl<T> Display for TypedId<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        Display::fmt(&self.0, f)
    }
}

impl<T> PartialEq for TypedId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for TypedId<T> {}

impl<T> Hash for TypedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

impl<T> PartialOrd for TypedId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TypedId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T> From<i64> for TypedId<T> {
    fn from(value: i64) -> Self {
        Self::from_i64(value)
    }
}

impl<T> From<TypedId<T>> for i64 {
    fn from(value: TypedId<T>) -> Self {
        value.into_i64()
    }
}

/// Marker for user ids. Users have no stored record here; identity arrives
/// from the request layer already resolved.
#[derive(Debug, Clone, Copy)]
pub struct User;

/// User id
pub type UserId = TypedId<User>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_of_the_same_table_compare_by_value() {
        assert_eq!(UserId::from_i64(1), UserId::from_i64(1));
        assert!(UserId::from_i64(1) < UserId::from_i64(2));
    }

    #[test]
    fn raw_value_round_trips() {
        assert_eq!(UserId::from_i64(7).into_i64(), 7);
        assert_eq!(i64::from(UserId::from(7)), 7);
    }
}
