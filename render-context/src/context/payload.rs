//! The deep-copy contract for context payloads.
//!
//! A provider never publishes the caller's value; it publishes a copy that
//! shares no mutable substructure with the original. Types opt in by
//! implementing [`DeepCopy`].
//!
//! Legal payloads are owned plain data: scalars, strings, JSON values, ids,
//! timestamps, and the std collections of those. Shared-ownership and
//! interior-mutability types (`Rc`, `Arc`, `RefCell`, `Mutex`, channels,
//! file or socket handles, closures) have no implementation, so a context
//! carrying one is rejected at compile time. Serializable types that are
//! not plain data can be wrapped in [`Json`] to copy through serde.
//!
//! Map keys and set elements are copied with `Clone`, not [`DeepCopy`].
//! They must be plain values whose clone is already deep (strings,
//! integers, ids); a key type with shared or interior-mutable state is not
//! a legal payload even though it compiles.

use crate::errors::CopyError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::ops::{Deref, DerefMut};

/// A value that can produce a copy with no shared mutable state.
pub trait DeepCopy: Sized {
    /// Returns an independent copy of `self`.
    ///
    /// # Errors
    ///
    /// Returns `CopyError` if some part of the value cannot be copied.
    fn deep_copy(&self) -> Result<Self, CopyError>;
}

/// Implements [`DeepCopy`] through `Clone` for types whose clone is
/// already deep (owned fields only, no `Rc`/`Arc`/cells).
///
/// ```rust,ignore
/// #[derive(Clone)]
/// struct Theme { accent: String, dark: bool }
///
/// render_context::impl_deep_copy_via_clone!(Theme);
/// ```
#[macro_export]
macro_rules! impl_deep_copy_via_clone {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::context::DeepCopy for $ty {
                fn deep_copy(&self) -> ::std::result::Result<Self, $crate::errors::CopyError> {
                    ::std::result::Result::Ok(::std::clone::Clone::clone(self))
                }
            }
        )+
    };
}

impl_deep_copy_via_clone!(
    (),
    bool,
    char,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    f32,
    f64,
    String,
    serde_json::Value,
    uuid::Uuid,
    chrono::DateTime<chrono::Utc>,
    std::time::Duration,
);

impl<T: DeepCopy> DeepCopy for Option<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.as_ref().map(DeepCopy::deep_copy).transpose()
    }
}

impl<T: DeepCopy> DeepCopy for Box<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(Box::new((**self).deep_copy()?))
    }
}

impl<T: DeepCopy> DeepCopy for Vec<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

impl<T: DeepCopy> DeepCopy for VecDeque<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter().map(DeepCopy::deep_copy).collect()
    }
}

// Keys are cloned; see the module docs for the key rule.
impl<K, V, S> DeepCopy for HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: DeepCopy,
    S: std::hash::BuildHasher + Clone,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let mut copy = Self::with_capacity_and_hasher(self.len(), self.hasher().clone());
        for (key, value) in self {
            copy.insert(key.clone(), value.deep_copy()?);
        }
        Ok(copy)
    }
}

impl<K: Clone + Ord, V: DeepCopy> DeepCopy for BTreeMap<K, V> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        self.iter()
            .map(|(key, value)| Ok((key.clone(), value.deep_copy()?)))
            .collect()
    }
}

impl<T, S> DeepCopy for HashSet<T, S>
where
    T: Clone + Eq + Hash,
    S: std::hash::BuildHasher + Clone,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}

impl<T: Clone + Ord> DeepCopy for BTreeSet<T> {
    fn deep_copy(&self) -> Result<Self, CopyError> {
        Ok(self.clone())
    }
}

macro_rules! impl_deep_copy_tuple {
    ($($name:ident),+) => {
        impl<$($name: DeepCopy),+> DeepCopy for ($($name,)+) {
            #[allow(non_snake_case)]
            fn deep_copy(&self) -> Result<Self, CopyError> {
                let ($($name,)+) = self;
                Ok(($($name.deep_copy()?,)+))
            }
        }
    };
}

impl_deep_copy_tuple!(A);
impl_deep_copy_tuple!(A, B);
impl_deep_copy_tuple!(A, B, C);
impl_deep_copy_tuple!(A, B, C, D);

/// Copies any serde type by round-tripping it through `serde_json::Value`.
///
/// This is the structural-clone route: it works for anything that
/// serializes losslessly and fails with [`CopyError`] for anything that
/// refuses to serialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    /// Consumes the wrapper, returning the inner value.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for Json<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Json<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T> DeepCopy for Json<T>
where
    T: Serialize + DeserializeOwned,
{
    fn deep_copy(&self) -> Result<Self, CopyError> {
        let value = serde_json::to_value(&self.0)
            .map_err(|e| CopyError::new::<T>(format!("serialize failed: {e}")))?;
        let copy = serde_json::from_value(value)
            .map_err(|e| CopyError::new::<T>(format!("deserialize failed: {e}")))?;
        Ok(Self(copy))
    }
}
