use std::fmt;
use std::sync::Arc;

/// Opaque identity of an `Arc`-managed object.
///
/// Derived from the address of the object's shared allocation. Two clones of
/// the same `Arc` have the same identity; two distinct allocations never do
/// while both are alive. The identity is a lookup key only and is never
/// turned back into a pointer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIdentity(usize);

impl ObjectIdentity {
    /// Identity of the object behind `obj`.
    pub fn of<T: ?Sized>(obj: &Arc<T>) -> Self {
        Self(Arc::as_ptr(obj).cast::<()>() as usize)
    }

    /// The raw address value.
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectIdentity({self})")
    }
}

impl fmt::Display for ObjectIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "obj:{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_identity() {
        let a = Arc::new(7u32);
        let b = Arc::clone(&a);
        assert_eq!(ObjectIdentity::of(&a), ObjectIdentity::of(&b));
    }

    #[test]
    fn distinct_allocations_differ() {
        let a = Arc::new(7u32);
        let b = Arc::new(7u32);
        assert_ne!(ObjectIdentity::of(&a), ObjectIdentity::of(&b));
    }

    #[test]
    fn unsized_objects_have_identity() {
        let s: Arc<str> = Arc::from("hello");
        let d: Arc<dyn fmt::Debug + Send + Sync> = Arc::new(1u8);
        assert_ne!(ObjectIdentity::of(&s), ObjectIdentity::of(&d));
    }

    #[test]
    fn display_is_hex() {
        let a = Arc::new(());
        let id = ObjectIdentity::of(&a);
        assert!(id.to_string().starts_with("obj:0x"));
        assert_eq!(id.to_string(), format!("obj:{:#x}", id.as_usize()));
        assert_eq!(format!("{id:?}"), format!("ObjectIdentity({id})"));
    }
}
