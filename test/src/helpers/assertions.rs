/// Assert that an entity currently owns no native object.
#[macro_export]
macro_rules! assert_detached {
    ($entity:expr) => {
        assert!(
            !$entity.has_native(),
            "expected no native object, found {:?}",
            $entity.native_address()
        );
    };
}

/// Assert that an entity is live at exactly the given native address.
/// Identity matters: a merely non-null address is not enough to prove a
/// transfer re-pointed an existing object instead of allocating.
#[macro_export]
macro_rules! assert_live_at {
    ($entity:expr, $id:expr) => {
        assert_eq!(
            $entity.native_address(),
            Some($id),
            "expected a live native at {}",
            $id
        );
    };
}
