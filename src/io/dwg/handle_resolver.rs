//! Two-phase handle resolution.
//!
//! Decoding a DWG object stream discovers references to other objects
//! before those objects necessarily exist in the document (a block record
//! owns entities that back-reference the block; the block may not have
//! been read yet). Rather than storing raw pointers — which would make the
//! inherently cyclic drawing graph impossible to express with single
//! ownership — every reference is recorded as a [`Reference`] during
//! decode, and bound to an object index in a single second pass once every
//! object has been read.

use crate::io::dwg::reference_type::HandleReference;

/// Position of an [`crate::document::CadDocument`] object in its owning
/// sequence. Stable for the lifetime of the document.
pub type ObjectIndex = u32;

/// A handle-reference field observed while decoding an object.
///
/// `handleref` is the raw three-field handle as read off the wire.
/// `absolute_ref` is computed at read time from `handleref.code` and the
/// owning object's own absolute handle (see the table in the object
/// decoder). `bound_object` starts empty and is filled in by
/// [`HandleResolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reference {
    /// The raw handle as read from the object's handle stream.
    pub handleref: HandleReference,
    /// The absolute handle value this reference points at.
    pub absolute_ref: u64,
    /// The index of the object in the document's object sequence whose
    /// `handle.value()` equals `absolute_ref`, once resolved.
    pub bound_object: Option<ObjectIndex>,
}

impl Reference {
    /// Build an unresolved reference with a known absolute target.
    pub fn new(handleref: HandleReference, absolute_ref: u64) -> Self {
        Self {
            handleref,
            absolute_ref,
            bound_object: None,
        }
    }

    /// Whether this reference has been bound to an object.
    pub fn is_resolved(&self) -> bool {
        self.bound_object.is_some()
    }
}

/// A function that maps an absolute handle value to the object holding it,
/// used by [`HandleResolver::resolve`] so callers can supply either a
/// linear scan or a pre-built hash index without this module depending on
/// [`crate::document::CadDocument`] directly.
pub trait HandleIndex {
    /// Look up the object index whose handle value equals `value`.
    fn find(&self, value: u64) -> Option<ObjectIndex>;
}

/// A simple `handle.value() -> ObjectIndex` table, built once from the
/// document's object sequence and reused across every reference.
#[derive(Debug, Default)]
pub struct HandleTable {
    by_value: std::collections::HashMap<u64, ObjectIndex>,
}

impl HandleTable {
    /// Build a lookup table from `(index, handle_value)` pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ObjectIndex, u64)>) -> Self {
        Self {
            by_value: pairs.into_iter().map(|(i, v)| (v, i)).collect(),
        }
    }
}

impl HandleIndex for HandleTable {
    fn find(&self, value: u64) -> Option<ObjectIndex> {
        self.by_value.get(&value).copied()
    }
}

/// Errors specific to the resolution pass.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleResolverError {
    /// Resolution was invoked with an empty work list, which signals a
    /// malformed file — a drawing with zero outgoing references never
    /// occurs in practice.
    #[error("handle resolver invoked with an empty reference work list")]
    EmptyWorkList,
}

/// Runs the single resolution pass over a [`Reference`] work list.
pub struct HandleResolver;

impl HandleResolver {
    /// Bind every unresolved `Reference.bound_object` by looking up its
    /// `absolute_ref` in `index`, in work-list order. References whose
    /// target is not found are left unresolved (a warning, not an error).
    ///
    /// Fails only when `references` is empty, per the documented contract.
    pub fn resolve(
        references: &mut [Reference],
        index: &dyn HandleIndex,
    ) -> Result<usize, HandleResolverError> {
        if references.is_empty() {
            return Err(HandleResolverError::EmptyWorkList);
        }

        let mut resolved = 0;
        for r in references.iter_mut() {
            if let Some(i) = index.find(r.absolute_ref) {
                r.bound_object = Some(i);
                resolved += 1;
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn href(code: u8, size: u8, value: u64) -> HandleReference {
        HandleReference::new(code, size, value)
    }

    #[test]
    fn test_resolve_binds_matching_handle() {
        let mut refs = vec![Reference::new(href(5, 1, 0x42), 0x42)];
        let table = HandleTable::from_pairs([(3, 0x42)]);
        let resolved = HandleResolver::resolve(&mut refs, &table).unwrap();
        assert_eq!(resolved, 1);
        assert_eq!(refs[0].bound_object, Some(3));
    }

    #[test]
    fn test_resolve_leaves_miss_unbound() {
        let mut refs = vec![Reference::new(href(5, 1, 0x99), 0x99)];
        let table = HandleTable::from_pairs([(0, 0x42)]);
        let resolved = HandleResolver::resolve(&mut refs, &table).unwrap();
        assert_eq!(resolved, 0);
        assert!(refs[0].bound_object.is_none());
    }

    #[test]
    fn test_resolve_empty_work_list_is_an_error() {
        let mut refs: Vec<Reference> = Vec::new();
        let table = HandleTable::from_pairs([]);
        assert_eq!(
            HandleResolver::resolve(&mut refs, &table),
            Err(HandleResolverError::EmptyWorkList)
        );
    }

    #[test]
    fn test_null_reference_carries_zero_absolute_ref() {
        let null = href(0, 0, 0);
        assert!(null.is_null());
        let r = Reference::new(null, 0);
        assert_eq!(r.absolute_ref, 0);
        assert!(!r.is_resolved());
    }

    #[test]
    fn test_resolve_preserves_work_list_order() {
        let mut refs = vec![
            Reference::new(href(5, 1, 1), 1),
            Reference::new(href(5, 1, 2), 2),
            Reference::new(href(5, 1, 3), 3),
        ];
        let table = HandleTable::from_pairs([(0, 1), (1, 2), (2, 3)]);
        HandleResolver::resolve(&mut refs, &table).unwrap();
        assert_eq!(refs[0].bound_object, Some(0));
        assert_eq!(refs[1].bound_object, Some(1));
        assert_eq!(refs[2].bound_object, Some(2));
    }
}
