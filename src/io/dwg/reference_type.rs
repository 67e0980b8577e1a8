//! DWG handle reference types and resolution.
//!
//! In the DWG format, object handles are encoded with a reference code that
//! determines how the handle value is resolved relative to a reference handle.
//!
//! Handle encoding: `|CODE (4 bits)|COUNTER (4 bits)|HANDLE bytes (N)|`

/// DWG handle reference code.
///
/// The handle code determines how the raw handle value is interpreted
/// relative to the parent (reference) handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DwgReferenceType {
    /// Undefined reference (code 0)
    Undefined = 0,
    /// Soft ownership reference (code 2) — absolute handle
    SoftOwnership = 2,
    /// Hard ownership reference (code 3) — absolute handle
    HardOwnership = 3,
    /// Soft pointer reference (code 4) — absolute handle
    SoftPointer = 4,
    /// Hard pointer reference (code 5) — absolute handle
    HardPointer = 5,
    /// Offset +1 from reference handle (code 6)
    HardOwnershipPlus1 = 6,
    /// Offset -1 from reference handle (code 8)
    HardOwnershipMinus1 = 8,
    /// Offset +N from reference handle (code 0xA)
    SoftPointerPlusOffset = 0xA,
    /// Offset -N from reference handle (code 0xC)
    SoftPointerMinusOffset = 0xC,
}

impl DwgReferenceType {
    /// Try to create a reference type from a raw code value.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(DwgReferenceType::Undefined),
            2 => Some(DwgReferenceType::SoftOwnership),
            3 => Some(DwgReferenceType::HardOwnership),
            4 => Some(DwgReferenceType::SoftPointer),
            5 => Some(DwgReferenceType::HardPointer),
            6 => Some(DwgReferenceType::HardOwnershipPlus1),
            8 => Some(DwgReferenceType::HardOwnershipMinus1),
            0xA => Some(DwgReferenceType::SoftPointerPlusOffset),
            0xC => Some(DwgReferenceType::SoftPointerMinusOffset),
            _ => None,
        }
    }

    /// Whether this reference type uses an absolute handle value.
    pub fn is_absolute(&self) -> bool {
        matches!(
            self,
            DwgReferenceType::Undefined
                | DwgReferenceType::SoftOwnership
                | DwgReferenceType::HardOwnership
                | DwgReferenceType::SoftPointer
                | DwgReferenceType::HardPointer
        )
    }

    /// Whether this reference type uses an offset from the reference handle.
    pub fn is_offset(&self) -> bool {
        !self.is_absolute()
    }
}

/// A raw handle as read from the DWG bit stream.
///
/// Three fields: `code` (the reference semantics nibble), `size` (the
/// encoded byte count, 0-8) and `value` (the magnitude assembled from
/// `size` bytes). A handle with `size == 0` is the null handle and is
/// never resolved against the owning object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandleReference {
    /// The reference code (upper 4 bits of the first handle byte).
    pub code: u8,
    /// Number of encoded magnitude bytes (lower 4 bits of the first byte).
    pub size: u8,
    /// The raw magnitude (assembled from `size` bytes).
    pub value: u64,
}

impl HandleReference {
    /// Create a new handle reference.
    pub fn new(code: u8, size: u8, value: u64) -> Self {
        Self { code, size, value }
    }

    /// Whether this is the null handle (`size == 0`).
    pub fn is_null(&self) -> bool {
        self.size == 0
    }

    /// Resolve the absolute handle value given the owning object's
    /// absolute handle.
    ///
    /// For absolute reference types (codes 0, 2, 3, 4, 5) the raw value
    /// is the absolute reference. For offset types:
    /// - Code 6: owner + 1
    /// - Code 8: owner - 1
    /// - Code 0xA: owner + value
    /// - Code 0xC: owner - value
    /// - any other code: value verbatim
    pub fn resolve(&self, owner: u64) -> u64 {
        match self.code {
            // Absolute handle types
            0 | 2 | 3 | 4 | 5 => self.value,
            // +1 offset
            6 => owner.wrapping_add(1),
            // -1 offset
            8 => owner.wrapping_sub(1),
            // +N offset
            0xA => owner.wrapping_add(self.value),
            // -N offset
            0xC => owner.wrapping_sub(self.value),
            // Unknown code — treat as absolute
            _ => self.value,
        }
    }

    /// Get the reference type enum, if the code is recognized.
    pub fn reference_type(&self) -> Option<DwgReferenceType> {
        DwgReferenceType::from_code(self.code)
    }
}

impl Default for HandleReference {
    fn default() -> Self {
        Self {
            code: 0,
            size: 0,
            value: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_type_from_code() {
        assert_eq!(
            DwgReferenceType::from_code(2),
            Some(DwgReferenceType::SoftOwnership)
        );
        assert_eq!(
            DwgReferenceType::from_code(5),
            Some(DwgReferenceType::HardPointer)
        );
        assert_eq!(DwgReferenceType::from_code(1), None);
        assert_eq!(DwgReferenceType::from_code(7), None);
    }

    #[test]
    fn test_is_absolute() {
        assert!(DwgReferenceType::SoftOwnership.is_absolute());
        assert!(DwgReferenceType::HardPointer.is_absolute());
        assert!(!DwgReferenceType::HardOwnershipPlus1.is_absolute());
        assert!(!DwgReferenceType::SoftPointerMinusOffset.is_absolute());
    }

    #[test]
    fn test_resolve_absolute() {
        let href = HandleReference::new(4, 2, 0x1A);
        assert_eq!(href.resolve(0x50), 0x1A);
    }

    #[test]
    fn test_resolve_plus1() {
        let href = HandleReference::new(6, 0, 0);
        assert_eq!(href.resolve(0x10), 0x11);
    }

    #[test]
    fn test_resolve_minus1() {
        let href = HandleReference::new(8, 0, 0);
        assert_eq!(href.resolve(0x10), 0x0F);
    }

    #[test]
    fn test_resolve_plus_offset() {
        let href = HandleReference::new(0xA, 1, 5);
        assert_eq!(href.resolve(0x10), 0x15);
    }

    #[test]
    fn test_resolve_minus_offset() {
        let href = HandleReference::new(0xC, 1, 3);
        assert_eq!(href.resolve(0x10), 0x0D);
    }

    #[test]
    fn test_null_handle() {
        let href = HandleReference::new(0, 0, 0);
        assert!(href.is_null());
        let present = HandleReference::new(5, 1, 1);
        assert!(!present.is_null());
    }
}
