//! The dynamic class table.
//!
//! A DWG file does not ship a fixed enum of every object kind it contains.
//! Type codes from 500 upward are assigned per-file and resolved through a
//! table of [`DxfClass`] records read from the `AcDb:Classes` section (see
//! the classes reader/writer). `DxfClassCollection` is that table: an
//! ordered, append-only sequence keyed by `class_number`.

use std::fmt;

/// Proxy capability flags (DWG "version" field of a class record).
///
/// In R14 this value became a bitmask describing what a proxy object is
/// allowed to do (move, edit, erase, ...) when the real application class
/// is unavailable. Earlier versions store a plain version number here;
/// callers that only need the raw value use `.0` directly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProxyFlags(pub u16);

impl fmt::Display for ProxyFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

/// Item class ID assigned to classes that produce entities.
pub const ITEM_CLASS_ID_ENTITY: i16 = 0x1F2;
/// Item class ID assigned to classes that produce non-graphical objects.
pub const ITEM_CLASS_ID_OBJECT: i16 = 0x1F3;

/// A single class record from the `AcDb:Classes` section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DxfClass {
    /// File-local type code; observed object type codes >= 500 resolve
    /// through this number.
    pub class_number: i16,
    /// Proxy capability flags (R14+) or plain version number (R13).
    pub proxy_flags: ProxyFlags,
    /// Owning application name, e.g. "ObjectDBX Classes".
    pub application_name: String,
    /// The C++ class name as registered with the original application.
    pub cpp_class_name: String,
    /// The DXF name used both on textual export and for dispatch lookup.
    pub dxf_name: String,
    /// Whether a proxy for this class was ever instantiated and later
    /// discarded without being resolved to a real implementation.
    pub was_zombie: bool,
    /// 0x1F2 for classes producing entities, 0x1F3 for objects.
    pub item_class_id: i16,
    /// Derived from `item_class_id == 0x1F2`.
    pub is_an_entity: bool,
    /// R2004+: number of instances of this class in the source drawing.
    pub instance_count: i32,
    /// R2004+: DWG version the class was authored against.
    pub dwg_version: i32,
    /// R2004+: maintenance release version.
    pub maintenance_version: i16,
}

impl DxfClass {
    /// Build a class record, deriving `is_an_entity` from `item_class_id`.
    pub fn new(
        class_number: i16,
        dxf_name: impl Into<String>,
        cpp_class_name: impl Into<String>,
        application_name: impl Into<String>,
        item_class_id: i16,
    ) -> Self {
        Self {
            class_number,
            proxy_flags: ProxyFlags::default(),
            application_name: application_name.into(),
            cpp_class_name: cpp_class_name.into(),
            dxf_name: dxf_name.into(),
            was_zombie: false,
            item_class_id,
            is_an_entity: item_class_id == ITEM_CLASS_ID_ENTITY,
            instance_count: 0,
            dwg_version: 0,
            maintenance_version: 0,
        }
    }
}

/// Ordered table of dynamic classes, plus the cached `LAYOUT` class number.
///
/// Every record that is added is checked for `dxf_name == "LAYOUT"`; its
/// `class_number` is cached so the object decoder can dispatch
/// `type_code == layout_class_number` to the LAYOUT reader even when no
/// built-in type code covers it.
#[derive(Debug, Clone, Default)]
pub struct DxfClassCollection {
    entries: Vec<DxfClass>,
    layout_class_number: Option<i16>,
}

impl DxfClassCollection {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of registered classes.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all class records in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &DxfClass> {
        self.entries.iter()
    }

    /// Look up a class by its file-local number.
    pub fn by_number(&self, class_number: i16) -> Option<&DxfClass> {
        self.entries.iter().find(|c| c.class_number == class_number)
    }

    /// Look up a class by its DXF name (case-sensitive; callers that need
    /// case-insensitive lookup should uppercase both sides themselves).
    pub fn by_dxf_name(&self, dxf_name: &str) -> Option<&DxfClass> {
        self.entries.iter().find(|c| c.dxf_name == dxf_name)
    }

    /// The class number the file assigned to the `LAYOUT` class, if any
    /// `LAYOUT` record has been added.
    pub fn layout_class_number(&self) -> Option<i16> {
        self.layout_class_number
    }

    /// Add a new class record, or overwrite an existing one with the same
    /// `class_number`. Updates the cached LAYOUT class number as a side
    /// effect.
    pub fn add_or_update(&mut self, class: DxfClass) {
        if class.dxf_name.eq_ignore_ascii_case("LAYOUT") {
            self.layout_class_number = Some(class.class_number);
        }

        match self.entries.iter_mut().find(|c| c.class_number == class.class_number) {
            Some(slot) => *slot = class,
            None => self.entries.push(class),
        }
    }

    /// Populate the table with the handful of classes that real DWG
    /// writers always emit, for files built in memory rather than read
    /// from disk (e.g. the default document, or round-trip tests that
    /// exercise unlisted-type dispatch without a source class section).
    pub fn update_defaults(&mut self) {
        const DEFAULTS: &[(i16, &str, &str, i16)] = &[
            (500, "ACDBDICTIONARYWDFLT", "AcDbDictionaryWithDefault", ITEM_CLASS_ID_OBJECT),
            (501, "SORTENTSTABLE", "AcDbSortentsTable", ITEM_CLASS_ID_OBJECT),
            (502, "MATERIAL", "AcDbMaterial", ITEM_CLASS_ID_OBJECT),
            (503, "PLOTSETTINGS", "AcDbPlotSettings", ITEM_CLASS_ID_OBJECT),
            (504, "LAYOUT", "AcDbLayout", ITEM_CLASS_ID_OBJECT),
            (505, "TABLESTYLE", "AcDbTableStyle", ITEM_CLASS_ID_OBJECT),
            (506, "SCALE", "AcDbScale", ITEM_CLASS_ID_OBJECT),
            (507, "MLEADERSTYLE", "AcDbMLeaderStyle", ITEM_CLASS_ID_OBJECT),
            (508, "MULTILEADER", "AcDbMLeader", ITEM_CLASS_ID_ENTITY),
            (509, "VISUALSTYLE", "AcDbVisualStyle", ITEM_CLASS_ID_OBJECT),
            (510, "WIPEOUT", "AcDbWipeout", ITEM_CLASS_ID_ENTITY),
            (511, "WIPEOUTVARIABLES", "AcDbWipeoutVariables", ITEM_CLASS_ID_OBJECT),
        ];

        for &(number, dxf_name, cpp_name, item_class_id) in DEFAULTS {
            if self.by_number(number).is_some() {
                continue;
            }
            self.add_or_update(DxfClass::new(
                number,
                dxf_name,
                cpp_name,
                "ObjectDBX Classes",
                item_class_id,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_or_update_appends() {
        let mut table = DxfClassCollection::new();
        table.add_or_update(DxfClass::new(500, "HATCH", "AcDbHatch", "ObjectDBX Classes", ITEM_CLASS_ID_ENTITY));
        assert_eq!(table.len(), 1);
        assert_eq!(table.by_number(500).unwrap().dxf_name, "HATCH");
    }

    #[test]
    fn test_add_or_update_overwrites_same_number() {
        let mut table = DxfClassCollection::new();
        table.add_or_update(DxfClass::new(500, "HATCH", "AcDbHatch", "ObjectDBX Classes", ITEM_CLASS_ID_ENTITY));
        table.add_or_update(DxfClass::new(500, "HATCH2", "AcDbHatch", "ObjectDBX Classes", ITEM_CLASS_ID_ENTITY));
        assert_eq!(table.len(), 1);
        assert_eq!(table.by_number(500).unwrap().dxf_name, "HATCH2");
    }

    #[test]
    fn test_layout_class_number_cached() {
        let mut table = DxfClassCollection::new();
        table.add_or_update(DxfClass::new(515, "LAYOUT", "AcDbLayout", "ObjectDBX Classes", ITEM_CLASS_ID_OBJECT));
        assert_eq!(table.layout_class_number(), Some(515));
    }

    #[test]
    fn test_by_dxf_name() {
        let mut table = DxfClassCollection::new();
        table.add_or_update(DxfClass::new(500, "HATCH", "AcDbHatch", "ObjectDBX Classes", ITEM_CLASS_ID_ENTITY));
        assert!(table.by_dxf_name("HATCH").is_some());
        assert!(table.by_dxf_name("MISSING").is_none());
    }

    #[test]
    fn test_update_defaults_is_idempotent() {
        let mut table = DxfClassCollection::new();
        table.update_defaults();
        let len_after_first = table.len();
        table.update_defaults();
        assert_eq!(table.len(), len_after_first);
    }
}
