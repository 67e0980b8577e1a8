//! # dwg-graph
//!
//! A pure Rust decoder for the DWG binary drawing container (R13 through
//! R2000, with experimental R2004/R2007 layout support), plus a DXF
//! (textual interchange) emitter for the resulting document.
//!
//! ## Features
//!
//! - Bit-granular decoding of the DWG tagged binary format
//! - Flat (R13-R15) and paged/compressed (R2004+) section layouts
//! - A dynamic class table for file-local object type codes
//! - Two-phase handle resolution over the decoded object graph
//! - DXF emission (ASCII and binary) from a decoded document
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dwg_graph::io::dwg::DwgReader;
//!
//! // Decode a DWG file
//! let doc = DwgReader::from_file("sample.dwg")?.read()?;
//!
//! // Access entities
//! for entity in doc.entities() {
//!     println!("Entity: {:?}", entity);
//! }
//!
//! // Write to DXF
//! use dwg_graph::io::dxf::DxfWriter;
//! DxfWriter::new(doc).write_to_file("output.dxf")?;
//! # Ok::<(), dwg_graph::error::DxfError>(())
//! ```
//!
//! `io::dxf::DxfReader` also exists, as the independent reader the test
//! suite uses to cross-check decoded DWG documents against reference DXF
//! fixtures; it is not part of the primary decode/emit path above.
//!
//! ## Architecture
//!
//! - `CadObject` - Base trait for all CAD objects
//! - `Entity` - Trait for graphical entities
//! - `TableEntry` - Trait for table entries
//! - `CadDocument` - Central document structure, owning objects and
//!   references for the lifetime of a decode

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classes;
pub mod entities;
pub mod error;
pub mod notification;
pub mod preview;
pub mod summary_info;
pub mod types;
pub mod tables;
pub mod document;
pub mod io;
pub mod xdata;
pub mod objects;

// Re-export commonly used types
pub use error::{DxfError, Result};
pub use types::{
    DxfVersion, BoundingBox2D, BoundingBox3D, Color, Handle, LineWeight, Transparency, Vector2,
    Vector3,
};

// Re-export entity types
pub use entities::{
    Arc, Circle, Ellipse, Entity, EntityType, Line, LwPolyline, MText, Point, Polyline, Spline,
    Text,
};

// Re-export table types
pub use tables::{
    AppId, BlockRecord, DimStyle, Layer, LineType, Table, TableEntry, TextStyle, Ucs, VPort, View,
};

// Re-export document
pub use document::CadDocument;

// Re-export I/O types
pub use io::dxf::{DxfReader, DxfWriter};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_cad_document_creation() {
        let doc = CadDocument::new();
        assert_eq!(doc.version, DxfVersion::AC1032);

        let doc2 = CadDocument::with_version(DxfVersion::AC1015);
        assert_eq!(doc2.version, DxfVersion::AC1015);
    }
}


