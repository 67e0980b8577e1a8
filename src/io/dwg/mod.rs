//! DWG file format reader/writer support.
//!
//! This module implements reading of AutoCAD DWG binary files: bit-stream
//! primitives, section layout, object decoding, and handle resolution.
//!
//! # Module Structure
//!
//! - [`constants`] — Magic numbers, sentinel bytes, section names, version-specific constants
//! - [`crc`] — CRC-8 (16-bit) and CRC-32 computation and stream handlers
//! - [`encryption`] — AC18+ data section page header encryption/decryption
//! - [`compression`] — LZ77 AC18 and AC21 compressors/decompressors
//! - [`reed_solomon`] — Byte de-interleaving for AC21 Reed-Solomon encoded data
//! - [`reference_type`] — DWG handle reference codes and resolution
//! - [`header_handles`] — Named handle collection for DWG file header references
//! - [`section_io`] — Version-conditional section reading/writing helpers
//! - [`file_header`] — DWG file header structures (AC15, AC18, AC21)
//! - [`object_type`] — Built-in (< 500) object type code table
//! - [`handle_resolver`] — The post-decode `Reference` work list and resolver
//! - [`reader`] — Bit-stream and section readers (the decode path)
//! - [`builder`] — Resolves reader templates into the final [`crate::document::CadDocument`]

pub mod compression;
pub mod constants;
pub mod crc;
pub mod encryption;
pub mod file_header;
pub mod handle_resolver;
pub mod header_handles;
pub mod object_type;
pub mod reed_solomon;
pub mod reference_type;
pub mod section_io;

pub mod builder;
pub mod reader;

// Re-export commonly used types
pub use compression::{Compressor, Decompressor};
pub use file_header::{
    Dwg21CompressedMetadata, DwgFileHeader, DwgFileHeaderAC15, DwgFileHeaderAC18,
    DwgFileHeaderAC21, DwgLocalSectionMap, DwgSectionDescriptor, DwgSectionLocatorRecord,
};
pub use handle_resolver::{HandleResolver, Reference};
pub use header_handles::DwgHeaderHandlesCollection;
pub use object_type::DwgObjectType;
pub use reader::{DwgReader, DwgReaderConfiguration};
pub use reference_type::{DwgReferenceType, HandleReference};
pub use section_io::SectionIO;
