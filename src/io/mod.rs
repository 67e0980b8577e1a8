//! I/O module for reading and writing CAD files in DXF and DWG formats

pub mod dxf;
pub mod dwg;

pub use dxf::{DxfReader, DxfWriter};
pub use dwg::{DwgReader, DwgReaderConfiguration};

