//! Metadata interfaces of ISO 19115 used by the referencing objects.

pub mod citation;
pub mod extent;
pub mod quality;
