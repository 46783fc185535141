//! Validators for the metadata interfaces of ISO 19115.

mod citation;
mod extent;
mod quality;

pub use citation::CitationValidator;
pub use extent::ExtentValidator;
pub use quality::QualityValidator;
