//! Boundary with the external page-layout engine.

mod pdfium;

pub use pdfium::extract_fragments;
