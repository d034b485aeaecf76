// Text extraction — trait-based abstraction for swappable converters.
//
// The TextExtractor trait defines the interface. PdfExtractor implements it
// with the pdf-extract crate. Other document formats (or a different PDF
// engine) slot in without touching the counting pipeline.

pub mod corpus;
pub mod pdf;
pub mod traits;
