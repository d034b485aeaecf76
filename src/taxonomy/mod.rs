// Taxonomy handling — workbook loading and normalization into (category, term) pairs.
//
// The normalizer only sees a TermTable, never a file: the Excel loader is the
// one adapter that knows about workbooks, so the normalization rules stay
// testable without fixtures on disk.

pub mod excel;
pub mod normalize;
pub mod table;
