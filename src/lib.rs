// Concord: document-term frequency matrix builder.
//
// This is the library root. Each module corresponds to a stage of the
// counting pipeline.

pub mod config;
pub mod counting;
pub mod extract;
pub mod output;
pub mod pipeline;
pub mod taxonomy;
