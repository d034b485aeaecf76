// Pipeline orchestration — the documents × terms counting loop.

pub mod matrix;
