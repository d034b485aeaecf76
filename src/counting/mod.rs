// Term counting — the matching rule and the result row types.

pub mod counter;
pub mod record;
