//! Resolution of raw analyzer pairs into sorted, indexed results.

mod assembler;
mod raw_pair;
mod result_item;
mod source_filter;

pub use assembler::assemble;
pub use raw_pair::RawPair;
pub use result_item::{Resolution, ResultItem, ResultSet};
pub use source_filter::SourceFilter;
