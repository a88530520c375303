use crate::utils::error::Result;
use std::io::Write;

/// Uniform integer generator. Returns a value in `[0, bound)`; `bound` is never 0.
pub trait RandomSource {
    fn next_int(&mut self, bound: u64) -> u64;
}

/// Destination for the persisted draw results.
///
/// `create` must return a fresh writer each time, replacing any previous
/// content. The writer is released when dropped.
pub trait Storage {
    type Writer: Write;

    fn create(&self) -> Result<Self::Writer>;
    fn location(&self) -> &str;
}

pub trait ConfigProvider {
    fn records(&self) -> &[String];
    fn output_path(&self) -> &str;
    fn seed(&self) -> Option<u64>;
}
