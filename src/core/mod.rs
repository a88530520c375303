pub mod catalog;
pub mod draw;
pub mod random;
pub mod sampler;

pub use crate::domain::model::{DrawResult, Item};
pub use crate::domain::ports::{ConfigProvider, RandomSource, Storage};
pub use crate::utils::error::Result;
