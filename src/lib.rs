pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::{cli::LocalStorage, toml_config::TomlConfig, DrawSettings};

pub use core::{
    catalog::Catalog,
    draw::{BatchReport, PrizeDraw, DRAW_COUNT},
    random::{ScriptedRandom, StdRandom},
    sampler::Sampler,
};
pub use domain::model::{DrawResult, Item};
pub use domain::ports::{ConfigProvider, RandomSource, Storage};
pub use utils::error::{DrawError, Result};
