pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{profile::SearchProfile, storage::LocalStorage, CliConfig};
pub use core::{etl::EtlEngine, pipeline::SearchPipeline};
pub use domain::model::{Listing, Price, RawItem, TimeWindow};
pub use domain::ports::{ConfigProvider, Pipeline, Storage};
pub use utils::error::{AuctionError, Result};
