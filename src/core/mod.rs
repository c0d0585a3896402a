pub mod etl;
pub mod extract;
pub mod normalize;
pub mod pipeline;
pub mod request;
pub mod response;
pub mod window;

pub use crate::domain::model::{Listing, RawItem, TimeWindow, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
