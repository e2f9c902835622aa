//! Google Cloud Functions adapters

mod cli;
mod platform;

pub use cli::GcloudCli;
pub use platform::{
    operation_url, patch_url, GcloudPlatform, DEFAULT_API_ENDPOINT, SOURCE_UPDATE_MASK,
};
