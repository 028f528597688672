pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod profile_client;

pub use cache::UserCache;
pub use config::Config;
pub use errors::SubmitError;
pub use models::{Profile, SubmissionRequest, SubmissionResult};
pub use profile_client::{submit_profile, ProfileClient};
