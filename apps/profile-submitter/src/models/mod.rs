pub mod submission;

pub use submission::{Profile, SubmissionRequest, SubmissionResult};
