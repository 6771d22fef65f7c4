pub mod problem;
pub mod submission;

pub use problem::{Problem, ProblemSummary};
pub use submission::{SubmissionRequest, SubmitAck, SUBMISSION_LANGUAGE};
