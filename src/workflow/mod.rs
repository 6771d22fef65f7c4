pub mod code_buffer;
pub mod problem_list;
pub mod problem_page;
pub mod render;
pub mod route;
pub mod submission;
pub mod view_state;

pub use code_buffer::CodeBuffer;
pub use problem_list::ProblemListPage;
pub use problem_page::ProblemPage;
pub use route::{problem_id, resolve_route, Route};
pub use submission::{SubmissionCoordinator, SubmitOutcome};
pub use view_state::{FetchTicket, FetchTracker, ViewState};
