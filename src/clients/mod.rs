pub mod api;
pub mod browser_client;
pub mod http_client;

pub use api::{ProblemApi, CSRF_HEADER};
pub use browser_client::BrowserProblemClient;
pub use http_client::HttpProblemClient;
