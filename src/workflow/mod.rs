pub mod resolver;
pub mod submit_ctx;
pub mod submit_flow;
pub mod verdict;

pub use resolver::{LiveProblemSource, ProblemSource, Resolver};
pub use submit_ctx::SubmissionCtx;
pub use submit_flow::SubmitDriver;
pub use verdict::{classify_page_text, SubmissionVerdict};
