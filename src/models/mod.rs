pub mod daily;
pub mod language;
pub mod outcome;
pub mod problem;
pub mod stats;
pub mod submission;

pub use daily::DailyChallenge;
pub use language::editor_label;
pub use outcome::{ResolutionOutcome, ScoredCandidate};
pub use problem::{CodeSnippet, Difficulty, Example, ProblemDetail, ProblemIdentity};
pub use stats::ProfileStats;
pub use submission::{SubmissionOutcome, SubmissionRequest, SubmissionStatus};
