pub mod body;
pub mod error;
pub mod exchange;
pub mod failure;
pub mod report;

pub use body::{Body, BoxError, ReadBody};
pub use error::BodyError;
pub use exchange::{ObservedResponse, OriginalRequest};
pub use failure::Failure;
pub use report::{ErrorCode, FailureReport, ReportedError, ReportedRequest, ReportedResponse};
