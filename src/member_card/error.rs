use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum MemberCardError {
    #[error("The member card response doesn't match the expected format: {0}")]
    MalformedResponse(String),
    #[error("The --member-card-url argument is missing.")]
    MissingRequestUrl,
    #[error("The --member-card-token argument is missing.")]
    MissingBearerToken,
}
