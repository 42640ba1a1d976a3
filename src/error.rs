use crate::member_card::error::MemberCardError;
use crate::storage::error::StorageError;
use crate::web::error::WebError;
use thiserror::Error;

pub type Result<T, E = ApplicationError> = std::result::Result<T, E>;

#[derive(Debug, Error, PartialEq)]
pub enum ApplicationError {
    #[error("An error has been encountered while executing requests onto another server.")]
    Web(#[from] WebError),
    #[error("Error while working with member cards.")]
    MemberCard(#[from] MemberCardError),
    #[error("An error has occurred with the member session storage.")]
    Storage(#[from] StorageError),
}
