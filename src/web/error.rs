use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("Client couldn't be created.")]
    CantCreateClient,
    #[error("The connection to the other server failed.")]
    ConnectionFailed,
    #[error("The other server rejected the request [status: {0}].")]
    RequestRejected(u16),
    #[error("The response that has been received doesn't provide any readable content.")]
    CantReadResponseContent,
}
