use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to complete the request: {0}.")]
    Request(#[from] reqwest::Error),
}
