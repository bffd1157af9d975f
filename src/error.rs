use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotiqError {
    #[error(
        "No notification provider for `{payload}` in scope.\n\nWrap the component in a NotificationProvider before using its queue."
    )]
    MissingProvider { payload: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
