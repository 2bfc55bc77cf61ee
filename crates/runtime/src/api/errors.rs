//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination and repositories so clients can
//! bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("checklist worker command channel closed")]
    CommandChannelClosed,

    #[error("checklist worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("checklist worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("runtime requires a checklist key-value store before building")]
    MissingStore,

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
