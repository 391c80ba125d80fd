pub mod github;

use async_trait::async_trait;

use crate::core::config::RepositoryDescriptor;
use crate::core::outcome::Outcome;

/// A hosting service that can create repositories on behalf of a token holder.
///
/// Implementations never return an error: rejections and transport faults
/// come back as a failed [`Outcome`] with a printable message.
#[async_trait]
pub trait RepositoryProvider: Send + Sync {
    async fn create(&self, token: &str, repository: &RepositoryDescriptor) -> Outcome;
}
