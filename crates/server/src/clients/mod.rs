pub mod lichess;

use async_trait::async_trait;
use broadcast_core::{Round, RoundList, RoundSnapshot};

use crate::error::BroadcastError;

/// Read-only access to a tournament broadcast.
#[async_trait]
pub trait BroadcastApi: Send + Sync {
    async fn fetch_rounds(&self, tournament_id: &str) -> Result<RoundList, BroadcastError>;

    async fn fetch_round(
        &self,
        tournament_id: &str,
        round: &Round,
    ) -> Result<RoundSnapshot, BroadcastError>;
}
