//! GetSharedCalculationHandler - public share-link lookup.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::calculations::{CalculationKind, CalculationRecord};
use crate::domain::foundation::{DomainError, ShareToken};
use crate::ports::CalculationStore;

/// Query for a frozen calculation by its share token.
///
/// Unauthenticated by design: whoever holds the token may read the
/// frozen record. The token is the only capability.
#[derive(Debug, Clone)]
pub struct GetSharedCalculationQuery {
    pub kind: CalculationKind,
    pub token: ShareToken,
}

/// Error type for the share lookup.
#[derive(Debug, Error)]
pub enum GetSharedCalculationError {
    #[error("No shared {0:?} calculation found for this token")]
    NotFound(CalculationKind),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Handler for share-link reads.
pub struct GetSharedCalculationHandler {
    store: Arc<dyn CalculationStore>,
}

impl GetSharedCalculationHandler {
    pub fn new(store: Arc<dyn CalculationStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        query: GetSharedCalculationQuery,
    ) -> Result<CalculationRecord, GetSharedCalculationError> {
        self.store
            .find_by_share_token(query.kind, &query.token)
            .await?
            .ok_or(GetSharedCalculationError::NotFound(query.kind))
    }
}
