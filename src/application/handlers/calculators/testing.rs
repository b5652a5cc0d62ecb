//! In-memory calculation store for handler tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::domain::calculations::{CalculationKind, CalculationRecord};
use crate::domain::foundation::{DomainError, ErrorCode, ShareToken, UserId};
use crate::ports::CalculationStore;

/// Vec-backed store with the port's token collision check.
pub struct InMemoryCalculationStore {
    records: Mutex<Vec<CalculationRecord>>,
    fail_writes: bool,
}

impl InMemoryCalculationStore {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail_writes: true,
        }
    }

    pub fn with_records(records: Vec<CalculationRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: false,
        }
    }

    pub fn records(&self) -> Vec<CalculationRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl CalculationStore for InMemoryCalculationStore {
    async fn create(&self, record: CalculationRecord) -> Result<(), DomainError> {
        if self.fail_writes {
            return Err(DomainError::new(
                ErrorCode::DatabaseError,
                "Simulated write failure",
            ));
        }
        let mut records = self.records.lock().unwrap();
        if let Some(token) = record.share_token() {
            let collision = records
                .iter()
                .any(|r| r.kind() == record.kind() && r.share_token() == Some(token));
            if collision {
                return Err(DomainError::new(
                    ErrorCode::DatabaseError,
                    "Share token collision",
                ));
            }
        }
        records.push(record);
        Ok(())
    }

    async fn find_by_share_token(
        &self,
        kind: CalculationKind,
        token: &ShareToken,
    ) -> Result<Option<CalculationRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.kind() == kind && r.share_token() == Some(token))
            .cloned())
    }

    async fn list_recent(
        &self,
        user_id: &UserId,
        kind: CalculationKind,
        limit: usize,
    ) -> Result<Vec<CalculationRecord>, DomainError> {
        let mut matching: Vec<CalculationRecord> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.kind() == kind && r.owner() == Some(user_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
        matching.truncate(limit);
        Ok(matching)
    }

    async fn count_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.owner() == Some(user_id))
            .count() as u64)
    }
}
