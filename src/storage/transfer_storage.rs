use crate::storage::Storage;
use crate::types::TransferId;
use crate::wizard::SubmittedTransfer;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

/// Keeps submitted transfers for the lifetime of the process only.
pub struct TransferStorage {
    cache: Arc<DashMap<TransferId, SubmittedTransfer>>,
    sequence: AtomicU32
}

impl TransferStorage {
    pub fn new() -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            sequence: AtomicU32::new(1)
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// All submissions ordered by identifier.
    pub fn all(&self) -> Vec<SubmittedTransfer> {
        let mut transfers: Vec<SubmittedTransfer> = self.cache.iter().map(|item| item.value().clone()).collect();
        transfers.sort_by_key(|transfer| transfer.transfer_id);
        transfers
    }
}

impl Default for TransferStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for TransferStorage {
    fn next_id(&self) -> TransferId {
        self.sequence.fetch_add(1, Ordering::Relaxed)
    }

    fn load(&self, transfer_id: TransferId) -> Option<SubmittedTransfer> {
        self.cache.get(&transfer_id).map(|item| item.value().clone())
    }

    fn save(&self, transfer: SubmittedTransfer) {
        self.cache.insert(transfer.transfer_id, transfer);
    }
}
