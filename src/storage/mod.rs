mod transfer_storage;

use crate::types::TransferId;
use crate::wizard::SubmittedTransfer;

pub use transfer_storage::TransferStorage;

pub trait Storage: Send + Sync + 'static {
    /// Reserves the identifier for the next submission.
    fn next_id(&self) -> TransferId;
    fn load(&self, transfer_id: TransferId) -> Option<SubmittedTransfer>;
    fn save(&self, transfer: SubmittedTransfer);
}
