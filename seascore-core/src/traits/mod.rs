pub mod ledger;

pub use ledger::{CompletionLedger, LedgerError};
