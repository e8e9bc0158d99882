//! Testing utilities for the launch workflow
//!
//! In-memory collaborators that record every call, so tests can assert on
//! exactly which network operations a launch performed and in what order.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use solana_sdk::{hash::Hash, signature::Signature, transaction::Transaction};

use crate::client::Connection;
use crate::error::{SdkError, SdkResult};

/// Lamports per byte-year times the two-year exemption threshold
const LAMPORTS_PER_BYTE: u64 = 3480 * 2;
/// Account metadata overhead charged on top of the data length
const ACCOUNT_STORAGE_OVERHEAD: u64 = 128;

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    RentExemption(usize),
    LatestBlockhash,
    SendTransaction,
}

#[derive(Default)]
struct Recorded {
    calls: Vec<Call>,
    sent: Vec<Transaction>,
    blockhashes: usize,
    submissions: usize,
}

/// [`Connection`] that answers from memory and records every call
#[derive(Default)]
pub struct RecordingConnection {
    recorded: Mutex<Recorded>,
    fail_rent_query: bool,
    fail_blockhash: Option<usize>,
    fail_submission: Option<usize>,
}

impl RecordingConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the rent query fail
    pub fn failing_rent_query(mut self) -> Self {
        self.fail_rent_query = true;
        self
    }

    /// Make the `n`th blockhash fetch (1-based) fail
    pub fn failing_blockhash(mut self, n: usize) -> Self {
        self.fail_blockhash = Some(n);
        self
    }

    /// Make the `n`th submission (1-based) fail
    pub fn failing_submission(mut self, n: usize) -> Self {
        self.fail_submission = Some(n);
        self
    }

    /// Rent the fake charges for `data_len` bytes
    pub fn rent_for(data_len: usize) -> u64 {
        (data_len as u64 + ACCOUNT_STORAGE_OVERHEAD) * LAMPORTS_PER_BYTE
    }

    pub fn calls(&self) -> Vec<Call> {
        self.lock().calls.clone()
    }

    /// Transactions accepted by the fake, in submission order
    pub fn sent_transactions(&self) -> Vec<Transaction> {
        self.lock().sent.clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.lock().calls.iter().filter(|c| *c == call).count()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        // A panicking test thread must not hide what was recorded
        self.recorded.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl Connection for RecordingConnection {
    async fn get_minimum_balance_for_rent_exemption(&self, data_len: usize) -> SdkResult<u64> {
        self.lock().calls.push(Call::RentExemption(data_len));
        if self.fail_rent_query {
            return Err(SdkError::Rpc("rent query unavailable".to_string()));
        }
        Ok(Self::rent_for(data_len))
    }

    async fn get_latest_blockhash(&self) -> SdkResult<Hash> {
        let mut recorded = self.lock();
        recorded.calls.push(Call::LatestBlockhash);
        recorded.blockhashes += 1;

        if self.fail_blockhash == Some(recorded.blockhashes) {
            return Err(SdkError::Rpc(format!(
                "blockhash fetch {} unavailable",
                recorded.blockhashes
            )));
        }
        Ok(Hash::new_unique())
    }

    async fn send_transaction(&self, transaction: &Transaction) -> SdkResult<Signature> {
        let mut recorded = self.lock();
        recorded.calls.push(Call::SendTransaction);
        recorded.submissions += 1;

        if self.fail_submission == Some(recorded.submissions) {
            return Err(SdkError::Rpc(format!(
                "submission {} rejected",
                recorded.submissions
            )));
        }

        recorded.sent.push(transaction.clone());
        Ok(transaction.signatures.first().copied().unwrap_or_default())
    }
}
