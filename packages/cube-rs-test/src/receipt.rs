use std::fmt::Debug;

use cw_multi_test::{error::AnyResult, AppResponse};

use crate::harness::CubeTestApp;

#[derive(Debug, Clone)]
pub struct TxReceipt {
    pub block_height: u64,
    pub response: AppResponse,
}

impl TxReceipt {
    /// The block containing the transaction counts as its first confirmation.
    pub fn confirmations(&self, harness: &CubeTestApp) -> u64 {
        harness.block_height().saturating_sub(self.block_height) + 1
    }

    /// Produces blocks until the transaction has at least `required`
    /// confirmations, returning the confirmation count.
    pub fn wait(&self, harness: &mut CubeTestApp, required: u64) -> u64 {
        while self.confirmations(harness) < required {
            harness.advance_blocks(1);
        }

        let confirmations = self.confirmations(harness);

        println!(
            "[TxReceipt] Transaction at height {} confirmed ({} confirmations)",
            self.block_height, confirmations
        );

        confirmations
    }

    pub fn has_event(&self, ty: &str) -> bool {
        self.response
            .events
            .iter()
            .any(|event| event.ty == format!("wasm-{ty}"))
    }
}

/// Panics unless `result` is a revert whose reason is exactly `expected`.
pub fn assert_reverts<T: Debug>(result: AnyResult<T>, expected: &str) {
    match result {
        Ok(value) => panic!("Transaction did not revert (expected \"{expected}\"): {value:?}"),
        Err(err) => assert_eq!(
            err.root_cause().to_string(),
            expected,
            "Transaction reverted with an unexpected reason: {err:?}"
        ),
    }
}
