use crate::core::transport::WalletTransport;
use crate::error::{Result, WalletBridgeError};
use crate::types::{SignedTransaction, SignerTransaction};

/// Submit a prepared signing group to the wallet unmodified.
///
/// Unlike `WalletBridge::sign_transaction`, no signer is injected and the
/// complete signed sequence comes back in request order. Callers building
/// multi-transaction groups (atomic transfers, app call plus payment) choose
/// their own signers per entry.
pub async fn sign_transaction_group(
    transport: &impl WalletTransport,
    group: Vec<SignerTransaction>,
) -> Result<Vec<SignedTransaction>> {
    transport
        .sign_transactions(group)
        .await
        .map_err(WalletBridgeError::SigningFailed)
}
