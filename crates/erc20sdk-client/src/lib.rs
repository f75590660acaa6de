//! # ERC20 SDK Client Trait
//!
//! This crate defines the chain-agnostic [`Erc20Client`] trait that every
//! chain implementation in the workspace satisfies, together with the value
//! objects passed through it.
//!
//! The trait splits into four capability groups:
//!
//! 1. Configuration: [`set_provider`](Erc20Client::set_provider),
//!    [`set_contract_address`](Erc20Client::set_contract_address),
//!    [`set_account`](Erc20Client::set_account) / [`account`](Erc20Client::account).
//! 2. Standard ERC20 methods per <https://eips.ethereum.org/EIPS/eip-20>:
//!    reads return decoded values, writes return unsigned
//!    [`TransactionRequest`] objects.
//! 3. Extensions: `mint` and `burn`. The deployed contract must expose these
//!    non-standard functions or the remote call fails; the SDK's built-in
//!    contract supports both.
//! 4. Deployment: [`deploy_contract`](Erc20Client::deploy_contract) builds a
//!    create transaction for a new ERC20-compatible contract.
//!
//! Write methods never sign or broadcast. The returned request carries the
//! account set via `set_account` in its `from` field; the caller passes it
//! to their own signing and sending pipeline. If the private key is held
//! elsewhere, export the signing hash from the request, sign it remotely and
//! inject the signature before sending.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use erc20sdk_error::Result;

pub use alloy::dyn_abi::DynSolValue;
pub use alloy::primitives::{Address, U256};
pub use alloy::rpc::types::TransactionRequest;

/// Parameters for a cross-chain transfer through a gravity bridge contract.
///
/// Accepted by [`Erc20Client::transfer`] for interface compatibility.
/// Only the Ethereum to target-chain direction is planned; the option is not
/// consulted by any implementation yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossChainOption {
    /// Address of the gravity bridge contract
    pub gravity_contract: String,
    /// Chain type of the destination chain
    pub destination_chain_type: String,
    /// Chain id of the destination chain
    pub destination_chain_id: String,
}

/// Parameters for deploying an ERC20 contract.
///
/// When either `abi` or `bytecode` is empty, BOTH are replaced by the SDK's
/// built-in default ERC20 pair; a partial override is not honored, since an
/// ABI only makes sense together with the bytecode it was compiled from.
///
/// `params` must match the constructor of whichever ABI is in effect, in
/// order and type. The built-in contract's constructor takes five arguments:
/// name (string), symbol (string), decimals (uint8), initial supply
/// (uint256) and whether further minting is allowed (bool). The deployer
/// becomes the contract's minting administrator; that is a property of the
/// bytecode, not something this SDK enforces.
#[derive(Debug, Clone, Default)]
pub struct DeployErc20Param {
    /// Contract ABI as a JSON string
    pub abi: String,
    /// Contract creation bytecode as a hex string
    pub bytecode: String,
    /// Ordered constructor arguments
    pub params: Vec<DynSolValue>,
}

/// The chain-agnostic ERC20 client interface.
///
/// Implementations hold a default account, a target contract address and an
/// RPC provider, all mutable through the configuration methods. Setters take
/// `&mut self`, so sharing one client across threads requires external
/// synchronization; use one client per logical session instead.
#[async_trait]
pub trait Erc20Client: Send + Sync {
    // ============ Configuration ============

    /// Sets the RPC endpoint used for reads. The URL is validated eagerly.
    fn set_provider(&mut self, rpc_url: &str) -> Result<()>;

    /// Sets the address of the token contract to operate on.
    fn set_contract_address(&mut self, addr: &str);

    /// Sets the default account. Write methods place it in the `from` field
    /// of the requests they build; reads do not require it.
    fn set_account(&mut self, account: &str);

    /// Returns the account set via [`set_account`](Self::set_account),
    /// or an empty string if none was set.
    fn account(&self) -> String;

    // ============ ERC20 standard ============

    /// Queries the token name.
    async fn name(&self) -> Result<String>;

    /// Queries the token symbol.
    async fn symbol(&self) -> Result<String>;

    /// Queries the token balance of `owner`.
    async fn balance_of(&self, owner: &str) -> Result<U256>;

    /// Queries the amount `spender` may still transfer on behalf of `owner`.
    async fn allowance(&self, owner: &str, spender: &str) -> Result<U256>;

    /// Builds a transfer of `value` tokens from the default account to `to`.
    ///
    /// `option` reserves the cross-chain parameters; it is currently inert.
    fn transfer(
        &self,
        to: &str,
        value: U256,
        option: Option<&CrossChainOption>,
    ) -> Result<TransactionRequest>;

    /// Builds a transfer of `value` tokens out of `from` into `to`.
    ///
    /// `from` is not the transaction sender: it is an account that granted
    /// the default account an allowance of at least `value`.
    fn transfer_from(&self, from: &str, to: &str, value: U256) -> Result<TransactionRequest>;

    /// Builds an approval allowing `spender` to spend `value` tokens of the
    /// default account.
    fn approve(&self, spender: &str, value: U256) -> Result<TransactionRequest>;

    // ============ ERC20 extensions ============

    /// Queries the token decimals.
    async fn decimals(&self) -> Result<u8>;

    /// Queries the total token supply.
    async fn total_supply(&self) -> Result<U256>;

    /// Builds a mint of `amount` new tokens to `to`. Requires the sender to
    /// be the contract's minting administrator.
    fn mint(&self, to: &str, amount: U256) -> Result<TransactionRequest>;

    /// Builds a burn of `amount` tokens held by `from`. `from` must be the
    /// sender itself or have granted the sender a sufficient allowance.
    fn burn(&self, from: &str, amount: U256) -> Result<TransactionRequest>;

    // ============ Deployment ============

    /// Builds a transaction deploying a new ERC20 contract.
    ///
    /// See [`DeployErc20Param`] for the default-substitution rules. The
    /// deployed contract's address can be read from the transaction receipt
    /// once the caller has sent the request.
    fn deploy_contract(&self, param: DeployErc20Param) -> Result<TransactionRequest>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deploy_param_default_is_empty() {
        let param = DeployErc20Param::default();
        assert!(param.abi.is_empty());
        assert!(param.bytecode.is_empty());
        assert!(param.params.is_empty());
    }

    #[test]
    fn test_cross_chain_option_serde_round_trip() {
        let option = CrossChainOption {
            gravity_contract: "0x1111111111111111111111111111111111111111".to_string(),
            destination_chain_type: "weelink".to_string(),
            destination_chain_id: "119".to_string(),
        };
        let json = serde_json::to_string(&option).unwrap();
        assert!(json.contains("gravity_contract"));
        let back: CrossChainOption = serde_json::from_str(&json).unwrap();
        assert_eq!(back, option);
    }

    #[test]
    fn test_trait_is_object_safe() {
        // The factory hands out Box<dyn Erc20Client>, so the trait must stay
        // object safe.
        fn assert_object_safe(_: Option<&dyn Erc20Client>) {}
        assert_object_safe(None);
    }
}
