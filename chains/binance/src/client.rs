//! Binance Smart Chain ERC20 client.

use async_trait::async_trait;

use erc20sdk_client::{CrossChainOption, DeployErc20Param, Erc20Client, TransactionRequest, U256};
use erc20sdk_error::Result;
use erc20sdk_ethereum::EthereumClient;

/// Chain id of the BSC mainnet
pub const BSC_MAINNET: u64 = 56;
/// Chain id of the BSC testnet
pub const BSC_TESTNET: u64 = 97;

/// ERC20 client for Binance Smart Chain, delegating to the Ethereum-family
/// implementation.
#[derive(Debug, Clone)]
pub struct BinanceClient {
    inner: EthereumClient,
}

impl Default for BinanceClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BinanceClient {
    /// Creates a client targeting BSC mainnet.
    pub fn new() -> Self {
        Self {
            inner: EthereumClient::new(BSC_MAINNET),
        }
    }

    /// Creates a client targeting a BSC network with a custom chain id.
    pub fn with_chain_id(chain_id: u64) -> Self {
        Self {
            inner: EthereumClient::new(chain_id),
        }
    }

    /// Returns the chain id this client stamps on the requests it builds.
    pub fn chain_id(&self) -> u64 {
        self.inner.chain_id()
    }
}

#[async_trait]
impl Erc20Client for BinanceClient {
    fn set_provider(&mut self, rpc_url: &str) -> Result<()> {
        self.inner.set_provider(rpc_url)
    }

    fn set_contract_address(&mut self, addr: &str) {
        self.inner.set_contract_address(addr)
    }

    fn set_account(&mut self, account: &str) {
        self.inner.set_account(account)
    }

    fn account(&self) -> String {
        self.inner.account()
    }

    async fn name(&self) -> Result<String> {
        self.inner.name().await
    }

    async fn symbol(&self) -> Result<String> {
        self.inner.symbol().await
    }

    async fn balance_of(&self, owner: &str) -> Result<U256> {
        self.inner.balance_of(owner).await
    }

    async fn allowance(&self, owner: &str, spender: &str) -> Result<U256> {
        self.inner.allowance(owner, spender).await
    }

    fn transfer(
        &self,
        to: &str,
        value: U256,
        option: Option<&CrossChainOption>,
    ) -> Result<TransactionRequest> {
        self.inner.transfer(to, value, option)
    }

    fn transfer_from(&self, from: &str, to: &str, value: U256) -> Result<TransactionRequest> {
        self.inner.transfer_from(from, to, value)
    }

    fn approve(&self, spender: &str, value: U256) -> Result<TransactionRequest> {
        self.inner.approve(spender, value)
    }

    async fn decimals(&self) -> Result<u8> {
        self.inner.decimals().await
    }

    async fn total_supply(&self) -> Result<U256> {
        self.inner.total_supply().await
    }

    fn mint(&self, to: &str, amount: U256) -> Result<TransactionRequest> {
        self.inner.mint(to, amount)
    }

    fn burn(&self, from: &str, amount: U256) -> Result<TransactionRequest> {
        self.inner.burn(from, amount)
    }

    fn deploy_contract(&self, param: DeployErc20Param) -> Result<TransactionRequest> {
        self.inner.deploy_contract(param)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
    const ACCOUNT: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

    #[test]
    fn test_new_targets_bsc_mainnet() {
        assert_eq!(BinanceClient::new().chain_id(), 56);
        assert_eq!(BinanceClient::with_chain_id(BSC_TESTNET).chain_id(), 97);
    }

    #[test]
    fn test_delegation_round_trips_account() {
        let mut client = BinanceClient::new();
        client.set_account(ACCOUNT);
        assert_eq!(client.account(), ACCOUNT);
    }

    #[test]
    fn test_requests_carry_bsc_chain_id() {
        let mut client = BinanceClient::new();
        client.set_contract_address(CONTRACT);
        client.set_account(ACCOUNT);
        let tx = client.approve(CONTRACT, U256::from(1u64)).unwrap();
        assert_eq!(tx.chain_id, Some(BSC_MAINNET));
    }

    #[tokio::test]
    async fn test_read_without_provider() {
        let mut client = BinanceClient::new();
        client.set_contract_address(CONTRACT);
        assert!(client.name().await.is_err());
    }
}
