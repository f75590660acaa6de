//! Ethereum-family ERC20 client.

use std::str::FromStr;

use alloy::dyn_abi::JsonAbiExt;
use alloy::json_abi::JsonAbi;
use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::sol;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use url::Url;

use erc20sdk_client::{CrossChainOption, DeployErc20Param, Erc20Client};
use erc20sdk_error::{Erc20Error, Result};

use crate::artifacts;

/// Chain id of the Ethereum mainnet
pub const ETHEREUM_MAINNET: u64 = 1;
/// Chain id of the Sepolia testnet
pub const ETHEREUM_SEPOLIA: u64 = 11155111;

// Rust bindings for the ERC20 surface of the built-in contract, including
// the mint/burn extensions.
sol! {
    function name() external view returns (string);
    function symbol() external view returns (string);
    function decimals() external view returns (uint8);
    function totalSupply() external view returns (uint256);
    function balanceOf(address account) external view returns (uint256);
    function allowance(address owner, address spender) external view returns (uint256);
    function transfer(address to, uint256 amount) external returns (bool);
    function transferFrom(address from, address to, uint256 amount) external returns (bool);
    function approve(address spender, uint256 amount) external returns (bool);
    function mint(address to, uint256 amount) external returns (bool);
    function burn(address from, uint256 amount) external returns (bool);
}

/// ERC20 client for Ethereum and EVM-compatible networks.
///
/// Holds the default account, the target contract address and the RPC
/// endpoint. All three are plain strings until the moment a request is
/// built, so a malformed address surfaces from the method that uses it,
/// not from the setter.
#[derive(Debug, Clone)]
pub struct EthereumClient {
    account: String,
    contract_address: String,
    rpc_url: Option<String>,
    chain_id: u64,
}

impl Default for EthereumClient {
    fn default() -> Self {
        Self::new(ETHEREUM_MAINNET)
    }
}

impl EthereumClient {
    /// Creates a new client targeting the network with the given chain id.
    pub fn new(chain_id: u64) -> Self {
        Self {
            account: String::new(),
            contract_address: String::new(),
            rpc_url: None,
            chain_id,
        }
    }

    /// Returns the chain id this client stamps on the requests it builds.
    pub fn chain_id(&self) -> u64 {
        self.chain_id
    }

    fn parse_address(addr: &str) -> Result<Address> {
        Address::from_str(addr).map_err(|e| Erc20Error::InvalidAddress(format!("{addr}: {e}")))
    }

    fn contract(&self) -> Result<Address> {
        if self.contract_address.is_empty() {
            return Err(Erc20Error::MissingContractAddress);
        }
        Self::parse_address(&self.contract_address)
    }

    /// Executes a read-only contract call and decodes the typed return value.
    async fn call_contract<C: SolCall>(&self, call: C) -> Result<C::Return> {
        let rpc_url = self.rpc_url.as_deref().ok_or(Erc20Error::MissingProvider)?;
        let provider = ProviderBuilder::new().connect_http(
            rpc_url
                .parse()
                .map_err(|e| Erc20Error::InvalidProviderUrl(format!("{e}")))?,
        );

        let tx = TransactionRequest::default()
            .with_to(self.contract()?)
            .with_input(call.abi_encode());

        let raw = provider
            .call(tx)
            .await
            .map_err(|e| Erc20Error::Rpc(e.to_string()))?;
        decode_return::<C>(&raw)
    }

    /// Builds an unsigned contract-invoking request from encoded calldata.
    fn invoke_request(&self, calldata: Vec<u8>) -> Result<TransactionRequest> {
        let mut tx = TransactionRequest::default()
            .with_to(self.contract()?)
            .with_input(calldata)
            .with_chain_id(self.chain_id);
        if !self.account.is_empty() {
            tx = tx.with_from(Self::parse_address(&self.account)?);
        }
        Ok(tx)
    }
}

/// Decodes a raw `eth_call` response as the return type of `C`.
///
/// A response that is absent or does not decode as the expected type fails
/// with [`Erc20Error::TypeAssert`] carrying the raw payload for diagnosis.
fn decode_return<C: SolCall>(raw: &[u8]) -> Result<C::Return> {
    C::abi_decode_returns(raw).map_err(|_| Erc20Error::TypeAssert {
        expected: C::SIGNATURE.to_string(),
        raw: hex::encode(raw),
    })
}

#[async_trait]
impl Erc20Client for EthereumClient {
    fn set_provider(&mut self, rpc_url: &str) -> Result<()> {
        Url::parse(rpc_url).map_err(|e| Erc20Error::InvalidProviderUrl(format!("{rpc_url}: {e}")))?;
        self.rpc_url = Some(rpc_url.to_string());
        Ok(())
    }

    fn set_contract_address(&mut self, addr: &str) {
        self.contract_address = addr.to_string();
    }

    fn set_account(&mut self, account: &str) {
        self.account = account.to_string();
    }

    fn account(&self) -> String {
        self.account.clone()
    }

    async fn name(&self) -> Result<String> {
        self.call_contract(nameCall {}).await
    }

    async fn symbol(&self) -> Result<String> {
        self.call_contract(symbolCall {}).await
    }

    async fn decimals(&self) -> Result<u8> {
        self.call_contract(decimalsCall {}).await
    }

    async fn total_supply(&self) -> Result<U256> {
        self.call_contract(totalSupplyCall {}).await
    }

    async fn balance_of(&self, owner: &str) -> Result<U256> {
        let account = Self::parse_address(owner)?;
        self.call_contract(balanceOfCall { account }).await
    }

    async fn allowance(&self, owner: &str, spender: &str) -> Result<U256> {
        let owner = Self::parse_address(owner)?;
        let spender = Self::parse_address(spender)?;
        self.call_contract(allowanceCall { owner, spender }).await
    }

    // TODO: route through the gravity contract when `option` is set, once
    // Ethereum -> target-chain bridging is finalized.
    fn transfer(
        &self,
        to: &str,
        value: U256,
        _option: Option<&CrossChainOption>,
    ) -> Result<TransactionRequest> {
        let to = Self::parse_address(to)?;
        self.invoke_request(transferCall { to, amount: value }.abi_encode())
    }

    fn transfer_from(&self, from: &str, to: &str, value: U256) -> Result<TransactionRequest> {
        let from = Self::parse_address(from)?;
        let to = Self::parse_address(to)?;
        self.invoke_request(
            transferFromCall {
                from,
                to,
                amount: value,
            }
            .abi_encode(),
        )
    }

    fn approve(&self, spender: &str, value: U256) -> Result<TransactionRequest> {
        let spender = Self::parse_address(spender)?;
        self.invoke_request(
            approveCall {
                spender,
                amount: value,
            }
            .abi_encode(),
        )
    }

    fn mint(&self, to: &str, amount: U256) -> Result<TransactionRequest> {
        let to = Self::parse_address(to)?;
        self.invoke_request(mintCall { to, amount }.abi_encode())
    }

    fn burn(&self, from: &str, amount: U256) -> Result<TransactionRequest> {
        let from = Self::parse_address(from)?;
        self.invoke_request(burnCall { from, amount }.abi_encode())
    }

    fn deploy_contract(&self, param: DeployErc20Param) -> Result<TransactionRequest> {
        // The ABI/bytecode pair is substituted all-or-nothing: an ABI is
        // only meaningful next to the bytecode it was compiled from.
        let (abi, bytecode) = if param.abi.is_empty() || param.bytecode.is_empty() {
            log::debug!("deploy: using built-in ERC20 ABI and bytecode");
            (artifacts::DEFAULT_ABI, artifacts::DEFAULT_BYTECODE)
        } else {
            (param.abi.as_str(), param.bytecode.as_str())
        };

        let mut code = hex::decode(bytecode.trim_start_matches("0x"))
            .map_err(|e| Erc20Error::Abi(format!("invalid bytecode hex: {e}")))?;

        let parsed: JsonAbi = serde_json::from_str(abi)
            .map_err(|e| Erc20Error::Abi(format!("invalid contract ABI: {e}")))?;
        match parsed.constructor.as_ref() {
            Some(ctor) => {
                let args = ctor
                    .abi_encode_input(&param.params)
                    .map_err(|e| Erc20Error::Abi(e.to_string()))?;
                code.extend_from_slice(&args);
            }
            None if param.params.is_empty() => {}
            None => {
                return Err(Erc20Error::Abi(
                    "constructor parameters supplied but the ABI has no constructor".to_string(),
                ))
            }
        }

        let mut tx = TransactionRequest::default()
            .with_deploy_code(code)
            .with_chain_id(self.chain_id);
        if !self.account.is_empty() {
            tx = tx.with_from(Self::parse_address(&self.account)?);
        }
        Ok(tx)
    }
}


// ============================================================================
// Integration Tests (require network access)
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use super::*;
    use erc20sdk_client::Erc20Client;

    const MAINNET_RPC: &str = "https://eth.llamarpc.com";
    const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

    fn usdc_client() -> EthereumClient {
        let mut client = EthereumClient::new(ETHEREUM_MAINNET);
        client.set_provider(MAINNET_RPC).unwrap();
        client.set_contract_address(USDC);
        client
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_name_mainnet() {
        let name = usdc_client().name().await.expect("Failed to get name");
        assert_eq!(name, "USD Coin");
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_symbol_mainnet() {
        let symbol = usdc_client().symbol().await.expect("Failed to get symbol");
        assert_eq!(symbol, "USDC");
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_decimals_mainnet() {
        let decimals = usdc_client().decimals().await.expect("Failed to get decimals");
        assert_eq!(decimals, 6);
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_total_supply_mainnet() {
        let supply = usdc_client()
            .total_supply()
            .await
            .expect("Failed to get total supply");
        assert!(supply > U256::ZERO);
    }

    #[tokio::test]
    #[ignore = "Requires network access"]
    async fn test_usdc_allowance_mainnet() {
        let allowance = usdc_client()
            .allowance(
                "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045",
                "0x0000000000000000000000000000000000000001",
            )
            .await
            .expect("Failed to get allowance");
        assert_eq!(allowance, U256::ZERO);
    }
}
