//! # ERC20 SDK Ethereum Client
//!
//! Concrete Ethereum implementation of the chain-agnostic
//! [`Erc20Client`](erc20sdk_client::Erc20Client) trait, built on the
//! [alloy](https://github.com/alloy-rs/alloy) framework.
//!
//! Read methods encode an ERC20 call, execute it through an HTTP provider
//! and decode the typed return value. Write methods assemble unsigned
//! [`TransactionRequest`](alloy::rpc::types::TransactionRequest)s that the
//! caller signs and sends through their own pipeline.
//!
//! ## Quickstart Guide
//!
//! ```no_run
//! use erc20sdk_ethereum::prelude::*;
//!
//! # async fn erc20() -> erc20sdk_error::Result<()> {
//! let mut client = EthereumClient::new(ETHEREUM_MAINNET);
//! client.set_provider("https://eth.llamarpc.com")?;
//! client.set_contract_address("0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48");
//!
//! let name = client.name().await?;
//! let decimals = client.decimals().await?;
//! println!("token: {name} ({decimals} decimals)");
//!
//! client.set_account("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045");
//! let tx = client.approve(
//!     "0xdAC17F958D2ee523a2206206994597C13D831ec7",
//!     U256::from(100u64),
//! )?;
//! // hand `tx` to a signer and broadcast it
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
pub use client::{EthereumClient, ETHEREUM_MAINNET, ETHEREUM_SEPOLIA};
pub mod artifacts;
pub use alloy;
pub mod prelude;
