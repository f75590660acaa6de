//! This prelude module simplifies importing many useful items from the
//! erc20sdk_ethereum crate using a glob import.
//!
//! To use this prelude, add the following to your code:
//! ```
//! use erc20sdk_ethereum::prelude::*;
//! ```

pub use crate::artifacts::{DEFAULT_ABI, DEFAULT_BYTECODE};
pub use crate::{EthereumClient, ETHEREUM_MAINNET, ETHEREUM_SEPOLIA};

pub use erc20sdk_client::{CrossChainOption, DeployErc20Param, DynSolValue, Erc20Client};
pub use erc20sdk_error::{Erc20Error, ErrorCode};

pub use alloy::primitives::{Address, U256};
pub use alloy::rpc::types::TransactionRequest;
