//! Chain layer behind the tournament API.
//!
//! Contract deployment and joins are simulated: the mock provider hands back
//! random hex strings shaped like addresses and transaction hashes. A real
//! provider would speak JSON-RPC to the factory contract named in
//! `ChainConfig`.

use crate::config::ChainConfig;
use async_trait::async_trait;
use rand::RngCore;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChainError {
    #[error("Provider not enabled: {0}")]
    NotEnabled(String),

    #[error("Deploy failed: {0}")]
    DeployFailed(String),

    #[error("Join failed: {0}")]
    JoinFailed(String),
}

/// Parameters a tournament contract is initialized with.
#[derive(Debug, Clone)]
pub struct TournamentDeployment {
    pub name: String,
    pub sport: String,
    pub entry_fee: String,
    pub prize_pool: String,
    pub max_participants: u32,
    pub creator_address: String,
}

#[derive(Debug, Clone)]
pub struct DeployedContract {
    pub contract_address: String,
    pub transaction_hash: String,
}

#[async_trait]
pub trait ChainProvider: Send + Sync {
    /// Deploy a tournament contract and return its address plus the deploy tx.
    async fn deploy_tournament(
        &self,
        deployment: &TournamentDeployment,
    ) -> Result<DeployedContract, ChainError>;

    /// Pay the entry fee into a tournament contract, returning the tx hash.
    async fn join_tournament(
        &self,
        contract_address: &str,
        user_address: &str,
        amount: &str,
    ) -> Result<String, ChainError>;

    async fn health_check(&self) -> Result<(), ChainError>;

    fn is_enabled(&self) -> bool;
}

pub struct MockChainProvider {
    config: ChainConfig,
    enabled: bool,
    deploy_count: AtomicU64,
    join_count: AtomicU64,
}

impl MockChainProvider {
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            enabled: true,
            deploy_count: AtomicU64::new(0),
            join_count: AtomicU64::new(0),
        }
    }

    pub fn deploy_count(&self) -> u64 {
        self.deploy_count.load(Ordering::SeqCst)
    }

    pub fn join_count(&self) -> u64 {
        self.join_count.load(Ordering::SeqCst)
    }

    /// `0x` followed by `len` random bytes in lowercase hex.
    fn random_hex(len: usize) -> String {
        let mut buf = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut buf);
        format!("0x{}", hex::encode(buf))
    }
}

#[async_trait]
impl ChainProvider for MockChainProvider {
    async fn deploy_tournament(
        &self,
        deployment: &TournamentDeployment,
    ) -> Result<DeployedContract, ChainError> {
        if !self.enabled {
            return Err(ChainError::NotEnabled(
                "Mock chain provider is not enabled".to_string(),
            ));
        }

        self.deploy_count.fetch_add(1, Ordering::SeqCst);

        let contract = DeployedContract {
            contract_address: Self::random_hex(20),
            transaction_hash: Self::random_hex(32),
        };

        tracing::info!(
            name = %deployment.name,
            sport = %deployment.sport,
            max_participants = deployment.max_participants,
            factory = %self.config.factory_address,
            contract_address = %contract.contract_address,
            "[MOCK] Tournament contract would be deployed"
        );

        Ok(contract)
    }

    async fn join_tournament(
        &self,
        contract_address: &str,
        user_address: &str,
        amount: &str,
    ) -> Result<String, ChainError> {
        if !self.enabled {
            return Err(ChainError::NotEnabled(
                "Mock chain provider is not enabled".to_string(),
            ));
        }

        self.join_count.fetch_add(1, Ordering::SeqCst);

        let transaction_hash = Self::random_hex(32);

        tracing::info!(
            contract_address = %contract_address,
            user_address = %user_address,
            amount = %amount,
            rpc_url = %self.config.rpc_url,
            transaction_hash = %transaction_hash,
            "[MOCK] Entry fee would be paid on chain"
        );

        Ok(transaction_hash)
    }

    async fn health_check(&self) -> Result<(), ChainError> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        self.enabled
    }
}
