use std::env;

pub const NETWORK_ENV_VAR: &str = "CUBE_NETWORK";
pub const FROM_KEY_ENV_VAR: &str = "CUBE_FROM_KEY";

pub const DEFAULT_NETWORK: &str = "development";

/// Ephemeral chains whose state is deterministic and disposable.
pub const LOCAL_BLOCKCHAIN_ENVIRONMENTS: [&str; 2] = ["development", "ganache-local"];

/// Local chains forked from a live network. Indexed accounts are available,
/// but state is inherited from the fork.
pub const FORKED_LOCAL_ENVIRONMENTS: [&str; 2] = ["mainnet-fork", "mainnet-fork-dev"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network {
    pub name: String,
}

impl Network {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn active() -> Self {
        Self::new(env::var(NETWORK_ENV_VAR).unwrap_or_else(|_| DEFAULT_NETWORK.to_string()))
    }

    pub fn is_local(&self) -> bool {
        LOCAL_BLOCKCHAIN_ENVIRONMENTS.contains(&self.name.as_str())
    }

    pub fn is_forked(&self) -> bool {
        FORKED_LOCAL_ENVIRONMENTS.contains(&self.name.as_str())
    }

    pub fn has_indexed_accounts(&self) -> bool {
        self.is_local() || self.is_forked()
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK)
    }
}
