use std::env;

use anyhow::{anyhow, bail};
use cosmwasm_std::{Addr, Coin};
use cube_rs::token::{CubeTokenExecuteMsg, CubeTokenInstantiateMsg};
use cube_token::contract::{execute, instantiate, migrate, query};
use cw_multi_test::{error::AnyResult, App, ContractWrapper, Executor};

use crate::{
    handle::CubeTokenHandle,
    network::{Network, FROM_KEY_ENV_VAR},
    receipt::TxReceipt,
};

pub const LOCAL_ACCOUNT_COUNT: usize = 10;
pub const NATIVE_DENOM: &str = "ucube";
pub const INITIAL_NATIVE_BALANCE: u128 = 1_000_000_000_000;

pub struct CubeTestApp {
    pub app: App,
    pub network: Network,
    cube_token_code_id: Option<u64>,
    deployments: Vec<Addr>,
}

impl CubeTestApp {
    pub fn setup() -> Self {
        Self::with_network(Network::active())
    }

    pub fn with_network(network: Network) -> Self {
        let mut app = App::default();

        if network.has_indexed_accounts() {
            let accounts = (0..LOCAL_ACCOUNT_COUNT)
                .map(|index| app.api().addr_make(&format!("account{index}")))
                .collect::<Vec<_>>();

            app.init_modules(|router, _, storage| {
                for account in accounts.iter() {
                    router
                        .bank
                        .init_balance(
                            storage,
                            account,
                            vec![Coin::new(INITIAL_NATIVE_BALANCE, NATIVE_DENOM)],
                        )
                        .unwrap();
                }
            });
        }

        println!("[CubeTestApp] Active network: {}", network.name);

        Self {
            app,
            network,
            cube_token_code_id: None,
            deployments: vec![],
        }
    }

    /// Returns true, after logging why, when the active network is not a
    /// local one and the caller should skip.
    pub fn skip_unless_local(&self) -> bool {
        if self.network.is_local() {
            return false;
        }

        println!(
            "[CubeTestApp] Skipping: only for local testing (active network: {})",
            self.network.name
        );

        true
    }

    /// Indexed accounts on local and forked networks, otherwise the account
    /// named by the from-key variable.
    pub fn get_account(&self, index: Option<usize>) -> AnyResult<Addr> {
        if self.network.has_indexed_accounts() {
            let index = index.unwrap_or_default();

            if index >= LOCAL_ACCOUNT_COUNT {
                bail!("No local account at index {index} ({LOCAL_ACCOUNT_COUNT} available)");
            }

            return Ok(self.app.api().addr_make(&format!("account{index}")));
        }

        let key = env::var(FROM_KEY_ENV_VAR).map_err(|_| {
            anyhow!(
                "{FROM_KEY_ENV_VAR} must be set to resolve accounts on network {}",
                self.network.name
            )
        })?;

        Ok(self.app.api().addr_make(&key))
    }

    fn cube_token_code_id(&mut self) -> u64 {
        match self.cube_token_code_id {
            Some(code_id) => code_id,
            None => {
                let code_id = self.app.store_code(Box::new(
                    ContractWrapper::new(execute, instantiate, query).with_migrate(migrate),
                ));
                self.cube_token_code_id = Some(code_id);
                code_id
            }
        }
    }

    /// Deploys a fresh contract from account 0.
    pub fn deploy_cube_token(&mut self) -> AnyResult<CubeTokenHandle> {
        let deployer = self.get_account(None)?;
        self.deploy_cube_token_from(&deployer)
    }

    pub fn deploy_cube_token_from(&mut self, from: &Addr) -> AnyResult<CubeTokenHandle> {
        let code_id = self.cube_token_code_id();

        let contract_addr = self.app.instantiate_contract(
            code_id,
            from.clone(),
            &CubeTokenInstantiateMsg {
                name: "Cube Token".to_string(),
                symbol: "CUBE".to_string(),
                decimals: 18,
            },
            &[],
            "cube-token",
            Some(from.to_string()),
        )?;

        println!("[CubeTestApp] Deployed CubeToken at {contract_addr} (from {from})");

        self.deployments.push(contract_addr.clone());

        Ok(CubeTokenHandle { contract_addr })
    }

    /// The most recent deployment, deploying from account 0 if there is none.
    pub fn cube_token(&mut self) -> AnyResult<CubeTokenHandle> {
        match self.deployments.last().cloned() {
            Some(contract_addr) => Ok(CubeTokenHandle { contract_addr }),
            None => self.deploy_cube_token(),
        }
    }

    pub fn deployments(&self) -> &[Addr] {
        &self.deployments
    }

    pub fn submit(
        &mut self,
        from: &Addr,
        contract_addr: &Addr,
        msg: &CubeTokenExecuteMsg,
    ) -> AnyResult<TxReceipt> {
        let block_height = self.block_height();

        println!("[CubeTestApp] Submitting {msg:?} to {contract_addr} (from {from})");

        let response = self
            .app
            .execute_contract(from.clone(), contract_addr.clone(), msg, &[])?;

        Ok(TxReceipt {
            block_height,
            response,
        })
    }

    pub fn block_height(&self) -> u64 {
        self.app.block_info().height
    }

    pub fn advance_blocks(&mut self, count: u64) {
        self.app.update_block(|block| {
            block.height += count;
            block.time = block.time.plus_seconds(5 * count);
        });
    }

    pub fn query_native_balance(&self, addr: &Addr) -> Coin {
        self.app.wrap().query_balance(addr, NATIVE_DENOM).unwrap()
    }
}
