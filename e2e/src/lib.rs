//! Two-chain harness for the LST bridge.
//!
//! Both chains share one `App`. Each side gets its own messenger; the pair
//! relays to each other and the destination messenger is pre-funded so it can
//! deliver deposit value in the destination denom. Relaying is explicit: a
//! message only crosses when the test calls [`Harness::relay_to_l2`] or
//! [`Harness::relay_to_l1`]. A delivery the target rejects is recorded by the
//! messenger and can be retried with [`Harness::replay_to_l2`] or
//! [`Harness::replay_to_l1`].

pub mod rate_manager;

use anyhow::{anyhow, bail, Result as AnyResult};
use cosmwasm_std::{coins, to_json_binary, Addr, Binary, Empty, Uint128};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};

use common::hash::hex_to_bytes32;
use common::oracle::TokenType;
use cross_domain_messenger::msg::{FailedMessageResponse, StatusResponse};
use lst_bridge_l1::msg::{LockedResponse, ReceiveMsg};
use lst_bridge_l2::msg::DepositResponse;

/// Native denom on the source chain
pub const L1_DENOM: &str = "uluna";
/// Native denom on the destination chain
pub const L2_DENOM: &str = "wei";
/// Destination messenger float used to deliver deposit value
pub const L2_FLOAT: u128 = 1_000_000_000_000;

pub const DEFAULT_GAS_LIMIT: u32 = 200_000;

fn contract_l1_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        lst_bridge_l1::contract::execute,
        lst_bridge_l1::contract::instantiate,
        lst_bridge_l1::contract::query,
    ))
}

fn contract_l2_bridge() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        lst_bridge_l2::contract::execute,
        lst_bridge_l2::contract::instantiate,
        lst_bridge_l2::contract::query,
    ))
}

fn contract_oracle() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        lst_price_oracle::contract::execute,
        lst_price_oracle::contract::instantiate,
        lst_price_oracle::contract::query,
    ))
}

fn contract_messenger() -> Box<dyn Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            cross_domain_messenger::contract::execute,
            cross_domain_messenger::contract::instantiate,
            cross_domain_messenger::contract::query,
        )
        .with_reply(cross_domain_messenger::contract::reply),
    )
}

fn contract_cw20() -> Box<dyn Contract<Empty>> {
    Box::new(ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    ))
}

pub struct Harness {
    pub app: App,
    pub owner: Addr,
    pub l1_messenger: Addr,
    pub l2_messenger: Addr,
    pub rate_manager: Addr,
    pub oracle: Addr,
    /// The liquid staking token on L1
    pub lst: Addr,
    pub l1_bridge: Addr,
    pub l2_bridge: Addr,
}

impl Harness {
    /// Deploy both chains. `holders` receive LST on L1; the exchange rate
    /// starts at `total_value / total_supply`.
    pub fn new(
        holders: &[(&str, u128)],
        total_value: u128,
        total_supply: u128,
    ) -> AnyResult<Self> {
        let mut app = App::default();
        let owner = Addr::unchecked("terra1owner");

        let messenger_code = app.store_code(contract_messenger());
        let l1_messenger = app.instantiate_contract(
            messenger_code,
            owner.clone(),
            &cross_domain_messenger::msg::InstantiateMsg {
                owner: owner.to_string(),
                denom: L1_DENOM.to_string(),
            },
            &[],
            "messenger-l1",
            None,
        )?;
        let l2_messenger = app.instantiate_contract(
            messenger_code,
            owner.clone(),
            &cross_domain_messenger::msg::InstantiateMsg {
                owner: owner.to_string(),
                denom: L2_DENOM.to_string(),
            },
            &[],
            "messenger-l2",
            None,
        )?;
        for (this, other) in [(&l1_messenger, &l2_messenger), (&l2_messenger, &l1_messenger)] {
            app.execute_contract(
                owner.clone(),
                this.clone(),
                &cross_domain_messenger::msg::ExecuteMsg::SetCounterpart {
                    counterpart: other.to_string(),
                },
                &[],
            )?;
        }
        app.init_modules(|router, _, storage| {
            router
                .bank
                .init_balance(storage, &l2_messenger, coins(L2_FLOAT, L2_DENOM))
        })?;

        let manager_code = app.store_code(rate_manager::contract());
        let rate_manager = app.instantiate_contract(
            manager_code,
            owner.clone(),
            &rate_manager::InstantiateMsg {
                total_value: Uint128::new(total_value),
                total_supply: Uint128::new(total_supply),
            },
            &[],
            "rate-manager",
            None,
        )?;

        let oracle_code = app.store_code(contract_oracle());
        let oracle = app.instantiate_contract(
            oracle_code,
            owner.clone(),
            &lst_price_oracle::msg::InstantiateMsg {
                owner: owner.to_string(),
                rate_manager: Some(rate_manager.to_string()),
                token_types: vec![],
            },
            &[],
            "lst-price-oracle",
            None,
        )?;

        let cw20_code = app.store_code(contract_cw20());
        let lst = app.instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Liquid Staked Token".to_string(),
                symbol: "LST".to_string(),
                decimals: 18,
                initial_balances: holders
                    .iter()
                    .map(|(address, amount)| Cw20Coin {
                        address: address.to_string(),
                        amount: Uint128::new(*amount),
                    })
                    .collect(),
                mint: None,
                marketing: None,
            },
            &[],
            "lst",
            None,
        )?;
        app.execute_contract(
            owner.clone(),
            oracle.clone(),
            &lst_price_oracle::msg::ExecuteMsg::SetTokenTypes {
                entries: vec![lst_price_oracle::msg::TokenTypeEntry {
                    token: lst.to_string(),
                    token_type: TokenType::ExchangeRate,
                }],
            },
            &[],
        )?;

        let l1_code = app.store_code(contract_l1_bridge());
        let l1_bridge = app.instantiate_contract(
            l1_code,
            owner.clone(),
            &lst_bridge_l1::msg::InstantiateMsg {
                owner: owner.to_string(),
                messenger: l1_messenger.to_string(),
                oracle: oracle.to_string(),
                counterpart: None,
            },
            &[],
            "lst-bridge-l1",
            None,
        )?;

        let l2_code = app.store_code(contract_l2_bridge());
        let l2_bridge = app.instantiate_contract(
            l2_code,
            owner.clone(),
            &lst_bridge_l2::msg::InstantiateMsg {
                owner: owner.to_string(),
                messenger: l2_messenger.to_string(),
                counterpart: Some(l1_bridge.to_string()),
                denom: L2_DENOM.to_string(),
            },
            &[],
            "lst-bridge-l2",
            None,
        )?;
        app.execute_contract(
            owner.clone(),
            l1_bridge.clone(),
            &lst_bridge_l1::msg::ExecuteMsg::SetCounterpart {
                counterpart: l2_bridge.to_string(),
            },
            &[],
        )?;

        Ok(Self {
            app,
            owner,
            l1_messenger,
            l2_messenger,
            rate_manager,
            oracle,
            lst,
            l1_bridge,
            l2_bridge,
        })
    }

    pub fn set_rate(&mut self, total_value: u128, total_supply: u128) -> AnyResult<()> {
        self.app.execute_contract(
            self.owner.clone(),
            self.rate_manager.clone(),
            &rate_manager::ExecuteMsg::SetRate {
                total_value: Uint128::new(total_value),
                total_supply: Uint128::new(total_supply),
            },
            &[],
        )?;
        Ok(())
    }

    /// Lock `amount` for the depositor's own L2 address. Returns the deposit hash.
    pub fn deposit(&mut self, from: &Addr, amount: u128) -> AnyResult<[u8; 32]> {
        self.send_lst(
            from,
            amount,
            &ReceiveMsg::DepositLst {
                min_gas_limit: DEFAULT_GAS_LIMIT,
                extra_data: Binary::default(),
            },
        )
    }

    pub fn deposit_to(&mut self, from: &Addr, to: &str, amount: u128) -> AnyResult<[u8; 32]> {
        self.send_lst(
            from,
            amount,
            &ReceiveMsg::DepositLstTo {
                to: to.to_string(),
                min_gas_limit: DEFAULT_GAS_LIMIT,
                extra_data: Binary::default(),
            },
        )
    }

    fn send_lst(&mut self, from: &Addr, amount: u128, hook: &ReceiveMsg) -> AnyResult<[u8; 32]> {
        let res = self.app.execute_contract(
            from.clone(),
            self.lst.clone(),
            &Cw20ExecuteMsg::Send {
                contract: self.l1_bridge.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(hook)?,
            },
            &[],
        )?;
        deposit_hash_from(&res)
    }

    /// Redeem on L2 for `to` on L1, paying `amount` of the L2 denom.
    pub fn withdraw_to(
        &mut self,
        holder: &Addr,
        deposit_hash: &[u8; 32],
        to: &str,
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            holder.clone(),
            self.l2_bridge.clone(),
            &lst_bridge_l2::msg::ExecuteMsg::WithdrawLstTo {
                deposit_hash: Binary::from(deposit_hash.to_vec()),
                to: to.to_string(),
                amount: Uint128::new(amount),
                min_gas_limit: DEFAULT_GAS_LIMIT,
                extra_data: Binary::default(),
            },
            &coins(amount, L2_DENOM),
        )
    }

    /// Redeem on L2, paying `amount` of the L2 denom.
    pub fn withdraw(
        &mut self,
        holder: &Addr,
        deposit_hash: &[u8; 32],
        amount: u128,
    ) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            holder.clone(),
            self.l2_bridge.clone(),
            &lst_bridge_l2::msg::ExecuteMsg::WithdrawLst {
                deposit_hash: Binary::from(deposit_hash.to_vec()),
                amount: Uint128::new(amount),
                min_gas_limit: DEFAULT_GAS_LIMIT,
                extra_data: Binary::default(),
            },
            &coins(amount, L2_DENOM),
        )
    }

    /// Deliver the oldest pending L1 → L2 message.
    pub fn relay_to_l2(&mut self) -> AnyResult<AppResponse> {
        let (from, to) = (self.l1_messenger.clone(), self.l2_messenger.clone());
        self.relay_next(&from, &to)
    }

    /// Deliver the oldest pending L2 → L1 message.
    pub fn relay_to_l1(&mut self) -> AnyResult<AppResponse> {
        let (from, to) = (self.l2_messenger.clone(), self.l1_messenger.clone());
        self.relay_next(&from, &to)
    }

    /// Messages sent from `from` that `to` has not delivered yet.
    pub fn pending(&self, from: &Addr, to: &Addr) -> AnyResult<u64> {
        let sent = self.messenger_status(from)?.next_send_nonce;
        let relayed = self.messenger_status(to)?.next_relay_nonce;
        Ok(sent.saturating_sub(relayed))
    }

    /// Retry a failed L1 → L2 message.
    pub fn replay_to_l2(&mut self, nonce: u64) -> AnyResult<AppResponse> {
        let to = self.l2_messenger.clone();
        self.replay(&to, nonce)
    }

    /// Retry a failed L2 → L1 message.
    pub fn replay_to_l1(&mut self, nonce: u64) -> AnyResult<AppResponse> {
        let to = self.l1_messenger.clone();
        self.replay(&to, nonce)
    }

    /// Error recorded by `messenger` for a counterpart message it failed to
    /// deliver.
    pub fn failed_delivery(&self, messenger: &Addr, nonce: u64) -> AnyResult<Option<String>> {
        let res: FailedMessageResponse = self.app.wrap().query_wasm_smart(
            messenger,
            &cross_domain_messenger::msg::QueryMsg::FailedMessage { nonce },
        )?;
        Ok(res.reason)
    }

    /// Relay the next message. The queue advances even when the target
    /// rejects it; that case is reported as an error here.
    fn relay_next(&mut self, from: &Addr, to: &Addr) -> AnyResult<AppResponse> {
        if self.pending(from, to)? == 0 {
            bail!("nothing to relay from {}", from);
        }
        let nonce = self.messenger_status(to)?.next_relay_nonce;
        let res = self.app.execute_contract(
            Addr::unchecked("terra1relayer"),
            to.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::RelayMessage { nonce },
            &[],
        )?;
        if let Some(reason) = self.failed_delivery(to, nonce)? {
            bail!("delivery of message {} failed: {}", nonce, reason);
        }
        Ok(res)
    }

    fn replay(&mut self, to: &Addr, nonce: u64) -> AnyResult<AppResponse> {
        self.app.execute_contract(
            Addr::unchecked("terra1relayer"),
            to.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::ReplayMessage { nonce },
            &[],
        )
    }

    fn messenger_status(&self, messenger: &Addr) -> AnyResult<StatusResponse> {
        Ok(self.app.wrap().query_wasm_smart(
            messenger,
            &cross_domain_messenger::msg::QueryMsg::Status {},
        )?)
    }

    pub fn lst_balance(&self, account: &Addr) -> AnyResult<Uint128> {
        let res: BalanceResponse = self.app.wrap().query_wasm_smart(
            &self.lst,
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )?;
        Ok(res.balance)
    }

    /// Balance in the L2 denom.
    pub fn l2_balance(&self, account: &Addr) -> AnyResult<Uint128> {
        Ok(self.app.wrap().query_balance(account, L2_DENOM)?.amount)
    }

    pub fn l1_locked(&self, deposit_hash: &[u8; 32]) -> AnyResult<Uint128> {
        let res: LockedResponse = self.app.wrap().query_wasm_smart(
            &self.l1_bridge,
            &lst_bridge_l1::msg::QueryMsg::Locked {
                deposit_hash: Binary::from(deposit_hash.to_vec()),
            },
        )?;
        Ok(res.locked)
    }

    pub fn mirror(&self, deposit_hash: &[u8; 32]) -> AnyResult<DepositResponse> {
        Ok(self.app.wrap().query_wasm_smart(
            &self.l2_bridge,
            &lst_bridge_l2::msg::QueryMsg::Deposit {
                deposit_hash: Binary::from(deposit_hash.to_vec()),
            },
        )?)
    }
}

/// Read the deposit hash from the `lst_deposit_initiated` event.
pub fn deposit_hash_from(res: &AppResponse) -> AnyResult<[u8; 32]> {
    let hex = res
        .events
        .iter()
        .filter(|e| e.ty == "wasm-lst_deposit_initiated")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == "deposit_hash")
        .map(|a| a.value.clone())
        .ok_or_else(|| anyhow!("no lst_deposit_initiated event"))?;
    Ok(hex_to_bytes32(&hex)?)
}
