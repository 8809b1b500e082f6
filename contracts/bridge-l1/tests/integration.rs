//! Integration tests for the source-chain LST bridge using cw-multi-test.
//!
//! The destination bridge is played by a plain account that sends messages
//! through the paired messenger, so every relayed call here goes through the
//! real counterpart check.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdError, StdResult, Uint128,
};
use cw20::{BalanceResponse, Cw20Coin, Cw20ExecuteMsg, Cw20QueryMsg};
use cw_multi_test::{App, AppResponse, ContractWrapper, Executor};

use common::hash::compute_deposit_hash;
use common::oracle::{ExchangeRateResponse, TokenType};
use common::relay::{DestinationBridgeMsg, FinalizeLstWithdrawal, SourceBridgeMsg};
use cross_domain_messenger::state::SentMessage;
use lst_bridge_l1::msg::{
    DepositHashesResponse, DepositsCountResponse, ExecuteMsg, InstantiateMsg, LockedResponse,
    QueryMsg, ReceiveMsg,
};

const L2_BRIDGE: &str = "terra1l2bridge";

// ============================================================================
// Mock rate manager (1.05 value per share)
// ============================================================================

#[cw_serde]
enum ManagerQueryMsg {
    ExchangeRate {},
}

fn manager_instantiate(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Ok(Response::new())
}

fn manager_execute(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _msg: Empty,
) -> StdResult<Response> {
    Err(StdError::generic_err("read-only"))
}

fn manager_query(_deps: Deps, _env: Env, msg: ManagerQueryMsg) -> StdResult<Binary> {
    match msg {
        ManagerQueryMsg::ExchangeRate {} => to_json_binary(&ExchangeRateResponse {
            total_value: Uint128::new(105),
            total_supply: Uint128::new(100),
        }),
    }
}

// ============================================================================
// Test Setup
// ============================================================================

fn contract_bridge() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        lst_bridge_l1::contract::execute,
        lst_bridge_l1::contract::instantiate,
        lst_bridge_l1::contract::query,
    );
    Box::new(contract)
}

fn contract_cw20() -> Box<dyn cw_multi_test::Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw20_base::contract::execute,
        cw20_base::contract::instantiate,
        cw20_base::contract::query,
    );
    Box::new(contract)
}

fn contract_oracle() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        lst_price_oracle::contract::execute,
        lst_price_oracle::contract::instantiate,
        lst_price_oracle::contract::query,
    ))
}

fn contract_messenger() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(
        ContractWrapper::new(
            cross_domain_messenger::contract::execute,
            cross_domain_messenger::contract::instantiate,
            cross_domain_messenger::contract::query,
        )
        .with_reply(cross_domain_messenger::contract::reply),
    )
}

fn contract_manager() -> Box<dyn cw_multi_test::Contract<Empty>> {
    Box::new(ContractWrapper::new(
        manager_execute,
        manager_instantiate,
        manager_query,
    ))
}

struct TestEnv {
    app: App,
    owner: Addr,
    user: Addr,
    bridge: Addr,
    token: Addr,
    oracle: Addr,
    /// Messenger on the bridge's chain
    messenger: Addr,
    /// Messenger on the other chain
    remote_messenger: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let owner = Addr::unchecked("terra1owner");
    let user = Addr::unchecked("terra1user");

    let messenger_code = app.store_code(contract_messenger());
    let mut messengers = vec![];
    for label in ["messenger-l1", "messenger-l2"] {
        messengers.push(
            app.instantiate_contract(
                messenger_code,
                owner.clone(),
                &cross_domain_messenger::msg::InstantiateMsg {
                    owner: owner.to_string(),
                    denom: "uluna".to_string(),
                },
                &[],
                label,
                None,
            )
            .unwrap(),
        );
    }
    let (messenger, remote_messenger) = (messengers[0].clone(), messengers[1].clone());
    for (this, other) in [(&messenger, &remote_messenger), (&remote_messenger, &messenger)] {
        app.execute_contract(
            owner.clone(),
            this.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::SetCounterpart {
                counterpart: other.to_string(),
            },
            &[],
        )
        .unwrap();
    }

    let manager_code = app.store_code(contract_manager());
    let manager = app
        .instantiate_contract(manager_code, owner.clone(), &Empty {}, &[], "manager", None)
        .unwrap();

    let oracle_code = app.store_code(contract_oracle());
    let oracle = app
        .instantiate_contract(
            oracle_code,
            owner.clone(),
            &lst_price_oracle::msg::InstantiateMsg {
                owner: owner.to_string(),
                rate_manager: Some(manager.to_string()),
                token_types: vec![],
            },
            &[],
            "oracle",
            None,
        )
        .unwrap();

    let cw20_code = app.store_code(contract_cw20());
    let token = app
        .instantiate_contract(
            cw20_code,
            owner.clone(),
            &cw20_base::msg::InstantiateMsg {
                name: "Staked Token".to_string(),
                symbol: "STK".to_string(),
                decimals: 6,
                initial_balances: vec![
                    Cw20Coin {
                        address: user.to_string(),
                        amount: Uint128::new(1_000_000),
                    },
                    Cw20Coin {
                        address: oracle.to_string(),
                        amount: Uint128::new(1_000),
                    },
                ],
                mint: None,
                marketing: None,
            },
            &[],
            "stk",
            None,
        )
        .unwrap();

    app.execute_contract(
        owner.clone(),
        oracle.clone(),
        &lst_price_oracle::msg::ExecuteMsg::SetTokenTypes {
            entries: vec![lst_price_oracle::msg::TokenTypeEntry {
                token: token.to_string(),
                token_type: TokenType::ExchangeRate,
            }],
        },
        &[],
    )
    .unwrap();

    let bridge_code = app.store_code(contract_bridge());
    let bridge = app
        .instantiate_contract(
            bridge_code,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                messenger: messenger.to_string(),
                oracle: oracle.to_string(),
                counterpart: Some(L2_BRIDGE.to_string()),
            },
            &[],
            "lst-bridge-l1",
            None,
        )
        .unwrap();

    TestEnv {
        app,
        owner,
        user,
        bridge,
        token,
        oracle,
        messenger,
        remote_messenger,
    }
}

fn deposit(
    env: &mut TestEnv,
    sender: &Addr,
    amount: u128,
    hook: &ReceiveMsg,
) -> Result<AppResponse, String> {
    env.app
        .execute_contract(
            sender.clone(),
            env.token.clone(),
            &Cw20ExecuteMsg::Send {
                contract: env.bridge.to_string(),
                amount: Uint128::new(amount),
                msg: to_json_binary(hook).unwrap(),
            },
            &[],
        )
        .map_err(|e| e.root_cause().to_string())
}

fn deposit_lst(env: &mut TestEnv, amount: u128) -> [u8; 32] {
    let user = env.user.clone();
    deposit(
        env,
        &user,
        amount,
        &ReceiveMsg::DepositLst {
            min_gas_limit: 200_000,
            extra_data: Binary::default(),
        },
    )
    .unwrap();
    compute_deposit_hash(
        env.app.block_info().height,
        env.token.as_str(),
        env.user.as_str(),
        env.user.as_str(),
        Uint128::new(amount),
        Uint128::new(amount * 105 / 100),
    )
}

fn token_balance(env: &TestEnv, account: &Addr) -> Uint128 {
    let res: BalanceResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.token,
            &Cw20QueryMsg::Balance {
                address: account.to_string(),
            },
        )
        .unwrap();
    res.balance
}

fn locked(env: &TestEnv, hash: &[u8; 32]) -> Uint128 {
    let res: LockedResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::Locked {
                deposit_hash: Binary::from(hash.to_vec()),
            },
        )
        .unwrap();
    res.locked
}

/// Queue a withdrawal on the remote messenger as `sender` and relay it here.
fn relay_withdrawal(
    env: &mut TestEnv,
    sender: &str,
    hash: &[u8; 32],
    amount: u128,
) -> Result<AppResponse, String> {
    let payload = SourceBridgeMsg::FinalizeLstWithdrawal(FinalizeLstWithdrawal {
        deposit_hash: Binary::from(hash.to_vec()),
        token: env.token.to_string(),
        from: env.user.to_string(),
        to: env.user.to_string(),
        amount: Uint128::new(amount),
        extra_data: Binary::default(),
    });
    env.app
        .execute_contract(
            Addr::unchecked(sender),
            env.remote_messenger.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::SendMessage {
                target: env.bridge.to_string(),
                message: to_json_binary(&payload).unwrap(),
                value: Uint128::zero(),
                min_gas_limit: 200_000,
            },
            &[],
        )
        .unwrap();

    let status: cross_domain_messenger::msg::StatusResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &cross_domain_messenger::msg::QueryMsg::Status {},
        )
        .unwrap();
    let nonce = status.next_relay_nonce;
    let res = env
        .app
        .execute_contract(
            Addr::unchecked("terra1relayer"),
            env.messenger.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::RelayMessage { nonce },
            &[],
        )
        .unwrap();

    // A failed delivery is recorded by the messenger; replaying it reverts
    // with the bridge's own error.
    if delivery_failed(env, nonce) {
        return Err(replay(env, nonce).unwrap_err());
    }
    Ok(res)
}

fn delivery_failed(env: &TestEnv, nonce: u64) -> bool {
    let res: cross_domain_messenger::msg::FailedMessageResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &cross_domain_messenger::msg::QueryMsg::FailedMessage { nonce },
        )
        .unwrap();
    res.reason.is_some()
}

fn replay(env: &mut TestEnv, nonce: u64) -> Result<AppResponse, String> {
    env.app
        .execute_contract(
            Addr::unchecked("terra1relayer"),
            env.messenger.clone(),
            &cross_domain_messenger::msg::ExecuteMsg::ReplayMessage { nonce },
            &[],
        )
        .map_err(|e| e.root_cause().to_string())
}

// ============================================================================
// Deposit
// ============================================================================

#[test]
fn test_deposit_locks_tokens_and_queues_relay() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    assert_eq!(token_balance(&env, &env.bridge), Uint128::new(1_000));
    assert_eq!(token_balance(&env, &env.user), Uint128::new(999_000));
    assert_eq!(locked(&env, &hash), Uint128::new(1_000));

    let sent: SentMessage = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.messenger,
            &cross_domain_messenger::msg::QueryMsg::Message { nonce: 0 },
        )
        .unwrap();
    assert_eq!(sent.sender, env.bridge);
    assert_eq!(sent.target, L2_BRIDGE);
    assert_eq!(sent.value, Uint128::new(1_050));
    assert_eq!(sent.min_gas_limit, 200_000);

    let relayed: DestinationBridgeMsg = from_json(&sent.message).unwrap();
    let DestinationBridgeMsg::FinalizeLstDeposit(payload) = relayed;
    assert_eq!(payload.deposit_hash, Binary::from(hash.to_vec()));
    assert_eq!(payload.token, env.token.to_string());
    assert_eq!(payload.from, env.user.to_string());
    assert_eq!(payload.to, env.user.to_string());
    assert_eq!(payload.amount, Uint128::new(1_000));
}

#[test]
fn test_deposit_emits_initiated_event() {
    let mut env = setup();
    let user = env.user.clone();
    let res = deposit(
        &mut env,
        &user,
        200,
        &ReceiveMsg::DepositLstTo {
            to: "terra1recipient".to_string(),
            min_gas_limit: 0,
            extra_data: Binary::from(b"memo".to_vec()),
        },
    )
    .unwrap();

    let event = res
        .events
        .iter()
        .find(|e| e.ty == "wasm-lst_deposit_initiated")
        .expect("deposit event");
    let attr = |key: &str| {
        event
            .attributes
            .iter()
            .find(|a| a.key == key)
            .map(|a| a.value.clone())
            .unwrap()
    };
    assert_eq!(attr("to"), "terra1recipient");
    assert_eq!(attr("amount"), "200");
    assert_eq!(attr("value"), "210");
}

#[test]
fn test_deposit_history_tracks_recipient() {
    let mut env = setup();
    let first = deposit_lst(&mut env, 100);
    env.app.update_block(|b| b.height += 1);
    let second = deposit_lst(&mut env, 300);
    assert_ne!(first, second);

    let count: DepositsCountResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::DepositsCount {
                token: env.token.to_string(),
                holder: env.user.to_string(),
            },
        )
        .unwrap();
    assert_eq!(count.count, 2);

    let hashes: DepositHashesResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::DepositHashes {
                token: env.token.to_string(),
                holder: env.user.to_string(),
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    let listed: Vec<Binary> = hashes.deposits.into_iter().map(|d| d.deposit_hash).collect();
    assert_eq!(
        listed,
        vec![Binary::from(first.to_vec()), Binary::from(second.to_vec())]
    );
}

#[test]
fn test_deposit_from_contract_rejected() {
    let mut env = setup();
    let oracle = env.oracle.clone();
    let err = deposit(
        &mut env,
        &oracle,
        100,
        &ReceiveMsg::DepositLst {
            min_gas_limit: 0,
            extra_data: Binary::default(),
        },
    )
    .unwrap_err();
    assert!(err.contains("externally-owned"), "unexpected error: {}", err);

    // Explicit recipient is allowed from contracts
    deposit(
        &mut env,
        &oracle,
        100,
        &ReceiveMsg::DepositLstTo {
            to: "terra1recipient".to_string(),
            min_gas_limit: 0,
            extra_data: Binary::default(),
        },
    )
    .unwrap();
}

#[test]
fn test_deposit_unpriced_token_fails() {
    let mut env = setup();
    env.app
        .execute_contract(
            env.owner.clone(),
            env.oracle.clone(),
            &lst_price_oracle::msg::ExecuteMsg::SetTokenTypes {
                entries: vec![lst_price_oracle::msg::TokenTypeEntry {
                    token: env.token.to_string(),
                    token_type: TokenType::Unclassified,
                }],
            },
            &[],
        )
        .unwrap();

    let user = env.user.clone();
    let err = deposit(
        &mut env,
        &user,
        100,
        &ReceiveMsg::DepositLst {
            min_gas_limit: 0,
            extra_data: Binary::default(),
        },
    )
    .unwrap_err();
    assert!(err.contains("Unknown token"), "unexpected error: {}", err);
    assert_eq!(token_balance(&env, &env.user), Uint128::new(1_000_000));
}

#[test]
fn test_deposit_without_counterpart_fails() {
    let mut env = setup();
    let bridge_code = env.app.store_code(contract_bridge());
    env.bridge = env
        .app
        .instantiate_contract(
            bridge_code,
            env.owner.clone(),
            &InstantiateMsg {
                owner: env.owner.to_string(),
                messenger: env.messenger.to_string(),
                oracle: env.oracle.to_string(),
                counterpart: None,
            },
            &[],
            "lst-bridge-l1-unpaired",
            None,
        )
        .unwrap();

    let user = env.user.clone();
    let err = deposit(
        &mut env,
        &user,
        100,
        &ReceiveMsg::DepositLst {
            min_gas_limit: 0,
            extra_data: Binary::default(),
        },
    )
    .unwrap_err();
    assert!(err.contains("not configured"), "unexpected error: {}", err);
}

// ============================================================================
// Withdrawal finalization
// ============================================================================

#[test]
fn test_finalize_withdrawal_releases_tokens() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    relay_withdrawal(&mut env, L2_BRIDGE, &hash, 400).unwrap();
    assert_eq!(locked(&env, &hash), Uint128::new(600));
    assert_eq!(token_balance(&env, &env.user), Uint128::new(999_400));
    assert_eq!(token_balance(&env, &env.bridge), Uint128::new(600));

    relay_withdrawal(&mut env, L2_BRIDGE, &hash, 600).unwrap();
    assert!(locked(&env, &hash).is_zero());
    assert_eq!(token_balance(&env, &env.user), Uint128::new(1_000_000));
}

#[test]
fn test_finalize_withdrawal_rejects_over_release() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    let err = relay_withdrawal(&mut env, L2_BRIDGE, &hash, 1_001).unwrap_err();
    assert!(err.contains("Insufficient locked"), "unexpected error: {}", err);
    assert_eq!(locked(&env, &hash), Uint128::new(1_000));
}

#[test]
fn test_finalize_withdrawal_rejects_wrong_counterpart() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    let err = relay_withdrawal(&mut env, "terra1impostor", &hash, 10).unwrap_err();
    assert!(err.contains("not the counterpart"), "unexpected error: {}", err);
    assert_eq!(locked(&env, &hash), Uint128::new(1_000));
}

#[test]
fn test_pause_blocks_finalize() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Pause {},
            &[],
        )
        .unwrap();
    let err = relay_withdrawal(&mut env, L2_BRIDGE, &hash, 10).unwrap_err();
    assert!(err.contains("paused"), "unexpected error: {}", err);

    env.app
        .execute_contract(
            env.owner.clone(),
            env.bridge.clone(),
            &ExecuteMsg::Unpause {},
            &[],
        )
        .unwrap();
    // The failed message is replayed once the bridge accepts it
    replay(&mut env, 0).unwrap();
    assert!(!delivery_failed(&env, 0));
    assert_eq!(locked(&env, &hash), Uint128::new(990));
}

#[test]
fn test_compute_deposit_hash_query_matches_ledger() {
    let mut env = setup();
    let hash = deposit_lst(&mut env, 1_000);

    let res: lst_bridge_l1::msg::ComputeHashResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.bridge,
            &QueryMsg::ComputeDepositHash {
                height: env.app.block_info().height,
                token: env.token.to_string(),
                from: env.user.to_string(),
                to: env.user.to_string(),
                amount: Uint128::new(1_000),
                value: Uint128::new(1_050),
            },
        )
        .unwrap();
    assert_eq!(res.deposit_hash, Binary::from(hash.to_vec()));
}
