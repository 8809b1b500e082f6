//! Cross-Domain Messenger - Entry Points

use cosmwasm_std::{
    coins, entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply,
    Response, StdError, StdResult, Storage, SubMsg, SubMsgResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;

use common::access::only_owner;
use common::relay::XDomainMessageSenderResponse;

use crate::error::ContractError;
use crate::msg::{
    ExecuteMsg, FailedMessageResponse, InstantiateMsg, MigrateMsg, QueryMsg, StatusResponse,
};
use crate::state::{
    Config, SentMessage, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, FAILED, IN_FLIGHT,
    NEXT_RELAY_NONCE, NEXT_SEND_NONCE, OUTBOX, RELAY_REPLY_ID, REPLAY_REPLY_ID, XDOMAIN_SENDER,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    CONFIG.save(
        deps.storage,
        &Config {
            owner: owner.clone(),
            denom: msg.denom.clone(),
            counterpart: None,
        },
    )?;
    NEXT_SEND_NONCE.save(deps.storage, &0u64)?;
    NEXT_RELAY_NONCE.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SendMessage {
            target,
            message,
            value,
            min_gas_limit,
        } => execute_send_message(deps, info, target, message, value, min_gas_limit),
        ExecuteMsg::RelayMessage { nonce } => execute_relay_message(deps, nonce),
        ExecuteMsg::ReplayMessage { nonce } => execute_replay_message(deps, nonce),
        ExecuteMsg::SetCounterpart { counterpart } => {
            execute_set_counterpart(deps, info, counterpart)
        }
    }
}

/// Append to the outbox. Attached funds stay with the messenger.
fn execute_send_message(
    deps: DepsMut,
    info: MessageInfo,
    target: String,
    message: Binary,
    value: Uint128,
    min_gas_limit: u32,
) -> Result<Response, ContractError> {
    let nonce = NEXT_SEND_NONCE.load(deps.storage)?;
    NEXT_SEND_NONCE.save(deps.storage, &(nonce + 1))?;

    let sent = SentMessage {
        nonce,
        sender: info.sender,
        target,
        message,
        value,
        min_gas_limit,
    };
    OUTBOX.save(deps.storage, nonce, &sent)?;

    Ok(Response::new()
        .add_attribute("action", "send_message")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sent.sender)
        .add_attribute("target", sent.target)
        .add_attribute("value", sent.value)
        .add_attribute("min_gas_limit", min_gas_limit.to_string()))
}

/// Deliver the counterpart's next message.
///
/// The delivery runs as a `reply_always` sub-message. A failing target has its
/// effects rolled back; the nonce is recorded in `FAILED` and the relay moves
/// past it.
fn execute_relay_message(deps: DepsMut, nonce: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let counterpart = config
        .counterpart
        .ok_or(ContractError::CounterpartNotSet)?;

    let expected = NEXT_RELAY_NONCE.load(deps.storage)?;
    if nonce != expected {
        return Err(ContractError::OutOfOrder {
            expected,
            got: nonce,
        });
    }

    let sent = load_counterpart_message(deps.as_ref(), &counterpart, nonce)?;
    NEXT_RELAY_NONCE.save(deps.storage, &(nonce + 1))?;

    let delivery = SubMsg::reply_always(
        begin_delivery(deps.storage, &config.denom, &sent)?,
        RELAY_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(delivery)
        .add_attribute("action", "relay_message")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sent.sender)
        .add_attribute("target", sent.target)
        .add_attribute("value", sent.value))
}

/// Retry a failed message. A second failure reverts the whole call and the
/// message stays replayable.
fn execute_replay_message(deps: DepsMut, nonce: u64) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let counterpart = config
        .counterpart
        .ok_or(ContractError::CounterpartNotSet)?;

    if !FAILED.has(deps.storage, nonce) {
        return Err(ContractError::NotFailed { nonce });
    }
    FAILED.remove(deps.storage, nonce);

    let sent = load_counterpart_message(deps.as_ref(), &counterpart, nonce)?;
    let delivery = SubMsg::reply_on_success(
        begin_delivery(deps.storage, &config.denom, &sent)?,
        REPLAY_REPLY_ID,
    );

    Ok(Response::new()
        .add_submessage(delivery)
        .add_attribute("action", "replay_message")
        .add_attribute("nonce", nonce.to_string())
        .add_attribute("sender", sent.sender)
        .add_attribute("target", sent.target)
        .add_attribute("value", sent.value))
}

fn load_counterpart_message(deps: Deps, counterpart: &Addr, nonce: u64) -> StdResult<SentMessage> {
    deps.querier
        .query_wasm_smart(counterpart, &QueryMsg::Message { nonce })
}

/// Expose the cross-domain sender and build the call to the target, paying
/// `value` from this messenger's balance.
fn begin_delivery(
    storage: &mut dyn Storage,
    denom: &str,
    sent: &SentMessage,
) -> StdResult<WasmMsg> {
    XDOMAIN_SENDER.save(storage, &sent.sender.to_string())?;
    IN_FLIGHT.save(storage, &sent.nonce)?;

    let funds = if sent.value.is_zero() {
        vec![]
    } else {
        coins(sent.value.u128(), denom)
    };
    Ok(WasmMsg::Execute {
        contract_addr: sent.target.clone(),
        msg: sent.message.clone(),
        funds,
    })
}

fn execute_set_counterpart(
    deps: DepsMut,
    info: MessageInfo,
    counterpart: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    only_owner(&info.sender, &config.owner)?;

    let counterpart = deps.api.addr_validate(&counterpart)?;
    config.counterpart = Some(counterpart.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_counterpart")
        .add_attribute("counterpart", counterpart))
}

/// The relayed call finished; the cross-domain sender is no longer valid.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    if msg.id != RELAY_REPLY_ID && msg.id != REPLAY_REPLY_ID {
        return Err(ContractError::UnknownReply { id: msg.id });
    }
    XDOMAIN_SENDER.remove(deps.storage);
    let nonce = IN_FLIGHT.load(deps.storage)?;
    IN_FLIGHT.remove(deps.storage);

    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_attribute("action", "relay_complete")
            .add_attribute("nonce", nonce.to_string())),
        SubMsgResult::Err(reason) => {
            FAILED.save(deps.storage, nonce, &reason)?;
            Ok(Response::new()
                .add_attribute("action", "relay_failed")
                .add_attribute("nonce", nonce.to_string())
                .add_attribute("reason", reason))
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::XDomainMessageSender {} => to_json_binary(&query_xdomain_sender(deps)?),
        QueryMsg::Message { nonce } => to_json_binary(&OUTBOX.load(deps.storage, nonce)?),
        QueryMsg::Status {} => to_json_binary(&query_status(deps)?),
        QueryMsg::FailedMessage { nonce } => to_json_binary(&FailedMessageResponse {
            nonce,
            reason: FAILED.may_load(deps.storage, nonce)?,
        }),
    }
}

fn query_xdomain_sender(deps: Deps) -> StdResult<XDomainMessageSenderResponse> {
    let sender = XDOMAIN_SENDER
        .may_load(deps.storage)?
        .ok_or_else(|| StdError::generic_err("xDomainMessageSender is not set"))?;
    Ok(XDomainMessageSenderResponse { sender })
}

fn query_status(deps: Deps) -> StdResult<StatusResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(StatusResponse {
        denom: config.denom,
        counterpart: config.counterpart,
        next_send_nonce: NEXT_SEND_NONCE.load(deps.storage)?,
        next_relay_nonce: NEXT_RELAY_NONCE.load(deps.storage)?,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::SubMsgResponse;

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                owner: "owner".to_string(),
                denom: "wei".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_send_message_assigns_sequential_nonces() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        for expected in 0..3u64 {
            execute(
                deps.as_mut(),
                mock_env(),
                mock_info("bridge", &[]),
                ExecuteMsg::SendMessage {
                    target: "counterpart_bridge".to_string(),
                    message: Binary::from(b"{}".to_vec()),
                    value: Uint128::new(expected as u128),
                    min_gas_limit: 100,
                },
            )
            .unwrap();

            let sent = OUTBOX.load(deps.as_ref().storage, expected).unwrap();
            assert_eq!(sent.nonce, expected);
            assert_eq!(sent.sender, Addr::unchecked("bridge"));
        }

        let status = query_status(deps.as_ref()).unwrap();
        assert_eq!(status.next_send_nonce, 3);
        assert_eq!(status.next_relay_nonce, 0);
    }

    #[test]
    fn test_relay_requires_counterpart() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            ExecuteMsg::RelayMessage { nonce: 0 },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::CounterpartNotSet);
    }

    #[test]
    fn test_relay_rejects_out_of_order() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetCounterpart {
                counterpart: "other_messenger".to_string(),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            ExecuteMsg::RelayMessage { nonce: 1 },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::OutOfOrder { expected: 0, got: 1 });
    }

    #[test]
    fn test_set_counterpart_owner_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("mallory", &[]),
            ExecuteMsg::SetCounterpart {
                counterpart: "other_messenger".to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Access(_)));
    }

    fn begin(deps: DepsMut, nonce: u64) {
        let sent = SentMessage {
            nonce,
            sender: Addr::unchecked("l1_bridge"),
            target: "l2_bridge".to_string(),
            message: Binary::default(),
            value: Uint128::zero(),
            min_gas_limit: 0,
        };
        begin_delivery(deps.storage, "wei", &sent).unwrap();
    }

    #[test]
    fn test_xdomain_sender_only_during_relay() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        assert!(query_xdomain_sender(deps.as_ref()).is_err());

        begin(deps.as_mut(), 0);
        assert_eq!(
            query_xdomain_sender(deps.as_ref()).unwrap().sender,
            "l1_bridge"
        );

        reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: RELAY_REPLY_ID,
                result: SubMsgResult::Ok(SubMsgResponse {
                    events: vec![],
                    data: None,
                }),
            },
        )
        .unwrap();
        assert!(query_xdomain_sender(deps.as_ref()).is_err());
        assert!(!FAILED.has(deps.as_ref().storage, 0));
    }

    #[test]
    fn test_failed_delivery_recorded() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        begin(deps.as_mut(), 4);
        let res = reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: RELAY_REPLY_ID,
                result: SubMsgResult::Err("target rejected message".to_string()),
            },
        )
        .unwrap();
        assert_eq!(res.attributes[0].value, "relay_failed");

        assert!(query_xdomain_sender(deps.as_ref()).is_err());
        assert!(IN_FLIGHT.may_load(deps.as_ref().storage).unwrap().is_none());
        assert_eq!(
            FAILED.load(deps.as_ref().storage, 4).unwrap(),
            "target rejected message"
        );
    }

    #[test]
    fn test_replay_requires_failed_message() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());
        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("owner", &[]),
            ExecuteMsg::SetCounterpart {
                counterpart: "other_messenger".to_string(),
            },
        )
        .unwrap();

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("relayer", &[]),
            ExecuteMsg::ReplayMessage { nonce: 0 },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::NotFailed { nonce: 0 });
    }

    #[test]
    fn test_unknown_reply_id() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = reply(
            deps.as_mut(),
            mock_env(),
            Reply {
                id: 99,
                result: SubMsgResult::Err("boom".to_string()),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::UnknownReply { id: 99 });
    }
}
