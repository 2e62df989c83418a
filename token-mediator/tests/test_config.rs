//! Token mediator configuration tests.
//!
//! - Privileged setters reject non-admin callers
//! - Gas limit, remote mediator and token pair validation
//! - Token pair replacement and pagination
//! - Bridge replacement and allow-list overwrite
//! - Two-step admin transfer

use cosmwasm_std::{Addr, Binary};
use cw_multi_test::{App, ContractWrapper, Executor};

use common::ChainId;
use token_mediator::msg::{
    AllowedSenderResponse, BridgeResponse, ConfigResponse, ExecuteMsg, InstantiateMsg,
    MediatedTokenResponse, MediatedTokensResponse, PendingAdminResponse, QueryMsg,
    RemoteMediatorResponse, TokenInfo,
};

fn contract_mediator() -> Box<dyn cw_multi_test::Contract<cosmwasm_std::Empty>> {
    let contract = ContractWrapper::new(
        token_mediator::contract::execute,
        token_mediator::contract::instantiate,
        token_mediator::contract::query,
    )
    .with_migrate(token_mediator::contract::migrate);
    Box::new(contract)
}

struct TestEnv {
    app: App,
    contract_addr: Addr,
    admin: Addr,
    user: Addr,
}

fn setup() -> TestEnv {
    let mut app = App::default();
    let admin = Addr::unchecked("terra1admin");
    let user = Addr::unchecked("terra1user");

    let code_id = app.store_code(contract_mediator());
    let contract_addr = app
        .instantiate_contract(
            code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: admin.to_string(),
                bridge: "terra1bridge".to_string(),
                remote_mediator: None,
                remote_chain_id: None,
                request_gas_limit: 100_000,
                tokens: vec![],
            },
            &[],
            "token-mediator",
            Some(admin.to_string()),
        )
        .unwrap();

    TestEnv {
        app,
        contract_addr,
        admin,
        user,
    }
}

fn token_info(local: &str, remote: &str, mint_and_burn: bool) -> TokenInfo {
    TokenInfo {
        local_token: local.to_string(),
        remote_token: remote.to_string(),
        mint_and_burn,
    }
}

fn query_config(env: &TestEnv) -> ConfigResponse {
    env.app
        .wrap()
        .query_wasm_smart(&env.contract_addr, &QueryMsg::Config {})
        .unwrap()
}

// ============================================================================
// Authorization
// ============================================================================

#[test]
fn test_admin_only_setters() {
    let mut env = setup();

    let msgs = vec![
        ExecuteMsg::SetBridge {
            bridge: "terra1other".to_string(),
        },
        ExecuteMsg::AddAllowedSender {
            sender: "0xsender".to_string(),
            chain_id: ChainId::from(2001u64).to_binary(),
        },
        ExecuteMsg::SetRequestGasLimit { limit: 1 },
        ExecuteMsg::SetRemoteMediator {
            address: "0xmediator".to_string(),
            chain_id: ChainId::from(2001u64).to_binary(),
        },
        ExecuteMsg::AddMediatedToken {
            token: token_info("terra1token", "0xtoken", false),
        },
        ExecuteMsg::ProposeAdmin {
            new_admin: env.user.to_string(),
        },
    ];

    for msg in msgs {
        let res = env
            .app
            .execute_contract(env.user.clone(), env.contract_addr.clone(), &msg, &[]);
        let err_str = res.unwrap_err().root_cause().to_string();
        assert!(
            err_str.contains("only admin"),
            "Expected unauthorized error for {:?}, got: {}",
            msg,
            err_str
        );
    }
}

// ============================================================================
// Setters
// ============================================================================

#[test]
fn test_set_request_gas_limit() {
    let mut env = setup();

    let res = env.app.execute_contract(
        env.admin.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::SetRequestGasLimit { limit: 0 },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid gas limit"));

    env.app
        .execute_contract(
            env.admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::SetRequestGasLimit { limit: 250_000 },
            &[],
        )
        .unwrap();
    assert_eq!(query_config(&env).request_gas_limit, 250_000);
}

#[test]
fn test_set_remote_mediator_allows_sender() {
    let mut env = setup();
    let chain = ChainId::from(2001u64);

    let res = env.app.execute_contract(
        env.admin.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::SetRemoteMediator {
            address: "0xmediator".to_string(),
            chain_id: ChainId::ZERO.to_binary(),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid chain ID"));

    env.app
        .execute_contract(
            env.admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::SetRemoteMediator {
                address: "0xmediator".to_string(),
                chain_id: chain.to_binary(),
            },
            &[],
        )
        .unwrap();

    let remote: RemoteMediatorResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.contract_addr, &QueryMsg::RemoteMediator {})
        .unwrap();
    assert_eq!(remote.address, Some("0xmediator".to_string()));
    assert_eq!(remote.chain_id, Some(chain.to_binary()));

    let allowed: AllowedSenderResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::AllowedSender {
                chain_id: chain.to_binary(),
            },
        )
        .unwrap();
    assert_eq!(allowed.sender, Some("0xmediator".to_string()));
}

#[test]
fn test_allowed_sender_overwrite() {
    let mut env = setup();
    let chain = ChainId::from(2001u64);

    for sender in ["0xfirst", "0xsecond"] {
        env.app
            .execute_contract(
                env.admin.clone(),
                env.contract_addr.clone(),
                &ExecuteMsg::AddAllowedSender {
                    sender: sender.to_string(),
                    chain_id: chain.to_binary(),
                },
                &[],
            )
            .unwrap();
    }

    let allowed: AllowedSenderResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::AllowedSender {
                chain_id: chain.to_binary(),
            },
        )
        .unwrap();
    assert_eq!(allowed.sender, Some("0xsecond".to_string()));

    // chain id must be 32 bytes
    let res = env.app.execute_contract(
        env.admin.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::AddAllowedSender {
            sender: "0xthird".to_string(),
            chain_id: Binary::from(vec![0, 0, 7, 209]),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("Invalid chain ID"));
}

#[test]
fn test_set_bridge() {
    let mut env = setup();

    env.app
        .execute_contract(
            env.admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::SetBridge {
                bridge: "terra1newbridge".to_string(),
            },
            &[],
        )
        .unwrap();

    let bridge: BridgeResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.contract_addr, &QueryMsg::Bridge {})
        .unwrap();
    assert_eq!(bridge.bridge, Addr::unchecked("terra1newbridge"));
    assert_eq!(query_config(&env).bridge, Addr::unchecked("terra1newbridge"));
}

// ============================================================================
// Token Pairs
// ============================================================================

#[test]
fn test_add_mediated_token_replaces_pair() {
    let mut env = setup();

    for remote in ["0xold", "0xnew"] {
        env.app
            .execute_contract(
                env.admin.clone(),
                env.contract_addr.clone(),
                &ExecuteMsg::AddMediatedToken {
                    token: token_info("terra1token", remote, true),
                },
                &[],
            )
            .unwrap();
    }

    let token: MediatedTokenResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::MediatedToken {
                local_token: "terra1token".to_string(),
            },
        )
        .unwrap();
    assert_eq!(token.remote_token, "0xnew");
    assert!(token.mint_and_burn);

    let res = env.app.execute_contract(
        env.admin.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::AddMediatedToken {
            token: token_info("terra1token", "", false),
        },
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("remote_token must not be empty"));

    let res: Result<MediatedTokenResponse, _> = env.app.wrap().query_wasm_smart(
        &env.contract_addr,
        &QueryMsg::MediatedToken {
            local_token: "terra1unknown".to_string(),
        },
    );
    assert!(res.is_err());
}

#[test]
fn test_mediated_tokens_pagination() {
    let mut env = setup();

    for i in 0..12 {
        env.app
            .execute_contract(
                env.admin.clone(),
                env.contract_addr.clone(),
                &ExecuteMsg::AddMediatedToken {
                    token: token_info(&format!("terra1token{:02}", i), "0xremote", false),
                },
                &[],
            )
            .unwrap();
    }

    let page: MediatedTokensResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::MediatedTokens {
                start_after: None,
                limit: None,
            },
        )
        .unwrap();
    assert_eq!(page.tokens.len(), 10);
    assert_eq!(page.tokens[0].local_token, Addr::unchecked("terra1token00"));

    let rest: MediatedTokensResponse = env
        .app
        .wrap()
        .query_wasm_smart(
            &env.contract_addr,
            &QueryMsg::MediatedTokens {
                start_after: Some(page.tokens[9].local_token.to_string()),
                limit: Some(100),
            },
        )
        .unwrap();
    assert_eq!(rest.tokens.len(), 2);
    assert_eq!(rest.tokens[1].local_token, Addr::unchecked("terra1token11"));
}

// ============================================================================
// Admin Transfer
// ============================================================================

#[test]
fn test_admin_transfer() {
    let mut env = setup();
    let new_admin = Addr::unchecked("terra1newadmin");

    env.app
        .execute_contract(
            env.admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::ProposeAdmin {
                new_admin: new_admin.to_string(),
            },
            &[],
        )
        .unwrap();

    let pending: PendingAdminResponse = env
        .app
        .wrap()
        .query_wasm_smart(&env.contract_addr, &QueryMsg::PendingAdmin {})
        .unwrap();
    assert_eq!(pending.pending_admin, Some(new_admin.clone()));

    let res = env.app.execute_contract(
        env.user.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::AcceptAdmin {},
        &[],
    );
    assert!(res
        .unwrap_err()
        .root_cause()
        .to_string()
        .contains("only pending admin"));

    env.app
        .execute_contract(
            new_admin.clone(),
            env.contract_addr.clone(),
            &ExecuteMsg::AcceptAdmin {},
            &[],
        )
        .unwrap();
    assert_eq!(query_config(&env).admin, new_admin);

    // old admin lost its rights
    let res = env.app.execute_contract(
        env.admin.clone(),
        env.contract_addr.clone(),
        &ExecuteMsg::SetRequestGasLimit { limit: 1 },
        &[],
    );
    assert!(res.is_err());
}
