use super::*;

/// Initialize the contract with the deployer account as owner, an empty
/// allowlist and no tokens. The parameter is the description shared by the
/// metadata of every token minted later; it cannot be changed afterwards.
#[init(contract = "FanShareNFT", parameter = "String")]
fn init<S: HasStateApi>(
    ctx: &impl HasInitContext,
    state_builder: &mut StateBuilder<S>,
) -> InitResult<State<S>> {
    let description: String = ctx.parameter_cursor().get()?;
    let owner = Address::Account(ctx.init_origin());

    // Construct the initial contract state.
    Ok(State::new(state_builder, owner, description))
}

/// Mark every address in the parameter as eligible to mint.
/// Adding an address that is already eligible has no effect.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the contract owner.
#[receive(
    contract = "FanShareNFT",
    name = "addAllowed",
    parameter = "AllowlistParams",
    mutable
)]
fn add_allowed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params: AllowlistParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);

    for address in params.addresses {
        state.allow(address);
    }

    Ok(())
}

/// Mark every address in the parameter as not eligible to mint.
/// Revoking an address that is not eligible has no effect.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the contract owner.
#[receive(
    contract = "FanShareNFT",
    name = "revokeAllowed",
    parameter = "AllowlistParams",
    mutable
)]
fn revoke_allowed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    let params: AllowlistParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);

    for address in params.addresses {
        state.disallow(&address);
    }

    Ok(())
}

/// Check whether an address is currently eligible to mint.
#[receive(
    contract = "FanShareNFT",
    name = "isAllowed",
    parameter = "Address",
    return_value = "bool"
)]
fn is_allowed<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<bool> {
    let address: Address = ctx.parameter_cursor().get()?;
    Ok(host.state().is_allowed(&address))
}

/// Mint a single token for the sender. The token ID is the next value of the
/// sequential counter, the sender becomes minter and holder, and the share
/// and data strings are stored verbatim. A successful mint consumes the
/// sender's allowlist entry, so a second mint by the same address rejects
/// even after the first token was transferred away or burned.
///
/// Logs a `Mint` event and a `TokenMetadata` event carrying the rendered
/// metadata URL.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not on the allowlist.
/// - Fails to log Mint event.
/// - Fails to log TokenMetadata event.
#[receive(
    contract = "FanShareNFT",
    name = "mint",
    parameter = "MintParams",
    mutable,
    enable_logger
)]
fn mint<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: MintParams = ctx.parameter_cursor().get()?;
    let sender = ctx.sender();
    let state = host.state_mut();

    ensure!(
        state.is_allowed(&sender),
        CustomContractError::NotAllowed.into()
    );

    // Mint the token in the state, consuming the allowlist entry.
    let token_id = state.mint(sender, params);
    let token = state.token(&token_id)?;

    // Event for minted NFT.
    logger.log(&Cis2Event::Mint(MintEvent {
        token_id: token_id.clone(),
        amount: TokenAmountU8(1),
        owner: sender,
    }))?;

    // Metadata URL for the NFT.
    logger.log(&token_metadata_event(
        &token_id,
        &state.description,
        &token,
    ))?;

    Ok(())
}

/// Destroy a live token record. Only the contract owner may burn,
/// independent of who minted or currently holds the token. The token ID is
/// permanently retired and never reissued; the minter does not regain mint
/// eligibility.
///
/// Logs a `Burn` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the contract owner.
/// - The token ID has no live record.
/// - Fails to log Burn event.
#[receive(
    contract = "FanShareNFT",
    name = "burn",
    parameter = "ContractTokenId",
    mutable,
    enable_logger
)]
fn burn<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);

    // Burning NFT
    let token = state.burn(&token_id)?;

    // Event for burning NFT.
    logger.log(&Cis2Event::Burn(BurnEvent {
        token_id,
        amount: TokenAmountU8(1),
        owner: token.owner,
    }))?;

    Ok(())
}

/// Execute a list of token transfers, in the order of the list.
///
/// Logs a `Transfer` event for each transfer in the list.
/// Invokes the receive hook function for every transfer sending a token to a
/// contract address.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the transfers fail to be executed, which could be if:
///     - The `token_id` does not exist.
///     - The sender is not the owner of the token, or an operator for this
///       specific `token_id` and `from` address.
///     - The token is not owned by the `from`.
/// - Fails to log event.
/// - Any of the messages sent to contracts receiving a transfer choose to
///   reject.
#[receive(
    contract = "FanShareNFT",
    name = "transfer",
    parameter = "TransferParameter",
    mutable,
    enable_logger
)]
fn transfer<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let TransferParams(transfers): TransferParameter = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    for transfer in transfers {
        let state = host.state_mut();

        // Authenticate the sender for this transfer
        ensure!(
            transfer.from == sender || state.is_operator(&sender, &transfer.from),
            ContractError::Unauthorized
        );

        let to_address = transfer.to.address();
        // Update the contract state
        state.transfer(&transfer.token_id, transfer.amount, &transfer.from, to_address)?;

        // Log transfer event
        logger.log(&Cis2Event::Transfer(TransferEvent {
            token_id: transfer.token_id.clone(),
            amount: transfer.amount,
            from: transfer.from,
            to: to_address,
        }))?;

        // If the receiver is a contract we invoke it.
        if let Receiver::Contract(address, entrypoint_name) = transfer.to {
            let parameter = OnReceivingCis2Params {
                token_id: transfer.token_id,
                amount: transfer.amount,
                from: transfer.from,
                data: transfer.data,
            };

            host.invoke_contract(
                &address,
                &parameter,
                entrypoint_name.as_entrypoint_name(),
                Amount::zero(),
            )?;
        }
    }

    Ok(())
}

/// Enable or disable addresses as operators of the sender address.
/// Logs an `UpdateOperator` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Fails to log event.
#[receive(
    contract = "FanShareNFT",
    name = "updateOperator",
    parameter = "UpdateOperatorParams",
    mutable,
    enable_logger
)]
fn update_operator<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let UpdateOperatorParams(params) = ctx.parameter_cursor().get()?;
    // Get the sender who invoked this contract function.
    let sender = ctx.sender();

    let (state, state_builder) = host.state_and_builder();
    for param in params {
        // Update the operator in the state.
        match param.update {
            OperatorUpdate::Add => state.add_operator(&sender, &param.operator, state_builder),
            OperatorUpdate::Remove => state.remove_operator(&sender, &param.operator),
        }

        // Log the appropriate event
        logger.log(
            &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                UpdateOperatorEvent {
                    owner: sender,
                    operator: param.operator,
                    update: param.update,
                },
            ),
        )?;
    }

    Ok(())
}

/// Takes a list of queries. Each query is an owner address and some address
/// to check as an operator of the owner address.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "FanShareNFT",
    name = "operatorOf",
    parameter = "OperatorOfQueryParams",
    return_value = "OperatorOfQueryResponse"
)]
fn operator_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<OperatorOfQueryResponse> {
    // Parse the parameter.
    let params: OperatorOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for address being an operator of owner.
        let is_operator = state.is_operator(&query.address, &query.owner);
        response.push(is_operator);
    }

    Ok(OperatorOfQueryResponse::from(response))
}

/// Get the balance of given token IDs and addresses.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not exist.
#[receive(
    contract = "FanShareNFT",
    name = "balanceOf",
    parameter = "ContractBalanceOfQueryParams",
    return_value = "ContractBalanceOfQueryResponse"
)]
fn balance_of<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<ContractBalanceOfQueryResponse> {
    // Parse the parameter.
    let params: ContractBalanceOfQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for query in params.queries {
        // Query the state for balance.
        let amount = state.balance(&query.token_id, &query.address)?;
        response.push(amount);
    }

    Ok(ContractBalanceOfQueryResponse::from(response))
}

/// Get the metadata URL for a list of tokens. Each URL is a fully self
/// contained data URL: a fixed prefix followed by the base64 encoding of the
/// JSON metadata document built from the token record and the contract wide
/// description. Rendering is pure, so repeated queries for an unchanged
/// token give identical results.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - Any of the queried `token_id` does not have a live record.
#[receive(
    contract = "FanShareNFT",
    name = "tokenMetadata",
    parameter = "ContractTokenMetadataQueryParams",
    return_value = "TokenMetadataQueryResponse"
)]
fn token_metadata<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenMetadataQueryResponse> {
    // Parse the parameter.
    let params: ContractTokenMetadataQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for token_id in params.queries {
        let token = state.token(&token_id)?;
        response.push(MetadataUrl {
            url: build_token_metadata_url(&token_id, &state.description, &token),
            hash: None,
        });
    }

    Ok(TokenMetadataQueryResponse::from(response))
}

/// View the record of a live token.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The token ID does not have a live record.
#[receive(
    contract = "FanShareNFT",
    name = "viewToken",
    parameter = "ContractTokenId",
    return_value = "TokenData"
)]
fn view_token<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<TokenData> {
    // Parse the parameter.
    let token_id: ContractTokenId = ctx.parameter_cursor().get()?;
    host.state().token(&token_id)
}

/// Get the address currently holding the administrative rights.
#[receive(contract = "FanShareNFT", name = "owner", return_value = "Address")]
fn owner<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<Address> {
    Ok(host.state().owner)
}

/// Get the description shared by the metadata of every token.
#[receive(contract = "FanShareNFT", name = "description", return_value = "String")]
fn description<S: HasStateApi>(
    _ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<String> {
    Ok(host.state().description.clone())
}

/// Move the administrative rights to a new address.
/// Logs an `OwnershipTransferred` event.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the contract owner.
/// - The new owner is the null account address.
/// - Fails to log OwnershipTransferred event.
#[receive(
    contract = "FanShareNFT",
    name = "transferOwnership",
    parameter = "Address",
    mutable,
    enable_logger
)]
fn transfer_ownership<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
    logger: &mut impl HasLogger,
) -> ContractResult<()> {
    // Parse the parameter.
    let new_owner: Address = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);
    ensure!(
        new_owner != NULL_ADDRESS,
        CustomContractError::InvalidAddress.into()
    );

    let previous_owner = state.owner;
    state.owner = new_owner;

    logger.log(&CustomEvent::OwnershipTransferred(OwnershipTransferredEvent {
        previous_owner,
        new_owner,
    }))?;

    Ok(())
}

/// Get the supported standards or addresses of implementors for a list of
/// standard identifiers.
///
/// It rejects if:
/// - It fails to parse the parameter.
#[receive(
    contract = "FanShareNFT",
    name = "supports",
    parameter = "SupportsQueryParams",
    return_value = "SupportsQueryResponse"
)]
fn supports<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<SupportsQueryResponse> {
    // Parse the parameter.
    let params: SupportsQueryParams = ctx.parameter_cursor().get()?;
    // Build the response.
    let mut response = Vec::with_capacity(params.queries.len());
    let state = host.state();
    for std_id in params.queries {
        if SUPPORTS_STANDARDS.contains(&std_id.as_standard_identifier()) {
            response.push(SupportResult::Support);
        } else {
            response.push(state.get_implementors(&std_id));
        }
    }

    Ok(SupportsQueryResponse::from(response))
}

/// Set the addresses of implementors for a standard this contract does not
/// implement itself.
///
/// It rejects if:
/// - It fails to parse the parameter.
/// - The sender is not the contract owner.
#[receive(
    contract = "FanShareNFT",
    name = "setImplementors",
    parameter = "SetImplementorsParams",
    mutable
)]
fn set_implementors<S: HasStateApi>(
    ctx: &impl HasReceiveContext,
    host: &mut impl HasHost<State<S>, StateApiType = S>,
) -> ContractResult<()> {
    // Parse the parameter.
    let params: SetImplementorsParams = ctx.parameter_cursor().get()?;
    let state = host.state_mut();

    ensure!(state.is_owner(&ctx.sender()), ContractError::Unauthorized);

    state.set_implementors(params.id, params.implementors);
    Ok(())
}

fn token_metadata_event(
    token_id: &ContractTokenId,
    description: &str,
    token: &TokenData,
) -> Cis2Event<ContractTokenId, ContractTokenAmount> {
    Cis2Event::TokenMetadata(TokenMetadataEvent {
        token_id: token_id.clone(),
        metadata_url: MetadataUrl {
            url: build_token_metadata_url(token_id, description, token),
            hash: None,
        },
    })
}

#[concordium_cfg_test]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;
    use test_infrastructure::*;

    const OWNER_ACC: AccountAddress = AccountAddress([1u8; 32]);
    const OWNER_ADDR: Address = Address::Account(OWNER_ACC);
    const MINTER_ACC: AccountAddress = AccountAddress([2u8; 32]);
    const MINTER_ADDR: Address = Address::Account(MINTER_ACC);
    const OTHER_ACC: AccountAddress = AccountAddress([3u8; 32]);
    const OTHER_ADDR: Address = Address::Account(OTHER_ACC);

    const DESCRIPTION: &str = "Seasonal athlete returns";

    fn token_0() -> ContractTokenId {
        TokenIdU64(0)
    }

    /// Metadata URL expected for the given JSON document.
    fn metadata_url_of(document: &str) -> String {
        let mut url = String::from(TOKEN_METADATA_URL_PREFIX);
        url.push_str(&STANDARD.encode(document));
        url
    }

    /// Create a contract instance owned by `OWNER_ACC`.
    fn default_host() -> TestHost<State<TestStateApi>> {
        let mut ctx = TestInitContext::empty();
        let bytes = to_bytes(&String::from(DESCRIPTION));
        ctx.set_init_origin(OWNER_ACC).set_parameter(&bytes);
        let mut state_builder = TestStateBuilder::new();

        let state = init(&ctx, &mut state_builder).expect_report("Failed during init_FanShareNFT");
        TestHost::new(state, state_builder)
    }

    /// Create a contract instance with `address` on the allowlist.
    fn host_with_allowed(address: Address) -> TestHost<State<TestStateApi>> {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![address],
        });
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);

        add_allowed(&ctx, &mut host).expect_report("Failed during 'addAllowed' call");
        host
    }

    /// Mint token 0 for `MINTER_ADDR` with fixed share and data strings.
    fn mint_token_0(host: &mut TestHost<State<TestStateApi>>) {
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            share: String::from("0.001"),
            data: String::from("ipfs://QmTest"),
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        mint(&ctx, host, &mut logger).expect_report("Failed during 'mint' call");
    }

    /// Test initialization succeeds and seeds no allowlist entries or tokens.
    #[concordium_test]
    fn test_init() {
        let host = default_host();
        let state = host.state();

        claim_eq!(state.owner, OWNER_ADDR, "Deployer should be the owner");
        claim_eq!(state.description, DESCRIPTION);
        claim_eq!(state.next_token_id, 0, "No token ID should be assigned yet");
        claim!(
            !state.is_allowed(&MINTER_ADDR),
            "Allowlist should start empty"
        );
        claim_eq!(
            state.token(&token_0()),
            Err(ContractError::InvalidTokenId),
            "No token should exist after init"
        );
    }

    /// Test the owner can add addresses and adding is idempotent.
    #[concordium_test]
    fn test_add_allowed() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![MINTER_ADDR, OTHER_ADDR, MINTER_ADDR],
        });
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);

        let result = add_allowed(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        claim!(host.state().is_allowed(&MINTER_ADDR));
        claim!(host.state().is_allowed(&OTHER_ADDR));
    }

    /// Test adding to the allowlist fails when the sender is not the owner
    /// and leaves the state unchanged.
    #[concordium_test]
    fn test_add_allowed_unauthorized() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![OTHER_ADDR],
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let err = add_allowed(&ctx, &mut host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
        claim!(!host.state().is_allowed(&OTHER_ADDR), "State should be unchanged");
    }

    /// Test the owner can revoke eligibility, including of addresses that
    /// were never eligible.
    #[concordium_test]
    fn test_revoke_allowed() {
        let mut host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![MINTER_ADDR, OTHER_ADDR],
        });
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);

        let result = revoke_allowed(&ctx, &mut host);
        claim_eq!(result, Ok(()));

        claim!(!host.state().is_allowed(&MINTER_ADDR));
        claim!(!host.state().is_allowed(&OTHER_ADDR));
    }

    /// Test revoking fails when the sender is not the owner.
    #[concordium_test]
    fn test_revoke_allowed_unauthorized() {
        let mut host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![MINTER_ADDR],
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let err = revoke_allowed(&ctx, &mut host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
        claim!(
            host.state().is_allowed(&MINTER_ADDR),
            "State should be unchanged"
        );
    }

    /// Test the eligibility view.
    #[concordium_test]
    fn test_is_allowed() {
        let host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MINTER_ADDR);
        ctx.set_parameter(&bytes);
        let allowed = is_allowed(&ctx, &host).expect_report("Failed during 'isAllowed' call");
        claim!(allowed);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OTHER_ADDR);
        ctx.set_parameter(&bytes);
        let allowed = is_allowed(&ctx, &host).expect_report("Failed during 'isAllowed' call");
        claim!(!allowed);
    }

    /// Test minting assigns token ID 0 to the sender, consumes the allowlist
    /// entry and logs the Mint and TokenMetadata events.
    #[concordium_test]
    fn test_mint() {
        let mut host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            share: String::from("0.001"),
            data: String::from("ipfs://QmTest"),
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = mint(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let state = host.state();
        claim_eq!(state.next_token_id, 1);
        claim!(
            !state.is_allowed(&MINTER_ADDR),
            "Mint should consume the allowlist entry"
        );

        let token = state
            .token(&token_0())
            .expect_report("Token 0 should exist");
        claim_eq!(token.minter, MINTER_ADDR);
        claim_eq!(token.owner, MINTER_ADDR);
        claim_eq!(token.share, "0.001");
        claim_eq!(token.data, "ipfs://QmTest");

        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Mint(MintEvent {
                token_id: token_0(),
                amount: TokenAmountU8(1),
                owner: MINTER_ADDR,
            }))),
            "Expected an event for minting token 0"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&token_metadata_event(
                    &token_0(),
                    DESCRIPTION,
                    &token
                ))),
            "Expected an event for the metadata of token 0"
        );
    }

    /// Test minting fails for an address that was never added.
    #[concordium_test]
    fn test_mint_not_allowed() {
        let mut host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            share: String::from("0.002"),
            data: String::from("ipfs://QmTest2"),
        });
        ctx.set_sender(OTHER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let err = mint(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(
            err,
            ContractError::Custom(CustomContractError::NotAllowed),
            "Error is expected to be NotAllowed"
        );
        claim_eq!(host.state().next_token_id, 0, "State should be unchanged");
    }

    /// Test a second mint by the same address fails, even though the first
    /// one succeeded.
    #[concordium_test]
    fn test_mint_only_once() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            share: String::from("0.002"),
            data: String::from("ipfs://QmTest2"),
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let err = mint(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Custom(CustomContractError::NotAllowed));
        claim_eq!(host.state().next_token_id, 1, "State should be unchanged");
    }

    /// Test that token IDs keep increasing by one regardless of intervening
    /// burns, so a burned ID is never reissued.
    #[concordium_test]
    fn test_token_ids_increase_across_burns() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        // Burn token 0.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Failed during 'burn' call");

        // Allow another address and mint again.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![OTHER_ADDR],
        });
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        add_allowed(&ctx, &mut host).expect_report("Failed during 'addAllowed' call");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MintParams {
            share: String::from("0.25"),
            data: String::from("ipfs://QmOther"),
        });
        ctx.set_sender(OTHER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        mint(&ctx, &mut host, &mut logger).expect_report("Failed during 'mint' call");

        let state = host.state();
        claim_eq!(state.next_token_id, 2);
        claim_eq!(
            state.token(&token_0()),
            Err(ContractError::InvalidTokenId),
            "Token 0 should stay retired"
        );
        let token = state
            .token(&TokenIdU64(1))
            .expect_report("Token 1 should exist");
        claim_eq!(token.minter, OTHER_ADDR);
    }

    /// Test the owner can burn a live token and the record is gone
    /// afterwards.
    #[concordium_test]
    fn test_burn() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = burn(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        claim_eq!(
            host.state().token(&token_0()),
            Err(ContractError::InvalidTokenId),
            "Burned token should have no record"
        );
        claim!(
            !host.state().is_allowed(&MINTER_ADDR),
            "Burn should not restore mint eligibility"
        );
        claim!(
            logger.logs.contains(&to_bytes(&Cis2Event::Burn(BurnEvent {
                token_id: token_0(),
                amount: TokenAmountU8(1),
                owner: MINTER_ADDR,
            }))),
            "Expected an event for burning token 0"
        );
    }

    /// Test burning fails for every non-owner sender, including for token
    /// IDs that do not exist.
    #[concordium_test]
    fn test_burn_unauthorized() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        for token_id in [token_0(), TokenIdU64(9)] {
            let mut ctx = TestReceiveContext::empty();
            let bytes = to_bytes(&token_id);
            ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

            let mut logger = TestLogger::init();
            let err = burn(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
            claim_eq!(err, ContractError::Unauthorized);
        }

        claim!(
            host.state().token(&token_0()).is_ok(),
            "Token 0 should still exist"
        );
    }

    /// Test burning a never minted or already burned token fails.
    #[concordium_test]
    fn test_burn_missing_token() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenIdU64(1));
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let err = burn(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);

        // Burning twice fails the second time.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Failed during 'burn' call");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let err = burn(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the rendered metadata decodes to the expected document and is
    /// unavailable after a burn.
    #[concordium_test]
    fn test_token_metadata() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenMetadataQueryParams {
            queries: vec![token_0()],
        });
        ctx.set_parameter(&bytes);

        let result =
            token_metadata(&ctx, &host).expect_report("Failed during 'tokenMetadata' call");
        let expected = metadata_url_of(
            "{\"name\": \"token #0\", \"description\": \"Seasonal athlete returns\", \
             \"share\": \"0.001\", \"NFTData\": \"ipfs://QmTest\"}",
        );
        claim_eq!(
            to_bytes(&result),
            to_bytes(&TokenMetadataQueryResponse::from(vec![MetadataUrl {
                url: expected,
                hash: None,
            }]))
        );

        // Burn the token and query again.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        burn(&ctx, &mut host, &mut logger).expect_report("Failed during 'burn' call");

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenMetadataQueryParams {
            queries: vec![token_0()],
        });
        ctx.set_parameter(&bytes);
        let err = token_metadata(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the token record view.
    #[concordium_test]
    fn test_view_token() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&token_0());
        ctx.set_parameter(&bytes);

        let token = view_token(&ctx, &host).expect_report("Failed during 'viewToken' call");
        claim_eq!(
            token,
            TokenData {
                minter: MINTER_ADDR,
                owner: MINTER_ADDR,
                share: String::from("0.001"),
                data: String::from("ipfs://QmTest"),
            }
        );

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&TokenIdU64(1));
        ctx.set_parameter(&bytes);
        let err = view_token(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the owner and description views.
    #[concordium_test]
    fn test_owner_and_description_views() {
        let host = default_host();

        let ctx = TestReceiveContext::empty();
        let current = owner(&ctx, &host).expect_report("Failed during 'owner' call");
        claim_eq!(current, OWNER_ADDR);

        let ctx = TestReceiveContext::empty();
        let text = description(&ctx, &host).expect_report("Failed during 'description' call");
        claim_eq!(text, DESCRIPTION);
    }

    /// Test ownership transfer replaces the owner and moves the owner-only
    /// surface with it.
    #[concordium_test]
    fn test_transfer_ownership() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&MINTER_ADDR);
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = transfer_ownership(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));
        claim_eq!(host.state().owner, MINTER_ADDR);
        claim!(
            logger
                .logs
                .contains(&to_bytes(&CustomEvent::OwnershipTransferred(
                    OwnershipTransferredEvent {
                        previous_owner: OWNER_ADDR,
                        new_owner: MINTER_ADDR,
                    }
                ))),
            "Expected an event for the ownership transfer"
        );

        // The previous owner lost the owner-only surface.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![OTHER_ADDR],
        });
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let err = add_allowed(&ctx, &mut host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);

        // The new owner gained it.
        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&AllowlistParams {
            addresses: vec![OTHER_ADDR],
        });
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);
        let result = add_allowed(&ctx, &mut host);
        claim_eq!(result, Ok(()));
    }

    /// Test ownership transfer fails for non-owners and for the null
    /// account address.
    #[concordium_test]
    fn test_transfer_ownership_rejections() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&OTHER_ADDR);
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let err =
            transfer_ownership(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);

        let mut ctx = TestReceiveContext::empty();
        let bytes = to_bytes(&NULL_ADDRESS);
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        let err =
            transfer_ownership(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Custom(CustomContractError::InvalidAddress));

        claim_eq!(host.state().owner, OWNER_ADDR, "State should be unchanged");
    }

    /// Test transfer succeeds when `from` is the sender and moves the token
    /// without restoring mint eligibility.
    #[concordium_test]
    fn test_transfer_account() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let transfer_params = TransferParams(vec![Transfer {
            token_id: token_0(),
            amount: TokenAmountU8(1),
            from: MINTER_ADDR,
            to: Receiver::Account(OTHER_ACC),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&transfer_params);
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let token = host
            .state()
            .token(&token_0())
            .expect_report("Token 0 should exist");
        claim_eq!(token.owner, OTHER_ADDR);
        claim_eq!(token.minter, MINTER_ADDR, "The minter does not change");
        claim!(
            !host.state().is_allowed(&MINTER_ADDR),
            "Transferring away must not restore mint eligibility"
        );
        claim!(
            logger
                .logs
                .contains(&to_bytes(&Cis2Event::Transfer(TransferEvent {
                    token_id: token_0(),
                    amount: TokenAmountU8(1),
                    from: MINTER_ADDR,
                    to: OTHER_ADDR,
                }))),
            "Expected an event for the transfer"
        );
    }

    /// Test transfer fails when the sender is neither the holder nor an
    /// operator of the holder.
    #[concordium_test]
    fn test_transfer_not_authorized() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let transfer_params = TransferParams(vec![Transfer {
            token_id: token_0(),
            amount: TokenAmountU8(1),
            from: MINTER_ADDR,
            to: Receiver::Account(OTHER_ACC),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&transfer_params);
        ctx.set_sender(OTHER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let err = transfer(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
    }

    /// Test transfer fails when `from` does not hold the token.
    #[concordium_test]
    fn test_transfer_wrong_holder() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let transfer_params = TransferParams(vec![Transfer {
            token_id: token_0(),
            amount: TokenAmountU8(1),
            from: OTHER_ADDR,
            to: Receiver::Account(OTHER_ACC),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&transfer_params);
        ctx.set_sender(OTHER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let err = transfer(&ctx, &mut host, &mut logger).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InsufficientFunds);
    }

    /// Test transfer succeeds when the sender is an operator of the holder.
    #[concordium_test]
    fn test_operator_transfer() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let update_params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: OTHER_ADDR,
        }]);
        let bytes = to_bytes(&update_params);
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        update_operator(&ctx, &mut host, &mut logger)
            .expect_report("Failed during 'updateOperator' call");
        claim!(
            logger
                .logs
                .contains(&to_bytes(
                    &Cis2Event::<ContractTokenId, ContractTokenAmount>::UpdateOperator(
                        UpdateOperatorEvent {
                            owner: MINTER_ADDR,
                            operator: OTHER_ADDR,
                            update: OperatorUpdate::Add,
                        }
                    )
                )),
            "Expected an event for the operator update"
        );

        let mut ctx = TestReceiveContext::empty();
        let transfer_params = TransferParams(vec![Transfer {
            token_id: token_0(),
            amount: TokenAmountU8(1),
            from: MINTER_ADDR,
            to: Receiver::Account(OTHER_ACC),
            data: AdditionalData::empty(),
        }]);
        let bytes = to_bytes(&transfer_params);
        ctx.set_sender(OTHER_ADDR).set_parameter(&bytes);

        let mut logger = TestLogger::init();
        let result = transfer(&ctx, &mut host, &mut logger);
        claim_eq!(result, Ok(()));

        let token = host
            .state()
            .token(&token_0())
            .expect_report("Token 0 should exist");
        claim_eq!(token.owner, OTHER_ADDR);
    }

    /// Test the operator query.
    #[concordium_test]
    fn test_operator_of() {
        let mut host = host_with_allowed(MINTER_ADDR);

        let mut ctx = TestReceiveContext::empty();
        let update_params = UpdateOperatorParams(vec![UpdateOperator {
            update: OperatorUpdate::Add,
            operator: OTHER_ADDR,
        }]);
        let bytes = to_bytes(&update_params);
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);
        let mut logger = TestLogger::init();
        update_operator(&ctx, &mut host, &mut logger)
            .expect_report("Failed during 'updateOperator' call");

        let mut ctx = TestReceiveContext::empty();
        let query_params = OperatorOfQueryParams {
            queries: vec![
                OperatorOfQuery {
                    owner: MINTER_ADDR,
                    address: OTHER_ADDR,
                },
                OperatorOfQuery {
                    owner: OTHER_ADDR,
                    address: MINTER_ADDR,
                },
            ],
        };
        let bytes = to_bytes(&query_params);
        ctx.set_parameter(&bytes);

        let result = operator_of(&ctx, &host).expect_report("Failed during 'operatorOf' call");
        claim_eq!(
            to_bytes(&result),
            to_bytes(&OperatorOfQueryResponse::from(vec![true, false]))
        );
    }

    /// Test the balance query answers 1 for the holder of a live token and
    /// 0 for everyone else, and rejects unknown tokens.
    #[concordium_test]
    fn test_balance_of() {
        let mut host = host_with_allowed(MINTER_ADDR);
        mint_token_0(&mut host);

        let mut ctx = TestReceiveContext::empty();
        let query_params = BalanceOfQueryParams {
            queries: vec![
                BalanceOfQuery {
                    token_id: token_0(),
                    address: MINTER_ADDR,
                },
                BalanceOfQuery {
                    token_id: token_0(),
                    address: OTHER_ADDR,
                },
            ],
        };
        let bytes = to_bytes(&query_params);
        ctx.set_parameter(&bytes);

        let result = balance_of(&ctx, &host).expect_report("Failed during 'balanceOf' call");
        claim_eq!(
            to_bytes(&result),
            to_bytes(&ContractBalanceOfQueryResponse::from(vec![
                TokenAmountU8(1),
                TokenAmountU8(0),
            ]))
        );

        let mut ctx = TestReceiveContext::empty();
        let query_params = BalanceOfQueryParams {
            queries: vec![BalanceOfQuery {
                token_id: TokenIdU64(7),
                address: MINTER_ADDR,
            }],
        };
        let bytes = to_bytes(&query_params);
        ctx.set_parameter(&bytes);
        let err = balance_of(&ctx, &host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::InvalidTokenId);
    }

    /// Test the capability probe answers Support for the implemented
    /// standards and honors implementor overrides for foreign ones.
    #[concordium_test]
    fn test_supports() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let query_params = SupportsQueryParams {
            queries: vec![
                StandardIdentifierOwned::new_unchecked(String::from("CIS-0")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-2")),
                StandardIdentifierOwned::new_unchecked(String::from("CIS-3")),
            ],
        };
        let bytes = to_bytes(&query_params);
        ctx.set_parameter(&bytes);

        let result = supports(&ctx, &host).expect_report("Failed during 'supports' call");
        claim_eq!(
            to_bytes(&result),
            to_bytes(&SupportsQueryResponse::from(vec![
                SupportResult::Support,
                SupportResult::Support,
                SupportResult::NoSupport,
            ]))
        );

        // Register an implementor for a foreign standard.
        let implementor = ContractAddress {
            index: 17,
            subindex: 0,
        };
        let mut ctx = TestReceiveContext::empty();
        let set_params = SetImplementorsParams {
            id: StandardIdentifierOwned::new_unchecked(String::from("CIS-3")),
            implementors: vec![implementor],
        };
        let bytes = to_bytes(&set_params);
        ctx.set_sender(OWNER_ADDR).set_parameter(&bytes);
        set_implementors(&ctx, &mut host).expect_report("Failed during 'setImplementors' call");

        let mut ctx = TestReceiveContext::empty();
        let query_params = SupportsQueryParams {
            queries: vec![StandardIdentifierOwned::new_unchecked(String::from("CIS-3"))],
        };
        let bytes = to_bytes(&query_params);
        ctx.set_parameter(&bytes);

        let result = supports(&ctx, &host).expect_report("Failed during 'supports' call");
        claim_eq!(
            to_bytes(&result),
            to_bytes(&SupportsQueryResponse::from(vec![SupportResult::SupportBy(
                vec![implementor]
            )]))
        );
    }

    /// Test only the owner can register implementors.
    #[concordium_test]
    fn test_set_implementors_unauthorized() {
        let mut host = default_host();

        let mut ctx = TestReceiveContext::empty();
        let set_params = SetImplementorsParams {
            id: StandardIdentifierOwned::new_unchecked(String::from("CIS-3")),
            implementors: vec![],
        };
        let bytes = to_bytes(&set_params);
        ctx.set_sender(MINTER_ADDR).set_parameter(&bytes);

        let err = set_implementors(&ctx, &mut host).expect_err_report("Expected to fail");
        claim_eq!(err, ContractError::Unauthorized);
    }
}
