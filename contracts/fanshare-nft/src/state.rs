use super::*;
use core::ops::DerefMut;

/// Data tracked for every live token.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct TokenData {
    /// The address that minted the token. Fixed for the token lifetime.
    pub minter: Address,
    /// The address currently holding the token.
    pub owner: Address,
    /// Fractional share represented by the token, stored verbatim.
    pub share: String,
    /// Reference to the external data backing the token, stored verbatim.
    pub data: String,
}

/// The contract state.
#[derive(Serial, DeserialWithState, StateClone)]
#[concordium(state_parameter = "S")]
pub struct State<S: HasStateApi> {
    /// The address with administrative rights: allowlist updates, burning
    /// and ownership transfer.
    pub owner: Address,
    /// Description shared by the metadata of every token.
    pub description: String,
    /// Addresses currently eligible to mint. An entry is consumed by a
    /// successful mint and is not restored by transfers or burns.
    pub allowlist: StateSet<Address, S>,
    /// Live token records by token ID.
    pub tokens: StateMap<ContractTokenId, TokenData, S>,
    /// The token ID assigned by the next mint. Strictly increasing, so a
    /// burned ID is never reissued.
    pub next_token_id: u64,
    /// Operators for each address for this contract.
    pub operators: StateMap<Address, StateSet<Address, S>, S>,
    /// Implementors of the standards this contract does not support itself.
    pub implementors: StateMap<StandardIdentifierOwned, Vec<ContractAddress>, S>,
}

// Functions for creating, updating and querying the contract state.
impl<S: HasStateApi> State<S> {
    /// Creates a new state with no tokens and an empty allowlist.
    pub fn new(state_builder: &mut StateBuilder<S>, owner: Address, description: String) -> Self {
        State {
            owner,
            description,
            allowlist: state_builder.new_set(),
            tokens: state_builder.new_map(),
            next_token_id: 0,
            operators: state_builder.new_map(),
            implementors: state_builder.new_map(),
        }
    }

    /// Check if the address holds the administrative rights.
    pub fn is_owner(&self, address: &Address) -> bool {
        self.owner == *address
    }

    /// Check if the address is currently eligible to mint.
    pub fn is_allowed(&self, address: &Address) -> bool {
        self.allowlist.contains(address)
    }

    /// Mark the address as eligible to mint.
    /// Succeeds even if the address is already eligible.
    pub fn allow(&mut self, address: Address) {
        self.allowlist.insert(address);
    }

    /// Mark the address as not eligible to mint.
    /// Succeeds even if the address is not eligible. No trace of the entry
    /// is kept.
    pub fn disallow(&mut self, address: &Address) {
        self.allowlist.remove(address);
    }

    /// Create a token record for `minter` and consume its allowlist entry.
    /// Eligibility must be checked by the caller before any mutation.
    /// Returns the assigned token ID.
    pub fn mint(&mut self, minter: Address, params: MintParams) -> ContractTokenId {
        let token_id = TokenIdU64(self.next_token_id);
        self.tokens.insert(
            token_id.clone(),
            TokenData {
                minter,
                owner: minter,
                share: params.share,
                data: params.data,
            },
        );
        self.allowlist.remove(&minter);
        self.next_token_id += 1;
        token_id
    }

    /// Look up the record of a live token.
    pub fn token(&self, token_id: &ContractTokenId) -> ContractResult<TokenData> {
        self.tokens
            .get(token_id)
            .map(|data| data.clone())
            .ok_or(ContractError::InvalidTokenId)
    }

    /// Remove a live token record, permanently retiring its ID.
    /// Returns the removed record.
    pub fn burn(&mut self, token_id: &ContractTokenId) -> ContractResult<TokenData> {
        let data = self.token(token_id)?;
        self.tokens.remove(token_id);
        Ok(data)
    }

    /// Get the current balance of a given token ID for a given address.
    /// Results in an error if the token ID does not exist in the state.
    /// Since every token is non-fungible, the balance is always either 1
    /// or 0.
    pub fn balance(
        &self,
        token_id: &ContractTokenId,
        address: &Address,
    ) -> ContractResult<ContractTokenAmount> {
        let token = self.token(token_id)?;
        if token.owner == *address {
            Ok(TokenAmountU8(1))
        } else {
            Ok(TokenAmountU8(0))
        }
    }

    /// Update the state with a transfer of some token.
    /// Results in an error if the token ID does not exist in the state or if
    /// the from address has insufficient tokens to do the transfer. The
    /// minter's consumed allowlist entry is not restored.
    pub fn transfer(
        &mut self,
        token_id: &ContractTokenId,
        amount: ContractTokenAmount,
        from: &Address,
        to: Address,
    ) -> ContractResult<()> {
        let mut data = self
            .tokens
            .get_mut(token_id)
            .ok_or(ContractError::InvalidTokenId)?;

        // A zero transfer does not modify the state.
        if amount == TokenAmountU8(0) {
            return Ok(());
        }
        ensure!(amount == TokenAmountU8(1), ContractError::InsufficientFunds);
        ensure!(data.owner == *from, ContractError::InsufficientFunds);

        data.owner = to;
        Ok(())
    }

    /// Add a new operator for the given address.
    /// Succeeds even if the `operator` is already an operator for the
    /// `owner`.
    pub fn add_operator(
        &mut self,
        owner: &Address,
        operator: &Address,
        state_builder: &mut StateBuilder<S>,
    ) {
        self.operators
            .entry(*owner)
            .or_insert_with(|| state_builder.new_set())
            .deref_mut()
            .insert(*operator);
    }

    /// Update the state removing an operator for a given address.
    /// Succeeds even if the `operator` is _not_ an operator for the
    /// `address`.
    pub fn remove_operator(&mut self, owner: &Address, operator: &Address) {
        self.operators
            .get_mut(owner)
            .map(|mut operators| operators.remove(operator));
    }

    /// Check if `address` is an operator for `owner`.
    pub fn is_operator(&self, address: &Address, owner: &Address) -> bool {
        self.operators
            .get(owner)
            .map(|operators| operators.contains(address))
            .unwrap_or(false)
    }

    /// Update the list of contracts implementing the specified standard.
    pub fn set_implementors(
        &mut self,
        id: StandardIdentifierOwned,
        contracts: Vec<ContractAddress>,
    ) {
        self.implementors.insert(id, contracts);
    }

    /// Get the list of contracts implementing the specified standard.
    pub fn get_implementors(&self, id: &StandardIdentifierOwned) -> SupportResult {
        if let Some(addresses) = self.implementors.get(id) {
            SupportResult::SupportBy(addresses.to_vec())
        } else {
            SupportResult::NoSupport
        }
    }
}
