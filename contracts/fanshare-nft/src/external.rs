use super::*;

/// Data needed to mint a fresh token for the sender.
#[derive(Debug, Serialize, SchemaType, Clone, PartialEq, Eq)]
pub struct MintParams {
    /// Fractional share represented by the token, stored verbatim.
    pub share: String,
    /// Reference to the external data backing the token, stored verbatim.
    pub data: String,
}

/// The parameter type for the contract functions `addAllowed` and
/// `revokeAllowed`.
#[derive(Debug, Serialize, SchemaType)]
pub struct AllowlistParams {
    /// The addresses whose mint eligibility is updated.
    pub addresses: Vec<Address>,
}

/// The parameter type for the contract function `setImplementors`.
/// Takes a standard identifier and a list of contract addresses providing
/// implementations of this standard.
#[derive(Debug, Serialize, SchemaType)]
pub struct SetImplementorsParams {
    /// The identifier for the standard.
    pub id: StandardIdentifierOwned,
    /// The addresses of the implementors of the standard.
    pub implementors: Vec<ContractAddress>,
}
