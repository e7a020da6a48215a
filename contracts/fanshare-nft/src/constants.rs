use super::*;

/// Prefix of the `name` metadata field, completed by the decimal token ID.
pub const TOKEN_NAME_PREFIX: &str = "token #";

/// Prefix of the rendered metadata URL. The remainder of the URL is the
/// base64 encoding of the JSON metadata document.
pub const TOKEN_METADATA_URL_PREFIX: &str = "data:application/json;base64,";

/// The account address that can never be made contract owner.
pub const NULL_ADDRESS: Address = Address::Account(AccountAddress([0u8; 32]));

/// Tag for the Custom Ownership Transferred event.
pub const OWNERSHIP_TRANSFERRED_TAG: u8 = u8::MAX - 5;

/// List of standards supported by this contract address.
pub const SUPPORTS_STANDARDS: [StandardIdentifier<'static>; 2] =
    [CIS0_STANDARD_IDENTIFIER, CIS2_STANDARD_IDENTIFIER];
