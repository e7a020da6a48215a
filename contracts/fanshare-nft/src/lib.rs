//! An access-gated fan share NFT registry using the Concordium Token
//! Standard CIS2.
//!
//! # Description
//! The account deploying the contract becomes its owner and controls an
//! allowlist of addresses. Every address on the allowlist may mint exactly
//! one token: a successful mint consumes the allowlist entry, so a second
//! mint by the same address rejects even after the first token was
//! transferred away or burned. Token IDs are assigned from a sequential
//! counter starting at 0 and are never reused.
//!
//! Token metadata is kept entirely on chain. Each token stores the share
//! string and data reference passed at mint time, and the `tokenMetadata`
//! function renders them together with the contract wide description into a
//! self contained `data:application/json;base64,` URL, so no external
//! metadata server is involved.
//!
//! Burning is restricted to the contract owner, independent of who minted
//! or currently holds the token.
//!
//! As follows from the CIS2 specification, the contract has a `transfer`
//! function for transferring an amount of a specific token type from one
//! address to another address. An address can enable and disable one or more
//! addresses as operators. An operator of some address is allowed to
//! transfer any tokens owned by this address.

#![cfg_attr(not(feature = "std"), no_std)]
use crate::{constants::*, events::*, external::*, metadata::*, state::*};
use commons::*;
use concordium_cis2::*;
use concordium_std::*;

mod constants;
mod contract;
mod events;
mod external;
mod metadata;
mod state;
