//! It exposes the error taxonomy and contract types shared by the fan share
//! registry contracts.
#![cfg_attr(not(feature = "std"), no_std)]
pub use crate::{errors::*, types::*};
use concordium_cis2::*;
use concordium_std::*;

mod errors;
mod types;
