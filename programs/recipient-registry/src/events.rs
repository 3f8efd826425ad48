//! Consumer-visible log records. Field order is part of the interface.

use anchor_lang::prelude::*;

use crate::state::RequestType;

#[event]
pub struct RecipientAdded {
    pub index: u64,
    pub id: [u8; 32],
    pub metadata_url: String,
    pub recipient_address: Pubkey,
}

#[event]
pub struct RecipientChanged {
    pub index: u64,
    pub id: [u8; 32],
    pub metadata_url: String,
    pub recipient_address: Pubkey,
}

/// `recipient_address` is always the null address; `id` and `metadata_url`
/// carry the values the slot held before removal.
#[event]
pub struct RecipientRemoved {
    pub index: u64,
    pub id: [u8; 32],
    pub metadata_url: String,
    pub recipient_address: Pubkey,
}

#[event]
pub struct RequestSent {
    pub registry: Pubkey,
    pub request_type: RequestType,
    pub recipient_id: [u8; 32],
    pub target_index: Option<u64>,
    pub index: u64,
    pub recipient_address: Pubkey,
    pub metadata_url: String,
}

#[event]
pub struct RequestApproved {
    pub registry: Pubkey,
    pub request_type: RequestType,
    pub recipient_id: [u8; 32],
    pub target_index: Option<u64>,
    pub index: u64,
    pub recipient_address: Pubkey,
    pub metadata_url: String,
}

#[event]
pub struct RequestRejected {
    pub registry: Pubkey,
    pub request_type: RequestType,
    pub recipient_id: [u8; 32],
    pub target_index: Option<u64>,
    pub index: u64,
    pub recipient_address: Pubkey,
    pub metadata_url: String,
}

#[event]
pub struct RegistryInitialized {
    pub registry: Pubkey,
    pub owner: Pubkey,
    pub manager: Pubkey,
    pub max_recipients: u32,
    pub metadata_url: String,
}

#[event]
pub struct RegistryManagerInitialized {
    pub registry_manager: Pubkey,
    pub owner: Pubkey,
    pub verifier: Option<Pubkey>,
}

#[event]
pub struct RegistryMetadataUpdated {
    pub registry: Pubkey,
    pub metadata_url: String,
}

#[event]
pub struct OwnershipTransferred {
    pub account: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
