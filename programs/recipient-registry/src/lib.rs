use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{Recipient, Request, RequestInput};

declare_id!("3dJ1ZvhE5sCynk1VDcCps2i6yGx1dbNAYYiYfrxifWiG");

#[program]
pub mod recipient_registry {
    use super::*;

    // Registry: bounded recipient store mutated by its owner or manager.

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        registry_id: u64,
        manager: Pubkey,
        max_recipients: u32,
        metadata_url: String,
    ) -> Result<()> {
        instructions::initialize_registry::initialize_registry(
            ctx,
            registry_id,
            manager,
            max_recipients,
            metadata_url,
        )
    }

    pub fn add_recipient(ctx: Context<AddRecipient>, recipient: Recipient) -> Result<u64> {
        instructions::add_recipient::add_recipient(ctx, recipient)
    }

    pub fn change_recipient(
        ctx: Context<ChangeRecipient>,
        index: u64,
        recipient: Recipient,
    ) -> Result<()> {
        instructions::change_recipient::change_recipient(ctx, index, recipient)
    }

    pub fn remove_recipient(ctx: Context<RemoveRecipient>, index: u64) -> Result<()> {
        instructions::remove_recipient::remove_recipient(ctx, index)
    }

    pub fn get_recipient(ctx: Context<GetRecipient>, index: u64) -> Result<Recipient> {
        instructions::get_recipient::get_recipient(ctx, index)
    }

    pub fn set_registry_metadata(
        ctx: Context<SetRegistryMetadata>,
        metadata_url: String,
    ) -> Result<()> {
        instructions::set_registry_metadata::set_registry_metadata(ctx, metadata_url)
    }

    pub fn transfer_registry_owner(
        ctx: Context<TransferRegistryOwner>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_registry_owner::transfer_registry_owner(ctx, new_owner)
    }

    // Registry manager: request ledger with owner-gated approval.

    pub fn initialize_manager(
        ctx: Context<InitializeManager>,
        manager_id: u64,
        verifier: Option<Pubkey>,
    ) -> Result<()> {
        instructions::initialize_manager::initialize_manager(ctx, manager_id, verifier)
    }

    pub fn process_request(ctx: Context<ProcessRequest>, input: RequestInput) -> Result<u64> {
        instructions::process_request::process_request(ctx, input)
    }

    pub fn approve_request(
        ctx: Context<ApproveRequest>,
        index: u64,
        slot_index: u64,
    ) -> Result<()> {
        instructions::approve_request::approve_request(ctx, index, slot_index)
    }

    pub fn reject_request(ctx: Context<RejectRequest>, index: u64) -> Result<()> {
        instructions::reject_request::reject_request(ctx, index)
    }

    pub fn get_request(ctx: Context<GetRequest>, index: u64) -> Result<Request> {
        instructions::get_request::get_request(ctx, index)
    }

    pub fn request_count(ctx: Context<RequestCount>) -> Result<u64> {
        instructions::get_request::request_count(ctx)
    }

    pub fn transfer_manager_owner(
        ctx: Context<TransferManagerOwner>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::transfer_manager_owner::transfer_manager_owner(ctx, new_owner)
    }
}
