use anchor_lang::prelude::*;

use crate::constants::{MANAGER_SEED, REQUEST_SEED};
use crate::error::RegistryError;
use crate::state::{RegistryManager, Request};
use crate::utils::account::load_account;

pub fn get_request(ctx: Context<GetRequest>, index: u64) -> Result<Request> {
    ctx.accounts.registry_manager.ensure_request_index(index)?;
    load_account(&ctx.accounts.request, RegistryError::OperationError)
}

pub fn request_count(ctx: Context<RequestCount>) -> Result<u64> {
    Ok(ctx.accounts.registry_manager.request_count)
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct GetRequest<'info> {
    #[account(
        seeds = [MANAGER_SEED, registry_manager.creator.as_ref(), &registry_manager.manager_id.to_le_bytes()],
        bump = registry_manager.bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,

    /// CHECK: Ledger entry PDA for `index`; existence is checked in-handler.
    #[account(
        seeds = [REQUEST_SEED, registry_manager.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub request: UncheckedAccount<'info>,
}

#[derive(Accounts)]
pub struct RequestCount<'info> {
    #[account(
        seeds = [MANAGER_SEED, registry_manager.creator.as_ref(), &registry_manager.manager_id.to_le_bytes()],
        bump = registry_manager.bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,
}
