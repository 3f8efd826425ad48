use anchor_lang::prelude::*;

use crate::constants::{MANAGER_SEED, REQUEST_SEED};
use crate::error::RegistryError;
use crate::state::{RegistryManager, Request};
use crate::utils::account::{load_account, store_account};

/// Owner-only. Marks request `index` Rejected without touching any registry.
pub fn reject_request(ctx: Context<RejectRequest>, index: u64) -> Result<()> {
    let mgr = &ctx.accounts.registry_manager;
    mgr.ensure_owner(&ctx.accounts.owner.key())?;
    mgr.ensure_request_index(index)?;

    let request_ai = ctx.accounts.request.to_account_info();
    let mut request: Request = load_account(&request_ai, RegistryError::OperationError)?;
    request.reject()?;

    store_account(&request_ai, &request)
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct RejectRequest<'info> {
    #[account(
        seeds = [MANAGER_SEED, registry_manager.creator.as_ref(), &registry_manager.manager_id.to_le_bytes()],
        bump = registry_manager.bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,

    /// CHECK: Ledger entry PDA for `index`; existence and status are checked in-handler.
    #[account(
        mut,
        seeds = [REQUEST_SEED, registry_manager.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub request: UncheckedAccount<'info>,

    pub owner: Signer<'info>,
}
