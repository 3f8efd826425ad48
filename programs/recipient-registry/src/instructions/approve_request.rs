use anchor_lang::prelude::*;

use crate::constants::{MANAGER_SEED, RECIPIENT_SEED, REGISTRY_SEED, REQUEST_SEED};
use crate::error::RegistryError;
use crate::state::{RecipientSlot, Registry, RegistryManager, Request};
use crate::utils::account::{load_account, store_account};

/// Owner-only. Applies request `index` to its registry and marks it Approved.
///
/// `slot_index` names the recipient slot the request writes: the registry's
/// next index for Add, the target index for Change/Remove. The slot is created
/// here for Add. Any registry failure aborts the transaction and the request
/// stays Pending.
pub fn approve_request(
    ctx: Context<ApproveRequest>,
    index: u64,
    slot_index: u64,
) -> Result<()> {
    let mgr = &ctx.accounts.registry_manager;
    mgr.ensure_owner(&ctx.accounts.owner.key())?;
    mgr.ensure_request_index(index)?;
    let manager_key = mgr.key();

    let request_ai = ctx.accounts.request.to_account_info();
    let mut request: Request = load_account(&request_ai, RegistryError::OperationError)?;
    request.ensure_pending()?;
    let expected_slot = request.slot_index(&ctx.accounts.registry)?;
    require_eq!(slot_index, expected_slot, RegistryError::OperationError);

    let registry_key = ctx.accounts.registry.key();
    ctx.accounts.recipient_slot.bump = ctx.bumps.recipient_slot;
    request.approve(
        &manager_key,
        &mut ctx.accounts.registry,
        registry_key,
        &mut ctx.accounts.recipient_slot,
    )?;

    store_account(&request_ai, &request)
}

#[derive(Accounts)]
#[instruction(index: u64, slot_index: u64)]
pub struct ApproveRequest<'info> {
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

    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        init_if_needed,
        payer = owner,
        space = 8 + RecipientSlot::INIT_SPACE,
        seeds = [RECIPIENT_SEED, registry.key().as_ref(), &slot_index.to_le_bytes()],
        bump
    )]
    pub recipient_slot: Box<Account<'info, RecipientSlot>>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
