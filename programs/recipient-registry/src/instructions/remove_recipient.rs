use anchor_lang::prelude::*;

use crate::constants::{RECIPIENT_SEED, REGISTRY_SEED};
use crate::error::RegistryError;
use crate::state::{RecipientSlot, Registry};
use crate::utils::account::{load_account, store_account};

pub fn remove_recipient(ctx: Context<RemoveRecipient>, index: u64) -> Result<()> {
    let authority = ctx.accounts.authority.key();
    let reg = &mut ctx.accounts.registry;
    reg.authorize(&authority)?;
    require!(reg.is_allocated(index), RegistryError::InvalidIndex);

    let slot_ai = ctx.accounts.recipient_slot.to_account_info();
    let mut slot: RecipientSlot = load_account(&slot_ai, RegistryError::InvalidIndex)?;
    reg.remove(&authority, &mut slot)?;
    store_account(&slot_ai, &slot)
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct RemoveRecipient<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Slot PDA for `index`; existence is checked in-handler.
    #[account(
        mut,
        seeds = [RECIPIENT_SEED, registry.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub recipient_slot: UncheckedAccount<'info>,

    /// Registry owner or manager.
    pub authority: Signer<'info>,
}
