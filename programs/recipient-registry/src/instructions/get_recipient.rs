use anchor_lang::prelude::*;

use crate::constants::{RECIPIENT_SEED, REGISTRY_SEED};
use crate::error::RegistryError;
use crate::state::{Recipient, RecipientSlot, Registry};
use crate::utils::account::load_account;

/// Read-only. A removed index answers with the tombstone.
pub fn get_recipient(ctx: Context<GetRecipient>, index: u64) -> Result<Recipient> {
    require!(
        ctx.accounts.registry.is_allocated(index),
        RegistryError::InvalidIndex
    );
    let slot: RecipientSlot =
        load_account(&ctx.accounts.recipient_slot, RegistryError::InvalidIndex)?;
    Ok(slot.recipient)
}

#[derive(Accounts)]
#[instruction(index: u64)]
pub struct GetRecipient<'info> {
    #[account(
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    /// CHECK: Slot PDA for `index`; existence is checked in-handler.
    #[account(
        seeds = [RECIPIENT_SEED, registry.key().as_ref(), &index.to_le_bytes()],
        bump
    )]
    pub recipient_slot: UncheckedAccount<'info>,
}
