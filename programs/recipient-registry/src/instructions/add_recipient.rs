use anchor_lang::prelude::*;

use crate::constants::{RECIPIENT_SEED, REGISTRY_SEED};
use crate::state::{Recipient, RecipientSlot, Registry};

/// Direct add by the registry owner or its manager. Returns the new index.
pub fn add_recipient(ctx: Context<AddRecipient>, recipient: Recipient) -> Result<u64> {
    let registry_key = ctx.accounts.registry.key();
    let authority = ctx.accounts.authority.key();
    ctx.accounts.recipient_slot.bump = ctx.bumps.recipient_slot;

    ctx.accounts.registry.add(
        &authority,
        registry_key,
        &mut ctx.accounts.recipient_slot,
        recipient,
    )
}

#[derive(Accounts)]
pub struct AddRecipient<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(
        init,
        payer = payer,
        space = 8 + RecipientSlot::INIT_SPACE,
        seeds = [RECIPIENT_SEED, registry.key().as_ref(), &registry.slot_count.to_le_bytes()],
        bump
    )]
    pub recipient_slot: Account<'info, RecipientSlot>,

    /// Registry owner or manager.
    pub authority: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
