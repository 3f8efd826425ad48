use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::OwnershipTransferred;
use crate::state::Registry;

pub fn transfer_registry_owner(
    ctx: Context<TransferRegistryOwner>,
    new_owner: Pubkey,
) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    let reg = &mut ctx.accounts.registry;
    let previous_owner = reg.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        account: registry_key,
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferRegistryOwner<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    pub owner: Signer<'info>,
}
