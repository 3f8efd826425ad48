use anchor_lang::prelude::*;

use crate::constants::MANAGER_SEED;
use crate::events::OwnershipTransferred;
use crate::state::RegistryManager;

pub fn transfer_manager_owner(
    ctx: Context<TransferManagerOwner>,
    new_owner: Pubkey,
) -> Result<()> {
    let manager_key = ctx.accounts.registry_manager.key();
    let mgr = &mut ctx.accounts.registry_manager;
    let previous_owner = mgr.transfer_ownership(&ctx.accounts.owner.key(), new_owner)?;

    emit!(OwnershipTransferred {
        account: manager_key,
        previous_owner,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct TransferManagerOwner<'info> {
    #[account(
        mut,
        seeds = [MANAGER_SEED, registry_manager.creator.as_ref(), &registry_manager.manager_id.to_le_bytes()],
        bump = registry_manager.bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,

    pub owner: Signer<'info>,
}
