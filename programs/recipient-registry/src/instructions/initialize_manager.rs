use anchor_lang::prelude::*;

use crate::constants::MANAGER_SEED;
use crate::events::RegistryManagerInitialized;
use crate::state::RegistryManager;

/// Creates a manager. Pass `verifier` to require identity attestations on
/// every request.
pub fn initialize_manager(
    ctx: Context<InitializeManager>,
    manager_id: u64,
    verifier: Option<Pubkey>,
) -> Result<()> {
    let manager_key = ctx.accounts.registry_manager.key();
    let mgr = &mut ctx.accounts.registry_manager;
    mgr.init(
        ctx.accounts.owner.key(),
        manager_id,
        verifier,
        ctx.bumps.registry_manager,
    )?;

    msg!("Registry manager {} initialized", manager_key);
    emit!(RegistryManagerInitialized {
        registry_manager: manager_key,
        owner: mgr.owner,
        verifier: mgr.verifier,
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(manager_id: u64)]
pub struct InitializeManager<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + RegistryManager::INIT_SPACE,
        seeds = [MANAGER_SEED, owner.key().as_ref(), &manager_id.to_le_bytes()],
        bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
