use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::RegistryInitialized;
use crate::state::Registry;

pub fn initialize_registry(
    ctx: Context<InitializeRegistry>,
    registry_id: u64,
    manager: Pubkey,
    max_recipients: u32,
    metadata_url: String,
) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    let reg = &mut ctx.accounts.registry;
    reg.init(
        ctx.accounts.owner.key(),
        registry_id,
        manager,
        max_recipients,
        metadata_url,
        ctx.bumps.registry,
    )?;

    msg!("Registry {} delegated to manager {}", registry_key, reg.manager);
    emit!(RegistryInitialized {
        registry: registry_key,
        owner: reg.owner,
        manager: reg.manager,
        max_recipients: reg.max_recipients,
        metadata_url: reg.metadata_url.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
#[instruction(registry_id: u64)]
pub struct InitializeRegistry<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED, owner.key().as_ref(), &registry_id.to_le_bytes()],
        bump
    )]
    pub registry: Account<'info, Registry>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}
