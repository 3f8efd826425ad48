use anchor_lang::prelude::*;

use crate::constants::REGISTRY_SEED;
use crate::events::RegistryMetadataUpdated;
use crate::state::Registry;

pub fn set_registry_metadata(
    ctx: Context<SetRegistryMetadata>,
    metadata_url: String,
) -> Result<()> {
    let registry_key = ctx.accounts.registry.key();
    let reg = &mut ctx.accounts.registry;
    reg.set_metadata_url(&ctx.accounts.owner.key(), metadata_url)?;

    emit!(RegistryMetadataUpdated {
        registry: registry_key,
        metadata_url: reg.metadata_url.clone(),
    });
    Ok(())
}

#[derive(Accounts)]
pub struct SetRegistryMetadata<'info> {
    #[account(
        mut,
        seeds = [REGISTRY_SEED, registry.creator.as_ref(), &registry.registry_id.to_le_bytes()],
        bump = registry.bump
    )]
    pub registry: Account<'info, Registry>,

    pub owner: Signer<'info>,
}
