use anchor_lang::prelude::*;

use crate::constants::{MANAGER_SEED, REQUEST_SEED};
use crate::error::RegistryError;
use crate::state::{RecipientSlot, Registry, RegistryManager, Request, RequestInput};
use crate::utils::account::load_account;
use crate::utils::identity::VerifierProgram;

/// Open to any signer. Validates `input` against the target registry and
/// appends a Pending request. Returns the ledger index.
///
/// For identity-verified managers the first remaining account must be the
/// configured verifier program; further remaining accounts are forwarded to it.
pub fn process_request(ctx: Context<ProcessRequest>, input: RequestInput) -> Result<u64> {
    let manager_key = ctx.accounts.registry_manager.key();
    let registry_key = ctx.accounts.registry.key();
    let submitter = ctx.accounts.submitter.key();

    // A registry that is not ours (or not a registry at all) is untrusted.
    let registry: Registry =
        load_account(&ctx.accounts.registry, RegistryError::ValidationError)?;
    let target: Option<RecipientSlot> = match &ctx.accounts.target_slot {
        Some(slot) => Some(load_account(slot, RegistryError::ValidationError)?),
        None => None,
    };

    let mgr = &mut ctx.accounts.registry_manager;
    mgr.validate(&manager_key, &registry_key, &registry, &input, target.as_ref())?;

    if let Some(verifier_key) = mgr.verifier {
        let verifier = VerifierProgram::from_remaining(&verifier_key, ctx.remaining_accounts)?;
        mgr.check_identity(&verifier, &input, target.as_ref(), &submitter)?;
    }

    mgr.append(
        manager_key,
        registry_key,
        &mut ctx.accounts.request,
        input,
        submitter,
        ctx.bumps.request,
    )
}

#[derive(Accounts)]
pub struct ProcessRequest<'info> {
    #[account(
        mut,
        seeds = [MANAGER_SEED, registry_manager.creator.as_ref(), &registry_manager.manager_id.to_le_bytes()],
        bump = registry_manager.bump
    )]
    pub registry_manager: Account<'info, RegistryManager>,

    /// CHECK: Deserialized in-handler; anything but a registry delegated to
    /// `registry_manager` fails validation.
    pub registry: UncheckedAccount<'info>,

    /// CHECK: Slot named by `target_index`, required for Change/Remove;
    /// ownership and index are checked in-handler.
    pub target_slot: Option<UncheckedAccount<'info>>,

    #[account(
        init,
        payer = submitter,
        space = 8 + Request::INIT_SPACE,
        seeds = [REQUEST_SEED, registry_manager.key().as_ref(), &registry_manager.request_count.to_le_bytes()],
        bump
    )]
    pub request: Account<'info, Request>,

    #[account(mut)]
    pub submitter: Signer<'info>,

    pub system_program: Program<'info, System>,
}
