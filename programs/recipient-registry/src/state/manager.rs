use anchor_lang::prelude::*;

use crate::constants::MAX_METADATA_URL_LEN;
use crate::error::RegistryError;
use crate::state::{RecipientSlot, Registry, Request, RequestInput, RequestStatus, RequestType};
use crate::utils::identity::IdentityVerifier;

/// Request queue owner. `request_count` is the next ledger index.
/// Seeds: `[MANAGER_SEED, creator, manager_id_le]`.
#[account]
#[derive(Debug, InitSpace)]
pub struct RegistryManager {
    pub creator: Pubkey,
    pub manager_id: u64,
    /// Only address allowed to approve or reject.
    pub owner: Pubkey,
    /// Identity verifier program; `None` disables identity checks.
    pub verifier: Option<Pubkey>,
    pub request_count: u64,
    pub bump: u8,
}

impl RegistryManager {
    /// Fills a freshly created manager. `verifier = Some(..)` selects the
    /// identity-verified variant.
    pub fn init(
        &mut self,
        creator: Pubkey,
        manager_id: u64,
        verifier: Option<Pubkey>,
        bump: u8,
    ) -> Result<()> {
        require!(creator != Pubkey::default(), RegistryError::InvalidAddress);
        require!(
            verifier != Some(Pubkey::default()),
            RegistryError::InvalidAddress
        );

        self.creator = creator;
        self.manager_id = manager_id;
        self.owner = creator;
        self.verifier = verifier;
        self.request_count = 0;
        self.bump = bump;
        Ok(())
    }

    /// Hands the owner role to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        self.ensure_owner(caller)?;
        require!(new_owner != Pubkey::default(), RegistryError::InvalidAddress);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    pub fn ensure_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, RegistryError::Unauthorized);
        Ok(())
    }

    pub fn ensure_request_index(&self, index: u64) -> Result<()> {
        require!(index < self.request_count, RegistryError::OperationError);
        Ok(())
    }

    /// Checks that `registry` delegated to this manager and that the payload
    /// fits the request type. `target` is the slot named by `target_index`.
    pub fn validate(
        &self,
        manager_key: &Pubkey,
        registry_key: &Pubkey,
        registry: &Registry,
        input: &RequestInput,
        target: Option<&RecipientSlot>,
    ) -> Result<()> {
        require_keys_eq!(
            registry.manager,
            *manager_key,
            RegistryError::ValidationError
        );
        require!(
            input.recipient.metadata_url.len() <= MAX_METADATA_URL_LEN,
            RegistryError::ValidationError
        );

        match input.request_type {
            RequestType::Add => {
                require!(
                    input.recipient.recipient_address != Pubkey::default(),
                    RegistryError::ValidationError
                );
            }
            RequestType::Change | RequestType::Remove => {
                let target_index = input
                    .target_index
                    .ok_or(RegistryError::ValidationError)?;
                require!(
                    registry.is_allocated(target_index),
                    RegistryError::ValidationError
                );
                let slot = target.ok_or(RegistryError::ValidationError)?;
                require!(
                    slot.registry == *registry_key && slot.index == target_index,
                    RegistryError::ValidationError
                );
                if input.request_type == RequestType::Change {
                    require!(
                        input.recipient.recipient_address != Pubkey::default(),
                        RegistryError::ValidationError
                    );
                }
            }
        }
        Ok(())
    }

    /// Identity-verified variant: the submitter must be attested for the
    /// recipient id, and Change/Remove must target a slot holding that id.
    pub fn check_identity(
        &self,
        verifier: &dyn IdentityVerifier,
        input: &RequestInput,
        target: Option<&RecipientSlot>,
        submitter: &Pubkey,
    ) -> Result<()> {
        require!(
            verifier.verifies(&input.recipient.id, submitter)?,
            RegistryError::NotYourAttestation
        );
        if input.request_type.targets_existing() {
            let slot = target.ok_or(RegistryError::ValidationError)?;
            require!(
                slot.recipient.id == input.recipient.id,
                RegistryError::NotYourAttestation
            );
        }
        Ok(())
    }

    /// Fills `request` as the next Pending ledger entry and advances the counter.
    /// Call only after validation has passed.
    pub fn append(
        &mut self,
        manager_key: Pubkey,
        registry_key: Pubkey,
        request: &mut Request,
        input: RequestInput,
        submitter: Pubkey,
        bump: u8,
    ) -> Result<u64> {
        let index = self.request_count;
        let request_count = index.checked_add(1).ok_or(RegistryError::MathOverflow)?;

        request.manager = manager_key;
        request.index = index;
        request.registry = registry_key;
        request.request_type = input.request_type;
        request.status = RequestStatus::Pending;
        request.recipient = input.recipient;
        request.target_index = match input.request_type {
            RequestType::Add => None,
            RequestType::Change | RequestType::Remove => input.target_index,
        };
        request.submitter = submitter;
        request.bump = bump;
        self.request_count = request_count;

        request.emit_sent();
        Ok(index)
    }
}
