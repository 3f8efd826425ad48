use anchor_lang::prelude::*;

use crate::error::RegistryError;
use crate::events::{RequestApproved, RequestRejected, RequestSent};
use crate::state::{Recipient, RecipientSlot, Registry};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RequestType {
    Add,
    Change,
    Remove,
}

impl RequestType {
    pub fn targets_existing(&self) -> bool {
        matches!(self, RequestType::Change | RequestType::Remove)
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

/// Instruction input for `process_request`.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct RequestInput {
    pub request_type: RequestType,
    pub recipient: Recipient,
    /// Required for Change/Remove, ignored for Add.
    pub target_index: Option<u64>,
}

/// One ledger entry. Seeds: `[REQUEST_SEED, registry_manager, index_le]`.
#[account]
#[derive(Debug, InitSpace)]
pub struct Request {
    pub manager: Pubkey,
    pub index: u64,
    pub registry: Pubkey,
    pub request_type: RequestType,
    pub status: RequestStatus,
    pub recipient: Recipient,
    pub target_index: Option<u64>,
    pub submitter: Pubkey,
    pub bump: u8,
}

impl Request {
    pub fn ensure_pending(&self) -> Result<()> {
        require!(
            self.status == RequestStatus::Pending,
            RegistryError::OperationError
        );
        Ok(())
    }

    /// Index of the recipient slot this request writes to when approved.
    pub fn slot_index(&self, registry: &Registry) -> Result<u64> {
        match self.request_type {
            RequestType::Add => Ok(registry.slot_count),
            RequestType::Change | RequestType::Remove => self
                .target_index
                .ok_or_else(|| error!(RegistryError::OperationError)),
        }
    }

    /// Applies the request to `registry` under `authority`, then finalizes it.
    /// Nothing is written to the request unless the registry call succeeds.
    pub fn approve(
        &mut self,
        authority: &Pubkey,
        registry: &mut Registry,
        registry_key: Pubkey,
        slot: &mut RecipientSlot,
    ) -> Result<()> {
        self.ensure_pending()?;
        require_keys_eq!(registry_key, self.registry, RegistryError::OperationError);

        match self.request_type {
            RequestType::Add => {
                registry.add(authority, registry_key, slot, self.recipient.clone())?;
            }
            RequestType::Change => {
                let target = self.slot_index(registry)?;
                require_eq!(slot.index, target, RegistryError::OperationError);
                registry.change(authority, slot, self.recipient.clone())?;
            }
            RequestType::Remove => {
                let target = self.slot_index(registry)?;
                require_eq!(slot.index, target, RegistryError::OperationError);
                registry.remove(authority, slot)?;
            }
        }

        self.status = RequestStatus::Approved;
        emit!(RequestApproved {
            registry: self.registry,
            request_type: self.request_type,
            recipient_id: self.recipient.id,
            target_index: self.target_index,
            index: self.index,
            recipient_address: self.recipient.recipient_address,
            metadata_url: self.recipient.metadata_url.clone(),
        });
        Ok(())
    }

    pub fn reject(&mut self) -> Result<()> {
        self.ensure_pending()?;

        self.status = RequestStatus::Rejected;
        emit!(RequestRejected {
            registry: self.registry,
            request_type: self.request_type,
            recipient_id: self.recipient.id,
            target_index: self.target_index,
            index: self.index,
            recipient_address: self.recipient.recipient_address,
            metadata_url: self.recipient.metadata_url.clone(),
        });
        Ok(())
    }

    pub(crate) fn emit_sent(&self) {
        emit!(RequestSent {
            registry: self.registry,
            request_type: self.request_type,
            recipient_id: self.recipient.id,
            target_index: self.target_index,
            index: self.index,
            recipient_address: self.recipient.recipient_address,
            metadata_url: self.recipient.metadata_url.clone(),
        });
    }
}
