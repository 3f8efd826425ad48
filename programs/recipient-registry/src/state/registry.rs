use anchor_lang::prelude::*;

use crate::constants::MAX_METADATA_URL_LEN;
use crate::error::RegistryError;
use crate::events::{RecipientAdded, RecipientChanged, RecipientRemoved};

/// A recipient record. The all-zero value is the tombstone left by removal.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct Recipient {
    /// Opaque identifier (e.g. an attestation uid).
    pub id: [u8; 32],
    /// Payout address; never null for a live recipient.
    pub recipient_address: Pubkey,
    #[max_len(MAX_METADATA_URL_LEN)]
    pub metadata_url: String,
}

impl Recipient {
    pub fn is_tombstone(&self) -> bool {
        self.recipient_address == Pubkey::default()
    }

    /// Shape checks for a recipient that is about to be stored.
    pub fn validate(&self) -> Result<()> {
        require!(
            self.recipient_address != Pubkey::default(),
            RegistryError::InvalidInput
        );
        require!(
            self.metadata_url.len() <= MAX_METADATA_URL_LEN,
            RegistryError::InvalidInput
        );
        Ok(())
    }
}

/// PDA holding one ever-allocated index of a registry.
/// Seeds: `[RECIPIENT_SEED, registry, index_le]`.
#[account]
#[derive(Debug, InitSpace)]
pub struct RecipientSlot {
    pub registry: Pubkey,
    pub index: u64,
    pub recipient: Recipient,
    pub bump: u8,
}

/// Bounded, indexed recipient store for one funding round.
/// Seeds: `[REGISTRY_SEED, creator, registry_id_le]`.
#[account]
#[derive(Debug, InitSpace)]
pub struct Registry {
    /// Signer that created the registry (PDA seed, never changes).
    pub creator: Pubkey,
    pub registry_id: u64,
    /// Current owner; may mutate recipients directly.
    pub owner: Pubkey,
    /// The only non-owner address allowed to mutate recipients. Set once.
    pub manager: Pubkey,
    pub max_recipients: u32,
    /// Live (non-tombstoned) recipients.
    pub recipient_count: u32,
    /// Ever-allocated indices. Slot accounts exist for `0..slot_count`.
    pub slot_count: u64,
    #[max_len(MAX_METADATA_URL_LEN)]
    pub metadata_url: String,
    pub bump: u8,
}

impl Registry {
    /// Fills a freshly created registry. `creator` becomes the owner.
    pub fn init(
        &mut self,
        creator: Pubkey,
        registry_id: u64,
        manager: Pubkey,
        max_recipients: u32,
        metadata_url: String,
        bump: u8,
    ) -> Result<()> {
        require!(creator != Pubkey::default(), RegistryError::InvalidAddress);
        require!(manager != Pubkey::default(), RegistryError::InvalidAddress);
        require!(max_recipients > 0, RegistryError::InvalidInput);
        require!(
            metadata_url.len() <= MAX_METADATA_URL_LEN,
            RegistryError::InvalidInput
        );

        self.creator = creator;
        self.registry_id = registry_id;
        self.owner = creator;
        self.manager = manager;
        self.max_recipients = max_recipients;
        self.recipient_count = 0;
        self.slot_count = 0;
        self.metadata_url = metadata_url;
        self.bump = bump;
        Ok(())
    }

    pub fn set_metadata_url(&mut self, caller: &Pubkey, metadata_url: String) -> Result<()> {
        require_keys_eq!(*caller, self.owner, RegistryError::Unauthorized);
        require!(
            metadata_url.len() <= MAX_METADATA_URL_LEN,
            RegistryError::InvalidInput
        );
        self.metadata_url = metadata_url;
        Ok(())
    }

    /// Hands the owner role to `new_owner`; returns the previous owner.
    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<Pubkey> {
        require_keys_eq!(*caller, self.owner, RegistryError::Unauthorized);
        require!(new_owner != Pubkey::default(), RegistryError::InvalidAddress);
        Ok(std::mem::replace(&mut self.owner, new_owner))
    }

    pub fn authorize(&self, caller: &Pubkey) -> Result<()> {
        require!(
            *caller == self.owner || *caller == self.manager,
            RegistryError::Unauthorized
        );
        Ok(())
    }

    pub fn is_allocated(&self, index: u64) -> bool {
        index < self.slot_count
    }

    /// Capacity counts allocated slots, so tombstones are never handed out again.
    pub fn is_full(&self) -> bool {
        self.recipient_count >= self.max_recipients
            || self.slot_count >= u64::from(self.max_recipients)
    }

    /// Stores `recipient` in `slot` under the next sequential index.
    /// `slot` must be the freshly created account for `self.slot_count`.
    pub fn add(
        &mut self,
        caller: &Pubkey,
        registry_key: Pubkey,
        slot: &mut RecipientSlot,
        recipient: Recipient,
    ) -> Result<u64> {
        self.authorize(caller)?;
        require!(!self.is_full(), RegistryError::MaxRecipientsReached);
        recipient.validate()?;

        let index = self.slot_count;
        let slot_count = index.checked_add(1).ok_or(RegistryError::MathOverflow)?;
        let recipient_count = self
            .recipient_count
            .checked_add(1)
            .ok_or(RegistryError::MathOverflow)?;

        slot.registry = registry_key;
        slot.index = index;
        slot.recipient = recipient;
        self.slot_count = slot_count;
        self.recipient_count = recipient_count;

        emit!(RecipientAdded {
            index,
            id: slot.recipient.id,
            metadata_url: slot.recipient.metadata_url.clone(),
            recipient_address: slot.recipient.recipient_address,
        });
        Ok(index)
    }

    /// Overwrites a live slot in place; the index does not change.
    pub fn change(
        &mut self,
        caller: &Pubkey,
        slot: &mut RecipientSlot,
        recipient: Recipient,
    ) -> Result<()> {
        self.authorize(caller)?;
        self.ensure_live(slot)?;
        recipient.validate()?;

        slot.recipient = recipient;

        emit!(RecipientChanged {
            index: slot.index,
            id: slot.recipient.id,
            metadata_url: slot.recipient.metadata_url.clone(),
            recipient_address: slot.recipient.recipient_address,
        });
        Ok(())
    }

    /// Clears a live slot to the tombstone. The index stays allocated.
    pub fn remove(&mut self, caller: &Pubkey, slot: &mut RecipientSlot) -> Result<()> {
        self.authorize(caller)?;
        self.ensure_live(slot)?;
        let recipient_count = self
            .recipient_count
            .checked_sub(1)
            .ok_or(RegistryError::MathOverflow)?;

        let last = std::mem::take(&mut slot.recipient);
        self.recipient_count = recipient_count;

        emit!(RecipientRemoved {
            index: slot.index,
            id: last.id,
            metadata_url: last.metadata_url,
            recipient_address: Pubkey::default(),
        });
        Ok(())
    }

    fn ensure_live(&self, slot: &RecipientSlot) -> Result<()> {
        require!(
            self.is_allocated(slot.index) && !slot.recipient.is_tombstone(),
            RegistryError::InvalidIndex
        );
        Ok(())
    }
}
