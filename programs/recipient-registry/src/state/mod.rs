pub mod manager;
pub mod registry;
pub mod request;

pub use manager::*;
pub use registry::*;
pub use request::*;

#[cfg(test)]
pub(crate) mod fixtures {
    use anchor_lang::prelude::*;

    use super::*;
    use crate::error::RegistryError;
    use crate::utils::identity::IdentityVerifier;

    pub fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: RegistryError) {
        let err = result.unwrap_err();
        assert_eq!(err, anchor_lang::error::Error::from(expected));
    }

    pub fn registry(max_recipients: u32) -> Registry {
        Registry {
            creator: Pubkey::new_unique(),
            registry_id: 0,
            owner: Pubkey::new_unique(),
            manager: Pubkey::new_unique(),
            max_recipients,
            recipient_count: 0,
            slot_count: 0,
            metadata_url: "ipfs://round".to_string(),
            bump: 255,
        }
    }

    pub fn manager(verifier: Option<Pubkey>) -> RegistryManager {
        RegistryManager {
            creator: Pubkey::new_unique(),
            manager_id: 0,
            owner: Pubkey::new_unique(),
            verifier,
            request_count: 0,
            bump: 255,
        }
    }

    pub fn empty_slot() -> RecipientSlot {
        RecipientSlot {
            registry: Pubkey::default(),
            index: 0,
            recipient: Recipient::default(),
            bump: 255,
        }
    }

    /// Deterministic recipient: id and url derive from `tag`, address is fresh.
    pub fn recipient(tag: u8) -> Recipient {
        Recipient {
            id: [tag; 32],
            recipient_address: Pubkey::new_from_array([tag.wrapping_add(1); 32]),
            metadata_url: format!("ipfs://recipient-{tag}"),
        }
    }

    pub fn pending(
        index: u64,
        registry: Pubkey,
        request_type: RequestType,
        recipient: Recipient,
        target_index: Option<u64>,
    ) -> Request {
        Request {
            manager: Pubkey::new_unique(),
            index,
            registry,
            request_type,
            status: RequestStatus::Pending,
            recipient,
            target_index,
            submitter: Pubkey::new_unique(),
            bump: 255,
        }
    }

    /// In-memory verifier answering from a fixed set of `(recipient_id, submitter)` pairs.
    pub struct MockVerifier {
        attested: Vec<([u8; 32], Pubkey)>,
    }

    impl MockVerifier {
        pub fn attesting(pairs: &[([u8; 32], Pubkey)]) -> Self {
            Self {
                attested: pairs.to_vec(),
            }
        }
    }

    impl IdentityVerifier for MockVerifier {
        fn verifies(&self, recipient_id: &[u8; 32], submitter: &Pubkey) -> Result<bool> {
            Ok(self
                .attested
                .iter()
                .any(|(id, who)| id == recipient_id && who == submitter))
        }
    }
}

#[cfg(test)]
mod scenarios {
    use anchor_lang::prelude::*;

    use super::fixtures::{assert_error, empty_slot, manager, pending, recipient, registry};
    use super::*;
    use crate::error::RegistryError;

    /// A registry delegated to a manager, with request and slot arenas
    /// indexed the same way the PDAs are.
    struct Pipeline {
        manager_key: Pubkey,
        registry_key: Pubkey,
        mgr: RegistryManager,
        reg: Registry,
        slots: Vec<RecipientSlot>,
        requests: Vec<Request>,
    }

    impl Pipeline {
        fn new(max_recipients: u32) -> Self {
            let manager_key = Pubkey::new_unique();
            let mut reg = registry(max_recipients);
            reg.manager = manager_key;
            Self {
                manager_key,
                registry_key: Pubkey::new_unique(),
                mgr: manager(None),
                reg,
                slots: Vec::new(),
                requests: Vec::new(),
            }
        }

        fn process(&mut self, input: RequestInput) -> Result<u64> {
            let target = input
                .target_index
                .and_then(|i| self.slots.get(i as usize));
            self.mgr.validate(
                &self.manager_key,
                &self.registry_key,
                &self.reg,
                &input,
                target,
            )?;
            let mut request =
                pending(0, Pubkey::default(), RequestType::Add, Recipient::default(), None);
            let index = self.mgr.append(
                self.manager_key,
                self.registry_key,
                &mut request,
                input,
                Pubkey::new_unique(),
                255,
            )?;
            self.requests.push(request);
            Ok(index)
        }

        fn approve(&mut self, index: u64) -> Result<()> {
            self.mgr.ensure_request_index(index)?;
            let request = &mut self.requests[index as usize];
            request.ensure_pending()?;
            let slot_index = request.slot_index(&self.reg)? as usize;
            if slot_index == self.slots.len() {
                // Fresh account; discarded below if the approval fails.
                let mut slot = empty_slot();
                request.approve(
                    &self.manager_key,
                    &mut self.reg,
                    self.registry_key,
                    &mut slot,
                )?;
                self.slots.push(slot);
                return Ok(());
            }
            let slot = &mut self.slots[slot_index];
            request.approve(&self.manager_key, &mut self.reg, self.registry_key, slot)
        }

        fn reject(&mut self, index: u64) -> Result<()> {
            self.mgr.ensure_request_index(index)?;
            self.requests[index as usize].reject()
        }

        fn status(&self, index: u64) -> RequestStatus {
            self.requests[index as usize].status
        }
    }

    fn add(tag: u8) -> RequestInput {
        RequestInput {
            request_type: RequestType::Add,
            recipient: recipient(tag),
            target_index: None,
        }
    }

    #[test]
    fn unknown_registry_is_rejected_without_appending() {
        let mut p = Pipeline::new(5);
        p.reg.manager = Pubkey::new_unique();

        assert_error(p.process(add(1)), RegistryError::ValidationError);
        assert_eq!(p.mgr.request_count, 0);
        assert!(p.requests.is_empty());
    }

    #[test]
    fn approve_add_then_approve_again() {
        let mut p = Pipeline::new(5);

        assert_eq!(p.process(add(1)).unwrap(), 0);
        p.approve(0).unwrap();

        assert_eq!(p.reg.recipient_count, 1);
        assert_eq!(p.slots[0].recipient, recipient(1));
        assert_eq!(p.status(0), RequestStatus::Approved);
        assert_error(p.approve(0), RegistryError::OperationError);
        assert_eq!(p.reg.recipient_count, 1);
    }

    #[test]
    fn reject_and_approve_are_each_final() {
        let mut p = Pipeline::new(5);
        p.process(add(1)).unwrap();
        p.process(add(2)).unwrap();
        assert_eq!(p.process(add(3)).unwrap(), 2);
        assert_eq!(p.process(add(4)).unwrap(), 3);

        p.reject(2).unwrap();
        assert_eq!(p.status(2), RequestStatus::Rejected);
        assert_eq!(p.reg.recipient_count, 0);
        assert_error(p.reject(2), RegistryError::OperationError);

        p.approve(3).unwrap();
        assert_error(p.reject(3), RegistryError::OperationError);
        assert_eq!(p.status(3), RequestStatus::Approved);
        assert_eq!(p.reg.recipient_count, 1);
    }

    #[test]
    fn out_of_range_request_index_fails() {
        let mut p = Pipeline::new(5);
        p.process(add(1)).unwrap();

        assert_error(p.approve(1), RegistryError::OperationError);
        assert_error(p.reject(7), RegistryError::OperationError);
    }

    #[test]
    fn remove_request_tombstones_slot() {
        let mut p = Pipeline::new(5);
        p.process(add(1)).unwrap();
        p.approve(0).unwrap();

        let index = p
            .process(RequestInput {
                request_type: RequestType::Remove,
                recipient: recipient(1),
                target_index: Some(0),
            })
            .unwrap();
        p.approve(index).unwrap();

        assert_eq!(p.reg.recipient_count, 0);
        assert_eq!(p.slots[0].recipient, Recipient::default());
        assert_eq!(p.reg.slot_count, 1);
    }

    #[test]
    fn full_registry_leaves_add_request_pending() {
        let mut p = Pipeline::new(1);
        p.process(add(1)).unwrap();
        p.process(add(2)).unwrap();
        p.approve(0).unwrap();

        assert_error(p.approve(1), RegistryError::MaxRecipientsReached);
        assert_eq!(p.status(1), RequestStatus::Pending);
        assert_eq!(p.slots.len(), 1);

        p.reject(1).unwrap();
        assert_eq!(p.status(1), RequestStatus::Rejected);
    }

    #[test]
    fn stale_remove_fails_at_approval() {
        let mut p = Pipeline::new(5);
        p.process(add(1)).unwrap();
        p.approve(0).unwrap();
        let remove = RequestInput {
            request_type: RequestType::Remove,
            recipient: recipient(1),
            target_index: Some(0),
        };
        let first = p.process(remove.clone()).unwrap();
        let second = p.process(remove).unwrap();

        p.approve(first).unwrap();
        assert_error(p.approve(second), RegistryError::InvalidIndex);

        assert_eq!(p.status(second), RequestStatus::Pending);
        assert_eq!(p.reg.recipient_count, 0);
    }
}
