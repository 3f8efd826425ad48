//! Identity verification seam used by the identity-checked manager variant.
//!
//! The verifier is an external program. It is called with
//! `(recipient_id, submitter)` and answers a single boolean byte through
//! return data. Any other answer counts as "not attested".

use anchor_lang::prelude::*;
use solana_sha256_hasher::hash;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke};

use crate::constants::{DISCRIMINATOR_LEN, VERIFIES_IX_NAME};
use crate::error::RegistryError;

/// Attests whether `submitter` may reference `recipient_id`.
pub trait IdentityVerifier {
    fn verifies(&self, recipient_id: &[u8; 32], submitter: &Pubkey) -> Result<bool>;
}

/// CPI adapter for an on-chain verifier program.
pub struct VerifierProgram<'info> {
    program: AccountInfo<'info>,
    accounts: Vec<AccountInfo<'info>>,
}

impl<'info> VerifierProgram<'info> {
    /// `remaining[0]` must be the configured verifier program; the rest are
    /// forwarded read-only to the verifier.
    pub fn from_remaining(expected: &Pubkey, remaining: &[AccountInfo<'info>]) -> Result<Self> {
        let (program, accounts) = remaining
            .split_first()
            .ok_or(RegistryError::ValidationError)?;
        require_keys_eq!(*program.key, *expected, RegistryError::ValidationError);
        require!(program.executable, RegistryError::ValidationError);
        Ok(Self {
            program: program.clone(),
            accounts: accounts.to_vec(),
        })
    }
}

impl IdentityVerifier for VerifierProgram<'_> {
    fn verifies(&self, recipient_id: &[u8; 32], submitter: &Pubkey) -> Result<bool> {
        let ix = Instruction {
            program_id: *self.program.key,
            accounts: self
                .accounts
                .iter()
                .map(|a| AccountMeta::new_readonly(*a.key, false))
                .collect(),
            data: verifies_ix_data(recipient_id, submitter),
        };
        let mut infos = self.accounts.clone();
        infos.push(self.program.clone());
        invoke(&ix, &infos)?;

        Ok(decode_verdict(self.program.key, get_return_data()))
    }
}

/// Anchor-style instruction data: discriminator, recipient id, submitter.
pub fn verifies_ix_data(recipient_id: &[u8; 32], submitter: &Pubkey) -> Vec<u8> {
    let mut data = Vec::with_capacity(DISCRIMINATOR_LEN + 32 + 32);
    data.extend_from_slice(&hash(VERIFIES_IX_NAME.as_bytes()).to_bytes()[..DISCRIMINATOR_LEN]);
    data.extend_from_slice(recipient_id);
    data.extend_from_slice(submitter.as_ref());
    data
}

/// Only a `true` byte set by the verifier itself counts.
pub fn decode_verdict(verifier: &Pubkey, return_data: Option<(Pubkey, Vec<u8>)>) -> bool {
    matches!(return_data, Some((from, data)) if from == *verifier && data == [1u8])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ix_data_layout() {
        let submitter = Pubkey::new_unique();
        let data = verifies_ix_data(&[7; 32], &submitter);

        assert_eq!(data.len(), 72);
        assert_eq!(
            &data[..8],
            &hash(b"global:verifies").to_bytes()[..8]
        );
        assert_eq!(&data[8..40], &[7; 32]);
        assert_eq!(&data[40..], submitter.as_ref());
    }

    #[test]
    fn verdict_requires_true_byte_from_verifier() {
        let verifier = Pubkey::new_unique();

        assert!(decode_verdict(&verifier, Some((verifier, vec![1]))));
        assert!(!decode_verdict(&verifier, Some((verifier, vec![0]))));
        assert!(!decode_verdict(&verifier, Some((verifier, vec![1, 0]))));
        assert!(!decode_verdict(&verifier, Some((Pubkey::new_unique(), vec![1]))));
        assert!(!decode_verdict(&verifier, None));
    }
}
