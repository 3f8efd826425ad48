//! Program-wide constants.

/// PDA seed for `Registry` accounts: `[REGISTRY_SEED, creator, registry_id]`.
pub const REGISTRY_SEED: &[u8] = b"registry";

/// PDA seed for per-index recipient slots: `[RECIPIENT_SEED, registry, index]`.
pub const RECIPIENT_SEED: &[u8] = b"recipient";

/// PDA seed for `RegistryManager` accounts: `[MANAGER_SEED, creator, manager_id]`.
pub const MANAGER_SEED: &[u8] = b"registry_manager";

/// PDA seed for ledger entries: `[REQUEST_SEED, registry_manager, index]`.
pub const REQUEST_SEED: &[u8] = b"request";

/// Max byte length of any metadata url (registry or recipient).
pub const MAX_METADATA_URL_LEN: usize = 200;

/// Instruction name the identity verifier program must expose.
pub const VERIFIES_IX_NAME: &str = "global:verifies";

/// Size of the Anchor instruction discriminator.
pub const DISCRIMINATOR_LEN: usize = 8;
