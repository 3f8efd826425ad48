use anchor_lang::prelude::*;

/// Error codes shared by the registry and the registry manager.
#[error_code]
pub enum RegistryError {
    #[msg("Invalid address: a required address is the null address")]
    InvalidAddress,

    #[msg("Invalid input: malformed recipient payload")]
    InvalidInput,

    #[msg("Invalid index: no live recipient at this index")]
    InvalidIndex,

    #[msg("Registry is full")]
    MaxRecipientsReached,

    #[msg("Unauthorized: owner or manager signature required")]
    Unauthorized,

    #[msg("Request failed validation")]
    ValidationError,

    #[msg("Submitter is not the attested owner of this recipient")]
    NotYourAttestation,

    #[msg("Request is not pending or does not exist")]
    OperationError,

    #[msg("Math overflow")]
    MathOverflow,
}
