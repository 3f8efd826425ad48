pub mod initialize_registry;
pub mod add_recipient;
pub mod change_recipient;
pub mod remove_recipient;
pub mod get_recipient;
pub mod set_registry_metadata;
pub mod transfer_registry_owner;
pub mod initialize_manager;
pub mod process_request;
pub mod approve_request;
pub mod reject_request;
pub mod get_request;
pub mod transfer_manager_owner;

pub use initialize_registry::*;
pub use add_recipient::*;
pub use change_recipient::*;
pub use remove_recipient::*;
pub use get_recipient::*;
pub use set_registry_metadata::*;
pub use transfer_registry_owner::*;
pub use initialize_manager::*;
pub use process_request::*;
pub use approve_request::*;
pub use reject_request::*;
pub use get_request::*;
pub use transfer_manager_owner::*;
