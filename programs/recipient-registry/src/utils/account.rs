//! In-handler (de)serialization for program accounts that are passed unchecked
//! so that a missing account maps to a domain error instead of an Anchor one.

use anchor_lang::prelude::*;

use crate::error::RegistryError;

/// Deserializes `info` as `T`, requiring it to exist and be owned by `T`'s program.
pub fn load_account<T>(info: &AccountInfo, missing: RegistryError) -> Result<T>
where
    T: AccountDeserialize + Owner,
{
    if *info.owner != T::owner() {
        return Err(error!(missing));
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map_err(|_| error!(missing))
}

/// Writes `value` (discriminator included) back into `info`.
pub fn store_account<T>(info: &AccountInfo, value: &T) -> Result<()>
where
    T: AccountSerialize,
{
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    value.try_serialize(&mut writer)
}
