//! Asset registry: unique shipment identifiers, their current holder and
//! per-holder enumeration.
//!
//! Ids are minted from the batch number and the number of assets minted so
//! far, `(batch << 32) | minted`. Two mints never share a `(batch, minted)`
//! pair, so ids only collide if storage was already corrupted; that case is
//! still checked and refused.

use soroban_sdk::{log, Address, Env, Vec};

use crate::storage::{self, DataKey};
use crate::ContractError;

const BATCH_SHIFT: u32 = 32;

pub fn total_supply(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

/// Returns `None` once the mint counter no longer fits the low 32 bits.
pub fn asset_id_for(batch: u32, minted: u64) -> Option<u64> {
    if minted > u32::MAX as u64 {
        return None;
    }
    Some(((batch as u64) << BATCH_SHIFT) | minted)
}

pub fn exists(env: &Env, asset_id: u64) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::AssetOwner(asset_id))
}

/// The id the next `mint` for `batch` would allocate.
pub fn next_asset_id(env: &Env, batch: u32) -> Result<u64, ContractError> {
    let asset_id =
        asset_id_for(batch, total_supply(env)).ok_or(ContractError::InvariantViolation)?;
    if exists(env, asset_id) {
        return Err(ContractError::InvariantViolation);
    }
    Ok(asset_id)
}

pub fn mint(env: &Env, owner: &Address, batch: u32) -> Result<u64, ContractError> {
    let minted = total_supply(env);
    let asset_id = next_asset_id(env, batch)?;
    let next_supply = minted
        .checked_add(1)
        .ok_or(ContractError::InvariantViolation)?;

    set_owner(env, asset_id, owner);

    let mut holdings = assets_of(env, owner);
    holdings.push_back(asset_id);
    set_holdings(env, owner, &holdings);

    let index_key = DataKey::AssetByIndex(minted);
    env.storage().persistent().set(&index_key, &asset_id);
    storage::extend_persistent(env, &index_key);

    env.storage()
        .instance()
        .set(&DataKey::TotalSupply, &next_supply);

    log!(env, "asset minted", asset_id, next_supply);
    Ok(asset_id)
}

pub fn owner_of(env: &Env, asset_id: u64) -> Result<Address, ContractError> {
    let key = DataKey::AssetOwner(asset_id);
    let owner = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    storage::extend_persistent(env, &key);
    Ok(owner)
}

fn set_owner(env: &Env, asset_id: u64, owner: &Address) {
    let key = DataKey::AssetOwner(asset_id);
    env.storage().persistent().set(&key, owner);
    storage::extend_persistent(env, &key);
}

pub fn assets_of(env: &Env, owner: &Address) -> Vec<u64> {
    let key = DataKey::OwnedAssets(owner.clone());
    match env.storage().persistent().get(&key) {
        Some(holdings) => {
            storage::extend_persistent(env, &key);
            holdings
        }
        None => Vec::new(env),
    }
}

fn set_holdings(env: &Env, owner: &Address, holdings: &Vec<u64>) {
    let key = DataKey::OwnedAssets(owner.clone());
    if holdings.is_empty() {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, holdings);
        storage::extend_persistent(env, &key);
    }
}

pub fn balance_of(env: &Env, owner: &Address) -> u32 {
    assets_of(env, owner).len()
}

pub fn asset_of_owner_by_index(
    env: &Env,
    owner: &Address,
    index: u32,
) -> Result<u64, ContractError> {
    assets_of(env, owner)
        .get(index)
        .ok_or(ContractError::NotFound)
}

pub fn asset_by_index(env: &Env, index: u64) -> Result<u64, ContractError> {
    let key = DataKey::AssetByIndex(index);
    let asset_id = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    storage::extend_persistent(env, &key);
    Ok(asset_id)
}

/// Moves `asset_id` from `from` to `to`. Every check runs before the first write.
pub fn transfer_ownership(
    env: &Env,
    asset_id: u64,
    from: &Address,
    to: &Address,
) -> Result<(), ContractError> {
    let owner = owner_of(env, asset_id)?;
    if owner != *from {
        return Err(ContractError::NotOwner);
    }

    let mut from_holdings = assets_of(env, from);
    let position = from_holdings
        .first_index_of(asset_id)
        .ok_or(ContractError::InvariantViolation)?;

    from_holdings.remove(position);
    set_holdings(env, from, &from_holdings);

    let mut to_holdings = assets_of(env, to);
    to_holdings.push_back(asset_id);
    set_holdings(env, to, &to_holdings);

    set_owner(env, asset_id, to);

    Ok(())
}
