use soroban_sdk::{contracttype, Address, Env, String};

use crate::roles::{self, Role};
use crate::storage::{self, DataKey};
use crate::{utils, ContractError};

/// Latest request addressed to a manufacturer. A new request overwrites it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PurchaseOrder {
    pub item: String,
    pub description: String,
    pub requester: Address,
    pub created_at: u64,
}

pub fn create_purchase_order(
    env: &Env,
    pharmacist: &Address,
    item: String,
    description: String,
    manufacturer: &Address,
) -> Result<(), ContractError> {
    roles::require_role(env, pharmacist, &[Role::Pharmacist])?;

    if !roles::has_role(env, manufacturer, &Role::Manufacturer) {
        return Err(ContractError::InvalidTarget);
    }
    if !utils::is_valid_label(&item) || !utils::is_valid_description(&description) {
        return Err(ContractError::InvalidInput);
    }

    let order = PurchaseOrder {
        item,
        description,
        requester: pharmacist.clone(),
        created_at: env.ledger().timestamp(),
    };

    let key = DataKey::PurchaseOrder(manufacturer.clone());
    env.storage().persistent().set(&key, &order);
    storage::extend_persistent(env, &key);

    Ok(())
}

pub fn view_purchase_orders(env: &Env, caller: &Address) -> Result<PurchaseOrder, ContractError> {
    roles::require_role(env, caller, &[Role::Manufacturer, Role::Pharmacist])?;

    let key = DataKey::PurchaseOrder(caller.clone());
    let order = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::NotFound)?;
    storage::extend_persistent(env, &key);
    Ok(order)
}
