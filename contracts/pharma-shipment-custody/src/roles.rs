use soroban_sdk::{contracttype, Address, Env, String};

use crate::storage::{self, DataKey};
use crate::ContractError;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Role {
    Manufacturer,
    Pharmacist,
    Buyer,
    Admin,
}

/// Seeds the role registry with its single administrator.
pub fn initialize(env: &Env, admin: &Address) -> Result<(), ContractError> {
    if env.storage().instance().has(&DataKey::Admin) {
        return Err(ContractError::AlreadyInitialized);
    }

    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::TotalSupply, &0u64);
    set_role(env, admin, &Role::Admin);
    storage::extend_instance(env);

    Ok(())
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

/// Returns `None` for actors that were never onboarded.
pub fn role_of(env: &Env, actor: &Address) -> Option<Role> {
    let key = DataKey::Role(actor.clone());
    let role = env.storage().persistent().get(&key);
    if role.is_some() {
        storage::extend_persistent(env, &key);
    }
    role
}

fn set_role(env: &Env, actor: &Address, role: &Role) {
    let key = DataKey::Role(actor.clone());
    env.storage().persistent().set(&key, role);
    storage::extend_persistent(env, &key);
}

/// Overwrites any previous role held by `actor`.
pub fn assign_role(
    env: &Env,
    admin: &Address,
    actor: &Address,
    role: Role,
) -> Result<(), ContractError> {
    require_role(env, admin, &[Role::Admin])?;
    set_role(env, actor, &role);
    Ok(())
}

/// Fails with `Unauthorized` unless `actor` currently holds one of `allowed`.
pub fn require_role(env: &Env, actor: &Address, allowed: &[Role]) -> Result<Role, ContractError> {
    match role_of(env, actor) {
        Some(role) if allowed.contains(&role) => Ok(role),
        _ => Err(ContractError::Unauthorized),
    }
}

pub fn has_role(env: &Env, actor: &Address, role: &Role) -> bool {
    role_of(env, actor).as_ref() == Some(role)
}

pub fn role_name(env: &Env, role: Option<Role>) -> String {
    let name = match role {
        Some(Role::Manufacturer) => "Manufacturer",
        Some(Role::Pharmacist) => "Pharmacist",
        Some(Role::Buyer) => "Buyer",
        Some(Role::Admin) => "Admin",
        None => "Unassigned",
    };
    String::from_str(env, name)
}
