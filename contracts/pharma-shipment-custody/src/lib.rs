#![no_std]

//! Pharmaceutical shipment custody contract.
//!
//! Shipments are non-fungible assets that move Manufacturer -> Pharmacist ->
//! Buyer. An administrator onboards every actor with a role; the role decides
//! which operations and which custody step an actor may perform.
//!
//! Every entry point runs as one host invocation: an `Err` return discards all
//! of its writes and events, so callers never observe a half-applied transfer.

mod custody;
mod error;
mod events;
mod purchase_order;
mod registry;
mod roles;
mod shipment;
mod storage;
mod utils;

#[cfg(test)]
mod tests;

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub use custody::{custody_rule, CustodyRule};
pub use error::*;
pub use events::*;
pub use purchase_order::PurchaseOrder;
pub use roles::Role;
pub use shipment::{Shipment, ShipmentState};

#[contract]
pub struct PharmaShipmentCustody;

#[contractimpl]
impl PharmaShipmentCustody {
    /// Initialize the contract; `admin` becomes the only Admin.
    pub fn initialize(env: Env, admin: Address) -> Result<(), ContractError> {
        admin.require_auth();
        roles::initialize(&env, &admin)
    }

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        roles::admin(&env)
    }

    // Role registry

    /// Assign (or reassign) the role of `actor`. Admin only.
    pub fn onboard_user(
        env: Env,
        admin: Address,
        actor: Address,
        role: Role,
    ) -> Result<(), ContractError> {
        admin.require_auth();
        storage::extend_instance(&env);
        roles::assign_role(&env, &admin, &actor, role)
    }

    /// Display name of the caller's role, `"Unassigned"` if none.
    pub fn view_role(env: Env, caller: Address) -> String {
        caller.require_auth();
        roles::role_name(&env, roles::role_of(&env, &caller))
    }

    pub fn role_of(env: Env, actor: Address) -> Option<Role> {
        roles::role_of(&env, &actor)
    }

    // Purchase orders

    pub fn create_purchase_order(
        env: Env,
        pharmacist: Address,
        item: String,
        description: String,
        manufacturer: Address,
    ) -> Result<(), ContractError> {
        pharmacist.require_auth();
        storage::extend_instance(&env);
        purchase_order::create_purchase_order(&env, &pharmacist, item, description, &manufacturer)
    }

    /// The latest purchase order addressed to the caller.
    pub fn view_purchase_orders(env: Env, caller: Address) -> Result<PurchaseOrder, ContractError> {
        caller.require_auth();
        purchase_order::view_purchase_orders(&env, &caller)
    }

    // Shipments

    /// Mint a new shipment owned by `manufacturer`, returning its asset id.
    pub fn create_shipment(
        env: Env,
        manufacturer: Address,
        batch: u32,
        item: String,
        expiry: String,
        price: u64,
    ) -> Result<u64, ContractError> {
        manufacturer.require_auth();
        storage::extend_instance(&env);
        shipment::create_shipment(&env, &manufacturer, batch, item, expiry, price)
    }

    pub fn view_shipment(env: Env, caller: Address, asset_id: u64) -> Result<Shipment, ContractError> {
        caller.require_auth();
        shipment::view_shipment(&env, &caller, asset_id)
    }

    /// Hand the shipment to the next custodian and advance its state.
    pub fn transfer_shipment(
        env: Env,
        caller: Address,
        asset_id: u64,
        new_owner: Address,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        storage::extend_instance(&env);
        custody::transfer_shipment(&env, &caller, asset_id, &new_owner)
    }

    pub fn verify_custody(env: Env, asset_id: u64) -> bool {
        custody::verify_custody(&env, asset_id)
    }

    // Asset registry queries

    pub fn owner_of(env: Env, asset_id: u64) -> Result<Address, ContractError> {
        registry::owner_of(&env, asset_id)
    }

    pub fn total_supply(env: Env) -> u64 {
        registry::total_supply(&env)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        registry::balance_of(&env, &owner)
    }

    pub fn assets_of(env: Env, owner: Address) -> Vec<u64> {
        registry::assets_of(&env, &owner)
    }

    pub fn asset_of_owner_by_index(
        env: Env,
        owner: Address,
        index: u32,
    ) -> Result<u64, ContractError> {
        registry::asset_of_owner_by_index(&env, &owner, index)
    }

    pub fn asset_by_index(env: Env, index: u64) -> Result<u64, ContractError> {
        registry::asset_by_index(&env, index)
    }
}
