use soroban_sdk::{contracttype, Address, Env, String};

use crate::roles::{self, Role};
use crate::storage::{self, DataKey};
use crate::{events, registry, utils, ContractError};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShipmentState {
    ReadyToShip,
    ReceivedByPharmacist,
    ReceivedByBuyer,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Shipment {
    pub asset_id: u64,
    pub batch: u32,
    pub item: String,
    pub expiry: String,
    pub price: u64,
    pub state: ShipmentState,
    pub owner: Address,
    pub created_at: u64,
    pub updated_at: u64,
}

pub fn get_shipment(env: &Env, asset_id: u64) -> Option<Shipment> {
    let key = DataKey::Shipment(asset_id);
    let shipment = env.storage().persistent().get(&key);
    if shipment.is_some() {
        storage::extend_persistent(env, &key);
    }
    shipment
}

pub fn set_shipment(env: &Env, shipment: &Shipment) {
    let key = DataKey::Shipment(shipment.asset_id);
    env.storage().persistent().set(&key, shipment);
    storage::extend_persistent(env, &key);
}

/// Mints the asset and records its shipment as one unit; nothing is written
/// unless the caller is a manufacturer and the inputs are valid.
pub fn create_shipment(
    env: &Env,
    manufacturer: &Address,
    batch: u32,
    item: String,
    expiry: String,
    price: u64,
) -> Result<u64, ContractError> {
    roles::require_role(env, manufacturer, &[Role::Manufacturer])?;

    if !utils::is_valid_label(&item) || !utils::is_valid_label(&expiry) {
        return Err(ContractError::InvalidInput);
    }

    let asset_id = registry::next_asset_id(env, batch)?;
    if get_shipment(env, asset_id).is_some() {
        return Err(ContractError::InvariantViolation);
    }
    registry::mint(env, manufacturer, batch)?;

    let now = env.ledger().timestamp();
    let shipment = Shipment {
        asset_id,
        batch,
        item,
        expiry,
        price,
        state: ShipmentState::ReadyToShip,
        owner: manufacturer.clone(),
        created_at: now,
        updated_at: now,
    };
    set_shipment(env, &shipment);

    events::emit_shipment_created(env, asset_id, manufacturer.clone(), batch);

    Ok(asset_id)
}

pub fn view_shipment(env: &Env, caller: &Address, asset_id: u64) -> Result<Shipment, ContractError> {
    roles::require_role(env, caller, &[Role::Manufacturer, Role::Pharmacist])?;
    get_shipment(env, asset_id).ok_or(ContractError::NotFound)
}
