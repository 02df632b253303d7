//! Notifications published for off-chain observers.
//!
//! Only two events exist: a shipment was created, and a shipment changed
//! custody. Both carry the asset id so indexers can follow a single asset.

use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::shipment::ShipmentState;

/// Topic for shipment creation events
pub const TOPIC_SHIPMENT_CREATED: Symbol = symbol_short!("created");
/// Topic for custody transfer events
pub const TOPIC_SHIPMENT_TRANSFERRED: Symbol = symbol_short!("transfer");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentCreatedEvent {
    pub asset_id: u64,
    pub manufacturer: Address,
    pub batch: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShipmentTransferredEvent {
    pub asset_id: u64,
    pub from: Address,
    pub new_owner: Address,
    pub state: ShipmentState,
}

pub fn emit_shipment_created(env: &Env, asset_id: u64, manufacturer: Address, batch: u32) {
    let event = ShipmentCreatedEvent {
        asset_id,
        manufacturer,
        batch,
    };
    env.events().publish((TOPIC_SHIPMENT_CREATED,), event);
}

pub fn emit_shipment_transferred(
    env: &Env,
    asset_id: u64,
    from: Address,
    new_owner: Address,
    state: ShipmentState,
) {
    let event = ShipmentTransferredEvent {
        asset_id,
        from,
        new_owner,
        state,
    };
    env.events().publish((TOPIC_SHIPMENT_TRANSFERRED,), event);
}
