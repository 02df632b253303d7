//! Custody transfer state machine.
//!
//! A transfer hands a shipment to the next custodian and advances its
//! lifecycle by exactly one step. Which step a caller may perform depends only
//! on the caller's role, and is looked up in [`custody_rule`]:
//!
//! | caller role  | recipient role | required state       | next state           |
//! |--------------|----------------|----------------------|----------------------|
//! | Manufacturer | Pharmacist     | ReadyToShip          | ReceivedByPharmacist |
//! | Pharmacist   | Buyer          | ReceivedByPharmacist | ReceivedByBuyer      |
//!
//! `ReceivedByBuyer` has no outgoing rule, so it is terminal.
//!
//! A transfer is planned first (every check, no writes) and then committed.
//! The commit touches the asset registry and the shipment record together.

use soroban_sdk::{log, Address, Env};

use crate::roles::{self, Role};
use crate::shipment::{self, Shipment, ShipmentState};
use crate::{events, registry, ContractError};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CustodyRule {
    pub target_role: Role,
    pub required_state: ShipmentState,
    pub next_state: ShipmentState,
}

pub fn custody_rule(role: &Role) -> Option<CustodyRule> {
    match role {
        Role::Manufacturer => Some(CustodyRule {
            target_role: Role::Pharmacist,
            required_state: ShipmentState::ReadyToShip,
            next_state: ShipmentState::ReceivedByPharmacist,
        }),
        Role::Pharmacist => Some(CustodyRule {
            target_role: Role::Buyer,
            required_state: ShipmentState::ReceivedByPharmacist,
            next_state: ShipmentState::ReceivedByBuyer,
        }),
        Role::Buyer | Role::Admin => None,
    }
}

struct PlannedTransfer {
    shipment: Shipment,
    next_state: ShipmentState,
}

fn plan_transfer(
    env: &Env,
    caller: &Address,
    asset_id: u64,
    new_owner: &Address,
) -> Result<PlannedTransfer, ContractError> {
    let caller_role = roles::require_role(env, caller, &[Role::Manufacturer, Role::Pharmacist])?;

    let shipment = shipment::get_shipment(env, asset_id).ok_or(ContractError::NotFound)?;
    if shipment.owner != *caller {
        return Err(ContractError::NotOwner);
    }

    let rule = custody_rule(&caller_role).ok_or(ContractError::InvariantViolation)?;
    if !roles::has_role(env, new_owner, &rule.target_role) {
        return Err(ContractError::InvalidTarget);
    }
    if shipment.state != rule.required_state {
        return Err(ContractError::InvalidState);
    }

    // The shipment's owner mirror must agree with the registry before anything moves.
    match registry::owner_of(env, asset_id) {
        Ok(owner) if owner == shipment.owner => {}
        _ => return Err(ContractError::InvariantViolation),
    }

    Ok(PlannedTransfer {
        shipment,
        next_state: rule.next_state,
    })
}

pub fn transfer_shipment(
    env: &Env,
    caller: &Address,
    asset_id: u64,
    new_owner: &Address,
) -> Result<(), ContractError> {
    let PlannedTransfer {
        mut shipment,
        next_state,
    } = plan_transfer(env, caller, asset_id, new_owner)?;

    registry::transfer_ownership(env, asset_id, caller, new_owner)?;

    shipment.state = next_state.clone();
    shipment.owner = new_owner.clone();
    shipment.updated_at = env.ledger().timestamp();
    shipment::set_shipment(env, &shipment);

    log!(env, "custody transferred", asset_id);
    events::emit_shipment_transferred(env, asset_id, caller.clone(), new_owner.clone(), next_state);

    Ok(())
}

/// Checks that the shipment record, the registry owner and the owner's
/// holdings all agree for `asset_id`.
pub fn verify_custody(env: &Env, asset_id: u64) -> bool {
    let shipment = match shipment::get_shipment(env, asset_id) {
        Some(s) => s,
        None => return false,
    };

    let owner = match registry::owner_of(env, asset_id) {
        Ok(owner) => owner,
        Err(_) => return false,
    };

    owner == shipment.owner && registry::assets_of(env, &owner).contains(asset_id)
}
