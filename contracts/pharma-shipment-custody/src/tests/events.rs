use soroban_sdk::testutils::Events as _;
use soroban_sdk::{Symbol, TryFromVal};

use super::utils::{create_aspirin, setup};
use crate::{
    ShipmentCreatedEvent, ShipmentState, ShipmentTransferredEvent, TOPIC_SHIPMENT_CREATED,
    TOPIC_SHIPMENT_TRANSFERRED,
};

#[test]
fn test_create_shipment_emits_created() {
    let ctx = setup();
    let asset_id = create_aspirin(&ctx, 3);

    let (emitter, topics, data) = ctx.env.events().all().last().unwrap();
    assert_eq!(emitter, ctx.contract_id);

    let topic = Symbol::try_from_val(&ctx.env, &topics.get(0).unwrap()).unwrap();
    assert_eq!(topic, TOPIC_SHIPMENT_CREATED);

    let event = ShipmentCreatedEvent::try_from_val(&ctx.env, &data).unwrap();
    assert_eq!(
        event,
        ShipmentCreatedEvent {
            asset_id,
            manufacturer: ctx.manufacturer.clone(),
            batch: 3,
        }
    );
}

#[test]
fn test_transfer_emits_transferred() {
    let ctx = setup();
    let asset_id = create_aspirin(&ctx, 1);

    ctx.client.transfer_shipment(&ctx.manufacturer, &asset_id, &ctx.pharmacist);

    let (emitter, topics, data) = ctx.env.events().all().last().unwrap();
    assert_eq!(emitter, ctx.contract_id);

    let topic = Symbol::try_from_val(&ctx.env, &topics.get(0).unwrap()).unwrap();
    assert_eq!(topic, TOPIC_SHIPMENT_TRANSFERRED);

    let event = ShipmentTransferredEvent::try_from_val(&ctx.env, &data).unwrap();
    assert_eq!(event.asset_id, asset_id);
    assert_eq!(event.from, ctx.manufacturer);
    assert_eq!(event.new_owner, ctx.pharmacist);
    assert_eq!(event.state, ShipmentState::ReceivedByPharmacist);

    ctx.client.transfer_shipment(&ctx.pharmacist, &asset_id, &ctx.buyer);

    let (_, _, data) = ctx.env.events().all().last().unwrap();
    let event = ShipmentTransferredEvent::try_from_val(&ctx.env, &data).unwrap();
    assert_eq!(event.new_owner, ctx.buyer);
    assert_eq!(event.state, ShipmentState::ReceivedByBuyer);
}
