#![cfg(test)]

use soroban_sdk::{testutils::Address as _, Address, Env, String};

use crate::{PharmaShipmentCustody, PharmaShipmentCustodyClient, Role};

pub struct TestContext {
    pub env: Env,
    pub contract_id: Address,
    pub client: PharmaShipmentCustodyClient<'static>,
    pub admin: Address,
    pub manufacturer: Address,
    pub pharmacist: Address,
    pub buyer: Address,
}

pub fn create_test_contract(env: &Env) -> (Address, PharmaShipmentCustodyClient<'static>) {
    let contract_id = env.register(PharmaShipmentCustody, ());
    let client = PharmaShipmentCustodyClient::new(env, &contract_id);
    (contract_id, client)
}

/// Initialized contract with one actor onboarded per custody role.
pub fn setup() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let (contract_id, client) = create_test_contract(&env);

    let admin = Address::generate(&env);
    let manufacturer = Address::generate(&env);
    let pharmacist = Address::generate(&env);
    let buyer = Address::generate(&env);

    client.initialize(&admin);
    client.onboard_user(&admin, &manufacturer, &Role::Manufacturer);
    client.onboard_user(&admin, &pharmacist, &Role::Pharmacist);
    client.onboard_user(&admin, &buyer, &Role::Buyer);

    TestContext {
        env,
        contract_id,
        client,
        admin,
        manufacturer,
        pharmacist,
        buyer,
    }
}

pub fn onboard(ctx: &TestContext, role: Role) -> Address {
    let actor = Address::generate(&ctx.env);
    ctx.client.onboard_user(&ctx.admin, &actor, &role);
    actor
}

pub fn create_aspirin(ctx: &TestContext, batch: u32) -> u64 {
    ctx.client.create_shipment(
        &ctx.manufacturer,
        &batch,
        &String::from_str(&ctx.env, "Aspirin"),
        &String::from_str(&ctx.env, "2026-01-01"),
        &100,
    )
}
