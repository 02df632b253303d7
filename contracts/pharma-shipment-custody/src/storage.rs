use soroban_sdk::{contracttype, Address, Env};

// Ledgers close roughly every 5 seconds.
pub const DAY_IN_LEDGERS: u32 = 17_280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Storage key types
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,                   // instance: seeded administrator
    TotalSupply,             // instance: number of assets minted so far
    Role(Address),           // actor -> Role
    AssetOwner(u64),         // asset_id -> current holder
    OwnedAssets(Address),    // holder -> Vec<asset_id>
    AssetByIndex(u64),       // mint index -> asset_id
    Shipment(u64),           // asset_id -> Shipment
    PurchaseOrder(Address),  // manufacturer -> latest PurchaseOrder
}

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

pub fn extend_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}
