#![cfg(test)]

/// Contract setup helpers shared by every test module
pub mod utils;





/// Shipment notifications
mod events;
