use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    Unauthorized = 3,
    NotOwner = 4,

    // Lookup errors
    NotFound = 5,

    // Custody errors
    InvalidTarget = 6,
    InvalidState = 7,
    InvariantViolation = 8,

    // Validation errors
    InvalidInput = 9,
}
