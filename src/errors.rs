use soroban_sdk::contracterror;

/// Custom error types for the vesting ledger contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    // Authorization errors (100-199)
    NotAdmin = 100,

    // Initialization and schedule configuration errors (200-299)
    AlreadyInitialized = 200,
    NotInitialized = 201,
    InvalidTokenContract = 202,
    ScheduleAlreadySet = 203,
    ScheduleNotSet = 204,
    InvalidStartDate = 205,

    // Intake validation errors (300-399)
    LengthMismatch = 300,
    EmptyBatch = 301,
    InvalidBeneficiary = 302,
    InvalidAmount = 303,

    // Release errors (400-499)
    CliffNotReached = 400,
    NothingToWithdraw = 401,

    // Token and arithmetic errors (500-599)
    InsufficientAllowance = 500,
    InsufficientReserve = 501,
    MathOverflow = 502,
}
