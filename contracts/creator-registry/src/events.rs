use near_sdk::{AccountId, near};

/// One event per successful mutation, emitted in commit order.
#[near(event_json(standard = "nep297"))]
pub enum RegistryEvent {
    #[event_version("1.0.0")]
    TokenMinted {
        token_id: u64,
        owner_id: AccountId,
        uri: String,
    },
    #[event_version("1.0.0")]
    TokenUriUpdated { token_id: u64, uri: String },
    #[event_version("1.0.0")]
    RoyaltySet {
        token_id: u64,
        recipient: AccountId,
        basis_points: u32,
    },
}
