use near_sdk::AccountId;
use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum RegistryError {
    AccessDenied { account_id: AccountId },
    NotFound { token_id: u64 },
    InvalidRoyalty { basis_points: u32 },
    // Internal-invariant violation: the allocator handed out a used id.
    DuplicateId { token_id: u64 },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied { account_id } => {
                write!(f, "Access denied for account {}", account_id)
            }
            Self::NotFound { token_id } => write!(f, "Token {} not found", token_id),
            Self::InvalidRoyalty { basis_points } => {
                write!(f, "Royalty of {} bps exceeds 100%", basis_points)
            }
            Self::DuplicateId { token_id } => {
                write!(f, "Internal error: token id {} already exists", token_id)
            }
        }
    }
}
