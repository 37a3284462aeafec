use near_sdk::json_types::U128;
use near_sdk::{AccountId, BorshStorageKey, PanicOnDefault, env, near};

pub mod constants;
mod errors;
mod guards;

mod events;

mod allocator;
mod ownership;
mod registry;
mod royalty;


pub use allocator::IdentityAllocator;
pub use constants::*;
pub use errors::RegistryError;
pub use events::RegistryEvent;
pub use ownership::{OwnershipStore, TokenRecord};
pub use royalty::{RoyaltyInfo, RoyaltyPolicy, RoyaltyStore};

#[derive(BorshStorageKey)]
#[near]
enum StorageKey {
    Tokens,
    RoyaltyOverrides,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    /// System-wide privileged account, fixed at deployment. Distinct from the
    /// per-token owners recorded in `tokens`.
    pub owner_id: AccountId,
    pub allocator: IdentityAllocator,
    pub tokens: OwnershipStore,
    pub royalties: RoyaltyStore,
}

#[near]
impl Contract {
    /// Deploys the registry. The deployer becomes the registry owner and the
    /// default royalty recipient; `default_royalty_bps` is fixed for the
    /// contract's lifetime.
    #[init]
    #[handle_result]
    pub fn new(default_royalty_bps: u32) -> Result<Self, RegistryError> {
        let owner_id = env::predecessor_account_id();
        let default_policy = RoyaltyPolicy {
            recipient: owner_id.clone(),
            basis_points: default_royalty_bps,
        };
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            owner_id,
            allocator: IdentityAllocator::new(),
            tokens: OwnershipStore::new(StorageKey::Tokens),
            royalties: RoyaltyStore::new(default_policy, StorageKey::RoyaltyOverrides)?,
        })
    }

    /// Mints a new token to the caller. Registry owner only.
    #[handle_result]
    pub fn mint(&mut self, uri: String) -> Result<u64, RegistryError> {
        self.mint_internal(&env::predecessor_account_id(), uri)
    }

    #[handle_result]
    pub fn owner_of(&self, token_id: u64) -> Result<AccountId, RegistryError> {
        self.tokens.owner_of(token_id)
    }

    #[handle_result]
    pub fn token_uri(&self, token_id: u64) -> Result<String, RegistryError> {
        Ok(self.tokens.get(token_id)?.uri.clone())
    }

    /// Overwrites a token's metadata pointer. Registry owner only.
    #[handle_result]
    pub fn set_token_uri(&mut self, token_id: u64, uri: String) -> Result<(), RegistryError> {
        self.set_token_uri_internal(&env::predecessor_account_id(), token_id, uri)
    }

    /// Sets or replaces a token's royalty override. Token owner only.
    #[handle_result]
    pub fn set_token_royalty(
        &mut self,
        token_id: u64,
        recipient: AccountId,
        basis_points: u32,
    ) -> Result<(), RegistryError> {
        self.set_token_royalty_internal(
            &env::predecessor_account_id(),
            token_id,
            recipient,
            basis_points,
        )
    }

    /// Resolves the royalty owed on a sale of `token_id` for `sale_amount`:
    /// the token's override policy if one exists, else the default.
    #[handle_result]
    pub fn royalty_info(
        &self,
        token_id: u64,
        sale_amount: U128,
    ) -> Result<RoyaltyInfo, RegistryError> {
        self.royalty_info_internal(token_id, sale_amount)
    }

    pub fn registry_owner(&self) -> AccountId {
        self.owner_id.clone()
    }

    pub fn default_royalty(&self) -> RoyaltyPolicy {
        self.royalties.default_policy().clone()
    }

    /// Count of tokens ever minted; ids issued so far are `[0, total_minted)`.
    pub fn total_minted(&self) -> u64 {
        self.allocator.issued()
    }
}
