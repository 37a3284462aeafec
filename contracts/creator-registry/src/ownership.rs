use near_sdk::store::IterableMap;
use near_sdk::{AccountId, IntoStorageKey, near};

use crate::errors::RegistryError;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct TokenRecord {
    pub owner_id: AccountId,
    pub uri: String,
}

/// Keyed record store for minted tokens: exactly one `(owner_id, uri)` record
/// per id, and no record is ever removed.
#[near(serializers = [borsh])]
pub struct OwnershipStore {
    tokens: IterableMap<u64, TokenRecord>,
}

impl OwnershipStore {
    pub fn new<S>(prefix: S) -> Self
    where
        S: IntoStorageKey,
    {
        Self {
            tokens: IterableMap::new(prefix),
        }
    }

    /// Records a freshly minted token. `DuplicateId` guards the allocator
    /// invariant and is unreachable through the public interface.
    pub fn create(
        &mut self,
        token_id: u64,
        owner_id: AccountId,
        uri: String,
    ) -> Result<(), RegistryError> {
        if self.tokens.contains_key(&token_id) {
            return Err(RegistryError::DuplicateId { token_id });
        }
        self.tokens.insert(token_id, TokenRecord { owner_id, uri });
        Ok(())
    }

    pub fn get(&self, token_id: u64) -> Result<&TokenRecord, RegistryError> {
        self.tokens
            .get(&token_id)
            .ok_or(RegistryError::NotFound { token_id })
    }

    pub fn owner_of(&self, token_id: u64) -> Result<AccountId, RegistryError> {
        Ok(self.get(token_id)?.owner_id.clone())
    }

    /// Overwrites the uri, preserving the owner.
    pub fn set_uri(&mut self, token_id: u64, uri: String) -> Result<(), RegistryError> {
        let record = self
            .tokens
            .get_mut(&token_id)
            .ok_or(RegistryError::NotFound { token_id })?;
        record.uri = uri;
        Ok(())
    }

    pub fn contains(&self, token_id: u64) -> bool {
        self.tokens.contains_key(&token_id)
    }

    pub fn len(&self) -> u32 {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
