use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{AccountId, IntoStorageKey, near};

use crate::constants::{BASIS_POINTS, MAX_ROYALTY_BPS};
use crate::errors::RegistryError;

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyPolicy {
    pub recipient: AccountId,
    pub basis_points: u32,
}

impl RoyaltyPolicy {
    pub(crate) fn check(&self) -> Result<(), RegistryError> {
        if self.basis_points > MAX_ROYALTY_BPS {
            return Err(RegistryError::InvalidRoyalty {
                basis_points: self.basis_points,
            });
        }
        Ok(())
    }

    /// Floor of `sale_amount * basis_points / 10_000`.
    fn amount_owed(&self, sale_amount: u128) -> u128 {
        // Split the product so it cannot overflow u128; the result itself
        // always fits because basis_points <= 10_000.
        let bps = self.basis_points as u128;
        let denom = BASIS_POINTS as u128;
        (sale_amount / denom) * bps + (sale_amount % denom) * bps / denom
    }
}

/// Royalty resolution view: who is owed, and how much.
#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq)]
pub struct RoyaltyInfo {
    pub recipient: AccountId,
    pub amount: U128,
}

/// One default policy, fixed at construction, plus per-token overrides. A
/// token's effective policy is its override if present, else the default.
#[near(serializers = [borsh])]
pub struct RoyaltyStore {
    default_policy: RoyaltyPolicy,
    overrides: LookupMap<u64, RoyaltyPolicy>,
}

impl RoyaltyStore {
    pub fn new<S>(default_policy: RoyaltyPolicy, prefix: S) -> Result<Self, RegistryError>
    where
        S: IntoStorageKey,
    {
        default_policy.check()?;
        Ok(Self {
            default_policy,
            overrides: LookupMap::new(prefix),
        })
    }

    pub fn default_policy(&self) -> &RoyaltyPolicy {
        &self.default_policy
    }

    /// Sets or replaces the override for `token_id`. Existence of the id is
    /// the caller's concern; the registry checks it first.
    pub fn set_override(
        &mut self,
        token_id: u64,
        policy: RoyaltyPolicy,
    ) -> Result<(), RegistryError> {
        policy.check()?;
        self.overrides.insert(token_id, policy);
        Ok(())
    }

    pub fn effective_policy(&self, token_id: u64) -> &RoyaltyPolicy {
        self.overrides
            .get(&token_id)
            .unwrap_or(&self.default_policy)
    }

    pub fn resolve(&self, token_id: u64, sale_amount: u128) -> RoyaltyInfo {
        let policy = self.effective_policy(token_id);
        RoyaltyInfo {
            recipient: policy.recipient.clone(),
            amount: U128(policy.amount_owed(sale_amount)),
        }
    }
}
