use crate::*;

/// Token-owner gate: royalty configuration is scoped to the token's current
/// owner, never to the registry owner.
pub(crate) fn check_token_owner(
    actor_id: &AccountId,
    token_owner: &AccountId,
) -> Result<(), RegistryError> {
    if actor_id != token_owner {
        return Err(RegistryError::AccessDenied {
            account_id: actor_id.clone(),
        });
    }
    Ok(())
}

impl Contract {
    /// Registry-owner gate: minting and forced uri updates.
    pub(crate) fn check_registry_owner(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.owner_id {
            return Err(RegistryError::AccessDenied {
                account_id: actor_id.clone(),
            });
        }
        Ok(())
    }
}
