use crate::*;
use near_sdk::log;

// Every operation runs authorize -> validate -> mutate -> emit; all checks
// precede the first write, so a rejection leaves the state untouched.
impl Contract {
    pub(crate) fn mint_internal(
        &mut self,
        actor_id: &AccountId,
        uri: String,
    ) -> Result<u64, RegistryError> {
        self.check_registry_owner(actor_id)?;

        let token_id = self.allocator.next();
        self.tokens.create(token_id, actor_id.clone(), uri.clone())?;

        log!("Minted token {} to {}", token_id, actor_id);
        RegistryEvent::TokenMinted {
            token_id,
            owner_id: actor_id.clone(),
            uri,
        }
        .emit();
        Ok(token_id)
    }

    pub(crate) fn set_token_uri_internal(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        uri: String,
    ) -> Result<(), RegistryError> {
        // Registry-owner gate runs before the existence check on this path.
        self.check_registry_owner(actor_id)?;
        self.tokens.set_uri(token_id, uri.clone())?;

        log!("Updated uri of token {}", token_id);
        RegistryEvent::TokenUriUpdated { token_id, uri }.emit();
        Ok(())
    }

    pub(crate) fn set_token_royalty_internal(
        &mut self,
        actor_id: &AccountId,
        token_id: u64,
        recipient: AccountId,
        basis_points: u32,
    ) -> Result<(), RegistryError> {
        // Existence before authorization: a nonexistent token is NotFound
        // even for an unauthorized caller.
        let token_owner = self.tokens.owner_of(token_id)?;
        crate::guards::check_token_owner(actor_id, &token_owner)?;

        self.royalties.set_override(
            token_id,
            RoyaltyPolicy {
                recipient: recipient.clone(),
                basis_points,
            },
        )?;

        log!("Set royalty of token {} to {} bps", token_id, basis_points);
        RegistryEvent::RoyaltySet {
            token_id,
            recipient,
            basis_points,
        }
        .emit();
        Ok(())
    }

    pub(crate) fn royalty_info_internal(
        &self,
        token_id: u64,
        sale_amount: U128,
    ) -> Result<RoyaltyInfo, RegistryError> {
        if !self.tokens.contains(token_id) {
            return Err(RegistryError::NotFound { token_id });
        }
        Ok(self.royalties.resolve(token_id, sale_amount.0))
    }
}
