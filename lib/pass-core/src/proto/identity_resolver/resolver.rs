use std::sync::Arc;

use shared_types::UserId;

use super::{IdentityError, IdentityResolver};
use crate::model::profile::Profile;
use crate::provider::session::SessionValidator;
use crate::repository::user_repository::UserRepository;

pub struct SessionIdentityResolver {
    session_validator: Arc<dyn SessionValidator>,
    user_repository: Arc<dyn UserRepository>,
}

impl SessionIdentityResolver {
    pub fn new(
        session_validator: Arc<dyn SessionValidator>,
        user_repository: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            session_validator,
            user_repository,
        }
    }
}

#[async_trait::async_trait]
impl IdentityResolver for SessionIdentityResolver {
    async fn resolve(&self, session_token: Option<String>) -> Result<Profile, IdentityError> {
        let token = session_token
            .filter(|token| !token.is_empty())
            .ok_or_else(|| IdentityError::Unauthenticated("missing session token".to_owned()))?;

        let claims = self
            .session_validator
            .validate(&token)
            .map_err(|err| IdentityError::Unauthenticated(err.to_string()))?;

        let user_id: UserId = claims
            .sub
            .filter(|sub| !sub.is_empty())
            .ok_or_else(|| {
                IdentityError::Unauthenticated("session token without subject".to_owned())
            })?
            .into();

        let user = self
            .user_repository
            .get_user(&user_id)
            .await?
            .ok_or(IdentityError::ProfileNotFound(user_id))?;

        Ok(Profile {
            email: claims
                .email
                .filter(|email| !email.is_empty())
                .unwrap_or(user.email),
            id: user.id,
            display_name: user.name,
            role: user.role,
        })
    }
}
