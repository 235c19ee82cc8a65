use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum_extra::extract::CookieJar;

use crate::router::AppState;

/// Session credential of the caller, if one was sent.
///
/// A bearer `Authorization` header wins over the session cookie. Missing or malformed
/// credentials are not rejected here, the issuance flow reports them as unauthenticated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionToken(pub Option<String>);

impl FromRequestParts<AppState> for SessionToken {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if let Some(token) = bearer_token(parts) {
            return Ok(Self(Some(token)));
        }

        let token = CookieJar::from_headers(&parts.headers)
            .get(&state.session_cookie_name)
            .map(|cookie| cookie.value().to_owned())
            .filter(|value| !value.is_empty());

        Ok(Self(token))
    }
}

fn bearer_token(parts: &Parts) -> Option<String> {
    let auth_header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;

    let (auth_type, token) = auth_header.split_once(' ')?;
    let token = token.trim();

    (auth_type.eq_ignore_ascii_case("Bearer") && !token.is_empty()).then(|| token.to_owned())
}
