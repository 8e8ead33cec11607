use actix_web::FromRequest;
use actix_web::HttpRequest;
use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use std::future::Ready;

/// Raw `authorization` header of a request, if any.
/// Resolution into an account happens in the services, not here.
#[derive(Debug, Clone, Default)]
pub struct Credential(pub Option<String>);

impl Credential {
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

impl FromRequest for Credential {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        std::future::ready(Ok(Self(
            req.headers()
                .get(AUTHORIZATION)
                .and_then(|h| h.to_str().ok())
                .map(|s| s.to_owned()),
        )))
    }
}
