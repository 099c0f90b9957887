//! Static access guard
//!
//! Gates static-asset GETs behind one shared Basic credential. The API
//! allow-list (`/health`, `/analyze`, `/edit`) never reaches this filter;
//! those routes are matched earlier in the tree. Non-GET requests to
//! unmatched paths also bypass the guard — the method filter runs first —
//! and fall through to a plain 404/405 with no challenge.

use crate::reject::Unauthorized;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use scenecraft_core::AccessCredential;
use warp::{Filter, Rejection};

/// Filter passing only requests that present the shared credential
///
/// Rejects with [`Unauthorized`], which the recovery layer turns into a
/// 401 plus a `WWW-Authenticate` challenge.
pub(crate) fn require_credential(
    credential: AccessCredential,
) -> impl Filter<Extract = (), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and_then(move |header: Option<String>| {
            let credential = credential.clone();
            async move {
                match header.as_deref().and_then(parse_basic) {
                    Some((user, pass)) if credential.verify(&user, &pass) => Ok(()),
                    _ => {
                        tracing::debug!("static asset request refused");
                        Err(warp::reject::custom(Unauthorized))
                    }
                }
            }
        })
        .untuple_one()
}

/// Decode a `Basic` authorization header into (username, password)
fn parse_basic(header: &str) -> Option<(String, String)> {
    let encoded = header
        .strip_prefix("Basic ")
        .or_else(|| header.strip_prefix("basic "))?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let text = String::from_utf8(decoded).ok()?;
    let (user, pass) = text.split_once(':')?;
    Some((user.to_owned(), pass.to_owned()))
}
