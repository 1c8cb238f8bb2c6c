use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use spinwheel_shared::constants::SESSION_COOKIE;
use uuid::Uuid;

/// Session id from the request cookies, issuing a fresh one when absent.
pub fn ensure_session(jar: CookieJar) -> (CookieJar, String) {
    if let Some(existing) = jar.get(SESSION_COOKIE) {
        let id = existing.value().to_string();
        return (jar, id);
    }

    let id = Uuid::new_v4().to_string();
    let cookie = Cookie::build((SESSION_COOKIE, id.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), id)
}
