/// Extract the token from an `Authorization: <scheme> <token>` header value.
///
/// The scheme word is not checked. Returns `None` when there is no token part.
pub fn token_from_authorization(value: &str) -> Option<&str> {
    let mut parts = value.split_whitespace();
    parts.next()?;
    parts.next()
}
