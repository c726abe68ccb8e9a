use axum::async_trait;
use axum::extract::{FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use tracing::debug;

/// An `{id}` path segment made only of ASCII digits.
///
/// Anything else is answered with `404 Not Found` before the handler runs,
/// the same as a path no route matches. The id is kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericId(pub String);

fn is_numeric(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[async_trait]
impl<S> FromRequestParts<S> for NumericId
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| StatusCode::NOT_FOUND)?;

        if is_numeric(&id) {
            Ok(NumericId(id))
        } else {
            debug!("Unrouted non-numeric id {:?} on {}", id, parts.uri.path());
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Middleware turning a non-numeric `{id}` into `404 Not Found` for every
/// method, so such paths never reach method dispatch.
pub async fn require_numeric_id(_id: NumericId, request: Request, next: Next) -> Response {
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_ascii_digits() {
        for segment in ["0", "2", "0042", "18446744073709551616"] {
            assert!(is_numeric(segment), "{segment}");
        }
        for segment in ["", "abc", "1a", "-1", "+1", "1.0", " 1", "١"] {
            assert!(!is_numeric(segment), "{segment}");
        }
    }
}
