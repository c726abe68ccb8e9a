//! Building blocks shared by the resource handlers.
//!
//! A handler runs decode, convert, persist and respond in that order and
//! stops at the first failing stage with `?`. The helpers here cover every
//! stage except persist, which belongs to the stores.

use crate::api::errors::AppError;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};

/// Outcome of a fallible handler: a complete response or one error envelope
pub type HandlerResult = Result<Response, AppError>;

const APPLICATION_JSON: &str = "application/json";

/// Maps a decoded request onto the domain entity it describes
pub trait IntoDomain: DeserializeOwned {
    type Entity;
    type Error: std::error::Error + Send + Sync + 'static;

    fn into_domain(self) -> Result<Self::Entity, Self::Error>;
}

/// Parses the first JSON value of a request body.
///
/// Only the shape is checked: a `null` body yields the default request and
/// anything after the first value is ignored. An empty body is an error.
pub fn decode<T: DeserializeOwned + Default>(body: &[u8]) -> Result<T, AppError> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<T>>();
    match values.next() {
        Some(value) => value
            .map(Option::unwrap_or_default)
            .map_err(AppError::decode),
        None => Err(AppError::decode(de::Error::custom("EOF"))),
    }
}

/// Field deserializer mapping an explicit `null` to the field's default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

pub fn convert<R: IntoDomain>(request: R) -> Result<R::Entity, AppError> {
    request.into_domain().map_err(AppError::conversion)
}

/// `200 OK` with `value` as the JSON body
pub fn json<T: Serialize + ?Sized>(value: &T) -> HandlerResult {
    let body = serde_json::to_vec(value).map_err(AppError::encode)?;
    Ok(([(header::CONTENT_TYPE, APPLICATION_JSON)], body).into_response())
}

/// `201 Created` pointing at `location`, with `value` as the JSON body
pub fn created<T: Serialize + ?Sized>(location: String, value: &T) -> HandlerResult {
    let body = serde_json::to_vec(value).map_err(AppError::encode)?;
    Ok((
        StatusCode::CREATED,
        [
            (header::CONTENT_TYPE, APPLICATION_JSON.to_string()),
            (header::LOCATION, location),
        ],
        body,
    )
        .into_response())
}

/// `200 OK` tagged as JSON but with no body
pub fn empty_json() -> Response {
    (StatusCode::OK, [(header::CONTENT_TYPE, APPLICATION_JSON)], ()).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::errors::FailureKind;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize)]
    struct Named {
        #[serde(default, deserialize_with = "null_as_default")]
        name: String,
    }

    #[test]
    fn decode_reads_json_objects() {
        let named: Named = decode(br#"{"name":"Alice"}"#).unwrap();
        assert_eq!(named.name, "Alice");
    }

    #[test]
    fn decode_checks_structure_only() {
        let bodies: [&[u8]; 6] = [
            b"{}",
            br#"{"title":"x"}"#,
            b"null",
            br#"{"name":null}"#,
            b"  {} ",
            br#"{"name":""} trailing"#,
        ];
        for body in bodies {
            let named: Named = decode(body).unwrap();
            assert_eq!(named.name, "", "body {:?}", body);
        }

        let named: Named = decode(br#"{"name":"Alice"}{"name":"Bob"}"#).unwrap();
        assert_eq!(named.name, "Alice");
    }

    #[test]
    fn decode_failures_are_decode_errors() {
        let bodies: [&[u8]; 6] = [b"", b"   ", b"{", br#""Alice""#, br#"{"name":7}"#, b"nope"];
        for body in bodies {
            let err = decode::<Named>(body).unwrap_err();
            assert_eq!(err.kind, FailureKind::Decode, "body {:?}", body);
            assert!(err.message.starts_with("decode error: "));
        }
        assert_eq!(decode::<Named>(b"").unwrap_err().message, "decode error: EOF");
    }

    #[test]
    fn created_sets_location_and_status() {
        let response = created("/members/4".to_string(), &["x"]).unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::LOCATION], "/members/4");
        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
    }

    #[test]
    fn empty_json_has_default_status() {
        let response = empty_json();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], APPLICATION_JSON);
    }
}
