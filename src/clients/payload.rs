//! Request payloads with asynchronously supplied fields.
//!
//! A request body may contain values that are not yet available when the
//! call is made — typically identifiers returned by an earlier request that
//! is still in flight. [`Payload`] models this with an explicit tagged field
//! type: each top-level object key or array element is either a materialized
//! JSON value or a [`PendingValue`] future. Before a request is dispatched,
//! [`Payload::resolve`] awaits every pending field in place, so no request
//! body is ever sent with an unresolved placeholder.
//!
//! Only top-level fields are inspected: a pending value nested deeper inside
//! a JSON structure is not representable here, matching the original
//! client's documented top-level-only resolution.
//!
//! # Example
//!
//! ```rust
//! use magento2_api::Payload;
//! use serde_json::json;
//!
//! # tokio_test::block_on(async {
//! let payload = Payload::object()
//!     .insert("a", 1)
//!     .insert_pending("b", async { json!(2) });
//!
//! assert_eq!(payload.resolve().await, Some(json!({"a": 1, "b": 2})));
//! # });
//! ```

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use serde_json::Value;

/// A boxed future producing a JSON value for a payload field.
pub type PendingValue = Pin<Box<dyn Future<Output = Value> + Send + 'static>>;

/// A single top-level payload field: either a materialized JSON value or a
/// pending asynchronous one.
pub enum PayloadField {
    /// A value that is already available.
    Ready(Value),
    /// A value still being produced; awaited at resolve time.
    Pending(PendingValue),
}

impl PayloadField {
    /// Wraps an available JSON value.
    pub fn ready(value: impl Into<Value>) -> Self {
        Self::Ready(value.into())
    }

    /// Wraps a future that will produce the field's value.
    pub fn pending<F>(future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        Self::Pending(Box::pin(future))
    }
}

impl fmt::Debug for PayloadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ready(value) => f.debug_tuple("Ready").field(value).finish(),
            Self::Pending(_) => f.write_str("Pending(..)"),
        }
    }
}

/// A request body whose top-level fields may still be pending.
///
/// Use [`Payload::object`] or [`Payload::array`] with the chained
/// `insert*`/`push*` methods to assemble a body, or convert a plain
/// [`serde_json::Value`] with `Payload::from` when nothing is pending.
#[derive(Debug)]
pub enum Payload {
    /// No body at all (GET/DELETE requests).
    Empty,
    /// A fully materialized body with no pending fields.
    Value(Value),
    /// A JSON object whose values may individually be pending.
    Object(Vec<(String, PayloadField)>),
    /// A JSON array whose elements may individually be pending.
    Array(Vec<PayloadField>),
}

impl Payload {
    /// Creates an empty payload (no request body).
    #[must_use]
    pub const fn empty() -> Self {
        Self::Empty
    }

    /// Creates an empty object payload to chain `insert*` calls onto.
    #[must_use]
    pub const fn object() -> Self {
        Self::Object(Vec::new())
    }

    /// Creates an empty array payload to chain `push*` calls onto.
    #[must_use]
    pub const fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Adds a materialized field to an object payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not an object.
    #[must_use]
    pub fn insert(self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert_field(key, PayloadField::ready(value))
    }

    /// Adds a pending field to an object payload; the future is awaited when
    /// the payload is resolved.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not an object.
    #[must_use]
    pub fn insert_pending<F>(self, key: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        self.insert_field(key, PayloadField::pending(future))
    }

    fn insert_field(self, key: impl Into<String>, field: PayloadField) -> Self {
        match self {
            Self::Object(mut fields) => {
                fields.push((key.into(), field));
                Self::Object(fields)
            }
            other => panic!("cannot insert a keyed field into {other:?}"),
        }
    }

    /// Appends a materialized element to an array payload.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not an array.
    #[must_use]
    pub fn push(self, value: impl Into<Value>) -> Self {
        self.push_inner(PayloadField::ready(value))
    }

    /// Appends a pending element to an array payload; the future is awaited
    /// when the payload is resolved.
    ///
    /// # Panics
    ///
    /// Panics if the payload is not an array.
    #[must_use]
    pub fn push_pending<F>(self, future: F) -> Self
    where
        F: Future<Output = Value> + Send + 'static,
    {
        self.push_inner(PayloadField::pending(future))
    }

    fn push_inner(self, field: PayloadField) -> Self {
        match self {
            Self::Array(mut fields) => {
                fields.push(field);
                Self::Array(fields)
            }
            other => panic!("cannot push an element into {other:?}"),
        }
    }

    /// Awaits every top-level pending field and returns the materialized
    /// request body, or `None` for an empty payload.
    ///
    /// Fields resolve in place: an object keeps its keys, an array keeps its
    /// element positions. Nested structures are not inspected.
    pub async fn resolve(self) -> Option<Value> {
        match self {
            Self::Empty => None,
            Self::Value(value) => Some(value),
            Self::Object(fields) => {
                let mut awaited = 0usize;
                let mut map = serde_json::Map::with_capacity(fields.len());
                for (key, field) in fields {
                    let value = match field {
                        PayloadField::Ready(value) => value,
                        PayloadField::Pending(future) => {
                            awaited += 1;
                            future.await
                        }
                    };
                    map.insert(key, value);
                }
                if awaited > 0 {
                    tracing::debug!(awaited, "resolved pending payload fields");
                }
                Some(Value::Object(map))
            }
            Self::Array(fields) => {
                let mut awaited = 0usize;
                let mut elements = Vec::with_capacity(fields.len());
                for field in fields {
                    let value = match field {
                        PayloadField::Ready(value) => value,
                        PayloadField::Pending(future) => {
                            awaited += 1;
                            future.await
                        }
                    };
                    elements.push(value);
                }
                if awaited > 0 {
                    tracing::debug!(awaited, "resolved pending payload fields");
                }
                Some(Value::Array(elements))
            }
        }
    }
}

impl From<Value> for Payload {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<()> for Payload {
    fn from((): ()) -> Self {
        Self::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_empty_payload_resolves_to_none() {
        assert_eq!(Payload::empty().resolve().await, None);
    }

    #[tokio::test]
    async fn test_value_payload_resolves_as_is() {
        let payload = Payload::from(json!({"sku": "test"}));
        assert_eq!(payload.resolve().await, Some(json!({"sku": "test"})));
    }

    #[tokio::test]
    async fn test_object_with_pending_field_resolves_in_place() {
        let payload = Payload::object()
            .insert("a", 1)
            .insert_pending("b", async { json!(2) });

        assert_eq!(payload.resolve().await, Some(json!({"a": 1, "b": 2})));
    }

    #[tokio::test]
    async fn test_object_with_only_ready_fields() {
        let payload = Payload::object().insert("a", 1).insert("b", "two");
        assert_eq!(payload.resolve().await, Some(json!({"a": 1, "b": "two"})));
    }

    #[tokio::test]
    async fn test_array_with_pending_elements_keeps_positions() {
        let payload = Payload::array()
            .push(1)
            .push_pending(async { json!(2) })
            .push(3);

        assert_eq!(payload.resolve().await, Some(json!([1, 2, 3])));
    }

    #[tokio::test]
    async fn test_multiple_pending_fields_all_resolve() {
        let payload = Payload::object()
            .insert_pending("first", async { json!("one") })
            .insert_pending("second", async { json!("two") });

        assert_eq!(
            payload.resolve().await,
            Some(json!({"first": "one", "second": "two"}))
        );
    }

    #[test]
    #[should_panic(expected = "cannot insert a keyed field")]
    fn test_insert_into_array_panics() {
        let _ = Payload::array().insert("key", 1);
    }

    #[test]
    fn test_payload_field_debug_masks_future() {
        let field = PayloadField::pending(async { json!(1) });
        assert_eq!(format!("{field:?}"), "Pending(..)");
    }
}
