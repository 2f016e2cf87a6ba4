use poem::{Request, RequestBody, Result};
use poem_openapi::impl_apirequest_for_payload;
use poem_openapi::payload::{Json, ParsePayload, Payload};
use poem_openapi::registry::{MetaSchemaRef, Registry};
use poem_openapi::types::Type;
use serde_json::Value;
use crate::types::dto::Item;

/// JSON request body documented as an [`Item`]
///
/// The body is kept as untyped JSON so [`ItemValidator`](crate::services::ItemValidator)
/// can report every offending field, while the generated document still
/// carries the `Item` schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemBody(pub Value);

impl Payload for ItemBody {
    const CONTENT_TYPE: &'static str = <Json<Value> as Payload>::CONTENT_TYPE;

    fn check_content_type(content_type: &str) -> bool {
        <Json<Value> as Payload>::check_content_type(content_type)
    }

    fn schema_ref() -> MetaSchemaRef {
        Item::schema_ref()
    }

    fn register(registry: &mut Registry) {
        Item::register(registry);
    }
}

impl ParsePayload for ItemBody {
    const IS_REQUIRED: bool = true;

    async fn from_request(request: &Request, body: &mut RequestBody) -> Result<Self> {
        let Json(value) = <Json<Value> as ParsePayload>::from_request(request, body).await?;
        Ok(Self(value))
    }
}

impl_apirequest_for_payload!(ItemBody);
