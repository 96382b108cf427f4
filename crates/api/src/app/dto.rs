use core::fmt;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Serialize};

use vendorhub_infra::{HandlerResult, ReplyStatus};
use vendorhub_vendors::Vendor;

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------

/// A vendor payload that must be a JSON object.
///
/// The derived `Vendor` deserializer also takes positional arrays; request
/// bodies only accept the keyed form.
#[derive(Debug)]
pub struct VendorBody(pub Vendor);

impl VendorBody {
    pub fn into_inner(self) -> Vendor {
        self.0
    }
}

struct VendorObjectVisitor;

impl<'de> Visitor<'de> for VendorObjectVisitor {
    type Value = Vendor;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a vendor object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Vendor, A::Error> {
        Vendor::deserialize(MapAccessDeserializer::new(map))
    }
}

impl<'de> Deserialize<'de> for VendorBody {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(VendorObjectVisitor).map(VendorBody)
    }
}

/// Body of `POST /api/v1/vendors`: one vendor object or an array of vendor objects.
#[derive(Debug)]
pub enum CreateVendorsRequest {
    Many(Vec<Vendor>),
    One(Vendor),
}

struct CreateVendorsVisitor;

impl<'de> Visitor<'de> for CreateVendorsVisitor {
    type Value = CreateVendorsRequest;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a vendor object or an array of vendor objects")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
        VendorObjectVisitor.visit_map(map).map(CreateVendorsRequest::One)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut vendors = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(VendorBody(vendor)) = seq.next_element()? {
            vendors.push(vendor);
        }
        Ok(CreateVendorsRequest::Many(vendors))
    }
}

impl<'de> Deserialize<'de> for CreateVendorsRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CreateVendorsVisitor)
    }
}

// -------------------------
// Response mapping
// -------------------------

pub fn status_code(status: ReplyStatus) -> StatusCode {
    match status {
        ReplyStatus::Ok => StatusCode::OK,
        ReplyStatus::Created => StatusCode::CREATED,
    }
}

/// Map a handler result onto an HTTP response (JSON body on success).
pub fn into_response<T: Serialize>(result: HandlerResult<T>) -> axum::response::Response {
    match result {
        Ok(reply) => (status_code(reply.status), Json(reply.body)).into_response(),
        Err(e) => errors::handler_error_to_response(e),
    }
}
