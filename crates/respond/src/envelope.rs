//! Response envelope shapes.
//!
//! The envelope is the de facto wire contract this crate guarantees to
//! produce: transport adapters may rely on its field names and semantics
//! being stable. Field spelling on the wire follows the original contract
//! (`serviceName`, `blStack`, lowercase `layer`).

use serde::{Deserialize, Serialize};

/// Architectural tier issuing a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Service,
    Controller,
}

impl core::fmt::Display for Layer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Layer::Service => f.write_str("service"),
            Layer::Controller => f.write_str("controller"),
        }
    }
}

/// One trace entry: a scoped business method that recognized the requested
/// code, paired with the code's default-language message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlStackEntry {
    pub method: String,
    pub message: String,
}

/// Structured success/failure response returned by every builder call.
///
/// `bl_stack` is diagnostic, not a validity gate: it lists, in scope order,
/// the methods whose catalog entry contains `code`. A code recognized by none
/// of the scoped methods yields an empty stack while `code` is still echoed
/// verbatim.
///
/// `data` is `None` when the caller supplied nothing and is then omitted from
/// the serialized form entirely; it is never coerced to a default value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<D = ()> {
    pub success: bool,
    pub service_name: String,
    pub layer: Layer,
    pub code: String,
    pub bl_stack: Vec<BlStackEntry>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<D>,
}

impl<D> ResponseEnvelope<D> {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// The methods represented in the trace, in scope order.
    pub fn traced_methods(&self) -> impl Iterator<Item = &str> {
        self.bl_stack.iter().map(|entry| entry.method.as_str())
    }
}
