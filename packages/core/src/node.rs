//! The UBER `data` node model and document envelope.
//!
//! The wire format represents everything — scalars, objects, collections,
//! links, paging metadata — as one recursive JSON object with the optional
//! keys `name`, `value`, `rel`, `url`, `action`, and `data`. In memory a node
//! is a [`name`](UberNode::name) plus exactly one [`NodeBody`] role, so the
//! "a node is a value *or* a link *or* a composite" contract is enforced by
//! construction rather than by convention. Conversion from the wire form is
//! the single place that contract is checked; an object claiming more than
//! one role is rejected as a malformed document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{DecodeError, EncodeError};
use crate::link::{node_links, UberAction};
use crate::model::Link;

/// The version literal written into every encoded document.
pub const UBER_VERSION: &str = "1.0";

/// The reserved name of the paging-metadata entry. Name equality is the sole
/// discriminator between the `page` entry and resource entries, so a resource
/// entry must not use this name.
pub const PAGE_ENTRY_NAME: &str = "page";

/// A leaf scalar: the only values an UBER `value` key may carry.
///
/// Numbers are kept as [`serde_json::Number`] without narrowing; consumers
/// that need an integer (e.g. paging fields) apply their own strict
/// coercion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(serde_json::Number),
    String(String),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{:?}", s),
        }
    }
}

impl From<bool> for Scalar {
    fn from(b: bool) -> Self {
        Scalar::Bool(b)
    }
}

impl From<u64> for Scalar {
    fn from(n: u64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::String(s.to_string())
    }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self {
        Scalar::String(s)
    }
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        match s {
            Scalar::Bool(b) => Value::Bool(b),
            Scalar::Number(n) => Value::Number(n),
            Scalar::String(s) => Value::String(s),
        }
    }
}

/// The role a node plays — exactly one of the three.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    /// A leaf carrying a scalar `value`.
    Value(Scalar),
    /// A hyperlink descriptor: `rel` (non-empty) together with `url`, plus an
    /// optional write affordance.
    Link {
        rel: Vec<String>,
        url: String,
        action: Option<UberAction>,
    },
    /// A composite with ordered children. An empty sequence stands for "no
    /// content" and serializes with the `data` key absent.
    Data(Vec<UberNode>),
}

/// One UBER `data` node: an optional name and a body role.
#[derive(Debug, Clone, PartialEq)]
pub struct UberNode {
    /// Identifier of this node within its parent. Absent for
    /// array-positioned nodes such as scalar wrappers and collection
    /// members.
    pub name: Option<String>,
    pub body: NodeBody,
}

impl UberNode {
    /// An unnamed scalar leaf (the wrapped-primitive form).
    pub fn value(value: impl Into<Scalar>) -> Self {
        Self {
            name: None,
            body: NodeBody::Value(value.into()),
        }
    }

    /// A named scalar leaf (one object property).
    pub fn property(name: impl Into<String>, value: impl Into<Scalar>) -> Self {
        Self {
            name: Some(name.into()),
            body: NodeBody::Value(value.into()),
        }
    }

    /// A composite node with the given children.
    pub fn composite(name: Option<String>, children: Vec<UberNode>) -> Self {
        Self {
            name,
            body: NodeBody::Data(children),
        }
    }

    /// Whether this node is a hyperlink descriptor.
    pub fn is_link(&self) -> bool {
        matches!(self.body, NodeBody::Link { .. })
    }
}

/// The envelope body: the version literal and the ordered top-level entry
/// list.
///
/// Document-level navigation links are not a separate field — they are the
/// link-role entries of `data`, surfaced by [`Uber::links`].
#[derive(Debug, Clone, PartialEq)]
pub struct Uber {
    pub version: String,
    pub data: Vec<UberNode>,
}

impl Uber {
    /// An envelope with `version` set to [`UBER_VERSION`].
    pub fn new(data: Vec<UberNode>) -> Self {
        Self {
            version: UBER_VERSION.to_string(),
            data,
        }
    }

    /// The document-level link set: every relation of every top-level
    /// link-role entry, in entry order.
    pub fn links(&self) -> Vec<Link> {
        self.data
            .iter()
            .filter(|n| n.is_link())
            .flat_map(node_links)
            .collect()
    }
}

/// A complete document: one [`Uber`] under the fixed root key `uber`.
#[derive(Debug, Clone, PartialEq)]
pub struct UberDocument {
    pub uber: Uber,
}

impl UberDocument {
    /// A document wrapping the given top-level entries, versioned
    /// [`UBER_VERSION`].
    pub fn new(data: Vec<UberNode>) -> Self {
        Self {
            uber: Uber::new(data),
        }
    }

    /// Parse a document from its JSON text.
    ///
    /// Fails with [`DecodeError::Malformed`] on unparseable JSON or any node
    /// violating the one-role contract, and with
    /// [`DecodeError::UnknownAction`] on an unrecognized action verb.
    pub fn from_json(text: &str) -> Result<Self, DecodeError> {
        let raw: RawDocument =
            serde_json::from_str(text).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        let data = raw
            .uber
            .data
            .into_iter()
            .map(node_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            uber: Uber {
                version: raw.uber.version,
                data,
            },
        })
    }

    /// Render the document as compact JSON text.
    ///
    /// Keys that do not apply to a node are absent from the output; `null` is
    /// never emitted.
    pub fn to_json_string(&self) -> Result<String, EncodeError> {
        serde_json::to_string(&self.to_raw()).map_err(|e| EncodeError::Serialize(e.to_string()))
    }

    /// Render the document as pretty-printed JSON text.
    pub fn to_json_string_pretty(&self) -> Result<String, EncodeError> {
        serde_json::to_string_pretty(&self.to_raw())
            .map_err(|e| EncodeError::Serialize(e.to_string()))
    }

    fn to_raw(&self) -> RawDocument {
        RawDocument {
            uber: RawUber {
                version: self.uber.version.clone(),
                data: self.uber.data.iter().map(node_to_raw).collect(),
            },
        }
    }
}

// --- wire representation -----------------------------------------------------

/// The literal wire shape of a node: every key optional. Conversion to
/// [`UberNode`] enforces the one-role contract.
#[derive(Debug, Default, Serialize, Deserialize)]
struct RawNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Scalar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rel: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Vec<RawNode>>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawUber {
    #[serde(default = "default_version")]
    version: String,
    #[serde(default)]
    data: Vec<RawNode>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawDocument {
    uber: RawUber,
}

fn default_version() -> String {
    UBER_VERSION.to_string()
}

fn node_from_raw(raw: RawNode) -> Result<UberNode, DecodeError> {
    let has_value = raw.value.is_some();
    let has_link = raw.rel.is_some() || raw.url.is_some();
    let has_data = raw.data.is_some();

    if (has_value && has_link) || (has_value && has_data) || (has_link && has_data) {
        return Err(DecodeError::malformed(
            "a node must carry only one of `value`, `rel`/`url`, or `data`",
        ));
    }
    if raw.action.is_some() && raw.rel.is_none() {
        return Err(DecodeError::malformed("`action` requires `rel`"));
    }

    let body = if let Some(value) = raw.value {
        NodeBody::Value(value)
    } else if has_link {
        let rel = raw
            .rel
            .filter(|r| !r.is_empty())
            .ok_or_else(|| DecodeError::malformed("a link node requires a non-empty `rel`"))?;
        let url = raw
            .url
            .ok_or_else(|| DecodeError::malformed("a link node requires `url`"))?;
        let action = raw.action.as_deref().map(str::parse).transpose()?;
        NodeBody::Link { rel, url, action }
    } else {
        let children = raw
            .data
            .unwrap_or_default()
            .into_iter()
            .map(node_from_raw)
            .collect::<Result<Vec<_>, _>>()?;
        NodeBody::Data(children)
    };

    Ok(UberNode {
        name: raw.name,
        body,
    })
}

fn node_to_raw(node: &UberNode) -> RawNode {
    let mut raw = RawNode {
        name: node.name.clone(),
        ..RawNode::default()
    };
    match &node.body {
        NodeBody::Value(value) => raw.value = Some(value.clone()),
        NodeBody::Link { rel, url, action } => {
            raw.rel = Some(rel.clone());
            raw.url = Some(url.clone());
            raw.action = action.as_ref().map(|a| a.to_string());
        }
        NodeBody::Data(children) => {
            if !children.is_empty() {
                raw.data = Some(children.iter().map(node_to_raw).collect());
            }
        }
    }
    raw
}

// --- tests -------------------------------------------------------------------
