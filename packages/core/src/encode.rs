//! The encode path: typed values → flattened UBER node trees → documents.
//!
//! Content is reflected to a JSON value tree (see
//! [`properties`](crate::properties)) and flattened recursively: scalars
//! become unnamed `value` leaves, object properties become named children,
//! array elements become unnamed children. `null` properties are omitted —
//! the wire never carries `null`.
//!
//! Document assembly puts links first, then content entries, then (for paged
//! collections) the reserved `page` entry.

use serde::Serialize;
use serde_json::Value;

use crate::error::EncodeError;
use crate::link::link_node;
use crate::model::{Collection, Link, PageMetadata, Paged, Resource};
use crate::node::{NodeBody, Scalar, UberDocument, UberNode, PAGE_ENTRY_NAME};
use crate::properties::{self, Properties};

/// Encode a plain value: one named content entry, no links.
pub fn encode_value<T: Serialize>(value: &T) -> Result<UberDocument, EncodeError> {
    Ok(UberDocument::new(vec![content_entry(value)?]))
}

/// Encode a single resource: its links as top-level link entries, followed
/// by one named content entry.
pub fn encode_resource<T: Serialize>(resource: &Resource<T>) -> Result<UberDocument, EncodeError> {
    let mut entries: Vec<UberNode> = resource.links.iter().map(link_node).collect();
    entries.push(content_entry(&resource.content)?);
    Ok(UberDocument::new(entries))
}

/// Encode a collection of bare values. Collection-level links become the
/// document-level link set; elements carry no links of their own.
pub fn encode_collection<T: Serialize>(
    collection: &Collection<T>,
) -> Result<UberDocument, EncodeError> {
    let mut entries: Vec<UberNode> = collection.links.iter().map(link_node).collect();
    for item in &collection.items {
        entries.push(element_entry(item, &[])?);
    }
    Ok(UberDocument::new(entries))
}

/// Encode a collection of link-bearing resources: each element entry carries
/// that element's own links alongside its content.
pub fn encode_resource_collection<T: Serialize>(
    collection: &Collection<Resource<T>>,
) -> Result<UberDocument, EncodeError> {
    let mut entries: Vec<UberNode> = collection.links.iter().map(link_node).collect();
    for resource in &collection.items {
        entries.push(element_entry(&resource.content, &resource.links)?);
    }
    Ok(UberDocument::new(entries))
}

/// Encode a paged collection of bare values: the collection layout plus the
/// reserved `page` entry.
pub fn encode_paged_collection<T: Serialize>(
    paged: &Paged<T>,
) -> Result<UberDocument, EncodeError> {
    let mut entries: Vec<UberNode> = paged.links.iter().map(link_node).collect();
    for item in &paged.items {
        entries.push(element_entry(item, &[])?);
    }
    if let Some(page) = &paged.page {
        entries.push(page_entry(page));
    }
    Ok(UberDocument::new(entries))
}

/// Encode a paged collection of link-bearing resources.
pub fn encode_paged_resource_collection<T: Serialize>(
    paged: &Paged<Resource<T>>,
) -> Result<UberDocument, EncodeError> {
    let mut entries: Vec<UberNode> = paged.links.iter().map(link_node).collect();
    for resource in &paged.items {
        entries.push(element_entry(&resource.content, &resource.links)?);
    }
    if let Some(page) = &paged.page {
        entries.push(page_entry(page));
    }
    Ok(UberDocument::new(entries))
}

// --- flattening --------------------------------------------------------------

/// The named entry node wrapping one resource's flattened content.
fn content_entry<T: Serialize>(content: &T) -> Result<UberNode, EncodeError> {
    let reflected = properties::reflect(content)?;
    let children = flatten_content(&reflected)?;
    Ok(UberNode::composite(Some(type_label::<T>()), children))
}

/// One unnamed collection-element entry: the element's links, then its named
/// content node.
fn element_entry<T: Serialize>(content: &T, links: &[Link]) -> Result<UberNode, EncodeError> {
    let mut children: Vec<UberNode> = links.iter().map(link_node).collect();
    children.push(content_entry(content)?);
    Ok(UberNode::composite(None, children))
}

/// Flatten a resource's content value: a scalar becomes a single unnamed
/// leaf (the wrapped-primitive form), composites become their children.
fn flatten_content(value: &Value) -> Result<Vec<UberNode>, EncodeError> {
    match value {
        Value::Null => Err(EncodeError::NullContent),
        Value::Object(map) => Ok(flatten_object(map)),
        Value::Array(items) => Ok(flatten_array(items)),
        scalar => Ok(flatten_node(None, scalar).into_iter().collect()),
    }
}

/// Flatten one property or array element. Returns `None` for JSON `null`,
/// which has no wire representation.
fn flatten_node(name: Option<String>, value: &Value) -> Option<UberNode> {
    let body = match value {
        Value::Null => return None,
        Value::Bool(b) => NodeBody::Value(Scalar::Bool(*b)),
        Value::Number(n) => NodeBody::Value(Scalar::Number(n.clone())),
        Value::String(s) => NodeBody::Value(Scalar::String(s.clone())),
        Value::Array(items) => NodeBody::Data(flatten_array(items)),
        Value::Object(map) => NodeBody::Data(flatten_object(map)),
    };
    Some(UberNode { name, body })
}

fn flatten_object(map: &Properties) -> Vec<UberNode> {
    map.iter()
        .filter_map(|(name, value)| flatten_node(Some(name.clone()), value))
        .collect()
}

fn flatten_array(items: &[Value]) -> Vec<UberNode> {
    items.iter().filter_map(|v| flatten_node(None, v)).collect()
}

/// The reserved paging entry: the four counters as named scalar children in
/// fixed wire order.
fn page_entry(page: &PageMetadata) -> UberNode {
    UberNode::composite(
        Some(PAGE_ENTRY_NAME.to_string()),
        vec![
            UberNode::property("size", page.size),
            UberNode::property("number", page.number),
            UberNode::property("totalElements", page.total_elements),
            UberNode::property("totalPages", page.total_pages),
        ],
    )
}

/// A wire name for a content entry, derived from the content type's short
/// name with the first letter lowered (`Employee` → `employee`). Decode only
/// requires the name to be non-empty; the label is cosmetic.
fn type_label<T>() -> String {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    let short = base.rsplit("::").next().unwrap_or(base);
    let short = short.trim_start_matches('&');
    let mut chars = short.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => "value".to_string(),
    }
}

// --- tests -------------------------------------------------------------------
