//! The decode path: UBER documents → folded value trees → typed results.
//!
//! A one-shot recursive descent over the parsed node tree. Top-level entries
//! partition into document links (link-role entries), the reserved `page`
//! entry, and resource entries; each resource entry separates into its link
//! children and exactly one content node, which folds back into a name→value
//! mapping (or a wrapped primitive) for construction via
//! [`properties`](crate::properties).
//!
//! Whether collection elements stay wrapped with their own links or unwrap to
//! bare values is decided by the entry point the caller picks — the
//! declared target type is the shape descriptor.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::DecodeError;
use crate::link::node_links;
use crate::model::{Collection, Link, PageMetadata, Paged, Resource};
use crate::node::{NodeBody, Scalar, Uber, UberDocument, UberNode, PAGE_ENTRY_NAME};
use crate::properties::{from_value, Properties};

/// Decode a plain value from the first named content entry.
pub fn decode_value<T: DeserializeOwned>(doc: &UberDocument) -> Result<T, DecodeError> {
    let entry = first_named_entry(&doc.uber).ok_or(DecodeError::MissingContent)?;
    from_value(content_value(entry)?)
}

/// Decode a single resource: the first named content entry plus the
/// document-level link set.
pub fn decode_resource<T: DeserializeOwned>(doc: &UberDocument) -> Result<Resource<T>, DecodeError> {
    let entry = first_named_entry(&doc.uber).ok_or(DecodeError::MissingContent)?;
    let content = from_value(content_value(entry)?)?;
    Ok(Resource::with_links(content, doc.uber.links()))
}

/// Decode a resource without a declared content type.
///
/// This is the fallback for body-less documents: when no content entry
/// exists the result is an empty property map carrying only the document
/// links. Typed entry points treat the same document as
/// [`DecodeError::MissingContent`].
pub fn decode_untyped(doc: &UberDocument) -> Result<Resource<Properties>, DecodeError> {
    let links = doc.uber.links();
    match first_named_entry(&doc.uber) {
        None => Ok(Resource::with_links(Properties::new(), links)),
        Some(entry) => match content_value(entry)? {
            Value::Object(map) => Ok(Resource::with_links(map, links)),
            _ => Err(DecodeError::malformed(
                "primitive content cannot be decoded as untyped properties",
            )),
        },
    }
}

/// Decode a collection of bare values: per-element links are discarded.
pub fn decode_collection<T: DeserializeOwned>(
    doc: &UberDocument,
) -> Result<Collection<T>, DecodeError> {
    let items = fold_entries(&doc.uber)?
        .into_iter()
        .map(|r: Resource<T>| r.content)
        .collect();
    Ok(Collection::with_links(items, doc.uber.links()))
}

/// Decode a collection of link-bearing resources: each element keeps its own
/// links.
pub fn decode_resource_collection<T: DeserializeOwned>(
    doc: &UberDocument,
) -> Result<Collection<Resource<T>>, DecodeError> {
    Ok(Collection::with_links(
        fold_entries(&doc.uber)?,
        doc.uber.links(),
    ))
}

/// Decode a paged collection of bare values.
pub fn decode_paged_collection<T: DeserializeOwned>(
    doc: &UberDocument,
) -> Result<Paged<T>, DecodeError> {
    let items = fold_entries(&doc.uber)?
        .into_iter()
        .map(|r: Resource<T>| r.content)
        .collect();
    Ok(Paged::with_links(
        items,
        page_metadata(&doc.uber)?,
        doc.uber.links(),
    ))
}

/// Decode a paged collection of link-bearing resources.
pub fn decode_paged_resource_collection<T: DeserializeOwned>(
    doc: &UberDocument,
) -> Result<Paged<Resource<T>>, DecodeError> {
    Ok(Paged::with_links(
        fold_entries(&doc.uber)?,
        page_metadata(&doc.uber)?,
        doc.uber.links(),
    ))
}

// --- assembler ---------------------------------------------------------------

fn first_named_entry(uber: &Uber) -> Option<&UberNode> {
    uber.data
        .iter()
        .find(|e| e.name.as_deref().is_some_and(|n| !n.is_empty()))
}

fn is_page_entry(node: &UberNode) -> bool {
    node.name.as_deref() == Some(PAGE_ENTRY_NAME)
}

/// Reconstruct every resource entry of the top-level list, in order,
/// skipping document links and the reserved `page` entry.
fn fold_entries<T: DeserializeOwned>(uber: &Uber) -> Result<Vec<Resource<T>>, DecodeError> {
    let mut items = Vec::new();
    for entry in &uber.data {
        if entry.is_link() || is_page_entry(entry) {
            continue;
        }
        items.push(fold_entry(entry)?);
    }
    Ok(items)
}

/// One resource entry: link children become the element's links, the single
/// remaining content node folds into the element's value.
fn fold_entry<T: DeserializeOwned>(entry: &UberNode) -> Result<Resource<T>, DecodeError> {
    let NodeBody::Data(children) = &entry.body else {
        return Err(DecodeError::malformed(
            "a resource entry must carry a data sequence",
        ));
    };

    let mut links: Vec<Link> = Vec::new();
    let mut content: Option<&UberNode> = None;
    for child in children {
        if child.is_link() {
            links.extend(node_links(child));
        } else if content.replace(child).is_some() {
            return Err(DecodeError::malformed(
                "a resource entry must carry exactly one content node",
            ));
        }
    }

    let content = content.ok_or(DecodeError::MissingContent)?;
    let value = from_value(content_value(content)?)?;
    Ok(Resource::with_links(value, links))
}

/// Fold one resource's content node back to a JSON value: the wrapped
/// primitive when its children are a single unnamed leaf, the folded
/// composite otherwise.
fn content_value(content: &UberNode) -> Result<Value, DecodeError> {
    let NodeBody::Data(children) = &content.body else {
        return Err(DecodeError::malformed(
            "a content node must carry a data sequence",
        ));
    };
    if let [UberNode {
        name: None,
        body: NodeBody::Value(scalar),
    }] = children.as_slice()
    {
        return Ok(scalar.clone().into());
    }
    fold_children(children)
}

/// Fold composite children: all-unnamed children make an array, otherwise
/// every child must be uniquely named and the result is an object. No
/// children fold to an empty object.
fn fold_children(children: &[UberNode]) -> Result<Value, DecodeError> {
    if !children.is_empty() && children.iter().all(|c| c.name.is_none()) {
        let items = children
            .iter()
            .map(fold_node)
            .collect::<Result<Vec<_>, _>>()?;
        return Ok(Value::Array(items));
    }

    let mut map = Properties::new();
    for child in children {
        let Some(name) = child.name.clone() else {
            return Err(DecodeError::malformed(
                "unnamed node among named properties",
            ));
        };
        let value = fold_node(child)?;
        if map.insert(name.clone(), value).is_some() {
            return Err(DecodeError::DuplicateProperty(name));
        }
    }
    Ok(Value::Object(map))
}

fn fold_node(node: &UberNode) -> Result<Value, DecodeError> {
    match &node.body {
        NodeBody::Value(scalar) => Ok(scalar.clone().into()),
        NodeBody::Data(children) => fold_children(children),
        NodeBody::Link { .. } => Err(DecodeError::malformed(
            "hyperlink node inside a content subtree",
        )),
    }
}

/// Reconstruct paging metadata from the reserved `page` entry, if present.
///
/// Missing fields default to 0; unrecognized field names are ignored.
fn page_metadata(uber: &Uber) -> Result<Option<PageMetadata>, DecodeError> {
    let Some(entry) = uber.data.iter().find(|e| is_page_entry(e)) else {
        return Ok(None);
    };
    let NodeBody::Data(children) = &entry.body else {
        return Err(DecodeError::malformed(
            "the page entry must carry a data sequence",
        ));
    };

    let mut page = PageMetadata::default();
    for child in children {
        let Some(name) = child.name.as_deref() else {
            continue;
        };
        let field = match name {
            "size" => &mut page.size,
            "number" => &mut page.number,
            "totalElements" => &mut page.total_elements,
            "totalPages" => &mut page.total_pages,
            _ => continue,
        };
        *field = page_count(name, child)?;
    }
    Ok(Some(page))
}

/// Strict narrowing: a paging field must be an exact non-negative integer.
/// Fractional, negative, or non-numeric scalars are rejected rather than
/// truncated.
fn page_count(name: &str, node: &UberNode) -> Result<u64, DecodeError> {
    let NodeBody::Value(scalar) = &node.body else {
        return Err(DecodeError::malformed(format!(
            "page field {name:?} is not a scalar"
        )));
    };
    if let Scalar::Number(n) = scalar {
        if let Some(count) = n.as_u64() {
            return Ok(count);
        }
    }
    Err(DecodeError::InvalidPageField {
        name: name.to_string(),
        value: scalar.to_string(),
    })
}

// --- tests -------------------------------------------------------------------
