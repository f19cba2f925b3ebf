//! Transcoder between an in-memory hypermedia resource model and the
//! UBER+JSON wire format.
//!
//! UBER represents everything — scalars, objects, collections, links,
//! actions, paging metadata — as one recursive `data` node, while the
//! in-memory side is a small closed set of shapes: a plain value, a
//! link-bearing [`Resource`], a [`Collection`], or a [`Paged`] collection.
//! This crate flattens the typed side into node trees on the way out and
//! folds node trees back into typed values on the way in, using naming and
//! position conventions (not type tags) to disambiguate.
//!
//! # Crate layout
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`node`] | The recursive [`UberNode`] model, [`Uber`] envelope, and [`UberDocument`] JSON in/out |
//! | [`link`] | [`UberAction`] verbs and the link ⇄ node projection |
//! | [`model`] | The in-memory side: [`Link`], [`Resource`], [`Collection`], [`Paged`], [`PageMetadata`] |
//! | [`properties`] | serde-based property reflection (values ⇄ name→value mappings) |
//! | [`encode`] | Flattening and the document-level encode entry points |
//! | [`decode`] | Folding, the collection/page assembler, and the decode entry points |
//! | [`error`] | [`EncodeError`] and [`DecodeError`] |
//!
//! # Quick start
//!
//! ```rust,ignore
//! use serde::{Deserialize, Serialize};
//! use uberform::{decode_resource, encode_resource, Link, Resource, UberDocument};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Employee {
//!     name: String,
//!     role: String,
//! }
//!
//! let resource = Resource::with_links(
//!     Employee { name: "Ada".into(), role: "engineer".into() },
//!     vec![Link::new("self", "/employees/1")],
//! );
//!
//! // Encode to the wire.
//! let json = encode_resource(&resource)?.to_json_string()?;
//!
//! // And back.
//! let doc = UberDocument::from_json(&json)?;
//! let decoded: Resource<Employee> = decode_resource(&doc)?;
//! ```
//!
//! Every transform is a pure function over freshly built node trees: no
//! shared state, no registration, safe to call concurrently.

pub mod decode;
pub mod encode;
pub mod error;
pub mod link;
pub mod model;
pub mod node;
pub mod properties;

pub use decode::{
    decode_collection, decode_paged_collection, decode_paged_resource_collection,
    decode_resource, decode_resource_collection, decode_untyped, decode_value,
};
pub use encode::{
    encode_collection, encode_paged_collection, encode_paged_resource_collection,
    encode_resource, encode_resource_collection, encode_value,
};
pub use error::{DecodeError, EncodeError};
pub use link::UberAction;
pub use model::{Collection, Link, PageMetadata, Paged, Resource};
pub use node::{NodeBody, Scalar, Uber, UberDocument, UberNode, PAGE_ENTRY_NAME, UBER_VERSION};
pub use properties::{from_properties, to_properties, Properties};
