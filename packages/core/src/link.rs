//! Hyperlink and action-verb projection between the resource model and UBER
//! nodes.
//!
//! A [`Link`] becomes a link-role node with a singleton `rel` list; a wire
//! node carrying several relations fans out to one [`Link`] per relation on
//! the way back. Nodes lacking `rel` are never treated as links.

use std::str::FromStr;

use crate::error::DecodeError;
use crate::model::Link;
use crate::node::{NodeBody, UberNode};

/// The write affordances a link may describe.
///
/// Serializes as its lowercase wire string (e.g. `"append"`); parses
/// case-insensitively. An unrecognized verb is a
/// [`DecodeError::UnknownAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UberAction {
    /// Add to the target (POST-like).
    Append,
    /// Partially update the target (PATCH-like).
    Partial,
    /// Safe retrieval (GET-like).
    Read,
    /// Delete the target (DELETE-like).
    Remove,
    /// Replace the target wholesale (PUT-like).
    Replace,
}

/// Formats the verb as its lowercase wire-format string.
impl std::fmt::Display for UberAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UberAction::Append => write!(f, "append"),
            UberAction::Partial => write!(f, "partial"),
            UberAction::Read => write!(f, "read"),
            UberAction::Remove => write!(f, "remove"),
            UberAction::Replace => write!(f, "replace"),
        }
    }
}

/// Parses a verb case-insensitively from its wire-format string.
impl FromStr for UberAction {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "append" => Ok(UberAction::Append),
            "partial" => Ok(UberAction::Partial),
            "read" => Ok(UberAction::Read),
            "remove" => Ok(UberAction::Remove),
            "replace" => Ok(UberAction::Replace),
            _ => Err(DecodeError::UnknownAction(s.to_string())),
        }
    }
}

/// Project a [`Link`] to its wire node: `rel` + `url`, no name, no value, no
/// children.
pub fn link_node(link: &Link) -> UberNode {
    UberNode {
        name: None,
        body: NodeBody::Link {
            rel: vec![link.rel.clone()],
            url: link.url.clone(),
            action: None,
        },
    }
}

/// Reconstruct the links a node describes: one [`Link`] per relation in its
/// `rel` list, or none at all for non-link nodes.
pub fn node_links(node: &UberNode) -> Vec<Link> {
    match &node.body {
        NodeBody::Link { rel, url, .. } => {
            rel.iter().map(|r| Link::new(r.clone(), url.clone())).collect()
        }
        _ => Vec::new(),
    }
}

// --- tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_wire_strings() {
        let verbs = [
            (UberAction::Append, "append"),
            (UberAction::Partial, "partial"),
            (UberAction::Read, "read"),
            (UberAction::Remove, "remove"),
            (UberAction::Replace, "replace"),
        ];
        for (verb, text) in verbs {
            assert_eq!(verb.to_string(), text);
            assert_eq!(text.parse::<UberAction>(), Ok(verb));
        }
    }

    #[test]
    fn action_parses_case_insensitively() {
        assert_eq!("REPLACE".parse::<UberAction>(), Ok(UberAction::Replace));
        assert_eq!("Append".parse::<UberAction>(), Ok(UberAction::Append));
    }

    #[test]
    fn unknown_action_is_rejected() {
        assert_eq!(
            "destroy".parse::<UberAction>(),
            Err(DecodeError::UnknownAction("destroy".into()))
        );
    }

    #[test]
    fn link_projects_to_singleton_rel_node() {
        let node = link_node(&Link::new("self", "/orders/1"));
        assert!(node.name.is_none());
        assert_eq!(
            node.body,
            NodeBody::Link {
                rel: vec!["self".into()],
                url: "/orders/1".into(),
                action: None,
            }
        );
    }

    #[test]
    fn multi_rel_node_fans_out_to_one_link_per_relation() {
        let node = UberNode {
            name: None,
            body: NodeBody::Link {
                rel: vec!["self".into(), "canonical".into()],
                url: "/orders/1".into(),
                action: None,
            },
        };
        assert_eq!(
            node_links(&node),
            vec![
                Link::new("self", "/orders/1"),
                Link::new("canonical", "/orders/1"),
            ]
        );
    }

    #[test]
    fn non_link_nodes_yield_no_links() {
        assert!(node_links(&UberNode::property("url", "/not-a-link")).is_empty());
    }
}
