//! Path queries over a [`Document`](crate::Document).
//!
//! Grammar:
//!
//! ```text
//! path  := step ('/' step)* ('/' '@' attr)?
//! step  := '*' | name | name '[' '@' attr ( '=' quoted )? ']'
//! ```
//!
//! Element steps select children of every node in the current set, in
//! document order. A trailing `@attr` step selects an attribute of the
//! final nodes and is only meaningful for value lookups.

use crate::Node;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Element {
        /// `None` matches any element name.
        name: Option<String>,
        /// Attribute that must be present, optionally with a given value.
        filter: Option<(String, Option<String>)>,
    },
    Attribute(String),
}

impl Step {
    fn parse(text: &str) -> Option<Step> {
        if let Some(attr) = text.strip_prefix('@') {
            return is_name(attr).then(|| Step::Attribute(attr.to_string()));
        }

        let (name, filter) = match text.find('[') {
            Some(open) => {
                let inner = text[open + 1..].strip_suffix(']')?;
                (&text[..open], Some(parse_filter(inner)?))
            }
            None => (text, None),
        };
        let name = match name {
            "*" => None,
            name if is_name(name) => Some(name.to_string()),
            _ => return None,
        };
        Some(Step::Element { name, filter })
    }

    fn matches(&self, node: Node<'_>) -> bool {
        match self {
            Step::Element { name, filter } => {
                if let Some(name) = name {
                    if node.name() != name {
                        return false;
                    }
                }
                match filter {
                    Some((attr, Some(value))) => node.attr(attr) == Some(value.as_str()),
                    Some((attr, None)) => node.attr(attr).is_some(),
                    None => true,
                }
            }
            Step::Attribute(_) => false,
        }
    }
}

fn is_name(text: &str) -> bool {
    !text.is_empty()
        && text
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'_' | b'-' | b':' | b'.'))
}

fn parse_filter(inner: &str) -> Option<(String, Option<String>)> {
    let inner = inner.strip_prefix('@')?;
    match inner.split_once('=') {
        Some((attr, quoted)) => {
            let value = quoted
                .strip_prefix('\'')
                .and_then(|v| v.strip_suffix('\''))
                .or_else(|| quoted.strip_prefix('"').and_then(|v| v.strip_suffix('"')))?;
            is_name(attr).then(|| (attr.to_string(), Some(value.to_string())))
        }
        None => is_name(inner).then(|| (inner.to_string(), None)),
    }
}

/// Split on `/` outside quotes.
fn split_steps(path: &str) -> Vec<&str> {
    let mut steps = Vec::new();
    let mut quote = None;
    let mut start = 0;
    for (i, c) in path.char_indices() {
        match (c, quote) {
            ('\'' | '"', None) => quote = Some(c),
            (c, Some(q)) if c == q => quote = None,
            ('/', None) => {
                steps.push(&path[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    steps.push(&path[start..]);
    steps
}

/// A parsed path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    steps: Vec<Step>,
}

impl Query {
    /// Parse a path. Returns `None` for malformed paths, including an
    /// attribute step anywhere but last.
    pub fn parse(path: &str) -> Option<Query> {
        let steps = split_steps(path)
            .into_iter()
            .map(Step::parse)
            .collect::<Option<Vec<_>>>()?;
        let attr_steps = steps
            .iter()
            .filter(|s| matches!(s, Step::Attribute(_)))
            .count();
        let attr_last = matches!(steps.last(), Some(Step::Attribute(_)));
        if attr_steps > 1 || (attr_steps == 1 && !attr_last) {
            return None;
        }
        Some(Query { steps })
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// The trailing attribute step, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self.steps.last() {
            Some(Step::Attribute(attr)) => Some(attr),
            _ => None,
        }
    }

    /// Nodes matched by the element steps, in document order.
    pub fn select<'d>(&self, context: Node<'d>) -> Vec<Node<'d>> {
        let mut current = vec![context];
        for step in &self.steps {
            if matches!(step, Step::Attribute(_)) {
                break;
            }
            current = current
                .into_iter()
                .flat_map(Node::children)
                .filter(|child| step.matches(*child))
                .collect();
            if current.is_empty() {
                break;
            }
        }
        current
    }

    /// Text (or trailing attribute) of every matched node.
    ///
    /// With an attribute step, nodes lacking the attribute are skipped.
    pub fn values<'d>(&self, context: Node<'d>) -> Vec<&'d str> {
        let nodes = self.select(context);
        match self.attribute() {
            Some(attr) => nodes.into_iter().filter_map(|n| n.attr(attr)).collect(),
            None => nodes.into_iter().map(Node::text).collect(),
        }
    }

    /// First matched value, `None` if missing or empty.
    pub fn value<'d>(&self, context: Node<'d>) -> Option<&'d str> {
        self.values(context).into_iter().next().filter(|v| !v.is_empty())
    }
}
