//! Parsed documents stored as a flat node arena.

use std::borrow::Cow;
use std::fmt;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::{MarkupError, Query};

/// Index of a node in its [`Document`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// The synthetic root above the top-level element.
    pub const ROOT: NodeId = NodeId(0);

    #[inline]
    fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct NodeData {
    name: String,
    attrs: Vec<(String, String)>,
    /// Concatenated direct text and CDATA content.
    text: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

#[derive(Clone, Debug)]
pub struct Document {
    path: String,
    nodes: Vec<NodeData>,
}

impl Document {
    /// Parse `text`; `path` is only used in error messages.
    pub fn parse(path: &str, text: &str) -> Result<Document, MarkupError> {
        let mut doc = Document {
            path: path.to_string(),
            nodes: vec![NodeData::default()],
        };
        let mut reader = Reader::from_str(text);
        let mut open = vec![NodeId::ROOT];

        let malformed = |position: u64, message: String| MarkupError::Malformed {
            path: path.to_string(),
            position,
            message,
        };

        loop {
            let position = reader.buffer_position();
            let event = reader
                .read_event()
                .map_err(|e| malformed(position, e.to_string()))?;
            let top = open.last().copied().unwrap_or(NodeId::ROOT);
            match event {
                Event::Start(start) => {
                    let id = doc.push_element(top, &start).map_err(|m| malformed(position, m))?;
                    open.push(id);
                }
                Event::Empty(start) => {
                    doc.push_element(top, &start).map_err(|m| malformed(position, m))?;
                }
                Event::End(_) => {
                    if open.len() <= 1 {
                        return Err(malformed(position, "unexpected closing tag".to_string()));
                    }
                    open.pop();
                }
                Event::Text(content) => {
                    let content = content
                        .unescape()
                        .map_err(|e| malformed(position, e.to_string()))?;
                    doc.push_text(top, &content);
                }
                Event::CData(content) => {
                    let content = content
                        .decode()
                        .map_err(|e| malformed(position, e.to_string()))?;
                    doc.push_text(top, &content);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if open.len() > 1 {
            let position = reader.buffer_position();
            return Err(malformed(position, "unclosed element".to_string()));
        }
        Ok(doc)
    }

    fn push_element(&mut self, parent: NodeId, start: &BytesStart<'_>) -> Result<NodeId, String> {
        let mut attrs = Vec::new();
        for attr in start.attributes() {
            let attr = attr.map_err(|e| e.to_string())?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value().map_err(|e| e.to_string())?;
            attrs.push((key, value.into_owned()));
        }
        let id = NodeId(u32::try_from(self.nodes.len()).map_err(|e| e.to_string())?);
        self.nodes.push(NodeData {
            name: String::from_utf8_lossy(start.name().as_ref()).into_owned(),
            attrs,
            text: String::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);
        Ok(id)
    }

    fn push_text(&mut self, node: NodeId, content: &Cow<'_, str>) {
        // Text outside the top-level element is insignificant.
        if node != NodeId::ROOT {
            self.nodes[node.index()].text.push_str(content);
        }
    }

    /// Path this document was loaded from.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Number of element nodes.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The synthetic root; its children are the top-level elements.
    pub fn root(&self) -> Node<'_> {
        Node {
            doc: self,
            id: NodeId::ROOT,
        }
    }

    pub fn node(&self, id: NodeId) -> Option<Node<'_>> {
        (id.index() < self.nodes.len()).then_some(Node { doc: self, id })
    }

    pub fn select(&self, path: &str) -> Vec<Node<'_>> {
        self.root().select(path)
    }

    pub fn first(&self, path: &str) -> Option<Node<'_>> {
        self.root().first(path)
    }

    pub fn value(&self, path: &str) -> Option<&str> {
        self.root().value(path)
    }

    pub fn values(&self, path: &str) -> Vec<&str> {
        self.root().values(path)
    }
}

/// A borrowed handle to one element.
#[derive(Copy, Clone)]
pub struct Node<'d> {
    doc: &'d Document,
    id: NodeId,
}

impl<'d> Node<'d> {
    #[inline]
    fn data(self) -> &'d NodeData {
        &self.doc.nodes[self.id.index()]
    }

    pub fn id(self) -> NodeId {
        self.id
    }

    pub fn document(self) -> &'d Document {
        self.doc
    }

    /// Element name; empty for the synthetic root.
    pub fn name(self) -> &'d str {
        &self.data().name
    }

    pub fn attr(self, name: &str) -> Option<&'d str> {
        self.data()
            .attrs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Direct text content, unescaped, untrimmed.
    pub fn text(self) -> &'d str {
        &self.data().text
    }

    pub fn parent(self) -> Option<Node<'d>> {
        let doc = self.doc;
        self.data().parent.map(|id| Node { doc, id })
    }

    pub fn children(self) -> impl Iterator<Item = Node<'d>> + 'd {
        let doc = self.doc;
        self.data().children.iter().map(move |&id| Node { doc, id })
    }

    /// Nodes matching `path` relative to this node, in document order.
    ///
    /// A malformed path matches nothing.
    pub fn select(self, path: &str) -> Vec<Node<'d>> {
        match Query::parse(path) {
            Some(query) => query.select(self),
            None => {
                tracing::debug!(path, "malformed query");
                Vec::new()
            }
        }
    }

    pub fn first(self, path: &str) -> Option<Node<'d>> {
        self.select(path).into_iter().next()
    }

    /// First matched text or attribute; `None` when missing or empty.
    pub fn value(self, path: &str) -> Option<&'d str> {
        Query::parse(path).and_then(|query| query.value(self))
    }

    /// Text or attribute of every match, in document order.
    pub fn values(self, path: &str) -> Vec<&'d str> {
        Query::parse(path).map_or_else(Vec::new, |query| query.values(self))
    }
}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name())
            .finish()
    }
}
