use std::fmt::{Display, Formatter};

use crate::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Content {
    Children(Vec<Node>),
    Text(String),
}

/// A node of a text tree, such as a simplified HTML DOM.
///
/// A node is either internal, holding an ordered list of children and no text of its own,
/// or a leaf, holding text (possibly empty) and no children.
/// A node without children is always a leaf.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    element: String,
    content: Content,
}

impl Node {
    /// A leaf named `element` holding `text`.
    pub fn leaf(element: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            content: Content::Text(text.into()),
        }
    }

    /// An internal node named `element`. With no `children` this is an empty leaf instead.
    pub fn parent(element: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            element: element.into(),
            content: if children.is_empty() { Content::Text(String::new()) } else { Content::Children(children) },
        }
    }

    /// The element name, e.g. `"span"`. May be empty for bare text.
    pub fn element(&self) -> &str {
        &self.element
    }

    /// This node's own text. Internal nodes have none and return `""`; see [`Node::text_content`].
    pub fn text(&self) -> &str {
        match &self.content {
            Content::Text(text) => text,
            Content::Children(_) => "",
        }
    }

    /// The ordered children; empty for leaves.
    pub fn children(&self) -> &[Node] {
        match &self.content {
            Content::Children(children) => children,
            Content::Text(_) => &[],
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self.content, Content::Text(_))
    }

    /// Iterate over the leaves beneath this node (or this node itself, if a leaf) in document order.
    pub fn leaves(&self) -> Leaves<'_> {
        Leaves { stack: vec![self] }
    }

    /// The text of every leaf, concatenated in document order with nothing in between.
    pub fn text_content(&self) -> String {
        self.leaves().map(Node::text).collect()
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if !self.element.is_empty() {
            write!(f, "<{}>", self.element)?;
        }

        match &self.content {
            Content::Text(text) => write!(f, "{}", text)?,
            Content::Children(children) => {
                for child in children {
                    write!(f, "{}", child)?;
                }
            }
        }

        if !self.element.is_empty() {
            write!(f, "</{}>", self.element)?;
        }

        Ok(())
    }
}

/// Depth-first, left-to-right iterator over leaves. Created by [`Node::leaves`].
pub struct Leaves<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iterator for Leaves<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.stack.pop() {
            match &node.content {
                Content::Text(_) => return Some(node),
                // reversed so the leftmost child is popped first
                Content::Children(children) => self.stack.extend(children.iter().rev()),
            }
        }

        None
    }
}

/// A builder for [`Node`]s that rejects nodes given both text and children.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some point.
#[derive(Clone, Debug, Default)]
pub struct NodeBuilder {
    element: String,
    text: Option<String>,
    children: Vec<Node>,
}

impl NodeBuilder {
    /// Start building a node named `element`.
    pub fn element(element: impl Into<String>) -> Self {
        Self {
            element: element.into(),
            ..Default::default()
        }
    }

    /// Set the text of this node, replacing any previously set.
    pub fn text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = Some(text.into());
        self
    }

    /// Append a child.
    pub fn child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// Append several children, in order.
    pub fn children(&mut self, children: impl IntoIterator<Item = Node>) -> &mut Self {
        self.children.extend(children);
        self
    }

    /// Convert the state of this builder into a [`Node`].
    ///
    /// Fails with [`Error::MixedContent`] if both text and children were supplied.
    pub fn build(&self) -> Result<Node, Error> {
        match (&self.text, self.children.is_empty()) {
            (Some(_), false) => Err(Error::MixedContent { element: self.element.clone() }),
            (Some(text), true) => Ok(Node::leaf(self.element.clone(), text.clone())),
            (None, _) => Ok(Node::parent(self.element.clone(), self.children.clone())),
        }
    }
}
