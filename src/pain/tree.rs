//! Declarative XML tree handed to the writer.
//!
//! An [`Element`] holds ordered attributes, optional text content and
//! ordered `(tag, Node)` children. A [`Node::Repeated`] child is written
//! once per entry under the same tag.

/// Child content of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Leaf element with text content only.
    Text(String),
    /// Nested element with attributes and/or children.
    Element(Element),
    /// The same tag repeated once per entry, in order.
    Repeated(Vec<Node>),
}

impl Node {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(element) => element.text(),
            Node::Repeated(_) => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Entries of a repeated node; a single node is one entry.
    pub fn entries(&self) -> Vec<&Node> {
        match self {
            Node::Repeated(nodes) => nodes.iter().collect(),
            other => vec![other],
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<Vec<Element>> for Node {
    fn from(elements: Vec<Element>) -> Self {
        Node::Repeated(elements.into_iter().map(Node::Element).collect())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Element {
    attributes: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<(String, Node)>,
}

impl Element {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, tag: impl Into<String>, node: impl Into<Node>) -> Self {
        self.children.push((tag.into(), node.into()));
        self
    }

    /// Append a child only when `node` is `Some`.
    pub fn child_opt<N: Into<Node>>(self, tag: impl Into<String>, node: Option<N>) -> Self {
        match node {
            Some(node) => self.child(tag, node),
            None => self,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[(String, Node)] {
        &self.children
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.children.is_empty()
    }

    /// First direct child with the given tag.
    pub fn get(&self, tag: &str) -> Option<&Node> {
        self.children
            .iter()
            .find(|(name, _)| name == tag)
            .map(|(_, node)| node)
    }

    /// Text of the direct child with the given tag.
    pub fn text_of(&self, tag: &str) -> Option<&str> {
        self.get(tag).and_then(Node::as_text)
    }

    /// Follow a path of nested element tags; repeated nodes resolve to their first entry.
    pub fn path(&self, tags: &[&str]) -> Option<&Node> {
        let (first, rest) = tags.split_first()?;
        let mut node = self.get(first)?;
        for tag in rest {
            let element = match node {
                Node::Repeated(entries) => entries.first()?.as_element()?,
                other => other.as_element()?,
            };
            node = element.get(tag)?;
        }
        Some(node)
    }

    /// Number of occurrences of `tag` anywhere below this element.
    pub fn count(&self, tag: &str) -> usize {
        self.children
            .iter()
            .map(|(name, node)| {
                let own = if name == tag { node.entries().len() } else { 0 };
                own + node
                    .entries()
                    .into_iter()
                    .filter_map(Node::as_element)
                    .map(|e| e.count(tag))
                    .sum::<usize>()
            })
            .sum()
    }
}
