use crate::entity::{EntityKind, SyntheticEntity};
use crate::errors::GenerationError;

/// Element of the in-memory document tree.
///
/// Children are owned and kept in insertion order, which is also the order
/// they are serialized in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    tag: String,
    text: Option<String>,
    children: Vec<DocumentNode>,
}

impl DocumentNode {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn leaf(tag: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            text: Some(text.into()),
            children: Vec::new(),
        }
    }

    pub fn push(&mut self, child: DocumentNode) {
        self.children.push(child);
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn children(&self) -> &[DocumentNode] {
        &self.children
    }

    /// First child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&DocumentNode> {
        self.children.iter().find(|child| child.tag == tag)
    }

    /// Text of the first child with the given tag.
    pub fn child_text(&self, tag: &str) -> Option<&str> {
        self.child(tag).and_then(DocumentNode::text)
    }
}

/// Accumulates entities under a single typed root.
#[derive(Debug)]
pub struct DocumentBuilder {
    kind: EntityKind,
    root: DocumentNode,
}

impl DocumentBuilder {
    pub fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            root: DocumentNode::element(kind.root_tag()),
        }
    }

    /// Append one entity element with its attributes as leaves, in order.
    ///
    /// Entities of another kind are rejected and the document is left as is.
    pub fn append(&mut self, entity: SyntheticEntity) -> Result<(), GenerationError> {
        if entity.kind() != self.kind {
            return Err(GenerationError::KindMismatch {
                expected: self.kind,
                found: entity.kind(),
            });
        }
        let mut element = DocumentNode::element(self.kind.element_tag());
        for (name, value) in entity.into_attributes() {
            element.push(DocumentNode::leaf(name, value));
        }
        self.root.push(element);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.root.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty()
    }

    pub fn finish(self) -> DocumentNode {
        self.root
    }
}
