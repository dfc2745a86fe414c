// src/ui/node.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Inline CSS, property → value.
pub type Style = BTreeMap<String, String>;

/// A component of the dashboard view.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Div {
        #[serde(skip_serializing_if = "Option::is_none")]
        id: Option<String>,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        style: Style,
        children: Vec<Node>,
    },
    Heading {
        level: u8,
        text: String,
        #[serde(skip_serializing_if = "BTreeMap::is_empty")]
        style: Style,
    },
    /// A Plotly figure.
    Graph { id: String, figure: Value },
    Dropdown {
        id: String,
        options: Vec<DropdownOption>,
        placeholder: String,
    },
    Break,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: Value,
}

/// Events a component can raise towards the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// The selected value of a dropdown changed.
    #[default]
    Change,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Change => "change",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn div(children: Vec<Node>) -> Self {
        Node::Div {
            id: None,
            style: Style::new(),
            children,
        }
    }

    /// An empty, identified region that callbacks write into.
    pub fn output(id: &str) -> Self {
        Node::Div {
            id: Some(id.to_string()),
            style: style(&[("margin-top", "20px")]),
            children: vec![],
        }
    }

    pub fn heading(level: u8, text: &str) -> Self {
        Node::Heading {
            level,
            text: text.to_string(),
            style: Style::new(),
        }
    }

    pub fn with_style(mut self, css: &[(&str, &str)]) -> Self {
        if let Node::Div { style: s, .. } | Node::Heading { style: s, .. } = &mut self {
            s.extend(style(css));
        }
        self
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Node::Div { id, .. } => id.as_deref(),
            Node::Graph { id, .. } | Node::Dropdown { id, .. } => Some(id),
            Node::Heading { .. } | Node::Break => None,
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Div { children, .. } => children,
            _ => &[],
        }
    }

    /// Depth-first search for the component with `id`.
    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children().iter().find_map(|c| c.find(id))
    }
}

fn style(css: &[(&str, &str)]) -> Style {
    css.iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
