use super::intent::Intent;

/// One menu entry: a label to render and the intent it resolves to when
/// picked. The transport never parses anything; it hands the intent back.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub intent: Intent,
}

impl Choice {
    pub fn new(label: impl Into<String>, intent: Intent) -> Self {
        Self {
            label: label.into(),
            intent,
        }
    }
}

/// One outbound message: prompt text plus an optional fixed menu.
/// An empty menu means the engine expects free text (or nothing at all).
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub text: String,
    pub menu: Vec<Choice>,
}

impl Reply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: Vec::new(),
        }
    }
    pub fn menu(text: impl Into<String>, menu: Vec<Choice>) -> Self {
        Self {
            text: text.into(),
            menu,
        }
    }
}

impl std::fmt::Display for Reply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
