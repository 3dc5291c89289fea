use serde_json::Value;

use crate::dispatch::ClickHandler;
use crate::errors::MenuError;

/// Declarative menu entry supplied by the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Item(MenuItem),
    Divider(MenuDivider),
}

impl MenuNode {
    /// Build a leaf item.
    pub fn item(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Item(MenuItem::new(label, value))
    }

    /// Build a divider row.
    pub fn divider(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Divider(MenuDivider {
            label: label.into(),
            value: value.into(),
        })
    }

    pub fn label(&self) -> &str {
        match self {
            MenuNode::Item(item) => &item.label,
            MenuNode::Divider(divider) => &divider.label,
        }
    }

    pub fn value(&self) -> &str {
        match self {
            MenuNode::Item(item) => &item.value,
            MenuNode::Divider(divider) => &divider.value,
        }
    }

    /// Nested entries; dividers never have any.
    pub fn children(&self) -> &[MenuNode] {
        match self {
            MenuNode::Item(item) => &item.children,
            MenuNode::Divider(_) => &[],
        }
    }

    pub fn is_divider(&self) -> bool {
        matches!(self, MenuNode::Divider(_))
    }
}

impl From<MenuItem> for MenuNode {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

/// Clickable menu entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MenuItem {
    pub label: String,
    pub value: String,
    pub icon: Option<String>,
    pub children: Vec<MenuNode>,
    pub extras: Option<Value>,
    pub on_click: Option<ClickHandler>,
}

impl MenuItem {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            ..Self::default()
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn extras(mut self, extras: Value) -> Self {
        self.extras = Some(extras);
        self
    }

    /// Replace the menu notifier for this item only.
    pub fn on_click(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_click = Some(ClickHandler::new(handler));
        self
    }
}

/// Non-interactive separator row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDivider {
    pub label: String,
    pub value: String,
}

/// Parse declarative menu items from JSON text.
pub fn parse_items(json: &str) -> Result<Vec<MenuNode>, MenuError> {
    let value: Value = serde_json::from_str(json)?;
    items_from_value(&value)
}

/// Read declarative menu items from a JSON value.
///
/// The top level must be an array. Below it, reading is lenient: a
/// `children` field that is not an array yields a leaf, and entries that
/// are not objects are skipped.
pub fn items_from_value(value: &Value) -> Result<Vec<MenuNode>, MenuError> {
    let entries = value.as_array().ok_or(MenuError::NotASequence)?;
    Ok(read_nodes(entries))
}

fn read_nodes(entries: &[Value]) -> Vec<MenuNode> {
    entries.iter().filter_map(read_node).collect()
}

fn read_node(entry: &Value) -> Option<MenuNode> {
    if !entry.is_object() {
        log::warn!("menu entry skipped, expected an object: {entry}");
        return None;
    }

    let label = read_string_field(entry, "label").unwrap_or_default();
    let value = read_string_field(entry, "value").unwrap_or_default();

    if entry.get("divider").and_then(Value::as_bool) == Some(true) {
        return Some(MenuNode::divider(label, value));
    }

    let children = match entry.get("children") {
        Some(Value::Array(children)) => read_nodes(children),
        Some(Value::Null) | None => Vec::new(),
        Some(other) => {
            log::warn!("menu item {value:?} has non-array children: {other}");
            Vec::new()
        },
    };

    Some(MenuNode::Item(MenuItem {
        label,
        value,
        icon: read_string_field(entry, "icon"),
        children,
        extras: entry.get("extras").filter(|extras| !extras.is_null()).cloned(),
        on_click: None,
    }))
}

fn read_string_field(value: &Value, key: &str) -> Option<String> {
    match value.get(key)? {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
