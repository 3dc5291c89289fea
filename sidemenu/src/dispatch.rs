use std::fmt;
use std::rc::Rc;

use serde_json::Value;

/// Per-node click override, called with the node identifier.
#[derive(Clone)]
pub struct ClickHandler(Rc<dyn Fn(&str)>);

impl ClickHandler {
    pub fn new(handler: impl Fn(&str) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub(crate) fn call(&self, value: &str) {
        (self.0)(value)
    }
}

impl fmt::Debug for ClickHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickHandler(..)")
    }
}

impl PartialEq for ClickHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Menu-wide click notifier, called with the identifier and extras.
#[derive(Clone)]
pub struct ClickNotifier(Rc<dyn Fn(&str, Option<&Value>)>);

impl ClickNotifier {
    pub fn new(notifier: impl Fn(&str, Option<&Value>) + 'static) -> Self {
        Self(Rc::new(notifier))
    }

    pub(crate) fn call(&self, value: &str, extras: Option<&Value>) {
        (self.0)(value, extras)
    }
}

impl fmt::Debug for ClickNotifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClickNotifier(..)")
    }
}

/// What a click handed to the outside world.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickDispatch {
    /// The node's own click override ran.
    Override { value: String },
    /// The menu-wide notifier ran.
    Notify {
        value: String,
        extras: Option<Value>,
    },
    /// No notifier is configured; the host should navigate to `href`.
    Navigate { href: String },
    /// Nothing to dispatch (parent toggle, divider or anonymous node).
    None,
}

/// Inputs of the dispatch decision for one clicked node.
pub(crate) struct DispatchRequest<'a> {
    pub(crate) value: Option<&'a str>,
    pub(crate) extras: Option<&'a Value>,
    pub(crate) click_override: Option<&'a ClickHandler>,
    pub(crate) is_leaf: bool,
    pub(crate) trigger_click_on_parents: bool,
    pub(crate) notifier: Option<&'a ClickNotifier>,
}

/// Run the callbacks a click calls for and report what happened.
///
/// Precedence: node override, then the notifier for leaves (or any node
/// when parents trigger clicks), then default navigation.
pub(crate) fn dispatch(request: DispatchRequest<'_>) -> ClickDispatch {
    if let Some(handler) = request.click_override {
        let value = request.value.unwrap_or_default();
        handler.call(value);
        return ClickDispatch::Override {
            value: value.to_string(),
        };
    }

    if !request.is_leaf && !request.trigger_click_on_parents {
        return ClickDispatch::None;
    }

    let Some(value) = request.value else {
        return ClickDispatch::None;
    };

    match request.notifier {
        Some(notifier) => {
            notifier.call(value, request.extras);
            ClickDispatch::Notify {
                value: value.to_string(),
                extras: request.extras.cloned(),
            }
        },
        None => ClickDispatch::Navigate {
            href: format!("#{value}"),
        },
    }
}
