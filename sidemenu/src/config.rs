use serde::Deserialize;
use serde_json::Value;

const DEFAULT_THEME: &str = "default";

/// Switches that parameterize the engine and the presentation adapter.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Keep a single open path: opening a node closes every other branch.
    pub collapse: bool,
    /// Right-to-left layout. Visual only.
    pub rtl: bool,
    /// Theme name picked up by the presentation adapter.
    pub theme: String,
    /// Notify clicks on parent nodes too, not only on leaves.
    #[serde(alias = "shouldTriggerClickOnParents")]
    pub trigger_click_on_parents: bool,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            collapse: true,
            rtl: false,
            theme: String::from(DEFAULT_THEME),
            trigger_click_on_parents: false,
        }
    }
}

impl MenuConfig {
    pub fn collapse(mut self, collapse: bool) -> Self {
        self.collapse = collapse;
        self
    }

    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    pub fn theme(mut self, theme: impl Into<String>) -> Self {
        self.theme = theme.into();
        self
    }

    pub fn trigger_click_on_parents(mut self, enabled: bool) -> Self {
        self.trigger_click_on_parents = enabled;
        self
    }

    /// Read a config from loosely typed JSON, keeping defaults for fields
    /// that are missing or have the wrong type.
    pub fn from_json(value: &Value) -> Self {
        let mut config = Self::default();

        if let Some(collapse) = read_bool_field(value, &["collapse"]) {
            config.collapse = collapse;
        }

        if let Some(rtl) = read_bool_field(value, &["rtl"]) {
            config.rtl = rtl;
        }

        if let Some(theme) = value.get("theme") {
            match theme.as_str().map(str::trim) {
                Some(theme) if !theme.is_empty() => {
                    config.theme = theme.to_string();
                },
                _ => log::warn!("menu config ignored invalid theme: {theme}"),
            }
        }

        if let Some(enabled) = read_bool_field(
            value,
            &["triggerClickOnParents", "shouldTriggerClickOnParents"],
        ) {
            config.trigger_click_on_parents = enabled;
        }

        config
    }
}

/// First boolean among `keys`; present keys of another type are skipped.
fn read_bool_field(value: &Value, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| {
        let field = value.get(*key)?;
        let flag = field.as_bool();
        if flag.is_none() {
            log::warn!("menu config ignored non-boolean {key}: {field}");
        }
        flag
    })
}
