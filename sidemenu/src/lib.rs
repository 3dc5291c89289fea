//! Active-state engine for collapsible, hierarchical side menus.
//!
//! This crate is split into three layers:
//! - a state tree ([`StateTree`]) addressed by [`NodeId`], with parents stored
//!   as handles so ancestor walks need no shared ownership;
//! - activation rules ([`engine`]) written once against the [`ActiveTree`]
//!   capability trait;
//! - a [`Menu`] owner that builds the tree from declarative [`MenuNode`]s or
//!   caller [`ViewNode`]s, dispatches clicks and keeps the external-sync
//!   index ([`SyncIndex`]).
//!
//! The recommended flow for interactive menus:
//! 1. build a [`SideMenu`] (or a [`ViewMenu`]) with a [`MenuConfig`];
//! 2. call [`Menu::realize`] on every render and draw the returned rows;
//! 3. forward row clicks to [`Menu::click`] and caller-driven selection to
//!    [`Menu::set_active_item`].
//!
//! # Quick Example
//!
//! ```
//! use sidemenu::{ClickDispatch, MenuConfig, MenuItem, MenuNode, SideMenu};
//!
//! let items = vec![
//!     MenuNode::item("Home", "home"),
//!     MenuItem::new("Products", "products")
//!         .children(vec![
//!             MenuNode::item("Shoes", "shoes"),
//!             MenuNode::item("Shirts", "shirts"),
//!         ])
//!         .into(),
//! ];
//! let mut menu = SideMenu::from_items(&items, MenuConfig::default(), None);
//!
//! let rows = menu.realize();
//! assert_eq!(rows.len(), 2);
//!
//! let products = rows[1].node;
//! assert_eq!(menu.click(products)?, ClickDispatch::None);
//! assert_eq!(menu.realize().len(), 4);
//!
//! let dispatch = menu.set_active_item(Some(String::from("shoes")));
//! assert_eq!(
//!     dispatch,
//!     Some(ClickDispatch::Navigate {
//!         href: String::from("#shoes")
//!     })
//! );
//! # Ok::<(), sidemenu::MenuError>(())
//! ```

mod builder;
mod config;
mod dispatch;
pub mod engine;
mod errors;
mod menu;
mod model;
mod rows;
mod sync;
mod tree;

pub use builder::{
    ItemPayload, ViewNode, ViewPayload, build_items, build_view_nodes,
};
pub use config::MenuConfig;
pub use dispatch::{ClickDispatch, ClickHandler, ClickNotifier};
pub use engine::Transition;
pub use errors::MenuError;
pub use menu::{InjectedProps, Menu, SideMenu, ViewMenu};
pub use model::{
    MenuDivider, MenuItem, MenuNode, items_from_value, parse_items,
};
pub use rows::{Chevron, MenuRow, menu_class_name};
pub use sync::SyncIndex;
pub use tree::{ActiveTree, Ancestors, NodeId, NodePayload, Slot, StateTree};
