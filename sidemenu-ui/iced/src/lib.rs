//! [`iced`] rendering for [`sidemenu`] menus.
//!
//! The menu state lives in a [`sidemenu::Menu`]; this crate only draws the
//! rows returned by [`sidemenu::Menu::realize`] and turns row presses into
//! host messages carrying the pressed [`sidemenu::NodeId`].
//!
//! See `examples/side_menu.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::Element;
//! use sidemenu::{MenuRow, NodeId};
//! use sidemenu_ui_iced::{MenuTheme, MenuView};
//!
//! #[derive(Debug, Clone)]
//! enum Message {
//!     MenuPressed(NodeId),
//! }
//!
//! struct State {
//!     rtl: bool,
//!     theme: MenuTheme,
//!     rows: Vec<MenuRow>,
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     MenuView::new(&state.rows, state.rtl)
//!         .theme(state.theme)
//!         .on_press(Message::MenuPressed)
//!         .indent_width(16.0)
//!         .view()
//! }
//! ```

mod theme;
mod view;

pub use theme::{MenuTheme, menu_style, row_style};
pub use view::{ItemContent, MenuView, chevron_glyph, indent_for};
