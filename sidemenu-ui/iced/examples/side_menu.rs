use env_logger::Env;
use iced::widget::{button, column, container, row, text};
use iced::{Element, Length};
use sidemenu::{
    ClickDispatch, MenuConfig, MenuItem, MenuNode, MenuRow, NodeId, SideMenu,
};
use sidemenu_ui_iced::{MenuTheme, MenuView};

#[derive(Debug, Clone)]
enum Message {
    MenuPressed(NodeId),
    ShowItem(&'static str),
}

struct AppState {
    menu: SideMenu,
    rows: Vec<MenuRow>,
    theme: MenuTheme,
    status: String,
}

impl Default for AppState {
    fn default() -> Self {
        let items = vec![
            MenuNode::from(MenuItem::new("Home", "home").icon("H")),
            MenuNode::divider("Shop", "shop-divider"),
            MenuItem::new("Products", "products")
                .icon("P")
                .children(vec![
                    MenuNode::item("Shoes", "shoes"),
                    MenuNode::item("Shirts", "shirts"),
                ])
                .into(),
            MenuItem::new("Account", "account")
                .icon("A")
                .children(vec![
                    MenuNode::item("Profile", "profile"),
                    MenuItem::new("Logout", "logout")
                        .on_click(|_| log::info!("logging out"))
                        .into(),
                ])
                .into(),
            MenuNode::item("Contact", "contact"),
        ];
        let config = MenuConfig::default().theme("default");
        let theme = MenuTheme::from_name(&config.theme);
        let mut menu = SideMenu::from_items(&items, config, None)
            .on_menu_item_click(|value, extras| {
                log::info!("menu item clicked: {value} extras={extras:?}")
            });
        let rows = menu.realize();

        Self {
            menu,
            rows,
            theme,
            status: String::from("nothing selected"),
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    let dispatch = match message {
        Message::MenuPressed(node) => match state.menu.click(node) {
            Ok(dispatch) => Some(dispatch),
            Err(err) => {
                log::warn!("menu click failed: {err}");
                None
            },
        },
        Message::ShowItem(value) => {
            state.menu.set_active_item(Some(String::from(value)))
        },
    };

    if let Some(dispatch) = dispatch {
        state.status = describe(&dispatch);
    }
    state.rows = state.menu.realize();
}

fn describe(dispatch: &ClickDispatch) -> String {
    match dispatch {
        ClickDispatch::Override { value } => format!("handled by {value}"),
        ClickDispatch::Notify { value, .. } => format!("selected {value}"),
        ClickDispatch::Navigate { href } => format!("navigate to {href}"),
        ClickDispatch::None => String::from("toggled"),
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let menu = container(
        MenuView::new(&state.rows, state.menu.config().rtl)
            .theme(state.theme)
            .on_press(Message::MenuPressed)
            .indent_width(16.0)
            .view(),
    )
    .width(Length::Fixed(220.0));

    let panel = column![
        text(state.status.as_str()).size(16),
        button(text("Show shirts")).on_press(Message::ShowItem("shirts")),
        button(text("Show profile")).on_press(Message::ShowItem("profile")),
    ]
    .spacing(12)
    .padding(16);

    row![menu, panel].into()
}

fn main() -> iced::Result {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    iced::run(update, view)
}
