use sidemenu::{
    ActiveTree, ClickDispatch, MenuConfig, MenuItem, MenuNode, NodeId,
    SideMenu,
};

fn catalog() -> Vec<MenuNode> {
    vec![
        MenuNode::item("Home", "home"),
        MenuItem::new("Products", "products")
            .children(vec![
                MenuItem::new("Shoes", "shoes")
                    .children(vec![
                        MenuNode::item("Boots", "boots"),
                        MenuNode::item("Sneakers", "sneakers"),
                    ])
                    .into(),
                MenuNode::item("Shirts", "shirts"),
                MenuNode::divider("Sale", "sale"),
                MenuItem::new("Outlet", "outlet")
                    .children(vec![MenuNode::item("Socks", "socks")])
                    .into(),
            ])
            .into(),
        MenuNode::divider("Company", "company"),
        MenuItem::new("About", "about")
            .children(vec![
                MenuNode::item("Team", "team"),
                MenuNode::item("Jobs", "jobs"),
            ])
            .into(),
        MenuNode::item("Contact", "contact"),
    ]
}

fn menu(collapse: bool) -> SideMenu {
    SideMenu::from_items(
        &catalog(),
        MenuConfig::default().collapse(collapse),
        None,
    )
}

fn node(menu: &SideMenu, value: &str) -> NodeId {
    menu.find(value)
        .unwrap_or_else(|| panic!("{value} should exist"))
}

fn active_values(menu: &SideMenu) -> Vec<String> {
    menu.tree()
        .active_nodes()
        .into_iter()
        .filter_map(|node| menu.tree().identifier(node))
        .map(ToString::to_string)
        .collect()
}

fn assert_ancestor_closure(menu: &SideMenu) {
    let tree = menu.tree();
    for active in tree.active_nodes() {
        for ancestor in tree.ancestors(active) {
            assert!(
                tree.is_active(ancestor),
                "{active} is active but its ancestor {ancestor} is not"
            );
        }
    }
}

fn assert_single_path(menu: &SideMenu) {
    let tree = menu.tree();
    let mut groups = vec![tree.roots().to_vec()];
    groups.extend(tree.ids().map(|node| tree.children(node).to_vec()));
    for group in groups {
        let open = group.iter().filter(|node| tree.is_active(**node)).count();
        assert!(open <= 1, "{open} active siblings in {group:?}");
    }
    assert_eq!(menu.active_path().len(), tree.active_nodes().len());
}

fn assert_dividers_inactive(menu: &SideMenu) {
    for value in ["sale", "company"] {
        assert!(!menu.is_active(node(menu, value)));
    }
}

// Small xorshift so click sequences are varied but reproducible.
struct Clicks(u64);

impl Clicks {
    fn next(&mut self, bound: usize) -> usize {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 % bound as u64) as usize
    }
}

#[test]
fn given_random_clicks_in_collapse_mode_then_one_active_path_remains() {
    for seed in 1..=16 {
        let mut menu = menu(true);
        let mut clicks = Clicks(seed * 0x9E37_79B9);
        let ids: Vec<NodeId> = menu.tree().ids().collect();

        for _ in 0..64 {
            let target = ids[clicks.next(ids.len())];
            menu.click(target).expect("target belongs to menu");

            assert_ancestor_closure(&menu);
            assert_single_path(&menu);
            assert_dividers_inactive(&menu);
        }
    }
}

#[test]
fn given_random_clicks_in_independent_mode_then_ancestors_stay_closed_over() {
    for seed in 1..=16 {
        let mut menu = menu(false);
        let mut clicks = Clicks(seed * 0x85EB_CA6B);
        let ids: Vec<NodeId> = menu.tree().ids().collect();

        for _ in 0..64 {
            let target = ids[clicks.next(ids.len())];
            menu.click(target).expect("target belongs to menu");

            assert_ancestor_closure(&menu);
            assert_dividers_inactive(&menu);
        }
    }
}

#[test]
fn given_catalog_when_following_the_shopping_scenario_then_states_match() {
    let mut menu = menu(true);
    let products = node(&menu, "products");
    let shoes = node(&menu, "shoes");

    menu.click(products).expect("known node");
    assert_eq!(active_values(&menu), vec!["products"]);

    menu.click(shoes).expect("known node");
    assert_eq!(active_values(&menu), vec!["products", "shoes"]);
    assert!(!menu.is_active(node(&menu, "home")));
    assert!(!menu.is_active(node(&menu, "contact")));

    menu.click(products).expect("known node");
    assert!(active_values(&menu).is_empty());
}

#[test]
fn given_active_leaf_when_clicked_again_then_only_the_leaf_closes() {
    let mut menu = menu(true);
    let boots = node(&menu, "boots");
    menu.click(boots).expect("known node");

    menu.click(boots).expect("known node");

    assert_eq!(active_values(&menu), vec!["products", "shoes"]);
}

#[test]
fn given_deep_path_when_cousin_clicked_then_common_ancestor_stays_open() {
    let mut menu = menu(true);
    menu.click(node(&menu, "boots")).expect("known node");

    menu.click(node(&menu, "outlet")).expect("known node");

    assert_eq!(active_values(&menu), vec!["products", "outlet"]);
}

#[test]
fn given_realized_node_when_synced_externally_then_state_matches_direct_click()
{
    let mut clicked = menu(true);
    let mut synced = menu(true);
    for menu in [&mut clicked, &mut synced] {
        let products = node(menu, "products");
        menu.click(products).expect("known node");
        let _rows = menu.realize();
    }

    let direct = clicked.click(node(&clicked, "shirts")).expect("known node");
    let replayed = synced.set_active_item(Some(String::from("shirts")));

    assert_eq!(Some(direct), replayed);
    assert_eq!(active_values(&clicked), active_values(&synced));
    assert_eq!(clicked.active_item(), synced.active_item());
}

#[test]
fn given_node_under_closed_parent_when_synced_then_request_waits_for_render() {
    let mut menu = menu(true);
    let _rows = menu.realize();

    assert_eq!(menu.set_active_item(Some(String::from("team"))), None);
    assert!(active_values(&menu).is_empty());

    let about = node(&menu, "about");
    menu.click(about).expect("known node");
    let _rows = menu.realize();

    assert_eq!(
        menu.set_active_item(Some(String::from("team"))),
        Some(ClickDispatch::Navigate {
            href: String::from("#team")
        })
    );
    assert_eq!(active_values(&menu), vec!["about", "team"]);
}

#[test]
fn given_divider_when_clicked_repeatedly_then_it_never_activates() {
    let mut menu = menu(true);
    let sale = node(&menu, "sale");

    for _ in 0..3 {
        assert_eq!(menu.click(sale).expect("known node"), ClickDispatch::None);
    }

    assert!(active_values(&menu).is_empty());
    assert_eq!(menu.active_item(), None);
}
