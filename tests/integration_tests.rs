//! Integration tests for the shop loop: keys in, purchases out

use crossterm::event::{KeyCode, KeyEvent};

use tower_shop::config::RunConfig;
use tower_shop::core::{Buyer, Item, Player, Shop, SimpleRng};
use tower_shop::input::action_for_key;
use tower_shop::term::TermScene;
use tower_shop::types::{Grade, Keybind, PowerupKind, ShopAction, TICK_MS};

fn press(ch: char) -> KeyEvent {
    KeyEvent::from(KeyCode::Char(ch))
}

fn default_shop(seed: u32) -> Shop<SimpleRng, TermScene> {
    let config = RunConfig::default();
    let mut shop = Shop::new(&config.keybinds, SimpleRng::new(seed), TermScene::new());
    shop.stock_all();
    shop
}

#[test]
fn test_shop_lifecycle() {
    let shop = default_shop(12345);

    assert_eq!(shop.slots().len(), 3);
    assert!(shop.slots().iter().all(|s| s.item().is_some()));
    // One live visual per stocked slot.
    assert_eq!(shop.presenter().len(), 3);
}

#[test]
fn test_key_press_buys_from_bound_slot() {
    let mut shop = default_shop(12345);
    let keybinds: Vec<Keybind> = shop.keybinds().collect();
    let x = Keybind::new('x').unwrap();
    let item = Item::new(PowerupKind::Tornado, Grade::D, 15);
    shop.add_item(x, Some(item));

    let mut player = Player::new(20);
    let action = action_for_key(press('x'), &keybinds).unwrap();
    assert_eq!(action, ShopAction::Buy(x));

    let bought = shop.apply(action, &mut player);

    assert_eq!(bought, Some(item));
    assert_eq!(player.current_gold(), 5);
    assert_eq!(player.inventory(), &[item]);
    assert!(shop.item(x).is_some());
    assert_eq!(shop.presenter().len(), 3);
}

#[test]
fn test_broke_player_cannot_buy() {
    let mut shop = default_shop(7);
    let keybinds: Vec<Keybind> = shop.keybinds().collect();
    let before: Vec<Option<Item>> = shop.slots().iter().map(|s| s.item().copied()).collect();

    let mut player = Player::new(0);
    for ch in ['z', 'x', 'c'] {
        let action = action_for_key(press(ch), &keybinds).unwrap();
        assert_eq!(shop.apply(action, &mut player), None);
    }

    let after: Vec<Option<Item>> = shop.slots().iter().map(|s| s.item().copied()).collect();
    assert_eq!(before, after);
    assert!(player.inventory().is_empty());
}

#[test]
fn test_income_eventually_affords_an_item() {
    let mut shop = default_shop(99);
    let z = Keybind::new('z').unwrap();
    let price = shop.item(z).unwrap().cost();

    let mut player = Player::new(0).with_income(5);
    let mut ticks = 0;
    while !shop.check_purchase(z, &player).is_affordable() {
        player.accrue(TICK_MS);
        ticks += 1;
        assert!(ticks < 100_000, "income never caught up");
    }

    assert!(player.current_gold() >= price);
    let gold = player.current_gold();
    assert_eq!(shop.buy(z, &mut player).map(|i| i.cost()), Some(price));
    assert_eq!(player.current_gold(), gold - price);
}

#[test]
fn test_restart_key_restocks_and_resets() {
    let mut shop = default_shop(3);
    let keybinds: Vec<Keybind> = shop.keybinds().collect();
    let z = Keybind::new('z').unwrap();
    shop.remove_item(z);

    let mut player = Player::new(500);
    player.receive(Item::new(PowerupKind::ArrowRate, Grade::A, 80));

    let action = action_for_key(press('r'), &keybinds).unwrap();
    assert_eq!(action, ShopAction::Restart);
    player.reset(50);
    shop.apply(action, &mut player);

    assert_eq!(player.current_gold(), 50);
    assert!(player.inventory().is_empty());
    assert!(shop.item(z).is_some());
    assert_eq!(shop.presenter().len(), 3);
}

#[test]
fn test_same_seed_same_stock() {
    let a = default_shop(2024);
    let b = default_shop(2024);
    let items = |shop: &Shop<SimpleRng, TermScene>| -> Vec<Option<Item>> {
        shop.slots().iter().map(|s| s.item().copied()).collect()
    };
    assert_eq!(items(&a), items(&b));
}
