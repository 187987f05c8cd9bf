use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tower_shop::core::{generate_item, Item, NullPresenter, Player, Shop, SimpleRng};
use tower_shop::types::{Grade, Keybind, PowerupKind};

fn bench_generate_item(c: &mut Criterion) {
    let mut rng = SimpleRng::new(12345);

    c.bench_function("generate_item", |b| {
        b.iter(|| black_box(generate_item(&mut rng)));
    });
}

fn bench_buy_and_restock(c: &mut Criterion) {
    let z = Keybind::new('z').unwrap();
    let mut shop = Shop::new(&[z], SimpleRng::new(12345), NullPresenter::new());
    shop.stock_all();

    c.bench_function("buy_and_restock", |b| {
        b.iter(|| {
            let mut player = Player::new(black_box(1_000));
            shop.buy(z, &mut player)
        })
    });
}

fn bench_rejected_purchase(c: &mut Criterion) {
    let z = Keybind::new('z').unwrap();
    let mut shop = Shop::new(&[z], SimpleRng::new(12345), NullPresenter::new());
    shop.add_item(z, Some(Item::new(PowerupKind::Tornado, Grade::S, 150)));
    let mut player = Player::new(10);

    c.bench_function("rejected_purchase", |b| {
        b.iter(|| shop.buy(black_box(z), &mut player))
    });
}

criterion_group!(
    benches,
    bench_generate_item,
    bench_buy_and_restock,
    bench_rejected_purchase
);
criterion_main!(benches);
