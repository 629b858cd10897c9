use comanda::application::cart::CartLine;
use comanda::application::engine::{Bill, EngineConfig, OrderEngine};
use comanda::domain::menu::{Customization, MenuItem};
use comanda::domain::money::Money;
use comanda::infrastructure::in_memory::InMemoryOrderStore;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::sync::Arc;

fn random_line(rng: &mut StdRng) -> CartLine {
    let cents: i64 = rng.gen_range(100..10_000);
    let price = Money::new(Decimal::new(cents, 2));
    let additions = (0..rng.gen_range(0..4))
        .map(|i| format!("Adicional {}", i + 1))
        .collect();

    CartLine {
        item: MenuItem {
            id: format!("{}", rng.gen_range(1..100)),
            name: "Prato do Dia".into(),
            description: String::new(),
            price,
            category: "Pratos Principais".into(),
            available: true,
        },
        quantity: rng.gen_range(1..5),
        customization: Customization {
            additions,
            removals: Vec::new(),
            notes: String::new(),
        },
    }
}

/// The bill invariant over arbitrary sessions: the subtotal always equals the
/// hand-computed sum of (base + surcharge * additions) * quantity over every
/// line of every non-cancelled order.
#[tokio::test]
async fn test_bill_matches_hand_computed_totals_over_random_sessions() {
    let mut rng = StdRng::seed_from_u64(190);
    let config = EngineConfig::default();
    let engine = OrderEngine::new(Arc::new(InMemoryOrderStore::new()), config);

    let surcharge = config.surcharge_per_addition;
    let mut expected_subtotal = Money::ZERO;

    for _ in 0..50 {
        let lines: Vec<CartLine> = (0..rng.gen_range(1..6))
            .map(|_| random_line(&mut rng))
            .collect();
        let order = engine.checkout(&lines).await.unwrap();

        let hand_computed = lines.iter().fold(Money::ZERO, |acc, line| {
            let unit = line.item.price + surcharge * line.customization.addition_count();
            acc + unit * line.quantity
        });
        assert_eq!(order.total, hand_computed);

        // Cancel roughly a third of the orders; they must drop off the bill.
        if rng.gen_bool(0.33) {
            engine.cancel(order.id).await.unwrap();
        } else {
            expected_subtotal += hand_computed;
        }
    }

    let bill = engine.bill().await.unwrap();
    assert_eq!(bill.subtotal, expected_subtotal);
    assert_eq!(
        bill.total,
        bill.subtotal + bill.service_fee,
    );
}

#[tokio::test]
async fn test_ids_stay_unique_and_increasing_over_random_sessions() {
    let mut rng = StdRng::seed_from_u64(191);
    let engine = OrderEngine::new(Arc::new(InMemoryOrderStore::new()), EngineConfig::default());

    let mut last_id = 0;
    for _ in 0..30 {
        let order = engine.checkout(&[random_line(&mut rng)]).await.unwrap();
        assert!(order.id > last_id);
        last_id = order.id;
        if rng.gen_bool(0.5) {
            engine.cancel(order.id).await.unwrap();
        }
    }

    let all = engine.orders().await.unwrap();
    assert_eq!(all.len(), 30);
    let bill = engine.bill().await.unwrap();
    assert_eq!(bill.subtotal, Bill::for_orders(&all, dec!(0)).subtotal);
}
