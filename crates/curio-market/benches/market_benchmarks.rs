//! Benchmarks for the listing registry and proceeds ledger.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use curio_market::{ListingBook, ProceedsLedger};
use curio_nft::TokenId;
use curio_token::{Address, Amount};

fn addresses(n: usize) -> Vec<Address> {
    (0..n)
        .map(|i| {
            let mut raw = [0u8; 32];
            raw[..8].copy_from_slice(&(i as u64).to_le_bytes());
            Address::from_array(raw)
        })
        .collect()
}

fn bench_listing_book(c: &mut Criterion) {
    let sellers = addresses(1_000);
    let collection = Address::from_array([0xAB; 32]);

    c.bench_function("listing_book_put", |b| {
        let mut book = ListingBook::new();
        let mut i = 0u64;
        b.iter(|| {
            let seller = sellers[(i as usize) % sellers.len()].clone();
            book.put(
                collection.clone(),
                TokenId::new(i),
                seller,
                Amount::from_units(i + 1),
            );
            i += 1;
        });
    });

    c.bench_function("listing_book_get", |b| {
        let mut book = ListingBook::new();
        for i in 0..1_000u64 {
            book.put(
                collection.clone(),
                TokenId::new(i),
                sellers[(i as usize) % sellers.len()].clone(),
                Amount::from_units(i + 1),
            );
        }
        let mut i = 0u64;
        b.iter(|| {
            let listing = book.get(black_box(&collection), TokenId::new(i % 1_000));
            i += 1;
            black_box(listing)
        });
    });
}

fn bench_proceeds_ledger(c: &mut Criterion) {
    let sellers = addresses(1_000);

    c.bench_function("proceeds_credit", |b| {
        let mut ledger = ProceedsLedger::new();
        let mut i = 0usize;
        b.iter(|| {
            let seller = &sellers[i % sellers.len()];
            ledger
                .credit(seller, Amount::from_units(1))
                .expect("credit");
            i += 1;
        });
    });

    c.bench_function("proceeds_credit_then_clear", |b| {
        let mut ledger = ProceedsLedger::new();
        let seller = &sellers[0];
        b.iter(|| {
            ledger
                .credit(seller, Amount::from_units(100))
                .expect("credit");
            black_box(ledger.clear(seller))
        });
    });
}

criterion_group!(benches, bench_listing_book, bench_proceeds_ledger);
criterion_main!(benches);
