//! Conservation tests for marketplace accounting.
//!
//! The marketplace account is the counterparty to every purchase and
//! withdrawal, so at any quiescent point the sum of all proceeds balances
//! must equal the marketplace's bank balance.

use curio_market::Marketplace;
use curio_nft::{CollectionClient, TokenId};
use curio_token::{Address, Amount, BankClient, Wallet};
use std::sync::Arc;

struct Network {
    collections: Arc<CollectionClient>,
    bank: Arc<BankClient>,
    market: Marketplace,
}

fn network() -> Network {
    let collections = Arc::new(CollectionClient::new());
    let bank = Arc::new(BankClient::new());
    let market =
        Marketplace::new(Arc::clone(&collections), Arc::clone(&bank)).expect("marketplace");
    Network {
        collections,
        bank,
        market,
    }
}

async fn mint_listed(net: &Network, collection: &Address, seller: &Wallet, price: Amount) -> TokenId {
    let token_id = net
        .collections
        .mint(collection, seller.address(), "ipfs://item")
        .await
        .expect("mint");
    net.collections
        .approve(
            seller.address(),
            collection,
            token_id,
            Some(net.market.address()),
        )
        .await
        .expect("approve");
    net.market
        .list_item(seller.address(), collection, token_id, price)
        .await
        .expect("list");
    token_id
}

#[tokio::test]
async fn proceeds_total_matches_marketplace_balance() {
    let net = network();
    let collection = net.collections.create_collection("Mixed Lot", "LOT").await;

    let sellers: Vec<Wallet> = (0..3).map(|_| Wallet::generate().expect("seller")).collect();
    let buyer = Wallet::generate().expect("buyer");
    net.bank
        .faucet(buyer.address(), Amount::curio(10.0))
        .await
        .expect("faucet");

    // Three sales at different prices, one per seller.
    let prices = [Amount::curio(0.1), Amount::curio(0.25), Amount::curio(1.5)];
    for (seller, price) in sellers.iter().zip(prices) {
        let token_id = mint_listed(&net, &collection, seller, price).await;
        net.market
            .buy_item(&buyer, &collection, token_id, price)
            .await
            .expect("buy");
    }

    let mut expected_total = Amount::ZERO;
    for (seller, price) in sellers.iter().zip(prices) {
        assert_eq!(net.market.get_proceeds(seller.address()).await, price);
        expected_total = expected_total.saturating_add(price);
    }
    assert_eq!(
        net.bank.balance(net.market.address()).await.expect("balance"),
        expected_total
    );

    // One seller withdraws; the books still balance.
    let withdrawn = net
        .market
        .withdraw_proceeds(sellers[2].address())
        .await
        .expect("withdraw");
    assert_eq!(withdrawn, prices[2]);
    assert_eq!(
        net.bank.balance(net.market.address()).await.expect("balance"),
        expected_total.saturating_sub(prices[2])
    );

    // Remaining sellers withdraw; the marketplace account empties.
    for seller in &sellers[..2] {
        net.market
            .withdraw_proceeds(seller.address())
            .await
            .expect("withdraw");
    }
    assert!(
        net.bank
            .balance(net.market.address())
            .await
            .expect("balance")
            .is_zero()
    );
}

#[tokio::test]
async fn overpayment_stays_on_the_books_until_withdrawn() {
    let net = network();
    let collection = net.collections.create_collection("Mixed Lot", "LOT").await;
    let seller = Wallet::generate().expect("seller");
    let buyer = Wallet::generate().expect("buyer");

    net.bank
        .faucet(buyer.address(), Amount::curio(1.0))
        .await
        .expect("faucet");

    let price = Amount::curio(0.1);
    let paid = Amount::curio(0.3);
    let token_id = mint_listed(&net, &collection, &seller, price).await;
    net.market
        .buy_item(&buyer, &collection, token_id, paid)
        .await
        .expect("buy");

    // The whole payment (price + excess) is in the marketplace account and
    // owed to the seller.
    assert_eq!(
        net.bank.balance(net.market.address()).await.expect("balance"),
        paid
    );
    assert_eq!(net.market.get_proceeds(seller.address()).await, paid);

    let withdrawn = net
        .market
        .withdraw_proceeds(seller.address())
        .await
        .expect("withdraw");
    assert_eq!(withdrawn, paid);
    assert_eq!(
        net.bank.balance(seller.address()).await.expect("balance"),
        paid
    );
}
