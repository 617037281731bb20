//! End-to-end persistence tests over the real SQLite medium.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use shelflife_core::{Category, Product, ProductQuery, SortOption};
use shelflife_store::{
    backup, PersistenceStore, ProductRepository, SqliteMedium, StoreConfig,
};

fn product(index: usize, with_image: bool) -> Product {
    let now = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    let expiry = (now + Duration::days(index as i64 % 20)).date_naive();
    let category = Category::ALL[index % Category::ALL.len()];

    // Small but realistic base64 JPEG payload stand-in.
    let image = with_image.then(|| format!("data:image/jpeg;base64,/9j/4AAQSkZJRg{index:04}=="));

    Product::new(
        format!("86905040{index:05}"),
        format!("Ürün {index}"),
        category,
        expiry,
        (index as i64 % 9) + 1,
        image,
        now,
    )
}

async fn sqlite_repo() -> ProductRepository<SqliteMedium> {
    let medium = SqliteMedium::new(StoreConfig::in_memory()).await.unwrap();
    ProductRepository::initialize(PersistenceStore::new(medium)).await
}

#[tokio::test]
async fn backup_roundtrip_with_hundred_products() {
    let products: Vec<Product> = (0..100).map(|i| product(i, true)).collect();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();

    let file = backup::export(&products, today).unwrap();
    assert_eq!(file.file_name, "stok_yedek_2024-06-15.json");

    let restored = backup::import(&file.contents).unwrap();
    assert_eq!(restored, products);
}

#[tokio::test]
async fn repository_survives_reload_from_same_database() {
    let medium = SqliteMedium::new(StoreConfig::in_memory()).await.unwrap();

    let mut repo = ProductRepository::initialize(PersistenceStore::new(medium.clone())).await;
    repo.add(product(1, false)).await.unwrap();
    repo.add(product(2, true)).await.unwrap();
    let written = repo.snapshot();

    // A fresh repository over the same medium sees the persisted state.
    let reloaded = ProductRepository::initialize(PersistenceStore::new(medium)).await;
    assert_eq!(reloaded.snapshot(), written);
}

#[tokio::test]
async fn import_fully_replaces_persisted_collection() {
    let mut repo = sqlite_repo().await;
    repo.add(product(1, false)).await.unwrap();
    repo.add(product(2, false)).await.unwrap();

    let incoming: Vec<Product> = (10..13).map(|i| product(i, false)).collect();
    let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
    let file = backup::export(&incoming, today).unwrap();

    let snapshot = repo.import(&file.contents).await.unwrap();
    assert_eq!(snapshot, incoming);
}

#[tokio::test]
async fn snapshot_feeds_query_without_touching_repository_order() {
    let mut repo = sqlite_repo().await;
    for i in 0..6 {
        repo.add(product(i, false)).await.unwrap();
    }

    let snapshot = repo.snapshot();
    let view = ProductQuery::new().sort(SortOption::QuantityDesc).run(&snapshot);
    assert_eq!(view.len(), snapshot.len());

    // The repository keeps insertion order regardless of any sorted view.
    let names: Vec<String> = repo.snapshot().iter().map(|p| p.name.clone()).collect();
    let expected: Vec<String> = (0..6).map(|i| format!("Ürün {i}")).collect();
    assert_eq!(names, expected);
}
