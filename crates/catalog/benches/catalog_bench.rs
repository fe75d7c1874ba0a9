use catalog::{
    CatalogService, CreateProduct, InMemoryProductRepository, Price, ProductListView, ProductView,
    UpdateProduct,
};
use criterion::{Criterion, criterion_group, criterion_main};
use rust_decimal::Decimal;

fn widget(stock: i64) -> CreateProduct {
    CreateProduct::new("Widget", "Benchmark widget", Decimal::new(1999, 2), "USD", stock)
}

fn bench_create_product(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();

    c.bench_function("catalog/create_product", |b| {
        b.iter(|| {
            rt.block_on(async {
                let service = CatalogService::new(InMemoryProductRepository::new());
                service.create_product(widget(10)).await.unwrap();
            });
        });
    });
}

fn bench_update_product(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = CatalogService::new(InMemoryProductRepository::new());
    let created = rt.block_on(async { service.create_product(widget(10)).await.unwrap() });

    c.bench_function("catalog/update_product", |b| {
        b.iter(|| {
            rt.block_on(async {
                service
                    .update_product(
                        created.id,
                        UpdateProduct::new("Gadget", "", Decimal::new(2500, 2), "EUR", 3),
                    )
                    .await
                    .unwrap();
            });
        });
    });
}

fn bench_stock_cycle(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = CatalogService::new(InMemoryProductRepository::new());
    let created = rt.block_on(async { service.create_product(widget(10)).await.unwrap() });

    c.bench_function("catalog/add_then_reduce_stock", |b| {
        b.iter(|| {
            rt.block_on(async {
                service.add_stock(created.id, 5).await.unwrap();
                service.reduce_stock(created.id, 5).await.unwrap();
            });
        });
    });
}

fn bench_list_1000(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let service = CatalogService::new(InMemoryProductRepository::new());

    // Every third product is out of stock
    rt.block_on(async {
        for i in 0..1000 {
            service.create_product(widget(i % 3)).await.unwrap();
        }
    });

    c.bench_function("catalog/list_1000_products", |b| {
        b.iter(|| {
            rt.block_on(async {
                let list: ProductListView = service.get_all_products().await.unwrap();
                assert_eq!(list.total_count, 1000);
            });
        });
    });
}

fn bench_price_normalization(c: &mut Criterion) {
    c.bench_function("catalog/price_from_f64", |b| {
        b.iter(|| Price::from_f64(std::hint::black_box(9.995)).unwrap());
    });
}

fn bench_view_projection(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let repository = InMemoryProductRepository::new();
    let service = CatalogService::new(repository.clone());
    let created = rt.block_on(async { service.create_product(widget(10)).await.unwrap() });
    let product = rt.block_on(async {
        use catalog::ProductRepository;
        repository.find_by_id(created.id).await.unwrap().unwrap()
    });

    c.bench_function("catalog/project_view", |b| {
        b.iter(|| ProductView::from(std::hint::black_box(&product)));
    });
}

criterion_group!(
    benches,
    bench_create_product,
    bench_update_product,
    bench_stock_cycle,
    bench_list_1000,
    bench_price_normalization,
    bench_view_projection,
);
criterion_main!(benches);
