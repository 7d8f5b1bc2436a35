//! Demo data for a fresh storage.
//!
//! The catalog is written straight through the repositories, while the demo
//! order goes through the real cart and checkout services so its totals are
//! exactly what a live checkout would have produced.

use thiserror::Error;
use tracing::info;

use crate::{
    domain::{
        carts::{
            CartsService, CartsServiceError, MemCartsService,
            models::{LineRef, NewCartItem},
        },
        catalog::{
            MemCatalogRepository,
            models::{
                CategoryId, NewCategory, NewProduct, NewService, NewStore, ProductId, ServiceType,
                StoreId,
            },
        },
        orders::{
            MemOrdersService, OrderStatus, OrdersService, OrdersServiceError,
            models::{NewOrder, PaymentMethod},
        },
    },
    ids::UserId,
    storage::{Storage, Tables},
};

/// The shopper every demo flow runs as.
pub const DEMO_USER_ID: i64 = 1;

/// The retailer who owns the demo stores.
pub const DEMO_RETAILER_ID: i64 = 2;

/// A seeding step that went through a real service and was refused.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error(transparent)]
    Carts(#[from] CartsServiceError),

    #[error(transparent)]
    Orders(#[from] OrdersServiceError),
}

/// Fill an empty storage with the demo catalog, a cart and one packed order.
///
/// # Errors
///
/// Returns [`SeedError`] when the demo order is refused by the cart or
/// checkout services, which only happens if the seed data itself is broken.
pub async fn demo_data(storage: &Storage) -> Result<(), SeedError> {
    let catalog = seed_catalog(storage).await;

    seed_demo_order(storage, &catalog).await?;

    info!(
        categories = 7,
        stores = 3,
        products = 18,
        services = 4,
        "demo data seeded"
    );

    Ok(())
}

/// The seeded rows later steps refer back to.
struct SeededCatalog {
    boutique: StoreId,
    sundress: ProductId,
}

#[expect(clippy::too_many_lines, reason = "a plain listing of the demo catalog")]
async fn seed_catalog(storage: &Storage) -> SeededCatalog {
    let repository = MemCatalogRepository::new();
    let mut tables = storage.write().await;

    let clothing = category(&repository, &mut tables, "Clothing", "fa-tshirt");
    let footwear = category(&repository, &mut tables, "Footwear", "fa-shoe-prints");
    let accessories = category(&repository, &mut tables, "Accessories", "fa-gem");
    category(&repository, &mut tables, "Beauty", "fa-spray-can");
    category(&repository, &mut tables, "Tailoring", "fa-cut");
    let menswear = category(&repository, &mut tables, "Men's Fashion", "fa-male");
    let womenswear = category(&repository, &mut tables, "Women's Fashion", "fa-female");

    let retailer = UserId::from_i64(DEMO_RETAILER_ID);

    let hub = repository
        .create_store(
            &mut tables,
            NewStore {
                owner: retailer,
                name: "Trendy Fashion Hub".to_string(),
                description: "Latest fashion trends for all occasions".to_string(),
                address: "123 Fashion St, City".to_string(),
                rating: 4.7,
                review_count: 156,
                latitude: 12.9716,
                longitude: 77.5946,
                distance: 0.4,
                delivery_time: 25,
                image_url: "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04"
                    .to_string(),
            },
        )
        .id;

    let boutique = repository
        .create_store(
            &mut tables,
            NewStore {
                owner: retailer,
                name: "Fashion Boutique".to_string(),
                description: "Premium fashion with personalized service".to_string(),
                address: "456 Style Ave, City".to_string(),
                rating: 4.5,
                review_count: 124,
                latitude: 12.9769,
                longitude: 77.6014,
                distance: 0.8,
                delivery_time: 30,
                image_url: "https://images.unsplash.com/photo-1567401893414-76b7b1e5a7a5"
                    .to_string(),
            },
        )
        .id;

    let avenue = repository
        .create_store(
            &mut tables,
            NewStore {
                owner: retailer,
                name: "Style Avenue".to_string(),
                description: "Affordable and trendy fashion for everyone".to_string(),
                address: "789 Fashion Blvd, City".to_string(),
                rating: 4.2,
                review_count: 98,
                latitude: 12.978,
                longitude: 77.6108,
                distance: 1.2,
                delivery_time: 35,
                image_url: "https://images.unsplash.com/photo-1555529669-e69e7aa0ba9a"
                    .to_string(),
            },
        )
        .id;

    let products = [
        NewProduct {
            store_id: hub,
            category_id: Some(clothing),
            name: "Summer Floral Dress".to_string(),
            description: "Light and airy floral dress perfect for summer outings".to_string(),
            original_price: 1999,
            discount_percentage: 20,
            final_price: 1599,
            min_acceptable_price: Some(1299),
            stock: 15,
            rating: 4.5,
            review_count: 28,
            image_url: "https://images.unsplash.com/photo-1525507119028-ed4c629a60a3".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(clothing),
            name: "Premium Denim Jacket".to_string(),
            description: "High-quality denim jacket with comfortable fit".to_string(),
            original_price: 2499,
            discount_percentage: 15,
            final_price: 2124,
            min_acceptable_price: Some(1899),
            stock: 10,
            rating: 4.6,
            review_count: 36,
            image_url: "https://images.unsplash.com/photo-1543076447-215ad9ba6923".to_string(),
        },
        NewProduct {
            store_id: avenue,
            category_id: Some(footwear),
            name: "Canvas Sneakers".to_string(),
            description: "Comfortable canvas sneakers for everyday wear".to_string(),
            original_price: 1299,
            discount_percentage: 25,
            final_price: 974,
            min_acceptable_price: Some(799),
            stock: 20,
            rating: 4.3,
            review_count: 42,
            image_url: "https://images.unsplash.com/photo-1603344797033-f0f4f587ab60".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(accessories),
            name: "Leather Crossbody Bag".to_string(),
            description: "Stylish leather crossbody bag with multiple compartments".to_string(),
            original_price: 3499,
            discount_percentage: 10,
            final_price: 3149,
            min_acceptable_price: Some(2799),
            stock: 8,
            rating: 4.7,
            review_count: 19,
            image_url: "https://images.unsplash.com/photo-1591047139829-d91aecb6caea".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(clothing),
            name: "Floral Maxi Dress".to_string(),
            description: "Elegant floral maxi dress for special occasions".to_string(),
            original_price: 1899,
            discount_percentage: 20,
            final_price: 1519,
            min_acceptable_price: Some(1299),
            stock: 12,
            rating: 4.5,
            review_count: 31,
            image_url: "https://images.unsplash.com/photo-1595777457583-95e059d581b8".to_string(),
        },
        NewProduct {
            store_id: avenue,
            category_id: Some(clothing),
            name: "Summer Wrap Dress".to_string(),
            description: "Comfortable wrap dress for summer days".to_string(),
            original_price: 1699,
            discount_percentage: 15,
            final_price: 1444,
            min_acceptable_price: Some(1199),
            stock: 14,
            rating: 4.3,
            review_count: 27,
            image_url: "https://images.unsplash.com/photo-1562572159-4efc207f5aff".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(clothing),
            name: "Floral Print Midi Dress".to_string(),
            description: "Beautiful floral midi dress for casual wear".to_string(),
            original_price: 1499,
            discount_percentage: 10,
            final_price: 1349,
            min_acceptable_price: Some(1099),
            stock: 18,
            rating: 4.7,
            review_count: 34,
            image_url: "https://images.unsplash.com/photo-1617019114583-affb34d1b3cd".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(clothing),
            name: "Embroidered Sundress".to_string(),
            description: "Beautiful embroidered sundress with adjustable straps".to_string(),
            original_price: 1999,
            discount_percentage: 25,
            final_price: 1499,
            min_acceptable_price: Some(1199),
            stock: 10,
            rating: 4.6,
            review_count: 22,
            image_url: "https://images.unsplash.com/photo-1623609163859-ca93d401e835".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(menswear),
            name: "Crisp White Formal Shirt".to_string(),
            description: "Premium cotton white formal shirt for a polished look".to_string(),
            original_price: 1799,
            discount_percentage: 15,
            final_price: 1529,
            min_acceptable_price: Some(1299),
            stock: 25,
            rating: 4.7,
            review_count: 48,
            image_url: "https://images.unsplash.com/photo-1603252109303-2751441dd157".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(menswear),
            name: "Blue Striped Formal Shirt".to_string(),
            description: "Elegant blue striped formal shirt for office and special occasions"
                .to_string(),
            original_price: 1899,
            discount_percentage: 10,
            final_price: 1709,
            min_acceptable_price: Some(1499),
            stock: 18,
            rating: 4.5,
            review_count: 32,
            image_url: "https://images.unsplash.com/photo-1607345366928-199ea26cfe3e".to_string(),
        },
        NewProduct {
            store_id: avenue,
            category_id: Some(menswear),
            name: "Classic Black Trousers".to_string(),
            description: "Tailored black formal trousers with perfect fit and comfort".to_string(),
            original_price: 2499,
            discount_percentage: 20,
            final_price: 1999,
            min_acceptable_price: Some(1799),
            stock: 15,
            rating: 4.8,
            review_count: 37,
            image_url: "https://images.unsplash.com/photo-1473966968600-fa801b869a1a".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(menswear),
            name: "Navy Blue Slim Fit Pants".to_string(),
            description: "Modern navy blue slim fit formal pants for a stylish look".to_string(),
            original_price: 2299,
            discount_percentage: 15,
            final_price: 1954,
            min_acceptable_price: Some(1699),
            stock: 12,
            rating: 4.6,
            review_count: 29,
            image_url: "https://images.unsplash.com/photo-1584865288642-42078afe6942".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(womenswear),
            name: "Pearl Necklace Set".to_string(),
            description: "Elegant pearl necklace and earring set for special occasions"
                .to_string(),
            original_price: 3499,
            discount_percentage: 10,
            final_price: 3149,
            min_acceptable_price: Some(2899),
            stock: 8,
            rating: 4.9,
            review_count: 26,
            image_url: "https://images.unsplash.com/photo-1599643478518-a784e5dc4c8f".to_string(),
        },
        NewProduct {
            store_id: avenue,
            category_id: Some(womenswear),
            name: "Designer Silk Scarf".to_string(),
            description: "Luxury silk scarf with beautiful prints for a touch of elegance"
                .to_string(),
            original_price: 1999,
            discount_percentage: 5,
            final_price: 1899,
            min_acceptable_price: Some(1699),
            stock: 10,
            rating: 4.7,
            review_count: 18,
            image_url: "https://images.unsplash.com/photo-1584917865442-de89df76afd3".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(footwear),
            name: "Urban White Sneakers".to_string(),
            description: "Trendy white sneakers for casual everyday wear".to_string(),
            original_price: 2499,
            discount_percentage: 20,
            final_price: 1999,
            min_acceptable_price: Some(1799),
            stock: 20,
            rating: 4.6,
            review_count: 52,
            image_url: "https://images.unsplash.com/photo-1525966222134-fcfa99b8ae77".to_string(),
        },
        NewProduct {
            store_id: boutique,
            category_id: Some(footwear),
            name: "Sports Performance Sneakers".to_string(),
            description: "High-performance sports sneakers with advanced comfort technology"
                .to_string(),
            original_price: 3499,
            discount_percentage: 15,
            final_price: 2974,
            min_acceptable_price: Some(2699),
            stock: 15,
            rating: 4.8,
            review_count: 64,
            image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff".to_string(),
        },
        NewProduct {
            store_id: avenue,
            category_id: Some(accessories),
            name: "Classic Leather Wallet".to_string(),
            description: "Premium genuine leather wallet with multiple compartments".to_string(),
            original_price: 1299,
            discount_percentage: 10,
            final_price: 1169,
            min_acceptable_price: Some(999),
            stock: 25,
            rating: 4.5,
            review_count: 38,
            image_url: "https://images.unsplash.com/photo-1627123424574-724758594e93".to_string(),
        },
        NewProduct {
            store_id: hub,
            category_id: Some(accessories),
            name: "Stainless Steel Watch".to_string(),
            description: "Elegant stainless steel watch for a sophisticated look".to_string(),
            original_price: 4999,
            discount_percentage: 20,
            final_price: 3999,
            min_acceptable_price: Some(3599),
            stock: 8,
            rating: 4.8,
            review_count: 45,
            image_url: "https://images.unsplash.com/photo-1542496658-e33a6d0d50f6".to_string(),
        },
    ];

    let mut sundress = None;

    for product in products {
        let is_sundress = product.name == "Embroidered Sundress";
        let created = repository.create_product(&mut tables, product);

        if is_sundress {
            sundress = Some(created.id);
        }
    }

    let services = [
        NewService {
            store_id: hub,
            name: "Glamour Beauty Parlour".to_string(),
            description: "Specialized in haircuts, facials, and makeup".to_string(),
            service_type: ServiceType::Beauty,
            price: 499,
            duration: 60,
            rating: 4.8,
            review_count: 112,
            image_url: "https://images.unsplash.com/photo-1470259078422-826894b933aa".to_string(),
        },
        NewService {
            store_id: boutique,
            name: "Radiance Beauty Studio".to_string(),
            description: "Premium beauty services with experienced professionals".to_string(),
            service_type: ServiceType::Beauty,
            price: 699,
            duration: 90,
            rating: 4.6,
            review_count: 98,
            image_url: "https://images.unsplash.com/photo-1560066984-138dadb4c035".to_string(),
        },
        NewService {
            store_id: avenue,
            name: "Fashion Tailors".to_string(),
            description: "Expert tailoring for all your clothing alterations".to_string(),
            service_type: ServiceType::Tailoring,
            price: 299,
            duration: 45,
            rating: 4.7,
            review_count: 87,
            image_url: "https://images.unsplash.com/photo-1597633125097-5a9961e1f03d".to_string(),
        },
        NewService {
            store_id: hub,
            name: "Perfect Fit Tailoring".to_string(),
            description: "Personalized tailoring services for the perfect fit".to_string(),
            service_type: ServiceType::Tailoring,
            price: 399,
            duration: 60,
            rating: 4.5,
            review_count: 76,
            image_url: "https://images.unsplash.com/photo-1597633244018-0201d0158951".to_string(),
        },
    ];

    for service in services {
        repository.create_service(&mut tables, service);
    }

    SeededCatalog {
        boutique,
        // The sundress is in the listing above, so the id is always captured.
        sundress: sundress.unwrap_or_else(|| ProductId::from_i64(8)),
    }
}

fn category(
    repository: &MemCatalogRepository,
    tables: &mut Tables,
    name: &str,
    icon: &str,
) -> CategoryId {
    repository
        .create_category(
            tables,
            NewCategory {
                name: name.to_string(),
                icon: icon.to_string(),
            },
        )
        .id
}

/// One already-packed order for the demo shopper, with a haggled price.
async fn seed_demo_order(storage: &Storage, catalog: &SeededCatalog) -> Result<(), SeedError> {
    let shopper = UserId::from_i64(DEMO_USER_ID);

    let carts = MemCartsService::new(storage.clone());
    let orders = MemOrdersService::new(storage.clone());

    carts
        .add_item(
            shopper,
            NewCartItem {
                line: LineRef::Product(catalog.sundress),
                quantity: 1,
                negotiated_price: Some(1299),
            },
        )
        .await?;

    let order = orders
        .create_from_cart(
            shopper,
            NewOrder {
                store_id: catalog.boutique,
                payment_method: PaymentMethod::Cod,
                delivery_address: "123 Main St, City".to_string(),
            },
        )
        .await?;

    orders.update_status(order.id, OrderStatus::Packed).await?;

    Ok(())
}
