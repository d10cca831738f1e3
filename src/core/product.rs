//! # Product Fixture
//!
//! The page shows exactly one product, compiled in. Nothing here is ever
//! mutated at runtime; the view shares it through an `Arc`.

use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Artisan {
    pub name: String,
    pub bio: String,
}

/// A customer review. `rating` is 1–5.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Review {
    pub user: String,
    pub rating: u8,
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Already formatted for display, e.g. `"$45.00"`.
    pub price: String,
    /// Image URLs in gallery order. Opaque; never fetched.
    pub images: Vec<String>,
    pub artisan: Artisan,
    pub reviews: Vec<Review>,
}

/// The ceramic vase shown on the page.
pub fn fixture() -> Arc<Product> {
    Arc::new(Product {
        id: 1,
        name: "Handmade Ceramic Vase".to_string(),
        price: "$45.00".to_string(),
        images: vec![
            "https://tse3.mm.bing.net/th?id=OIP.IznRO5459ielOF9-4aVzbQHaHa&pid=Api&P=0&h=180"
                .to_string(),
            "https://tse4.mm.bing.net/th?id=OIP.ySoH33YdlZb_W-9NOdcbRAHaHa&pid=Api&P=0&h=180"
                .to_string(),
        ],
        artisan: Artisan {
            name: "Maria Lopez".to_string(),
            bio: "A skilled ceramic artist from Mexico with 20 years of experience.".to_string(),
        },
        reviews: vec![
            Review {
                user: "Alice".to_string(),
                rating: 5,
                comment: "Beautiful craftsmanship!".to_string(),
            },
            Review {
                user: "John".to_string(),
                rating: 4,
                comment: "Great quality, but a bit pricey.".to_string(),
            },
        ],
    })
}
