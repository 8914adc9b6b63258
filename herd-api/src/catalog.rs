use shared_types::GiftProduct;

/// The fixed product catalog the gift advisor recommends from.
///
/// Injected into the agent at startup rather than read as global state,
/// so tests can swap it out.
pub fn default_catalog() -> Vec<GiftProduct> {
    vec![
        GiftProduct {
            id: 1,
            name: "Tuberose Candle".to_string(),
            brand: "Diptyque".to_string(),
            price: 78,
            description: "Sophisticated floral candle".to_string(),
            interests: vec![
                "Design".to_string(),
                "Art".to_string(),
                "Luxury".to_string(),
            ],
        },
        GiftProduct {
            id: 2,
            name: "Premium Wine Set".to_string(),
            brand: "Vintage Selection".to_string(),
            price: 185,
            description: "Premium wines from Napa Valley".to_string(),
            interests: vec!["Wine".to_string(), "Business".to_string()],
        },
        GiftProduct {
            id: 3,
            name: "Artisan Coffee Set".to_string(),
            brand: "Blue Bottle".to_string(),
            price: 65,
            description: "Premium coffee with pour-over set".to_string(),
            interests: vec!["Coffee".to_string(), "Artisan".to_string()],
        },
    ]
}
