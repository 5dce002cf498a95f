//! Fixed product catalog used by data-entry forms. Filter options are
//! derived from loaded data instead.

pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
}

pub const PRODUCTS: &[Product] = &[
    Product { slug: "bakuchiol-retinol", name: "Bakuchiol Retinol" },
    Product { slug: "bonavita-coffee", name: "Bonavita Coffee" },
    Product { slug: "combo-gold-24k", name: "ComboGold24k" },
    Product { slug: "dg", name: "DG" },
    Product { slug: "dragon-blood-cream", name: "Dragon Blood Cream" },
    Product { slug: "dan-kinoki", name: "Dán Kinoki" },
    Product { slug: "fitgum-cafe-20x", name: "Fitgum CAFE 20X" },
    Product { slug: "gel-da-day", name: "Gel Dạ Dày" },
    Product { slug: "gel-tri", name: "Gel Trĩ" },
    Product { slug: "gel-xk-phi", name: "Gel XK Phi" },
    Product { slug: "gel-xk-thai", name: "Gel XK Thái" },
    Product { slug: "gel-xuong-khop", name: "Gel Xương Khớp" },
    Product { slug: "glutathione-collagen", name: "Glutathione Collagen" },
    Product { slug: "glutathione-collagen-new", name: "Glutathione Collagen NEW" },
    Product { slug: "kem-body", name: "Kem Body" },
    Product { slug: "keo-tao", name: "Kẹo Táo" },
    Product { slug: "nam-dr-hancy", name: "Nám DR Hancy" },
    Product { slug: "serum-sam", name: "Serum Sâm" },
    Product { slug: "sua-tam-cuishifan", name: "Sữa tắm CUISHIFAN" },
];

/// Catalog entry for a product cell, matched by slug or by name
/// (trimmed, case-insensitive).
pub fn find_product(value: &str) -> Option<&'static Product> {
    let wanted = value.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }
    PRODUCTS
        .iter()
        .find(|p| p.slug == wanted || p.name.to_lowercase() == wanted)
}
