//! In-memory purchase ledger
//!
//! Demo data layer behind the panel: raw purchase records, aggregated per
//! customer on every lookup. A real deployment would answer the same query
//! from its database.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tourdesk_types::{CustomerRow, Product, ProductId};

/// One raw purchase, as a sales backend would record it.
#[derive(Debug, Clone)]
pub struct PurchaseRecord {
    pub product_id: ProductId,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: Decimal,
    pub purchased_at: NaiveDate,
}

#[derive(Debug, Clone, Default)]
pub struct PurchaseLedger {
    products: Vec<Product>,
    purchases: Vec<PurchaseRecord>,
}

impl PurchaseLedger {
    pub fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Customers that purchased `product_id` within the date bounds
    /// (inclusive on both ends; `None` leaves a side unbounded), one row per
    /// customer with purchase count, summed spend and latest purchase date,
    /// ordered by spend descending.
    pub fn customers_for(
        &self,
        product_id: ProductId,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<CustomerRow> {
        let mut by_customer: BTreeMap<&str, CustomerRow> = BTreeMap::new();

        for record in &self.purchases {
            if record.product_id != product_id {
                continue;
            }
            if from.is_some_and(|bound| record.purchased_at < bound) {
                continue;
            }
            if to.is_some_and(|bound| record.purchased_at > bound) {
                continue;
            }

            let row = by_customer
                .entry(record.customer_email.as_str())
                .or_insert_with(|| CustomerRow {
                    customer_name: record.customer_name.clone(),
                    customer_email: record.customer_email.clone(),
                    purchase_count: 0,
                    total_spent: Decimal::ZERO,
                    last_purchase: record.purchased_at,
                });
            row.purchase_count += 1;
            row.total_spent += record.amount;
            if record.purchased_at > row.last_purchase {
                row.last_purchase = record.purchased_at;
            }
        }

        let mut rows: Vec<CustomerRow> = by_customer.into_values().collect();
        rows.sort_by(|a, b| b.total_spent.cmp(&a.total_spent));
        rows
    }

    /// Seeded demo ledger.
    pub fn sample() -> Self {
        let city_tour = Product::new(ProductId::new(), "City Walking Tour");
        let beach_pass = Product::new(ProductId::new(), "Beach Pass");
        let wine_evening = Product::new(ProductId::new(), "Wine Tasting Evening");
        let harbor_cruise = Product::new(ProductId::new(), "Harbor Cruise");
        let mountain_trip = Product::new(ProductId::new(), "Mountain Excursion");

        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date");
        let eur = |cents: i64| Decimal::new(cents, 2);

        let record = |product: &Product, name: &str, email: &str, amount: Decimal, day| {
            PurchaseRecord {
                product_id: product.id,
                customer_name: name.to_string(),
                customer_email: email.to_string(),
                amount,
                purchased_at: day,
            }
        };

        let purchases = vec![
            record(
                &city_tour,
                "Ada Rossi",
                "ada.rossi@example.com",
                eur(4500),
                date(2026, 3, 2),
            ),
            record(
                &city_tour,
                "Ada Rossi",
                "ada.rossi@example.com",
                eur(4500),
                date(2026, 5, 18),
            ),
            record(
                &city_tour,
                "Bruno Bianchi",
                "bruno.bianchi@example.com",
                eur(9000),
                date(2026, 4, 11),
            ),
            record(
                &beach_pass,
                "Carla Greco",
                "carla.greco@example.com",
                eur(2550),
                date(2026, 6, 1),
            ),
            record(
                &beach_pass,
                "Carla Greco",
                "carla.greco@example.com",
                eur(2550),
                date(2026, 7, 14),
            ),
            record(
                &beach_pass,
                "Dario Fontana",
                "dario.fontana@example.com",
                eur(5100),
                date(2026, 6, 20),
            ),
            record(
                &beach_pass,
                "Elena Moretti",
                "elena.moretti@example.com",
                eur(2550),
                date(2026, 8, 2),
            ),
            record(
                &wine_evening,
                "Ada Rossi",
                "ada.rossi@example.com",
                eur(6500),
                date(2026, 2, 27),
            ),
            record(
                &wine_evening,
                "Elena Moretti",
                "elena.moretti@example.com",
                eur(13000),
                date(2026, 3, 30),
            ),
            record(
                &harbor_cruise,
                "Bruno Bianchi",
                "bruno.bianchi@example.com",
                eur(3200),
                date(2026, 5, 9),
            ),
            record(
                &mountain_trip,
                "Dario Fontana",
                "dario.fontana@example.com",
                eur(7800),
                date(2026, 1, 17),
            ),
        ];

        Self {
            products: vec![city_tour, beach_pass, wine_evening, harbor_cruise, mountain_trip],
            purchases,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
