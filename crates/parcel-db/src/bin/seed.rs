//! # Seed Data Generator
//!
//! Populates the database with sample customers, parcels, and scan
//! timelines for development.
//!
//! ## Usage
//! ```bash
//! # Seed into the default dev database
//! cargo run -p parcel-db --bin seed
//!
//! # Specify database path
//! cargo run -p parcel-db --bin seed -- --db ./data/parcels.db
//!
//! # Wipe existing rows first
//! cargo run -p parcel-db --bin seed -- --reset
//! ```
//!
//! ## Generated Data
//! Three customers and five parcels, one per interesting shape:
//! - delivered, with a full four-scan timeline and delivered_at set
//! - in_transit, mid-journey with two scans
//! - out_for_delivery, three scans
//! - return, three scans ending in a terminal return
//! - new, freshly created with no scans at all
//!
//! Every scan goes through the ledger, so the seeded rows satisfy the same
//! transition rules as production traffic.

use std::env;

use chrono::{Duration, Utc};

use parcel_core::types::{CustomerDraft, ParcelDraft};
use parcel_core::{ParcelStatus, SystemClock};
use parcel_db::{Database, DbConfig};

/// One scan to apply, as an offset back from now.
struct SeedScan {
    status: ParcelStatus,
    hours_ago: i64,
    location: &'static str,
    note: Option<&'static str>,
}

/// One parcel to create: owner index, draft fields, scan timeline.
struct SeedParcel {
    customer_idx: usize,
    weight_kg: f64,
    addr_from: &'static str,
    addr_to: &'static str,
    scans: &'static [SeedScan],
}

const SEED_PARCELS: &[SeedParcel] = &[
    // Delivered, full timeline
    SeedParcel {
        customer_idx: 0,
        weight_kg: 1.2,
        addr_from: "North Depot, 1 Alder St",
        addr_to: "John Price, 8 Harbor Rd",
        scans: &[
            SeedScan {
                status: ParcelStatus::Pickup,
                hours_ago: 26,
                location: "North Depot",
                note: Some("picked up"),
            },
            SeedScan {
                status: ParcelStatus::InTransit,
                hours_ago: 22,
                location: "Central Hub",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::OutForDelivery,
                hours_ago: 3,
                location: "Harbor district",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::Delivered,
                hours_ago: 1,
                location: "Harbor district",
                note: Some("handed over"),
            },
        ],
    },
    // Mid-journey
    SeedParcel {
        customer_idx: 0,
        weight_kg: 3.5,
        addr_from: "West Depot, 9 Cedar St",
        addr_to: "Alfa Supplies, 14 Mill Ln",
        scans: &[
            SeedScan {
                status: ParcelStatus::Pickup,
                hours_ago: 8,
                location: "West Depot",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::InTransit,
                hours_ago: 5,
                location: "Central Hub",
                note: Some("departed eastbound"),
            },
        ],
    },
    // On the last leg
    SeedParcel {
        customer_idx: 1,
        weight_kg: 0.8,
        addr_from: "South Depot, 4 Drummond St",
        addr_to: "Maria Jonas, 2 Abbey Walk",
        scans: &[
            SeedScan {
                status: ParcelStatus::Pickup,
                hours_ago: 7,
                location: "South Depot",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::InTransit,
                hours_ago: 6,
                location: "Central Hub",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::OutForDelivery,
                hours_ago: 1,
                location: "Abbey quarter",
                note: Some("out to the address"),
            },
        ],
    },
    // Returned to sender
    SeedParcel {
        customer_idx: 1,
        weight_kg: 5.0,
        addr_from: "North Depot, 1 Alder St",
        addr_to: "Unknown recipient, 77 Fog Ln",
        scans: &[
            SeedScan {
                status: ParcelStatus::Pickup,
                hours_ago: 24,
                location: "North Depot",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::InTransit,
                hours_ago: 18,
                location: "Central Hub",
                note: None,
            },
            SeedScan {
                status: ParcelStatus::Return,
                hours_ago: 12,
                location: "Central Hub",
                note: Some("addressee unknown"),
            },
        ],
    },
    // Brand new, no scans yet
    SeedParcel {
        customer_idx: 2,
        weight_kg: 2.0,
        addr_from: "East Depot, 2 Keel St",
        addr_to: "George Vale, 31 Orchard Ave",
        scans: &[],
    },
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./parcels_dev.db");
    let mut reset = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--reset" | "-r" => {
                reset = true;
            }
            "--help" | "-h" => {
                println!("Parcel Tracker Seed Data Generator");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./parcels_dev.db)");
                println!("  -r, --reset        Wipe existing rows before seeding");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Parcel Tracker Seed Data Generator");
    println!("=====================================");
    println!("Database: {}", db_path);
    println!();

    // Connect to database (runs migrations)
    let config = DbConfig::new(&db_path);
    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");

    if reset {
        wipe_data(&db).await?;
        println!("✓ Existing rows wiped");
    }

    // Refuse to double-seed; tracking codes would keep counting up
    let existing = db.customers().count().await?;
    if existing > 0 {
        println!("⚠ Database already has {} customers", existing);
        println!("  Use --reset to wipe and reseed.");
        return Ok(());
    }

    let clock = SystemClock;
    let now = Utc::now();

    // Customers
    let customer_drafts = [
        CustomerDraft {
            name: "Acme Retail".to_string(),
            phone: Some("+1 555 0112".to_string()),
        },
        CustomerDraft {
            name: "Blue Logistics".to_string(),
            phone: Some("+1 555 0456".to_string()),
        },
        CustomerDraft {
            name: "Casa Verde".to_string(),
            phone: None,
        },
    ];

    let mut customer_ids = Vec::with_capacity(customer_drafts.len());
    for draft in &customer_drafts {
        let customer = db.customers().create(draft).await?;
        customer_ids.push(customer.id);
    }

    // Parcels with their scan timelines, all through the ledger
    let mut codes = Vec::with_capacity(SEED_PARCELS.len());
    for seed in SEED_PARCELS {
        let draft = ParcelDraft {
            customer_id: customer_ids[seed.customer_idx],
            weight_kg: seed.weight_kg,
            addr_from: seed.addr_from.to_string(),
            addr_to: seed.addr_to.to_string(),
        };
        let parcel = db.parcels().create(&clock, &draft).await?;

        for scan in seed.scans {
            db.ledger()
                .apply_transition(
                    &parcel.tracking_code,
                    scan.status,
                    now - Duration::hours(scan.hours_ago),
                    scan.location,
                    scan.note,
                )
                .await?;
        }

        codes.push(parcel.tracking_code);
    }

    println!();
    println!(
        "✓ Seed complete: {} customers, {} parcels",
        customer_ids.len(),
        codes.len()
    );
    println!("  Example tracking codes: {}", codes[..3].join(", "));

    Ok(())
}

/// Deletes all rows, children first so no cascade surprises.
async fn wipe_data(db: &Database) -> Result<(), Box<dyn std::error::Error>> {
    sqlx::query("DELETE FROM scans").execute(db.pool()).await?;
    sqlx::query("DELETE FROM parcels").execute(db.pool()).await?;
    sqlx::query("DELETE FROM customers")
        .execute(db.pool())
        .await?;
    Ok(())
}
