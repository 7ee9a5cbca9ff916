//! Portal demo: admin notices board and tenant payment history over in-memory services

use anyhow::Result;
use chrono::TimeZone;
use parkview::prelude::*;
use tracing_subscriber::EnvFilter;

fn property(id: &str, name: &str, property_type: PropertyType) -> Property {
    Property {
        id: id.to_string(),
        name: name.to_string(),
        address: None,
        city: Some("Bend".to_string()),
        state: Some("OR".to_string()),
        zip_code: None,
        property_type,
        total_lots: 40,
    }
}

fn notice(title: &str, priority: Priority, property_id: Option<&str>, day: u32) -> Notice {
    Notice {
        id: String::new(),
        title: title.to_string(),
        content: String::new(),
        priority,
        status: NoticeStatus::Active,
        tags: vec![],
        property_id: property_id.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2024, 5, day, 9, 0, 0).single(),
        expires_at: None,
    }
}

fn payment(amount: f64, month: u32, status: PaymentStatus) -> Payment {
    Payment {
        id: String::new(),
        tenant_id: "tenant-1".to_string(),
        amount,
        date_paid: Utc.with_ymd_and_hms(2024, month, 1, 12, 0, 0).single(),
        status,
        method: Some("ACH".to_string()),
        description: Some(format!("Lot rent {}/2024", month)),
    }
}

fn print_view<T>(result: &ViewResult<&T>, line: impl Fn(&T) -> String) {
    println!(
        "   page {}/{} ({} matched)",
        result.page, result.total_pages, result.total_matched
    );
    for group in &result.groups {
        println!("   [{}] {} of {}", group.label, group.len(), group.total);
        for item in &group.items {
            println!("     - {}", line(item));
        }
    }
    if result.no_results() {
        println!("   (no results)");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("🏕️  Parkview portal demo\n");

    let config = PortalConfig::default_config();

    let properties = InMemoryService::with_records(vec![
        property("pine", "Pine Hollow RV Park", PropertyType::RvPark),
        property("cedar", "Cedar Ridge Community", PropertyType::MhCommunity),
    ]);
    let directory = PropertyDirectory::new(&properties.list().await?);
    tracing::info!(properties = directory.len(), "loaded property directory");

    let notices = InMemoryService::with_records(vec![
        notice("Water shut-off Tuesday", Priority::High, Some("pine"), 2),
        notice("Pool opens for the season", Priority::Low, Some("pine"), 3),
        notice("Speed limit reminder", Priority::Medium, Some("cedar"), 4),
        notice("Office closed Memorial Day", Priority::Medium, None, 5),
        notice("Gas leak drill", Priority::Urgent, Some("cedar"), 6),
        notice("Dumpster moved", Priority::Low, Some("pine"), 7),
    ]);

    // === Admin notices board ===
    println!("📋 Notices (grouped by property, newest first)");
    let mut board = ListScreen::from_config(notice_view_spec(&directory), &config.screen("notices"))?;
    board.refresh(&notices).await?;
    print_view(&board.view()?, |n: &Notice| format!("{} [{}]", n.title, n.priority));

    println!("\n🔎 Only HIGH and above? Filter priority=HIGH");
    board.set_filter("priority", Some(Criterion::equals("HIGH")))?;
    print_view(&board.view()?, |n: &Notice| n.title.clone());

    println!("\n↕️  Clear filters, sort by priority (toggle twice for most severe first)");
    board.clear_filters();
    board.set_group_by(None)?;
    board.toggle_sort("priority")?;
    let order = board.toggle_sort("priority")?;
    println!("   sort order: {:?}", order);
    print_view(&board.view()?, |n: &Notice| format!("{} [{}]", n.title, n.priority));

    // === Tenant payment history ===
    let payments = InMemoryService::with_records(vec![
        payment(650.0, 1, PaymentStatus::Completed),
        payment(650.0, 2, PaymentStatus::Completed),
        payment(675.0, 3, PaymentStatus::Failed),
        payment(675.0, 3, PaymentStatus::Completed),
        payment(675.0, 4, PaymentStatus::Pending),
    ]);

    println!("\n💳 Payment history, Q1 only, via query string");
    let params = QueryParams {
        filter: Some(r#"{"datePaid>=": "2024-01-01", "datePaid<": "2024-04-01", "status": "all"}"#.to_string()),
        sort: Some("amount:desc".to_string()),
        limit: Some(3),
        ..QueryParams::default()
    };
    let mut history = ListScreen::from_config(payment_view_spec(), &config.screen("payments"))?;
    history.refresh(&payments).await?;
    let criteria = params.into_criteria(history.criteria().clone())?;
    let result = compute_view(history.items(), history.spec(), &criteria)?;
    print_view(&result, |p: &Payment| format!("{:.2} {} {}", p.amount, p.status, p.description.as_deref().unwrap_or("")));

    println!("\n⚠️  A page size of 0 is a configuration error");
    match history.set_page_size(0) {
        Ok(()) => println!("   unexpectedly accepted"),
        Err(e) => println!("   {} ({})", e, ParkError::from(e.clone()).error_code()),
    }

    println!("\n✅ Done");
    Ok(())
}
