//! Integration tests for ListScreen over the in-memory service

use parkview::prelude::*;

fn spot(number: &str, property: &str, status: SpotStatus, rent: f64) -> Spot {
    Spot {
        id: String::new(),
        property_id: property.to_string(),
        spot_number: number.to_string(),
        status,
        size: Some("40ft".to_string()),
        monthly_rent: Some(rent),
        tenant_id: None,
    }
}

fn document(title: &str, property: Option<&str>, category: &str) -> Document {
    Document {
        id: String::new(),
        title: title.to_string(),
        description: None,
        file_name: format!("{}.pdf", title.to_lowercase().replace(' ', "-")),
        file_type: Some("application/pdf".to_string()),
        category: Some(category.to_string()),
        property_id: property.map(str::to_string),
        file_size: Some(1024),
        uploaded_at: None,
    }
}

fn directory() -> PropertyDirectory {
    let property = |id: &str, name: &str| Property {
        id: id.to_string(),
        name: name.to_string(),
        address: None,
        city: None,
        state: None,
        zip_code: None,
        property_type: PropertyType::Mixed,
        total_lots: 0,
    };
    PropertyDirectory::new(&[property("pine", "Pine Hollow"), property("cedar", "Cedar Ridge")])
}

fn spot_service() -> InMemoryService<Spot> {
    InMemoryService::with_records(vec![
        spot("A10", "pine", SpotStatus::Available, 550.0),
        spot("A2", "pine", SpotStatus::Occupied, 600.0),
        spot("B1", "cedar", SpotStatus::Available, 725.0),
        spot("A1", "pine", SpotStatus::Maintenance, 500.0),
        spot("B2", "cedar", SpotStatus::Occupied, 700.0),
    ])
}

async fn spot_screen() -> ListScreen<Spot> {
    let config = PortalConfig::default_config();
    let mut screen = ListScreen::from_config(spot_view_spec(&directory()), &config.screen("spots")).unwrap();
    screen.refresh(&spot_service()).await.unwrap();
    screen
}

fn numbers(screen: &ListScreen<Spot>) -> Vec<String> {
    screen
        .view()
        .unwrap()
        .items()
        .map(|s| s.spot_number.clone())
        .collect()
}

#[tokio::test]
async fn test_refresh_applies_configured_sort() {
    let screen = spot_screen().await;

    assert_eq!(screen.items().len(), 5);
    assert_eq!(screen.criteria().page_size, 20);
    assert_eq!(numbers(&screen), vec!["A1", "A2", "A10", "B1", "B2"]);
}

#[tokio::test]
async fn test_toggle_sort_flips_then_resets_on_new_key() {
    let mut screen = spot_screen().await;

    assert_eq!(screen.toggle_sort("spotNumber").unwrap(), SortOrder::Desc);
    assert_eq!(numbers(&screen), vec!["B2", "B1", "A10", "A2", "A1"]);

    assert_eq!(screen.toggle_sort("monthlyRent").unwrap(), SortOrder::Asc);
    assert_eq!(numbers(&screen), vec!["A1", "A10", "A2", "B2", "B1"]);

    assert!(matches!(
        screen.toggle_sort("color"),
        Err(ViewError::UnknownSortKey { .. })
    ));
}

#[tokio::test]
async fn test_filters_reset_page_and_clear() {
    let mut screen = spot_screen().await;
    screen.set_page_size(2).unwrap();
    screen.set_page(3);
    assert_eq!(screen.view().unwrap().page, 3);

    screen
        .set_filter("status", Some(Criterion::equals("AVAILABLE")))
        .unwrap();
    assert_eq!(screen.criteria().page, 1);
    assert_eq!(numbers(&screen), vec!["A10", "B1"]);

    screen.set_filter("status", None).unwrap();
    assert_eq!(screen.view().unwrap().total_matched, 5);

    screen.set_search("b");
    screen
        .set_filter("propertyId", Some(Criterion::equals("cedar")))
        .unwrap();
    assert_eq!(screen.view().unwrap().total_matched, 2);

    screen.clear_filters();
    assert!(screen.criteria().filters.is_empty());
    assert!(matches!(
        screen.set_filter("color", Some(Criterion::equals("red"))),
        Err(ViewError::UnknownFilter { .. })
    ));
}

#[tokio::test]
async fn test_group_by_property_uses_directory_labels() {
    let mut screen = spot_screen().await;
    screen.set_group_by(Some("property")).unwrap();

    let view = screen.view().unwrap();
    let labels: Vec<_> = view.groups.iter().map(|g| g.label.as_str()).collect();
    assert_eq!(labels, vec!["Pine Hollow", "Cedar Ridge"]);

    screen.set_group_by(None).unwrap();
    assert_eq!(screen.view().unwrap().groups[0].key, GroupKey::All);
}

#[tokio::test]
async fn test_zero_page_size_is_rejected() {
    let mut screen = spot_screen().await;

    assert_eq!(
        screen.set_page_size(0),
        Err(ViewError::InvalidPageSize { page_size: 0 })
    );
    assert_eq!(screen.criteria().page_size, 20);
}

#[tokio::test]
async fn test_filter_options_follow_first_seen_order() {
    let screen = spot_screen().await;

    assert_eq!(
        screen.filter_options("status"),
        vec!["AVAILABLE", "OCCUPIED", "MAINTENANCE"]
    );
}

#[tokio::test]
async fn test_documents_screen_pages_each_property() {
    let config = PortalConfig::default_config();
    let mut documents_config = config.screen("documents");
    documents_config.page_size = 2;

    let service = InMemoryService::with_records(vec![
        document("Park rules", None, "Rules"),
        document("Pine lease", Some("pine"), "Leases"),
        document("Pine map", Some("pine"), "Maps"),
        document("Pine pet policy", Some("pine"), "Rules"),
        document("Cedar lease", Some("cedar"), "Leases"),
    ]);
    let mut screen = ListScreen::from_config(document_view_spec(&directory()), &documents_config).unwrap();
    screen.refresh(&service).await.unwrap();

    let first = screen.view().unwrap();
    assert_eq!(first.total_pages, 2);
    let sizes: Vec<_> = first.groups.iter().map(|g| (g.label.as_str(), g.len())).collect();
    assert_eq!(sizes, vec![("General", 1), ("Pine Hollow", 2), ("Cedar Ridge", 1)]);

    screen.set_page(2);
    let second = screen.view().unwrap();
    let sizes: Vec<_> = second.groups.iter().map(|g| (g.label.as_str(), g.len())).collect();
    assert_eq!(sizes, vec![("General", 0), ("Pine Hollow", 1), ("Cedar Ridge", 0)]);
}

#[tokio::test]
async fn test_refresh_failure_keeps_items() {
    struct Offline;

    #[async_trait]
    impl ResourceService<Spot> for Offline {
        async fn list(&self) -> Result<Vec<Spot>, ApiError> {
            Err(ApiError::Transport {
                message: "connection refused".to_string(),
            })
        }
        async fn get(&self, id: &str) -> Result<Spot, ApiError> {
            Err(ApiError::NotFound {
                resource: "spot".to_string(),
                id: id.to_string(),
            })
        }
        async fn create(&self, record: Spot) -> Result<Spot, ApiError> {
            Ok(record)
        }
        async fn update(&self, _id: &str, record: Spot) -> Result<Spot, ApiError> {
            Ok(record)
        }
        async fn delete(&self, _id: &str) -> Result<(), ApiError> {
            Ok(())
        }
    }

    let mut screen = spot_screen().await;
    let err = screen.refresh(&Offline).await.unwrap_err();

    assert_eq!(err.error_code(), "API_TRANSPORT");
    assert_eq!(screen.items().len(), 5);
}
