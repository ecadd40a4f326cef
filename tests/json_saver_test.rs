use cartscrape::{ProductRecord, save_products};

fn sample_records() -> Vec<ProductRecord> {
    vec![
        ProductRecord {
            image_url: "https://img.example/wool.jpg".to_string(),
            name: "Wool Socks".to_string(),
            stars: "4.5 out of 5 stars".to_string(),
            price: "$9.99".to_string(),
        },
        ProductRecord {
            image_url: "not available".to_string(),
            name: "Cotton Socks".to_string(),
            stars: "not available".to_string(),
            price: "$4.99".to_string(),
        },
    ]
}

#[tokio::test]
async fn round_trip_preserves_order_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let records = sample_records();

    let path = save_products("socks", &records, dir.path()).await.unwrap();
    assert_eq!(path, dir.path().join("socks.json"));

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let read_back: Vec<ProductRecord> = serde_json::from_str(&contents).unwrap();

    assert_eq!(read_back, records);
}

#[tokio::test]
async fn wire_keys_match_the_file_format_contract() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_products("socks", &sample_records(), dir.path())
        .await
        .unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

    let first = &value.as_array().unwrap()[0];
    assert!(first.get("img_url").is_some());
    assert!(first.get("productName").is_some());
    assert!(first.get("stars").is_some());
    assert!(first.get("price").is_some());
    // Placeholder fields serialize as strings, never null
    assert!(value.as_array().unwrap()[1]["img_url"].is_string());
}

#[tokio::test]
async fn output_is_pretty_printed_with_two_space_indent() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_products("socks", &sample_records(), dir.path())
        .await
        .unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert!(contents.contains("\n  {"));
    assert!(contents.contains("\n    \"img_url\""));
}

#[tokio::test]
async fn creates_output_directory_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("scraped");

    let path = save_products("gloves", &sample_records(), &nested)
        .await
        .unwrap();

    assert!(nested.is_dir());
    assert!(path.starts_with(&nested));
}

#[tokio::test]
async fn empty_collection_writes_an_empty_array() {
    let dir = tempfile::tempdir().unwrap();
    let path = save_products("nothing", &[], dir.path()).await.unwrap();

    let contents = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(contents.trim(), "[]");
}

#[tokio::test]
async fn hostile_search_term_stays_inside_output_dir() {
    let dir = tempfile::tempdir().unwrap();

    let path = save_products("../../escape", &sample_records(), dir.path())
        .await
        .unwrap();

    assert!(path.starts_with(dir.path()));
    assert!(path.exists());
}
