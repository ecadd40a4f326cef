use cartscrape::{ScrapeConfig, random_user_agent};

#[tokio::test]
#[ignore] // Requires browser installation and network access to the live site
async fn live_scrape_basic() {
    let output_dir = tempfile::tempdir().unwrap();

    let config = ScrapeConfig::builder()
        .user_agent(random_user_agent())
        .output_dir(output_dir.path())
        .build()
        .unwrap();

    let records = cartscrape::scrape(&config, "socks").await.unwrap();

    assert!(!records.is_empty());
    assert!(output_dir.path().join("socks.json").exists());
}
