use std::path::Path;
use std::time::Duration;

use cartscrape::utils::USER_AGENTS;
use cartscrape::{ScrapeConfig, random_user_agent};

#[test]
fn builder_applies_defaults() {
    let config = ScrapeConfig::builder()
        .user_agent("Mozilla/5.0 test agent")
        .build()
        .unwrap();

    assert_eq!(config.start_url(), "https://www.amazon.com");
    assert_eq!(config.viewport(), (1600, 900));
    assert_eq!(config.output_dir(), Path::new("scraped"));
    assert!(config.headless());
    assert_eq!(config.request_timeout(), Duration::from_secs(30));
}

#[test]
fn builder_requires_a_user_agent() {
    assert!(ScrapeConfig::builder().build().is_err());
}

#[test]
fn builder_rejects_a_blank_user_agent() {
    assert!(ScrapeConfig::builder().user_agent("   ").build().is_err());
}

#[test]
fn builder_overrides_stick() {
    let config = ScrapeConfig::builder()
        .user_agent("Mozilla/5.0 test agent")
        .start_url("https://www.amazon.co.uk")
        .viewport(1280, 720)
        .output_dir("out")
        .headless(false)
        .request_timeout(Duration::from_secs(5))
        .build()
        .unwrap();

    assert_eq!(config.start_url(), "https://www.amazon.co.uk");
    assert_eq!(config.viewport(), (1280, 720));
    assert_eq!(config.output_dir(), Path::new("out"));
    assert!(!config.headless());
    assert_eq!(config.request_timeout(), Duration::from_secs(5));
}

#[test]
fn random_user_agent_comes_from_the_pool() {
    for _ in 0..32 {
        let agent = random_user_agent();
        assert!(USER_AGENTS.contains(&agent.as_str()));
    }
}
