use cartscrape::{NOT_AVAILABLE, ProductRecord, extract_products};

/// Build one result card with optional sub-elements.
fn card(img: Option<&str>, title: Option<&str>, stars: Option<&str>, price: Option<&str>) -> String {
    let mut html = String::from(r#"<div class="s-result-item">"#);
    if let Some(src) = img {
        html.push_str(&format!(r#"<img src="{src}"/>"#));
    }
    if let Some(t) = title {
        html.push_str(&format!("<h2><a><span>{t}</span></a></h2>"));
    }
    if let Some(s) = stars {
        html.push_str(&format!(r#"<span class="a-class-alt">{s}</span>"#));
    }
    if let Some(p) = price {
        html.push_str(&format!(r#"<span class="a-color-base">{p}</span>"#));
    }
    html.push_str("</div>");
    html
}

fn page(cards: &[String]) -> String {
    format!("<html><body>{}</body></html>", cards.concat())
}

#[test]
fn full_card_extracts_all_fields() {
    let html = page(&[card(
        Some("https://img.example/socks.jpg"),
        Some("Wool Socks"),
        Some("4.5 out of 5 stars"),
        Some("$9.99"),
    )]);

    let records = extract_products(&html);

    assert_eq!(
        records,
        vec![ProductRecord {
            image_url: "https://img.example/socks.jpg".to_string(),
            name: "Wool Socks".to_string(),
            stars: "4.5 out of 5 stars".to_string(),
            price: "$9.99".to_string(),
        }]
    );
}

#[test]
fn missing_image_degrades_only_that_field() {
    let html = page(&[card(
        None,
        Some("Wool Socks"),
        Some("4.5 out of 5 stars"),
        Some("$9.99"),
    )]);

    let records = extract_products(&html);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].image_url, NOT_AVAILABLE);
    assert_eq!(records[0].name, "Wool Socks");
    assert_eq!(records[0].stars, "4.5 out of 5 stars");
    assert_eq!(records[0].price, "$9.99");
}

#[test]
fn image_without_src_attribute_gets_placeholder() {
    let html = page(&[
        r#"<div class="s-result-item"><img alt="no source"/><h2><a><span>Bare Img</span></a></h2></div>"#
            .to_string(),
    ]);

    let records = extract_products(&html);

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].image_url, NOT_AVAILABLE);
    assert_eq!(records[0].name, "Bare Img");
}

#[test]
fn every_field_is_populated_even_on_an_empty_card() {
    let html = page(&[card(None, None, None, None)]);

    let records = extract_products(&html);

    assert_eq!(
        records,
        vec![ProductRecord {
            image_url: NOT_AVAILABLE.to_string(),
            name: NOT_AVAILABLE.to_string(),
            stars: NOT_AVAILABLE.to_string(),
            price: NOT_AVAILABLE.to_string(),
        }]
    );
}

#[test]
fn one_broken_card_never_short_circuits_its_siblings() {
    let html = page(&[
        card(Some("https://img.example/1.jpg"), Some("First"), None, Some("$1")),
        card(None, None, None, None),
        card(Some("https://img.example/3.jpg"), Some("Third"), Some("5 stars"), Some("$3")),
    ]);

    let records = extract_products(&html);

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].name, "First");
    assert_eq!(records[1].name, NOT_AVAILABLE);
    assert_eq!(records[2].name, "Third");
}

#[test]
fn records_preserve_dom_order() {
    let cards: Vec<String> = (1..=5)
        .map(|i| card(None, Some(&format!("Item {i}")), None, None))
        .collect();

    let records = extract_products(&page(&cards));

    let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Item 1", "Item 2", "Item 3", "Item 4", "Item 5"]);
}

#[test]
fn extraction_is_idempotent_on_an_unchanged_snapshot() {
    let html = page(&[
        card(Some("https://img.example/a.jpg"), Some("A"), Some("4 stars"), Some("$4")),
        card(None, Some("B"), None, None),
    ]);

    let first = extract_products(&html);
    let second = extract_products(&html);

    assert_eq!(first, second);
}

#[test]
fn page_without_result_containers_yields_empty() {
    let records = extract_products("<html><body><p>no products here</p></body></html>");
    assert!(records.is_empty());
}

#[test]
fn text_is_trimmed_but_interior_whitespace_survives() {
    let html = page(&[card(
        None,
        Some("  Chunky  Knit\nSocks  "),
        None,
        None,
    )]);

    let records = extract_products(&html);

    assert_eq!(records[0].name, "Chunky  Knit\nSocks");
}
