//! Persistence sink for scraped data

mod json_saver;

pub use json_saver::save_products;
