use crate::shared::api_utils::get_json;
use contracts::domain::a002_size_catalog::{SizeCatalog, SizeEntry};

const API_PATH: &str = "/api/size-catalog";

pub async fn fetch_size_catalog() -> Result<SizeCatalog, String> {
    let entries: Vec<SizeEntry> = get_json(API_PATH).await?;
    Ok(SizeCatalog::new(entries))
}
