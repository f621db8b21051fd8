use crate::domain::a003_school_order::bundle::UniformBundle;
use crate::enums::{GarmentType, Gender};
use serde::{Deserialize, Serialize};

/// Row of the size catalog (`GET /api/size-catalog`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SizeEntry {
    pub garment_type: GarmentType,
    pub gender: Gender,
    /// Label shown to the user, e.g. "M" or "130"
    pub size_label: String,
    /// Internal size code expected by the order service, e.g. "SIZE_M"
    pub enum_name: String,
    pub min_height: Option<f64>,
    pub max_height: Option<f64>,
    pub min_weight: Option<f64>,
    pub max_weight: Option<f64>,
}

impl SizeEntry {
    /// Height/weight hint for grid headers, e.g. "120-130 cm, 25-30 kg"
    pub fn measurement_hint(&self) -> Option<String> {
        let range = |min: Option<f64>, max: Option<f64>, unit: &str| match (min, max) {
            (Some(a), Some(b)) => Some(format!("{}-{} {}", a, b, unit)),
            (Some(a), None) => Some(format!("≥{} {}", a, unit)),
            (None, Some(b)) => Some(format!("≤{} {}", b, unit)),
            (None, None) => None,
        };
        let parts: Vec<String> = [
            range(self.min_height, self.max_height, "cm"),
            range(self.min_weight, self.max_weight, "kg"),
        ]
        .into_iter()
        .flatten()
        .collect();
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(", "))
        }
    }
}

/// Lookup over the size catalog, keeps catalog order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SizeCatalog {
    pub entries: Vec<SizeEntry>,
}

impl SizeCatalog {
    pub fn new(entries: Vec<SizeEntry>) -> Self {
        Self { entries }
    }

    pub fn sizes_for(&self, garment: GarmentType, gender: Gender) -> Vec<&SizeEntry> {
        self.entries
            .iter()
            .filter(|e| e.garment_type == garment && e.gender == gender)
            .collect()
    }

    pub fn find(&self, garment: GarmentType, gender: Gender, size_label: &str) -> Option<&SizeEntry> {
        self.entries
            .iter()
            .find(|e| e.garment_type == garment && e.gender == gender && e.size_label == size_label)
    }

    pub fn enum_name(&self, garment: GarmentType, gender: Gender, size_label: &str) -> Option<&str> {
        self.find(garment, gender, size_label)
            .map(|e| e.enum_name.as_str())
    }

    /// Size code for an order line.
    ///
    /// `None` when the catalog lists sizes for the garment but not this one.
    /// A garment the catalog knows nothing about keeps the raw label.
    pub fn order_size(&self, garment: GarmentType, gender: Gender, size_label: &str) -> Option<String> {
        if let Some(name) = self.enum_name(garment, gender, size_label) {
            return Some(name.to_string());
        }
        let known = self
            .entries
            .iter()
            .any(|e| e.garment_type == garment && e.gender == gender);
        if known {
            None
        } else {
            Some(size_label.to_string())
        }
    }

    /// Column headers of the quantity grid for a bundle: the size labels of
    /// all populated slots, first appearance wins
    pub fn columns_for(&self, bundle: &UniformBundle) -> Vec<String> {
        let mut columns: Vec<String> = Vec::new();
        for item in bundle.items() {
            for entry in self.sizes_for(item.garment_type, item.gender) {
                if !columns.contains(&entry.size_label) {
                    columns.push(entry.size_label.clone());
                }
            }
        }
        columns
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a003_school_order::bundle::{group_items, tests::item, BundleKey};
    use crate::enums::UniformCategory;

    pub(crate) fn entry(garment: GarmentType, gender: Gender, label: &str) -> SizeEntry {
        SizeEntry {
            garment_type: garment,
            gender,
            size_label: label.to_string(),
            enum_name: format!("{}_{}_{}", garment.code(), gender.code(), label).to_uppercase(),
            min_height: None,
            max_height: None,
            min_weight: None,
            max_weight: None,
        }
    }

    #[test]
    fn test_columns_merge_slots_in_catalog_order() {
        let catalog = SizeCatalog::new(vec![
            entry(GarmentType::Shirt, Gender::Male, "S"),
            entry(GarmentType::Shirt, Gender::Male, "M"),
            entry(GarmentType::Pants, Gender::Male, "M"),
            entry(GarmentType::Pants, Gender::Male, "L"),
            entry(GarmentType::Shirt, Gender::Female, "XS"),
        ]);
        let bundles = group_items(&[
            item(Gender::Male, UniformCategory::Regular, GarmentType::Shirt),
            item(Gender::Male, UniformCategory::Regular, GarmentType::Pants),
        ]);
        let bundle = &bundles[&BundleKey::anchored(Gender::Male, UniformCategory::Regular)];

        assert_eq!(catalog.columns_for(bundle), vec!["S", "M", "L"]);
    }

    #[test]
    fn test_order_size_uses_catalog_code() {
        let catalog = SizeCatalog::new(vec![entry(GarmentType::Skirt, Gender::Female, "M")]);
        assert_eq!(
            catalog.order_size(GarmentType::Skirt, Gender::Female, "M").as_deref(),
            Some("SKIRT_FEMALE_M")
        );
        assert_eq!(catalog.enum_name(GarmentType::Skirt, Gender::Male, "M"), None);
    }

    #[test]
    fn test_order_size_skips_sizes_the_garment_does_not_come_in() {
        let catalog = SizeCatalog::new(vec![entry(GarmentType::Skirt, Gender::Female, "M")]);
        assert_eq!(catalog.order_size(GarmentType::Skirt, Gender::Female, "XXL"), None);
    }

    #[test]
    fn test_order_size_keeps_label_for_uncatalogued_garment() {
        let catalog = SizeCatalog::new(vec![entry(GarmentType::Skirt, Gender::Female, "M")]);
        assert_eq!(
            catalog.order_size(GarmentType::Shirt, Gender::Female, "XXL").as_deref(),
            Some("XXL")
        );
        assert_eq!(
            SizeCatalog::default()
                .order_size(GarmentType::Pants, Gender::Male, "140")
                .as_deref(),
            Some("140")
        );
    }

    #[test]
    fn test_measurement_hint() {
        let mut e = entry(GarmentType::Shirt, Gender::Male, "M");
        assert_eq!(e.measurement_hint(), None);
        e.min_height = Some(120.0);
        e.max_height = Some(130.0);
        e.max_weight = Some(30.0);
        assert_eq!(e.measurement_hint().as_deref(), Some("120-130 cm, ≤30 kg"));
    }
}
