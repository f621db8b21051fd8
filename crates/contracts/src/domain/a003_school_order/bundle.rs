//! Uniform bundles: design items grouped by gender and category
//!
//! A bundle is the unit a school orders against. The shirt of a
//! gender/category pair anchors the bundle; pants and skirts attach to an
//! already grouped shirt or stay on their own.

use crate::domain::a001_design_delivery::DesignItem;
use crate::enums::{GarmentType, Gender, UniformCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How a bundle came to exist
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BundleKind {
    /// Anchored on the shirt slot of its gender/category
    Anchored,
    /// Pants with no shirt grouped before them
    PantsOnly,
    /// Skirt with no shirt grouped before it
    SkirtOnly,
}

impl BundleKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            BundleKind::Anchored => "shirt",
            BundleKind::PantsOnly => "pants_only",
            BundleKind::SkirtOnly => "skirt_only",
        }
    }
}

/// Composite bundle key
///
/// Its string form (`male_regular_shirt`, `female_regular_skirt_only`, ...)
/// is used for field names and DOM ids only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BundleKey {
    pub gender: Gender,
    pub category: UniformCategory,
    pub kind: BundleKind,
}

impl BundleKey {
    pub fn new(gender: Gender, category: UniformCategory, kind: BundleKind) -> Self {
        Self {
            gender,
            category,
            kind,
        }
    }

    pub fn anchored(gender: Gender, category: UniformCategory) -> Self {
        Self::new(gender, category, BundleKind::Anchored)
    }

    pub fn as_string(&self) -> String {
        format!(
            "{}_{}_{}",
            self.gender.code(),
            self.category.code(),
            self.kind.suffix()
        )
    }
}

/// Up to one design item per garment slot, sharing gender and category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniformBundle {
    pub key: BundleKey,
    pub shirt: Option<DesignItem>,
    pub pants: Option<DesignItem>,
    pub skirt: Option<DesignItem>,
}

impl UniformBundle {
    pub fn empty(key: BundleKey) -> Self {
        Self {
            key,
            shirt: None,
            pants: None,
            skirt: None,
        }
    }

    pub fn slot(&self, garment: GarmentType) -> Option<&DesignItem> {
        match garment {
            GarmentType::Shirt => self.shirt.as_ref(),
            GarmentType::Pants => self.pants.as_ref(),
            GarmentType::Skirt => self.skirt.as_ref(),
        }
    }

    fn set_slot(&mut self, item: DesignItem) {
        match item.garment_type {
            GarmentType::Shirt => self.shirt = Some(item),
            GarmentType::Pants => self.pants = Some(item),
            GarmentType::Skirt => self.skirt = Some(item),
        }
    }

    /// Populated slots in precedence order (shirt > pants > skirt)
    pub fn items(&self) -> impl Iterator<Item = &DesignItem> {
        [&self.shirt, &self.pants, &self.skirt]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }

    /// First populated garment type, shirt > pants > skirt
    pub fn primary_garment(&self) -> Option<GarmentType> {
        self.items().next().map(|item| item.garment_type)
    }

    /// Heading for the quantity grid, e.g. "Boys Regular: Shirt + Pants"
    pub fn title(&self) -> String {
        let garments = self
            .items()
            .map(|item| item.garment_type.display_name())
            .collect::<Vec<_>>()
            .join(" + ");
        format!(
            "{} {}: {}",
            self.key.gender.display_name(),
            self.key.category.display_name(),
            garments
        )
    }
}

/// Group design items into uniform bundles.
///
/// Items are processed in input order. Pants or a skirt only join the
/// anchored bundle when its shirt was already grouped; otherwise they form
/// a `PantsOnly`/`SkirtOnly` bundle that a later shirt does not merge into.
pub fn group_items(items: &[DesignItem]) -> BTreeMap<BundleKey, UniformBundle> {
    let mut bundles: BTreeMap<BundleKey, UniformBundle> = BTreeMap::new();

    for item in items {
        let anchor = BundleKey::anchored(item.gender, item.category);
        let key = match item.garment_type {
            GarmentType::Shirt => anchor,
            GarmentType::Pants if bundles.contains_key(&anchor) => anchor,
            GarmentType::Pants => BundleKey::new(item.gender, item.category, BundleKind::PantsOnly),
            GarmentType::Skirt if bundles.contains_key(&anchor) => anchor,
            GarmentType::Skirt => BundleKey::new(item.gender, item.category, BundleKind::SkirtOnly),
        };

        bundles
            .entry(key)
            .or_insert_with(|| UniformBundle::empty(key))
            .set_slot(item.clone());
    }

    bundles
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::a001_design_delivery::DeliveryItemId;
    use uuid::Uuid;

    pub(crate) fn item(gender: Gender, category: UniformCategory, garment: GarmentType) -> DesignItem {
        DesignItem {
            delivery_item_id: DeliveryItemId::new(Uuid::new_v4()),
            gender,
            category,
            garment_type: garment,
            fabric: None,
            color: None,
            logo: None,
            images: vec![],
        }
    }

    use GarmentType::*;
    use Gender::*;
    use UniformCategory::*;

    #[test]
    fn test_empty_input_gives_no_bundles() {
        assert!(group_items(&[]).is_empty());
    }

    #[test]
    fn test_shirt_first_merges_pants_and_skirt() {
        let items = vec![
            item(Male, Regular, Shirt),
            item(Male, Regular, Pants),
            item(Female, Regular, Shirt),
            item(Female, Regular, Skirt),
            item(Male, PhysicalEducation, Shirt),
            item(Male, PhysicalEducation, Pants),
        ];
        let bundles = group_items(&items);

        assert_eq!(bundles.len(), 3);
        let boys = &bundles[&BundleKey::anchored(Male, Regular)];
        assert_eq!(boys.shirt.as_ref(), Some(&items[0]));
        assert_eq!(boys.pants.as_ref(), Some(&items[1]));
        assert!(boys.skirt.is_none());

        let girls = &bundles[&BundleKey::anchored(Female, Regular)];
        assert_eq!(girls.skirt.as_ref(), Some(&items[3]));
        assert!(girls.pants.is_none());
    }

    #[test]
    fn test_pants_without_shirt_stand_alone() {
        let bundles = group_items(&[item(Male, PhysicalEducation, Pants)]);
        let key = BundleKey::new(Male, PhysicalEducation, BundleKind::PantsOnly);

        assert_eq!(bundles.len(), 1);
        assert_eq!(key.as_string(), "male_physical_education_pants_only");
        assert!(bundles[&key].pants.is_some());
        assert!(bundles[&key].shirt.is_none());
    }

    #[test]
    fn test_skirt_without_shirt_stands_alone() {
        let bundles = group_items(&[item(Female, Regular, Skirt)]);
        let key = BundleKey::new(Female, Regular, BundleKind::SkirtOnly);
        assert_eq!(key.as_string(), "female_regular_skirt_only");
        assert!(bundles[&key].skirt.is_some());
    }

    #[test]
    fn test_grouping_is_order_sensitive() {
        let bundles = group_items(&[item(Female, Regular, Skirt), item(Female, Regular, Shirt)]);

        assert_eq!(bundles.len(), 2);
        assert!(bundles[&BundleKey::anchored(Female, Regular)].skirt.is_none());
        assert!(bundles.contains_key(&BundleKey::new(Female, Regular, BundleKind::SkirtOnly)));
    }

    #[test]
    fn test_second_shirt_overwrites_slot() {
        let first = item(Male, Regular, Shirt);
        let second = item(Male, Regular, Shirt);
        let bundles = group_items(&[first, second.clone()]);
        assert_eq!(bundles.len(), 1);
        assert_eq!(bundles[&BundleKey::anchored(Male, Regular)].shirt, Some(second));
    }

    #[test]
    fn test_primary_garment_and_title() {
        let bundles = group_items(&[item(Female, Regular, Shirt), item(Female, Regular, Pants)]);
        let bundle = &bundles[&BundleKey::anchored(Female, Regular)];
        assert_eq!(bundle.primary_garment(), Some(Shirt));
        assert_eq!(bundle.title(), "Girls Regular: Shirt + Pants");
    }
}
