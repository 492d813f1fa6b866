//! The restaurant's static menu.
//!
//! A `Catalog` is built once at startup and only read afterwards. `Catalog::new`
//! checks the two data-quality rules the UI relies on: dish ids are unique and
//! every dish has something to show in its preview.

use crate::model::dish::Dish;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("dish id `{0}` appears more than once")]
    DuplicateId(String),

    #[error("dish `{0}` has neither an image nor a video")]
    MissingMedia(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    dishes: Vec<Dish>,
}

impl Catalog {
    pub fn new(dishes: Vec<Dish>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for dish in &dishes {
            if !seen.insert(dish.id.as_str()) {
                return Err(CatalogError::DuplicateId(dish.id.clone()));
            }
            if !dish.has_media() {
                return Err(CatalogError::MissingMedia(dish.id.clone()));
            }
        }
        Ok(Self { dishes })
    }

    /// The menu served by this app.
    pub fn builtin() -> Self {
        Self {
            dishes: vec![
                Dish {
                    id: "dal_tadka".to_string(),
                    name: "Dal Tadka".to_string(),
                    price: 180,
                    description: Some("Yellow lentils tempered with spices.".to_string()),
                    glb: None,
                    usdz: None,
                    image: Some(
                        "https://images.unsplash.com/photo-1504674900247-0877df9cc836?auto=format&fit=crop&w=400&q=80"
                            .to_string(),
                    ),
                    video: None,
                },
                Dish {
                    id: "paneer_butter_masala".to_string(),
                    name: "Paneer Butter Masala".to_string(),
                    price: 260,
                    description: Some("Paneer cubes in creamy tomato gravy.".to_string()),
                    glb: None,
                    usdz: None,
                    image: Some(
                        "https://images.unsplash.com/photo-1519864600265-abb23847efc4?auto=format&fit=crop&w=400&q=80"
                            .to_string(),
                    ),
                    video: Some(
                        "https://drive.google.com/uc?export=download&id=1ZgFnav0P68CwyMGWcD30wjtItnOBFhQT"
                            .to_string(),
                    ),
                },
                Dish {
                    id: "naan".to_string(),
                    name: "Naan".to_string(),
                    price: 50,
                    description: Some("Soft and fluffy Indian bread.".to_string()),
                    glb: None,
                    usdz: None,
                    image: Some(
                        "https://images.unsplash.com/photo-1464306076886-debca5e8a6b6?auto=format&fit=crop&w=400&q=80"
                            .to_string(),
                    ),
                    video: None,
                },
            ],
        }
    }

    /// Dishes in menu order.
    pub fn dishes(&self) -> &[Dish] {
        &self.dishes
    }

    pub fn get(&self, id: &str) -> Option<&Dish> {
        self.dishes.iter().find(|dish| dish.id == id)
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image_only(id: &str) -> Dish {
        Dish {
            id: id.to_string(),
            name: id.to_string(),
            price: 10,
            description: None,
            glb: None,
            usdz: None,
            image: Some(format!("{id}.jpg")),
            video: None,
        }
    }

    #[test]
    fn builtin_menu_passes_validation() {
        let builtin = Catalog::builtin();
        let validated = Catalog::new(builtin.dishes().to_vec());
        assert_eq!(validated, Ok(builtin));
    }

    #[test]
    fn builtin_menu_order_and_prices() {
        let catalog = Catalog::builtin();
        let menu: Vec<(&str, u32)> = catalog
            .dishes()
            .iter()
            .map(|d| (d.id.as_str(), d.price))
            .collect();
        assert_eq!(
            menu,
            [("dal_tadka", 180), ("paneer_butter_masala", 260), ("naan", 50)]
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let result = Catalog::new(vec![image_only("naan"), image_only("naan")]);
        assert_eq!(result, Err(CatalogError::DuplicateId("naan".to_string())));
    }

    #[test]
    fn dish_without_media_is_rejected() {
        let mut bare = image_only("raita");
        bare.image = None;
        let result = Catalog::new(vec![image_only("naan"), bare]);
        assert_eq!(result, Err(CatalogError::MissingMedia("raita".to_string())));
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.get("naan").map(|d| d.price), Some(50));
        assert!(catalog.get("biryani").is_none());
        assert_eq!(catalog.len(), 3);
        assert!(!catalog.is_empty());
    }
}
