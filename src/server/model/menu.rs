use derive_more::Display;
use serde::{Deserialize, Serialize};
use crate::server::model::{deserialize_id, MenuItemId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct MenuItem {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: MenuItemId,
    pub price: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub(crate) enum Category {
    #[display("food")]
    Food,
    #[display("drink")]
    Drink,
}

/// Price list as served by `GET /prices`, immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct Menu {
    #[serde(default)]
    pub food: Vec<MenuItem>,
    #[serde(default)]
    pub drinks: Vec<MenuItem>,
}

impl Menu {
    pub fn price_of(&self, category: Category, id: MenuItemId) -> Option<f64> {
        let items = match category {
            Category::Food => &self.food,
            Category::Drink => &self.drinks,
        };
        items.iter().find(|item| item.id == id).map(|item| item.price)
    }
}
