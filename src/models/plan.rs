use std::fmt;

use serde::{Deserialize, Serialize};

/// One line of a meal: a food and its portion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodLine {
    pub item: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    pub meal_name: String,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    #[serde(default)]
    pub foods: Vec<FoodLine>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPlan {
    pub day: u32,
    pub day_name: String,
    pub total_calories: f64,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    pub meals: Vec<Meal>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroceryItem {
    pub item: String,
    pub total_amount: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroceryCategory {
    Proteins,
    Carbs,
    Fats,
    Vegetables,
    Misc,
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            GroceryCategory::Proteins => "Proteins",
            GroceryCategory::Carbs => "Carbohydrates",
            GroceryCategory::Fats => "Healthy Fats",
            GroceryCategory::Vegetables => "Vegetables",
            GroceryCategory::Misc => "Miscellaneous",
        };
        write!(f, "{label}")
    }
}

/// Shopping list for the week, grouped by category.
///
/// Categories the model leaves out deserialize as empty lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroceryList {
    #[serde(default)]
    pub proteins: Vec<GroceryItem>,
    #[serde(default)]
    pub carbs: Vec<GroceryItem>,
    #[serde(default)]
    pub fats: Vec<GroceryItem>,
    #[serde(default)]
    pub vegetables: Vec<GroceryItem>,
    #[serde(default)]
    pub misc: Vec<GroceryItem>,
}

impl GroceryList {
    pub fn get(&self, category: GroceryCategory) -> &[GroceryItem] {
        match category {
            GroceryCategory::Proteins => &self.proteins,
            GroceryCategory::Carbs => &self.carbs,
            GroceryCategory::Fats => &self.fats,
            GroceryCategory::Vegetables => &self.vegetables,
            GroceryCategory::Misc => &self.misc,
        }
    }

    /// Non-empty categories in display order.
    pub fn sections(&self) -> impl Iterator<Item = (GroceryCategory, &[GroceryItem])> {
        [
            GroceryCategory::Proteins,
            GroceryCategory::Carbs,
            GroceryCategory::Fats,
            GroceryCategory::Vegetables,
            GroceryCategory::Misc,
        ]
        .into_iter()
        .map(|c| (c, self.get(c)))
        .filter(|(_, items)| !items.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.sections().next().is_none()
    }
}

/// A parsed 7-day plan and its grocery list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedPlan {
    pub days: Vec<DayPlan>,
    #[serde(default)]
    pub grocery_list: GroceryList,
}

impl GeneratedPlan {
    /// Average daily calories across all days.
    pub fn average_calories(&self) -> f64 {
        if self.days.is_empty() {
            return 0.0;
        }
        self.days.iter().map(|d| d.total_calories).sum::<f64>() / self.days.len() as f64
    }
}
