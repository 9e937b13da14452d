use crate::models::{DayPlan, GeneratedPlan, GroceryList, MacroResult};

pub const DISCLAIMER: &str = "\
This nutrition plan is generated using the Mifflin-St Jeor equation and AI-generated
meal planning. It is intended for generally healthy adults aged 18-60 without diagnosed
metabolic or medical conditions. It is NOT medical advice.

Calorie estimates can vary by 10-20% due to individual metabolic differences. Meal plans
are generated by AI; ingredient quantities and nutritional values are approximations.
Please consult a qualified healthcare professional before making significant dietary changes.";

/// Print the disclaimer shown before the questionnaire.
pub fn display_disclaimer() {
    println!();
    println!("=== Important Disclaimer ===");
    println!();
    println!("{DISCLAIMER}");
    println!();
}

/// Display calorie and macro targets with any warnings.
pub fn display_macros(macros: &MacroResult) {
    let kcal = macros.macro_calories();

    println!();
    println!("=== Your Targets ===");
    println!();
    println!("BMR:             {:>5} kcal", macros.bmr);
    println!("TDEE:            {:>5} kcal", macros.tdee);
    println!("Daily target:    {:>5} kcal", macros.target_calories);
    println!("BMI:             {:>5.1}", macros.bmi);
    println!();
    println!("Protein: {:>4} g ({:>4} kcal)", macros.protein_g, kcal.protein);
    println!("Carbs:   {:>4} g ({:>4} kcal)", macros.carb_g, kcal.carbs);
    println!("Fat:     {:>4} g ({:>4} kcal)", macros.fat_g, kcal.fat);

    if macros.has_warnings() {
        println!();
        println!("--- Warnings ---");
        for warning in &macros.warnings {
            println!("  ! {warning}");
        }
        println!("Consider speaking with a healthcare professional before following this plan.");
    }

    println!();
}

/// Format a single day as text.
pub fn format_day(day: &DayPlan) -> String {
    let mut out = format!(
        "Day {} - {}  ({:.0} kcal | P:{:.0}g C:{:.0}g F:{:.0}g)\n",
        day.day, day.day_name, day.total_calories, day.total_protein, day.total_carbs, day.total_fat
    );

    for meal in &day.meals {
        out.push_str(&format!(
            "  {}: {:.0} kcal | P:{:.0}g C:{:.0}g F:{:.0}g\n",
            meal.meal_name, meal.calories, meal.protein, meal.carbs, meal.fat
        ));

        let width = meal.foods.iter().map(|f| f.item.len()).max().unwrap_or(0);
        for food in &meal.foods {
            out.push_str(&format!("    - {:<width$}  {}\n", food.item, food.amount));
        }
    }

    out
}

/// Format the grocery list, skipping empty categories.
pub fn format_grocery_list(list: &GroceryList) -> String {
    if list.is_empty() {
        return "(no grocery list)\n".to_string();
    }

    let mut out = String::new();
    for (category, items) in list.sections() {
        out.push_str(&format!("{category}\n"));
        let width = items.iter().map(|i| i.item.len()).max().unwrap_or(0);
        for item in items {
            out.push_str(&format!("  - {:<width$}  {}\n", item.item, item.total_amount));
        }
    }
    out
}

/// Display a full 7-day plan and its grocery list.
pub fn display_meal_plan(plan: &GeneratedPlan) {
    println!();
    println!("=== Your 7-Day Meal Plan ===");
    println!();

    for day in &plan.days {
        print!("{}", format_day(day));
        println!();
    }

    println!("=== Grocery List ===");
    println!();
    print!("{}", format_grocery_list(&plan.grocery_list));

    println!();
    println!("--- Summary ---");
    println!("Days: {}", plan.days.len());
    println!("Average calories: {:.0}", plan.average_calories());
    println!();
}
