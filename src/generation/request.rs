use serde::Serialize;

use crate::models::{MacroResult, Submission};

/// Allowed deviation of each day's totals from the targets, in percent.
pub const DAY_TOLERANCE_PCT: u32 = 5;

const MEAL_LABELS: [&str; 5] = ["Breakfast", "Lunch", "Dinner", "Snack 1", "Snack 2"];

const OUTPUT_SCHEMA: &str = r#"{
  "days": [
    {
      "day": 1,
      "dayName": "Monday",
      "totalCalories": 2100,
      "totalProtein": 175,
      "totalCarbs": 210,
      "totalFat": 65,
      "meals": [
        {
          "mealName": "Breakfast",
          "calories": 520,
          "protein": 42,
          "carbs": 55,
          "fat": 14,
          "foods": [
            { "item": "Greek Yogurt (Full Fat)", "amount": "200g" },
            { "item": "Rolled Oats", "amount": "80g" },
            { "item": "Blueberries", "amount": "100g" }
          ]
        }
      ]
    }
  ],
  "groceryList": {
    "proteins": [{ "item": "Chicken Breast", "totalAmount": "1.4kg" }],
    "carbs": [{ "item": "Rolled Oats", "totalAmount": "560g" }],
    "fats": [{ "item": "Olive Oil", "totalAmount": "120ml" }],
    "vegetables": [{ "item": "Broccoli", "totalAmount": "700g" }],
    "misc": [{ "item": "Greek Yogurt", "totalAmount": "1.4kg" }]
  }
}"#;

/// Request body for a Messages-style text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<RequestMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestMessage {
    pub role: String,
    pub content: String,
}

impl PlanRequest {
    /// Wrap a single instruction as the only user message.
    pub fn new(model: &str, max_tokens: u32, instruction: String) -> Self {
        Self {
            model: model.to_string(),
            max_tokens,
            messages: vec![RequestMessage {
                role: "user".to_string(),
                content: instruction,
            }],
        }
    }

    /// The instruction text carried by the request.
    pub fn instruction(&self) -> &str {
        self.messages
            .first()
            .map(|m| m.content.as_str())
            .unwrap_or_default()
    }
}

/// Labels for the first `meals` meals of a day.
pub fn meal_labels(meals: u8) -> Vec<&'static str> {
    MEAL_LABELS.iter().take(meals as usize).copied().collect()
}

/// Build the natural-language instruction for a 7-day plan.
pub fn build_instruction(submission: &Submission, macros: &MacroResult) -> String {
    let Submission {
        identity,
        profile,
        preferences,
    } = submission;

    let meals = preferences.meals_per_day;
    let avoid = preferences.avoid_list();

    format!(
        "You are a professional sports nutritionist. Generate a detailed 7-day meal plan for a client with these specs:

CLIENT: {name}, {sex}, age {age}, {weight}kg, {height}cm
GOAL: {goal}
CALORIE TARGET: {target} kcal/day
MACROS: Protein {protein}g | Carbs {carbs}g | Fat {fat}g
MEALS PER DAY: {meals}
DIETARY STYLE: {dietary}
ALLERGIES/AVOID: {allergies}
BUDGET: {budget}

Return ONLY valid JSON in this exact structure (no markdown, no extra text):
{schema}

RULES:
- Each day MUST total within ±{tol}% of {target} calories
- Each day MUST total within ±{tol}% of {protein}g protein
- Include exactly {meals} meals per day (label them {labels})
- Be specific with portions and realistic with ingredients
- Match the {dietary} dietary style strictly
- Avoid: {avoid}
- Budget level: {budget} ({guidance})
- Return ONLY the JSON object, nothing else",
        name = identity.name.trim(),
        sex = profile.sex,
        age = profile.age,
        weight = profile.weight_kg,
        height = profile.height_cm,
        goal = profile.goal,
        target = macros.target_calories,
        protein = macros.protein_g,
        carbs = macros.carb_g,
        fat = macros.fat_g,
        meals = meals,
        dietary = preferences.dietary,
        allergies = avoid.unwrap_or("None"),
        schema = OUTPUT_SCHEMA,
        tol = DAY_TOLERANCE_PCT,
        labels = meal_labels(meals).join(", "),
        avoid = avoid.unwrap_or("nothing specific"),
        budget = preferences.budget,
        guidance = preferences.budget.guidance(),
    )
}

/// Build the full request payload for a submission and its targets.
pub fn build_request(
    submission: &Submission,
    macros: &MacroResult,
    model: &str,
    max_tokens: u32,
) -> PlanRequest {
    PlanRequest::new(model, max_tokens, build_instruction(submission, macros))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        ActivityLevel, Budget, DietaryStyle, Goal, Identity, Preferences, Profile, Sex,
    };
    use crate::planner::compute_macros;

    fn sample_submission() -> Submission {
        Submission {
            identity: Identity {
                name: "Sam Smith".to_string(),
                email: "sam@example.com".to_string(),
            },
            profile: Profile {
                sex: Sex::Male,
                weight_kg: 75.0,
                height_cm: 175.0,
                age: 28,
                goal: Goal::FatLoss,
                activity_level: ActivityLevel::Moderate,
            },
            preferences: Preferences {
                meals_per_day: 4,
                dietary: DietaryStyle::Vegetarian,
                allergies: String::new(),
                budget: Budget::Budget,
            },
        }
    }

    #[test]
    fn test_instruction_embeds_targets() {
        let submission = sample_submission();
        let macros = compute_macros(&submission.profile);
        let text = build_instruction(&submission, &macros);

        assert!(text.contains("CLIENT: Sam Smith, male, age 28, 75kg, 175cm"));
        assert!(text.contains("GOAL: fat loss"));
        assert!(text.contains(&format!("CALORIE TARGET: {} kcal/day", macros.target_calories)));
        assert!(text.contains(&format!(
            "MACROS: Protein {}g | Carbs {}g | Fat {}g",
            macros.protein_g, macros.carb_g, macros.fat_g
        )));
        assert!(text.contains(&format!("±5% of {} calories", macros.target_calories)));
        assert!(text.contains(&format!("±5% of {}g protein", macros.protein_g)));
    }

    #[test]
    fn test_instruction_preferences() {
        let submission = sample_submission();
        let macros = compute_macros(&submission.profile);
        let text = build_instruction(&submission, &macros);

        assert!(text.contains("MEALS PER DAY: 4"));
        assert!(text.contains("exactly 4 meals per day (label them Breakfast, Lunch, Dinner, Snack 1)"));
        assert!(text.contains("DIETARY STYLE: vegetarian"));
        assert!(text.contains("ALLERGIES/AVOID: None"));
        assert!(text.contains("- Avoid: nothing specific"));
        assert!(text.contains("Budget level: budget (use affordable staple foods)"));
    }

    #[test]
    fn test_instruction_avoid_list() {
        let mut submission = sample_submission();
        submission.preferences.allergies = " nuts, shellfish ".to_string();
        let macros = compute_macros(&submission.profile);
        let text = build_instruction(&submission, &macros);

        assert!(text.contains("ALLERGIES/AVOID: nuts, shellfish\n"));
        assert!(text.contains("- Avoid: nuts, shellfish\n"));
    }

    #[test]
    fn test_instruction_carries_schema() {
        let submission = sample_submission();
        let macros = compute_macros(&submission.profile);
        let text = build_instruction(&submission, &macros);

        for key in ["\"dayName\"", "\"mealName\"", "\"foods\"", "\"groceryList\"", "\"totalAmount\""] {
            assert!(text.contains(key), "missing {key}");
        }
        assert!(text.ends_with("Return ONLY the JSON object, nothing else"));
    }

    #[test]
    fn test_request_payload_shape() {
        let submission = sample_submission();
        let macros = compute_macros(&submission.profile);
        let request = build_request(&submission, &macros, "test-model", 4000);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["model"], "test-model");
        assert_eq!(body["max_tokens"], 4000);
        assert_eq!(body["messages"].as_array().unwrap().len(), 1);
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(request.instruction(), build_instruction(&submission, &macros));
    }

    #[test]
    fn test_meal_labels() {
        assert_eq!(meal_labels(3), vec!["Breakfast", "Lunch", "Dinner"]);
        assert_eq!(meal_labels(5).len(), 5);
    }
}
