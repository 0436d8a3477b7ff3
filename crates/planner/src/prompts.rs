//! Prompt assembly.
//!
//! Each prompt is plain prose followed by the exact JSON structure the model
//! must answer with. The structures are built as `serde_json` values (key
//! order preserved) and pretty-printed, so they are always well-formed.

use std::fmt::Write as _;

use serde_json::{Map, Value, json};
use supperplan_core::Error;

use crate::persona::Persona;
use crate::request::{CookbookRequest, MenuPreferences, display_or, display_value, join_values};

const DEFAULT_EVENT_TITLE: &str = "Dinner Party";
const DEFAULT_GUESTS: &str = "6";
const DEFAULT_REGION: &str = "local";

/// Number of alternative menus requested from the model.
pub const MENU_COUNT: usize = 5;

/// The one-line creative direction for a menu category.
pub fn category_direction(category: Option<&str>, region: Option<&str>) -> String {
    match category {
        Some("tasting") => "Create elegant chef's tasting menus with refined pairings.".into(),
        Some("regional") => {
            let region = region
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .unwrap_or(DEFAULT_REGION);
            format!("Create authentic {region} regional American menus.")
        }
        Some("seasonal") => {
            "Create seasonal, farm-to-table menus with peak freshness ingredients.".into()
        }
        _ => "Create balanced, impressive dinner party menus.".into(),
    }
}

/// Prompt for the menu-ideas step.
pub fn menu_prompt(prefs: &MenuPreferences) -> String {
    let direction = category_direction(
        prefs.menu_category.as_deref(),
        prefs.category_details.region.as_deref(),
    );

    let mut prompt = String::with_capacity(2048);
    let _ = writeln!(prompt, "{}", Persona::MenuGenerator);
    prompt.push('\n');
    prompt.push_str("A host has asked you to design dinner party menus.\n");
    let _ = writeln!(
        prompt,
        "EVENT: {}",
        display_or(prefs.event_title.as_ref(), DEFAULT_EVENT_TITLE)
    );
    let _ = writeln!(
        prompt,
        "GUESTS: {}",
        display_or(prefs.guests.as_ref(), DEFAULT_GUESTS)
    );
    let _ = writeln!(prompt, "DIRECTION: {direction}");
    prompt.push('\n');
    prompt.push_str("PREFERENCES:\n");
    let _ = writeln!(prompt, "- Food Budget: {}", display_value(prefs.food_budget.as_ref()));
    let _ = writeln!(prompt, "- Wine Budget: {}", display_value(prefs.wine_budget.as_ref()));
    let _ = writeln!(prompt, "- They love: {}", list_or_none(&prefs.likes));
    let _ = writeln!(prompt, "- They avoid: {}", list_or_none(&prefs.dislikes));
    let _ = writeln!(
        prompt,
        "- Dietary restrictions: {}",
        list_or_none(&prefs.restrictions)
    );
    let _ = writeln!(
        prompt,
        "- Cuisine preference: {}",
        display_value(prefs.cuisine.as_ref())
    );
    let _ = writeln!(prompt, "- Skill: {}", display_value(prefs.skill_level.as_ref()));
    prompt.push('\n');
    let _ = writeln!(
        prompt,
        "Design {MENU_COUNT} distinct menus. Each should tell a story."
    );
    prompt.push_str("RESPOND WITH ONLY VALID JSON:\n");
    prompt.push_str(&pretty(&menu_structure()));

    prompt
}

/// Prompt for the full cookbook of a selected menu.
///
/// Fails with [`Error::InvalidRequest`] when the menu or any course name is
/// missing.
pub fn cookbook_prompt(req: &CookbookRequest) -> Result<String, Error> {
    let courses = req.course_names()?;
    let title = display_or(req.event_title.as_ref(), DEFAULT_EVENT_TITLE);
    let guests = display_or(req.guests.as_ref(), DEFAULT_GUESTS);

    let mut prompt = String::with_capacity(8192);
    prompt.push_str("You are assembling a complete dinner party cookbook.\n\n");
    prompt.push_str("CRITICAL INSTRUCTION: You must generate the detailed RECIPES first.\n");
    prompt.push_str(
        "Then, create the SHOPPING LIST and PREP TIMELINE based *strictly* on those specific recipes.\n",
    );
    prompt.push_str("NEVER use generic terms like \"Fish\" or \"Meat\" or \"Vegetables\".\n");
    prompt.push_str(
        "ALWAYS use specific amounts and items (e.g., \"6x 6oz Halibut Fillets\", \"2 lbs Baby Carrots\").\n\n",
    );
    let _ = writeln!(prompt, "EVENT: {title}");
    let _ = writeln!(prompt, "GUESTS: {guests}");
    let _ = writeln!(
        prompt,
        "SKILL LEVEL: {}",
        display_value(req.skill_level.as_ref())
    );
    prompt.push('\n');
    let _ = writeln!(prompt, "SELECTED MENU: {}", req.menu_name());
    prompt.push('\n');
    prompt.push_str("COURSES:\n");
    let _ = writeln!(prompt, "- Amuse: {}", courses.amuse);
    let _ = writeln!(prompt, "- First: {}", courses.first);
    let _ = writeln!(prompt, "- Second: {}", courses.second);
    let _ = writeln!(prompt, "- Main: {}", courses.main);
    let _ = writeln!(prompt, "- Dessert: {}", courses.dessert);
    prompt.push('\n');
    prompt.push_str("RESPOND WITH ONLY VALID JSON matching this structure.\n");
    prompt.push_str("(Note: 'recipes' must be generated before 'shopping' to ensure accuracy).\n\n");
    prompt.push_str(&pretty(&cookbook_structure(&title, &guests)));

    Ok(prompt)
}

fn list_or_none(values: &[Value]) -> String {
    let joined = join_values(values);
    if joined.is_empty() {
        "none".into()
    } else {
        joined
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn dish_placeholder() -> Value {
    json!({"name": "Dish Name", "description": "Brief description"})
}

/// The answer structure for the menu-ideas step.
pub fn menu_structure() -> Value {
    json!({
        "menus": [
            {
                "name": "Menu Name",
                "description": "2-3 sentences on the story this menu tells",
                "courses": {
                    "amuse": dish_placeholder(),
                    "first": dish_placeholder(),
                    "second": dish_placeholder(),
                    "main": dish_placeholder(),
                    "dessert": dish_placeholder()
                },
                "wine": "Overall pairing philosophy",
                "estimatedFoodCost": "$XXX"
            }
        ]
    })
}

/// The answer structure for the cookbook step.
///
/// Section order matters: recipes come first so that the shopping list and
/// timelines can be derived from them.
pub fn cookbook_structure(title: &str, guests: &str) -> Value {
    let bottle = || json!([{"name": "Bottle", "description": "Why", "price": "$XX"}]);

    let mut cocktail = Map::new();
    cocktail.insert("_persona".into(), json!(Persona::Spirits.text()));
    cocktail.insert("name".into(), json!("Cocktail Name"));
    cocktail.insert("description".into(), json!("Desc"));
    cocktail.insert("ingredients".into(), json!(["list"]));
    cocktail.insert("instructions".into(), json!("text"));
    cocktail.insert(format!("batchFor{guests}"), json!("Batch instructions"));

    json!({
        "title": format!("{title} Cookbook"),
        "recipes": {
            "_persona": Persona::RecipeBuilder.text(),
            "courses": [
                {
                    "course": "Amuse/First/Main/etc",
                    "dish": "Specific Dish Name",
                    "yield": format!("{guests} servings"),
                    "prepTime": "XX min",
                    "cookTime": "XX min",
                    "ingredients": [
                        {"item": "Specific Ingredient", "amount": "Exact Qty", "prep": "prep note"}
                    ],
                    "instructions": ["Step 1", "Step 2"],
                    "chefNotes": "Tips"
                }
            ]
        },
        "shopping": {
            "_persona": Persona::ShoppingList.text(),
            "_instruction": "Compile strictly from 'recipes' section. Consolidate amounts.",
            "proteins": [{"item": "Specific Item", "quantity": "Total Needed", "notes": "notes"}],
            "seafood": [],
            "dairy": [],
            "produce": [],
            "pantry": [],
            "specialty": []
        },
        "dayBefore": {
            "_persona": Persona::PrepTimeline.text(),
            "_instruction": "Look at 'recipes' above. Identify steps that can be done 24h ahead.",
            "tasks": [{
                "time": "Morning",
                "task": "Specific Task",
                "duration": "1h",
                "instructions": [],
                "storage": "method",
                "checkpoint": "verification"
            }]
        },
        "dayOf": {
            "_persona": "Executive Chef",
            "serviceTime": "7:00 PM",
            "timeline": [{
                "time": "3:00 PM",
                "task": "Specific Task",
                "duration": "30m",
                "details": [],
                "checkpoint": "verification"
            }]
        },
        "wines": {
            "_persona": Persona::WinePairings.text(),
            "aperitif": bottle(),
            "dinner": bottle(),
            "dessert": bottle()
        },
        "cocktail": Value::Object(cocktail),
        "tableSetting": {
            "_persona": Persona::TableSettings.text(),
            "mood": "text",
            "dimensions": "text",
            "placeSetting": {"left": [], "right": [], "above": [], "glasses": []},
            "centerpiece": "text",
            "lighting": "text",
            "linens": "text",
            "proTip": "text"
        },
        "plating": {
            "_persona": Persona::Plating.text(),
            "courses": [{
                "course": "Course",
                "vessel": "text",
                "composition": "text",
                "sauce": "text",
                "garnish": "text",
                "temperature": "text",
                "principle": "text"
            }]
        },
        "imagePrompts": {
            "_persona": Persona::Photographer.text(),
            "styleGuide": "Consistent visual style",
            "tablescape": "Prompt",
            "amuse": "Prompt",
            "first": "Prompt",
            "second": "Prompt",
            "main": "Prompt",
            "dessert": "Prompt"
        },
        "finalChecklist": {
            "tableAndAmbiance": [],
            "kitchen": [],
            "drinks": [],
            "host": []
        }
    })
}
