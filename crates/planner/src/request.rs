//! Client payloads for menu and cookbook generation.
//!
//! Payloads are free-form: every field is optional, unknown fields are
//! ignored, and scalar fields accept any JSON value (the browser sends
//! guest counts and budgets as numbers or strings depending on the input
//! widget). Values are only ever rendered into prompt text.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use supperplan_core::Error;

/// Rendered in place of a scalar the client did not supply.
pub const NOT_SPECIFIED: &str = "not specified";

/// Preferences for the menu-ideas step.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuPreferences {
    pub event_title: Option<Value>,
    pub guests: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub menu_category: Option<String>,
    #[serde(deserialize_with = "lenient")]
    pub category_details: CategoryDetails,
    pub food_budget: Option<Value>,
    pub wine_budget: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub likes: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub dislikes: Vec<Value>,
    #[serde(deserialize_with = "lenient")]
    pub restrictions: Vec<Value>,
    pub cuisine: Option<Value>,
    pub skill_level: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryDetails {
    #[serde(deserialize_with = "lenient")]
    pub region: Option<String>,
}

/// The cookbook step: one menu chosen from the generated ideas.
///
/// The menu comes back from the model, so nothing about its shape is
/// guaranteed. Parts with an unexpected type are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CookbookRequest {
    pub event_title: Option<Value>,
    pub guests: Option<Value>,
    pub skill_level: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub menu: Option<MenuSelection>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuSelection {
    pub name: Option<Value>,
    #[serde(deserialize_with = "lenient")]
    pub courses: Option<Courses>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Courses {
    #[serde(deserialize_with = "lenient")]
    pub amuse: Option<Dish>,
    #[serde(deserialize_with = "lenient")]
    pub first: Option<Dish>,
    #[serde(deserialize_with = "lenient")]
    pub second: Option<Dish>,
    #[serde(deserialize_with = "lenient")]
    pub main: Option<Dish>,
    #[serde(deserialize_with = "lenient")]
    pub dessert: Option<Dish>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dish {
    pub name: Option<Value>,
    pub description: Option<Value>,
}

/// Decode a field from any JSON value, falling back to the default when
/// the value has a different shape than expected.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// The five dish names of a selected menu, in service order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseNames {
    pub amuse: String,
    pub first: String,
    pub second: String,
    pub main: String,
    pub dessert: String,
}

impl CookbookRequest {
    /// The selected menu's dish names. Every course must be named.
    pub fn course_names(&self) -> Result<CourseNames, Error> {
        let courses = self
            .menu
            .as_ref()
            .ok_or_else(|| Error::InvalidRequest("menu is required".into()))?
            .courses
            .as_ref()
            .ok_or_else(|| Error::InvalidRequest("menu.courses is required".into()))?;

        fn named(dish: &Option<Dish>, course: &str) -> Result<String, Error> {
            dish.as_ref()
                .and_then(|d| d.name.as_ref())
                .filter(|name| !name.is_null())
                .map(|name| display_value(Some(name)).trim().to_string())
                .filter(|name| !name.is_empty())
                .ok_or_else(|| {
                    Error::InvalidRequest(format!("menu.courses.{course}.name is required"))
                })
        }

        Ok(CourseNames {
            amuse: named(&courses.amuse, "amuse")?,
            first: named(&courses.first, "first")?,
            second: named(&courses.second, "second")?,
            main: named(&courses.main, "main")?,
            dessert: named(&courses.dessert, "dessert")?,
        })
    }

    pub fn menu_name(&self) -> String {
        display_value(self.menu.as_ref().and_then(|m| m.name.as_ref()))
    }
}

/// Render a loosely-typed scalar for prompt text.
///
/// Strings are used verbatim, `null` and absent values become
/// [`NOT_SPECIFIED`], anything else uses its JSON form.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => NOT_SPECIFIED.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Like [`display_value`], with a fallback for absent or blank values.
pub fn display_or(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) if s.trim().is_empty() => fallback.to_string(),
        some => display_value(some),
    }
}

/// Join a list of loosely-typed values with `", "`.
pub fn join_values(values: &[Value]) -> String {
    values
        .iter()
        .filter(|v| !v.is_null())
        .map(|v| display_value(Some(v)))
        .collect::<Vec<_>>()
        .join(", ")
}
