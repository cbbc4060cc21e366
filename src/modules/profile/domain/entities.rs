use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Reads an explicit `null` the same way as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Top-level record of the portfolio data bundle.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Profile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub last_name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub specialization: Option<String>,
    /// Free-text biography.
    #[serde(default)]
    pub about: Option<String>,
    /// Years of experience, as the bundle spells it.
    #[serde(default)]
    pub experience: Option<DisplayValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default)]
    pub contacts: Option<Contacts>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub performer: Performer,
}

impl Profile {
    /// First and last name joined by a space, skipping empty parts.
    pub fn full_name(&self) -> String {
        [self.first_name.trim(), self.last_name.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Contacts {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Performer {
    #[serde(default, deserialize_with = "null_as_default")]
    pub portfolio: Collection<WorkSample>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub feedback: Collection<Testimonial>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub completed_tasks: Collection<CompletedTask>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Collection<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            total_count: 0,
            items: Vec::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WorkSample {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub images: Vec<String>,
    /// Unix seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Testimonial {
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CompletedTask {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    /// Already joined for display.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: String,
    #[serde(default)]
    pub price: Option<DisplayValue>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: i64,
}

/// A value the bundle may carry as either a string or a number, shown as-is.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum DisplayValue {
    Number(serde_json::Number),
    Text(String),
}

impl DisplayValue {
    /// Empty strings and zero count as absent.
    pub fn is_blank(&self) -> bool {
        match self {
            DisplayValue::Text(s) => s.trim().is_empty(),
            DisplayValue::Number(n) => n.as_f64() == Some(0.0),
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Number(n) => write!(f, "{}", n),
            DisplayValue::Text(s) => write!(f, "{}", s),
        }
    }
}
