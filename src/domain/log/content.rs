//! Category-specific log payloads
//!
//! The extraction model returns payloads as loose JSON. The wire shape is
//! never trusted directly as the domain type: a raw `serde_json::Value` is
//! converted into [`LogContent`] through [`LogContent::from_value`], which
//! rejects any payload whose fields do not match the declared category.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::category::Category;
use crate::domain::error::PayloadError;

/// Meal slot for nutrition entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Ontbijt,
    Lunch,
    Diner,
    Snack,
    Drank,
}

impl MealType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ontbijt => "ontbijt",
            Self::Lunch => "lunch",
            Self::Diner => "diner",
            Self::Snack => "snack",
            Self::Drank => "drank",
        }
    }
}

impl FromStr for MealType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ontbijt" => Ok(Self::Ontbijt),
            "lunch" => Ok(Self::Lunch),
            "diner" => Ok(Self::Diner),
            "snack" => Ok(Self::Snack),
            "drank" => Ok(Self::Drank),
            _ => Err(()),
        }
    }
}

/// Dosage unit for supplement entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DosageUnit {
    #[serde(rename = "mg")]
    Mg,
    #[serde(rename = "mcg")]
    Mcg,
    #[serde(rename = "IU")]
    Iu,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "stuks")]
    Stuks,
}

impl DosageUnit {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mg => "mg",
            Self::Mcg => "mcg",
            Self::Iu => "IU",
            Self::Ml => "ml",
            Self::Stuks => "stuks",
        }
    }
}

impl FromStr for DosageUnit {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mg" => Ok(Self::Mg),
            "mcg" => Ok(Self::Mcg),
            "IU" => Ok(Self::Iu),
            "ml" => Ok(Self::Ml),
            "stuks" => Ok(Self::Stuks),
            _ => Err(()),
        }
    }
}

/// Exercise intensity for movement entries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Licht,
    Matig,
    Intens,
}

impl Intensity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Licht => "licht",
            Self::Matig => "matig",
            Self::Intens => "intens",
        }
    }
}

impl FromStr for Intensity {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "licht" => Ok(Self::Licht),
            "matig" => Ok(Self::Matig),
            "intens" => Ok(Self::Intens),
            _ => Err(()),
        }
    }
}

/// Subjective sleep quality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SleepQuality {
    Slecht,
    Matig,
    Goed,
    Uitstekend,
}

impl SleepQuality {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slecht => "slecht",
            Self::Matig => "matig",
            Self::Goed => "goed",
            Self::Uitstekend => "uitstekend",
        }
    }
}

impl FromStr for SleepQuality {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "slecht" => Ok(Self::Slecht),
            "matig" => Ok(Self::Matig),
            "goed" => Ok(Self::Goed),
            "uitstekend" => Ok(Self::Uitstekend),
            _ => Err(()),
        }
    }
}

/// Kind of wellbeing observation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WellbeingKind {
    Energie,
    Mood,
    Stress,
    Symptoom,
    Algemeen,
}

impl WellbeingKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Energie => "energie",
            Self::Mood => "mood",
            Self::Stress => "stress",
            Self::Symptoom => "symptoom",
            Self::Algemeen => "algemeen",
        }
    }
}

impl FromStr for WellbeingKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "energie" => Ok(Self::Energie),
            "mood" => Ok(Self::Mood),
            "stress" => Ok(Self::Stress),
            "symptoom" => Ok(Self::Symptoom),
            "algemeen" => Ok(Self::Algemeen),
            _ => Err(()),
        }
    }
}

/// Nutrition payload: what was eaten or drunk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionContent {
    pub items: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<MealType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
}

/// Supplement payload: name is required, dosage is never assumed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupplementContent {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dosage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<DosageUnit>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// Movement payload: physical activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementContent {
    pub activity: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<f64>,
}

/// Sleep payload: all fields optional
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_hours: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<SleepQuality>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Wellbeing payload: energy, mood, stress, symptoms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellbeingContent {
    #[serde(rename = "type")]
    pub kind: WellbeingKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Catch-all payload for anything outside the other five categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherContent {
    pub description: String,
}

/// Tagged union of per-category payloads. The variant present must match
/// the category tag carried next to it; [`LogContent::from_value`] is the
/// only way wire data becomes a `LogContent`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LogContent {
    Voeding(NutritionContent),
    Supplement(SupplementContent),
    Beweging(MovementContent),
    Slaap(SleepContent),
    Welzijn(WellbeingContent),
    Overig(OtherContent),
}

impl LogContent {
    /// The category this payload belongs to
    pub const fn category(&self) -> Category {
        match self {
            Self::Voeding(_) => Category::Voeding,
            Self::Supplement(_) => Category::Supplement,
            Self::Beweging(_) => Category::Beweging,
            Self::Slaap(_) => Category::Slaap,
            Self::Welzijn(_) => Category::Welzijn,
            Self::Overig(_) => Category::Overig,
        }
    }

    /// One-line Dutch description for display
    pub fn summary(&self) -> String {
        match self {
            Self::Voeding(c) => {
                let mut text = c.items.join(", ");
                if let Some(meal_type) = c.meal_type {
                    text.push_str(&format!(" ({})", meal_type.as_str()));
                }
                if let Some(quantity) = &c.quantity {
                    text.push_str(&format!(", {}", quantity));
                }
                if let Some(calories) = c.calories {
                    text.push_str(&format!(", {} kcal", calories));
                }
                text
            }
            Self::Supplement(c) => {
                let mut text = c.name.clone();
                if let Some(dosage) = &c.dosage {
                    text.push_str(&format!(" {}", dosage));
                    if let Some(unit) = c.unit {
                        text.push_str(&format!(" {}", unit.as_str()));
                    }
                }
                if let Some(quantity) = c.quantity {
                    text.push_str(&format!(" x{}", quantity));
                }
                text
            }
            Self::Beweging(c) => {
                let mut text = c.activity.clone();
                if let Some(minutes) = c.duration_minutes {
                    text.push_str(&format!(", {} min", minutes));
                }
                if let Some(km) = c.distance_km {
                    text.push_str(&format!(", {} km", km));
                }
                if let Some(intensity) = c.intensity {
                    text.push_str(&format!(" ({})", intensity.as_str()));
                }
                text
            }
            Self::Slaap(c) => {
                let mut parts = Vec::new();
                if let Some(hours) = c.duration_hours {
                    parts.push(format!("{} uur", hours));
                }
                if let Some(quality) = c.quality {
                    parts.push(quality.as_str().to_string());
                }
                if let Some(notes) = &c.notes {
                    parts.push(notes.clone());
                }
                if parts.is_empty() {
                    "slaap".to_string()
                } else {
                    parts.join(", ")
                }
            }
            Self::Welzijn(c) => {
                let mut text = c.kind.as_str().to_string();
                if let Some(level) = c.level {
                    text.push_str(&format!(" ({}/10)", level));
                }
                if let Some(description) = &c.description {
                    text.push_str(&format!(": {}", description));
                }
                text
            }
            Self::Overig(c) => c.description.clone(),
        }
    }

    /// Build the fallback payload for an unparseable extraction
    pub fn fallback(transcript: &str) -> Self {
        Self::Overig(OtherContent {
            description: transcript.to_string(),
        })
    }

    /// Validating conversion from a raw JSON payload for the given category.
    ///
    /// Rejects non-object payloads, missing required fields, out-of-range
    /// values, and unknown enum values. Converting the serialized form of a
    /// valid payload yields the same payload (validation is idempotent).
    pub fn from_value(category: Category, value: &Value) -> Result<Self, PayloadError> {
        let obj = value.as_object().ok_or_else(|| PayloadError::NotAnObject {
            category: category.to_string(),
        })?;

        let content = match category {
            Category::Voeding => Self::Voeding(NutritionContent {
                items: req_string_list(category, obj, "items")?,
                meal_type: opt_enum(obj, "meal_type")?,
                quantity: opt_string(obj, "quantity")?,
                calories: opt_u32(obj, "calories")?,
            }),
            Category::Supplement => Self::Supplement(SupplementContent {
                name: req_string(category, obj, "name")?,
                dosage: opt_string(obj, "dosage")?,
                unit: opt_enum(obj, "unit")?,
                quantity: opt_u32(obj, "quantity")?,
            }),
            Category::Beweging => Self::Beweging(MovementContent {
                activity: req_string(category, obj, "activity")?,
                duration_minutes: opt_u32(obj, "duration_minutes")?,
                intensity: opt_enum(obj, "intensity")?,
                distance_km: opt_f64(obj, "distance_km")?,
            }),
            Category::Slaap => Self::Slaap(SleepContent {
                duration_hours: opt_f64(obj, "duration_hours")?,
                quality: opt_enum(obj, "quality")?,
                notes: opt_string(obj, "notes")?,
            }),
            Category::Welzijn => {
                let kind_raw = req_string(category, obj, "type")?;
                let kind = kind_raw.parse().map_err(|_| PayloadError::InvalidField {
                    field: "type",
                    message: format!("unknown wellbeing type \"{}\"", kind_raw),
                })?;
                let level = opt_u32(obj, "level")?
                    .map(|n| {
                        if (1..=10).contains(&n) {
                            Ok(n as u8)
                        } else {
                            Err(PayloadError::InvalidField {
                                field: "level",
                                message: format!("{} is outside 1-10", n),
                            })
                        }
                    })
                    .transpose()?;
                Self::Welzijn(WellbeingContent {
                    kind,
                    level,
                    description: opt_string(obj, "description")?,
                })
            }
            Category::Overig => Self::Overig(OtherContent {
                description: req_string(category, obj, "description")?,
            }),
        };

        Ok(content)
    }
}

fn req_string(
    category: Category,
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, PayloadError> {
    match obj.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        // An empty required string is as useless as an absent one.
        Some(Value::String(_)) | Some(Value::Null) | None => Err(PayloadError::MissingField {
            category: category.to_string(),
            field,
        }),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            message: "expected a string".to_string(),
        }),
    }
}

fn req_string_list(
    category: Category,
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Vec<String>, PayloadError> {
    let value = obj.get(field).ok_or_else(|| PayloadError::MissingField {
        category: category.to_string(),
        field,
    })?;
    let list = value.as_array().ok_or_else(|| PayloadError::InvalidField {
        field,
        message: "expected an array of strings".to_string(),
    })?;
    list.iter()
        .map(|v| {
            v.as_str()
                .map(str::to_string)
                .ok_or_else(|| PayloadError::InvalidField {
                    field,
                    message: "expected an array of strings".to_string(),
                })
        })
        .collect()
}

fn opt_string(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, PayloadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            message: "expected a string".to_string(),
        }),
    }
}

fn opt_f64(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<f64>, PayloadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => Ok(n.as_f64()),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            message: "expected a number".to_string(),
        }),
    }
}

fn opt_u32(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<u32>, PayloadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => {
            n.as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .map(Some)
                .ok_or_else(|| PayloadError::InvalidField {
                    field,
                    message: "expected a non-negative integer".to_string(),
                })
        }
        Some(_) => Err(PayloadError::InvalidField {
            field,
            message: "expected a number".to_string(),
        }),
    }
}

fn opt_enum<T: FromStr>(
    obj: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>, PayloadError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => s.parse().map(Some).map_err(|_| PayloadError::InvalidField {
            field,
            message: format!("unknown value \"{}\"", s),
        }),
        Some(_) => Err(PayloadError::InvalidField {
            field,
            message: "expected a string".to_string(),
        }),
    }
}
