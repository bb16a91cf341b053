//! Health log entities and payloads

pub mod content;
pub mod health_log;

pub use content::{
    DosageUnit, Intensity, LogContent, MealType, MovementContent, NutritionContent, OtherContent,
    SleepContent, SleepQuality, SupplementContent, WellbeingContent, WellbeingKind,
};
pub use health_log::{BatchMeta, HealthLog};
