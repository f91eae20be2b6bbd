//! Form validation for backup and schedule creation.
//!
//! Validation runs before any state change or executor dispatch. Each check
//! maps an offending field name to the rule category it violated; callers get
//! either fully typed parameters or the complete error map. Validation never
//! mutates state and expected bad input is never an error path worth logging.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::model::{
    backup::{BackupForm, BackupType, CreateBackupParams, StorageDriver},
    schedule::{CreateScheduleParams, Frequency, ScheduleForm},
};

/// 24-hour wall-clock time, `HH:MM` exactly.
static TIME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([01][0-9]|2[0-3]):[0-5][0-9]$").expect("valid time regex"));

/// Retention bounds in days.
const RETENTION_MIN: i32 = 1;
const RETENTION_MAX: i32 = 365;

/// Category of rule a field violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rule {
    /// Field is required but absent or empty.
    Required,
    /// Value is not one of the allowed choices.
    In,
    /// Value does not match the required format.
    Regex,
    /// Value is below the allowed minimum.
    Min,
    /// Value is above the allowed maximum.
    Max,
}

impl Rule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::In => "in",
            Self::Regex => "regex",
            Self::Min => "min",
            Self::Max => "max",
        }
    }
}

/// Map from offending field name to the violated rule category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<&'static str, Rule>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    fn add(&mut self, field: &'static str, rule: Rule) {
        self.errors.insert(field, rule);
    }

    /// Gets the violated rule for a field, if any.
    pub fn get(&self, field: &str) -> Option<Rule> {
        self.errors.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterates over `(field, rule)` pairs in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Rule)> + '_ {
        self.errors.iter().map(|(field, rule)| (*field, *rule))
    }
}

/// Validates a backup creation form.
///
/// Rules: `backup_type` required and one of `full`/`incremental`/`snapshot`;
/// `storage_driver` required and one of `local`/`s3`.
///
/// # Arguments
/// - `form` - Raw form input from the creation dialog
///
/// # Returns
/// - `Ok(CreateBackupParams)` - Fully typed parameters
/// - `Err(ValidationErrors)` - Field-to-rule map for every offending field
pub fn validate_backup_form(form: &BackupForm) -> Result<CreateBackupParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let backup_type = check_choice(&mut errors, "backup_type", &form.backup_type, BackupType::parse);
    let storage_driver = check_choice(
        &mut errors,
        "storage_driver",
        &form.storage_driver,
        StorageDriver::parse,
    );

    match (backup_type, storage_driver) {
        (Some(backup_type), Some(storage_driver)) if errors.is_empty() => Ok(CreateBackupParams {
            backup_type,
            storage_driver,
        }),
        _ => Err(errors),
    }
}

/// Validates a schedule creation form, including the conditional day rules.
///
/// `day_of_week` is required and checked against [0, 6] only when the
/// frequency is weekly; `day_of_month` is required and checked against
/// [1, 31] only when the frequency is monthly. The field belonging to the
/// other frequency is ignored even when present, and it is dropped from the
/// returned parameters.
///
/// # Arguments
/// - `form` - Raw form input from the creation dialog
///
/// # Returns
/// - `Ok(CreateScheduleParams)` - Fully typed parameters
/// - `Err(ValidationErrors)` - Field-to-rule map for every offending field
pub fn validate_schedule_form(
    form: &ScheduleForm,
) -> Result<CreateScheduleParams, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let backup_type = check_choice(&mut errors, "backup_type", &form.backup_type, BackupType::parse);
    let frequency = check_choice(&mut errors, "frequency", &form.frequency, Frequency::parse);
    let storage_driver = check_choice(
        &mut errors,
        "storage_driver",
        &form.storage_driver,
        StorageDriver::parse,
    );

    if form.time.is_empty() {
        errors.add("time", Rule::Required);
    } else if !TIME_RE.is_match(&form.time) {
        errors.add("time", Rule::Regex);
    }

    match form.retention_days {
        None => errors.add("retention_days", Rule::Required),
        Some(days) if days < RETENTION_MIN => errors.add("retention_days", Rule::Min),
        Some(days) if days > RETENTION_MAX => errors.add("retention_days", Rule::Max),
        Some(_) => {}
    }

    // Conditional day fields apply only to the frequency that triggers them.
    let mut day_of_week = None;
    let mut day_of_month = None;
    match frequency {
        Some(Frequency::Weekly) => {
            day_of_week = check_range(&mut errors, "day_of_week", form.day_of_week, 0, 6);
        }
        Some(Frequency::Monthly) => {
            day_of_month = check_range(&mut errors, "day_of_month", form.day_of_month, 1, 31);
        }
        _ => {}
    }

    match (backup_type, frequency, storage_driver, form.retention_days) {
        (Some(backup_type), Some(frequency), Some(storage_driver), Some(retention_days))
            if errors.is_empty() =>
        {
            Ok(CreateScheduleParams {
                backup_type,
                frequency,
                time: form.time.clone(),
                day_of_week,
                day_of_month,
                retention_days,
                storage_driver,
            })
        }
        _ => Err(errors),
    }
}

/// Checks a required choice field against its parser.
fn check_choice<T>(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: &str,
    parse: impl Fn(&str) -> Option<T>,
) -> Option<T> {
    if value.is_empty() {
        errors.add(field, Rule::Required);
        return None;
    }

    let parsed = parse(value);
    if parsed.is_none() {
        errors.add(field, Rule::In);
    }
    parsed
}

/// Checks a required integer field against an inclusive range.
fn check_range(
    errors: &mut ValidationErrors,
    field: &'static str,
    value: Option<i32>,
    min: i32,
    max: i32,
) -> Option<i32> {
    match value {
        None => {
            errors.add(field, Rule::Required);
            None
        }
        Some(v) if v < min => {
            errors.add(field, Rule::Min);
            None
        }
        Some(v) if v > max => {
            errors.add(field, Rule::Max);
            None
        }
        Some(v) => Some(v),
    }
}
