use serde::{Deserialize, Deserializer, Serialize, Serializer};
use validator::ValidateLength;

/// Represents optional field semantics in PATCH/UPDATE requests.
///
/// - `Unchanged` → field absent from the request
/// - `SetToNull` → explicitly `null`
/// - `SetToValue` → set to provided value
///
/// Fields of this type must carry `#[serde(default)]` so that an absent key
/// deserializes to `Unchanged`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum OptionField<T> {
    #[default]
    Unchanged,
    SetToNull,
    SetToValue(T),
}

impl<'de, T> Deserialize<'de> for OptionField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(|value| match value {
            Some(v) => OptionField::SetToValue(v),
            None => OptionField::SetToNull,
        })
    }
}

impl<T: Serialize> Serialize for OptionField<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            OptionField::SetToValue(v) => serializer.serialize_some(v),
            _ => serializer.serialize_none(),
        }
    }
}

// ---------------------- Validation support ----------------------

impl<T> ValidateLength<u64> for OptionField<T>
where
    T: ValidateLength<u64>
{
    fn length(&self) -> Option<u64> {
        match self {
            OptionField::SetToValue(value) => value.length(),
            _ => None,
        }
    }
    fn validate_length(&self, min: Option<u64>, max: Option<u64>, equal: Option<u64>) -> bool {
        match self {
            OptionField::SetToValue(value) => value.validate_length(min, max, equal),
            _ => true,
        }
    }
}

// ---------------------- Core helpers ----------------------

impl<T> OptionField<T> {
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    pub fn value_ref(&self) -> Option<&T> {
        if let Self::SetToValue(v) = self {
            Some(v)
        } else {
            None
        }
    }

    /// Transform by borrowing the inner value
    pub fn map_value_ref<U, F>(&self, f: F) -> OptionField<U>
    where
        F: FnOnce(&T) -> U,
    {
        match self {
            Self::Unchanged => OptionField::Unchanged,
            Self::SetToNull => OptionField::SetToNull,
            Self::SetToValue(v) => OptionField::SetToValue(f(v)),
        }
    }
}

impl<T: Clone> OptionField<T> {
    /// Writes the patch onto a nullable column value.
    pub fn apply_to(&self, target: &mut Option<T>) {
        match self {
            Self::Unchanged => {}
            Self::SetToNull => *target = None,
            Self::SetToValue(v) => *target = Some(v.clone()),
        }
    }
}

impl OptionField<String> {
    /// Blank strings from form inputs mean "clear the field".
    pub fn blank_as_null(&self) -> OptionField<String> {
        match self {
            Self::SetToValue(v) if v.trim().is_empty() => OptionField::SetToNull,
            Self::SetToValue(v) => OptionField::SetToValue(v.trim().to_string()),
            Self::SetToNull => OptionField::SetToNull,
            Self::Unchanged => OptionField::Unchanged,
        }
    }
}

impl<T> From<Option<Option<T>>> for OptionField<T> {
    fn from(opt: Option<Option<T>>) -> Self {
        match opt {
            None => OptionField::Unchanged,
            Some(None) => OptionField::SetToNull,
            Some(Some(v)) => OptionField::SetToValue(v),
        }
    }
}

pub type PatchString = OptionField<String>;
