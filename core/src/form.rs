//! Editable drafts behind the registration forms.
//!
//! A form holds exactly what the user typed. `validate` is the synchronous
//! gate run before any request is built.

use crate::error::ValidationError;
use crate::types::{NewAnimal, NewService};

/// Upper bound accepted by the age field.
pub const MAX_AGE: u32 = 50;

/// Coerce raw age input to a non-negative integer.
///
/// Parses an integer prefix the way a browser number field feeds `parseInt`:
/// leading whitespace, an optional sign, then digits. Empty, unparseable or
/// negative input degrades to `0` instead of rejecting the keystroke. Digits
/// too large for `u32` saturate so the range check still rejects them.
pub fn coerce_age(input: &str) -> u32 {
    let trimmed = input.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits: &str = match rest.find(|c: char| !c.is_ascii_digit()) {
        Some(end) => &rest[..end],
        None => rest,
    };
    if negative || digits.is_empty() {
        return 0;
    }
    digits.parse().unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalForm {
    pub name: String,
    pub species: String,
    pub age: u32,
}

impl AnimalForm {
    pub fn set_name(&mut self, value: &str) {
        self.name = value.to_string();
    }

    pub fn set_species(&mut self, value: &str) {
        self.species = value.to_string();
    }

    pub fn set_age_input(&mut self, raw: &str) {
        self.age = coerce_age(raw);
    }

    pub fn validate(&self) -> Result<NewAnimal, ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.species.trim().is_empty() {
            return Err(ValidationError::MissingField("species"));
        }
        if self.age > MAX_AGE {
            return Err(ValidationError::AgeOutOfRange {
                age: self.age,
                max: MAX_AGE,
            });
        }
        Ok(NewAnimal {
            name: self.name.clone(),
            species: self.species.clone(),
            age: self.age,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceForm {
    pub kind: String,
    pub description: String,
}

impl ServiceForm {
    pub fn set_kind(&mut self, value: &str) {
        self.kind = value.to_string();
    }

    pub fn set_description(&mut self, value: &str) {
        self.description = value.to_string();
    }

    /// The selected animal lives in the view, so it is checked here too: a
    /// service without an animal never reaches the network.
    pub fn validate(&self, selected_animal: Option<i64>) -> Result<(i64, NewService), ValidationError> {
        let animal_id = selected_animal.ok_or(ValidationError::NoAnimalSelected)?;
        if self.kind.trim().is_empty() {
            return Err(ValidationError::MissingField("type"));
        }
        if self.description.trim().is_empty() {
            return Err(ValidationError::MissingField("description"));
        }
        Ok((
            animal_id,
            NewService {
                kind: self.kind.clone(),
                description: self.description.clone(),
            },
        ))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_age_parses_plain_numbers() {
        assert_eq!(coerce_age("3"), 3);
        assert_eq!(coerce_age("  12"), 12);
        assert_eq!(coerce_age("+7"), 7);
    }

    #[test]
    fn coerce_age_takes_integer_prefix() {
        assert_eq!(coerce_age("4years"), 4);
        assert_eq!(coerce_age("2.9"), 2);
    }

    #[test]
    fn coerce_age_degrades_to_zero() {
        assert_eq!(coerce_age(""), 0);
        assert_eq!(coerce_age("abc"), 0);
        assert_eq!(coerce_age("-3"), 0);
    }

    #[test]
    fn coerce_age_saturates_overflow() {
        assert_eq!(coerce_age("4294967296"), u32::MAX);
        assert_eq!(coerce_age("99999999999999999999"), u32::MAX);
    }

    #[test]
    fn animal_form_rejects_overflowing_age() {
        let mut form = AnimalForm::default();
        form.set_name("Rex");
        form.set_species("Dog");
        form.set_age_input("4294967296");
        assert_eq!(
            form.validate(),
            Err(ValidationError::AgeOutOfRange {
                age: u32::MAX,
                max: 50
            })
        );
    }

    #[test]
    fn animal_form_requires_name() {
        let form = AnimalForm {
            name: "   ".to_string(),
            species: "Dog".to_string(),
            age: 3,
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingField("name")));
    }

    #[test]
    fn animal_form_requires_species() {
        let mut form = AnimalForm::default();
        form.set_name("Rex");
        assert_eq!(form.validate(), Err(ValidationError::MissingField("species")));
    }

    #[test]
    fn animal_form_bounds_age() {
        let mut form = AnimalForm::default();
        form.set_name("Old");
        form.set_species("Tortoise");
        form.set_age_input("51");
        assert_eq!(
            form.validate(),
            Err(ValidationError::AgeOutOfRange { age: 51, max: 50 })
        );
        form.set_age_input("50");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn animal_form_produces_draft() {
        let mut form = AnimalForm::default();
        form.set_name("Rex");
        form.set_species("Dog");
        form.set_age_input("3");
        let draft = form.validate().unwrap();
        assert_eq!(
            draft,
            NewAnimal {
                name: "Rex".to_string(),
                species: "Dog".to_string(),
                age: 3
            }
        );
        form.clear();
        assert_eq!(form, AnimalForm::default());
    }

    #[test]
    fn service_form_requires_selection_first() {
        let form = ServiceForm::default();
        assert_eq!(form.validate(None), Err(ValidationError::NoAnimalSelected));
    }

    #[test]
    fn service_form_requires_fields() {
        let mut form = ServiceForm::default();
        form.set_kind("Vaccine");
        assert_eq!(
            form.validate(Some(1)),
            Err(ValidationError::MissingField("description"))
        );
        form.set_description("Rabies shot");
        let (animal_id, draft) = form.validate(Some(1)).unwrap();
        assert_eq!(animal_id, 1);
        assert_eq!(draft.kind, "Vaccine");
    }
}
