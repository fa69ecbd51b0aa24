//! Plain-text rendering of view state.

use vetclinic_core::display::format_service_date;
use vetclinic_core::{Animal, LoadState, Notice, NoticeKind, Service};

pub fn notice(notice: &Notice) -> String {
    let tag = match notice.kind {
        NoticeKind::Success => "ok",
        NoticeKind::Error => "error",
    };
    format!("[{tag}] {}: {}", notice.title, notice.description)
}

pub fn animal_table(state: &LoadState<Vec<Animal>>) -> String {
    match state {
        LoadState::NotLoaded | LoadState::Loading => "Loading animals...".to_string(),
        LoadState::Failed(_) => String::new(),
        LoadState::Loaded(animals) if animals.is_empty() => {
            "No animals registered. Register the first one to get started.".to_string()
        }
        LoadState::Loaded(animals) => {
            let mut out = format!("{:<6}{:<20}{:<16}{}\n", "ID", "NAME", "SPECIES", "AGE");
            for a in animals {
                out.push_str(&format!("{:<6}{:<20}{:<16}{} years\n", a.id, a.name, a.species, a.age));
            }
            out.trim_end().to_string()
        }
    }
}

pub fn animal_card(animal: &Animal) -> String {
    format!(
        "{} (#{})\nSpecies: {}\nAge: {} years",
        animal.name, animal.id, animal.species, animal.age
    )
}

pub fn service_list(services: &[Service], empty: &str) -> String {
    if services.is_empty() {
        return empty.to_string();
    }
    services
        .iter()
        .map(|s| format!("{}  {:<12}{}", format_service_date(&s.date), s.kind, s.description))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_has_prompt() {
        let out = animal_table(&LoadState::Loaded(Vec::new()));
        assert!(out.starts_with("No animals registered"));
    }

    #[test]
    fn table_lists_each_animal() {
        let out = animal_table(&LoadState::Loaded(vec![Animal {
            id: 1,
            name: "Rex".to_string(),
            species: "Dog".to_string(),
            age: 3,
        }]));
        assert_eq!(out.lines().count(), 2);
        assert!(out.contains("Rex"));
        assert!(out.ends_with("3 years"));
    }

    #[test]
    fn services_use_short_dates() {
        let out = service_list(
            &[Service {
                id: 1,
                animal_id: 1,
                kind: "Vaccine".to_string(),
                description: "Rabies shot".to_string(),
                date: "2024-03-02T10:15:42".to_string(),
            }],
            "none",
        );
        assert!(out.starts_with("2024-03-02 10:15  Vaccine"));
    }

    #[test]
    fn error_notice_is_tagged() {
        let out = notice(&Notice::error("Error loading animals", "boom"));
        assert_eq!(out, "[error] Error loading animals: boom");
    }
}
