//! The ten characters the app ships with.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub number: u32,
    pub slug: String,
    pub name: String,
}

impl Character {
    fn new(number: u32, slug: &str, name: &str) -> Self {
        Self {
            number,
            slug: slug.to_string(),
            name: name.to_string(),
        }
    }

    /// `{slug}.jpg`, the character gallery image.
    pub fn image_file(&self) -> String {
        format!("{}.jpg", self.slug)
    }
}

pub fn default_roster() -> Vec<Character> {
    vec![
        Character::new(1, "budha", "Buda Śākyamuni"),
        Character::new(2, "samantabhadra", "Samantabhadra"),
        Character::new(3, "manjusri", "Manjuśrī"),
        Character::new(4, "meghasri", "Meghaśrī"),
        Character::new(5, "sagara_megha", "Sāgaramegha"),
        Character::new(6, "supratisthita", "Supratiṣṭhita"),
        Character::new(7, "avalokitesvara", "Avalokiteśvara"),
        Character::new(8, "maitreya", "Maitreya"),
        Character::new(9, "vajrapani", "Vajrapāṇi"),
        Character::new(10, "kshitigarbha", "Kṣitigarbha"),
    ]
}

/// Display name for model `number`, with a generic fallback.
pub fn model_name(roster: &[Character], number: u32) -> String {
    roster
        .iter()
        .find(|c| c.number == number)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| format!("Buddhist Character {}", number))
}

pub fn model_file(number: u32) -> String {
    format!("modelo{}.glb", number)
}

pub fn chapter_file(number: u32) -> String {
    format!("character-{}.jpg", number)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let roster = default_roster();
        assert_eq!(roster.len(), 10);
        assert!(roster.iter().enumerate().all(|(i, c)| c.number == i as u32 + 1));
        assert_eq!(roster[4].image_file(), "sagara_megha.jpg");
    }

    #[test]
    fn test_model_name_fallback() {
        let roster = default_roster();
        assert_eq!(model_name(&roster, 7), "Avalokiteśvara");
        assert_eq!(model_name(&roster, 11), "Buddhist Character 11");
        assert_eq!(model_name(&[], 1), "Buddhist Character 1");
    }

    #[test]
    fn test_file_names() {
        assert_eq!(model_file(3), "modelo3.glb");
        assert_eq!(chapter_file(56), "character-56.jpg");
    }
}
