use super::*;
use crate::gameplay::Error;
use rand::RngCore;
use rand::seq::IndexedRandom;

/// Fixed list of questions, drawn uniformly with replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog(Vec<Question>);

impl Default for Catalog {
    fn default() -> Self {
        Self(vec![
            Question::new("How tall is Mount Everest?", 8849., "meters"),
            Question::new("How long is the Nile river?", 6650., "kilometers"),
            Question::new("How many bones are in the adult human body?", 206., "bones"),
            Question::new("How many keys are on a standard piano?", 88., "keys"),
            Question::new("How far is the Moon from the Earth on average?", 384_400., "kilometers"),
            Question::new("In which year was the Magna Carta sealed?", 1215., "year"),
            Question::new("What is the speed of sound in dry air at 20 C?", 343., "meters per second"),
            Question::new("How long is the Amazon river?", 6400., "kilometers"),
            Question::new("How tall is Mount Kilimanjaro?", 5895., "meters"),
            Question::new("How long is a marathon?", 42_195., "meters"),
        ])
    }
}

impl From<Vec<Question>> for Catalog {
    fn from(questions: Vec<Question>) -> Self {
        Self(questions)
    }
}

impl Catalog {
    /// Parses `[{"question": .., "answer": .., "units": ..}, ..]`.
    /// Answers must be playable, see [`Question::is_playable`].
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let questions = serde_json::from_str::<Vec<Question>>(json)?;
        match questions.iter().find(|q| !q.is_playable()) {
            Some(q) => Err(Error::Deserialization(serde::de::Error::custom(format!(
                "answer {} to {:?} is out of range",
                q.answer, q.text
            )))),
            None => Ok(Self(questions)),
        }
    }
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        log::info!("loaded {} questions from {}", catalog.len(), path.display());
        Ok(catalog)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl QuestionProvider for Catalog {
    fn question(&mut self, rng: &mut dyn RngCore) -> Option<Question> {
        self.0.choose(rng).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn builtin_answers_are_positive() {
        let catalog = Catalog::default();
        assert!(catalog.len() == 10);
        assert!(catalog.0.iter().all(|q| q.answer > 0.));
    }

    #[test]
    fn parses_question_table() {
        let json = r#"[{"question":"How many keys are on a piano?","answer":88,"units":"keys"}]"#;
        let mut catalog = Catalog::from_json(json).unwrap();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let question = catalog.question(rng).unwrap();
        assert!(question == Question::new("How many keys are on a piano?", 88., "keys"));
    }

    #[test]
    fn rejects_missing_answer() {
        let json = r#"[{"question":"?","units":"keys"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::Deserialization(_))));
    }

    #[test]
    fn rejects_answers_beyond_exact_range() {
        let json = r#"[{"question":"Grains of sand on Earth?","answer":1e17,"units":"grains"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(Error::Deserialization(_))));
        let json = r#"[{"question":"Debt?","answer":-1125899906842625,"units":"dollars"}]"#;
        assert!(Catalog::from_json(json).is_err());
        let json = r#"[{"question":"Bound?","answer":1125899906842624,"units":"units"}]"#;
        assert!(Catalog::from_json(json).unwrap().len() == 1);
    }

    #[test]
    fn empty_catalog_runs_dry() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut catalog = Catalog::from(Vec::new());
        assert!(catalog.is_empty());
        assert!(catalog.question(rng).is_none());
    }
}
