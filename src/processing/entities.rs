//! Named entity recognition for candidate names
//!
//! [`EntityRecognizer`] is the seam the field extractor depends on. The built-in
//! [`HeuristicRecognizer`] finds short runs of capitalized words on a single line
//! and labels them as people or organizations; any statistical model can be
//! plugged in behind the same trait.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    Organization,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Byte range into the recognized text
    pub span: Range<usize>,
    pub label: EntityLabel,
    pub text: String,
}

pub trait EntityRecognizer {
    /// Entities in document order.
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Capitalized words that show up in resumes without being part of a name.
static COMMON_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // headings and contact labels
        "resume", "curriculum", "vitae", "cv", "summary", "profile", "objective",
        "experience", "education", "skills", "projects", "certifications", "references",
        "contact", "email", "phone", "mobile", "tel", "address", "linkedin", "github",
        "portfolio", "work", "professional", "technical", "employment", "history",
        "achievements", "awards", "languages", "interests", "publications", "about",
        // job titles
        "senior", "junior", "lead", "principal", "staff", "software", "engineer",
        "developer", "manager", "director", "analyst", "consultant", "intern", "architect",
        "scientist", "designer", "specialist", "backend", "frontend", "full", "stack",
        "data", "chef", "pastry", "head", "chief", "officer", "assistant", "associate",
        "president", "vice",
        // dates
        "january", "february", "march", "april", "may", "june", "july", "august",
        "september", "october", "november", "december", "jan", "feb", "mar", "apr", "jun",
        "jul", "aug", "sep", "sept", "oct", "nov", "dec", "present", "current",
        // places
        "street", "avenue", "road", "city", "new", "york", "san", "francisco", "los",
        "angeles", "united", "states", "kingdom", "usa", "uk", "remote",
        // technologies
        "python", "java", "javascript", "typescript", "rust", "go", "golang", "sql", "aws",
        "gcp", "azure", "docker", "kubernetes", "linux", "react", "node", "django", "flask",
        "html", "css", "api", "apis", "rest", "git", "ml", "ai",
        // degrees
        "bachelor", "bachelors", "master", "masters", "phd", "degree", "science", "arts",
        "computer", "engineering",
        // function words and salutations
        "the", "a", "an", "and", "of", "in", "at", "for", "to", "with", "on", "by", "from",
        "i", "dear", "sincerely", "mr", "mrs", "ms", "dr",
    ]
    .into_iter()
    .collect()
});

static ORGANIZATION_SUFFIXES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "inc", "llc", "ltd", "corp", "corporation", "company", "co", "gmbh", "plc",
        "university", "college", "institute", "technologies", "labs", "group", "bank",
        "foundation", "school",
    ]
    .into_iter()
    .collect()
});

static SHARED_RECOGNIZER: Lazy<HeuristicRecognizer> = Lazy::new(HeuristicRecognizer::new);

/// Process-wide recognizer, built on first use and reused afterwards.
pub fn shared_recognizer() -> &'static HeuristicRecognizer {
    &SHARED_RECOGNIZER
}

#[derive(Debug, Clone)]
pub struct HeuristicRecognizer {
    extra_stopwords: HashSet<String>,
    max_person_tokens: usize,
    max_organization_tokens: usize,
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self {
            extra_stopwords: HashSet::new(),
            max_person_tokens: 4,
            max_organization_tokens: 6,
        }
    }

    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.extra_stopwords
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
        self
    }

    fn is_name_token(&self, word: &str) -> bool {
        let mut chars = word.chars();
        let starts_upper = chars.next().map_or(false, char::is_uppercase);
        if !starts_upper || !word.chars().all(|c| c.is_alphabetic() || c == '\'') {
            return false;
        }
        if chars.next().is_none() {
            // initial
            return true;
        }

        let lower = word.to_lowercase();
        !COMMON_WORDS.contains(lower.as_str()) && !self.extra_stopwords.contains(&lower)
    }

    fn classify(&self, tokens: &[&str]) -> Option<EntityLabel> {
        let last = tokens.last()?.to_lowercase();
        if ORGANIZATION_SUFFIXES.contains(last.as_str()) {
            return (2..=self.max_organization_tokens)
                .contains(&tokens.len())
                .then_some(EntityLabel::Organization);
        }

        // Initials do not count towards the two words a name needs.
        let full_words = tokens.iter().filter(|t| t.chars().count() > 1).count();
        (full_words >= 2 && tokens.len() <= self.max_person_tokens).then_some(EntityLabel::Person)
    }

    fn flush(&self, text: &str, run: &mut Vec<(usize, &str)>, entities: &mut Vec<Entity>) {
        if let (Some(&(start, _)), Some(&(last_start, last_word))) = (run.first(), run.last()) {
            let tokens: Vec<&str> = run.iter().map(|&(_, word)| word).collect();
            if let Some(label) = self.classify(&tokens) {
                let span = start..last_start + last_word.len();
                entities.push(Entity {
                    text: text[span.clone()].to_string(),
                    span,
                    label,
                });
            }
        }
        run.clear();
    }
}

/// Whether two capitalized words separated by `gap` belong to the same name.
fn joins(previous: &str, gap: &str) -> bool {
    let inline = |s: &str| !s.is_empty() && s.chars().all(|c| c == ' ' || c == '\t');
    if inline(gap) {
        return true;
    }
    // "John A. Smith"
    previous.chars().count() == 1 && gap.starts_with('.') && inline(&gap[1..])
}

impl EntityRecognizer for HeuristicRecognizer {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        let mut entities = Vec::new();
        let mut run: Vec<(usize, &str)> = Vec::new();
        let mut previous_end = 0;

        for (offset, word) in text.unicode_word_indices() {
            let connected = run
                .last()
                .map_or(false, |&(_, previous)| joins(previous, &text[previous_end..offset]));
            if !connected {
                self.flush(text, &mut run, &mut entities);
            }

            if self.is_name_token(word) {
                run.push((offset, word));
            } else {
                self.flush(text, &mut run, &mut entities);
            }
            previous_end = offset + word.len();
        }
        self.flush(text, &mut run, &mut entities);

        entities
    }
}
