use super::words::{FIRST_NAMES, LAST_NAMES, WORDS};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SENTENCES_PER_POST: usize = 3;
const MIN_WORDS_PER_SENTENCE: usize = 4;
const MAX_WORDS_PER_SENTENCE: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorFixture {
    pub first_name: String,
    pub last_name: String,
    pub post: PostFixture,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFixture {
    pub title: String,
    pub text: String,
}

/// Deterministic name and sentence source keyed by a seed.
pub struct FixtureGenerator {
    rng: StdRng,
}

impl FixtureGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Produce `count` authors, each carrying exactly one post.
    pub fn generate(&mut self, count: usize) -> Vec<AuthorFixture> {
        (0..count).map(|_| self.author()).collect()
    }

    fn author(&mut self) -> AuthorFixture {
        let first_name = self.pick(FIRST_NAMES).to_string();
        let last_name = self.pick(LAST_NAMES).to_string();
        let post = PostFixture {
            title: format!("A post by {}", first_name),
            text: self.sentences(SENTENCES_PER_POST),
        };
        AuthorFixture {
            first_name,
            last_name,
            post,
        }
    }

    fn pick(&mut self, words: &[&'static str]) -> &'static str {
        words[self.rng.random_range(0..words.len())]
    }

    fn sentence(&mut self) -> String {
        let len = self
            .rng
            .random_range(MIN_WORDS_PER_SENTENCE..=MAX_WORDS_PER_SENTENCE);
        let words: Vec<&str> = (0..len).map(|_| self.pick(WORDS)).collect();
        let mut sentence = words.join(" ");
        if let Some(first) = sentence.get_mut(0..1) {
            first.make_ascii_uppercase();
        }
        sentence.push('.');
        sentence
    }

    pub fn sentences(&mut self, count: usize) -> String {
        (0..count)
            .map(|_| self.sentence())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
