use std::collections::{BTreeMap, BTreeSet};

use super::stop_words::is_stop_word;

/// Splits text into lowercase tokens of two or more word characters,
/// dropping stop-words
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .filter(|token| !is_stop_word(token))
        .map(str::to_string)
        .collect()
}

/// Bag-of-words vectorizer fitted on a fixed set of documents
#[derive(Debug, Clone, Default)]
pub struct CountVectorizer {
    /// Term to column, columns assigned in sorted term order
    vocabulary: BTreeMap<String, usize>,
}

/// Sparse term counts for one document, sorted by column
pub type TermCounts = Vec<(usize, f32)>;

impl CountVectorizer {
    /// Learns the vocabulary and returns the document-term counts
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Self, Vec<TermCounts>) {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|doc| tokenize(doc.as_ref()))
            .collect();

        let terms: BTreeSet<&str> = tokenized
            .iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();
        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();

        let vectorizer = Self { vocabulary };
        let counts = tokenized
            .iter()
            .map(|tokens| vectorizer.count(tokens))
            .collect();

        (vectorizer, counts)
    }

    /// Counts for `text` against the fitted vocabulary; unknown terms are ignored
    pub fn transform(&self, text: &str) -> TermCounts {
        self.count(&tokenize(text))
    }

    fn count(&self, tokens: &[String]) -> TermCounts {
        let mut counts: BTreeMap<usize, f32> = BTreeMap::new();
        for token in tokens {
            if let Some(&column) = self.vocabulary.get(token) {
                *counts.entry(column).or_default() += 1.0;
            }
        }
        counts.into_iter().collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn column(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }
}

/// Square, symmetric matrix of pairwise cosine similarities
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f32>,
}

impl SimilarityMatrix {
    /// Pairwise cosine similarity of the given sparse vectors
    ///
    /// The diagonal is always 1.0, including for empty documents, whose
    /// similarity to every other row is 0.0.
    pub fn from_counts(rows: &[TermCounts]) -> Self {
        let size = rows.len();
        let norms: Vec<f32> = rows
            .iter()
            .map(|row| row.iter().map(|(_, v)| v * v).sum::<f32>().sqrt())
            .collect();

        let mut values = vec![0.0; size * size];
        for i in 0..size {
            values[i * size + i] = 1.0;
            if norms[i] == 0.0 {
                continue;
            }
            for j in (i + 1)..size {
                if norms[j] == 0.0 {
                    continue;
                }
                let dot = sparse_dot(&rows[i], &rows[j]);
                if dot == 0.0 {
                    continue;
                }
                let similarity = (dot / (norms[i] * norms[j])).clamp(0.0, 1.0);
                values[i * size + j] = similarity;
                values[j * size + i] = similarity;
            }
        }

        Self { size, values }
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarities of row `i` against every row
    pub fn row(&self, i: usize) -> &[f32] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.values[i * self.size + j]
    }
}

fn sparse_dot(a: &[(usize, f32)], b: &[(usize, f32)]) -> f32 {
    let (mut i, mut j, mut dot) = (0, 0, 0.0);
    while i < a.len() && j < b.len() {
        match a[i].0.cmp(&b[j].0) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                dot += a[i].1 * b[j].1;
                i += 1;
                j += 1;
            }
        }
    }
    dot
}

/// Fits a vectorizer on `titles` and builds their similarity matrix
pub fn build<S: AsRef<str>>(titles: &[S]) -> (CountVectorizer, SimilarityMatrix) {
    let (vectorizer, counts) = CountVectorizer::fit_transform(titles);
    let matrix = SimilarityMatrix::from_counts(&counts);

    tracing::debug!(
        documents = matrix.size(),
        vocabulary = vectorizer.vocabulary_size(),
        "Built similarity index"
    );

    (vectorizer, matrix)
}
