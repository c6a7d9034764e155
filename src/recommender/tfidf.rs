//! Per-call TF-IDF vectorizer
//!
//! Tokens are lowercase runs of at least two word characters (alphanumerics or
//! `_`), with English stop words removed. IDF is smoothed as
//! `ln((1 + n) / (1 + df)) + 1` and every row is L2-normalised, so the cosine
//! of two rows reduces to their dot product.

use std::collections::BTreeMap;

use super::{stop_words::is_stop_word, RecommendError};

/// Splits a document into weighted terms
pub fn tokenize(document: &str) -> Vec<String> {
    document
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
        .collect()
}

/// Vocabulary and IDF weights fitted over one corpus
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Fits the vocabulary over `documents`
    ///
    /// Fails with [`RecommendError::EmptyVocabulary`] when no document yields a
    /// single usable term.
    pub fn fit<S: AsRef<str>>(documents: &[S]) -> Result<Self, RecommendError> {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();

        for document in documents {
            let mut seen: Vec<String> = tokenize(document.as_ref());
            seen.sort_unstable();
            seen.dedup();
            for term in seen {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if doc_freq.is_empty() {
            return Err(RecommendError::EmptyVocabulary);
        }

        let n_docs = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(doc_freq.len());

        for (index, (term, df)) in doc_freq.into_iter().enumerate() {
            idf.push(((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0);
            vocabulary.insert(term, index);
        }

        Ok(Self { vocabulary, idf })
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Projects a document onto the fitted vocabulary
    ///
    /// Terms outside the vocabulary are ignored. A document with no known
    /// terms maps to the zero vector.
    pub fn transform(&self, document: &str) -> Vec<f64> {
        let mut row = vec![0.0; self.idf.len()];

        for term in tokenize(document) {
            if let Some(&index) = self.vocabulary.get(&term) {
                row[index] += 1.0;
            }
        }

        for (weight, idf) in row.iter_mut().zip(&self.idf) {
            *weight *= idf;
        }

        let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut row {
                *weight /= norm;
            }
        }

        row
    }

    /// Fits over `documents` and returns one row per document, in order
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
    ) -> Result<(Self, Vec<Vec<f64>>), RecommendError> {
        let vectorizer = Self::fit(documents)?;
        let rows = documents
            .iter()
            .map(|document| vectorizer.transform(document.as_ref()))
            .collect();
        Ok((vectorizer, rows))
    }
}

/// Cosine similarity clamped to [0.0, 1.0]; 0.0 if either vector is zero
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_lowercases_and_splits_punctuation() {
        assert_eq!(tokenize("Node.js Backend"), vec!["node", "js", "backend"]);
    }

    #[test]
    fn test_tokenize_drops_single_chars_and_stop_words() {
        assert_eq!(tokenize("C and the R language"), vec!["language"]);
    }

    #[test]
    fn test_fit_rejects_stop_word_only_corpus() {
        let err = TfidfVectorizer::fit(&["the and of", ""]).unwrap_err();
        assert_eq!(err, RecommendError::EmptyVocabulary);
    }

    #[test]
    fn test_fit_rejects_blank_corpus() {
        let docs: Vec<String> = vec![String::new(), String::new()];
        assert!(TfidfVectorizer::fit(&docs).is_err());
    }

    #[test]
    fn test_rows_are_unit_length() {
        let (_, rows) = TfidfVectorizer::fit_transform(&["react javascript", "python data"]).unwrap();
        for row in rows {
            let norm = row.iter().map(|w| w * w).sum::<f64>().sqrt();
            assert!((norm - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_rarer_terms_weigh_more() {
        let (vectorizer, rows) =
            TfidfVectorizer::fit_transform(&["react python", "python", "python"]).unwrap();
        assert_eq!(vectorizer.vocabulary_len(), 2);
        // Vocabulary is ordered, so "python" is column 0 and "react" column 1.
        assert!(rows[0][1] > rows[0][0]);
    }

    #[test]
    fn test_unknown_document_maps_to_zero_vector() {
        let vectorizer = TfidfVectorizer::fit(&["react"]).unwrap();
        assert!(vectorizer.transform("haskell").iter().all(|w| *w == 0.0));
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        assert_eq!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 1.0]), 0.0);
        assert!((cosine_similarity(&[0.6, 0.8], &[0.6, 0.8]) - 1.0).abs() < 1e-12);
    }
}
