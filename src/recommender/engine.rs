use super::{
    tfidf::{cosine_similarity, TfidfVectorizer},
    ModuleCandidate, Recommendation, RecommendError, SkillProfile, RELEVANCE_THRESHOLD,
};

/// Ranks `candidates` against a member's skills
///
/// Candidates scoring above [`RELEVANCE_THRESHOLD`] are returned by descending
/// score, ties kept in catalog order. When none clear the threshold the first
/// `top_k` candidates are returned as non-personalized suggestions. An empty
/// catalog, or a corpus with no usable terms, yields an empty list.
pub fn recommend(
    skills: &SkillProfile,
    candidates: &[ModuleCandidate],
    top_k: usize,
) -> Vec<Recommendation> {
    if candidates.is_empty() {
        return Vec::new();
    }

    let scores = match score_candidates(skills, candidates) {
        Ok(scores) => scores,
        Err(e) => {
            tracing::debug!(error = %e, candidates = candidates.len(), "Nothing to score");
            return Vec::new();
        }
    };

    let mut ranked: Vec<Recommendation> = candidates
        .iter()
        .zip(scores)
        .filter(|(_, score)| *score > RELEVANCE_THRESHOLD)
        .map(|(candidate, score)| Recommendation::matched(&candidate.title, score))
        .collect();

    // sort_by is stable, so equal scores stay in catalog order.
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let fallback = ranked.is_empty();
    if fallback {
        ranked = candidates
            .iter()
            .take(top_k)
            .map(|candidate| Recommendation::fallback(&candidate.title))
            .collect();
    }

    tracing::debug!(
        candidates = candidates.len(),
        returned = ranked.len().min(top_k),
        fallback,
        "Recommendations ranked"
    );

    ranked.truncate(top_k);
    ranked
}

/// One cosine score per candidate, in catalog order
fn score_candidates(
    skills: &SkillProfile,
    candidates: &[ModuleCandidate],
) -> Result<Vec<f64>, RecommendError> {
    let documents: Vec<String> = std::iter::once(skills.document())
        .chain(candidates.iter().map(ModuleCandidate::document))
        .collect();

    let (_, rows) = TfidfVectorizer::fit_transform(&documents)?;
    let (member, modules) = rows.split_first().ok_or(RecommendError::EmptyVocabulary)?;

    Ok(modules
        .iter()
        .map(|module| cosine_similarity(member, module))
        .collect())
}
