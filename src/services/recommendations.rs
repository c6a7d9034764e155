use crate::{
    db::Store,
    error::{AppError, AppResult},
    recommender::{self, Recommendation},
};

/// Suggests next learning modules for a member
///
/// Loads the member's skills and the full path catalog, flattens the catalog
/// into candidates and ranks them. An empty result means there is nothing to
/// recommend; it is not an error.
pub async fn get_recommendations(
    store: &dyn Store,
    member_id: i64,
    top_k: usize,
) -> AppResult<Vec<Recommendation>> {
    if top_k == 0 {
        return Err(AppError::InvalidInput(
            "top_k must be a positive integer".to_string(),
        ));
    }

    let member = store.get_member(member_id).await?;
    let paths = store.list_paths().await?;

    let skills = member.skill_profile();
    let candidates = recommender::assemble(&paths);
    let recommendations = recommender::recommend(&skills, &candidates, top_k);

    tracing::info!(
        member_id,
        skills = skills.skills().len(),
        candidates = candidates.len(),
        returned = recommendations.len(),
        "Recommendations computed"
    );

    Ok(recommendations)
}
