use crate::models::RepoContribution;

/// Public repositories ordered by contribution count, highest first, cut to
/// `limit`. Equal counts keep their merge order. Never returns an empty list:
/// a placeholder row stands in when nothing public is left.
pub fn rank_top_repositories(repos: Vec<RepoContribution>, limit: usize) -> Vec<RepoContribution> {
    let mut ranked: Vec<RepoContribution> = repos.into_iter().filter(|repo| !repo.is_private).collect();

    ranked.sort_by(|a, b| b.contribution_count.cmp(&a.contribution_count));
    ranked.truncate(limit);

    if ranked.is_empty() {
        ranked.push(RepoContribution::placeholder());
    }

    ranked
}
