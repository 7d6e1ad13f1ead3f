pub mod api;
pub mod streak;
pub mod top_repos;

#[cfg(test)]
pub(crate) mod testing;
