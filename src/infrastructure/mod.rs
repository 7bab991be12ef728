pub mod memory_repo;

#[cfg(test)]
mod memory_repo_tests;
