//! Public guide directory

mod service;

#[cfg(test)]
mod tests;

pub use service::{DirectoryService, GuideDirectoryPage};
