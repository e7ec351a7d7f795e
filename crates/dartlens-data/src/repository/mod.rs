//! 저장소 레이어.

pub mod company;

pub use company::{CompanyRepository, DirectoryStats};
