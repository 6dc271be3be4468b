pub mod export;
pub mod reset;
pub mod show;
