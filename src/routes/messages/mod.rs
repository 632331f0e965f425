pub mod delete;
pub mod new;
pub mod show;
