pub mod delete;
pub mod follow;
pub mod followers;
pub mod following;
pub mod profile;
pub mod unfollow;
