pub mod html;
pub mod password;
pub mod webutils;
