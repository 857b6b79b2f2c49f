pub mod money;
pub mod notice;
