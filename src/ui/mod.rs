pub mod labels;
pub mod messages;
pub mod render;
