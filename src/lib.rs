pub mod content;
pub mod motion;
pub mod particles;
pub mod scene;
