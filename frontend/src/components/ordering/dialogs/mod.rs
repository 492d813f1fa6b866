pub mod preview;
pub mod success;
pub mod video;
