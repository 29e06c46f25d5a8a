pub mod storage;
pub mod style;
pub mod window;
