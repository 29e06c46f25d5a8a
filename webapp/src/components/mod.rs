pub mod navigation;
pub mod section;
