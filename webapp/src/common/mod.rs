pub mod marker;
pub mod reveal;
pub mod scroll;
pub mod storage;
pub mod style;
