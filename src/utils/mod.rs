pub mod dom;
pub mod perf;
pub mod storage;
pub mod theme;
