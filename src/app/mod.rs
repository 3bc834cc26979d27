//! 应用层：按业务划分的子应用

pub mod catalog;
pub mod forms;
