//! 表单应用：联系和订单表单转发

pub mod handler;
pub mod model;
pub mod service;
