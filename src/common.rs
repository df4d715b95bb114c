pub mod datas;
pub mod error;
