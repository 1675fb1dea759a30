pub mod bar;
pub mod interval;
pub mod request;
pub mod symbol_info;
