pub mod service;

pub use service::PhoneService;
