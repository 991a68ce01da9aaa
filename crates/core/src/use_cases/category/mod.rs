mod service;

pub use service::CategoryService;
