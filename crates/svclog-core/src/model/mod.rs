pub mod draft;
pub mod fields;
pub mod service_log;
pub mod service_type;

pub use draft::Draft;
pub use fields::{next_day, Field, FieldEdit, LogFields};
pub use service_log::ServiceLog;
pub use service_type::ServiceType;
