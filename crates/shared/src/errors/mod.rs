mod api;
mod client;
mod service;
mod store;

pub use self::api::{TRANSPORT_FAILURE_MESSAGE, extract_api_message};
pub use self::client::ClientError;
pub use self::service::ServiceError;
pub use self::store::StoreError;
