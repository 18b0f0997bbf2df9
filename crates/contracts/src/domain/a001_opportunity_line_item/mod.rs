pub mod aggregate;
pub mod request;
pub mod response;
