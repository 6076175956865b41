pub mod requests;
pub mod response;

pub use requests::IdQuery;
pub use response::ErrorResponse;
