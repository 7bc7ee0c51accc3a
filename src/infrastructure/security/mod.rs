pub mod token;

pub use token::HmacTokenVerifier;
