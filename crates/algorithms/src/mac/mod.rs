//! Message Authentication Code implementations

pub mod hmac;

pub use self::hmac::Hmac;
