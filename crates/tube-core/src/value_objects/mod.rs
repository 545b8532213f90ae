//! Value objects

mod otp_code;
mod phone;

pub use otp_code::{generate_otp_code, OTP_CODE_LEN};
pub use phone::PhoneNumber;
