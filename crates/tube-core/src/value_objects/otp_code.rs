//! OTP code generation

use rand::Rng;

/// Every generated code has exactly this many digits
pub const OTP_CODE_LEN: usize = 6;

/// Generate a random 6-digit code with no leading zero
pub fn generate_otp_code() -> String {
    let mut rng = rand::thread_rng();
    rng.gen_range(100_000..=999_999u32).to_string()
}
