//! SMS delivery

mod fast2sms;

pub use fast2sms::Fast2SmsClient;
