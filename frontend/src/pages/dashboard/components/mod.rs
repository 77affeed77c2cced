pub mod referral_form;
pub mod referred_modal;
pub mod statistics;

pub use referral_form::ReferralForm;
pub use referred_modal::ReferredModal;
pub use statistics::StatisticsSection;
