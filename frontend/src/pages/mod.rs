pub mod dashboard;
pub mod home;
pub mod login;
pub mod signup;

pub use dashboard::*;
pub use home::*;
pub use login::*;
pub use signup::*;
