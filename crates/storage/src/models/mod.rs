mod city;
mod picnic;
mod picnic_registration;
mod user;

pub use city::City;
pub use picnic::Picnic;
pub use picnic_registration::PicnicRegistration;
pub use user::User;
