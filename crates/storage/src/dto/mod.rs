pub mod city;
pub mod common;
pub mod picnic;
pub mod registration;
pub mod timestamp;
pub mod user;
