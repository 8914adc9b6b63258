pub mod chat;
pub mod contacts;
pub mod imports;
pub mod waitlist;
