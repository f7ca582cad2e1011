pub mod chart;
pub mod chat;
pub mod guidance;
pub mod history;
pub mod horoscope;
pub mod init;
pub mod panchang;
pub mod search;
pub mod version;
pub mod zodiac;
