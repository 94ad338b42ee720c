pub mod file_kind;
pub mod get_client_ip;
pub mod html;
pub mod reading_time;
pub mod slug;
pub mod tags;
pub mod valid_uuid;
