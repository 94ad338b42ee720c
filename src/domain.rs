pub mod entities;
pub mod lookup;
pub mod password;
pub mod use_cases;
