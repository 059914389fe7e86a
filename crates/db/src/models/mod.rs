//! Entity models and Create/Update DTOs, one module per table.

pub mod album;
pub mod artist;
pub mod favorite;
pub mod member;
pub mod track;
pub mod user;
