//! One repository per entity.
//!
//! Repositories are stateless unit structs with static async methods taking
//! the pool explicitly. They speak raw SQL and return `sqlx::Error`;
//! classification into the domain taxonomy happens at the service boundary.

mod album_repo;
mod artist_repo;
mod favorite_repo;
mod member_repo;
mod track_repo;
mod user_repo;

pub use album_repo::AlbumRepo;
pub use artist_repo::ArtistRepo;
pub use favorite_repo::FavoriteRepo;
pub use member_repo::MemberRepo;
pub use track_repo::TrackRepo;
pub use user_repo::UserRepo;

/// Escape LIKE wildcards in user-supplied search input and wrap it for a
/// substring match. Postgres uses backslash as the default ESCAPE character.
pub(crate) fn like_pattern(query: &str) -> String {
    let escaped = query
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{escaped}%")
}
