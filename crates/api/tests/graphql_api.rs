//! GraphQL-level integration tests: every operation is executed against the
//! real schema wired to a real database, and errors are asserted by their
//! machine-readable `extensions.code`.

use async_graphql::{Request, Value};
use hallyu_api::auth::jwt::JwtConfig;
use hallyu_api::auth::AuthSession;
use hallyu_api::graphql::{build_schema, CatalogSchema};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_schema(pool: PgPool) -> CatalogSchema {
    let jwt = JwtConfig {
        secret: "test-secret".into(),
        access_token_expiry_mins: 60,
    };
    build_schema(pool, jwt)
}

/// Execute a request that must succeed, returning its data as JSON.
async fn execute(schema: &CatalogSchema, request: impl Into<Request>) -> serde_json::Value {
    let response = schema.execute(request).await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute a request that must fail, returning the first error's code and
/// message.
async fn execute_err(schema: &CatalogSchema, request: impl Into<Request>) -> (String, String) {
    let response = schema.execute(request).await;
    let error = response.errors.first().expect("expected an error");
    let code = match error.extensions.as_ref().and_then(|e| e.get("code")) {
        Some(Value::String(code)) => code.clone(),
        other => panic!("error is missing a string code extension: {other:?}"),
    };
    (code, error.message.clone())
}

async fn create_artist(schema: &CatalogSchema, name: &str) -> String {
    let data = execute(
        schema,
        format!(r#"mutation {{ createArtist(input: {{ name: "{name}" }}) {{ id }} }}"#),
    )
    .await;
    data["createArtist"]["id"].as_str().unwrap().to_string()
}

async fn create_album(schema: &CatalogSchema, artist_id: &str, title: &str, release: &str) -> String {
    let data = execute(
        schema,
        format!(
            r#"mutation {{ createAlbum(input: {{ artistId: "{artist_id}", title: "{title}",
                 releaseDate: "{release}", type: FULL_ALBUM }}) {{ id }} }}"#
        ),
    )
    .await;
    data["createAlbum"]["id"].as_str().unwrap().to_string()
}

async fn create_user(schema: &CatalogSchema, username: &str, email: &str, password: &str) -> String {
    let data = execute(
        schema,
        format!(
            r#"mutation {{ createUser(username: "{username}", email: "{email}",
                 password: "{password}") {{ id }} }}"#
        ),
    )
    .await;
    data["createUser"]["id"].as_str().unwrap().to_string()
}

// ---------------------------------------------------------------------------
// Artists
// ---------------------------------------------------------------------------

/// Create echoes the input plus generated id/timestamps; the artist is then
/// queryable by id.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_and_query(pool: PgPool) {
    let schema = test_schema(pool);

    let data = execute(
        &schema,
        r#"mutation { createArtist(input: { name: "BLACKPINK", koreanName: "블랙핑크",
             debutDate: "2016-08-08", company: "YG Entertainment" })
           { id name koreanName debutDate company isActive createdAt } }"#,
    )
    .await;
    let artist = &data["createArtist"];
    assert_eq!(artist["name"], "BLACKPINK");
    assert_eq!(artist["koreanName"], "블랙핑크");
    assert_eq!(artist["debutDate"], "2016-08-08");
    assert_eq!(artist["isActive"], true);
    assert!(artist["createdAt"].as_str().unwrap().starts_with("20"));
    let id = artist["id"].as_str().unwrap().to_string();

    let data = execute(
        &schema,
        format!(r#"{{ artist(id: "{id}") {{ id name company }} }}"#),
    )
    .await;
    assert_eq!(data["artist"]["id"].as_str(), Some(id.as_str()));
    assert_eq!(data["artist"]["company"], "YG Entertainment");
}

/// A blank name is rejected and nothing is persisted.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_blank_name_rejected(pool: PgPool) {
    let schema = test_schema(pool);

    let (code, message) = execute_err(
        &schema,
        r#"mutation { createArtist(input: { name: "   " }) { id } }"#,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");
    assert!(message.contains("name"), "message should name the field");

    let data = execute(&schema, "{ statistics { artists } }").await;
    assert_eq!(data["statistics"]["artists"], 0);
}

/// Unknown ids are NOT_FOUND; malformed ids are VALIDATION_ERROR.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_artist_lookup_errors(pool: PgPool) {
    let schema = test_schema(pool);

    let (code, _) = execute_err(
        &schema,
        format!(r#"{{ artist(id: "{}") {{ id }} }}"#, Uuid::new_v4()),
    )
    .await;
    assert_eq!(code, "NOT_FOUND");

    let (code, _) = execute_err(&schema, r#"{ artist(id: "not-a-uuid") { id } }"#).await;
    assert_eq!(code, "VALIDATION_ERROR");
}

/// A malformed date string is rejected at the service boundary.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_artist_bad_date_rejected(pool: PgPool) {
    let schema = test_schema(pool);

    let (code, message) = execute_err(
        &schema,
        r#"mutation { createArtist(input: { name: "BTS", debutDate: "June 13th 2013" }) { id } }"#,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");
    assert!(message.contains("debutDate"));
}

/// Update merges the patch, refreshes updatedAt, and never changes id or
/// createdAt. Delete is idempotent-false.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_and_delete_artist(pool: PgPool) {
    let schema = test_schema(pool);

    let data = execute(
        &schema,
        r#"mutation { createArtist(input: { name: "NewJeans", koreanName: "뉴진스" })
           { id createdAt } }"#,
    )
    .await;
    let id = data["createArtist"]["id"].as_str().unwrap().to_string();
    let created_at = data["createArtist"]["createdAt"].as_str().unwrap().to_string();

    let data = execute(
        &schema,
        format!(
            r#"mutation {{ updateArtist(id: "{id}", input: {{ company: "ADOR" }})
               {{ id name koreanName company createdAt }} }}"#
        ),
    )
    .await;
    let updated = &data["updateArtist"];
    assert_eq!(updated["id"].as_str(), Some(id.as_str()));
    assert_eq!(updated["createdAt"].as_str(), Some(created_at.as_str()));
    assert_eq!(updated["name"], "NewJeans");
    assert_eq!(updated["koreanName"], "뉴진스");
    assert_eq!(updated["company"], "ADOR");

    let data = execute(&schema, format!(r#"mutation {{ deleteArtist(id: "{id}") }}"#)).await;
    assert_eq!(data["deleteArtist"], true);

    // Second delete of the same id reports false instead of erroring.
    let data = execute(&schema, format!(r#"mutation {{ deleteArtist(id: "{id}") }}"#)).await;
    assert_eq!(data["deleteArtist"], false);
}

// ---------------------------------------------------------------------------
// Members
// ---------------------------------------------------------------------------

/// BLACKPINK scenario: four members, queried back ordered by birth date,
/// both top-level and through the Artist.members field.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_members_by_artist_ordered(pool: PgPool) {
    let schema = test_schema(pool);
    let artist_id = create_artist(&schema, "BLACKPINK").await;

    for (name, stage_name, birth) in [
        ("Lalisa Manobal", "Lisa", "1997-03-27"),
        ("Kim Jisoo", "Jisoo", "1995-01-03"),
        ("Park Chaeyoung", "Rosé", "1997-02-11"),
        ("Kim Jennie", "Jennie", "1996-01-16"),
    ] {
        execute(
            &schema,
            format!(
                r#"mutation {{ createMember(input: {{ artistId: "{artist_id}", name: "{name}",
                     stageName: "{stage_name}", birthDate: "{birth}",
                     position: ["Vocalist"] }}) {{ id }} }}"#
            ),
        )
        .await;
    }

    let data = execute(
        &schema,
        format!(r#"{{ membersByArtist(artistId: "{artist_id}") {{ stageName birthDate }} }}"#),
    )
    .await;
    let stage_names: Vec<_> = data["membersByArtist"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["stageName"].as_str().unwrap())
        .collect();
    assert_eq!(stage_names, ["Jisoo", "Jennie", "Rosé", "Lisa"]);

    let data = execute(
        &schema,
        format!(r#"{{ artist(id: "{artist_id}") {{ members {{ stageName }} }} }}"#),
    )
    .await;
    assert_eq!(data["artist"]["members"].as_array().unwrap().len(), 4);
}

/// A member cannot reference a missing artist.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_member_missing_artist(pool: PgPool) {
    let schema = test_schema(pool);

    let (code, _) = execute_err(
        &schema,
        format!(
            r#"mutation {{ createMember(input: {{ artistId: "{}", name: "Kim Minji",
                 stageName: "Minji" }}) {{ id }} }}"#,
            Uuid::new_v4()
        ),
    )
    .await;
    assert_eq!(code, "INTEGRITY_ERROR");
}

// ---------------------------------------------------------------------------
// Albums and tracks
// ---------------------------------------------------------------------------

/// BORN PINK scenario: tracks inserted 2,1,3 list as 1,2,3, top-level and
/// through Album.tracks.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_tracks_by_album_ordered(pool: PgPool) {
    let schema = test_schema(pool);
    let artist_id = create_artist(&schema, "BLACKPINK").await;
    let album_id = create_album(&schema, &artist_id, "BORN PINK", "2022-09-16").await;

    for (title, number, is_title) in [
        ("Shut Down", 2, true),
        ("Pink Venom", 1, true),
        ("Typa Girl", 3, false),
    ] {
        execute(
            &schema,
            format!(
                r#"mutation {{ createTrack(input: {{ albumId: "{album_id}",
                     artistId: "{artist_id}", title: "{title}", trackNumber: {number},
                     isTitle: {is_title}, duration: 187 }}) {{ id }} }}"#
            ),
        )
        .await;
    }

    let data = execute(
        &schema,
        format!(r#"{{ tracksByAlbum(albumId: "{album_id}") {{ title trackNumber }} }}"#),
    )
    .await;
    let numbers: Vec<_> = data["tracksByAlbum"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["trackNumber"].as_i64().unwrap())
        .collect();
    assert_eq!(numbers, [1, 2, 3]);

    let data = execute(
        &schema,
        format!(
            r#"{{ album(id: "{album_id}") {{ title type tracks {{ title }}
                 artist {{ name }} }} }}"#
        ),
    )
    .await;
    assert_eq!(data["album"]["type"], "FULL_ALBUM");
    assert_eq!(data["album"]["artist"]["name"], "BLACKPINK");
    assert_eq!(
        data["album"]["tracks"][0]["title"].as_str(),
        Some("Pink Venom")
    );
}

/// A track whose artist differs from the album's artist is rejected; a
/// duplicate track number is a conflict.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_track_invariants(pool: PgPool) {
    let schema = test_schema(pool);
    let blackpink = create_artist(&schema, "BLACKPINK").await;
    let bts = create_artist(&schema, "BTS").await;
    let album_id = create_album(&schema, &blackpink, "BORN PINK", "2022-09-16").await;

    let (code, _) = execute_err(
        &schema,
        format!(
            r#"mutation {{ createTrack(input: {{ albumId: "{album_id}", artistId: "{bts}",
                 title: "Pink Venom", trackNumber: 1 }}) {{ id }} }}"#
        ),
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");

    execute(
        &schema,
        format!(
            r#"mutation {{ createTrack(input: {{ albumId: "{album_id}",
                 artistId: "{blackpink}", title: "Pink Venom", trackNumber: 1 }}) {{ id }} }}"#
        ),
    )
    .await;
    let (code, _) = execute_err(
        &schema,
        format!(
            r#"mutation {{ createTrack(input: {{ albumId: "{album_id}",
                 artistId: "{blackpink}", title: "Shut Down", trackNumber: 1 }}) {{ id }} }}"#
        ),
    )
    .await;
    assert_eq!(code, "CONFLICT");
}

/// recentReleases returns the newest albums across artists.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_recent_releases(pool: PgPool) {
    let schema = test_schema(pool);
    let blackpink = create_artist(&schema, "BLACKPINK").await;
    let newjeans = create_artist(&schema, "NewJeans").await;
    create_album(&schema, &blackpink, "THE ALBUM", "2020-10-02").await;
    create_album(&schema, &blackpink, "BORN PINK", "2022-09-16").await;
    create_album(&schema, &newjeans, "Get Up", "2023-07-21").await;

    let data = execute(&schema, "{ recentReleases(take: 2) { title } }").await;
    let titles: Vec<_> = data["recentReleases"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, ["Get Up", "BORN PINK"]);
}

/// Search is case-insensitive over primary and localized titles.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_operations(pool: PgPool) {
    let schema = test_schema(pool);
    let artist_id = create_artist(&schema, "BLACKPINK").await;
    execute(
        &schema,
        format!(
            r#"mutation {{ createAlbum(input: {{ artistId: "{artist_id}", title: "BORN PINK",
                 koreanTitle: "본 핑크", releaseDate: "2022-09-16", type: FULL_ALBUM }})
               {{ id }} }}"#
        ),
    )
    .await;

    let data = execute(&schema, r#"{ searchArtists(query: "blackpink") { name } }"#).await;
    assert_eq!(data["searchArtists"][0]["name"], "BLACKPINK");

    let data = execute(&schema, r#"{ searchAlbums(query: "born") { title } }"#).await;
    assert_eq!(data["searchAlbums"][0]["title"], "BORN PINK");

    let data = execute(&schema, r#"{ searchAlbums(query: "핑크") { title } }"#).await;
    assert_eq!(data["searchAlbums"][0]["title"], "BORN PINK");

    let data = execute(&schema, r#"{ searchTracks(query: "venom") { title } }"#).await;
    assert!(data["searchTracks"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Users, login, favorites
// ---------------------------------------------------------------------------

/// createUser -> login -> me round-trip; wrong credentials are UNAUTHORIZED
/// with an indistinguishable message.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_login_roundtrip(pool: PgPool) {
    let schema = test_schema(pool);
    let user_id = create_user(&schema, "kpopfan123", "kpopfan@example.com", "secret-password").await;

    let data = execute(
        &schema,
        r#"mutation { login(email: "kpopfan@example.com", password: "secret-password")
           { token user { id username } } }"#,
    )
    .await;
    assert!(!data["login"]["token"].as_str().unwrap().is_empty());
    assert_eq!(data["login"]["user"]["id"].as_str(), Some(user_id.as_str()));

    let (code, wrong_password) = execute_err(
        &schema,
        r#"mutation { login(email: "kpopfan@example.com", password: "wrong") { token } }"#,
    )
    .await;
    assert_eq!(code, "UNAUTHORIZED");

    let (code, unknown_email) = execute_err(
        &schema,
        r#"mutation { login(email: "nobody@example.com", password: "secret-password") { token } }"#,
    )
    .await;
    assert_eq!(code, "UNAUTHORIZED");
    assert_eq!(wrong_password, unknown_email);

    // `me` resolves the session attached by the HTTP layer.
    let request = Request::new("{ me { username } }").data(AuthSession {
        user_id: Uuid::parse_str(&user_id).unwrap(),
    });
    let data = execute(&schema, request).await;
    assert_eq!(data["me"]["username"], "kpopfan123");

    // Without a session, `me` is UNAUTHORIZED.
    let (code, _) = execute_err(&schema, "{ me { username } }").await;
    assert_eq!(code, "UNAUTHORIZED");
}

/// Registration validation: bad email, short password, duplicate username.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_user_validation(pool: PgPool) {
    let schema = test_schema(pool);

    let (code, _) = execute_err(
        &schema,
        r#"mutation { createUser(username: "fan", email: "not-an-email",
             password: "secret-password") { id } }"#,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");

    let (code, _) = execute_err(
        &schema,
        r#"mutation { createUser(username: "fan", email: "fan@example.com",
             password: "short") { id } }"#,
    )
    .await;
    assert_eq!(code, "VALIDATION_ERROR");

    create_user(&schema, "kpopfan123", "kpopfan@example.com", "secret-password").await;
    let (code, _) = execute_err(
        &schema,
        r#"mutation { createUser(username: "kpopfan123", email: "other@example.com",
             password: "secret-password") { id } }"#,
    )
    .await;
    assert_eq!(code, "CONFLICT");
}

/// Favorite-with-album scenario: the album field resolves, artist and track
/// stay null, and the favorite shows up under the user.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_favorite_album(pool: PgPool) {
    let schema = test_schema(pool);
    let artist_id = create_artist(&schema, "BLACKPINK").await;
    let album_id = create_album(&schema, &artist_id, "BORN PINK", "2022-09-16").await;
    let user_id = create_user(&schema, "kpopfan123", "kpopfan@example.com", "secret-password").await;
    let session = AuthSession {
        user_id: Uuid::parse_str(&user_id).unwrap(),
    };

    // Anonymous requests cannot record favorites.
    let (code, _) = execute_err(
        &schema,
        format!(r#"mutation {{ addFavorite(input: {{ albumId: "{album_id}" }}) {{ id }} }}"#),
    )
    .await;
    assert_eq!(code, "UNAUTHORIZED");

    let request = Request::new(format!(
        r#"mutation {{ addFavorite(input: {{ albumId: "{album_id}" }})
           {{ id album {{ id title }} artist {{ id }} track {{ id }} }} }}"#
    ))
    .data(session);
    let data = execute(&schema, request).await;
    let favorite = &data["addFavorite"];
    assert_eq!(favorite["album"]["id"].as_str(), Some(album_id.as_str()));
    assert_eq!(favorite["album"]["title"], "BORN PINK");
    assert!(favorite["artist"].is_null());
    assert!(favorite["track"].is_null());
    let favorite_id = favorite["id"].as_str().unwrap().to_string();

    let data = execute(
        &schema,
        format!(r#"{{ user(id: "{user_id}") {{ favorites {{ id }} }} }}"#),
    )
    .await;
    assert_eq!(data["user"]["favorites"].as_array().unwrap().len(), 1);

    let data = execute(
        &schema,
        format!(r#"mutation {{ removeFavorite(id: "{favorite_id}") }}"#),
    )
    .await;
    assert_eq!(data["removeFavorite"], true);
    let data = execute(
        &schema,
        format!(r#"mutation {{ removeFavorite(id: "{favorite_id}") }}"#),
    )
    .await;
    assert_eq!(data["removeFavorite"], false);
}

/// Exactly-one-of is enforced before anything persists, and dangling
/// referents are integrity errors.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_add_favorite_invariants(pool: PgPool) {
    let schema = test_schema(pool);
    let artist_id = create_artist(&schema, "BLACKPINK").await;
    let album_id = create_album(&schema, &artist_id, "BORN PINK", "2022-09-16").await;
    let user_id = create_user(&schema, "kpopfan123", "kpopfan@example.com", "secret-password").await;
    let session = AuthSession {
        user_id: Uuid::parse_str(&user_id).unwrap(),
    };

    let request = Request::new(format!(
        r#"mutation {{ addFavorite(input: {{ artistId: "{artist_id}",
             albumId: "{album_id}" }}) {{ id }} }}"#
    ))
    .data(session);
    let (code, _) = execute_err(&schema, request).await;
    assert_eq!(code, "VALIDATION_ERROR");

    let request = Request::new("mutation { addFavorite(input: {}) { id } }").data(session);
    let (code, _) = execute_err(&schema, request).await;
    assert_eq!(code, "VALIDATION_ERROR");

    let request = Request::new(format!(
        r#"mutation {{ addFavorite(input: {{ trackId: "{}" }}) {{ id }} }}"#,
        Uuid::new_v4()
    ))
    .data(session);
    let (code, _) = execute_err(&schema, request).await;
    assert_eq!(code, "INTEGRITY_ERROR");
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// Counts equal creates minus deletes per entity kind.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_statistics_counts(pool: PgPool) {
    let schema = test_schema(pool);
    let blackpink = create_artist(&schema, "BLACKPINK").await;
    let bts = create_artist(&schema, "BTS").await;
    let album_id = create_album(&schema, &blackpink, "BORN PINK", "2022-09-16").await;
    execute(
        &schema,
        format!(
            r#"mutation {{ createTrack(input: {{ albumId: "{album_id}",
                 artistId: "{blackpink}", title: "Pink Venom", trackNumber: 1 }}) {{ id }} }}"#
        ),
    )
    .await;
    create_user(&schema, "kpopfan123", "kpopfan@example.com", "secret-password").await;

    let data = execute(
        &schema,
        "{ statistics { artists albums tracks members users favorites } }",
    )
    .await;
    let stats = &data["statistics"];
    assert_eq!(stats["artists"], 2);
    assert_eq!(stats["albums"], 1);
    assert_eq!(stats["tracks"], 1);
    assert_eq!(stats["members"], 0);
    assert_eq!(stats["users"], 1);
    assert_eq!(stats["favorites"], 0);

    execute(&schema, format!(r#"mutation {{ deleteArtist(id: "{bts}") }}"#)).await;
    let data = execute(&schema, "{ statistics { artists } }").await;
    assert_eq!(data["statistics"]["artists"], 1);
}
