//! Repository contract checks shared by every backend's test suite.
//!
//! Each check expects an empty repository.

#![allow(dead_code)]

use linkshelf_db::{BookmarkFilter, BookmarkInput, BookmarkRepository, Error};
use uuid::Uuid;

pub async fn seed(repo: &dyn BookmarkRepository, rows: &[(&str, &str, &str)]) {
    for (title, url, tags) in rows {
        repo.create(BookmarkInput::new(*title, *url, *tags))
            .await
            .expect("Failed to seed bookmark");
    }
}

fn titles(bookmarks: &[linkshelf_db::Bookmark]) -> Vec<&str> {
    bookmarks.iter().map(|b| b.title.as_str()).collect()
}

pub async fn create_returns_generated_fields(repo: &dyn BookmarkRepository) {
    let input = BookmarkInput::new("Example Bookmark", "https://example.com", "web,development");
    let bookmark = repo.create(input).await.expect("create failed");

    assert_ne!(bookmark.id, Uuid::nil());
    assert_eq!(bookmark.title, "Example Bookmark");
    assert_eq!(bookmark.url, "https://example.com");
    assert_eq!(bookmark.tags, "web,development");

    let listed = repo.list(&BookmarkFilter::all()).await.unwrap();
    assert_eq!(listed, vec![bookmark.clone()]);
    assert_eq!(repo.fetch(bookmark.id).await.unwrap(), Some(bookmark));
}

pub async fn list_returns_all_in_creation_order(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("Example Bookmark 1", "https://example.com/1", "web,development"),
            ("Example Bookmark 2", "https://example.com/2", "design,resources"),
        ],
    )
    .await;

    let bookmarks = repo.list(&BookmarkFilter::all()).await.unwrap();
    assert_eq!(titles(&bookmarks), vec!["Example Bookmark 1", "Example Bookmark 2"]);
}

pub async fn list_filters_by_tag(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("Web Development", "https://web.dev", "web,development"),
            ("Design Resources", "https://design.com", "design,resources"),
        ],
    )
    .await;

    let bookmarks = repo.list(&BookmarkFilter::all().with_tag("web")).await.unwrap();
    assert_eq!(titles(&bookmarks), vec!["Web Development"]);
}

pub async fn list_searches_title_and_url(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("React Documentation", "https://react.dev", "web,react"),
            ("Vue Guide", "https://vuejs.org", "web,vue"),
        ],
    )
    .await;

    let by_title = repo.list(&BookmarkFilter::all().with_query("React")).await.unwrap();
    assert_eq!(titles(&by_title), vec!["React Documentation"]);

    let by_url = repo.list(&BookmarkFilter::all().with_query("vuejs")).await.unwrap();
    assert_eq!(titles(&by_url), vec!["Vue Guide"]);

    let wrong_case = repo.list(&BookmarkFilter::all().with_query("VUEJS")).await.unwrap();
    assert!(wrong_case.is_empty());
}

pub async fn list_combines_tag_and_query(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("React Documentation", "https://react.dev", "web,react"),
            ("Vue Guide", "https://vuejs.org", "web,vue"),
            ("React Native", "https://reactnative.dev", "mobile,react"),
        ],
    )
    .await;

    let filter = BookmarkFilter::new(Some("web".into()), Some("React".into()));
    let bookmarks = repo.list(&filter).await.unwrap();
    assert_eq!(titles(&bookmarks), vec!["React Documentation"]);
}

pub async fn list_treats_wildcards_literally(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("Discounts 50% off", "https://shop.example", "deals"),
            ("Plain", "https://plain.example", "misc"),
            ("Snake", "https://example.com/snake_case", "code"),
        ],
    )
    .await;

    let percent = repo.list(&BookmarkFilter::all().with_query("%")).await.unwrap();
    assert_eq!(titles(&percent), vec!["Discounts 50% off"]);

    let underscore = repo.list(&BookmarkFilter::all().with_query("e_c")).await.unwrap();
    assert_eq!(titles(&underscore), vec!["Snake"]);
}

pub async fn update_preserves_identity(repo: &dyn BookmarkRepository) {
    let created = repo
        .create(BookmarkInput::new("Old", "https://old.example", "a,b"))
        .await
        .unwrap();

    let updated = repo
        .update(created.id, BookmarkInput::new("New", "https://new.example", ""))
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.url, "https://new.example");
    assert_eq!(updated.tags, "");

    let listed = repo.list(&BookmarkFilter::all()).await.unwrap();
    assert_eq!(listed, vec![updated]);
}

pub async fn update_unknown_is_not_found(repo: &dyn BookmarkRepository) {
    let id = Uuid::now_v7();
    let err = repo
        .update(id, BookmarkInput::new("x", "y", "z"))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::BookmarkNotFound(missing) if missing == id));
}

pub async fn delete_is_idempotent(repo: &dyn BookmarkRepository) {
    let keep = repo
        .create(BookmarkInput::new("Keep", "https://keep.example", ""))
        .await
        .unwrap();
    let gone = repo
        .create(BookmarkInput::new("Gone", "https://gone.example", ""))
        .await
        .unwrap();

    repo.delete(gone.id).await.unwrap();
    repo.delete(gone.id).await.unwrap();
    repo.delete(Uuid::now_v7()).await.unwrap();

    let listed = repo.list(&BookmarkFilter::all()).await.unwrap();
    assert_eq!(listed, vec![keep]);
    assert_eq!(repo.fetch(gone.id).await.unwrap(), None);
}

pub async fn delete_all_empties_store(repo: &dyn BookmarkRepository) {
    seed(
        repo,
        &[
            ("One", "https://one.example", "a"),
            ("Two", "https://two.example", "b"),
        ],
    )
    .await;

    repo.delete_all().await.unwrap();
    assert!(repo.list(&BookmarkFilter::all()).await.unwrap().is_empty());

    // Nothing left to delete is still fine.
    repo.delete_all().await.unwrap();
}
