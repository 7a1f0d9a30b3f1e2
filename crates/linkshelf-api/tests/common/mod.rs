//! In-process test server shared by the HTTP integration tests.
//!
//! Each [`TestContext`] serves its own router on an ephemeral port backed by
//! fresh in-memory repositories, so tests never share state.

#![allow(dead_code)]

use linkshelf_api::{build_router, ApiConfig, AppState, Repositories};
use linkshelf_db::{
    Bookmark, BookmarkInput, BookmarkRepository, MemoryBookmarkRepository, MemoryUserRepository,
};
use serde_json::{json, Value};

pub struct TestContext {
    pub base_url: String,
    pub client: reqwest::Client,
    /// Same storage the server reads and writes.
    pub bookmarks: MemoryBookmarkRepository,
    pub users: MemoryUserRepository,
}

impl TestContext {
    pub async fn spawn() -> Self {
        let bookmarks = MemoryBookmarkRepository::new();
        let users = MemoryUserRepository::new();
        let state = AppState::new(Repositories::from_memory(bookmarks.clone(), users.clone()));
        let router = build_router(state, &ApiConfig::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            client: reqwest::Client::new(),
            bookmarks,
            users,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Insert directly into storage, bypassing HTTP.
    pub async fn seed(&self, rows: &[(&str, &str, &str)]) -> Vec<Bookmark> {
        let mut created = Vec::with_capacity(rows.len());
        for (title, url, tags) in rows {
            created.push(
                self.bookmarks
                    .create(BookmarkInput::new(*title, *url, *tags))
                    .await
                    .expect("Failed to seed bookmark"),
            );
        }
        created
    }

    /// The four bookmarks used by most filtering tests.
    pub async fn seed_standard(&self) -> Vec<Bookmark> {
        self.seed(&[
            ("Example Bookmark 1", "https://example.com/1", "web,development"),
            ("Example Bookmark 2", "https://example.com/2", "programming,rust"),
            ("React Docs", "https://react.dev", "web,frontend"),
            ("Vue Guide", "https://vuejs.org/guide", "web,frontend"),
        ])
        .await
    }

    pub async fn list(&self, query: &[(&str, &str)]) -> Vec<Bookmark> {
        let response = self
            .client
            .get(self.url("/bookmarks"))
            .query(query)
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        response.json().await.unwrap()
    }

    pub async fn create(&self, title: &str, url: &str, tags: &str) -> reqwest::Response {
        self.client
            .post(self.url("/bookmarks/create"))
            .json(&json!({ "title": title, "url": url, "tags": tags }))
            .send()
            .await
            .unwrap()
    }
}

pub fn titles(bookmarks: &[Bookmark]) -> Vec<&str> {
    bookmarks.iter().map(|b| b.title.as_str()).collect()
}

pub async fn error_message(response: reqwest::Response) -> String {
    let body: Value = response.json().await.unwrap();
    body["error"].as_str().unwrap_or_default().to_string()
}
