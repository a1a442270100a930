//! Records and helpers shared by the integration tests.

#![allow(dead_code)]

use angie::Record;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub age: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct BlogPost {
    pub blog_post_id: i32,
    pub title: String,
    pub body: String,
    pub comments: Vec<BlogComment>,
    pub create_date: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct BlogComment {
    pub blog_comment_id: i64,
    pub comment: String,
    pub username: String,
    pub post_date: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Record)]
pub struct Session {
    pub id: Uuid,
    pub token: String,
    #[angie(skip)]
    pub hits: i32,
}

/// Initialize logging for a test; ignores repeated initialization.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter("angie=debug")
        .with_test_writer()
        .try_init()
        .ok();
}
