#![allow(dead_code)]

use axum::{routing::get, Router};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use wcdash::finals::{parse_finals, Dataset};
use wcdash::table::{extract_tables, TableSelector};

pub const FINALS_HTML: &str = include_str!("../fixtures/finals.html");

pub fn fixture_dataset() -> Dataset {
    let tables = extract_tables(FINALS_HTML);
    let table = TableSelector::results().select(&tables).unwrap();
    Dataset::from_finals(parse_finals(table).unwrap()).unwrap()
}

/// Serve `app` on an ephemeral local port.
pub async fn spawn(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

/// A stand-in for the finals page: the fixture at `/wiki/finals`, 404 elsewhere.
pub async fn spawn_source() -> SocketAddr {
    let app = Router::new().route(
        "/wiki/finals",
        get(|| async { axum::response::Html(FINALS_HTML) }),
    );
    spawn(app).await
}
