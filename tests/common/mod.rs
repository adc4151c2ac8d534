use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use tempfile::TempDir;

use layerdrop::config::Config;

/// A running test server instance rooted in its own temporary directory.
pub struct TestApp {
    pub addr: SocketAddr,
    pub client: Client,
    pub root: TempDir,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn images_dir(&self) -> PathBuf {
        self.root.path().join("images")
    }

    pub fn csv_path(&self) -> PathBuf {
        self.root.path().join("layers").join("user_inputs.csv")
    }

    pub fn csv_contents(&self) -> String {
        std::fs::read_to_string(self.csv_path()).expect("read csv log")
    }

    /// Data rows of the log, decoded with a standard CSV reader.
    pub fn csv_records(&self) -> Vec<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(self.csv_path())
            .expect("open csv log");
        reader
            .records()
            .map(|r| r.expect("valid csv record").iter().map(String::from).collect())
            .collect()
    }

    /// Submit a multipart form, return (json body, status). Non-JSON bodies
    /// come back as a JSON string.
    pub async fn submit(&self, form: Form) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .multipart(form)
            .send()
            .await
            .expect("submit request failed");
        read_body(resp).await
    }

    /// Submit text fields only.
    pub async fn submit_fields(&self, fields: &[(&str, &str)]) -> (Value, StatusCode) {
        self.submit(text_form(fields)).await
    }

    /// Submit form-urlencoded data, return (json body, status).
    pub async fn submit_urlencoded(&self, data: &[(&str, &str)]) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url("/submit"))
            .form(data)
            .send()
            .await
            .expect("submit form failed");
        read_body(resp).await
    }
}

pub fn text_form(fields: &[(&str, &str)]) -> Form {
    fields.iter().fold(Form::new(), |form, (k, v)| {
        form.text(k.to_string(), v.to_string())
    })
}

pub fn image_part(file_name: &str, bytes: &[u8]) -> Part {
    Part::bytes(bytes.to_vec())
        .file_name(file_name.to_string())
        .mime_str("application/octet-stream")
        .unwrap()
}

/// True when `stored` is `<digits>_<rest>`.
pub fn has_stamp_prefix(stored: &str, rest: &str) -> bool {
    match stored.split_once('_') {
        Some((stamp, tail)) => {
            !stamp.is_empty() && stamp.chars().all(|c| c.is_ascii_digit()) && tail == rest
        }
        None => false,
    }
}

async fn read_body(resp: reqwest::Response) -> (Value, StatusCode) {
    let status = resp.status();
    let text = resp.text().await.unwrap_or_default();
    let body = serde_json::from_str(&text).unwrap_or(json!(text));
    (body, status)
}

/// Spawn a test app in a fresh temporary root directory.
pub async fn spawn_app() -> TestApp {
    let root = tempfile::tempdir().expect("create temp root");
    spawn_app_in(root).await
}

/// Spawn a test app on an existing root, e.g. to simulate a restart.
pub async fn spawn_app_in(root: TempDir) -> TestApp {
    let config = Config::rooted_at(root.path());
    let app = layerdrop::build_app(config).expect("build app");

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    // Spawn server in background
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        client: Client::new(),
        root,
    }
}
