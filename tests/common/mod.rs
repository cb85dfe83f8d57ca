#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tempfile::TempDir;

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

pub fn now_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock after epoch")
        .as_millis() as i64
}

#[derive(Clone)]
pub enum Reply {
    /// 200 with a search body listing `(version, timestamp)` docs.
    Docs(Vec<(String, i64)>),
    Status(u16),
    Raw(String),
}

/// Minimal search endpoint keyed by artifact id. Unknown artifacts answer with no docs.
/// `hits` counts every request it has answered.
pub struct FakeRegistry {
    pub url: String,
    pub hits: Arc<AtomicUsize>,
}

impl FakeRegistry {
    pub fn start(routes: &[(&str, Reply)]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake registry");
        let addr = listener.local_addr().expect("local addr");
        let routes: Arc<HashMap<String, Reply>> = Arc::new(
            routes
                .iter()
                .map(|(a, r)| (a.to_string(), r.clone()))
                .collect(),
        );
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(stream) = stream else { continue };
                let routes = Arc::clone(&routes);
                let counter = Arc::clone(&counter);
                std::thread::spawn(move || serve(stream, &routes, &counter));
            }
        });
        Self {
            url: format!("http://{}", addr),
            hits,
        }
    }

    /// A base URL nothing listens on.
    pub fn unreachable() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind free port");
        let addr = listener.local_addr().expect("local addr");
        drop(listener);
        format!("http://{}", addr)
    }
}

fn serve(mut stream: TcpStream, routes: &HashMap<String, Reply>, hits: &AtomicUsize) {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk) {
            Ok(0) | Err(_) => return,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    hits.fetch_add(1, Ordering::SeqCst);
    let head = String::from_utf8_lossy(&buf);
    let request_line = head.lines().next().unwrap_or_default();

    let reply = routes
        .iter()
        .find(|(artifact, _)| request_line.contains(&format!("a%3A%22{}%22", artifact)))
        .map(|(_, r)| r.clone())
        .unwrap_or(Reply::Docs(vec![]));

    let (status, body) = match reply {
        Reply::Docs(docs) => {
            let docs: Vec<Value> = docs
                .into_iter()
                .map(|(v, ts)| serde_json::json!({"v": v, "timestamp": ts}))
                .collect();
            let body = serde_json::json!({"response": {"numFound": docs.len(), "docs": docs}});
            (200, body.to_string())
        }
        Reply::Status(code) => (code, String::from("{}")),
        Reply::Raw(body) => (200, body),
    };
    let response = format!(
        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        body.len(),
        body
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.flush();
}

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub work: PathBuf,
    pub registry: String,
    registry_hits: Arc<AtomicUsize>,
}

impl TestEnv {
    pub fn new(registry: String) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        let work = tmp.path().join("work");
        fs::create_dir_all(&home).expect("create isolated home");
        fs::create_dir_all(&work).expect("create work dir");
        Self {
            _tmp: tmp,
            home,
            work,
            registry,
            registry_hits: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_registry(routes: &[(&str, Reply)]) -> Self {
        let fake = FakeRegistry::start(routes);
        let mut env = Self::new(fake.url);
        env.registry_hits = fake.hits;
        env
    }

    /// Requests the fake registry has answered so far.
    pub fn registry_hits(&self) -> usize {
        self.registry_hits.load(Ordering::SeqCst)
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("depage");
        cmd.env("HOME", &self.home)
            .current_dir(&self.work)
            .arg("--registry")
            .arg(&self.registry);
        cmd
    }

    pub fn write_manifest(&self, body: &str) -> PathBuf {
        let path = self.work.join("dependencies.toml");
        fs::write(&path, body).expect("write manifest");
        path
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
