#![allow(dead_code)]

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::Path;
use std::thread;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Entry of a test archive: a directory when `content` is `None`.
pub struct Entry<'a> {
    pub name: &'a str,
    pub content: Option<&'a [u8]>,
}

pub fn dir(name: &str) -> Entry<'_> {
    Entry {
        name,
        content: None,
    }
}

pub fn file<'a>(name: &'a str, content: &'a str) -> Entry<'a> {
    Entry {
        name,
        content: Some(content.as_bytes()),
    }
}

pub fn write_zip(path: &Path, entries: &[Entry]) {
    let mut zip = ZipWriter::new(fs::File::create(path).unwrap());
    let options = SimpleFileOptions::default().unix_permissions(0o644);
    for entry in entries {
        match entry.content {
            Some(content) => {
                zip.start_file(entry.name, options).unwrap();
                zip.write_all(content).unwrap();
            }
            None => zip.add_directory(entry.name, options).unwrap(),
        }
    }
    zip.finish().unwrap();
}

pub fn write(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

pub const PROJECT_YAML: &str = concat!(
    "project:\n",
    "  name: \"ai_skeleton\"\n",
    "  version: \"1.0.0\"\n",
    "  description: \"AI Skeleton backend\"\n",
    "server:\n",
    "  port: 8080\n",
);

pub const PACKAGE_JSON: &str = concat!(
    "{\n",
    "  \"name\": \"ai-skeleton\",\n",
    "  \"version\": \"1.0.0\",\n",
    "  \"private\": true\n",
    "}\n",
);

/// Writes a small scaffold template below `root`, including paths that must
/// never be copied.
pub fn write_template(root: &Path) {
    write(root, "README.md", "# AI Skeleton\n");
    write(root, "Makefile", "backend-dev:\n\tcd backend && air\n");
    write(root, "backend/go.mod", "module github.com/richer/ai_skeleton\n\ngo 1.22\n");
    write(
        root,
        "backend/cmd/server/main.go",
        "package main\n\nimport \"github.com/richer/ai_skeleton/internal/config\"\n",
    );
    write(root, "backend/config.yaml", PROJECT_YAML);
    write(root, "backend/tmp/build.log", "stale\n");
    write(root, "frontend/package.json", PACKAGE_JSON);
    write(root, "frontend/node_modules/react/index.js", "module.exports = {}\n");
    write(root, "cli/main.go", "package main\n");
    write(root, ".git/HEAD", "ref: refs/heads/main\n");
}

/// Serves a single HTTP response on a local port and returns the URL to fetch.
pub fn serve_once(status_line: &'static str, body: Vec<u8>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = stream.read(&mut buf).unwrap_or(0);
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                if request.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
            let header = format!(
                concat!(
                    "{}\r\n",
                    "Content-Type: application/zip\r\n",
                    "Content-Length: {}\r\n",
                    "Connection: close\r\n\r\n",
                ),
                status_line,
                body.len()
            );
            let _ = stream.write_all(header.as_bytes());
            let _ = stream.write_all(&body);
        }
    });
    format!("http://{}/archive/main.zip", addr)
}

pub fn local_client() -> reqwest::blocking::Client {
    reqwest::blocking::Client::builder().no_proxy().build().unwrap()
}
