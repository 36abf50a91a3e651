use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tempfile::TempDir;
use webslide::llm::{OutlineGenerator, OutlineRequest};
use webslide::search::{SearchBackend, SearchResultItem};
use webslide::slide::{Section, SlideOutline};
use webslide::SlideError;

#[allow(dead_code)]
pub fn run_webslide(args: &[&str]) -> Output {
    TestEnv::new().run(args)
}

#[allow(dead_code)]
pub struct TestEnv {
    home: TempDir,
    config: TempDir,
    work: TempDir,
}

#[allow(dead_code)]
impl TestEnv {
    pub fn new() -> Self {
        Self {
            home: tempfile::tempdir().expect("create temporary HOME dir"),
            config: tempfile::tempdir().expect("create temporary XDG config dir"),
            work: tempfile::tempdir().expect("create temporary working dir"),
        }
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_webslide"))
            .args(args)
            .current_dir(self.work.path())
            .env("HOME", self.home.path())
            .env("XDG_CONFIG_HOME", self.config.path())
            .env_remove("OPENAI_API_KEY")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to execute webslide binary")
    }

    pub fn work_dir(&self) -> &Path {
        self.work.path()
    }

    /// Write `config.toml` where the binary looks for it under XDG_CONFIG_HOME.
    pub fn write_config(&self, contents: &str) -> PathBuf {
        let dir = self.config.path().join("webslide");
        std::fs::create_dir_all(&dir).expect("create config dir");
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).expect("write config file");
        path
    }

    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.work.path().join(name);
        std::fs::write(&path, contents).expect("write test file");
        path
    }
}

/// Backend returning fixed results.
#[allow(dead_code)]
pub struct FixedSearch(pub Vec<SearchResultItem>);

#[async_trait]
impl SearchBackend for FixedSearch {
    async fn search(
        &self,
        _query: &str,
        max_results: usize,
    ) -> webslide::Result<Vec<SearchResultItem>> {
        Ok(self.0.iter().take(max_results).cloned().collect())
    }
}

/// Backend that always fails.
#[allow(dead_code)]
pub struct FailingSearch;

#[async_trait]
impl SearchBackend for FailingSearch {
    async fn search(
        &self,
        _query: &str,
        _max_results: usize,
    ) -> webslide::Result<Vec<SearchResultItem>> {
        Err(SlideError::Search("network unreachable".to_string()))
    }
}

/// Generator returning a fixed outline and recording the search text it saw.
#[allow(dead_code)]
pub struct StubGenerator {
    outline: SlideOutline,
    pub seen: Arc<Mutex<Vec<String>>>,
}

#[allow(dead_code)]
impl StubGenerator {
    pub fn new(outline: SlideOutline) -> Self {
        Self {
            outline,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

#[async_trait]
impl OutlineGenerator for StubGenerator {
    async fn generate(&self, request: OutlineRequest<'_>) -> webslide::Result<SlideOutline> {
        self.seen
            .lock()
            .expect("stub lock")
            .push(request.search_text.to_string());
        Ok(self.outline.clone())
    }
}

/// Generator that fails like a rejected API call.
#[allow(dead_code)]
pub struct FailingGenerator;

#[async_trait]
impl OutlineGenerator for FailingGenerator {
    async fn generate(&self, _request: OutlineRequest<'_>) -> webslide::Result<SlideOutline> {
        Err(SlideError::Generation(
            "OpenAI returned 429 Too Many Requests".to_string(),
        ))
    }
}

/// Generator that succeeds on its first call and fails on every later one.
#[allow(dead_code)]
pub struct FlakyGenerator {
    outline: SlideOutline,
    calls: AtomicUsize,
}

#[allow(dead_code)]
impl FlakyGenerator {
    pub fn new(outline: SlideOutline) -> Self {
        Self {
            outline,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl OutlineGenerator for FlakyGenerator {
    async fn generate(&self, _request: OutlineRequest<'_>) -> webslide::Result<SlideOutline> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            Ok(self.outline.clone())
        } else {
            Err(SlideError::Generation(
                "OpenAI returned 500 Internal Server Error".to_string(),
            ))
        }
    }
}

/// Answer every connection on a local port with the same HTTP response.
///
/// Returns `http://127.0.0.1:<port>`. The listener thread lives until the test
/// process exits.
#[allow(dead_code)]
pub fn spawn_http_stub(status: &str, content_type: &str, body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind stub listener");
    let addr = listener.local_addr().expect("stub address");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: {content_type}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    std::thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let mut reader = BufReader::new(stream.try_clone().expect("clone stub stream"));

            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                if reader.read_line(&mut line).unwrap_or(0) == 0 || line == "\r\n" {
                    break;
                }
                if let Some((name, value)) = line.split_once(':') {
                    if name.eq_ignore_ascii_case("content-length") {
                        content_length = value.trim().parse().unwrap_or(0);
                    }
                }
            }
            let mut request_body = vec![0u8; content_length];
            let _ = reader.read_exact(&mut request_body);

            let _ = stream.write_all(response.as_bytes());
        }
    });

    format!("http://{addr}")
}

#[allow(dead_code)]
pub fn sample_outline() -> SlideOutline {
    SlideOutline {
        title: "業務を変える生成AI".to_string(),
        subtitle: "国内企業の導入状況と成果".to_string(),
        sections: vec![
            Section {
                heading: "主な活用領域".to_string(),
                points: vec![
                    "問い合わせ対応を自動化".to_string(),
                    "議事録作成を8割短縮".to_string(),
                    "コード生成で開発加速".to_string(),
                ],
            },
            Section {
                heading: "導入の効果".to_string(),
                points: vec![
                    "年間3000時間の削減".to_string(),
                    "顧客満足度が15%向上".to_string(),
                    "新規事業の創出".to_string(),
                ],
            },
        ],
        footer: "出典: 各社公開資料".to_string(),
    }
}
