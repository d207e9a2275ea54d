#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate};
use rpontomais::api::TimeCardApi;
use rpontomais::errors::{AppError, AppResult};
use rpontomais::models::{ProposalRequest, ProposalStatus, Status, WorkDay};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::env;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::thread;

pub const ABSENCE: &str = "Absence";

pub fn rpm() -> Command {
    cargo_bin_cmd!("rpontomais")
}

/// Write a config file inside the system temp dir and return its path
pub fn temp_config(name: &str, content: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rpontomais.conf", name));
    fs::write(&path, content).expect("write temp config");
    path.to_string_lossy().to_string()
}

pub fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn day(id: i64, date: NaiveDate, status: &str, pending: bool) -> WorkDay {
    WorkDay {
        id,
        date,
        status: Some(Status {
            id: 1,
            name: status.to_string(),
        }),
        process_status: None,
        allow_exemption_allowance: false,
        last_solicitation_proposal_status: pending
            .then(|| ProposalStatus(serde_json::json!({"id": 1, "name": "Pendente"}))),
    }
}

/// In-memory stand-in for the remote service.
///
/// Months without an entry answer with an empty list; `endless` makes every
/// month answer with one regular day instead.
#[derive(Default)]
pub struct FakeApi {
    pub months: HashMap<(i32, u32), Vec<WorkDay>>,
    pub broken_months: HashSet<(i32, u32)>,
    pub rejected_days: HashSet<NaiveDate>,
    pub endless: bool,
    pub fetched: RefCell<Vec<(NaiveDate, NaiveDate)>>,
    pub submitted: RefCell<Vec<ProposalRequest>>,
}

impl FakeApi {
    pub fn with_month(mut self, year: i32, month: u32, days: Vec<WorkDay>) -> Self {
        self.months.insert((year, month), days);
        self
    }

    pub fn fetched_months(&self) -> Vec<(i32, u32)> {
        self.fetched
            .borrow()
            .iter()
            .map(|(start, _)| (start.year(), start.month()))
            .collect()
    }
}

impl TimeCardApi for FakeApi {
    fn work_days(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<WorkDay>> {
        self.fetched.borrow_mut().push((start, end));
        let key = (start.year(), start.month());

        if self.broken_months.contains(&key) {
            let err = serde_json::from_str::<serde_json::Value>("{\"work_days\": [")
                .expect_err("truncated json");
            return Err(AppError::Parse(err));
        }
        if self.endless {
            return Ok(vec![day(1, start, "Normal", false)]);
        }
        Ok(self.months.get(&key).cloned().unwrap_or_default())
    }

    fn submit_proposal(&self, request: &ProposalRequest) -> AppResult<()> {
        self.submitted.borrow_mut().push(request.clone());
        if self.rejected_days.contains(&request.proposal.date) {
            return Err(AppError::Submission {
                status: 422,
                body: "{\"error\":\"proposal already exists\"}".to_string(),
            });
        }
        Ok(())
    }
}

/// Accept a single HTTP connection on a local port, answer it with the given
/// status and body, and hand back the raw request text.
pub fn serve_once(status: &str, body: &str) -> (String, thread::JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let request = read_request(&mut stream);
        stream.write_all(response.as_bytes()).expect("write response");
        stream.flush().ok();
        request
    });

    (format!("http://{addr}"), handle)
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = stream.read(&mut chunk).expect("read request");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            let head = String::from_utf8_lossy(&buf[..pos]).to_lowercase();
            let len = head
                .lines()
                .find_map(|l| l.strip_prefix("content-length:"))
                .and_then(|v| v.trim().parse::<usize>().ok())
                .unwrap_or(0);
            if buf.len() >= pos + 4 + len {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buf).into_owned()
}
