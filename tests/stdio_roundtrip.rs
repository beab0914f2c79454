//! End-to-end tests: spawn the server binary and talk JSON-RPC over its stdio.

use serde_json::{Value, json};
use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};
use tempfile::TempDir;

struct RpcClient {
    child: Child,
    stdin: ChildStdin,
    stdout: BufReader<ChildStdout>,
    next_id: u64,
}

impl RpcClient {
    fn spawn(cwd: &Path) -> Self {
        let bin = env!("CARGO_BIN_EXE_fs-mcp-server");
        let mut child = Command::new(bin)
            .current_dir(cwd)
            .env("MCP_LOG_LEVEL", "error")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .expect("spawn fs-mcp-server");
        let stdin = child.stdin.take().expect("stdin");
        let stdout = child.stdout.take().expect("stdout");
        let mut client = Self {
            child,
            stdin,
            stdout: BufReader::new(stdout),
            next_id: 1,
        };
        client.initialize();
        client
    }

    fn initialize(&mut self) {
        let resp = self.send(
            "initialize",
            json!({
                "protocolVersion": "2024-11-05",
                "capabilities": {},
                "clientInfo": { "name": "stdio-roundtrip", "version": "0.0.0" }
            }),
        );
        assert_eq!(resp["result"]["serverInfo"]["name"], "fs");
        self.notify("notifications/initialized");
    }

    fn write_line(&mut self, msg: &Value) {
        let line = serde_json::to_string(msg).expect("serialize message");
        writeln!(self.stdin, "{}", line).expect("write message");
        self.stdin.flush().expect("flush message");
    }

    fn notify(&mut self, method: &str) {
        self.write_line(&json!({ "jsonrpc": "2.0", "method": method }));
    }

    fn send(&mut self, method: &str, params: Value) -> Value {
        let id = self.next_id;
        self.next_id += 1;
        self.write_line(&json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params
        }));

        let mut line = String::new();
        loop {
            line.clear();
            let bytes = self.stdout.read_line(&mut line).expect("read response");
            if bytes == 0 {
                panic!("fs-mcp-server exited unexpectedly");
            }
            let Ok(parsed) = serde_json::from_str::<Value>(line.trim()) else {
                continue;
            };
            if parsed.get("id").and_then(Value::as_u64) == Some(id) {
                return parsed;
            }
        }
    }

    fn call(&mut self, name: &str, arguments: Value) -> String {
        let resp = self.send("tools/call", json!({ "name": name, "arguments": arguments }));
        assert!(resp.get("error").is_none(), "unexpected error: {resp}");
        let content = resp["result"]["content"].as_array().expect("content");
        assert_eq!(content.len(), 1);
        assert_eq!(content[0]["type"], "text");
        content[0]["text"].as_str().expect("text").to_string()
    }
}

impl Drop for RpcClient {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

#[test]
fn test_tools_list_advertises_catalogue() {
    let temp_dir = TempDir::new().unwrap();
    let mut client = RpcClient::spawn(temp_dir.path());

    let resp = client.send("tools/list", json!({}));
    let tools = resp["result"]["tools"].as_array().expect("tools");

    let names: Vec<_> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["list_files", "read_file", "write_file"]);

    let write = &tools[2];
    assert_eq!(write["title"], "Write File");
    assert!(write["inputSchema"]["properties"]["content"].is_object());
}

#[test]
fn test_write_read_list_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let mut client = RpcClient::spawn(temp_dir.path());

    let written = client.call("write_file", json!({ "path": "a.txt", "content": "hello" }));
    assert_eq!(written, "Successfully wrote to a.txt");
    assert_eq!(fs::read_to_string(temp_dir.path().join("a.txt")).unwrap(), "hello");

    assert_eq!(client.call("read_file", json!({ "path": "a.txt" })), "hello");

    let listing = client.call("list_files", json!({}));
    let entries: Value = serde_json::from_str(&listing).unwrap();
    assert_eq!(
        entries,
        json!([{ "name": "a.txt", "isDirectory": false, "isFile": true, "isSymbolicLink": false }])
    );
}

#[test]
fn test_failures_are_text_responses() {
    let temp_dir = TempDir::new().unwrap();
    let mut client = RpcClient::spawn(temp_dir.path());

    let missing = client.call("read_file", json!({ "path": "missing.txt" }));
    assert!(missing.starts_with("Error reading file:"), "{missing}");

    let invalid = client.call("write_file", json!({ "path": "b.txt" }));
    assert!(invalid.starts_with("Invalid arguments for tool 'write_file'"), "{invalid}");
    assert!(!temp_dir.path().join("b.txt").exists());

    let unknown = client.call("delete_file", json!({ "path": "a.txt" }));
    assert_eq!(unknown, "Tool not found: delete_file");

    // The connection is still usable afterwards.
    assert_eq!(
        client.call("write_file", json!({ "path": "c.txt", "content": "" })),
        "Successfully wrote to c.txt"
    );
}

#[test]
fn test_closed_stdin_exits_non_zero() {
    let status = Command::new(env!("CARGO_BIN_EXE_fs-mcp-server"))
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .expect("run fs-mcp-server");

    assert!(!status.success());
}
