//! The backend checks, run in a fixed order against `<backend>/api`.

use crate::env_file::api_base;
use crate::report::{Report, RULE};
use crate::{Error, Result};
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};
use std::time::Duration;

/// `client_name` used by the create/list checks.
pub const TEST_CLIENT_NAME: &str = "Buddhist_Character_App_Test";

const CONNECTIVITY: &str = "Basic Connectivity";
const CORS: &str = "CORS Configuration";
const POST_STATUS: &str = "POST Status";
const GET_STATUS: &str = "GET Status";
const PERSISTENCE: &str = "Database Persistence";

/// Knobs for a probe run.
#[derive(Debug, Clone)]
pub struct ProbeOptions {
    /// Per-request timeout.
    pub timeout: Duration,
    /// Pause between writing and reading back the persistence record.
    pub persistence_delay: Duration,
}

impl Default for ProbeOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            persistence_delay: Duration::from_secs(1),
        }
    }
}

pub struct BackendTester {
    api_base: String,
    client: Client,
    options: ProbeOptions,
    report: Report,
}

impl BackendTester {
    pub fn new(backend_url: &str, options: ProbeOptions) -> Result<Self> {
        let client = Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| Error::Client(e.to_string()))?;

        let api_base = api_base(backend_url);
        println!("🔗 Testing backend at: {}", api_base);
        println!("{}", RULE);

        Ok(Self {
            api_base,
            client,
            options,
            report: Report::new(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    pub fn report(&self) -> &Report {
        &self.report
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    /// Status plus body text, for failure messages.
    async fn describe(response: reqwest::Response) -> String {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        format!("HTTP {}: {}", status, body)
    }

    pub async fn test_basic_connectivity(&mut self) -> bool {
        println!("\n🔍 Testing Basic API Connectivity...");

        let response = match self.client.get(self.url("/")).send().await {
            Ok(response) => response,
            Err(e) => {
                self.report.fail(CONNECTIVITY, format!("Connection error: {}", e));
                return false;
            }
        };

        if response.status() != StatusCode::OK {
            let message = Self::describe(response).await;
            self.report.fail(CONNECTIVITY, message);
            return false;
        }

        match response.json::<Value>().await {
            Ok(data) if data.get("message").and_then(Value::as_str) == Some("Hello World") => {
                self.report.pass(CONNECTIVITY, "API root endpoint responding correctly");
                true
            }
            Ok(data) => {
                self.report.fail(CONNECTIVITY, format!("Unexpected response: {}", data));
                false
            }
            Err(e) => {
                self.report.fail(CONNECTIVITY, format!("Unexpected response: {}", e));
                false
            }
        }
    }

    pub async fn test_cors_configuration(&mut self) -> bool {
        println!("\n🔍 Testing CORS Configuration...");

        let result = self
            .client
            .request(Method::OPTIONS, self.url("/status"))
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "Content-Type")
            .send()
            .await;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                self.report.fail(CORS, format!("CORS test error: {}", e));
                return false;
            }
        };

        let header = |name: &str| {
            response
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let allow_origin = header("Access-Control-Allow-Origin");

        if allow_origin.as_deref() == Some("*") {
            self.report.pass(CORS, "CORS properly configured with wildcard origin");
            true
        } else {
            let headers = json!({
                "Access-Control-Allow-Origin": allow_origin,
                "Access-Control-Allow-Methods": header("Access-Control-Allow-Methods"),
                "Access-Control-Allow-Headers": header("Access-Control-Allow-Headers"),
            });
            self.report.fail(CORS, format!("CORS headers: {}", headers));
            false
        }
    }

    async fn create_status(&self, client_name: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .post(self.url("/status"))
            .json(&json!({ "client_name": client_name }))
            .send()
            .await
    }

    async fn list_status(&self) -> std::result::Result<reqwest::Response, reqwest::Error> {
        self.client.get(self.url("/status")).send().await
    }

    /// Create the fixture record; returns its id on success.
    pub async fn test_status_post_endpoint(&mut self) -> Option<String> {
        println!("\n🔍 Testing POST /api/status endpoint...");

        let response = match self.create_status(TEST_CLIENT_NAME).await {
            Ok(response) => response,
            Err(e) => {
                self.report.fail(POST_STATUS, format!("Request error: {}", e));
                return None;
            }
        };

        if response.status() != StatusCode::OK {
            let message = Self::describe(response).await;
            self.report.fail(POST_STATUS, message);
            return None;
        }

        let data = match response.json::<Value>().await {
            Ok(data) => data,
            Err(e) => {
                self.report.fail(POST_STATUS, format!("Request error: {}", e));
                return None;
            }
        };

        let has_fields = ["id", "client_name", "timestamp"]
            .iter()
            .all(|field| data.get(field).is_some());
        if !has_fields {
            self.report
                .fail(POST_STATUS, format!("Missing required fields in response: {}", data));
            return None;
        }

        if data["client_name"] != TEST_CLIENT_NAME {
            self.report
                .fail(POST_STATUS, format!("Client name mismatch: {}", data["client_name"]));
            return None;
        }

        let id = id_string(&data["id"]);
        self.report.record(
            POST_STATUS,
            true,
            "Status check created successfully",
            Some(format!("ID: {}", id)),
        );
        Some(id)
    }

    pub async fn test_status_get_endpoint(&mut self) -> bool {
        println!("\n🔍 Testing GET /api/status endpoint...");

        let response = match self.list_status().await {
            Ok(response) => response,
            Err(e) => {
                self.report.fail(GET_STATUS, format!("Request error: {}", e));
                return false;
            }
        };

        if response.status() != StatusCode::OK {
            let message = Self::describe(response).await;
            self.report.fail(GET_STATUS, message);
            return false;
        }

        let data = match response.json::<Value>().await {
            Ok(data) => data,
            Err(e) => {
                self.report.fail(GET_STATUS, format!("Request error: {}", e));
                return false;
            }
        };

        let Some(records) = data.as_array() else {
            self.report
                .fail(GET_STATUS, format!("Expected list, got: {}", json_type(&data)));
            return false;
        };

        let message = if records.is_empty() {
            "Retrieved empty status checks list".to_string()
        } else if records
            .iter()
            .any(|r| r.get("client_name").and_then(Value::as_str) == Some(TEST_CLIENT_NAME))
        {
            format!("Retrieved {} status checks, including test record", records.len())
        } else {
            format!("Retrieved {} status checks (test record not found)", records.len())
        };
        self.report.pass(GET_STATUS, message);
        true
    }

    pub async fn test_database_persistence(&mut self) -> bool {
        println!("\n🔍 Testing Database Persistence...");

        let timestamp = chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f");
        let client_name = format!("DB_Test_{}", timestamp);

        let created = match self.create_status(&client_name).await {
            Ok(response) if response.status() == StatusCode::OK => response.json::<Value>().await,
            Ok(response) => {
                self.report.fail(
                    PERSISTENCE,
                    format!("Failed to create test record: {}", response.status().as_u16()),
                );
                return false;
            }
            Err(e) => {
                self.report.fail(PERSISTENCE, format!("Database test error: {}", e));
                return false;
            }
        };
        let record_id = match created {
            Ok(record) => record.get("id").cloned().unwrap_or(Value::Null),
            Err(e) => {
                self.report.fail(PERSISTENCE, format!("Database test error: {}", e));
                return false;
            }
        };

        tokio::time::sleep(self.options.persistence_delay).await;

        let records = match self.list_status().await {
            Ok(response) if response.status() == StatusCode::OK => response.json::<Value>().await,
            Ok(response) => {
                self.report.fail(
                    PERSISTENCE,
                    format!("Failed to retrieve records: {}", response.status().as_u16()),
                );
                return false;
            }
            Err(e) => {
                self.report.fail(PERSISTENCE, format!("Database test error: {}", e));
                return false;
            }
        };
        let records = match records {
            Ok(records) => records,
            Err(e) => {
                self.report.fail(PERSISTENCE, format!("Database test error: {}", e));
                return false;
            }
        };

        let found = !record_id.is_null()
            && records
                .as_array()
                .is_some_and(|list| list.iter().any(|r| r.get("id") == Some(&record_id)));

        let id = id_string(&record_id);
        if found {
            self.report
                .pass(PERSISTENCE, format!("Record persisted successfully (ID: {})", id));
            true
        } else {
            self.report.fail(
                PERSISTENCE,
                format!("Created record not found in database (ID: {})", id),
            );
            false
        }
    }

    /// Run every check; stops after connectivity if the API is unreachable.
    pub async fn run_all(&mut self) -> bool {
        println!("🚀 Starting Backend API Tests for Buddhist Character App");
        println!("⏰ Test started at: {}", chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"));

        if !self.test_basic_connectivity().await {
            println!("\n❌ Basic connectivity failed. Stopping tests.");
            return self.report.summary();
        }

        self.test_cors_configuration().await;
        self.test_status_post_endpoint().await;
        self.test_status_get_endpoint().await;
        self.test_database_persistence().await;

        self.report.summary()
    }
}

/// Ids are strings in practice, but print whatever the server sent.
fn id_string(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}
