use super::{ApiError, Backend, StudentPayload};
use crate::model::Student;
use serde::de::DeserializeOwned;
use url::Url;

/// Blocking REST client for the student backend. Endpoints hang off a
/// normalized base URL: `GET/POST {base}/students`,
/// `GET/PUT/DELETE {base}/students/{id}`.
pub struct HttpBackend {
    base_url: Url,
    agent: ureq::Agent,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let base_url = normalize_base_url(base_url.into())?;
        Ok(Self {
            base_url,
            agent: ureq::AgentBuilder::new().build(),
        })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::BadBaseUrl(e.to_string()))
    }

    fn send(
        &self,
        method: &str,
        url: &Url,
        body: Option<&StudentPayload>,
    ) -> Result<ureq::Response, ApiError> {
        let request = self
            .agent
            .request(method, url.as_str())
            .set("Accept", "application/json");

        let response = match body {
            None => request.call(),
            Some(payload) => {
                let text = serde_json::to_string(payload)?;
                request
                    .set("Content-Type", "application/json")
                    .send_string(&text)
            }
        };

        match response {
            Ok(resp) => Ok(resp),
            Err(ureq::Error::Status(status, resp)) => Err(status_error(status, resp)),
            Err(ureq::Error::Transport(err)) => Err(ApiError::Transport(err.to_string())),
        }
    }

    fn request_json<R>(
        &self,
        method: &str,
        url: &Url,
        body: Option<&StudentPayload>,
    ) -> Result<R, ApiError>
    where
        R: DeserializeOwned,
    {
        let resp = self.send(method, url, body)?;
        read_json_response(resp)
    }
}

impl Backend for HttpBackend {
    fn list(&self) -> Result<Vec<Student>, ApiError> {
        let url = self.endpoint("students")?;
        self.request_json("GET", &url, None)
    }

    fn get(&self, id: i64) -> Result<Student, ApiError> {
        let url = self.endpoint(&format!("students/{id}"))?;
        self.request_json("GET", &url, None)
    }

    fn create(&self, payload: &StudentPayload) -> Result<Student, ApiError> {
        let url = self.endpoint("students")?;
        self.request_json("POST", &url, Some(payload))
    }

    fn update(&self, id: i64, payload: &StudentPayload) -> Result<Student, ApiError> {
        let url = self.endpoint(&format!("students/{id}"))?;
        self.request_json("PUT", &url, Some(payload))
    }

    fn delete(&self, id: i64) -> Result<(), ApiError> {
        let url = self.endpoint(&format!("students/{id}"))?;
        // 204, body (if any) is discarded.
        let _ = self.send("DELETE", &url, None)?;
        Ok(())
    }

    fn describe(&self) -> String {
        self.base_url.as_str().to_string()
    }
}

/// Parse and ensure a trailing slash so `Url::join` appends instead of
/// replacing the last path segment.
fn normalize_base_url(raw: String) -> Result<Url, ApiError> {
    let mut url = Url::parse(raw.trim()).map_err(|e| ApiError::BadBaseUrl(e.to_string()))?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn read_json_response<R>(response: ureq::Response) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let body = response
        .into_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    Ok(serde_json::from_str(&body)?)
}

fn status_error(status: u16, response: ureq::Response) -> ApiError {
    let message = response.into_string().unwrap_or_default();
    ApiError::Status { status, message }
}
