use std::sync::OnceLock;

use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared_types::UserId;

use self::certificates::CertificatesApi;
use self::documents::DocumentsApi;

pub mod certificates;
pub mod documents;

pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| reqwest::ClientBuilder::new().build().unwrap())
}

#[derive(Clone)]
pub struct HttpClient {
    base_url: String,
    token: String,
    user_id: UserId,
}

impl HttpClient {
    fn request(&self, method: reqwest::Method, url: &str) -> reqwest::RequestBuilder {
        http_client()
            .request(method, format!("{}{url}", self.base_url))
            .bearer_auth(&self.token)
            .header("X-User-Id", self.user_id.to_string())
    }

    pub async fn get(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::GET, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post(&self, url: &str, body: impl Into<Option<Value>>) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .json(&body.into())
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn post_multipart(&self, url: &str, form: Form) -> Response {
        let resp = self
            .request(reqwest::Method::POST, url)
            .multipart(form)
            .send()
            .await
            .unwrap();

        Response { resp }
    }

    pub async fn delete(&self, url: &str) -> Response {
        let resp = self
            .request(reqwest::Method::DELETE, url)
            .send()
            .await
            .unwrap();

        Response { resp }
    }
}

pub struct Response {
    resp: reqwest::Response,
}

impl Response {
    pub fn status(&self) -> u16 {
        self.resp.status().into()
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resp
            .headers()
            .get(name)
            .map(|value| value.to_str().unwrap().to_owned())
    }

    pub async fn bytes(self) -> Vec<u8> {
        self.resp.bytes().await.unwrap().to_vec()
    }

    pub async fn json<T: DeserializeOwned>(self) -> T {
        let full = self.resp.bytes().await.unwrap();
        serde_json::from_slice(&full).unwrap()
    }

    pub async fn json_value(self) -> Value {
        self.json().await
    }

    pub async fn error_code(self) -> String {
        let body = self.json_value().await;
        body["code"].as_str().unwrap().to_owned()
    }
}

pub struct Client {
    pub user_id: UserId,
    pub certificates: CertificatesApi,
    pub documents: DocumentsApi,
}

impl Client {
    pub fn new(base_url: String, token: String, user_id: UserId) -> Self {
        let client = HttpClient {
            base_url,
            token,
            user_id,
        };

        Self {
            user_id,
            certificates: CertificatesApi::new(client.clone()),
            documents: DocumentsApi::new(client),
        }
    }
}
