use reqwest::multipart::{Form, Part};
use serde_json::Value;

use super::{HttpClient, Response};

pub struct DocumentsApi {
    client: HttpClient,
}

impl DocumentsApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, file_name: &str, mime_type: &str, content: Vec<u8>) -> Response {
        let part = Part::bytes(content)
            .file_name(file_name.to_owned())
            .mime_str(mime_type)
            .unwrap();

        self.client
            .post_multipart("/api/document/v1", Form::new().part("document", part))
            .await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/document/v1").await
    }

    pub async fn get(&self, id: &str) -> Response {
        self.client.get(&format!("/api/document/v1/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> Response {
        self.client.delete(&format!("/api/document/v1/{id}")).await
    }

    pub async fn sign(&self, id: &str, body: Value) -> Response {
        self.client
            .post(&format!("/api/document/v1/{id}/sign"), body)
            .await
    }

    pub async fn signed(&self, id: &str) -> Response {
        self.client
            .get(&format!("/api/document/v1/{id}/signed"))
            .await
    }
}
