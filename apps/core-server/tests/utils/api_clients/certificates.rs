use reqwest::multipart::{Form, Part};
use serde_json::{Value, json};

use super::{HttpClient, Response};

pub struct CertificatesApi {
    client: HttpClient,
}

impl CertificatesApi {
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    pub async fn upload(&self, file_name: &str, content: Vec<u8>, password: &str) -> Response {
        let part = Part::bytes(content)
            .file_name(file_name.to_owned())
            .mime_str("application/x-pkcs12")
            .unwrap();
        let form = Form::new()
            .part("certificate", part)
            .text("password", password.to_owned());

        self.client
            .post_multipart("/api/certificate/v1", form)
            .await
    }

    pub async fn list(&self) -> Response {
        self.client.get("/api/certificate/v1").await
    }

    pub async fn get(&self, id: &str) -> Response {
        self.client.get(&format!("/api/certificate/v1/{id}")).await
    }

    pub async fn delete(&self, id: &str) -> Response {
        self.client
            .delete(&format!("/api/certificate/v1/{id}"))
            .await
    }

    pub async fn generate(&self, body: Value) -> Response {
        self.client.post("/api/certificate/v1/generate", body).await
    }

    pub async fn validate_password(&self, id: &str, password: &str) -> Response {
        self.client
            .post(
                &format!("/api/certificate/v1/{id}/validate-password"),
                json!({ "password": password }),
            )
            .await
    }
}
