//! HTTP Remote Store
//!
//! reqwest-backed implementation of the remote data service contract.
//! Bill operations carry the session token as a bearer header; a 404
//! answer is mapped to the dedicated not-found error so the login flow
//! can tell "unknown account" apart from other rejections.

use async_trait::async_trait;
use billed_core::domain::Bill;
use billed_core::session::{SessionStore, JWT_KEY};
use billed_core::store::{
    Credentials, FileUpload, LoginReceipt, NewUser, RemoteStore, StoreError, UploadReceipt,
};

use crate::session::BrowserSession;

pub struct HttpStore {
    base_url: String,
    client: reqwest::Client,
    session: BrowserSession,
}

impl HttpStore {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            session: BrowserSession,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the stored session token, when present
    fn authenticated(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.get_item(JWT_KEY) {
            Some(jwt) => builder.bearer_auth(jwt),
            None => builder,
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(StoreError::NotFound);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(response)
    }
}

#[async_trait(?Send)]
impl RemoteStore for HttpStore {
    async fn login(&self, credentials: &Credentials) -> Result<LoginReceipt, StoreError> {
        let response = self
            .client
            .post(self.url("/auth/login"))
            .json(credentials)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))
    }

    async fn create_user(&self, user: &NewUser) -> Result<(), StoreError> {
        let response = self
            .client
            .post(self.url("/users"))
            .json(user)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn create_bill(&self, upload: &FileUpload) -> Result<UploadReceipt, StoreError> {
        let mime = mime_guess::from_path(&upload.file_name).first_or_octet_stream();
        let part = reqwest::multipart::Part::bytes(upload.bytes.clone())
            .file_name(upload.file_name.clone())
            .mime_str(mime.as_ref())
            .map_err(|err| StoreError::Request(err.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("email", upload.email.clone());

        let response = self
            .authenticated(self.client.post(self.url("/bills")))
            .multipart(form)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))
    }

    async fn update_bill(&self, bill_id: &str, bill: &Bill) -> Result<(), StoreError> {
        let response = self
            .authenticated(
                self.client
                    .patch(self.url(&format!("/bills/{}", bill_id))),
            )
            .json(bill)
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError> {
        let response = self
            .authenticated(self.client.get(self.url("/bills")))
            .send()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))?;
        Self::check(response)
            .await?
            .json()
            .await
            .map_err(|err| StoreError::Request(err.to_string()))
    }
}
