use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::ClientError;
use crate::models::booking::{BookingCreated, BookingRequest, Order};
use crate::models::user::{AuthResponse, Credentials, Registration};

#[derive(Debug, serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        // cookie store carries the backend session cookie across calls
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .build()
            .map_err(|err| ClientError::Request(format!("failed to build http client: {err}")))?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub async fn create_booking(
        &self,
        request: &BookingRequest,
    ) -> Result<BookingCreated, ClientError> {
        self.post("/bookings", request).await
    }

    pub async fn get_booking(&self, order_id: &str) -> Result<Order, ClientError> {
        self.get(&format!("/bookings/{order_id}")).await
    }

    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse, ClientError> {
        self.post("/auth/login", credentials).await
    }

    pub async fn register(&self, registration: &Registration) -> Result<AuthResponse, ClientError> {
        self.post("/auth/register", registration).await
    }

    pub async fn logout(&self) -> Result<(), ClientError> {
        let _: serde_json::Value = self.post("/auth/logout", &serde_json::json!({})).await?;
        Ok(())
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let response = self
            .http
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .map_err(|err| network_error(path, err))?;

        parse_response(path, response).await
    }

    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let response = self
            .http
            .post(format!("{}{path}", self.base_url))
            .json(body)
            .send()
            .await
            .map_err(|err| network_error(path, err))?;

        parse_response(path, response).await
    }
}

fn network_error(path: &str, err: reqwest::Error) -> ClientError {
    tracing::error!(path, error = %err, "api request failed");
    ClientError::Request(format!("network error: {err}"))
}

async fn parse_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|err| {
            tracing::error!(path, error = %err, "api response body was not valid json");
            ClientError::Request(format!("invalid response body: {err}"))
        });
    }

    let message = server_message(response, status).await;
    tracing::error!(path, %status, error = %message, "api request failed");
    Err(ClientError::Request(message))
}

async fn server_message(response: reqwest::Response, status: StatusCode) -> String {
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody {
            message: Some(message),
        }) => message,
        _ => format!("request failed with status {status}"),
    }
}
