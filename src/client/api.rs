use std::marker::PhantomData;

use async_trait::async_trait;
use derive_more::Display;
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::MessageResponse;
use crate::model::employee::{Employee, EmployeeInput};
use crate::model::visitor::{Visitor, VisitorInput};

#[derive(Debug, Display)]
pub enum ClientError {
    /// The request never produced a response (connection, decoding, ...).
    #[display(fmt = "{}", _0)]
    Http(reqwest::Error),

    /// The server answered with an error status and a `{message}` body.
    #[display(fmt = "{} ({})", message, status)]
    Server { status: u16, message: String },
}

impl std::error::Error for ClientError {}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Http(e)
    }
}

/// A record the server identifies by a numeric key.
pub trait Record: Clone + DeserializeOwned + Send + Sync + 'static {
    fn record_id(&self) -> u64;
}

impl Record for Employee {
    fn record_id(&self) -> u64 {
        self.num_emp
    }
}

impl Record for Visitor {
    fn record_id(&self) -> u64 {
        self.id
    }
}

#[async_trait]
pub trait RecordApi: Send + Sync {
    type Record: Record;
    type Input: Serialize + Send + Sync;

    async fn list(&self) -> Result<Vec<Self::Record>, ClientError>;
    async fn create(&self, input: &Self::Input) -> Result<Self::Record, ClientError>;
    async fn update(&self, id: u64, input: &Self::Input) -> Result<Self::Record, ClientError>;
    async fn delete(&self, id: u64) -> Result<(), ClientError>;
}

/// REST client for one collection, e.g. `http://localhost:3000/api/employees`.
pub struct HttpRecordApi<R, I> {
    http: Client,
    collection_url: String,
    _types: PhantomData<fn() -> (R, I)>,
}

impl<R, I> HttpRecordApi<R, I> {
    pub fn new(http: Client, collection_url: impl Into<String>) -> Self {
        Self {
            http,
            collection_url: collection_url.into().trim_end_matches('/').to_string(),
            _types: PhantomData,
        }
    }

    fn item_url(&self, id: u64) -> String {
        format!("{}/{}", self.collection_url, id)
    }
}

pub type EmployeeApi = HttpRecordApi<Employee, EmployeeInput>;
pub type VisitorApi = HttpRecordApi<Visitor, VisitorInput>;

impl EmployeeApi {
    /// `api_base` is the server's API root, e.g. `http://localhost:3000/api`.
    pub fn employees(http: Client, api_base: &str) -> Self {
        Self::new(http, format!("{}/employees", api_base.trim_end_matches('/')))
    }
}

impl VisitorApi {
    pub fn visitors(http: Client, api_base: &str) -> Self {
        Self::new(http, format!("{}/visitors", api_base.trim_end_matches('/')))
    }
}

/// Maps non-2xx answers to `ClientError::Server` carrying the body message.
async fn check(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<MessageResponse>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unexpected response")
            .to_string(),
    };
    Err(ClientError::Server {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl<R, I> RecordApi for HttpRecordApi<R, I>
where
    R: Record,
    I: Serialize + Send + Sync,
{
    type Record = R;
    type Input = I;

    async fn list(&self) -> Result<Vec<R>, ClientError> {
        let response = self.http.get(&self.collection_url).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, input: &I) -> Result<R, ClientError> {
        let response = self
            .http
            .post(&self.collection_url)
            .json(input)
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, id: u64, input: &I) -> Result<R, ClientError> {
        let response = self.http.put(self.item_url(id)).json(input).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete(&self, id: u64) -> Result<(), ClientError> {
        let response = self.http.delete(self.item_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}
