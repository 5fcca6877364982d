use tokio::sync::watch;
use tracing::{debug, error};

use crate::client::api::{ClientError, Record, RecordApi};
use crate::client::state::StateContainer;
use crate::model::employee::{Employee, EmployeeStatistics};
use crate::model::visitor::{Visitor, VisitorStatistics};

#[derive(Debug, Clone, PartialEq)]
pub struct ClientState<R> {
    pub records: Vec<R>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<R> Default for ClientState<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            error: None,
        }
    }
}

/// Client-side cache of one collection. The local list only changes after
/// the server has confirmed the write.
pub struct ClientStore<A: RecordApi> {
    api: A,
    state: StateContainer<ClientState<A::Record>>,
}

impl<A: RecordApi> ClientStore<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: StateContainer::default(),
        }
    }

    pub fn snapshot(&self) -> ClientState<A::Record> {
        self.state.get()
    }

    pub fn records(&self) -> Vec<A::Record> {
        self.state.get().records
    }

    pub fn subscribe(&self) -> watch::Receiver<ClientState<A::Record>> {
        self.state.subscribe()
    }

    fn fail(&self, action: &str, e: ClientError) -> ClientError {
        error!(error = %e, action, "Client store request failed");
        let message = e.to_string();
        self.state.update(|s| {
            s.loading = false;
            s.error = Some(message);
        });
        e
    }

    /// Replaces the cached list with the server's.
    pub async fn fetch(&self) -> Result<(), ClientError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match self.api.list().await {
            Ok(records) => {
                debug!(count = records.len(), "Fetched records");
                self.state.update(|s| {
                    s.records = records;
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => Err(self.fail("fetch", e)),
        }
    }

    pub async fn add(&self, input: &A::Input) -> Result<A::Record, ClientError> {
        self.state.update(|s| s.error = None);

        let record = self
            .api
            .create(input)
            .await
            .map_err(|e| self.fail("add", e))?;
        let added = record.clone();
        self.state.update(|s| s.records.insert(0, added));
        Ok(record)
    }

    pub async fn update(&self, id: u64, input: &A::Input) -> Result<A::Record, ClientError> {
        self.state.update(|s| s.error = None);

        let record = self
            .api
            .update(id, input)
            .await
            .map_err(|e| self.fail("update", e))?;
        let updated = record.clone();
        self.state.update(|s| {
            for existing in s.records.iter_mut().filter(|r| r.record_id() == id) {
                *existing = updated.clone();
            }
        });
        Ok(record)
    }

    pub async fn remove(&self, id: u64) -> Result<(), ClientError> {
        self.state.update(|s| s.error = None);

        self.api
            .delete(id)
            .await
            .map_err(|e| self.fail("remove", e))?;
        self.state
            .update(|s| s.records.retain(|r| r.record_id() != id));
        Ok(())
    }
}

impl<A: RecordApi<Record = Employee>> ClientStore<A> {
    pub fn statistics(&self) -> EmployeeStatistics {
        EmployeeStatistics::from_records(&self.state.get().records)
    }
}

impl<A: RecordApi<Record = Visitor>> ClientStore<A> {
    pub fn visitor_statistics(&self) -> VisitorStatistics {
        VisitorStatistics::from_records(&self.state.get().records)
    }
}
