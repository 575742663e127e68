//! RestStore: `IRecordStore` over PostgREST.

use onemfin_core::config::StoreConfig;
use onemfin_core::constants::{FORMS_TABLE, NOTIFICATIONS_TABLE, SUBMISSIONS_TABLE, USERS_TABLE};
use onemfin_core::errors::{OnemfinResult, StoreError, StoreResult};
use onemfin_core::models::{
    AssessmentForm, AssessmentSubmission, NewNotification, Notification, User,
};
use onemfin_core::traits::IRecordStore;
use serde_json::json;

use crate::transport::{HttpClient, HttpClientConfig, TableQuery};

const USER_COLUMNS: &str = "id,clerk_id,full_name,email,assessment_link";
const FORM_COLUMNS: &str = "id,user_id,name,is_active";
const SUBMISSION_COLUMNS: &str =
    "id,assessment_id,lead_id,framework_version_id,answers,result,submitted_at,status";
const NOTIFICATION_COLUMNS: &str =
    "id,user_id,type,title,message,priority,is_read,data,created_at";

/// The hosted-store adapter.
#[derive(Debug)]
pub struct RestStore {
    client: HttpClient,
}

impl RestStore {
    pub fn new(config: HttpClientConfig) -> StoreResult<Self> {
        Ok(Self {
            client: HttpClient::new(config)?,
        })
    }

    /// Build from the `[store]` config section. Fails with a config error when
    /// the URL or key is missing, before any request is made.
    pub fn from_config(store: &StoreConfig) -> OnemfinResult<Self> {
        let config = HttpClientConfig::from_store_config(store)?;
        Ok(Self::new(config)?)
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn users_query() -> TableQuery {
        TableQuery::new(USERS_TABLE).select(USER_COLUMNS)
    }

    pub fn forms_query() -> TableQuery {
        TableQuery::new(FORMS_TABLE).select(FORM_COLUMNS)
    }

    pub fn submissions_query(lead_id: Option<&str>) -> TableQuery {
        let q = TableQuery::new(SUBMISSIONS_TABLE).select(SUBMISSION_COLUMNS);
        match lead_id {
            Some(lead) => q.eq("lead_id", lead),
            None => q,
        }
    }

    pub fn notifications_query(user_id: &str) -> TableQuery {
        TableQuery::new(NOTIFICATIONS_TABLE)
            .select(NOTIFICATION_COLUMNS)
            .eq("user_id", user_id)
            .order_asc("created_at")
    }

    fn fetch<T: serde::de::DeserializeOwned>(&self, query: &TableQuery) -> StoreResult<Vec<T>> {
        let request = self.client.build_get(query)?;
        self.client.execute(query.table(), request)
    }
}

impl IRecordStore for RestStore {
    fn fetch_users(&self) -> StoreResult<Vec<User>> {
        self.fetch(&Self::users_query())
    }

    fn update_assessment_link(&self, user_id: &str, link: &str) -> StoreResult<User> {
        let query = TableQuery::new(USERS_TABLE)
            .select(USER_COLUMNS)
            .eq("id", user_id);
        let request = self
            .client
            .build_update(&query, &json!({ "assessment_link": link }))?;
        let rows: Vec<User> = self.client.execute(USERS_TABLE, request)?;
        rows.into_iter().next().ok_or_else(|| StoreError::NotFound {
            table: USERS_TABLE.to_string(),
            id: user_id.to_string(),
        })
    }

    fn fetch_forms(&self) -> StoreResult<Vec<AssessmentForm>> {
        self.fetch(&Self::forms_query())
    }

    fn fetch_submissions(&self, lead_id: &str) -> StoreResult<Vec<AssessmentSubmission>> {
        self.fetch(&Self::submissions_query(Some(lead_id)))
    }

    fn fetch_all_submissions(&self) -> StoreResult<Vec<AssessmentSubmission>> {
        self.fetch(&Self::submissions_query(None))
    }

    fn insert_notification(&self, record: &NewNotification) -> StoreResult<Notification> {
        let request = self.client.build_insert(NOTIFICATIONS_TABLE, record)?;
        let rows: Vec<Notification> = self.client.execute(NOTIFICATIONS_TABLE, request)?;
        rows.into_iter()
            .next()
            .ok_or_else(|| StoreError::MalformedResponse {
                table: NOTIFICATIONS_TABLE.to_string(),
                reason: "insert returned no representation".to_string(),
            })
    }

    fn fetch_notifications(&self, user_id: &str) -> StoreResult<Vec<Notification>> {
        self.fetch(&Self::notifications_query(user_id))
    }
}
